//! Contribution domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::wire;
use crate::types::QueryEngine;

/// Payment channels accepted for contributions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    /// Mobile money
    Momo,
    /// Bank card
    Bank,
}

impl PaymentMethod {
    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::Momo => "Mobile Money",
            PaymentMethod::Bank => "Bank Card",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentMethod::Momo => write!(f, "momo"),
            PaymentMethod::Bank => write!(f, "bank"),
        }
    }
}

/// Contribution domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contribution {
    pub id: i64,
    #[serde(default)]
    pub contributor_name: String,
    #[serde(deserialize_with = "wire::amount", default)]
    pub amount: f64,
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

impl Contribution {
    /// Contributor name for display; blank names render as "Anonymous".
    pub fn display_name(&self) -> &str {
        if self.contributor_name.trim().is_empty() {
            "Anonymous"
        } else {
            &self.contributor_name
        }
    }

    /// Query engine instance for contribution lists.
    pub fn query_engine() -> QueryEngine<Contribution> {
        let fields: Vec<fn(&Contribution) -> String> = vec![
            |c| c.contributor_name.clone(),
            |c| c.payment_method.to_string(),
        ];
        QueryEngine::new(fields)
    }

    /// Fields the contribution list accepts as exact-match `--filter`s.
    pub fn filter_fields() -> Vec<(&'static str, fn(&Contribution) -> String)> {
        let fields: Vec<(&'static str, fn(&Contribution) -> String)> =
            vec![("payment_method", |c| c.payment_method.to_string())];
        fields
    }
}

/// Contribution creation payload
#[derive(Debug, Clone, Serialize)]
pub struct CreateContribution {
    pub contributor_name: String,
    pub amount: f64,
    pub payment_method: PaymentMethod,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_contributor_renders_anonymous() {
        let contribution: Contribution = serde_json::from_str(
            r#"{"id": 1, "contributor_name": " ", "amount": 500, "payment_method": "momo"}"#,
        )
        .unwrap();
        assert_eq!(contribution.display_name(), "Anonymous");
    }
}
