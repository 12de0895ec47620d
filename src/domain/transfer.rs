//! Transfer domain entity and related types.
//!
//! Transfers are recorded incoming fund movements. The backend has
//! shipped several field spellings over time (`Amount`, `amount`,
//! `Total_Amount`); the serde attributes below pin one canonical shape
//! so nothing downstream branches on wire variants.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::lifecycle::{Lifecycle, SoftDeletable};
use crate::domain::wire;
use crate::types::QueryEngine;

/// Lightweight school reference carried on transfers earmarked for
/// specific schools.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchoolRef {
    pub id: i64,
    pub name: String,
}

/// Transfer domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transfer {
    pub id: i64,
    #[serde(rename = "SchoolCode", alias = "school_code", default)]
    pub school_code: String,
    #[serde(rename = "Donor", alias = "donor", default)]
    pub donor: String,
    #[serde(
        rename = "Amount",
        alias = "amount",
        alias = "Total_Amount",
        deserialize_with = "wire::amount",
        default
    )]
    pub amount: f64,
    #[serde(default)]
    pub contribution_type: Option<String>,
    #[serde(rename = "AccountNumber", alias = "account_number", default)]
    pub account_number: Option<String>,
    #[serde(rename = "NumberOfTransactions", alias = "number_of_transactions", default)]
    pub number_of_transactions: u32,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    /// Single associated school name, when the backend denormalizes one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub school_name: Option<String>,
    /// Full earmarked school list, when the backend sends it
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub schools: Vec<SchoolRef>,
    #[serde(flatten)]
    pub lifecycle: Lifecycle,
}

impl Transfer {
    /// Display name(s) of the associated school(s), or "N/A".
    pub fn school_names(&self) -> String {
        if let Some(name) = &self.school_name {
            return name.clone();
        }
        if self.schools.is_empty() {
            return "N/A".to_string();
        }
        self.schools
            .iter()
            .map(|s| s.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Query engine instance for transfer lists: free-text search runs
    /// over school code, donor and associated school names.
    pub fn query_engine() -> QueryEngine<Transfer> {
        let fields: Vec<fn(&Transfer) -> String> = vec![
            |t| t.school_code.clone(),
            |t| t.donor.clone(),
            |t| t.school_names(),
        ];
        QueryEngine::new(fields)
    }

    /// Fields the transfer list accepts as exact-match `--filter`s.
    pub fn filter_fields() -> Vec<(&'static str, fn(&Transfer) -> String)> {
        let fields: Vec<(&'static str, fn(&Transfer) -> String)> = vec![
            ("donor", |t| t.donor.clone()),
            ("school_code", |t| t.school_code.clone()),
            ("contribution_type", |t| {
                t.contribution_type.clone().unwrap_or_default()
            }),
        ];
        fields
    }
}

impl SoftDeletable for Transfer {
    fn record_id(&self) -> i64 {
        self.id
    }

    fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    fn lifecycle_mut(&mut self) -> &mut Lifecycle {
        &mut self.lifecycle
    }
}

/// Transfer creation payload, serialized with the backend's field names.
#[derive(Debug, Clone, Serialize)]
pub struct CreateTransfer {
    #[serde(rename = "SchoolCode")]
    pub school_code: String,
    #[serde(rename = "Donor")]
    pub donor: String,
    #[serde(rename = "Amount")]
    pub amount: f64,
    pub contribution_type: String,
    #[serde(rename = "AccountNumber")]
    pub account_number: String,
    #[serde(rename = "NumberOfTransactions")]
    pub number_of_transactions: u32,
    pub timestamp: DateTime<Utc>,
    pub school_ids: Vec<i64>,
}

/// Outcome of a spreadsheet batch upload. The backend owns the file
/// parsing; we only relay its message.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UploadReceipt {
    #[serde(default)]
    pub message: Option<String>,
}
