//! Distribution domain entity and related types.
//!
//! A distribution is an outgoing allocation of funds from the program
//! to a specific school.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::lifecycle::{Lifecycle, SoftDeletable};
use crate::domain::wire;
use crate::types::QueryEngine;

/// Distribution domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Distribution {
    pub id: i64,
    /// Receiving school id
    #[serde(default)]
    pub school: Option<i64>,
    #[serde(default)]
    pub school_name: String,
    #[serde(deserialize_with = "wire::amount", default)]
    pub amount: f64,
    #[serde(default)]
    pub distributed_on: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub lifecycle: Lifecycle,
}

impl Distribution {
    /// Query engine instance for distribution lists.
    pub fn query_engine() -> QueryEngine<Distribution> {
        let fields: Vec<fn(&Distribution) -> String> = vec![|d| d.school_name.clone()];
        QueryEngine::new(fields)
    }

    /// Fields the distribution list accepts as exact-match `--filter`s.
    pub fn filter_fields() -> Vec<(&'static str, fn(&Distribution) -> String)> {
        let fields: Vec<(&'static str, fn(&Distribution) -> String)> =
            vec![("school_name", |d| d.school_name.clone())];
        fields
    }
}

impl SoftDeletable for Distribution {
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

/// Fund distribution payload
#[derive(Debug, Clone, Serialize)]
pub struct DistributeFunds {
    pub school: i64,
    pub amount: f64,
}
