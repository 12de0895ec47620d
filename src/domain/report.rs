//! Report domain types.
//!
//! Report file generation happens in the backend; the console requests
//! a generation, lists what exists and downloads the binary blob.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::wire;

/// A generated report as listed by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub date_generated: Option<DateTime<Utc>>,
    #[serde(default)]
    pub file_url: Option<String>,
}

/// Parameters for generating a new report
#[derive(Debug, Clone, Serialize)]
pub struct ReportRequest {
    pub report_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// One row of the per-school transaction summary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRow {
    pub school_name: String,
    #[serde(deserialize_with = "wire::amount", default)]
    pub total_contributions: f64,
    #[serde(deserialize_with = "wire::amount", default)]
    pub total_distributed: f64,
    #[serde(deserialize_with = "wire::amount", default)]
    pub balance: f64,
}

/// Optional date range for the transaction summary
#[derive(Debug, Clone, Default, Serialize)]
pub struct SummaryQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
}
