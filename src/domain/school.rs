//! School domain entity and related types.

use serde::{Deserialize, Serialize};

use crate::config::UNKNOWN_LOCATION;
use crate::domain::lifecycle::{Lifecycle, SoftDeletable};
use crate::domain::wire;
use crate::types::QueryEngine;

/// School domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct School {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub district: String,
    #[serde(default)]
    pub sector: String,
    /// Running total of funds received through distributions
    #[serde(deserialize_with = "wire::amount", default)]
    pub total_received: f64,
    #[serde(flatten)]
    pub lifecycle: Lifecycle,
}

impl School {
    /// Query engine instance for school lists: free-text search runs
    /// over name, district and sector.
    pub fn query_engine() -> QueryEngine<School> {
        let fields: Vec<fn(&School) -> String> = vec![
            |s| s.name.clone(),
            |s| s.district.clone(),
            |s| s.sector.clone(),
        ];
        QueryEngine::new(fields)
    }

    /// Fields the school list accepts as exact-match `--filter`s.
    pub fn filter_fields() -> Vec<(&'static str, fn(&School) -> String)> {
        let fields: Vec<(&'static str, fn(&School) -> String)> = vec![
            ("district", |s| s.district.clone()),
            ("sector", |s| s.sector.clone()),
        ];
        fields
    }
}

impl SoftDeletable for School {
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

/// School creation payload
#[derive(Debug, Clone, Serialize)]
pub struct CreateSchool {
    pub name: String,
    pub district: String,
    pub sector: String,
}

impl CreateSchool {
    /// District and sector fall back to the "Unknown" placeholder when
    /// left blank, matching what the backend expects on creation.
    pub fn new(name: String, district: Option<String>, sector: Option<String>) -> Self {
        Self {
            name,
            district: non_blank_or_unknown(district),
            sector: non_blank_or_unknown(sector),
        }
    }
}

fn non_blank_or_unknown(value: Option<String>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => UNKNOWN_LOCATION.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_school_defaults_location_fields() {
        let school = CreateSchool::new("GS Kigali".to_string(), None, Some("  ".to_string()));
        assert_eq!(school.district, UNKNOWN_LOCATION);
        assert_eq!(school.sector, UNKNOWN_LOCATION);

        let school = CreateSchool::new(
            "GS Huye".to_string(),
            Some("Huye".to_string()),
            Some("Ngoma".to_string()),
        );
        assert_eq!(school.district, "Huye");
        assert_eq!(school.sector, "Ngoma");
    }

    #[test]
    fn total_received_accepts_string_amounts() {
        let school: School = serde_json::from_str(
            r#"{"id": 1, "name": "GS Kigali", "district": "Gasabo", "sector": "Remera", "total_received": "120000.00"}"#,
        )
        .unwrap();
        assert_eq!(school.total_received, 120000.0);
    }
}
