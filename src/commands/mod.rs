//! Commands module - CLI command implementations.
//!
//! Each console page is implemented in its own module. Every command
//! builds the service stack from configuration, performs its calls and
//! renders plain text; errors bubble up to `main` for display.

pub mod contributions;
pub mod dashboard;
pub mod distributions;
pub mod forms;
pub mod login;
pub mod logout;
pub mod reports;
pub mod review;
pub mod schools;
pub mod transfers;
pub mod trash;
pub mod users;

use crate::cli::args::ListArgs;
use crate::errors::{AppError, AppResult};
use crate::types::{Filter, ListQuery};

/// Turn the shared `--search`/`--filter`/`--page` options into a query,
/// resolving each `field=value` filter against the fields the entity
/// kind supports.
pub(crate) fn build_query<T>(
    args: ListArgs,
    filter_fields: Vec<(&'static str, fn(&T) -> String)>,
) -> AppResult<ListQuery<T>> {
    let mut query = ListQuery::new().page(args.page);
    if let Some(term) = args.search {
        query = query.term(term);
    }

    for raw in args.filter {
        let (field, value) = raw.split_once('=').ok_or_else(|| {
            AppError::validation(format!("Filter '{}' must look like field=value.", raw))
        })?;
        let &(name, accessor) = filter_fields
            .iter()
            .find(|(name, _)| *name == field)
            .ok_or_else(|| unknown_filter_field(field, &filter_fields))?;
        query = query.filter(Filter::new(name, accessor, value));
    }

    Ok(query)
}

fn unknown_filter_field<T>(
    field: &str,
    filter_fields: &[(&'static str, fn(&T) -> String)],
) -> AppError {
    if filter_fields.is_empty() {
        return AppError::validation(format!(
            "This view does not support filters (got '{}').",
            field
        ));
    }
    let allowed = filter_fields
        .iter()
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join(", ");
    AppError::validation(format!(
        "Unknown filter field '{}'. Supported: {}.",
        field, allowed
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        owner: String,
    }

    fn fields() -> Vec<(&'static str, fn(&Row) -> String)> {
        vec![("owner", |r: &Row| r.owner.clone())]
    }

    #[test]
    fn parses_filters_against_supported_fields() {
        let args = ListArgs {
            search: Some("term".to_string()),
            filter: vec!["owner=ACME".to_string()],
            page: 2,
        };
        let query = build_query(args, fields()).unwrap();
        assert_eq!(query.term, "term");
        assert_eq!(query.page, 2);
        assert_eq!(query.filters.len(), 1);
        assert_eq!(query.filters[0].field(), "owner");
    }

    #[test]
    fn rejects_unknown_and_malformed_filters() {
        let args = ListArgs {
            filter: vec!["donor=ACME".to_string()],
            ..Default::default()
        };
        let result = build_query(args, fields());
        assert!(matches!(result, Err(AppError::Validation(_))));

        let args = ListArgs {
            filter: vec!["owner".to_string()],
            ..Default::default()
        };
        let result = build_query(args, fields());
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
