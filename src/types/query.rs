//! Client-side list query engine.
//!
//! Every list view fetches its full collection from the backend and
//! narrows it locally: a free-text term matched case-insensitively
//! against a fixed set of fields (an entity matches when ANY field
//! contains the term), zero or more exact-match filters (ANDed
//! together), and 1-based pagination at a fixed page size. The engine
//! never sorts; the server-determined order is preserved.
//!
//! One generic engine, parameterized by field accessors, replaces the
//! per-page copies of this logic. Entity kinds instantiate it next to
//! their domain type (e.g. [`crate::domain::Transfer::query_engine`]).

use crate::config::{DEFAULT_PAGE_NUMBER, PAGE_SIZE};
use crate::types::pagination::{Paginated, PaginationMeta};

/// Extracts one searchable/filterable text value from an entity.
pub type FieldAccessor<T> = fn(&T) -> String;

/// Exact-match predicate on a single field. An empty value matches
/// everything, mirroring an unset dropdown.
#[derive(Debug, Clone)]
pub struct Filter<T> {
    field: &'static str,
    accessor: FieldAccessor<T>,
    value: String,
}

impl<T> Filter<T> {
    pub fn new(field: &'static str, accessor: FieldAccessor<T>, value: impl Into<String>) -> Self {
        Self {
            field,
            accessor,
            value: value.into(),
        }
    }

    pub fn field(&self) -> &'static str {
        self.field
    }

    fn matches(&self, item: &T) -> bool {
        self.value.is_empty() || (self.accessor)(item) == self.value
    }
}

/// One committed query over a list view
#[derive(Debug, Clone)]
pub struct ListQuery<T> {
    pub term: String,
    pub filters: Vec<Filter<T>>,
    /// 1-based page number
    pub page: u64,
}

impl<T> Default for ListQuery<T> {
    fn default() -> Self {
        Self {
            term: String::new(),
            filters: Vec::new(),
            page: DEFAULT_PAGE_NUMBER,
        }
    }
}

impl<T> ListQuery<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn term(mut self, term: impl Into<String>) -> Self {
        self.term = term.into();
        self
    }

    pub fn filter(mut self, filter: Filter<T>) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn page(mut self, page: u64) -> Self {
        self.page = page;
        self
    }
}

/// Search/filter/paginate engine for one entity kind.
pub struct QueryEngine<T> {
    text_fields: Vec<FieldAccessor<T>>,
    page_size: u64,
}

impl<T> QueryEngine<T> {
    /// Build an engine searching the given text fields, at the standard
    /// page size.
    pub fn new(text_fields: Vec<FieldAccessor<T>>) -> Self {
        Self {
            text_fields,
            page_size: PAGE_SIZE,
        }
    }

    #[cfg(test)]
    pub fn with_page_size(mut self, page_size: u64) -> Self {
        self.page_size = page_size;
        self
    }

    /// Run a query against a fetched collection and slice out the
    /// requested page. A page past the end yields an empty slice, not
    /// an error. Relative order is the collection's own.
    pub fn page<'a>(&self, items: &'a [T], query: &ListQuery<T>) -> Paginated<'a, T> {
        let term = query.term.trim().to_lowercase();

        let mut matches: Vec<&'a T> = Vec::new();
        let mut first_match_index = None;
        for (index, item) in items.iter().enumerate() {
            if !self.matches_term(item, &term) {
                continue;
            }
            if !query.filters.iter().all(|f| f.matches(item)) {
                continue;
            }
            if first_match_index.is_none() {
                first_match_index = Some(index);
            }
            matches.push(item);
        }

        let total = matches.len() as u64;
        let mut meta = PaginationMeta::new(query.page, self.page_size, total);
        if !term.is_empty() {
            meta.first_match_page =
                first_match_index.map(|index| index as u64 / self.page_size + 1);
        }

        let start = (query.page.saturating_sub(1) * self.page_size) as usize;
        let items = if start >= matches.len() {
            Vec::new()
        } else {
            let end = (start + self.page_size as usize).min(matches.len());
            matches[start..end].to_vec()
        };

        Paginated { items, meta }
    }

    fn matches_term(&self, item: &T, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        self.text_fields
            .iter()
            .any(|field| field(item).to_lowercase().contains(term))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        code: String,
        owner: String,
    }

    fn rows(count: usize) -> Vec<Row> {
        (1..=count)
            .map(|i| Row {
                code: format!("R-{:03}", i),
                owner: if i % 2 == 0 { "even" } else { "odd" }.to_string(),
            })
            .collect()
    }

    fn engine() -> QueryEngine<Row> {
        let fields: Vec<FieldAccessor<Row>> = vec![|r| r.code.clone(), |r| r.owner.clone()];
        QueryEngine::new(fields)
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let data = rows(5);
        let result = engine().page(&data, &ListQuery::new().term("r-003"));
        assert_eq!(result.meta.total, 1);
        assert_eq!(result.items[0].code, "R-003");
    }

    #[test]
    fn first_match_page_points_into_unfiltered_list() {
        let data = rows(25);
        // R-023 sits at index 22 of the raw list: page 3 at size 10.
        let result = engine().page(&data, &ListQuery::new().term("R-023"));
        assert_eq!(result.meta.first_match_page, Some(3));

        // No term committed, no jump target.
        let result = engine().page(&data, &ListQuery::new());
        assert_eq!(result.meta.first_match_page, None);
    }

    #[test]
    fn page_size_override_is_honored() {
        let data = rows(7);
        let engine = engine().with_page_size(3);
        let result = engine.page(&data, &ListQuery::new().page(3));
        assert_eq!(result.items.len(), 1);
        assert_eq!(result.meta.total_pages, 3);
    }
}
