//! Plain-text rendering helpers for the console output.
//!
//! Every list command prints through [`table`] and closes with
//! [`page_footer`], so the views stay visually consistent.

use chrono::{DateTime, Utc};

use crate::types::PaginationMeta;

/// Render an amount in Rwandan francs.
pub fn money(amount: f64) -> String {
    format!("{:.2} RWF", amount)
}

/// Render an optional timestamp, or a dash placeholder.
pub fn date(value: Option<DateTime<Utc>>) -> String {
    match value {
        Some(v) => v.format("%Y-%m-%d %H:%M").to_string(),
        None => "-".to_string(),
    }
}

/// Render rows as a fixed-width table with a header rule. Column
/// widths stretch to the longest cell.
pub fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if cell.len() > widths[i] {
                widths[i] = cell.len();
            }
        }
    }

    let mut out = String::new();
    render_row(
        &mut out,
        &headers.iter().map(|h| h.to_string()).collect::<Vec<_>>(),
        &widths,
    );
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    render_row(&mut out, &rule, &widths);
    for row in rows {
        render_row(&mut out, row, &widths);
    }
    out
}

fn render_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = width))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

/// Closing line of every list view: position, match count and, after a
/// committed search, the page holding the first match.
pub fn page_footer(meta: &PaginationMeta) -> String {
    let noun = if meta.total == 1 { "record" } else { "records" };
    let mut line = format!(
        "Page {} of {} ({} matching {})",
        meta.page, meta.total_pages, meta.total, noun
    );
    if let Some(jump) = meta.first_match_page {
        line.push_str(&format!(" - first match on page {}", jump));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_pads_columns_to_longest_cell() {
        let out = table(
            &["ID", "Name"],
            &[
                vec!["1".to_string(), "GS Kigali".to_string()],
                vec!["12".to_string(), "GS Huye".to_string()],
            ],
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "ID  Name");
        assert_eq!(lines[1], "--  ---------");
        assert_eq!(lines[2], "1   GS Kigali");
        assert_eq!(lines[3], "12  GS Huye");
    }

    #[test]
    fn footer_mentions_first_match_page_only_when_known() {
        let mut meta = PaginationMeta::new(1, 10, 23);
        assert_eq!(page_footer(&meta), "Page 1 of 3 (23 matching records)");

        meta.first_match_page = Some(2);
        assert_eq!(
            page_footer(&meta),
            "Page 1 of 3 (23 matching records) - first match on page 2"
        );
    }

    #[test]
    fn money_and_date_render_placeholders() {
        assert_eq!(money(1500.5), "1500.50 RWF");
        assert_eq!(date(None), "-");
    }
}
