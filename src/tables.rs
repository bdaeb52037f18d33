//! Table extraction from rendered HTML.
//!
//! Every `<table>` is read as a header row (its first `<tr>`) followed by
//! data rows. Two renderings are offered: structured rows keyed by header,
//! and compact GitHub Flavored Markdown.

use indexmap::IndexMap;
use tracing::debug;

use crate::dom::{self, Selection};
use crate::result::TableExtract;

/// Extract every data table of an HTML page as header-keyed rows.
///
/// Cells past the last header are keyed `col_N` (zero-based column index).
/// Rows without cells are skipped, and tables left without data rows are
/// dropped.
///
/// # Example
///
/// ```
/// use wikichapter::extract_tables_json;
///
/// let html = "<table><tr><th>Unit</th><th>Lv</th></tr><tr><td>Lyn</td><td>1</td></tr></table>";
/// let tables = extract_tables_json(html);
/// assert_eq!(tables[0].headers, vec!["Unit", "Lv"]);
/// assert_eq!(tables[0].rows[0]["Unit"], "Lyn");
/// ```
#[must_use]
pub fn extract_tables_json(html: &str) -> Vec<TableExtract> {
    let doc = dom::parse(html);
    let tables: Vec<TableExtract> = doc.select("table").iter().filter_map(|t| table_rows(&t)).collect();
    debug!(tables = tables.len(), "extracted structured tables");
    tables
}

/// Extract every table of an HTML page as a Markdown block.
///
/// Each block is a header line, a `---` separator line and one line per data
/// row, every line bounded by `|`. Empty cells become a single space, short
/// rows are padded and long rows truncated to the header width. Tables
/// without header cells or without data rows are dropped.
///
/// # Example
///
/// ```
/// use wikichapter::extract_tables_markdown;
///
/// let html = "<table><tr><th>Unit</th><th>Lv</th></tr><tr><td>Lyn</td></tr></table>";
/// assert_eq!(extract_tables_markdown(html), vec!["|Unit|Lv|\n|---|---|\n|Lyn| |"]);
/// ```
#[must_use]
pub fn extract_tables_markdown(html: &str) -> Vec<String> {
    let doc = dom::parse(html);
    let tables: Vec<String> = doc.select("table").iter().filter_map(|t| table_markdown(&t)).collect();
    debug!(tables = tables.len(), "extracted markdown tables");
    tables
}

fn table_rows(table: &Selection) -> Option<TableExtract> {
    let headers = header_cells(table);

    let mut rows = Vec::new();
    for cells in body_rows(table) {
        let mut row = IndexMap::with_capacity(cells.len());
        for (index, text) in cells.into_iter().enumerate() {
            let key = headers.get(index).cloned().unwrap_or_else(|| format!("col_{index}"));
            row.insert(key, text);
        }
        rows.push(row);
    }
    if rows.is_empty() {
        return None;
    }

    let caption = table.select_single("caption");
    Some(TableExtract {
        caption: Some(dom::collapsed_text(&caption)).filter(|c| caption.exists() && !c.is_empty()),
        headers,
        rows,
    })
}

fn table_markdown(table: &Selection) -> Option<String> {
    let headers: Vec<String> = header_cells(table).into_iter().map(markdown_cell).collect();
    if headers.is_empty() {
        return None;
    }

    let body: Vec<String> = body_rows(table)
        .into_iter()
        .map(|cells| {
            let mut values: Vec<String> = cells.into_iter().map(markdown_cell).collect();
            values.resize(headers.len(), " ".to_string());
            markdown_line(&values)
        })
        .collect();
    if body.is_empty() {
        return None;
    }

    let separator = vec!["---".to_string(); headers.len()];
    let mut lines = Vec::with_capacity(body.len() + 2);
    lines.push(markdown_line(&headers));
    lines.push(markdown_line(&separator));
    lines.extend(body);
    Some(lines.join("\n"))
}

/// Cell texts of the first row.
fn header_cells(table: &Selection) -> Vec<String> {
    let first = table.select_single("tr");
    if !first.exists() {
        return Vec::new();
    }
    row_cells(&first)
}

/// Cell texts of every row after the first, skipping rows without cells.
fn body_rows(table: &Selection) -> Vec<Vec<String>> {
    table
        .select("tr")
        .iter()
        .skip(1)
        .map(|tr| row_cells(&tr))
        .filter(|cells| !cells.is_empty())
        .collect()
}

fn row_cells(tr: &Selection) -> Vec<String> {
    tr.select("th, td").iter().map(|cell| dom::collapsed_text(&cell)).collect()
}

fn markdown_cell(text: String) -> String {
    if text.is_empty() {
        " ".to_string()
    } else {
        text.replace('|', r"\|")
    }
}

fn markdown_line(cells: &[String]) -> String {
    format!("|{}|", cells.join("|"))
}
