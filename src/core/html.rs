// src/core/html.rs
//
// Phase one of table reading: pull untyped cell text out of the first <table>.
// Only rows owned by that table count (its own thead/tbody/tfoot/tr children);
// tables nested inside a cell contribute text to that cell, never rows.

use scraper::{ElementRef, Html};

use super::sanitize::normalize_ws;
use crate::error::ParseError;

/// Header texts plus body rows, all whitespace-normalized.
/// `headers` is empty when the table has no header-like row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn nrows(&self) -> usize {
        self.rows.len()
    }
}

struct Row {
    // <thead> row or a row made only of <th> cells
    header_like: bool,
    cells: Vec<String>,
}

/// First table in document order, or `NoTableFound`.
///
/// Every `<thead>` row (whatever its cell tag) and every all-`<th>` row is a header
/// candidate. The header is the first candidate holding a cell equal to `anchor`,
/// else the first candidate; the other candidates are dropped, never read as data.
pub fn first_table(doc: &str, anchor: &str) -> Result<RawTable, ParseError> {
    let document = Html::parse_document(doc);
    let table = document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().name() == "table")
        .ok_or(ParseError::NoTableFound)?;

    let all: Vec<Row> = own_rows(table)
        .into_iter()
        .filter_map(|(in_thead, tr)| read_row(tr, in_thead))
        .collect();

    let headers = all
        .iter()
        .find(|r| r.header_like && r.cells.iter().any(|c| c == anchor))
        .or_else(|| all.iter().find(|r| r.header_like))
        .map(|r| r.cells.clone())
        .unwrap_or_default();

    let rows = all
        .into_iter()
        .filter(|r| !r.header_like)
        .map(|r| r.cells)
        .collect();

    Ok(RawTable { headers, rows })
}

fn own_rows(table: ElementRef<'_>) -> Vec<(bool, ElementRef<'_>)> {
    let mut out = Vec::new();
    for child in table.children().filter_map(ElementRef::wrap) {
        match child.value().name() {
            "tr" => out.push((false, child)),
            section @ ("thead" | "tbody" | "tfoot") => {
                let in_thead = section == "thead";
                out.extend(
                    child
                        .children()
                        .filter_map(ElementRef::wrap)
                        .filter(|el| el.value().name() == "tr")
                        .map(|tr| (in_thead, tr)),
                )
            }
            _ => {}
        }
    }
    out
}

fn read_row(tr: ElementRef<'_>, in_thead: bool) -> Option<Row> {
    let mut all_th = true;
    let cells: Vec<String> = tr
        .children()
        .filter_map(ElementRef::wrap)
        .filter_map(|el| {
            match el.value().name() {
                "th" => {}
                "td" => all_th = false,
                _ => return None,
            }
            Some(normalize_ws(&el.text().collect::<String>()))
        })
        .collect();

    if cells.is_empty() {
        return None;
    }
    Some(Row { header_like: in_thead || all_th, cells })
}
