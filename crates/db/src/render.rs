//! Plain-text rendering of result sets for prompts and terminal output.

use crate::QueryRows;

/// Render a result set as an aligned text table with a row-count trailer.
///
/// Empty result sets render as "No results found." so downstream prompts
/// always receive a non-blank results section.
#[must_use]
pub fn render_rows(rows: &QueryRows) -> String {
    if rows.rows.is_empty() {
        return "No results found.".to_owned();
    }

    let mut widths: Vec<usize> = rows.columns.iter().map(String::len).collect();
    for row in &rows.rows {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.len());
            }
        }
    }

    let format_line = |cells: &[String]| -> String {
        cells
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{:<width$}", cell, width = widths.get(i).copied().unwrap_or(0)))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_owned()
    };

    let mut out = String::new();
    out.push_str(&format_line(&rows.columns));
    out.push('\n');
    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(&separator.join("-|-"));
    for row in &rows.rows {
        out.push('\n');
        out.push_str(&format_line(row));
    }
    out.push_str(&format!("\n({} rows)", rows.rows.len()));
    out
}
