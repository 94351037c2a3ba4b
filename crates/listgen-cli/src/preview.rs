use std::fmt::Write;

use listgen_core::{FieldId, FieldSet};
use listgen_generate::GeneratedRow;

/// Rows shown before the preview is cut off.
pub const PREVIEW_ROWS: usize = 10;

const HASH_PREVIEW_CHARS: usize = 12;

/// Tab-aligned table of the first rows, with a note about hidden rows.
pub fn render_preview(rows: &[GeneratedRow], limit: usize) -> String {
    let header: Vec<String> = std::iter::once("#".to_string())
        .chain(FieldId::ALL.iter().map(|id| id.label().to_string()))
        .collect();
    let body: Vec<Vec<String>> = rows
        .iter()
        .take(limit)
        .map(|row| {
            std::iter::once(row.id.to_string())
                .chain(FieldId::ALL.iter().map(|&id| preview_cell(row, id)))
                .collect()
        })
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|cell| cell.chars().count()).collect();
    for line in &body {
        for (width, cell) in widths.iter_mut().zip(line) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for line in std::iter::once(&header).chain(&body) {
        let cells: Vec<String> = line
            .iter()
            .zip(&widths)
            .map(|(cell, width)| pad(cell, *width))
            .collect();
        let _ = writeln!(out, "{}", cells.join("  ").trim_end());
    }

    if rows.len() > limit {
        let _ = writeln!(
            out,
            "還有 {} 筆資料未顯示，完整內容請見匯出檔案。",
            rows.len() - limit
        );
    }
    out
}

/// One line per field: id, label, mode, and the verdict for validated fields.
pub fn render_fields(fields: &FieldSet) -> String {
    let mut out = String::new();
    for field in fields.iter() {
        let mode = if field.is_hash_derived() {
            "derived".to_string()
        } else {
            match field.mode.source_value() {
                Some(value) => format!("{}={value:?}", field.mode.kind().as_str()),
                None => field.mode.kind().as_str().to_string(),
            }
        };
        let verdict = match (&field.error, field.is_validated()) {
            (Some(error), _) => format!("error: {error}"),
            (None, true) => "ok".to_string(),
            (None, false) => String::new(),
        };
        let line = format!(
            "{:<8} {} {} {}",
            field.id().as_str(),
            pad(field.label(), 8),
            pad(&mode, 24),
            verdict
        );
        let _ = writeln!(out, "{}", line.trim_end());
    }
    out
}

fn preview_cell(row: &GeneratedRow, id: FieldId) -> String {
    let value = row.value(id);
    if id.is_hash_derived() && value.chars().count() > HASH_PREVIEW_CHARS {
        let short: String = value.chars().take(HASH_PREVIEW_CHARS).collect();
        return format!("{short}…");
    }
    value.to_string()
}

fn pad(cell: &str, width: usize) -> String {
    let len = cell.chars().count();
    format!("{cell}{}", " ".repeat(width.saturating_sub(len)))
}
