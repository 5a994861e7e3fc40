// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::model::{CheckReport, RecordField, TransformResult};

const COLUMN_GAP: &str = "  ";

/// Plain-text rendering of a result, as shown, copied and downloaded.
pub fn render(result: &TransformResult) -> String {
    match result {
        TransformResult::Text { text } => text.clone(),
        TransformResult::Record { fields } => render_record(fields),
        TransformResult::Rewrite { text, similarity } => {
            format!("{}\n\nSimilarity: {}%", text, similarity)
        }
        TransformResult::Check(report) => render_check(report),
        TransformResult::Table { headers, rows } => render_table(headers, rows),
    }
}

fn render_record(fields: &[RecordField]) -> String {
    fields
        .iter()
        .map(|field| format!("{}: {}", field.label, field.display))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_check(report: &CheckReport) -> String {
    if report.is_clean() {
        return "No issues found.".to_string();
    }

    let count = report.issues().len();
    let mut lines = vec![format!(
        "{} {} found:",
        count,
        if count == 1 { "issue" } else { "issues" }
    )];
    lines.extend(report.issues().iter().enumerate().map(|(i, issue)| {
        format!(
            "{}. [{}] \"{}\" -> \"{}\": {}",
            i + 1,
            issue.kind,
            issue.text,
            issue.suggestion,
            issue.explanation
        )
    }));
    lines.join("\n")
}

/// Left-aligned columns separated by two spaces, with a dashed rule under
/// the header row.
pub fn render_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let columns = rows.iter().map(Vec::len).chain([headers.len()]).max().unwrap_or(0);
    let mut widths = vec![0usize; columns];
    for row in std::iter::once(headers).chain(rows.iter().map(Vec::as_slice)) {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_row = |cells: &[String]| -> String {
        let line = widths
            .iter()
            .enumerate()
            .map(|(i, width)| {
                let cell = cells.get(i).map(String::as_str).unwrap_or("");
                format!("{:<width$}", cell, width = width)
            })
            .collect::<Vec<_>>()
            .join(COLUMN_GAP);
        line.trim_end().to_string()
    };

    let rule = widths
        .iter()
        .map(|width| "-".repeat(*width))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);

    let mut lines = vec![format_row(headers), rule];
    lines.extend(rows.iter().map(|row| format_row(row)));
    lines.join("\n")
}
