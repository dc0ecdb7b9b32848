//! Renders walked records as text, CSV or JSON.

use super::*;
use decoder::FieldTriple;
use itertools::Itertools;
use std::io::{self, Write};

/// What to include in a report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReportOptions {
    /// Also list fields without a value.
    pub include_empty: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ReportFormat {
    #[default]
    Text,
    Csv,
    Json,
}

/// Decoded and skipped record counts of a walk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub decoded: usize,
    pub skipped: usize,
    pub diagnostics: usize,
}
impl Summary {
    pub fn of(entries: &[WalkEntry]) -> Self {
        let decoded = entries.iter().filter(|e| e.is_decoded()).count();
        Self {
            decoded,
            skipped: entries.len() - decoded,
            diagnostics: entries.iter().map(|e| e.diagnostics.len()).sum(),
        }
    }
}

pub fn render<W: Write>(
    out: &mut W,
    format: ReportFormat,
    entries: &[WalkEntry],
    options: ReportOptions,
) -> io::Result<()> {
    match format {
        ReportFormat::Text => render_text(out, entries, options),
        ReportFormat::Csv => render_csv(out, entries, options),
        ReportFormat::Json => render_json(out, entries, options),
    }
}

/// Triples with values stripped of their padding.
fn display_triples(entry: &WalkEntry, options: ReportOptions) -> Vec<FieldTriple> {
    let Some(value) = entry.value() else {
        return Vec::new();
    };
    value
        .record()
        .triples(options.include_empty)
        .into_iter()
        .map(|triple| FieldTriple {
            value: triple.value.trim().to_string(),
            ..triple
        })
        .collect()
}

fn skip_notice(entry: &WalkEntry) -> Option<String> {
    match &entry.outcome {
        Outcome::Skipped(reason) => Some(format!("skipped {} bytes: {reason}", entry.advance)),
        Outcome::Decoded(_) => None,
    }
}

/// One block per record: a label line, then `description;value;unit` lines.
pub fn render_text<W: Write>(
    out: &mut W,
    entries: &[WalkEntry],
    options: ReportOptions,
) -> io::Result<()> {
    for entry in entries {
        writeln!(
            out,
            "[{}] {} (sequence {})",
            entry.offset,
            entry.label(),
            entry.header.sequence_number
        )?;
        if let Some(notice) = skip_notice(entry) {
            writeln!(out, "{notice}")?;
        }
        for triple in display_triples(entry, options) {
            writeln!(out, "{};{};{}", triple.description, triple.value, triple.unit)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

pub const CSV_HEADER: [&str; 9] = [
    "offset",
    "record",
    "field",
    "start",
    "end",
    "format",
    "description",
    "value",
    "unit",
];

/// Quote a cell that would otherwise break the row.
fn csv_cell(text: &str) -> String {
    if text.contains([';', '"', '\n']) {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text.to_string()
    }
}

/// One row per field, separated by semicolons. Skipped records produce no rows.
pub fn render_csv<W: Write>(
    out: &mut W,
    entries: &[WalkEntry],
    options: ReportOptions,
) -> io::Result<()> {
    writeln!(out, "{}", CSV_HEADER.iter().join(";"))?;
    for entry in entries {
        let Some(value) = entry.value() else {
            continue;
        };
        let record = value.record();
        let label = entry.label();
        for (field, value) in record.fields.iter().zip(record.values.iter()) {
            if value.is_empty() && !options.include_empty {
                continue;
            }
            let row = [
                entry.offset.to_string(),
                csv_cell(&label),
                field.id.to_string(),
                field.start.to_string(),
                field.end.to_string(),
                field.format.code(),
                csv_cell(&field.label()),
                csv_cell(value.trim()),
                csv_cell(field.unit),
            ];
            writeln!(out, "{}", row.iter().join(";"))?;
        }
    }
    Ok(())
}

#[derive(serde::Serialize)]
struct JsonRecord {
    offset: usize,
    label: String,
    sequence_number: u32,
    declared_length: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    skipped: Option<String>,
    fields: Vec<FieldTriple>,
}

/// An array with one object per record.
pub fn render_json<W: Write>(
    out: &mut W,
    entries: &[WalkEntry],
    options: ReportOptions,
) -> io::Result<()> {
    let records = entries
        .iter()
        .map(|entry| JsonRecord {
            offset: entry.offset,
            label: entry.label(),
            sequence_number: entry.header.sequence_number,
            declared_length: entry.header.declared_length(),
            skipped: skip_notice(entry),
            fields: display_triples(entry, options),
        })
        .collect::<Vec<_>>();
    serde_json::to_writer_pretty(&mut *out, &records)?;
    writeln!(out)
}
