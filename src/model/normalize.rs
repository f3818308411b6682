// src/model/normalize.rs
//! Property value normalization — the mapping from Notion's tagged-union
//! property representation to plain tabular cell values.
//!
//! Every rule returns a `CellValue`; nothing here fails. Empty lists and
//! null scalars short-circuit to `Absent` for every type except `number`
//! and `checkbox`, where an explicit zero or `false` is meaningful data
//! and must survive into the table.

use super::property::{PropertyPayload, RollupValue};
use serde::{Deserialize, Serialize};

/// A normalized cell — the only shapes a table column may hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Bool(bool),
    Number(f64),
    Text(String),
    TextList(Vec<String>),
    Absent,
}

impl CellValue {
    pub fn is_absent(&self) -> bool {
        matches!(self, CellValue::Absent)
    }

    /// Renders the cell as display text. Absent cells render empty.
    ///
    /// Multi-valued cells join with a comma so downstream regex
    /// expectations can count entries the way the source system did.
    pub fn render(&self) -> String {
        match self {
            CellValue::Bool(b) => b.to_string(),
            CellValue::Number(n) => format_number(*n),
            CellValue::Text(s) => s.clone(),
            CellValue::TextList(items) => items.join(","),
            CellValue::Absent => String::new(),
        }
    }
}

/// Formats a number without a trailing `.0` for whole values.
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

/// Normalizes one tagged property payload into a cell value.
///
/// Dispatch is exhaustive over the property-type vocabulary; types
/// outside the supported table produce `Absent` rather than an error.
pub fn normalize(payload: &PropertyPayload) -> CellValue {
    match payload {
        PropertyPayload::Title { title } => first_span_text(title),
        PropertyPayload::RichText { rich_text } => first_span_text(rich_text),
        PropertyPayload::Select { select } => match select {
            Some(option) => CellValue::Text(option.name.clone()),
            None => CellValue::Absent,
        },
        PropertyPayload::MultiSelect { multi_select } => {
            if multi_select.is_empty() {
                CellValue::Absent
            } else {
                CellValue::TextList(multi_select.iter().map(|o| o.name.clone()).collect())
            }
        }
        PropertyPayload::Relation { relation } => {
            if relation.is_empty() {
                CellValue::Absent
            } else {
                CellValue::TextList(relation.iter().map(|r| r.id.clone()).collect())
            }
        }
        PropertyPayload::Rollup { rollup } => normalize_rollup(rollup),
        // Only the first attached file is exposed.
        PropertyPayload::Files { files } => match files.first() {
            Some(file) => CellValue::Text(file.name.clone()),
            None => CellValue::Absent,
        },
        PropertyPayload::PhoneNumber { phone_number } => scalar_text(phone_number),
        PropertyPayload::Url { url } => scalar_text(url),
        PropertyPayload::Email { email } => scalar_text(email),
        PropertyPayload::Date { date } => match date {
            Some(d) => CellValue::Text(d.start.clone()),
            None => CellValue::Absent,
        },
        // Zero is a value, not an absence.
        PropertyPayload::Number { number } => match number {
            Some(n) => CellValue::Number(*n),
            None => CellValue::Absent,
        },
        PropertyPayload::Checkbox { checkbox } => CellValue::Bool(*checkbox),
        PropertyPayload::Unsupported => CellValue::Absent,
    }
}

/// Extracts the plain text of the first span. Empty lists are absent,
/// matching how an empty title behaves in the source system.
fn first_span_text(spans: &[crate::types::RichTextSpan]) -> CellValue {
    match spans.first() {
        Some(span) if !span.plain_text.is_empty() => CellValue::Text(span.plain_text.clone()),
        Some(_) => CellValue::Absent,
        None => CellValue::Absent,
    }
}

fn scalar_text(value: &Option<String>) -> CellValue {
    match value {
        Some(s) if !s.is_empty() => CellValue::Text(s.clone()),
        _ => CellValue::Absent,
    }
}

/// Resolves a rollup by its nested type tag — one level, never deeper.
fn normalize_rollup(rollup: &RollupValue) -> CellValue {
    match rollup {
        RollupValue::Number { number } => match number {
            Some(n) => CellValue::Number(*n),
            None => CellValue::Absent,
        },
        RollupValue::String { string } => scalar_text(string),
        RollupValue::Boolean { boolean } => match boolean {
            Some(b) => CellValue::Bool(*b),
            None => CellValue::Absent,
        },
        RollupValue::Date { date } => match date {
            Some(d) => CellValue::Text(d.start.clone()),
            None => CellValue::Absent,
        },
        RollupValue::Array { array } => {
            let rendered: Vec<String> = array
                .iter()
                .map(normalize)
                .filter(|cell| !cell.is_absent())
                .map(|cell| cell.render())
                .collect();
            if rendered.is_empty() {
                CellValue::Absent
            } else {
                CellValue::TextList(rendered)
            }
        }
        RollupValue::Unsupported => CellValue::Absent,
    }
}
