// src/model/property.rs
//! Wire-shaped property records from the Notion API.
//!
//! A property value arrives as a tagged union: a `"type"` discriminator
//! plus a payload stored under a key of the same name. Modeling the union
//! as an internally tagged enum makes the tag-to-shape invariant a
//! compile-time fact, and adding a property type a compile-checked change.

use crate::types::{DateValue, FileRef, PropertyName, RelationRef, RichTextSpan, SelectOption};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The type-specific payload of a property value.
///
/// One variant per property type in the supported table. Anything else
/// the API sends lands in `Unsupported` — the rule set is open-ended,
/// and unrecognized types normalize to an absent cell rather than
/// failing the whole record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PropertyPayload {
    Title {
        title: Vec<RichTextSpan>,
    },
    RichText {
        rich_text: Vec<RichTextSpan>,
    },
    Select {
        select: Option<SelectOption>,
    },
    MultiSelect {
        multi_select: Vec<SelectOption>,
    },
    Relation {
        relation: Vec<RelationRef>,
    },
    Rollup {
        rollup: RollupValue,
    },
    Files {
        files: Vec<FileRef>,
    },
    PhoneNumber {
        phone_number: Option<String>,
    },
    Url {
        url: Option<String>,
    },
    Email {
        email: Option<String>,
    },
    Date {
        date: Option<DateValue>,
    },
    Number {
        number: Option<f64>,
    },
    Checkbox {
        checkbox: bool,
    },
    #[serde(other)]
    Unsupported,
}

impl PropertyPayload {
    /// Returns the Notion API type name for this payload.
    pub fn type_name(&self) -> &'static str {
        match self {
            PropertyPayload::Title { .. } => "title",
            PropertyPayload::RichText { .. } => "rich_text",
            PropertyPayload::Select { .. } => "select",
            PropertyPayload::MultiSelect { .. } => "multi_select",
            PropertyPayload::Relation { .. } => "relation",
            PropertyPayload::Rollup { .. } => "rollup",
            PropertyPayload::Files { .. } => "files",
            PropertyPayload::PhoneNumber { .. } => "phone_number",
            PropertyPayload::Url { .. } => "url",
            PropertyPayload::Email { .. } => "email",
            PropertyPayload::Date { .. } => "date",
            PropertyPayload::Number { .. } => "number",
            PropertyPayload::Checkbox { .. } => "checkbox",
            PropertyPayload::Unsupported => "unsupported",
        }
    }
}

/// The aggregated value of a rollup property.
///
/// The rollup record carries its own nested `"type"` tag; the nested
/// value lives under that tag's key, one level deep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RollupValue {
    Number {
        number: Option<f64>,
    },
    String {
        string: Option<String>,
    },
    Boolean {
        boolean: Option<bool>,
    },
    Date {
        date: Option<DateValue>,
    },
    /// Array rollups aggregate the property values of related records.
    /// Each element is itself a tagged property payload (never another
    /// rollup — the API does not nest them).
    Array {
        array: Vec<PropertyPayload>,
    },
    #[serde(other)]
    Unsupported,
}

/// One property value as delivered inside a record's property bag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyRecord {
    #[serde(default)]
    pub id: String,
    #[serde(flatten)]
    pub payload: PropertyPayload,
}

/// One raw record from a collection query — an id plus its property bag.
///
/// The property map keeps the wire order so downstream column ordering
/// follows what the API delivered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordPayload {
    pub id: String,
    #[serde(default)]
    pub properties: IndexMap<PropertyName, PropertyRecord>,
}
