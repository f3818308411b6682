use serde::{Deserialize, Serialize};

/// A single span of rich text as the Notion API delivers it.
///
/// The `plain_text` field is the fallback rendering for every span kind,
/// which is the only part the tabular normalization consults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichTextSpan {
    #[serde(default)]
    pub plain_text: String,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub annotations: Annotations,
    #[serde(rename = "type", default)]
    pub span_type: SpanType,
}

impl RichTextSpan {
    /// Create a plain text span — the most common variant.
    ///
    /// The vocabulary for constructing rich text in tests and builders.
    #[allow(dead_code)]
    pub fn plain_text(text: &str) -> Self {
        Self {
            plain_text: text.to_string(),
            href: None,
            annotations: Annotations::default(),
            span_type: SpanType::Text,
        }
    }
}

/// The kind of rich text content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanType {
    #[default]
    Text,
    Mention,
    Equation,
}

/// Style flags attached to a rich text span.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Annotations {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub underline: bool,
    pub code: bool,
    pub color: String,
}

/// A select or multi-select option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
}

impl SelectOption {
    /// Construct an option by name, the way tests and builders need it.
    #[allow(dead_code)]
    pub fn named(name: &str) -> Self {
        Self {
            id: String::new(),
            name: name.to_string(),
            color: None,
        }
    }
}

/// A reference to a linked record in a relation property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationRef {
    pub id: String,
}

/// An attached file. Only the name survives normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRef {
    pub name: String,
}

/// Date value with optional end date and time zone.
///
/// Start and end stay as the API's ISO-8601 strings: Notion mixes bare
/// dates and datetimes in the same field, so a typed date would reject
/// half of real-world data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateValue {
    pub start: String,
    #[serde(default)]
    pub end: Option<String>,
    #[serde(default)]
    pub time_zone: Option<String>,
}
