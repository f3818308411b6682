// src/table.rs
//! Tabular projection of normalized pages.
//!
//! Columns are the union of property names across all pages in
//! first-seen order; rows follow retrieval order. A page that lacks a
//! column gets an absent cell, so every row has the same width.

use crate::constants::TABLE_PREVIEW_ROWS;
use crate::model::{CellValue, Page};
use crate::types::PropertyName;
use indexmap::IndexSet;
use serde::Serialize;

/// An ordered batch of rows ready for validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    columns: Vec<PropertyName>,
    rows: Vec<Vec<CellValue>>,
}

impl Table {
    /// Projects a list of pages into a rectangular table.
    pub fn from_pages(pages: &[Page]) -> Self {
        let mut columns: IndexSet<PropertyName> = IndexSet::new();
        for page in pages {
            for name in page.properties().keys() {
                columns.insert(name.clone());
            }
        }
        let columns: Vec<PropertyName> = columns.into_iter().collect();

        let rows = pages
            .iter()
            .map(|page| {
                columns
                    .iter()
                    .map(|column| {
                        page.property(column.as_str())
                            .cloned()
                            .unwrap_or(CellValue::Absent)
                    })
                    .collect()
            })
            .collect();

        Self { columns, rows }
    }

    pub fn columns(&self) -> &[PropertyName] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All cells of one column, top to bottom. `None` if the column
    /// does not exist in this batch.
    pub fn column_values(&self, name: &str) -> Option<Vec<&CellValue>> {
        let index = self.columns.iter().position(|c| c.as_str() == name)?;
        Some(self.rows.iter().map(|row| &row[index]).collect())
    }

    /// Compact preview of the first few rows for logging.
    pub fn preview(&self) -> String {
        let header = self
            .columns
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(" | ");

        let mut out = header;
        for row in self.rows.iter().take(TABLE_PREVIEW_ROWS) {
            let line = row
                .iter()
                .map(|cell| cell.render())
                .collect::<Vec<_>>()
                .join(" | ");
            out.push('\n');
            out.push_str(&line);
        }
        if self.rows.len() > TABLE_PREVIEW_ROWS {
            out.push_str(&format!(
                "\n... {} more row(s)",
                self.rows.len() - TABLE_PREVIEW_ROWS
            ));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RecordPayload;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn page(value: serde_json::Value) -> Page {
        let record: RecordPayload = serde_json::from_value(value).unwrap();
        Page::from_record(record)
    }

    #[test]
    fn test_projection_unions_columns_in_first_seen_order() {
        let page_a = page(json!({
            "id": "a",
            "properties": {
                "Name": {"type": "title", "title": [{"plain_text": "A"}]},
                "Phone": {"type": "phone_number", "phone_number": "555-0100"}
            }
        }));
        let page_b = page(json!({
            "id": "b",
            "properties": {
                "Name": {"type": "title", "title": [{"plain_text": "B"}]},
                "Languages": {"type": "multi_select", "multi_select": [{"name": "Hmong"}]}
            }
        }));

        let table = Table::from_pages(&[page_a, page_b]);

        let columns: Vec<&str> = table.columns().iter().map(|c| c.as_str()).collect();
        assert_eq!(columns, vec!["Name", "Phone", "Languages"]);
        assert_eq!(table.row_count(), 2);

        // Page A never had Languages; Page B never had Phone.
        assert_eq!(table.rows()[0][2], CellValue::Absent);
        assert_eq!(table.rows()[1][1], CellValue::Absent);
        assert_eq!(table.rows()[0][1], CellValue::Text("555-0100".to_string()));
        assert_eq!(
            table.rows()[1][2],
            CellValue::TextList(vec!["Hmong".to_string()])
        );
    }

    #[test]
    fn test_column_values_follow_row_order() {
        let pages = vec![
            page(json!({
                "id": "1",
                "properties": {"N": {"type": "number", "number": 0}}
            })),
            page(json!({
                "id": "2",
                "properties": {"N": {"type": "number", "number": 7}}
            })),
        ];
        let table = Table::from_pages(&pages);

        let values = table.column_values("N").unwrap();
        assert_eq!(values, vec![&CellValue::Number(0.0), &CellValue::Number(7.0)]);
        assert!(table.column_values("Missing").is_none());
    }

    #[test]
    fn test_empty_batch() {
        let table = Table::from_pages(&[]);
        assert!(table.is_empty());
        assert_eq!(table.column_count(), 0);
        assert_eq!(table.preview(), "");
    }

    #[test]
    fn test_preview_caps_rows() {
        let pages: Vec<Page> = (0..8)
            .map(|i| {
                page(json!({
                    "id": format!("p{}", i),
                    "properties": {"N": {"type": "number", "number": i}}
                }))
            })
            .collect();
        let table = Table::from_pages(&pages);

        let preview = table.preview();
        assert!(preview.starts_with("N\n"));
        assert!(preview.contains("... 3 more row(s)"));
    }
}
