mod normalize;
mod property;

pub use normalize::{normalize, CellValue};
pub use property::{PropertyPayload, PropertyRecord, RecordPayload, RollupValue};

use crate::types::PropertyName;
use indexmap::IndexMap;
use serde::Serialize;

/// One retrieved record with its properties flattened to cell values.
///
/// Constructed once from a raw record payload, immutable afterwards.
/// No required-property validation happens here — that is the
/// checkpoint's job.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    id: String,
    properties: IndexMap<PropertyName, CellValue>,
}

impl Page {
    /// Builds a page by normalizing every property of a raw record,
    /// preserving the property order of the wire payload.
    pub fn from_record(record: RecordPayload) -> Self {
        let RecordPayload { id, properties } = record;
        let properties = properties
            .into_iter()
            .map(|(name, prop)| {
                let cell = normalize(&prop.payload);
                log::trace!(
                    "normalized property '{}' ({}) for record {}",
                    name,
                    prop.payload.type_name(),
                    id
                );
                (name, cell)
            })
            .collect();

        Self { id, properties }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn properties(&self) -> &IndexMap<PropertyName, CellValue> {
        &self.properties
    }

    /// Looks up a single normalized property by name.
    pub fn property(&self, name: &str) -> Option<&CellValue> {
        self.properties.get(name)
    }
}
