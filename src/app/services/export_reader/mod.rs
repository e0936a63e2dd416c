//! Streaming reader for Apple Health export documents
//!
//! An export is one large XML file whose `<HealthData>` root holds a flat
//! sequence of children (Record, Workout, ActivitySummary, ExportDate, ...).
//! The reader yields those top-level children one at a time as
//! [`HealthElement`] values, preserving attribute document order and skipping
//! any nested children (e.g. MetadataEntry inside a Record). It never loads
//! the whole document into memory.

pub mod reader;

#[cfg(test)]
pub mod tests;

pub use reader::ExportReader;

/// One top-level child of the HealthData root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthElement {
    /// Element tag name, e.g. "Record"
    pub name: String,

    /// Attributes as (name, value) pairs in document order
    pub attributes: Vec<(String, String)>,
}
