//! Series registry: first-write-only mapping from record type to series
//!
//! Measurements are assigned to named series, one series per distinct record
//! type. The registry stores the index of each type's series inside the
//! output collection; the collection itself stays the single owner of every
//! series.

use crate::app::models::SeriesCollection;
use std::collections::HashMap;

/// Outcome of a registry lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedSeries {
    /// Index of the series inside the collection
    pub index: usize,

    /// True exactly once per record type: on the call that created the series
    pub created: bool,
}

/// Mapping from record-type string to the series created for it
///
/// Series metadata is stamped by the caller only when `created` is true, so
/// the first record of a type fixes the series' name, family and unit for
/// the rest of the run.
#[derive(Debug, Default)]
pub struct SeriesRegistry {
    type_to_index: HashMap<String, usize>,
}

impl SeriesRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Find the series for a record type, creating it on first encounter
    pub fn resolve(
        &mut self,
        record_type: &str,
        collection: &mut SeriesCollection,
    ) -> ResolvedSeries {
        if let Some(&index) = self.type_to_index.get(record_type) {
            return ResolvedSeries {
                index,
                created: false,
            };
        }

        let index = collection.add_series();
        self.type_to_index.insert(record_type.to_string(), index);
        ResolvedSeries {
            index,
            created: true,
        }
    }

    /// Number of distinct record types registered so far
    pub fn series_count(&self) -> usize {
        self.type_to_index.len()
    }

    /// Whether a record type already has a series
    pub fn contains(&self, record_type: &str) -> bool {
        self.type_to_index.contains_key(record_type)
    }
}
