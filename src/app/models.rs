//! Data models for HealthKit processing
//!
//! This module contains the output data structures: a collection of named,
//! unit-tagged series, each holding an ordered list of canonically scaled,
//! timestamped measurements.

use serde::{Deserialize, Serialize};

// =============================================================================
// Series Collection
// =============================================================================

/// The populated output of a processing run
///
/// Series appear in the order their record types were first encountered in
/// the export; measurements within a series appear in input order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesCollection {
    /// Path of the export file this collection was built from
    pub source: String,

    /// All series, in creation order
    pub series: Vec<Series>,
}

impl SeriesCollection {
    /// Create an empty collection for the given export source
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            series: Vec::new(),
        }
    }

    /// Append a new empty series and return its index
    pub fn add_series(&mut self) -> usize {
        self.series.push(Series::default());
        self.series.len() - 1
    }

    /// Total number of measurements across all series
    pub fn measurement_count(&self) -> usize {
        self.series.iter().map(|s| s.measurements.len()).sum()
    }
}

// =============================================================================
// Series
// =============================================================================

/// A named, unit-tagged, ordered collection of measurements for one record type
///
/// `name`, `family` and `unit` are stamped once, from the first record of the
/// series' type, and never rewritten afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Series {
    /// Canonical series name (e.g. "Weight", "StepCount", "SleepTime")
    pub name: String,

    /// Family the series belongs to (e.g. "BodyMeasurements", "Diet")
    pub family: String,

    /// Canonical unit of every measurement value (e.g. "milligrams")
    pub unit: String,

    /// Measurements in input order, append-only
    pub measurements: Vec<Measurement>,
}

impl Series {
    /// Stamp the series metadata; called once, on creation
    pub fn set_metadata(
        &mut self,
        name: impl Into<String>,
        family: impl Into<String>,
        unit: impl Into<String>,
    ) {
        self.name = name.into();
        self.family = family.into();
        self.unit = unit.into();
    }

    /// Append a measurement to the series
    pub fn add_measurement(&mut self, measurement: Measurement) {
        self.measurements.push(measurement);
    }
}

// =============================================================================
// Measurement
// =============================================================================

/// One timestamped, canonically scaled value within a series
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Measurement {
    /// Milliseconds since the Unix epoch, from the record's startDate
    pub ms_since_unix_epoch: i64,

    /// Value in the series' canonical unit (fixed-point integer)
    pub value: i64,

    /// Semantic subgroup label from the matched conversion rule
    pub group: String,

    /// Namespaced originating device tag, e.g. "HealthKit:iPhone"
    pub source: String,
}
