//! Application constants for HealthKit processor
//!
//! This module contains the attribute vocabulary, timestamp format, canonical
//! unit names, and category value mappings used throughout the processor.

// =============================================================================
// Export Document Structure
// =============================================================================

/// Name of the root container element in an Apple Health export
pub const ROOT_ELEMENT: &str = "HealthData";

/// Element name of the health records we process; all other top-level
/// children (ExportDate, Me, Workout, ActivitySummary, ...) are skipped
pub const RECORD_ELEMENT: &str = "Record";

/// Timestamp format used by every date attribute in the export,
/// e.g. "2020-01-01 08:00:00 +0000"
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// Prefix stamped on every measurement's source tag
pub const SOURCE_TAG_PREFIX: &str = "HealthKit:";

// =============================================================================
// Record Attribute Names
// =============================================================================

/// The six Record attributes the converter consumes
pub mod attribute_names {
    pub const TYPE: &str = "type";
    pub const VALUE: &str = "value";
    pub const UNIT: &str = "unit";
    pub const SOURCE_NAME: &str = "sourceName";
    pub const START_DATE: &str = "startDate";
    pub const END_DATE: &str = "endDate";
}

// =============================================================================
// Canonical Units
// =============================================================================

/// Canonical target units; all are integer-valued. The `_millis` units carry
/// six decimal digits of the natural floating value as an integer.
pub mod canonical_units {
    pub const COUNT: &str = "count";
    pub const MILLILITERS: &str = "milliliters";
    pub const MILLIGRAMS: &str = "milligrams";
    pub const MILLIMETERS: &str = "millimeters";
    pub const MILLISECONDS: &str = "milliseconds";
    pub const CALORIES: &str = "calories";
    pub const BODY_MASS_INDEX_MILLIS: &str = "body_mass_index_millis";
    pub const PERCENTAGE_MILLIS: &str = "percentage_millis";
    pub const BEATS_PER_MINUTE_MILLIS: &str = "beats_per_minute_millis";
    pub const ML_PER_KG_PER_MINUTE_MILLIS: &str = "milliliters_per_kilogram_per_minute_millis";
}

// =============================================================================
// Category Record Values
// =============================================================================

/// Permitted values of sleep-analysis category records and the series names
/// they select
pub mod sleep_values {
    pub const ASLEEP: &str = "HKCategoryValueSleepAnalysisAsleep";
    pub const IN_BED: &str = "HKCategoryValueSleepAnalysisInBed";
    pub const AWAKE: &str = "HKCategoryValueSleepAnalysisAwake";

    pub const ASLEEP_NAME: &str = "SleepTime";
    pub const IN_BED_NAME: &str = "InBedTime";
    pub const AWAKE_NAME: &str = "AwakeTime";
}

/// Permitted values of stand-hour category records and the series names they
/// select
pub mod stand_hour_values {
    pub const IDLE: &str = "HKCategoryValueAppleStandHourIdle";
    pub const STOOD: &str = "HKCategoryValueAppleStandHourStood";

    pub const IDLE_NAME: &str = "IdleHours";
    pub const STOOD_NAME: &str = "StandHours";
}
