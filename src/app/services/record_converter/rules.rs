//! Conversion-rule table for HealthKit record types
//!
//! The table is closed and exhaustive: every record type the processor
//! understands has exactly one entry, and classification of any other type
//! fails. Each rule fixes the expected raw unit, the way the raw value is
//! turned into a canonical integer, and the destination family/name/group of
//! the resulting measurement.

use crate::constants::canonical_units;
use std::collections::HashMap;
use std::sync::OnceLock;

/// How a record's raw value becomes a canonical integer value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RuleKind {
    /// Strict integer parse of the value attribute
    Integer {
        unit: &'static str,
        name: &'static str,
    },

    /// Float parse of the value attribute, multiplied by a fixed factor and
    /// truncated toward zero
    Scaled {
        unit: &'static str,
        factor: f64,
        name: &'static str,
    },

    /// endDate minus startDate in milliseconds; unit and value must be absent
    Duration { name: &'static str },

    /// Fixed value 1 for a countable event; unit and value must be absent
    CountedEvent { name: &'static str },

    /// Sleep-analysis category record: the series name is selected by the
    /// value attribute, the measurement is the record's duration in
    /// milliseconds
    SleepAnalysis,

    /// Stand-hour category record: the series name is selected by the value
    /// attribute, the measurement is the fixed value 1
    StandHour,
}

/// One entry of the conversion-rule table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionRule {
    /// Unit string the record must declare; `None` means the unit attribute
    /// must be absent
    pub expected_unit: Option<&'static str>,

    /// Value derivation for this record type
    pub kind: RuleKind,

    /// Destination series family
    pub family: &'static str,

    /// Measurement subgroup label
    pub group: &'static str,
}

impl ConversionRule {
    /// Canonical unit of every measurement this rule produces
    pub fn canonical_unit(&self) -> &'static str {
        match self.kind {
            RuleKind::Integer { unit, .. } | RuleKind::Scaled { unit, .. } => unit,
            RuleKind::Duration { .. } | RuleKind::SleepAnalysis => canonical_units::MILLISECONDS,
            RuleKind::CountedEvent { .. } | RuleKind::StandHour => canonical_units::COUNT,
        }
    }
}

const fn integer(
    expected_unit: &'static str,
    unit: &'static str,
    family: &'static str,
    name: &'static str,
) -> ConversionRule {
    ConversionRule {
        expected_unit: Some(expected_unit),
        kind: RuleKind::Integer { unit, name },
        family,
        group: family,
    }
}

const fn scaled(
    expected_unit: &'static str,
    unit: &'static str,
    factor: f64,
    family: &'static str,
    name: &'static str,
) -> ConversionRule {
    ConversionRule {
        expected_unit: Some(expected_unit),
        kind: RuleKind::Scaled { unit, factor, name },
        family,
        group: family,
    }
}

const fn duration(family: &'static str, name: &'static str) -> ConversionRule {
    ConversionRule {
        expected_unit: None,
        kind: RuleKind::Duration { name },
        family,
        group: family,
    }
}

const fn counted_event(family: &'static str, name: &'static str) -> ConversionRule {
    ConversionRule {
        expected_unit: None,
        kind: RuleKind::CountedEvent { name },
        family,
        group: family,
    }
}

/// The full record-type vocabulary of the processor
///
/// Scale factors preserve the export's fixed-point encoding: mass in
/// milligrams, distance in millimeters, time in milliseconds, energy in
/// calories, and the dimensionless rate metrics as ×1,000,000 "millis" of
/// their natural unit.
const RULES: &[(&str, ConversionRule)] = &[
    (
        "HKQuantityTypeIdentifierDietaryWater",
        integer("mL", canonical_units::MILLILITERS, "Diet", "WaterConsumed"),
    ),
    (
        "HKQuantityTypeIdentifierBodyMassIndex",
        scaled(
            "count",
            canonical_units::BODY_MASS_INDEX_MILLIS,
            1_000_000.0,
            "BodyMeasurements",
            "BodyMassIndex",
        ),
    ),
    (
        "HKQuantityTypeIdentifierHeight",
        scaled(
            "cm",
            canonical_units::MILLIMETERS,
            10.0,
            "BodyMeasurements",
            "Height",
        ),
    ),
    (
        "HKQuantityTypeIdentifierBodyMass",
        scaled(
            "kg",
            canonical_units::MILLIGRAMS,
            1_000_000.0,
            "BodyMeasurements",
            "Weight",
        ),
    ),
    (
        "HKQuantityTypeIdentifierHeartRate",
        scaled(
            "count/min",
            canonical_units::BEATS_PER_MINUTE_MILLIS,
            1_000_000.0,
            "BodyMeasurements",
            "HeartRate",
        ),
    ),
    (
        "HKQuantityTypeIdentifierBodyFatPercentage",
        scaled(
            "%",
            canonical_units::PERCENTAGE_MILLIS,
            1_000_000.0,
            "BodyMeasurements",
            "BodyFatPercentage",
        ),
    ),
    (
        "HKQuantityTypeIdentifierLeanBodyMass",
        scaled(
            "kg",
            canonical_units::MILLIGRAMS,
            1_000_000.0,
            "BodyMeasurements",
            "LeanBodyMass",
        ),
    ),
    (
        "HKQuantityTypeIdentifierStepCount",
        integer("count", canonical_units::COUNT, "Activity", "StepCount"),
    ),
    (
        "HKQuantityTypeIdentifierDistanceWalkingRunning",
        scaled(
            "km",
            canonical_units::MILLIMETERS,
            1_000_000.0,
            "Activity",
            "WalkingRunningDistance",
        ),
    ),
    (
        "HKQuantityTypeIdentifierBasalEnergyBurned",
        scaled(
            "kcal",
            canonical_units::CALORIES,
            1_000.0,
            "Activity",
            "RestingEnergy",
        ),
    ),
    (
        "HKQuantityTypeIdentifierActiveEnergyBurned",
        scaled(
            "kcal",
            canonical_units::CALORIES,
            1_000.0,
            "Activity",
            "ActiveEnergy",
        ),
    ),
    (
        "HKQuantityTypeIdentifierFlightsClimbed",
        integer("count", canonical_units::COUNT, "Activity", "FlightClimbed"),
    ),
    (
        "HKQuantityTypeIdentifierDietaryFatTotal",
        scaled(
            "g",
            canonical_units::MILLIGRAMS,
            1_000.0,
            "Diet",
            "TotalFatConsumed",
        ),
    ),
    (
        "HKQuantityTypeIdentifierDietaryFatSaturated",
        scaled(
            "g",
            canonical_units::MILLIGRAMS,
            1_000.0,
            "Diet",
            "SaturatedFatConsumed",
        ),
    ),
    (
        "HKQuantityTypeIdentifierDietaryCholesterol",
        scaled(
            "mg",
            canonical_units::MILLIGRAMS,
            1.0,
            "Diet",
            "CholesterolConsumed",
        ),
    ),
    (
        "HKQuantityTypeIdentifierDietarySodium",
        scaled(
            "mg",
            canonical_units::MILLIGRAMS,
            1.0,
            "Diet",
            "SodiumConsumed",
        ),
    ),
    (
        "HKQuantityTypeIdentifierDietaryCarbohydrates",
        scaled(
            "g",
            canonical_units::MILLIGRAMS,
            1_000.0,
            "Diet",
            "CarbohydratesConsumed",
        ),
    ),
    (
        "HKQuantityTypeIdentifierDietaryFiber",
        scaled(
            "g",
            canonical_units::MILLIGRAMS,
            1_000.0,
            "Diet",
            "FiberConsumed",
        ),
    ),
    (
        "HKQuantityTypeIdentifierAppleExerciseTime",
        scaled(
            "min",
            canonical_units::MILLISECONDS,
            60_000.0,
            "TimeTracking",
            "ExerciseTime",
        ),
    ),
    (
        "HKQuantityTypeIdentifierDietaryCaffeine",
        scaled(
            "mg",
            canonical_units::MILLIGRAMS,
            1.0,
            "Diet",
            "CaffeineConsumed",
        ),
    ),
    (
        "HKQuantityTypeIdentifierDistanceCycling",
        scaled(
            "km",
            canonical_units::MILLIMETERS,
            1_000_000.0,
            "Activity",
            "DistanceCycling",
        ),
    ),
    (
        "HKQuantityTypeIdentifierRestingHeartRate",
        scaled(
            "count/min",
            canonical_units::BEATS_PER_MINUTE_MILLIS,
            1_000_000.0,
            "BodyMeasurements",
            "RestingHeartRate",
        ),
    ),
    (
        "HKQuantityTypeIdentifierVO2Max",
        scaled(
            "mL/min·kg",
            canonical_units::ML_PER_KG_PER_MINUTE_MILLIS,
            1_000_000.0,
            "BodyMeasurements",
            "VO2Max",
        ),
    ),
    (
        "HKQuantityTypeIdentifierWalkingHeartRateAverage",
        scaled(
            "count/min",
            canonical_units::BEATS_PER_MINUTE_MILLIS,
            1_000_000.0,
            "BodyMeasurements",
            "WalkingHeartRateAvg",
        ),
    ),
    (
        "HKQuantityTypeIdentifierHeartRateVariabilitySDNN",
        scaled(
            "ms",
            canonical_units::MILLISECONDS,
            1.0,
            "BodyMeasurements",
            "HeartRateVariability",
        ),
    ),
    (
        "HKQuantityTypeIdentifierDietarySugar",
        scaled(
            "g",
            canonical_units::MILLIGRAMS,
            1_000.0,
            "Diet",
            "SugarConsumed",
        ),
    ),
    (
        "HKQuantityTypeIdentifierDietaryEnergyConsumed",
        scaled(
            "kcal",
            canonical_units::CALORIES,
            1_000.0,
            "Diet",
            "CaloriesConsumed",
        ),
    ),
    (
        "HKQuantityTypeIdentifierDietaryProtein",
        scaled(
            "g",
            canonical_units::MILLIGRAMS,
            1_000.0,
            "Diet",
            "ProteinConsumed",
        ),
    ),
    (
        "HKQuantityTypeIdentifierDietaryPotassium",
        scaled(
            "mg",
            canonical_units::MILLIGRAMS,
            1.0,
            "Diet",
            "PotassiumConsumed",
        ),
    ),
    (
        "HKCategoryTypeIdentifierSleepAnalysis",
        ConversionRule {
            expected_unit: None,
            kind: RuleKind::SleepAnalysis,
            family: "Activity",
            group: "Activity",
        },
    ),
    (
        "HKCategoryTypeIdentifierAppleStandHour",
        ConversionRule {
            expected_unit: None,
            kind: RuleKind::StandHour,
            family: "Activity",
            group: "Activity",
        },
    ),
    (
        "HKCategoryTypeIdentifierSexualActivity",
        counted_event("Activity", "SexualActivityCount"),
    ),
    (
        "HKCategoryTypeIdentifierMindfulSession",
        duration("TimeTracking", "MindfulnessTime"),
    ),
];

/// Dispatch table built once on first use
fn rule_table() -> &'static HashMap<&'static str, ConversionRule> {
    static TABLE: OnceLock<HashMap<&'static str, ConversionRule>> = OnceLock::new();
    TABLE.get_or_init(|| RULES.iter().copied().collect())
}

/// Look up the conversion rule for a record type
///
/// Returns `None` for any type outside the closed vocabulary; the caller
/// turns that into a fatal unknown-type error carrying the record context.
pub fn classify(record_type: &str) -> Option<&'static ConversionRule> {
    rule_table().get(record_type)
}

/// All record types the processor understands
pub fn known_types() -> impl Iterator<Item = &'static str> {
    RULES.iter().map(|(record_type, _)| *record_type)
}
