//! Application of a conversion rule to one record
//!
//! Validates the record's unit against the rule, derives the canonical
//! integer value, and assembles everything a measurement (and, for a new
//! series, the series metadata) needs. Unit checking is exact string
//! equality; there is no coercion between units.

use super::attributes::RecordAttributes;
use super::field_parsers::{parse_epoch_ms, parse_f64_strict, parse_i64_strict, source_tag};
use super::rules::{ConversionRule, RuleKind};
use crate::constants::{sleep_values, stand_hour_values};
use crate::{Error, Result};

/// The fully derived output of converting one record
///
/// `name`, `family` and `unit` become series metadata when the record is the
/// first of its type; `value`, `group`, `source` and the timestamp always
/// become a measurement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedRecord {
    pub name: &'static str,
    pub family: &'static str,
    pub unit: &'static str,
    pub group: &'static str,
    pub value: i64,
    pub ms_since_unix_epoch: i64,
    pub source: String,
}

/// Convert a record under its matched rule
pub fn convert(record: &RecordAttributes, rule: &ConversionRule) -> Result<ConvertedRecord> {
    check_unit(record, rule)?;

    let (name, value) = match rule.kind {
        RuleKind::Integer { name, .. } => (name, parse_i64_strict(&record.value)?),
        RuleKind::Scaled { name, factor, .. } => {
            // Truncation toward zero, matching the export's fixed-point
            // encoding of scaled doubles.
            (name, (parse_f64_strict(&record.value)? * factor) as i64)
        }
        RuleKind::Duration { name } => {
            require_no_value(record)?;
            (name, duration_ms(record)?)
        }
        // Counted events keep their fixed value even when the export stamps
        // a placeholder value attribute (e.g. HKCategoryValueNotApplicable).
        RuleKind::CountedEvent { name } => (name, 1),
        RuleKind::SleepAnalysis => (sleep_name(record)?, duration_ms(record)?),
        RuleKind::StandHour => (stand_hour_name(record)?, 1),
    };

    if record.source_name.is_empty() {
        return Err(Error::missing_source(record.debug_string()));
    }

    Ok(ConvertedRecord {
        name,
        family: rule.family,
        unit: rule.canonical_unit(),
        group: rule.group,
        value,
        ms_since_unix_epoch: parse_epoch_ms(&record.start_date)?,
        source: source_tag(&record.source_name),
    })
}

/// Enforce the rule's unit expectation by exact string match
fn check_unit(record: &RecordAttributes, rule: &ConversionRule) -> Result<()> {
    match rule.expected_unit {
        Some(expected) if record.unit != expected => Err(Error::unit_mismatch(
            expected,
            &record.unit,
            record.debug_string(),
        )),
        None if !record.unit.is_empty() => Err(Error::unit_mismatch(
            "(none)",
            &record.unit,
            record.debug_string(),
        )),
        _ => Ok(()),
    }
}

/// Duration-derived and counted-event records must not carry a value
fn require_no_value(record: &RecordAttributes) -> Result<()> {
    if record.value.is_empty() {
        Ok(())
    } else {
        Err(Error::attribute_validation(format!(
            "Unexpected value attribute on record: {}",
            record.debug_string()
        )))
    }
}

/// endDate minus startDate in milliseconds
fn duration_ms(record: &RecordAttributes) -> Result<i64> {
    Ok(parse_epoch_ms(&record.end_date)? - parse_epoch_ms(&record.start_date)?)
}

/// Series name selected by a sleep-analysis record's value
fn sleep_name(record: &RecordAttributes) -> Result<&'static str> {
    match record.value.as_str() {
        sleep_values::ASLEEP => Ok(sleep_values::ASLEEP_NAME),
        sleep_values::IN_BED => Ok(sleep_values::IN_BED_NAME),
        sleep_values::AWAKE => Ok(sleep_values::AWAKE_NAME),
        _ => Err(Error::unknown_category_value(record.debug_string())),
    }
}

/// Series name selected by a stand-hour record's value
fn stand_hour_name(record: &RecordAttributes) -> Result<&'static str> {
    match record.value.as_str() {
        stand_hour_values::IDLE => Ok(stand_hour_values::IDLE_NAME),
        stand_hour_values::STOOD => Ok(stand_hour_values::STOOD_NAME),
        _ => Err(Error::unknown_category_value(record.debug_string())),
    }
}
