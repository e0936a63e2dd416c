//! Tests for the record classification and unit-normalization engine


// Test helper functions and fixtures
use crate::app::services::export_reader::HealthElement;
use crate::app::services::record_converter::attributes::RecordAttributes;

/// Default timestamps used by fixtures (2020-01-01 08:00:00 UTC)
pub const START_DATE: &str = "2020-01-01 08:00:00 +0000";
pub const END_DATE: &str = "2020-01-01 08:00:00 +0000";
pub const START_MS: i64 = 1_577_865_600_000;

/// Create record attributes for a quantity record
pub fn quantity_record(record_type: &str, value: &str, unit: &str) -> RecordAttributes {
    RecordAttributes {
        record_type: record_type.to_string(),
        value: value.to_string(),
        unit: unit.to_string(),
        source_name: "iPhone".to_string(),
        start_date: START_DATE.to_string(),
        end_date: END_DATE.to_string(),
    }
}

/// Create record attributes for a category record (no unit)
pub fn category_record(record_type: &str, value: &str) -> RecordAttributes {
    RecordAttributes {
        record_type: record_type.to_string(),
        value: value.to_string(),
        unit: String::new(),
        source_name: "Apple Watch".to_string(),
        start_date: START_DATE.to_string(),
        end_date: END_DATE.to_string(),
    }
}

/// Build an attribute list in export document order
pub fn attribute_pairs(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

/// Build a Record element with the given attributes
pub fn record_element(pairs: &[(&str, &str)]) -> HealthElement {
    HealthElement {
        name: "Record".to_string(),
        attributes: attribute_pairs(pairs),
    }
}

/// Build a full six-attribute Record element for a quantity type
pub fn quantity_element(record_type: &str, unit: &str, value: &str, source: &str) -> HealthElement {
    record_element(&[
        ("type", record_type),
        ("sourceName", source),
        ("unit", unit),
        ("value", value),
        ("startDate", START_DATE),
        ("endDate", END_DATE),
    ])
}
