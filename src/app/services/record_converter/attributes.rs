//! Record attribute extraction and validation
//!
//! A Record element carries up to six recognized attributes. This module
//! collects them into a [`RecordAttributes`] value and enforces the
//! presence/absence invariant: a record has either all six, five with the
//! unit elided, or four with both unit and value elided. Every other shape is
//! an error.

use crate::constants::attribute_names;
use crate::{Error, Result};

/// The captured attributes of one Record element
///
/// Transient: lives only while its record is being converted. Unset fields
/// are empty strings, mirroring the elision rules of the export format.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordAttributes {
    /// Declared record category, e.g. "HKQuantityTypeIdentifierBodyMass"
    pub record_type: String,

    /// Raw scalar payload; empty for duration-like and unit-less records
    pub value: String,

    /// Raw unit label; empty when elided
    pub unit: String,

    /// Originating device or app name
    pub source_name: String,

    /// Start timestamp in the export format
    pub start_date: String,

    /// End timestamp in the export format
    pub end_date: String,
}

impl RecordAttributes {
    /// Multi-line rendering of all captured fields for error diagnostics
    pub fn debug_string(&self) -> String {
        format!(
            "\ntype={}\nvalue={}\nunit={}\nsource={}\nstart_date={}\nend_date={}",
            self.record_type, self.value, self.unit, self.source_name, self.start_date,
            self.end_date
        )
    }
}

/// Extract the six recognized attributes from a Record element's attribute list
///
/// Scans the list once, in document order, stopping as soon as all six are
/// captured. Unrecognized attribute names are ignored. After the scan the
/// capture count must be 6, or 5 with `unit` absent, or 4 with `unit` and
/// `value` absent.
pub fn extract_attributes(pairs: &[(String, String)]) -> Result<RecordAttributes> {
    let mut attributes = RecordAttributes::default();
    let mut captured = 0usize;

    for (name, value) in pairs {
        if try_consume(name, value, attribute_names::TYPE, &mut attributes.record_type)?
            || try_consume(name, value, attribute_names::UNIT, &mut attributes.unit)?
            || try_consume(name, value, attribute_names::VALUE, &mut attributes.value)?
            || try_consume(
                name,
                value,
                attribute_names::SOURCE_NAME,
                &mut attributes.source_name,
            )?
            || try_consume(
                name,
                value,
                attribute_names::START_DATE,
                &mut attributes.start_date,
            )?
            || try_consume(
                name,
                value,
                attribute_names::END_DATE,
                &mut attributes.end_date,
            )?
        {
            captured += 1;
        }

        if captured == 6 {
            return Ok(attributes);
        }
    }

    // Not all Records carry a unit attribute, and the category-style records
    // carry neither unit nor value. These are the only permitted elisions.
    let unit_elided = captured == 5 && attributes.unit.is_empty();
    let unit_and_value_elided =
        captured == 4 && attributes.unit.is_empty() && attributes.value.is_empty();

    if !unit_elided && !unit_and_value_elided {
        return Err(Error::attribute_validation(format!(
            "Failed to parse necessary attributes from Record: {}",
            attributes.debug_string()
        )));
    }

    Ok(attributes)
}

/// Capture `value` into `slot` when `name` matches `expected`
///
/// A recognized attribute appearing twice is a contract violation of the
/// element reader; it is reported as an error rather than a panic.
fn try_consume(name: &str, value: &str, expected: &str, slot: &mut String) -> Result<bool> {
    if name != expected {
        return Ok(false);
    }
    if !slot.is_empty() {
        return Err(Error::attribute_validation(format!(
            "Duplicate attribute '{}' on Record",
            expected
        )));
    }
    slot.push_str(value);
    Ok(true)
}
