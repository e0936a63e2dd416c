//! HealthKit Processor Library
//!
//! A Rust library for converting Apple Health XML exports into a canonical
//! collection of unit-normalized, fixed-point time series.
//!
//! This library provides tools for:
//! - Streaming the top-level elements of an Apple Health `export.xml` file
//! - Extracting and validating the fixed attribute set of each Record element
//! - Classifying records against a closed table of known HealthKit types
//! - Rescaling raw values into canonical integer units (milligrams,
//!   millimeters, milliseconds, fixed-point "millis" units, ...)
//! - Grouping measurements into named, unit-tagged series
//! - Writing the resulting series collection as JSON

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod export_reader;
        pub mod record_converter;
        pub mod series_writer;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{Measurement, Series, SeriesCollection};
pub use config::Config;

/// Result type alias for HealthKit processing
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for HealthKit export processing
///
/// The export format is treated as a closed vocabulary: any deviation from it
/// (unknown record types, unexpected units, malformed timestamps, wrong
/// attribute counts) is an error that aborts the whole run. Record-level
/// variants carry the captured attributes of the offending record so that
/// schema surprises in real exports can be diagnosed from the message alone.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// XML parsing error
    #[error("XML error in file '{file}': {message}")]
    XmlParsing { file: String, message: String },

    /// Date/time parsing error
    #[error("Date/time parsing error: {message}")]
    DateTimeParsing {
        message: String,
        #[source]
        source: chrono::ParseError,
    },

    /// Numeric parsing error
    #[error("Numeric parsing error: {message}")]
    NumericParsing { message: String },

    /// Record attribute validation error
    #[error("Attribute validation error: {message}")]
    AttributeValidation { message: String },

    /// Record type not present in the conversion-rule table
    #[error("Unhandled record type: {record}")]
    UnknownRecordType { record: String },

    /// Record unit does not match the unit its type requires
    #[error("Expected unit '{expected}', received unit '{actual}' for record: {record}")]
    UnitMismatch {
        expected: String,
        actual: String,
        record: String,
    },

    /// Category record value outside the permitted set
    #[error("Unrecognized category value for record: {record}")]
    UnknownCategoryValue { record: String },

    /// Record has an empty sourceName
    #[error("Missing source device name for record: {record}")]
    MissingSource { record: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// JSON serialization error
    #[error("JSON writing error: {message}")]
    JsonWriting {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create an XML parsing error with file context
    pub fn xml_parsing(file: impl Into<String>, message: impl Into<String>) -> Self {
        Self::XmlParsing {
            file: file.into(),
            message: message.into(),
        }
    }

    /// Create a date/time parsing error
    pub fn datetime_parsing(message: impl Into<String>, source: chrono::ParseError) -> Self {
        Self::DateTimeParsing {
            message: message.into(),
            source,
        }
    }

    /// Create a numeric parsing error
    pub fn numeric_parsing(message: impl Into<String>) -> Self {
        Self::NumericParsing {
            message: message.into(),
        }
    }

    /// Create an attribute validation error
    pub fn attribute_validation(message: impl Into<String>) -> Self {
        Self::AttributeValidation {
            message: message.into(),
        }
    }

    /// Create an unknown record type error
    pub fn unknown_record_type(record: impl Into<String>) -> Self {
        Self::UnknownRecordType {
            record: record.into(),
        }
    }

    /// Create a unit mismatch error
    pub fn unit_mismatch(
        expected: impl Into<String>,
        actual: impl Into<String>,
        record: impl Into<String>,
    ) -> Self {
        Self::UnitMismatch {
            expected: expected.into(),
            actual: actual.into(),
            record: record.into(),
        }
    }

    /// Create an unknown category value error
    pub fn unknown_category_value(record: impl Into<String>) -> Self {
        Self::UnknownCategoryValue {
            record: record.into(),
        }
    }

    /// Create a missing source error
    pub fn missing_source(record: impl Into<String>) -> Self {
        Self::MissingSource {
            record: record.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a JSON writing error
    pub fn json_writing(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::JsonWriting {
            message: message.into(),
            source,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<chrono::ParseError> for Error {
    fn from(error: chrono::ParseError) -> Self {
        Self::DateTimeParsing {
            message: "Date/time parsing failed".to_string(),
            source: error,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::JsonWriting {
            message: "JSON serialization failed".to_string(),
            source: error,
        }
    }
}
