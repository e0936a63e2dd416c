//! Record classification and unit-normalization engine
//!
//! This module converts raw HealthKit Record elements into canonically scaled
//! measurements grouped into per-type series. It is a strict, closed mapping:
//! every record type, unit string and category value must belong to the known
//! Apple Health export vocabulary, and any deviation aborts the run rather
//! than silently misclassifying health data.
//!
//! ## Architecture
//!
//! The converter is organized into logical components:
//! - [`field_parsers`] - Strict date, integer and float parsing plus the
//!   camel-cased source tag
//! - [`attributes`] - Extraction of the six recognized Record attributes
//! - [`rules`] - The closed conversion-rule table keyed by record type
//! - [`conversion`] - Application of a rule to a record's raw values
//! - [`registry`] - First-write-only mapping from record type to series
//! - [`pipeline`] - Orchestration over the element stream
//!
//! ## Usage
//!
//! ```rust
//! use healthkit_processor::app::models::SeriesCollection;
//! use healthkit_processor::app::services::export_reader::ExportReader;
//! use healthkit_processor::app::services::record_converter::ExportPipeline;
//!
//! # fn example() -> healthkit_processor::Result<()> {
//! let reader = ExportReader::open(std::path::Path::new("export.xml"))?;
//! let mut collection = SeriesCollection::new("export.xml");
//!
//! let pipeline = ExportPipeline::new();
//! let stats = pipeline.process_elements(reader, &mut collection)?;
//! println!("Processed {} records", stats.records_processed);
//! # Ok(())
//! # }
//! ```

pub mod attributes;
pub mod conversion;
pub mod field_parsers;
pub mod pipeline;
pub mod registry;
pub mod rules;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use attributes::{RecordAttributes, extract_attributes};
pub use conversion::{ConvertedRecord, convert};
pub use pipeline::{ExportPipeline, PipelineStats};
pub use registry::{ResolvedSeries, SeriesRegistry};
pub use rules::{ConversionRule, RuleKind, classify};
