//! Export pipeline orchestration
//!
//! Drives the full conversion over a stream of export elements: filter
//! Record elements, extract attributes, classify, convert, resolve the
//! destination series, and append the measurement. Processing is strictly
//! sequential and order-preserving; the first error aborts the whole run.

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use super::attributes::extract_attributes;
use super::conversion::convert;
use super::registry::SeriesRegistry;
use super::rules::classify;
use crate::app::models::{Measurement, SeriesCollection};
use crate::app::services::export_reader::HealthElement;
use crate::constants::RECORD_ELEMENT;
use crate::{Error, Result};

/// Counters reported after a pipeline run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineStats {
    /// Record elements converted into measurements
    pub records_processed: usize,

    /// Non-Record elements skipped (ExportDate, Me, Workout, ...)
    pub elements_skipped: usize,

    /// Series created, one per distinct record type encountered
    pub series_created: usize,
}

/// The record-processing pipeline
///
/// Single-threaded and synchronous: each record is fully processed before
/// the next is considered, because series creation and metadata stamping are
/// ordered against the measurements that follow them.
#[derive(Debug, Default)]
pub struct ExportPipeline {
    show_progress: bool,
}

impl ExportPipeline {
    /// Create a pipeline without progress reporting
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pipeline that renders a progress spinner while running
    pub fn with_progress() -> Self {
        Self {
            show_progress: true,
        }
    }

    /// Run the pipeline over an element stream, populating `sink`
    ///
    /// `elements` yields reader results so that XML-level failures surface
    /// through the same fail-fast channel as conversion failures.
    pub fn process_elements<I>(
        &self,
        elements: I,
        sink: &mut SeriesCollection,
    ) -> Result<PipelineStats>
    where
        I: IntoIterator<Item = Result<HealthElement>>,
    {
        let mut registry = SeriesRegistry::new();
        let mut stats = PipelineStats::default();
        let progress = self.show_progress.then(Self::create_progress_spinner);

        for element in elements {
            let element = element?;

            if element.name != RECORD_ELEMENT {
                debug!("Skipping {} element", element.name);
                stats.elements_skipped += 1;
                continue;
            }

            let record = extract_attributes(&element.attributes)?;
            let rule = classify(&record.record_type)
                .ok_or_else(|| Error::unknown_record_type(record.debug_string()))?;
            let converted = convert(&record, rule)?;

            let resolved = registry.resolve(&record.record_type, sink);
            let series = &mut sink.series[resolved.index];
            if resolved.created {
                series.set_metadata(converted.name, converted.family, converted.unit);
                stats.series_created += 1;
                debug!(
                    "Created series {}/{} for type {}",
                    converted.family, converted.name, record.record_type
                );
            }

            series.add_measurement(Measurement {
                ms_since_unix_epoch: converted.ms_since_unix_epoch,
                value: converted.value,
                group: converted.group.to_string(),
                source: converted.source,
            });

            stats.records_processed += 1;
            if let Some(pb) = &progress {
                pb.inc(1);
            }
        }

        if let Some(pb) = progress {
            pb.finish_with_message(format!("{} records processed", stats.records_processed));
        }

        info!(
            "Pipeline complete: {} records into {} series ({} elements skipped)",
            stats.records_processed, stats.series_created, stats.elements_skipped
        );

        Ok(stats)
    }

    fn create_progress_spinner() -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {pos} records {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message("Processing records...");
        pb
    }
}
