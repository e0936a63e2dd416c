//! Integration tests for the full export-to-JSON pipeline
//!
//! These tests write a synthetic Apple Health export document, run the reader,
//! pipeline and writer end to end, and verify the canonical values in the
//! resulting JSON file.

use anyhow::Result;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

use healthkit_processor::app::models::SeriesCollection;
use healthkit_processor::app::services::export_reader::ExportReader;
use healthkit_processor::app::services::record_converter::ExportPipeline;
use healthkit_processor::app::services::series_writer::{SeriesWriter, read_collection};

const EXPORT_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<HealthData locale="en_US">
 <ExportDate value="2020-06-03 09:00:00 +0000"/>
 <Me HKCharacteristicTypeIdentifierBiologicalSex="HKBiologicalSexMale"/>
 <Record type="HKQuantityTypeIdentifierBodyMass" sourceName="iPhone" unit="kg" value="70.5" startDate="2020-01-01 08:00:00 +0000" endDate="2020-01-01 08:00:00 +0000"/>
 <Record type="HKQuantityTypeIdentifierBodyMass" sourceName="Smart Scale" unit="kg" value="70.25" startDate="2020-01-02 08:00:00 +0000" endDate="2020-01-02 08:00:00 +0000"/>
 <Record type="HKQuantityTypeIdentifierStepCount" sourceName="iPhone" unit="count" value="9500" startDate="2020-01-01 00:00:00 +0000" endDate="2020-01-02 00:00:00 +0000"/>
 <Record type="HKCategoryTypeIdentifierSleepAnalysis" sourceName="Apple Watch" value="HKCategoryValueSleepAnalysisAsleep" startDate="2020-06-01 22:00:00 +0000" endDate="2020-06-02 06:00:00 +0000">
  <MetadataEntry key="HKMetadataKeyTimeZone" value="Europe/London"/>
 </Record>
 <Record type="HKCategoryTypeIdentifierMindfulSession" sourceName="iPhone" startDate="2020-06-02 07:00:00 +0000" endDate="2020-06-02 07:10:00 +0000"/>
</HealthData>
"#;

fn write_export(dir: &TempDir) -> Result<PathBuf> {
    let path = dir.path().join("export.xml");
    let mut file = std::fs::File::create(&path)?;
    file.write_all(EXPORT_XML.as_bytes())?;
    Ok(path)
}

fn run_pipeline(export_path: &PathBuf) -> Result<SeriesCollection> {
    let reader = ExportReader::open(export_path)?;
    let mut collection = SeriesCollection::new(export_path.display().to_string());
    ExportPipeline::new().process_elements(reader, &mut collection)?;
    Ok(collection)
}

#[test]
fn test_end_to_end_export_to_json() -> Result<()> {
    let dir = TempDir::new()?;
    let export_path = write_export(&dir)?;

    let reader = ExportReader::open(&export_path)?;
    let mut collection = SeriesCollection::new(export_path.display().to_string());
    let stats = ExportPipeline::new().process_elements(reader, &mut collection)?;

    assert_eq!(stats.records_processed, 5);
    assert_eq!(stats.elements_skipped, 2);
    assert_eq!(stats.series_created, 4);

    let json_path = dir.path().join("series.json");
    SeriesWriter::new().write(&collection, &json_path)?;
    let read_back = read_collection(&json_path)?;
    assert_eq!(read_back, collection);

    Ok(())
}

#[test]
fn test_body_mass_series_canonical_values() -> Result<()> {
    let dir = TempDir::new()?;
    let collection = run_pipeline(&write_export(&dir)?);
    let collection = collection?;

    let weight = collection
        .series
        .iter()
        .find(|s| s.name == "Weight")
        .expect("weight series");

    assert_eq!(weight.family, "BodyMeasurements");
    assert_eq!(weight.unit, "milligrams");
    assert_eq!(weight.measurements.len(), 2);

    // 70.5 kg at 2020-01-01 08:00:00 UTC
    assert_eq!(weight.measurements[0].value, 70_500_000);
    assert_eq!(weight.measurements[0].ms_since_unix_epoch, 1_577_865_600_000);
    assert_eq!(weight.measurements[0].source, "HealthKit:iPhone");
    assert_eq!(weight.measurements[0].group, "BodyMeasurements");

    // Same series, different source device
    assert_eq!(weight.measurements[1].value, 70_250_000);
    assert_eq!(weight.measurements[1].source, "HealthKit:SmartScale");

    Ok(())
}

#[test]
fn test_duration_series_canonical_values() -> Result<()> {
    let dir = TempDir::new()?;
    let collection = run_pipeline(&write_export(&dir)?)?;

    let sleep = collection
        .series
        .iter()
        .find(|s| s.name == "SleepTime")
        .expect("sleep series");
    assert_eq!(sleep.unit, "milliseconds");
    assert_eq!(sleep.measurements[0].value, 28_800_000);
    assert_eq!(sleep.measurements[0].source, "HealthKit:AppleWatch");

    let mindful = collection
        .series
        .iter()
        .find(|s| s.name == "MindfulnessTime")
        .expect("mindfulness series");
    assert_eq!(mindful.family, "TimeTracking");
    assert_eq!(mindful.measurements[0].value, 600_000);

    Ok(())
}

#[test]
fn test_unit_mismatch_aborts_whole_run() -> Result<()> {
    let bad_export = r#"<?xml version="1.0" encoding="UTF-8"?>
<HealthData>
 <Record type="HKQuantityTypeIdentifierBodyMass" sourceName="iPhone" unit="lb" value="155" startDate="2020-01-01 08:00:00 +0000" endDate="2020-01-01 08:00:00 +0000"/>
</HealthData>
"#;
    let dir = TempDir::new()?;
    let path = dir.path().join("export.xml");
    std::fs::write(&path, bad_export)?;

    let reader = ExportReader::open(&path)?;
    let mut collection = SeriesCollection::new("export.xml");
    let result = ExportPipeline::new().process_elements(reader, &mut collection);

    let message = result.unwrap_err().to_string();
    assert!(message.contains("kg"));
    assert!(message.contains("lb"));

    Ok(())
}
