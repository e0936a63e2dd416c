//! Tests for the JSON series writer

use crate::app::models::{Measurement, Series, SeriesCollection};
use crate::app::services::series_writer::{SeriesWriter, read_collection};
use tempfile::TempDir;

fn sample_collection() -> SeriesCollection {
    let mut collection = SeriesCollection::new("export.xml");
    let index = collection.add_series();
    let series = &mut collection.series[index];
    series.set_metadata("Weight", "BodyMeasurements", "milligrams");
    series.add_measurement(Measurement {
        ms_since_unix_epoch: 1_577_865_600_000,
        value: 70_500_000,
        group: "BodyMeasurements".to_string(),
        source: "HealthKit:iPhone".to_string(),
    });
    collection
}

#[test]
fn test_write_and_read_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("series.json");

    let collection = sample_collection();
    let size = SeriesWriter::new().write(&collection, &path).unwrap();
    assert!(size > 0);

    let read_back = read_collection(&path).unwrap();
    assert_eq!(read_back, collection);
}

#[test]
fn test_pretty_output_round_trips_and_is_larger() {
    let dir = TempDir::new().unwrap();
    let compact_path = dir.path().join("compact.json");
    let pretty_path = dir.path().join("pretty.json");

    let collection = sample_collection();
    let compact_size = SeriesWriter::new().write(&collection, &compact_path).unwrap();
    let pretty_size = SeriesWriter::pretty().write(&collection, &pretty_path).unwrap();

    assert!(pretty_size > compact_size);
    assert_eq!(read_collection(&pretty_path).unwrap(), collection);
}

#[test]
fn test_empty_collection_serializes() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.json");

    let collection = SeriesCollection::new("export.xml");
    SeriesWriter::new().write(&collection, &path).unwrap();

    let read_back = read_collection(&path).unwrap();
    assert_eq!(read_back.source, "export.xml");
    assert!(read_back.series.is_empty());
}

#[test]
fn test_write_to_missing_directory_is_error() {
    let collection = sample_collection();
    let result = SeriesWriter::new().write(
        &collection,
        std::path::Path::new("/nonexistent/dir/series.json"),
    );
    assert!(result.is_err());
}

#[test]
fn test_series_preserve_creation_order() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("series.json");

    let mut collection = SeriesCollection::new("export.xml");
    for (name, family, unit) in [
        ("Weight", "BodyMeasurements", "milligrams"),
        ("StepCount", "Activity", "count"),
        ("WaterConsumed", "Diet", "milliliters"),
    ] {
        let index = collection.add_series();
        collection.series[index].set_metadata(name, family, unit);
    }

    SeriesWriter::new().write(&collection, &path).unwrap();
    let read_back = read_collection(&path).unwrap();

    let names: Vec<&str> = read_back.series.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Weight", "StepCount", "WaterConsumed"]);
}

#[test]
fn test_measurement_fields_survive_serialization() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("series.json");

    SeriesWriter::new().write(&sample_collection(), &path).unwrap();
    let read_back = read_collection(&path).unwrap();

    let series: &Series = &read_back.series[0];
    assert_eq!(series.unit, "milligrams");
    let measurement = &series.measurements[0];
    assert_eq!(measurement.ms_since_unix_epoch, 1_577_865_600_000);
    assert_eq!(measurement.value, 70_500_000);
    assert_eq!(measurement.group, "BodyMeasurements");
    assert_eq!(measurement.source, "HealthKit:iPhone");
}
