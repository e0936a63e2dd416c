//! Tests for the streaming export reader


use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

/// Write XML content to a temp file and return its path with the guard
pub fn write_export(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("export.xml");
    let mut file = std::fs::File::create(&path).expect("create export file");
    file.write_all(content.as_bytes()).expect("write export");
    (dir, path)
}

/// A small but representative export document
pub const SAMPLE_EXPORT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<HealthData locale="en_US">
 <ExportDate value="2020-01-02 09:00:00 +0000"/>
 <Me HKCharacteristicTypeIdentifierBiologicalSex="HKBiologicalSexMale"/>
 <Record type="HKQuantityTypeIdentifierBodyMass" sourceName="iPhone" unit="kg" value="70.5" startDate="2020-01-01 08:00:00 +0000" endDate="2020-01-01 08:00:00 +0000"/>
 <Record type="HKQuantityTypeIdentifierHeartRate" sourceName="Apple Watch" unit="count/min" value="72.5" startDate="2020-01-01 08:00:00 +0000" endDate="2020-01-01 08:00:00 +0000">
  <MetadataEntry key="HKMetadataKeyHeartRateMotionContext" value="1"/>
 </Record>
</HealthData>
"#;
