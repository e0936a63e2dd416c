//! JSON writer for the populated series collection
//!
//! The processor's output is one JSON document holding the whole
//! [`SeriesCollection`]: series in creation order, measurements in input
//! order. Compact output is the default; pretty-printing is an option for
//! human inspection.

#[cfg(test)]
pub mod tests;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::app::models::SeriesCollection;
use crate::{Error, Result};

/// Writer for series-collection JSON files
#[derive(Debug, Clone, Copy, Default)]
pub struct SeriesWriter {
    pretty: bool,
}

impl SeriesWriter {
    /// Create a writer producing compact JSON
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer producing pretty-printed JSON
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    /// Write the collection to `path`, returning the output size in bytes
    pub fn write(&self, collection: &SeriesCollection, path: &Path) -> Result<u64> {
        let file = File::create(path).map_err(|e| {
            Error::io(format!("Failed to create output file {}", path.display()), e)
        })?;
        let mut writer = BufWriter::new(file);

        if self.pretty {
            serde_json::to_writer_pretty(&mut writer, collection)
        } else {
            serde_json::to_writer(&mut writer, collection)
        }
        .map_err(|e| Error::json_writing(format!("Failed to serialize {}", path.display()), e))?;

        writer
            .flush()
            .map_err(|e| Error::io(format!("Failed to flush {}", path.display()), e))?;

        let size = std::fs::metadata(path).map(|m| m.len()).unwrap_or(0);
        info!(
            "Wrote {} series ({} measurements, {} bytes) to {}",
            collection.series.len(),
            collection.measurement_count(),
            size,
            path.display()
        );

        Ok(size)
    }
}

/// Read a previously written series-collection JSON file
pub fn read_collection(path: &Path) -> Result<SeriesCollection> {
    let file = File::open(path)
        .map_err(|e| Error::io(format!("Failed to open {}", path.display()), e))?;
    serde_json::from_reader(std::io::BufReader::new(file))
        .map_err(|e| Error::json_writing(format!("Failed to parse {}", path.display()), e))
}
