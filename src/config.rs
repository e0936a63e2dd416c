//! Configuration management and validation.
//!
//! Provides the processing configuration derived from CLI arguments:
//! input/output locations and presentation options for the run.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// Processing configuration for a HealthKit export run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the Apple Health `export.xml` file
    pub input_path: PathBuf,

    /// Path of the JSON series collection to write
    pub output_path: PathBuf,

    /// Pretty-print the JSON output
    pub pretty_output: bool,

    /// Show a progress spinner while records are processed
    pub show_progress: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("export.xml"),
            output_path: PathBuf::from("series.json"),
            pretty_output: false,
            show_progress: true,
        }
    }
}

impl Config {
    /// Create a configuration for the given input and output paths
    pub fn new(input_path: PathBuf, output_path: PathBuf) -> Self {
        Self {
            input_path,
            output_path,
            ..Default::default()
        }
    }

    /// Enable pretty-printed JSON output
    pub fn with_pretty_output(mut self) -> Self {
        self.pretty_output = true;
        self
    }

    /// Disable the processing progress spinner
    pub fn without_progress(mut self) -> Self {
        self.show_progress = false;
        self
    }

    /// Validate the configuration against the filesystem
    ///
    /// The input file must exist; the output file's parent directory must
    /// exist (the output file itself is created or overwritten).
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration: {:?}", self);

        if !self.input_path.is_file() {
            return Err(Error::file_not_found(self.input_path.display().to_string()));
        }

        if let Some(parent) = self.output_path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.is_dir()
        {
            return Err(Error::configuration(format!(
                "Output directory does not exist: {}",
                parent.display()
            )));
        }

        Ok(())
    }
}
