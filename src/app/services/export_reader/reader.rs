//! Core streaming XML reader implementation

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use tracing::{debug, info};

use super::HealthElement;
use crate::constants::ROOT_ELEMENT;
use crate::{Error, Result};

/// Streaming reader over the top-level children of a HealthData document
///
/// Implements `Iterator<Item = Result<HealthElement>>` so the pipeline can
/// consume elements lazily and surface XML failures through its own
/// fail-fast channel.
#[derive(Debug)]
pub struct ExportReader {
    reader: Reader<BufReader<File>>,
    buf: Vec<u8>,
    file: String,
    inside_root: bool,
    finished: bool,
}

impl ExportReader {
    /// Open an export file for streaming
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .map_err(|e| Error::io(format!("Failed to open export file {}", path.display()), e))?;

        info!("Reading from XML file {}", path.display());

        Ok(Self {
            reader: Reader::from_reader(BufReader::new(file)),
            buf: Vec::new(),
            file: path.display().to_string(),
            inside_root: false,
            finished: false,
        })
    }

    /// Read the next top-level element under the HealthData root
    ///
    /// Returns `Ok(None)` when the root element closes. Anything before the
    /// root (declaration, doctype, whitespace) is consumed silently; a
    /// document whose first element is not `<HealthData>` is an error.
    pub fn next_element(&mut self) -> Result<Option<HealthElement>> {
        if self.finished {
            return Ok(None);
        }

        loop {
            self.buf.clear();
            let event = self
                .reader
                .read_event_into(&mut self.buf)
                .map_err(|e| Error::xml_parsing(&self.file, e.to_string()))?;

            match event {
                Event::Start(start) => {
                    if !self.inside_root {
                        Self::check_root(&start, &self.file)?;
                        self.inside_root = true;
                        debug!("Entered {} root element", ROOT_ELEMENT);
                        continue;
                    }

                    let element = Self::element_from_start(&start, &self.file)?;
                    let end = start.to_end().into_owned();

                    // Children of a top-level element (e.g. MetadataEntry)
                    // are not part of the attribute vocabulary; skip them.
                    let mut skip_buf = Vec::new();
                    self.reader
                        .read_to_end_into(end.name(), &mut skip_buf)
                        .map_err(|e| Error::xml_parsing(&self.file, e.to_string()))?;

                    return Ok(Some(element));
                }
                Event::Empty(start) => {
                    if !self.inside_root {
                        // An empty root holds no elements at all.
                        Self::check_root(&start, &self.file)?;
                        self.finished = true;
                        return Ok(None);
                    }
                    return Ok(Some(Self::element_from_start(&start, &self.file)?));
                }
                Event::End(_) => {
                    // Only the root's end tag can reach this depth.
                    self.finished = true;
                    return Ok(None);
                }
                Event::Eof => {
                    if !self.inside_root {
                        return Err(Error::xml_parsing(
                            &self.file,
                            format!("No {} root element found", ROOT_ELEMENT),
                        ));
                    }
                    self.finished = true;
                    return Ok(None);
                }
                // Declaration, doctype, text, comments, processing
                // instructions carry no elements.
                _ => {}
            }
        }
    }

    fn check_root(start: &BytesStart<'_>, file: &str) -> Result<()> {
        if start.name().as_ref() != ROOT_ELEMENT.as_bytes() {
            return Err(Error::xml_parsing(
                file,
                format!(
                    "Expected {} root element, found '{}'",
                    ROOT_ELEMENT,
                    String::from_utf8_lossy(start.name().as_ref())
                ),
            ));
        }
        Ok(())
    }

    fn element_from_start(start: &BytesStart<'_>, file: &str) -> Result<HealthElement> {
        let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();

        let mut attributes = Vec::new();
        for attribute in start.attributes() {
            let attribute = attribute
                .map_err(|e| Error::xml_parsing(file, format!("Malformed attribute: {}", e)))?;
            let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
            let value = attribute
                .unescape_value()
                .map_err(|e| Error::xml_parsing(file, e.to_string()))?
                .into_owned();
            attributes.push((key, value));
        }

        Ok(HealthElement { name, attributes })
    }
}

impl Iterator for ExportReader {
    type Item = Result<HealthElement>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_element().transpose()
    }
}
