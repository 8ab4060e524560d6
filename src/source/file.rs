//! File-based document loading.
//!
//! Reads a FlowMonitor XML file in one go and deserializes it.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use super::FlowMonitorDocument;
use crate::error::Result;

/// A FlowMonitor XML file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a new file source for the given path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Read and parse the file.
    ///
    /// Fails if the file cannot be read, is not well-formed XML, or has no
    /// `FlowStats` container.
    pub fn load(&self) -> Result<FlowMonitorDocument> {
        let content = fs::read_to_string(&self.path)?;
        let document = FlowMonitorDocument::from_xml(&content)?;
        info!(
            path = %self.path.display(),
            flows = document.flows().len(),
            "loaded FlowMonitor document"
        );
        Ok(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn sample_xml() -> &'static str {
        r#"<FlowMonitor>
  <FlowStats>
    <Flow flowId="1" txPackets="100" rxPackets="95" lostPackets="5"/>
    <Flow flowId="2" txPackets="10" rxPackets="10" lostPackets="0"/>
  </FlowStats>
</FlowMonitor>"#
    }

    #[test]
    fn test_file_source_load() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", sample_xml()).unwrap();

        let document = FileSource::new(file.path()).load().unwrap();
        assert_eq!(document.flows().len(), 2);
        assert_eq!(document.flows()[1].flow_id.as_deref(), Some("2"));
    }

    #[test]
    fn test_file_source_missing_file() {
        let result = FileSource::new("/nonexistent/path/qos-results.xml").load();
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_file_source_invalid_xml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not valid xml").unwrap();

        let result = FileSource::new(file.path()).load();
        assert!(matches!(result, Err(Error::Xml(_))));
    }
}
