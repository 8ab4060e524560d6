//! Error types for flow metric extraction.

use thiserror::Error;

/// Errors that can occur while extracting flow metrics.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading the input or writing the output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input is not well-formed XML or lacks the `FlowStats` container.
    #[error("Failed to parse FlowMonitor document: {0}")]
    Xml(#[from] quick_xml::DeError),

    /// A numeric attribute on a `Flow` element could not be converted.
    #[error("Flow #{flow}: invalid {attribute} value {value:?}: {reason}")]
    InvalidAttribute {
        /// Zero-based position of the flow in document order.
        flow: usize,
        attribute: &'static str,
        value: String,
        reason: String,
    },

    /// Serializing the CSV report failed.
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
