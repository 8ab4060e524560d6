//! Input side: reading FlowMonitor documents.
//!
//! [`FileSource`] reads an XML file from disk and [`FlowMonitorDocument`]
//! holds the deserialized, still untyped, flow attributes.

mod document;
mod file;

pub use document::{FlowMonitorDocument, FlowStats, RawFlow};
pub use file::FileSource;
