//! # flowstat
//!
//! Extract per-flow QoS metrics from ns-3 FlowMonitor XML files.
//!
//! A FlowMonitor document records aggregate counters for every flow of a
//! simulation run. This crate reads one document, derives throughput,
//! average delay and packet loss rate for each flow, and renders the result
//! as CSV and as a plain-text table.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────┐    ┌───────────────────────┐    ┌──────────────────┐
//! │  source  │───▶│         data          │───▶│      report      │
//! │  (XML)   │    │ FlowRecord→MetricsRow │    │ CSV │ console    │
//! └──────────┘    └───────────────────────┘    └──────────────────┘
//! ```
//!
//! - **[`source`]**: File loading and the serde model of the XML document
//! - **[`data`]**: Typed flow counters and the derived metrics
//! - **[`report`]**: Rounding, CSV export and console rendering
//! - **[`error`]**: The crate's [`Error`] type
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Writes qos_metrics.csv to the current directory and prints the table
//! flowstat qos-results.xml
//! ```
//!
//! ### As a library
//!
//! ```
//! use flowstat::{report, MetricsTable};
//!
//! let xml = r#"<FlowMonitor><FlowStats>
//!     <Flow flowId="1" txPackets="100" rxPackets="95" lostPackets="5"
//!           rxBytes="95000" delaySum="+950000000ns"
//!           timeFirstTxPacket="+0ns" timeLastRxPacket="+1000000000ns"/>
//! </FlowStats></FlowMonitor>"#;
//!
//! let table = MetricsTable::parse(xml)?;
//! assert_eq!(table.len(), 1);
//!
//! let csv = String::from_utf8(report::to_csv(&table)?).unwrap();
//! assert!(csv.ends_with("1,100,95,5,742.188,10.0,5.0\n"));
//! # Ok::<(), flowstat::Error>(())
//! ```

pub mod data;
pub mod error;
pub mod report;
pub mod source;

pub use data::{FlowRecord, MetricsRow, MetricsTable};
pub use error::{Error, Result};
pub use source::{FileSource, FlowMonitorDocument, RawFlow};
