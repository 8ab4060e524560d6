//! Derived QoS metrics.
//!
//! This module turns [`FlowRecord`]s into [`MetricsRow`]s. Each metric has an
//! explicit zero-denominator branch that yields `0.0`; degenerate flows are
//! not errors.

use std::path::Path;

use tracing::warn;

use super::flow::FlowRecord;
use crate::error::Result;
use crate::source::{FileSource, FlowMonitorDocument};

const BITS_PER_BYTE: f64 = 8.0;
const NANOS_PER_SEC: f64 = 1e9;
const NANOS_PER_MILLI: f64 = 1e6;
const BITS_PER_KILOBIT: f64 = 1024.0;

/// Metrics for a single flow.
///
/// Values are unrounded; rounding happens when the row is formatted.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsRow {
    pub flow_id: i64,
    pub tx_packets: u64,
    pub rx_packets: u64,
    pub lost_packets: u64,
    pub tx_bytes: u64,
    pub rx_bytes: u64,
    /// Active window of the flow, first transmission to last reception,
    /// clamped to zero.
    pub duration_ns: f64,
    pub throughput_kbps: f64,
    pub avg_delay_ms: f64,
    /// Percentage of transmitted packets that were lost.
    pub loss_rate: f64,
}

impl MetricsRow {
    /// Compute the derived metrics for a flow.
    pub fn from_record(record: &FlowRecord) -> Self {
        let span = record.time_last_rx_ns - record.time_first_tx_ns;
        if span < 0.0 {
            warn!(
                flow_id = record.flow_id,
                span_ns = span,
                "last reception precedes first transmission, treating duration as zero"
            );
        }
        let duration_ns = span.max(0.0);

        let throughput_kbps = if duration_ns > 0.0 {
            record.rx_bytes as f64 * BITS_PER_BYTE / duration_ns * NANOS_PER_SEC / BITS_PER_KILOBIT
        } else {
            0.0
        };

        let avg_delay_ms = if record.rx_packets > 0 {
            record.delay_sum_ns / record.rx_packets as f64 / NANOS_PER_MILLI
        } else {
            0.0
        };

        let loss_rate = if record.tx_packets > 0 {
            record.lost_packets as f64 / record.tx_packets as f64 * 100.0
        } else {
            0.0
        };

        Self {
            flow_id: record.flow_id,
            tx_packets: record.tx_packets,
            rx_packets: record.rx_packets,
            lost_packets: record.lost_packets,
            tx_bytes: record.tx_bytes,
            rx_bytes: record.rx_bytes,
            duration_ns,
            throughput_kbps,
            avg_delay_ms,
            loss_rate,
        }
    }
}

/// All flow metrics of one document, in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricsTable {
    pub rows: Vec<MetricsRow>,
}

impl MetricsTable {
    /// Load a FlowMonitor XML file and compute its metrics.
    pub fn load(path: &Path) -> Result<Self> {
        let document = FileSource::new(path).load()?;
        Self::from_document(&document)
    }

    /// Parse a FlowMonitor XML string and compute its metrics.
    pub fn parse(content: &str) -> Result<Self> {
        let document = FlowMonitorDocument::from_xml(content)?;
        Self::from_document(&document)
    }

    /// Convert a document into metrics.
    ///
    /// Fails on the first flow with a malformed attribute.
    pub fn from_document(document: &FlowMonitorDocument) -> Result<Self> {
        let rows = document
            .flows()
            .iter()
            .enumerate()
            .map(|(index, raw)| {
                FlowRecord::from_raw(index, raw).map(|record| MetricsRow::from_record(&record))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
