//! Shared types for FlowMonitor documents.
//!
//! These types match the XML written by ns-3's
//! `FlowMonitor::SerializeToXmlFile`. Only the `FlowStats` section is
//! mapped; classifier and probe sections are skipped during
//! deserialization.
//!
//! Attributes are kept as raw strings so that defaulting and numeric
//! conversion happen in one place ([`crate::data::FlowRecord`]).

use serde::Deserialize;

/// A complete FlowMonitor document.
///
/// The root element name is not checked; ns-3 writes `FlowMonitor`.
#[derive(Debug, Clone, Deserialize)]
pub struct FlowMonitorDocument {
    /// The per-flow statistics container. Required.
    #[serde(rename = "FlowStats")]
    pub flow_stats: FlowStats,
}

impl FlowMonitorDocument {
    /// Deserialize a document from XML text.
    pub fn from_xml(content: &str) -> Result<Self, quick_xml::DeError> {
        quick_xml::de::from_str(content)
    }

    /// Flows in document order.
    pub fn flows(&self) -> &[RawFlow] {
        &self.flow_stats.flows
    }
}

/// The `FlowStats` container.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FlowStats {
    /// `Flow` children in document order. May be empty.
    #[serde(rename = "Flow", default)]
    pub flows: Vec<RawFlow>,
}

/// Raw attributes of a single `Flow` element.
///
/// Absent attributes are `None`. Histogram children and attributes not
/// listed here are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFlow {
    #[serde(rename = "@flowId")]
    pub flow_id: Option<String>,

    #[serde(rename = "@txPackets")]
    pub tx_packets: Option<String>,

    #[serde(rename = "@rxPackets")]
    pub rx_packets: Option<String>,

    #[serde(rename = "@lostPackets")]
    pub lost_packets: Option<String>,

    #[serde(rename = "@txBytes")]
    pub tx_bytes: Option<String>,

    #[serde(rename = "@rxBytes")]
    pub rx_bytes: Option<String>,

    /// Sum of end-to-end delays of received packets.
    /// Format: signed nanoseconds with unit suffix (e.g., "+950000000ns").
    #[serde(rename = "@delaySum")]
    pub delay_sum: Option<String>,

    /// Format: signed nanoseconds with unit suffix (e.g., "+2e+09ns").
    #[serde(rename = "@timeFirstTxPacket")]
    pub time_first_tx_packet: Option<String>,

    /// Format: signed nanoseconds with unit suffix.
    #[serde(rename = "@timeLastRxPacket")]
    pub time_last_rx_packet: Option<String>,
}
