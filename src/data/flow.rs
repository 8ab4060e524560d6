//! Typed per-flow counters.

use std::str::FromStr;

use tracing::debug;

use super::duration::{parse_nanos, ZERO_NANOS};
use crate::error::{Error, Result};
use crate::source::RawFlow;

/// Flow identifier used when the attribute is absent.
pub const UNKNOWN_FLOW_ID: i64 = -1;

/// Counters and timestamps of a single flow, converted to their semantic types.
///
/// Time fields are nanoseconds.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowRecord {
    pub flow_id: i64,
    pub tx_packets: u64,
    pub rx_packets: u64,
    pub lost_packets: u64,
    pub tx_bytes: u64,
    pub rx_bytes: u64,
    pub delay_sum_ns: f64,
    pub time_first_tx_ns: f64,
    pub time_last_rx_ns: f64,
}

impl Default for FlowRecord {
    fn default() -> Self {
        Self {
            flow_id: UNKNOWN_FLOW_ID,
            tx_packets: 0,
            rx_packets: 0,
            lost_packets: 0,
            tx_bytes: 0,
            rx_bytes: 0,
            delay_sum_ns: 0.0,
            time_first_tx_ns: 0.0,
            time_last_rx_ns: 0.0,
        }
    }
}

impl FlowRecord {
    /// Convert the raw attributes of the flow at `index` (document order).
    ///
    /// Absent attributes take their defaults. A present attribute that does
    /// not parse is an error; there is no per-flow recovery.
    pub fn from_raw(index: usize, raw: &RawFlow) -> Result<Self> {
        let record = Self {
            flow_id: integer(index, "flowId", raw.flow_id.as_deref(), UNKNOWN_FLOW_ID)?,
            tx_packets: integer(index, "txPackets", raw.tx_packets.as_deref(), 0)?,
            rx_packets: integer(index, "rxPackets", raw.rx_packets.as_deref(), 0)?,
            lost_packets: integer(index, "lostPackets", raw.lost_packets.as_deref(), 0)?,
            tx_bytes: integer(index, "txBytes", raw.tx_bytes.as_deref(), 0)?,
            rx_bytes: integer(index, "rxBytes", raw.rx_bytes.as_deref(), 0)?,
            delay_sum_ns: nanos(index, "delaySum", raw.delay_sum.as_deref())?,
            time_first_tx_ns: nanos(index, "timeFirstTxPacket", raw.time_first_tx_packet.as_deref())?,
            time_last_rx_ns: nanos(index, "timeLastRxPacket", raw.time_last_rx_packet.as_deref())?,
        };
        debug!(index, flow_id = record.flow_id, "parsed flow");
        Ok(record)
    }
}

fn integer<T>(index: usize, attribute: &'static str, value: Option<&str>, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let Some(value) = value else {
        return Ok(default);
    };
    value.trim().parse().map_err(|e: T::Err| Error::InvalidAttribute {
        flow: index,
        attribute,
        value: value.to_string(),
        reason: e.to_string(),
    })
}

fn nanos(index: usize, attribute: &'static str, value: Option<&str>) -> Result<f64> {
    let value = value.unwrap_or(ZERO_NANOS);
    parse_nanos(value).map_err(|e| Error::InvalidAttribute {
        flow: index,
        attribute,
        value: value.to_string(),
        reason: e.to_string(),
    })
}
