//! Output side: CSV export and console rendering.
//!
//! Both outputs share the column set in [`COLUMNS`] and the number rendering
//! in [`format`]. Rounding happens here, never in [`crate::data`].

pub mod console;
pub mod export;
pub mod format;

pub use export::{to_csv, write_csv, DEFAULT_OUTPUT_FILE};

use crate::data::MetricsRow;
use format::{format_rounded, DELAY_DECIMALS, RATE_DECIMALS};

/// Column headers, in output order.
pub const COLUMNS: [&str; 7] = [
    "Flow ID",
    "Tx Packets",
    "Rx Packets",
    "Lost Packets",
    "Throughput (Kbps)",
    "Avg Delay (ms)",
    "Packet Loss Rate (%)",
];

/// Format one row's fields in [`COLUMNS`] order.
pub fn cells(row: &MetricsRow) -> [String; 7] {
    [
        row.flow_id.to_string(),
        row.tx_packets.to_string(),
        row.rx_packets.to_string(),
        row.lost_packets.to_string(),
        format_rounded(row.throughput_kbps, RATE_DECIMALS),
        format_rounded(row.avg_delay_ms, DELAY_DECIMALS),
        format_rounded(row.loss_rate, RATE_DECIMALS),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::FlowRecord;

    #[test]
    fn test_cells_reference_flow() {
        let row = MetricsRow::from_record(&FlowRecord {
            flow_id: 1,
            tx_packets: 100,
            rx_packets: 95,
            lost_packets: 5,
            tx_bytes: 100_000,
            rx_bytes: 95_000,
            delay_sum_ns: 950_000_000.0,
            time_first_tx_ns: 0.0,
            time_last_rx_ns: 1_000_000_000.0,
        });
        assert_eq!(cells(&row), ["1", "100", "95", "5", "742.188", "10.0", "5.0"]);
    }

    #[test]
    fn test_cells_default_flow() {
        let row = MetricsRow::from_record(&FlowRecord::default());
        assert_eq!(cells(&row), ["-1", "0", "0", "0", "0.0", "0.0", "0.0"]);
    }

    #[test]
    fn test_cells_rounding_precision() {
        let row = MetricsRow {
            throughput_kbps: 1.23456,
            avg_delay_ms: 1.23456789,
            loss_rate: 33.333333,
            ..MetricsRow::from_record(&FlowRecord::default())
        };
        let cells = cells(&row);
        assert_eq!(cells[4], "1.235");
        assert_eq!(cells[5], "1.234568");
        assert_eq!(cells[6], "33.333");
    }
}
