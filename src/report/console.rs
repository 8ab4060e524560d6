//! Plain-text table for the terminal.
//!
//! Columns are right-aligned and separated by two spaces, with a zero-based
//! row index on the left. Float columns share one precision per column so the
//! decimal points line up.
//!
//! The table is never wrapped: every column is printed on one line
//! regardless of terminal width.

use super::format::{format_float, round_to, DELAY_DECIMALS, RATE_DECIMALS};
use super::COLUMNS;
use crate::data::{MetricsRow, MetricsTable};

const SEPARATOR: &str = "  ";

/// Render the whole table as text, without a trailing newline.
pub fn render(table: &MetricsTable) -> String {
    if table.is_empty() {
        return format!(
            "Empty DataFrame\nColumns: [{}]\nIndex: []",
            COLUMNS.join(", ")
        );
    }

    let index: Vec<String> = (0..table.len()).map(|i| i.to_string()).collect();
    let columns: Vec<Vec<String>> = vec![
        integer_column(&table.rows, |r| r.flow_id.to_string()),
        integer_column(&table.rows, |r| r.tx_packets.to_string()),
        integer_column(&table.rows, |r| r.rx_packets.to_string()),
        integer_column(&table.rows, |r| r.lost_packets.to_string()),
        float_column(&table.rows, RATE_DECIMALS, |r| r.throughput_kbps),
        float_column(&table.rows, DELAY_DECIMALS, |r| r.avg_delay_ms),
        float_column(&table.rows, RATE_DECIMALS, |r| r.loss_rate),
    ];

    let index_width = index.iter().map(String::len).max().unwrap_or(0);
    let widths: Vec<usize> = COLUMNS
        .iter()
        .zip(&columns)
        .map(|(header, values)| {
            values
                .iter()
                .map(|v| v.chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut lines = Vec::with_capacity(table.len() + 1);

    let mut header = " ".repeat(index_width);
    for (name, width) in COLUMNS.iter().zip(&widths) {
        header.push_str(SEPARATOR);
        header.push_str(&format!("{name:>width$}"));
    }
    lines.push(header);

    for (i, label) in index.iter().enumerate() {
        let mut line = format!("{label:<index_width$}");
        for (values, width) in columns.iter().zip(&widths) {
            line.push_str(SEPARATOR);
            line.push_str(&format!("{:>width$}", values[i]));
        }
        lines.push(line);
    }

    lines.join("\n")
}

fn integer_column(rows: &[MetricsRow], value: impl Fn(&MetricsRow) -> String) -> Vec<String> {
    rows.iter().map(value).collect()
}

/// Round each value, then pad all of them to the longest fraction in the
/// column. Falls back to per-value rendering when any value needs an exponent
/// or is not finite.
fn float_column(rows: &[MetricsRow], decimals: usize, value: impl Fn(&MetricsRow) -> f64) -> Vec<String> {
    let rounded: Vec<f64> = rows.iter().map(|r| round_to(value(r), decimals)).collect();
    let rendered: Vec<String> = rounded.iter().map(|v| format_float(*v)).collect();

    if rendered.iter().any(|s| !s.contains('.') || s.contains('e')) {
        return rendered;
    }

    let precision = rendered
        .iter()
        .filter_map(|s| s.split_once('.').map(|(_, fraction)| fraction.len()))
        .max()
        .unwrap_or(1);

    rounded.iter().map(|v| format!("{v:.precision$}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> MetricsTable {
        MetricsTable::parse(
            r#"<FlowMonitor><FlowStats>
                <Flow flowId="1" txPackets="100" rxPackets="95" lostPackets="5"
                      rxBytes="95000" delaySum="+950000000ns" timeFirstTxPacket="+0ns"
                      timeLastRxPacket="+1000000000ns"/>
                <Flow flowId="12" txPackets="3" rxPackets="3"/>
            </FlowStats></FlowMonitor>"#,
        )
        .unwrap()
    }

    #[test]
    fn test_render_aligns_columns() {
        let text = render(&table());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "   Flow ID  Tx Packets  Rx Packets  Lost Packets  Throughput (Kbps)  Avg Delay (ms)  Packet Loss Rate (%)",
                "0        1         100          95             5            742.188            10.0                   5.0",
                "1       12           3           3             0              0.000             0.0                   0.0",
            ]
        );
    }

    #[test]
    fn test_render_one_line_per_row() {
        let text = render(&table());
        assert_eq!(text.lines().count(), table().len() + 1);
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn test_render_empty() {
        let text = render(&MetricsTable::default());
        assert_eq!(
            text,
            "Empty DataFrame\n\
             Columns: [Flow ID, Tx Packets, Rx Packets, Lost Packets, Throughput (Kbps), Avg Delay (ms), Packet Loss Rate (%)]\n\
             Index: []"
        );
    }

    #[test]
    fn test_float_column_exponent_fallback() {
        let rows = vec![
            MetricsRow::from_record(&crate::data::FlowRecord::default()),
            MetricsRow {
                avg_delay_ms: 0.00005,
                ..MetricsRow::from_record(&crate::data::FlowRecord::default())
            },
        ];
        let column = float_column(&rows, DELAY_DECIMALS, |r| r.avg_delay_ms);
        assert_eq!(column, vec!["0.0".to_string(), "5e-05".to_string()]);
    }
}
