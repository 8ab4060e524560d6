//! Data models and metric computation.
//!
//! ## Submodules
//!
//! - [`duration`]: Decoding of ns-3 time strings (e.g., "+950000000ns")
//! - [`flow`]: Typed per-flow counters ([`FlowRecord`])
//! - [`metrics`]: Derived QoS metrics ([`MetricsRow`], [`MetricsTable`])
//!
//! ## Data Flow
//!
//! ```text
//! FlowMonitorDocument (raw XML attributes)
//!        │
//!        ▼
//! FlowRecord::from_raw()      defaults + numeric conversion
//!        │
//!        ▼
//! MetricsRow::from_record()   throughput, delay, loss
//!        │
//!        ▼
//! MetricsTable (document order)
//! ```

pub mod duration;
pub mod flow;
pub mod metrics;

pub use flow::FlowRecord;
pub use metrics::{MetricsRow, MetricsTable};
