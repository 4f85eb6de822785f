//! Per-operation call counts, error counts and latency.

mod operation_metrics;

pub use operation_metrics::{OperationMetrics, OperationSnapshot};
