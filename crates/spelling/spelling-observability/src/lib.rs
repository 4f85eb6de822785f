//! # spelling-observability
//!
//! Tracing subscriber setup, span and event definitions for learned-words
//! operations, and per-operation call/latency metrics.

pub mod metrics;
pub mod tracing_setup;

pub use metrics::{OperationMetrics, OperationSnapshot};
