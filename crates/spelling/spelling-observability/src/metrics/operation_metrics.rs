use std::collections::BTreeMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Aggregated counters for one named operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OperationSnapshot {
    pub calls: u64,
    pub errors: u64,
    pub total_latency: Duration,
    pub max_latency: Duration,
}

impl OperationSnapshot {
    /// Mean latency per call, zero before the first call.
    pub fn mean_latency(&self) -> Duration {
        if self.calls == 0 {
            return Duration::ZERO;
        }
        let nanos = self.total_latency.as_nanos() / u128::from(self.calls);
        Duration::new(
            (nanos / NANOS_PER_SEC) as u64,
            (nanos % NANOS_PER_SEC) as u32,
        )
    }
}

/// Thread-safe timing registry keyed by operation name.
#[derive(Debug, Default)]
pub struct OperationMetrics {
    prefix: String,
    operations: Mutex<BTreeMap<String, OperationSnapshot>>,
}

impl OperationMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Metrics whose operation names are reported as `<prefix>.<operation>`.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            operations: Mutex::new(BTreeMap::new()),
        }
    }

    fn key(&self, operation: &str) -> String {
        if self.prefix.is_empty() {
            operation.to_string()
        } else {
            format!("{}.{}", self.prefix, operation)
        }
    }

    /// Record one completed call.
    pub fn record(&self, operation: &str, latency: Duration, succeeded: bool) {
        let key = self.key(operation);
        let mut operations = self.operations.lock().unwrap_or_else(|e| e.into_inner());
        let entry = operations.entry(key).or_default();
        entry.calls += 1;
        if !succeeded {
            entry.errors += 1;
        }
        entry.total_latency += latency;
        entry.max_latency = entry.max_latency.max(latency);
    }

    /// Run `f`, recording its latency and whether it returned `Ok`.
    pub fn time<T, E>(&self, operation: &str, f: impl FnOnce() -> Result<T, E>) -> Result<T, E> {
        let started = Instant::now();
        let result = f();
        let elapsed = started.elapsed();
        self.record(operation, elapsed, result.is_ok());
        tracing::trace!(
            operation = %self.key(operation),
            latency_us = elapsed.as_micros() as u64,
            ok = result.is_ok(),
            "operation timed"
        );
        result
    }

    /// Counters for one operation, `None` if it was never recorded.
    pub fn snapshot(&self, operation: &str) -> Option<OperationSnapshot> {
        let key = self.key(operation);
        self.operations
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(&key)
            .cloned()
    }

    /// Counters for every recorded operation, sorted by name.
    pub fn snapshots(&self) -> BTreeMap<String, OperationSnapshot> {
        self.operations
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Clear all counters.
    pub fn reset(&self) {
        self.operations
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
    }
}
