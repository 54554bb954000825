//! Lightweight in-process metrics.
//!
//! Stored as atomics and rendered on demand in Prometheus text format.

pub mod metrics;

pub use metrics::ProxyMetrics;
