//! Optional counters for table operations (`metrics` feature).
//!
//! Recorders only write counters, [`MetricsSnapshotProvider`] reads them and
//! [`MetricsExporter`] publishes a snapshot. With the feature disabled none
//! of this is compiled and the table carries no counter fields.
//!
//! [`MetricsSnapshotProvider`]: traits::MetricsSnapshotProvider
//! [`MetricsExporter`]: traits::MetricsExporter

pub mod cell;
pub mod exporter;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;
