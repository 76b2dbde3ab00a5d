//! # Metrics Traits
//!
//! ```text
//!   ┌─────────────────────────────┐   ┌─────────────────────────────┐
//!   │   TableMetricsRecorder      │   │  TableMetricsReadRecorder   │
//!   │   (&mut self paths)         │   │  (&self paths)              │
//!   │   lookup hit/miss, scan,    │   │  peek call/found/scan       │
//!   │   promotion, insert,        │   │                             │
//!   │   remove, clear             │   │                             │
//!   └──────────────┬──────────────┘   └──────────────┬──────────────┘
//!                  └────────────────┬────────────────┘
//!                                   ▼
//!   ┌──────────────────────────────┐    ┌──────────────────────────────┐
//!   │ MetricsSnapshotProvider<S>   │    │ MetricsExporter<S>           │
//!   │ (bench/test)                 │    │ (production monitoring)      │
//!   └──────────────────────────────┘    └──────────────────────────────┘
//! ```

/// Counters for operations that take `&mut self`.
pub trait TableMetricsRecorder {
    fn record_lookup_hit(&mut self);
    fn record_lookup_miss(&mut self);
    /// One entry compared during a `lookup` or `remove` scan.
    fn record_scan_step(&mut self);
    /// A hit that actually relinked an entry (it was not already first).
    fn record_promotion(&mut self);
    fn record_insert(&mut self);
    fn record_insert_failed(&mut self);
    fn record_remove_call(&mut self);
    fn record_removed_entry(&mut self);
    fn record_clear(&mut self);
}

/// Counters for non-promoting reads (interior mutability).
pub trait TableMetricsReadRecorder {
    fn record_peek_call(&self);
    fn record_peek_found(&self);
    fn record_peek_scan_step(&self);
}

/// Produce a point-in-time copy of the counters.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}

/// Publish a snapshot to a monitoring sink.
pub trait MetricsExporter<S> {
    fn export(&self, snapshot: &S);
}
