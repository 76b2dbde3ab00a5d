use crate::metrics::cell::MetricsCell;
use crate::metrics::snapshot::TableMetricsSnapshot;
use crate::metrics::traits::{TableMetricsReadRecorder, TableMetricsRecorder};

#[derive(Debug, Default)]
pub struct TableMetrics {
    pub lookup_calls: u64,
    pub lookup_hits: u64,
    pub lookup_misses: u64,
    pub scan_steps: u64,
    pub promotions: u64,
    pub insert_calls: u64,
    pub insert_failures: u64,
    pub remove_calls: u64,
    pub removed_entries: u64,
    pub clear_calls: u64,
    pub peek_calls: MetricsCell,
    pub peek_found: MetricsCell,
    pub peek_scan_steps: MetricsCell,
}

impl TableMetrics {
    pub fn new() -> TableMetrics {
        Self::default()
    }

    pub fn snapshot(&self, table_len: usize) -> TableMetricsSnapshot {
        TableMetricsSnapshot {
            lookup_calls: self.lookup_calls,
            lookup_hits: self.lookup_hits,
            lookup_misses: self.lookup_misses,
            scan_steps: self.scan_steps,
            promotions: self.promotions,
            insert_calls: self.insert_calls,
            insert_failures: self.insert_failures,
            remove_calls: self.remove_calls,
            removed_entries: self.removed_entries,
            clear_calls: self.clear_calls,
            peek_calls: self.peek_calls.get(),
            peek_found: self.peek_found.get(),
            peek_scan_steps: self.peek_scan_steps.get(),
            table_len,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl TableMetricsRecorder for TableMetrics {
    fn record_lookup_hit(&mut self) {
        self.lookup_calls += 1;
        self.lookup_hits += 1;
    }

    fn record_lookup_miss(&mut self) {
        self.lookup_calls += 1;
        self.lookup_misses += 1;
    }

    fn record_scan_step(&mut self) {
        self.scan_steps += 1;
    }

    fn record_promotion(&mut self) {
        self.promotions += 1;
    }

    fn record_insert(&mut self) {
        self.insert_calls += 1;
    }

    fn record_insert_failed(&mut self) {
        self.insert_failures += 1;
    }

    fn record_remove_call(&mut self) {
        self.remove_calls += 1;
    }

    fn record_removed_entry(&mut self) {
        self.removed_entries += 1;
    }

    fn record_clear(&mut self) {
        self.clear_calls += 1;
    }
}

impl TableMetricsReadRecorder for TableMetrics {
    fn record_peek_call(&self) {
        self.peek_calls.incr();
    }

    fn record_peek_found(&self) {
        self.peek_found.incr();
    }

    fn record_peek_scan_step(&self) {
        self.peek_scan_steps.incr();
    }
}
