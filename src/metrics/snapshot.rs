#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TableMetricsSnapshot {
    pub lookup_calls: u64,
    pub lookup_hits: u64,
    pub lookup_misses: u64,
    pub scan_steps: u64, // comparator calls made by lookup and remove
    pub promotions: u64,

    pub insert_calls: u64,
    pub insert_failures: u64,

    pub remove_calls: u64,
    pub removed_entries: u64,
    pub clear_calls: u64,

    pub peek_calls: u64,
    pub peek_found: u64,
    pub peek_scan_steps: u64,

    // gauge captured at snapshot time
    pub table_len: usize,
}

impl TableMetricsSnapshot {
    /// Fraction of lookups that hit, or `0.0` before the first lookup.
    pub fn hit_ratio(&self) -> f64 {
        if self.lookup_calls == 0 {
            0.0
        } else {
            self.lookup_hits as f64 / self.lookup_calls as f64
        }
    }

    /// Mean comparator calls per lookup/remove scan; low values mean the
    /// move-to-front order is paying off.
    pub fn mean_scan_depth(&self) -> f64 {
        let scans = self.lookup_calls + self.remove_calls;
        if scans == 0 {
            0.0
        } else {
            self.scan_steps as f64 / scans as f64
        }
    }
}
