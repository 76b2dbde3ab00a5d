use std::cell::RefCell;
use std::io::Write;

use crate::metrics::snapshot::TableMetricsSnapshot;
use crate::metrics::traits::MetricsExporter;

/// Prometheus text exporter for table metrics snapshots.
///
/// Writes the Prometheus text exposition format so the output can be scraped
/// or forwarded to a collector. Lives on the same thread as the table it
/// reports on.
#[derive(Debug)]
pub struct PrometheusTextExporter<W: Write> {
    prefix: String,
    writer: RefCell<W>,
}

impl<W: Write> PrometheusTextExporter<W> {
    pub fn new(prefix: impl Into<String>, writer: W) -> Self {
        Self {
            prefix: prefix.into(),
            writer: RefCell::new(writer),
        }
    }

    /// Returns the writer, e.g. to inspect a buffer after exporting.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }

    fn write_metric(&self, kind: &str, suffix: &str, value: u64) {
        let name = self.metric_name(suffix);
        let mut writer = self.writer.borrow_mut();
        let _ = writeln!(writer, "# TYPE {} {}", name, kind);
        let _ = writeln!(writer, "{} {}", name, value);
    }

    fn metric_name(&self, suffix: &str) -> String {
        if self.prefix.is_empty() {
            suffix.to_string()
        } else {
            format!("{}_{}", self.prefix, suffix)
        }
    }
}

impl<W: Write> MetricsExporter<TableMetricsSnapshot> for PrometheusTextExporter<W> {
    fn export(&self, snapshot: &TableMetricsSnapshot) {
        let counters = [
            ("lookup_calls_total", snapshot.lookup_calls),
            ("lookup_hits_total", snapshot.lookup_hits),
            ("lookup_misses_total", snapshot.lookup_misses),
            ("scan_steps_total", snapshot.scan_steps),
            ("promotions_total", snapshot.promotions),
            ("insert_calls_total", snapshot.insert_calls),
            ("insert_failures_total", snapshot.insert_failures),
            ("remove_calls_total", snapshot.remove_calls),
            ("removed_entries_total", snapshot.removed_entries),
            ("clear_calls_total", snapshot.clear_calls),
            ("peek_calls_total", snapshot.peek_calls),
            ("peek_found_total", snapshot.peek_found),
            ("peek_scan_steps_total", snapshot.peek_scan_steps),
        ];
        for (suffix, value) in counters {
            self.write_metric("counter", suffix, value);
        }
        self.write_metric("gauge", "table_len", snapshot.table_len as u64);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_writes_prefixed_counters_and_gauge() {
        let exporter = PrometheusTextExporter::new("mtf", Vec::new());
        let snapshot = TableMetricsSnapshot {
            lookup_calls: 4,
            lookup_hits: 3,
            table_len: 2,
            ..Default::default()
        };
        exporter.export(&snapshot);

        let text = String::from_utf8(exporter.into_inner()).unwrap();
        assert!(text.contains("# TYPE mtf_lookup_calls_total counter\nmtf_lookup_calls_total 4\n"));
        assert!(text.contains("mtf_lookup_hits_total 3\n"));
        assert!(text.contains("# TYPE mtf_table_len gauge\nmtf_table_len 2\n"));
    }

    /// Writer that shares its buffer through an `Rc`, so it is not `Send`.
    struct SharedBuf(std::rc::Rc<RefCell<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn export_accepts_thread_local_writer() {
        let buf = std::rc::Rc::new(RefCell::new(Vec::new()));
        let exporter = PrometheusTextExporter::new("mtf", SharedBuf(std::rc::Rc::clone(&buf)));
        exporter.export(&TableMetricsSnapshot {
            insert_failures: 1,
            ..Default::default()
        });
        exporter.export(&TableMetricsSnapshot::default());

        let text = String::from_utf8(buf.borrow().clone()).unwrap();
        assert!(text.contains("mtf_insert_failures_total 1\n"));
        assert_eq!(text.matches("# TYPE mtf_table_len gauge").count(), 2);
    }

    #[test]
    fn empty_prefix_uses_bare_names() {
        let exporter = PrometheusTextExporter::new("", Vec::new());
        exporter.export(&TableMetricsSnapshot::default());
        let text = String::from_utf8(exporter.into_inner()).unwrap();
        assert!(text.starts_with("# TYPE lookup_calls_total counter\nlookup_calls_total 0\n"));
    }
}
