// ==========================================
// Reorder Forecast - timing guard
// ==========================================
// Logs elapsed time (and optionally a row count) for a named operation
// when the guard goes out of scope. Target: "perf".
// ==========================================

use std::time::Instant;

/// Timing guard: logs on drop
///
/// ```ignore
/// let mut perf = reorder_forecast::perf::PerfGuard::new("forecast");
/// // do work...
/// perf.set_rows(rows.len());
/// ```
pub struct PerfGuard {
    op: &'static str,
    start: Instant,
    rows: Option<usize>,
}

impl PerfGuard {
    pub fn new(op: &'static str) -> Self {
        Self {
            op,
            start: Instant::now(),
            rows: None,
        }
    }

    /// Row count reported with the timing
    pub fn set_rows(&mut self, rows: usize) {
        self.rows = Some(rows);
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

impl Drop for PerfGuard {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        match self.rows {
            Some(rows) => tracing::info!(target: "perf", op = self.op, elapsed_ms, rows, "done"),
            None => tracing::info!(target: "perf", op = self.op, elapsed_ms, "done"),
        }
    }
}
