use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use scaffolder::ProgressReporter;

/// Reports generation progress as `tracing` events.
#[derive(Default)]
pub struct TracingProgress {
    total: AtomicUsize,
    written: AtomicUsize,
}

impl ProgressReporter for TracingProgress {
    fn start(&self, total: usize) {
        self.total.store(total, Ordering::Relaxed);
        self.written.store(0, Ordering::Relaxed);
        tracing::info!(total, "writing generated files");
    }

    fn advance(&self, path: &Path) {
        let written = self.written.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::info!(
            written,
            total = self.total.load(Ordering::Relaxed),
            path = %path.display(),
            "wrote file"
        );
    }

    fn finish(&self) {
        tracing::info!(
            written = self.written.load(Ordering::Relaxed),
            "generation complete"
        );
    }
}
