//! Pipeline metrics and observability.
//!
//! Counters for the localization and narration pipelines: how often the
//! canonical short-circuit fired, how many external calls were made, and how
//! many of them failed and fell back to the degraded path.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Global pipeline metrics singleton.
pub struct PipelineMetrics {
    /// Canonical-language requests that skipped the translation service
    identity_passthroughs: AtomicUsize,

    /// Calls made to the translation service
    translation_calls: AtomicUsize,

    /// Translation calls that failed and fell back to English
    translation_failures: AtomicUsize,

    /// Calls made to the speech-synthesis service
    narration_calls: AtomicUsize,

    /// Narration calls that failed and produced a text-only result
    narration_failures: AtomicUsize,
}

static METRICS: OnceLock<PipelineMetrics> = OnceLock::new();

impl PipelineMetrics {
    /// Get the global pipeline metrics instance.
    pub fn global() -> &'static PipelineMetrics {
        METRICS.get_or_init(|| PipelineMetrics {
            identity_passthroughs: AtomicUsize::new(0),
            translation_calls: AtomicUsize::new(0),
            translation_failures: AtomicUsize::new(0),
            narration_calls: AtomicUsize::new(0),
            narration_failures: AtomicUsize::new(0),
        })
    }

    pub fn record_identity_passthrough(&self) {
        self.identity_passthroughs.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_translation_call(&self) {
        self.translation_calls.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_translation_failure(&self) {
        self.translation_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_narration_call(&self) {
        self.narration_calls.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_narration_failure(&self) {
        self.narration_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Snapshot the counters into a serializable report.
    pub fn report(&self) -> MetricsReport {
        MetricsReport {
            identity_passthroughs: self.identity_passthroughs.load(Ordering::Relaxed),
            translation_calls: self.translation_calls.load(Ordering::Relaxed),
            translation_failures: self.translation_failures.load(Ordering::Relaxed),
            narration_calls: self.narration_calls.load(Ordering::Relaxed),
            narration_failures: self.narration_failures.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time snapshot of the pipeline counters.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MetricsReport {
    pub identity_passthroughs: usize,
    pub translation_calls: usize,
    pub translation_failures: usize,
    pub narration_calls: usize,
    pub narration_failures: usize,
}
