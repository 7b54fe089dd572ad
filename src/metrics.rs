// Generation metrics module
//
// Lightweight counters for monitoring what the generator has done

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::{Duration, Instant};

/// Counters shared by every generation run of one [`TemplateMaker`](crate::generator::TemplateMaker)
///
/// Uses atomic operations so concurrent runs against different destinations
/// can record without locks.
#[derive(Debug)]
pub struct GenerationMetrics {
    /// Generation runs started
    pub generations_started: AtomicUsize,

    /// Generation runs that wrote every artifact
    pub generations_completed: AtomicUsize,

    /// Generation runs aborted by an error
    pub generations_failed: AtomicUsize,

    /// Artifacts fully written
    pub artifacts_written: AtomicU64,

    /// Bytes written across all artifacts
    pub bytes_written: AtomicU64,

    /// Template lookups served from the cache
    pub template_cache_hits: AtomicU64,

    /// Templates compiled on first use
    pub template_cache_misses: AtomicU64,

    /// Executable bits that could not be applied
    pub permission_fallbacks: AtomicU64,

    /// Total generation time in milliseconds
    pub total_generation_time_ms: AtomicU64,

    start_time: Instant,
}

impl GenerationMetrics {
    pub fn new() -> Self {
        Self {
            generations_started: AtomicUsize::new(0),
            generations_completed: AtomicUsize::new(0),
            generations_failed: AtomicUsize::new(0),
            artifacts_written: AtomicU64::new(0),
            bytes_written: AtomicU64::new(0),
            template_cache_hits: AtomicU64::new(0),
            template_cache_misses: AtomicU64::new(0),
            permission_fallbacks: AtomicU64::new(0),
            total_generation_time_ms: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    pub fn record_generation_started(&self) {
        self.generations_started.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_generation_completed(&self, duration: Duration) {
        self.generations_completed.fetch_add(1, Ordering::Relaxed);
        self.total_generation_time_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    pub fn record_generation_failed(&self) {
        self.generations_failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_artifact(&self, bytes: u64) {
        self.artifacts_written.fetch_add(1, Ordering::Relaxed);
        self.bytes_written.fetch_add(bytes, Ordering::Relaxed);
    }

    pub fn record_template_cache_hit(&self) {
        self.template_cache_hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_template_cache_miss(&self) {
        self.template_cache_misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_permission_fallback(&self) {
        self.permission_fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn uptime(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Average time per completed generation in milliseconds
    pub fn avg_generation_time_ms(&self) -> f64 {
        let total = self.total_generation_time_ms.load(Ordering::Relaxed);
        let count = self.generations_completed.load(Ordering::Relaxed);
        if count > 0 {
            total as f64 / count as f64
        } else {
            0.0
        }
    }

    pub fn log_summary(&self) {
        tracing::info!("=== Generation Metrics Summary ===");
        tracing::info!("Uptime: {:.2}s", self.uptime().as_secs_f64());
        tracing::info!(
            "Generations: {} started, {} completed, {} failed (avg: {:.2}ms)",
            self.generations_started.load(Ordering::Relaxed),
            self.generations_completed.load(Ordering::Relaxed),
            self.generations_failed.load(Ordering::Relaxed),
            self.avg_generation_time_ms()
        );
        tracing::info!(
            "Artifacts: {} written, {} bytes",
            self.artifacts_written.load(Ordering::Relaxed),
            self.bytes_written.load(Ordering::Relaxed)
        );
        tracing::info!(
            "Template cache: {} hits, {} misses; permission fallbacks: {}",
            self.template_cache_hits.load(Ordering::Relaxed),
            self.template_cache_misses.load(Ordering::Relaxed),
            self.permission_fallbacks.load(Ordering::Relaxed)
        );
    }
}

impl Default for GenerationMetrics {
    fn default() -> Self {
        Self::new()
    }
}
