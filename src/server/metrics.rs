// src/server/metrics.rs
//! Server metrics tracking
//!
//! Simple atomic counters for request statistics, rendered in Prometheus
//! text format on `GET /metrics`.

use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Server metrics collector
#[derive(Default)]
pub struct ServerMetrics {
    /// Total recipe requests
    requests_total: AtomicU64,
    creates: AtomicU64,
    /// Updates that replaced a stored recipe
    updates: AtomicU64,
    /// Updates whose id matched nothing (echoed back, store unchanged)
    update_misses: AtomicU64,
    deletes: AtomicU64,
    delete_misses: AtomicU64,
    searches: AtomicU64,
    /// Bodies rejected as malformed JSON
    malformed_bodies: AtomicU64,
    /// Server start time
    start_time: std::sync::OnceLock<Instant>,
}

impl ServerMetrics {
    /// Create new metrics collector
    pub fn new() -> Self {
        let metrics = Self::default();
        let _ = metrics.start_time.set(Instant::now());
        metrics
    }

    pub fn record_list(&self) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_create(&self) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
        self.creates.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an update; `replaced` is false when the id matched nothing
    pub fn record_update(&self, replaced: bool) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
        if replaced {
            self.updates.fetch_add(1, Ordering::Relaxed);
        } else {
            self.update_misses.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Record a delete; `removed` is false when the id matched nothing
    pub fn record_delete(&self, removed: bool) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
        if removed {
            self.deletes.fetch_add(1, Ordering::Relaxed);
        } else {
            self.delete_misses.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_search(&self) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
        self.searches.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a request rejected for a malformed body
    pub fn record_malformed(&self) {
        self.requests_total.fetch_add(1, Ordering::Relaxed);
        self.malformed_bodies.fetch_add(1, Ordering::Relaxed);
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        let uptime = self
            .start_time
            .get()
            .map(|t| t.elapsed())
            .unwrap_or(Duration::ZERO);

        MetricsSnapshot {
            requests_total: self.requests_total.load(Ordering::Relaxed),
            creates: self.creates.load(Ordering::Relaxed),
            updates: self.updates.load(Ordering::Relaxed),
            update_misses: self.update_misses.load(Ordering::Relaxed),
            deletes: self.deletes.load(Ordering::Relaxed),
            delete_misses: self.delete_misses.load(Ordering::Relaxed),
            searches: self.searches.load(Ordering::Relaxed),
            malformed_bodies: self.malformed_bodies.load(Ordering::Relaxed),
            uptime_secs: uptime.as_secs(),
        }
    }
}

/// Snapshot of current metrics
#[derive(Debug, Clone)]
pub struct MetricsSnapshot {
    pub requests_total: u64,
    pub creates: u64,
    pub updates: u64,
    pub update_misses: u64,
    pub deletes: u64,
    pub delete_misses: u64,
    pub searches: u64,
    pub malformed_bodies: u64,
    pub uptime_secs: u64,
}

impl MetricsSnapshot {
    /// Render in Prometheus text exposition format
    ///
    /// `recipes_stored` is sampled by the caller since the collector does not
    /// own the store.
    pub fn to_prometheus(&self, recipes_stored: usize) -> String {
        let counters: [(&str, &str, u64); 9] = [
            ("recipe_requests_total", "Total recipe requests", self.requests_total),
            ("recipe_creates_total", "Recipes created", self.creates),
            ("recipe_updates_total", "Updates that replaced a recipe", self.updates),
            ("recipe_update_misses_total", "Updates for unknown ids", self.update_misses),
            ("recipe_deletes_total", "Recipes deleted", self.deletes),
            ("recipe_delete_misses_total", "Deletes for unknown ids", self.delete_misses),
            ("recipe_searches_total", "Tag searches", self.searches),
            ("recipe_malformed_bodies_total", "Rejected request bodies", self.malformed_bodies),
            ("recipe_uptime_seconds", "Server uptime in seconds", self.uptime_secs),
        ];

        let mut out = String::new();
        for (name, help, value) in counters {
            let kind = if name.ends_with("_total") { "counter" } else { "gauge" };
            let _ = writeln!(out, "# HELP {} {}", name, help);
            let _ = writeln!(out, "# TYPE {} {}", name, kind);
            let _ = writeln!(out, "{} {}", name, value);
        }
        let _ = writeln!(out, "# HELP recipes_stored Recipes currently stored");
        let _ = writeln!(out, "# TYPE recipes_stored gauge");
        let _ = writeln!(out, "recipes_stored {}", recipes_stored);
        out
    }
}
