use std::collections::HashMap;
use std::sync::Mutex;

use partmatch_types::MatchType;

#[derive(Debug, Default)]
struct StatsInner {
    by_type: HashMap<MatchType, u64>,
    total: u64,
    total_confidence: f64,
}

/// Per-match-kind counters plus a running confidence total, protected by
/// a single lock (teacher's `metrics_lock()` idiom from `ufp_match`,
/// adapted here since stats are read and written on every request
/// rather than installed once at startup).
#[derive(Debug, Default)]
pub struct Stats {
    inner: Mutex<StatsInner>,
}

/// A read-only, point-in-time view of [`Stats`].
#[derive(Debug, Clone, PartialEq)]
pub struct StatsSnapshot {
    pub by_type: HashMap<MatchType, u64>,
    pub total: u64,
    pub total_confidence: f64,
    /// `0.0` when `total == 0`.
    pub avg_confidence: f32,
    /// `0.0` when `total == 0`.
    pub success_rate: f32,
}

impl Stats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, match_type: MatchType, confidence: f32) {
        let mut inner = self.inner.lock().unwrap_or_else(|p| p.into_inner());
        *inner.by_type.entry(match_type).or_insert(0) += 1;
        inner.total += 1;
        inner.total_confidence += confidence as f64;
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        let inner = self.inner.lock().unwrap_or_else(|p| p.into_inner());
        let not_found = *inner.by_type.get(&MatchType::NotFound).unwrap_or(&0);
        let avg_confidence = if inner.total == 0 {
            0.0
        } else {
            (inner.total_confidence / inner.total as f64) as f32
        };
        let success_rate = if inner.total == 0 {
            0.0
        } else {
            (inner.total - not_found) as f32 / inner.total as f32
        };
        StatsSnapshot {
            by_type: inner.by_type.clone(),
            total: inner.total,
            total_confidence: inner.total_confidence,
            avg_confidence,
            success_rate,
        }
    }

    pub fn reset(&self) {
        let mut inner = self.inner.lock().unwrap_or_else(|p| p.into_inner());
        *inner = StatsInner::default();
    }
}
