use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Lock-free counters shared by concurrent validations
#[derive(Debug)]
pub(crate) struct EngineCounters {
    accepted: AtomicU64,
    rejected: AtomicU64,
    canonicalized: AtomicU64,
    unknown_parameters: AtomicU64,
    started_at: DateTime<Utc>,
}

impl EngineCounters {
    pub(crate) fn new() -> Self {
        Self {
            accepted: AtomicU64::new(0),
            rejected: AtomicU64::new(0),
            canonicalized: AtomicU64::new(0),
            unknown_parameters: AtomicU64::new(0),
            started_at: Utc::now(),
        }
    }

    pub(crate) fn record(&self, accepted: bool, canonicalized: bool) {
        let counter = if accepted { &self.accepted } else { &self.rejected };
        counter.fetch_add(1, Ordering::Relaxed);
        if canonicalized {
            self.canonicalized.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub(crate) fn record_unknown(&self) {
        self.unknown_parameters.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn snapshot(&self) -> EngineStats {
        let accepted = self.accepted.load(Ordering::Relaxed);
        let rejected = self.rejected.load(Ordering::Relaxed);
        EngineStats {
            total_validations: accepted + rejected,
            accepted,
            rejected,
            canonicalized: self.canonicalized.load(Ordering::Relaxed),
            unknown_parameters: self.unknown_parameters.load(Ordering::Relaxed),
            started_at: self.started_at,
        }
    }

    pub(crate) fn reset(&self) {
        for counter in [
            &self.accepted,
            &self.rejected,
            &self.canonicalized,
            &self.unknown_parameters,
        ] {
            counter.store(0, Ordering::Relaxed);
        }
    }
}

/// Validation statistics snapshot
#[derive(Debug, Clone, Serialize)]
pub struct EngineStats {
    pub total_validations: u64,
    pub accepted: u64,
    pub rejected: u64,
    /// Accepted values whose payload, enum index or multi mask changed
    pub canonicalized: u64,
    pub unknown_parameters: u64,
    pub started_at: DateTime<Utc>,
}

impl EngineStats {
    pub fn success_rate(&self) -> f64 {
        if self.total_validations == 0 {
            0.0
        } else {
            self.accepted as f64 / self.total_validations as f64
        }
    }

    pub fn has_rejections(&self) -> bool {
        self.rejected > 0 || self.unknown_parameters > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let counters = EngineCounters::new();
        counters.record(true, true);
        counters.record(true, false);
        counters.record(false, false);
        counters.record_unknown();

        let stats = counters.snapshot();
        assert_eq!(stats.total_validations, 3);
        assert_eq!(stats.accepted, 2);
        assert_eq!(stats.canonicalized, 1);
        assert_eq!(stats.unknown_parameters, 1);
        assert!((stats.success_rate() - 2.0 / 3.0).abs() < f64::EPSILON);
        assert!(stats.has_rejections());

        counters.reset();
        let stats = counters.snapshot();
        assert_eq!(stats.total_validations, 0);
        assert_eq!(stats.success_rate(), 0.0);
        assert!(!stats.has_rejections());
    }
}
