use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

/// Wall-clock instant in seconds since the Unix epoch.
/// Serialized as a bare number so the turn log matches what the recommender expects.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp {
    pub secs: f64,
}

impl Timestamp {
    pub fn from_secs(secs: f64) -> Self {
        Timestamp { secs }
    }

    /// Seconds elapsed since `earlier`. Never negative: a clock stepping
    /// backwards reads as no time passed.
    pub fn seconds_since(&self, earlier: Timestamp) -> f64 {
        (self.secs - earlier.secs).max(0.0)
    }
}

pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs_f64())
            .unwrap_or(0.0);
        Timestamp { secs }
    }
}

/// Hand-driven clock. Clones share the same instant, so a test can keep one
/// handle and advance time under a reactor that owns the other.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    bits: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn starting_at(secs: f64) -> Self {
        Self {
            bits: Arc::new(AtomicU64::new(secs.to_bits())),
        }
    }

    pub fn set(&self, secs: f64) {
        self.bits.store(secs.to_bits(), Ordering::SeqCst);
    }

    pub fn advance(&self, secs: f64) {
        let now = f64::from_bits(self.bits.load(Ordering::SeqCst));
        self.set(now + secs);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        Timestamp {
            secs: f64::from_bits(self.bits.load(Ordering::SeqCst)),
        }
    }
}
