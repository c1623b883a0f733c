//! Port definitions for external dependencies of the pricing engine.

use std::sync::RwLock;

use crate::domain::Timestamp;

/// Source of the current wall-clock time.
///
/// The trailing-window filter in the volume-weighted price depends on "now",
/// so the clock is injected rather than read ambiently. Production uses
/// [`SystemClock`]; tests pin time with [`FixedClock`].
pub trait Clock: Send + Sync {
    /// The current time.
    fn now(&self) -> Timestamp;
}

/// Clock backed by the system wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// Clock pinned to a programmable instant.
///
/// Test double for deterministic window filtering.
#[derive(Debug)]
pub struct FixedClock {
    now: RwLock<Timestamp>,
}

impl FixedClock {
    /// Create a fixed clock pinned at the given time.
    #[must_use]
    pub fn at(now: Timestamp) -> Self {
        Self {
            now: RwLock::new(now),
        }
    }

    /// Move the clock to a new instant.
    pub fn set(&self, now: Timestamp) {
        *self.now.write().unwrap() = now;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        *self.now.read().unwrap()
    }
}
