//! Timeline engine.
//!
//! Support code that drives the card's one-shot timeline:
//! - Deterministic RNG (PCG seeded per card)
//! - Virtual clock in milliseconds
//! - Event scheduling with deterministic ordering

pub mod clock;
pub mod rng;
pub mod scheduler;

use serde::{Deserialize, Serialize};

pub use clock::SceneClock;
pub use rng::CardRng;
pub use scheduler::{EventScheduler, ScheduledAction};

/// Scene time representation.
///
/// Milliseconds elapsed since the controller was constructed. Host timers
/// (`setTimeout`) speak milliseconds, so there is no finer resolution.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct SceneTime {
    /// Time in milliseconds from construction.
    millis: u64,
}

impl SceneTime {
    /// Zero time (controller construction).
    pub const ZERO: Self = Self { millis: 0 };

    /// Create time from milliseconds.
    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self { millis }
    }

    /// Get time as milliseconds.
    #[must_use]
    pub const fn as_millis(&self) -> u64 {
        self.millis
    }

    /// Add a duration in milliseconds, saturating at `u64::MAX`.
    #[must_use]
    pub const fn add_millis(self, millis: u64) -> Self {
        Self {
            millis: self.millis.saturating_add(millis),
        }
    }
}

impl std::fmt::Display for SceneTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "T+{}ms", self.millis)
    }
}
