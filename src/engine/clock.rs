//! Virtual scene clock.
//!
//! The headless player jumps the clock straight to the next due action
//! instead of ticking a fixed timestep; the browser player never uses it and
//! relies on host timers instead.

use serde::{Deserialize, Serialize};

use crate::engine::SceneTime;

/// Monotonic virtual clock.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SceneClock {
    /// Current scene time.
    current: SceneTime,
}

impl SceneClock {
    /// Create a clock at `T+0`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current: SceneTime::ZERO,
        }
    }

    /// Get current scene time.
    #[must_use]
    pub const fn current_time(&self) -> SceneTime {
        self.current
    }

    /// Move the clock to `target`.
    ///
    /// Time never runs backwards: a target in the past leaves the clock
    /// where it is. Returns the (possibly unchanged) current time.
    #[allow(clippy::missing_const_for_fn)] // Mutable const not stable
    pub fn advance_to(&mut self, target: SceneTime) -> SceneTime {
        if target > self.current {
            self.current = target;
        }
        self.current
    }
}
