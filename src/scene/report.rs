//! Serializable summary of a played timeline.

use serde::{Deserialize, Serialize};

use super::SceneAction;
use crate::engine::SceneTime;

/// An action that has fired, with its scheduled time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FiredAction {
    /// Scheduled time.
    pub time: SceneTime,
    /// The action.
    pub action: SceneAction,
}

/// Counters kept while the timeline plays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneStats {
    /// Ornament fragments appended.
    pub ornaments: usize,
    /// Light fragments appended.
    pub lights: usize,
    /// Reveal markers cleared.
    pub markers_cleared: usize,
    /// Reveals that stopped at the iteration cap.
    pub cap_hits: usize,
}

/// Summary of a played (or partly played) timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneReport {
    /// Seed; replaying with it reproduces the card.
    pub seed: u64,
    /// Scene time reached.
    pub elapsed: SceneTime,
    /// Whether every action has fired.
    pub complete: bool,
    /// Fired actions, in firing order.
    pub fired: Vec<FiredAction>,
    /// Counters.
    pub stats: SceneStats,
}

impl SceneReport {
    /// Serialize as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails.
    pub fn to_json(&self) -> crate::CardResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| crate::CardError::serialization(e.to_string()))
    }
}
