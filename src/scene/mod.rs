//! The card's scene: fixed reveal timeline and decoration population.
//!
//! ```text
//! T+1000ms   reveal root
//! T+2000ms   reveal level 3   (top tier)
//! T+3000ms   reveal level 2
//! T+4000ms   reveal level 1   (bottom tier)
//! T+6000ms   reveal star
//! T+8000ms   populate ornaments
//! T+9000ms   populate lights
//! T+11000ms  reveal text
//! ```

pub mod controller;
pub mod report;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::engine::SceneTime;
use crate::surface::TreeLevel;

pub use controller::SceneController;
pub use report::{FiredAction, SceneReport, SceneStats};

/// One step of the reveal timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SceneAction {
    /// Slide in the trunk.
    RevealRoot,
    /// Slide in one tier of branches.
    RevealLevel(TreeLevel),
    /// Light up the star.
    RevealStar,
    /// Scatter ornaments over the tree.
    PopulateOrnaments,
    /// Scatter lights over the tree.
    PopulateLights,
    /// Show the greeting text.
    RevealText,
}

impl fmt::Display for SceneAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RevealRoot => write!(f, "reveal-root"),
            Self::RevealLevel(level) => write!(f, "reveal-{level}"),
            Self::RevealStar => write!(f, "reveal-star"),
            Self::PopulateOrnaments => write!(f, "populate-ornaments"),
            Self::PopulateLights => write!(f, "populate-lights"),
            Self::RevealText => write!(f, "reveal-text"),
        }
    }
}

/// Timeline offsets in milliseconds from construction, in firing order.
pub const TIMELINE: [(u64, SceneAction); 8] = [
    (1_000, SceneAction::RevealRoot),
    (2_000, SceneAction::RevealLevel(TreeLevel::Three)),
    (3_000, SceneAction::RevealLevel(TreeLevel::Two)),
    (4_000, SceneAction::RevealLevel(TreeLevel::One)),
    (6_000, SceneAction::RevealStar),
    (8_000, SceneAction::PopulateOrnaments),
    (9_000, SceneAction::PopulateLights),
    (11_000, SceneAction::RevealText),
];

/// Time of the last timeline action.
#[must_use]
pub fn timeline_end() -> SceneTime {
    TIMELINE
        .iter()
        .map(|(offset, _)| SceneTime::from_millis(*offset))
        .max()
        .unwrap_or(SceneTime::ZERO)
}
