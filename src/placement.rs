//! Decoration placement on a tapering tree.
//!
//! `top` is drawn from the caller's vertical band; `left` is then drawn from
//! a symmetric horizontal range that widens with `top`, so decorations stay
//! on the silhouette.

use serde::{Deserialize, Serialize};

use crate::decoration::DecorationKind;
use crate::engine::rng::CardRng;
use crate::error::{CardError, CardResult};

/// Highest `top` covered by the banding table.
pub const MAX_TOP: i32 = 190;

/// One row of the banding table.
///
/// Applies to every `top` strictly below `below` (and at or above the
/// previous row's `below`); `left` is drawn from `[-half_width, half_width]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    /// Exclusive upper bound on `top` for this band.
    pub below: i32,
    /// Half-width of the horizontal range.
    pub half_width: i32,
}

/// Banding table, ordered by `below`.
pub const BANDS: [Band; 9] = [
    Band { below: -25, half_width: 2 },
    Band { below: -15, half_width: 10 },
    Band { below: 0, half_width: 18 },
    Band { below: 25, half_width: 18 },
    Band { below: 50, half_width: 25 },
    Band { below: 100, half_width: 30 },
    Band { below: 120, half_width: 45 },
    Band { below: 150, half_width: 55 },
    // Last band includes MAX_TOP itself
    Band { below: MAX_TOP + 1, half_width: 60 },
];

/// Horizontal half-width allowed at `top`.
///
/// # Errors
///
/// Returns [`CardError::OutOfBand`] for `top > 190`.
pub fn half_width_for(top: i32) -> CardResult<i32> {
    BANDS
        .iter()
        .find(|band| top < band.below)
        .map(|band| band.half_width)
        .ok_or(CardError::OutOfBand { top })
}

/// A placement result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Vertical offset in pixels.
    pub top: i32,
    /// Horizontal offset in pixels.
    pub left: i32,
}

/// Draw a position with `top` in `[y_min, y_max]`.
///
/// # Errors
///
/// Returns [`CardError::InvertedBand`] if `y_min > y_max`, before any draw.
/// Returns [`CardError::OutOfBand`] when the drawn `top` exceeds the
/// banding table; no `left` is drawn in that case.
pub fn coordinates_for(rng: &mut CardRng, y_min: i32, y_max: i32) -> CardResult<Coordinates> {
    if y_min > y_max {
        return Err(CardError::InvertedBand { y_min, y_max });
    }

    let top = rng.int_inclusive(y_min, y_max);
    let half_width = half_width_for(top)?;
    let left = rng.int_inclusive(-half_width, half_width);
    Ok(Coordinates { top, left })
}

/// A fixed population pass over one vertical band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tier {
    /// Lowest `top`, inclusive.
    pub y_min: i32,
    /// Highest `top`, inclusive.
    pub y_max: i32,
    /// Number of decorations.
    pub count: usize,
}

impl Tier {
    const fn new(y_min: i32, y_max: i32, count: usize) -> Self {
        Self {
            y_min,
            y_max,
            count,
        }
    }
}

/// Ornament tiers, top of the tree first.
pub const ORNAMENT_TIERS: [Tier; 3] = [
    Tier::new(-25, 40, 5),
    Tier::new(40, 120, 10),
    Tier::new(120, 190, 20),
];

/// Light tiers, top of the tree first.
pub const LIGHT_TIERS: [Tier; 3] = [
    Tier::new(-25, 40, 15),
    Tier::new(40, 120, 40),
    Tier::new(120, 190, 60),
];

/// Tiers for a decoration kind.
#[must_use]
pub const fn tiers_for(kind: DecorationKind) -> &'static [Tier; 3] {
    match kind {
        DecorationKind::Light => &LIGHT_TIERS,
        DecorationKind::Ornament => &ORNAMENT_TIERS,
    }
}
