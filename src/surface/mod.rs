//! Scene surface: the document the card draws into.
//!
//! The controller never touches a global document. It is handed a
//! [`SceneSurface`] at construction and only ever:
//! - finds elements still carrying a reveal marker in a scope,
//! - clears that marker,
//! - appends decoration markup to the `#decorate` container,
//! - marks the `#star` element done.
//!
//! # Implementations
//!
//! - [`MemorySurface`]: headless document used by tests and the CLI
//! - `DomSurface`: browser document via `web-sys` (feature `wasm`)

pub mod memory;

#[cfg(feature = "wasm")]
pub mod dom;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CardResult;

pub use memory::{MemoryElement, MemorySurface};

#[cfg(feature = "wasm")]
pub use dom::DomSurface;

/// Id of the container that accumulates decoration markup.
pub const CONTAINER_ID: &str = "decorate";

/// Id of the star element.
pub const STAR_ID: &str = "star";

/// Class added to the star once it is revealed.
pub const STAR_DONE_CLASS: &str = "done";

/// Marker keeping tree parts slid out of view.
pub const SLIDE_MARKER: &str = "hidden-slide";

/// Marker keeping the greeting text hidden.
pub const TEXT_MARKER: &str = "hidden";

/// Tree level, numbered from the base (1) to the top (3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TreeLevel {
    /// Bottom tier of branches.
    One,
    /// Middle tier of branches.
    Two,
    /// Top tier of branches.
    Three,
}

impl TreeLevel {
    /// Levels in reveal order: top first.
    pub const REVEAL_ORDER: [Self; 3] = [Self::Three, Self::Two, Self::One];

    /// Level number used in class names.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
        }
    }
}

impl fmt::Display for TreeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "level-{}", self.number())
    }
}

/// A group of elements revealed together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RevealScope {
    /// Trunk / root silhouette.
    Root,
    /// One tier of branches.
    Level(TreeLevel),
    /// Greeting text.
    Text,
}

impl RevealScope {
    /// Marker class cleared by the reveal.
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Root | Self::Level(_) => SLIDE_MARKER,
            Self::Text => TEXT_MARKER,
        }
    }

    /// Classes an element must carry, all of them, to be in scope and
    /// still unrevealed. The marker is always included.
    #[must_use]
    pub fn classes(self) -> Vec<String> {
        match self {
            Self::Root => vec![SLIDE_MARKER.to_string(), "root".to_string()],
            Self::Level(level) => vec![SLIDE_MARKER.to_string(), level.to_string()],
            Self::Text => vec!["show-text".to_string(), TEXT_MARKER.to_string()],
        }
    }

    /// Space-separated class selector, as `getElementsByClassName` takes it.
    #[must_use]
    pub fn class_selector(self) -> String {
        self.classes().join(" ")
    }
}

impl fmt::Display for RevealScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root => write!(f, "root"),
            Self::Level(level) => write!(f, "{level}"),
            Self::Text => write!(f, "text"),
        }
    }
}

/// Document operations the scene controller depends on.
pub trait SceneSurface {
    /// Handle to one document element.
    type Element;

    /// Snapshot of elements in `scope` that still carry its marker.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be queried.
    fn find_marked(&self, scope: RevealScope) -> CardResult<Vec<Self::Element>>;

    /// Remove `scope`'s marker from `element`. Removing an absent marker is
    /// a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the host rejects the mutation.
    fn clear_marker(&mut self, element: &Self::Element, scope: RevealScope) -> CardResult<()>;

    /// Append a markup fragment to the end of the `#decorate` container.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CardError::MissingElement`] if the container is absent.
    fn append_markup(&mut self, markup: &str) -> CardResult<()>;

    /// Add the `done` class to `#star`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CardError::MissingElement`] if the star is absent.
    fn mark_star_done(&mut self) -> CardResult<()>;
}
