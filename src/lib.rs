//! # tinsel
//!
//! Animated holiday card: a tree slides into view tier by tier, a star
//! lights up, ornaments and lights are scattered over the branches at
//! randomized positions, and the greeting text fades in.
//!
//! The page's markup and stylesheet are external. This crate decides what
//! decorations appear, where, and when, and drives an injected document
//! surface accordingly.
//!
//! ## Example
//!
//! ```rust
//! use tinsel::prelude::*;
//!
//! let config = CardConfig::builder().seed(42).build();
//! let mut scene = SceneController::new(MemorySurface::card_skeleton(), &config);
//! scene.run_to_completion().unwrap();
//!
//! assert_eq!(scene.surface().fragments().len(), 35 + 115);
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_precision_loss,
    clippy::missing_const_for_fn,  // Many functions can't be const in stable Rust
)]

pub mod cli;
pub mod config;
pub mod decoration;
pub mod engine;
pub mod error;
pub mod placement;
pub mod scene;
pub mod surface;

#[cfg(feature = "wasm")]
pub mod wasm;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::config::{CardConfig, CardConfigBuilder};
    pub use crate::decoration::{Decoration, DecorationKind, LightSpeed, OrnamentColor};
    pub use crate::engine::{CardRng, SceneTime};
    pub use crate::error::{CardError, CardResult};
    pub use crate::placement::{coordinates_for, Coordinates};
    pub use crate::scene::{SceneAction, SceneController, SceneReport};
    pub use crate::surface::{MemorySurface, RevealScope, SceneSurface, TreeLevel};
}

/// Re-export for public API
pub use error::{CardError, CardResult};
