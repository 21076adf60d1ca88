//! Decorations: positioned lights and ornaments.
//!
//! A decoration is a closed set of two variants. Each one draws its visual
//! sub-style once, at construction, from a uniform three-way draw that is
//! independent of its position.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::engine::rng::CardRng;

/// Which kind of decoration a population pass creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DecorationKind {
    /// Blinking light.
    Light,
    /// Colored ornament.
    Ornament,
}

impl fmt::Display for DecorationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Ornament => write!(f, "ornament"),
        }
    }
}

/// Blink speed of a light.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LightSpeed {
    /// Fast blink.
    Fast,
    /// Blink with a phase delay.
    Delayed,
    /// Stylesheet default blink.
    Normal,
}

impl LightSpeed {
    /// All speeds, in draw order.
    pub const ALL: [Self; 3] = [Self::Fast, Self::Delayed, Self::Normal];

    /// Map a `1..=3` draw: 1 fast, 2 delayed, anything else normal.
    #[must_use]
    pub const fn from_draw(draw: i32) -> Self {
        match draw {
            1 => Self::Fast,
            2 => Self::Delayed,
            _ => Self::Normal,
        }
    }

    /// Draw a speed uniformly.
    pub fn random(rng: &mut CardRng) -> Self {
        Self::from_draw(rng.int_inclusive(1, 3))
    }

    /// Class modifier token; normal speed has none.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Fast => "fast",
            Self::Delayed => "delayed",
            Self::Normal => "",
        }
    }
}

/// Color of an ornament.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrnamentColor {
    /// Red bauble.
    Red,
    /// Blue bauble.
    Blue,
    /// Silver bauble.
    Silver,
}

impl OrnamentColor {
    /// All colors, in draw order.
    pub const ALL: [Self; 3] = [Self::Red, Self::Blue, Self::Silver];

    /// Map a `1..=3` draw: 1 red, 2 blue, anything else silver.
    #[must_use]
    pub const fn from_draw(draw: i32) -> Self {
        match draw {
            1 => Self::Red,
            2 => Self::Blue,
            _ => Self::Silver,
        }
    }

    /// Draw a color uniformly.
    pub fn random(rng: &mut CardRng) -> Self {
        Self::from_draw(rng.int_inclusive(1, 3))
    }

    /// Class modifier token.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Silver => "silver",
        }
    }
}

/// Variant-specific visual sub-style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "style", rename_all = "kebab-case")]
pub enum SubStyle {
    /// A light and its blink speed.
    Light(LightSpeed),
    /// An ornament and its color.
    Ornament(OrnamentColor),
}

impl SubStyle {
    /// Draw a sub-style for `kind`.
    pub fn random(kind: DecorationKind, rng: &mut CardRng) -> Self {
        match kind {
            DecorationKind::Light => Self::Light(LightSpeed::random(rng)),
            DecorationKind::Ornament => Self::Ornament(OrnamentColor::random(rng)),
        }
    }

    /// Kind tag of this sub-style.
    #[must_use]
    pub const fn kind(self) -> DecorationKind {
        match self {
            Self::Light(_) => DecorationKind::Light,
            Self::Ornament(_) => DecorationKind::Ornament,
        }
    }
}

/// A positioned decoration.
///
/// Offsets are pixels relative to the tree's anchor point, and are not
/// validated: any integers are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Decoration {
    left: i32,
    top: i32,
    style: SubStyle,
}

impl Decoration {
    /// Create a decoration of `kind`, drawing its sub-style from `rng`.
    pub fn new(kind: DecorationKind, left: i32, top: i32, rng: &mut CardRng) -> Self {
        Self::with_style(left, top, SubStyle::random(kind, rng))
    }

    /// Create a light with a random speed.
    pub fn light(left: i32, top: i32, rng: &mut CardRng) -> Self {
        Self::new(DecorationKind::Light, left, top, rng)
    }

    /// Create an ornament with a random color.
    pub fn ornament(left: i32, top: i32, rng: &mut CardRng) -> Self {
        Self::new(DecorationKind::Ornament, left, top, rng)
    }

    /// Create a decoration with an explicit sub-style.
    #[must_use]
    pub const fn with_style(left: i32, top: i32, style: SubStyle) -> Self {
        Self { left, top, style }
    }

    /// Horizontal offset in pixels.
    #[must_use]
    pub const fn left(&self) -> i32 {
        self.left
    }

    /// Vertical offset in pixels.
    #[must_use]
    pub const fn top(&self) -> i32 {
        self.top
    }

    /// Drawn sub-style.
    #[must_use]
    pub const fn style(&self) -> SubStyle {
        self.style
    }

    /// Kind tag.
    #[must_use]
    pub const fn kind(&self) -> DecorationKind {
        self.style.kind()
    }

    /// Inline positioning declaration.
    #[must_use]
    pub fn style_string(&self) -> String {
        format!("top: {}px; left: {}px;", self.top, self.left)
    }

    /// Class attribute value.
    ///
    /// A normal-speed light renders as plain `lights`, without a trailing
    /// separator.
    #[must_use]
    pub fn css_class(&self) -> String {
        match self.style {
            SubStyle::Light(LightSpeed::Normal) => "lights".to_string(),
            SubStyle::Light(speed) => format!("lights {}", speed.token()),
            SubStyle::Ornament(color) => format!("ornament {}", color.token()),
        }
    }

    /// Markup fragment: one empty `div` carrying the class and inline style.
    #[must_use]
    pub fn render(&self) -> String {
        format!(
            r#"<div class="{}" style="{}"></div>"#,
            self.css_class(),
            self.style_string()
        )
    }
}

impl fmt::Display for Decoration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
