//! Color values and the color-pair registry.
//!
//! The native library paints with numbered color pairs. [`Color`] is the
//! (foreground, background) value callers work with; [`ColorRegistry`]
//! remembers which pair each color was given so the same color always maps
//! to the same pair.

use std::fmt;

use crate::error::{Error, Result};
use crate::types::{ColorT, PairT};

/// Standard color indices.
pub mod colors {
    use crate::types::ColorT;

    /// Terminal default color. Usable once default colors are enabled.
    pub const DEFAULT: ColorT = -1;
    /// Black color.
    pub const BLACK: ColorT = 0;
    /// Red color.
    pub const RED: ColorT = 1;
    /// Green color.
    pub const GREEN: ColorT = 2;
    /// Yellow color.
    pub const YELLOW: ColorT = 3;
    /// Blue color.
    pub const BLUE: ColorT = 4;
    /// Magenta color.
    pub const MAGENTA: ColorT = 5;
    /// Cyan color.
    pub const CYAN: ColorT = 6;
    /// White color.
    pub const WHITE: ColorT = 7;
}

/// A foreground/background combination.
///
/// The default is the terminal's own colors on both sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    /// Foreground color index.
    pub foreground: ColorT,
    /// Background color index.
    pub background: ColorT,
}

impl Color {
    /// Create a color from its two indices.
    pub const fn new(foreground: ColorT, background: ColorT) -> Self {
        Self {
            foreground,
            background,
        }
    }

    /// Whether either side asks for the terminal default.
    pub const fn uses_default(&self) -> bool {
        self.foreground == colors::DEFAULT || self.background == colors::DEFAULT
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new(colors::DEFAULT, colors::DEFAULT)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.foreground, self.background)
    }
}

impl From<(ColorT, ColorT)> for Color {
    fn from((foreground, background): (ColorT, ColorT)) -> Self {
        Self::new(foreground, background)
    }
}

// ============================================================================
// Registry
// ============================================================================

/// Append-only table of registered colors.
///
/// Entry `i` owns native pair `i + 1`; pair 0 belongs to the library.
/// Entries are never removed, so a pair number stays valid for the life of
/// the session.
#[derive(Debug, Default, Clone)]
pub struct ColorRegistry {
    colors: Vec<Color>,
}

impl ColorRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pair number of an already registered color.
    pub fn find(&self, color: Color) -> Option<PairT> {
        self.colors
            .iter()
            .position(|&c| c == color)
            .map(|i| (i + 1) as PairT)
    }

    /// Color registered under `pair`.
    pub fn color(&self, pair: PairT) -> Option<Color> {
        let index = usize::try_from(pair).ok()?.checked_sub(1)?;
        self.colors.get(index).copied()
    }

    /// Number of registered colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether nothing was registered yet.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Pair number for `color`, registering it if needed.
    ///
    /// `capacity` is the native pair count, pair 0 included. A new color
    /// gets the next pair and `init` is asked to set that pair up; the color
    /// is only recorded when `init` succeeds.
    ///
    /// # Errors
    ///
    /// [`Error::TooManyColors`] when no pair below `capacity` is left or
    /// `init` fails. The registry is left as it was.
    pub fn register<F>(&mut self, color: Color, capacity: i32, init: F) -> Result<PairT>
    where
        F: FnOnce(PairT, Color) -> Result<()>,
    {
        if let Some(pair) = self.find(color) {
            return Ok(pair);
        }

        let next = self.colors.len() + 1;
        let pair = match PairT::try_from(next) {
            Ok(pair) if i32::from(pair) < capacity => pair,
            _ => return Err(Error::TooManyColors(color)),
        };

        init(pair, color).map_err(|_| Error::TooManyColors(color))?;
        self.colors.push(color);
        log::debug!("registered color {} as pair {}", color, pair);
        Ok(pair)
    }
}
