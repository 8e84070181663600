//! Scalar types shared with the native library.
//!
//! The aliases match the layout of the C declarations in `curses.h`, so
//! values can be handed to the native functions without conversion.

/// Character type with embedded attributes.
///
/// In ncurses, `chtype` is a 32-bit value where:
/// - Bits 0-7: The character (or character index)
/// - Bits 8-31: Attributes and color pair
pub type ChType = u32;

/// Attribute type. Must be at least as wide as `ChType`.
pub type AttrT = ChType;

/// Mouse event mask type (`mmask_t`).
pub type MmaskT = u32;

/// Color value type.
///
/// X/Open uses `short` for color values; `-1` is the terminal default
/// once default colors are enabled.
pub type ColorT = i16;

/// Color pair index type.
pub type PairT = i16;

/// OK return value (success).
pub const OK: i32 = 0;

/// ERR return value (failure).
pub const ERR: i32 = -1;

/// Input delay of a window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Delay {
    /// No delay - `getch` returns `ERR` when no input is waiting.
    NoDelay,
    /// Block indefinitely until input is available.
    #[default]
    Blocking,
    /// Wait for the given number of milliseconds.
    Timeout(i32),
}

impl Delay {
    /// Convert from the raw value accepted by `wtimeout`.
    #[must_use]
    pub fn from_raw(value: i32) -> Self {
        match value {
            0 => Delay::NoDelay,
            v if v < 0 => Delay::Blocking,
            v => Delay::Timeout(v),
        }
    }

    /// Convert to the raw value accepted by `wtimeout`.
    #[must_use]
    pub fn to_raw(self) -> i32 {
        match self {
            Delay::NoDelay => 0,
            Delay::Blocking => -1,
            Delay::Timeout(ms) => ms,
        }
    }
}

/// Cursor visibility states accepted by `curs_set`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum CursorVisibility {
    /// Cursor is hidden.
    Invisible = 0,
    /// Normal cursor.
    #[default]
    Normal = 1,
    /// Very visible cursor (e.g. block cursor).
    VeryVisible = 2,
}

impl CursorVisibility {
    /// Create from the raw value returned by `curs_set`.
    #[must_use]
    pub fn from_raw(value: i32) -> Option<Self> {
        match value {
            0 => Some(Self::Invisible),
            1 => Some(Self::Normal),
            2 => Some(Self::VeryVisible),
            _ => None,
        }
    }

    /// Convert to the raw value accepted by `curs_set`.
    #[must_use]
    pub fn to_raw(self) -> i32 {
        self as i32
    }
}

/// Characters for `Window::border`.
///
/// A zero entry asks the native library for its default line-drawing
/// character on that side.
///
/// ```rust
/// use ncraii::BorderChars;
///
/// let plain = BorderChars::simple('|' as u32, '-' as u32)
///     .with_corners('+' as u32, '+' as u32, '+' as u32, '+' as u32);
/// assert_eq!(plain.top_left, '+' as u32);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BorderChars {
    /// Left side character.
    pub left: ChType,
    /// Right side character.
    pub right: ChType,
    /// Top side character.
    pub top: ChType,
    /// Bottom side character.
    pub bottom: ChType,
    /// Top-left corner character.
    pub top_left: ChType,
    /// Top-right corner character.
    pub top_right: ChType,
    /// Bottom-left corner character.
    pub bottom_left: ChType,
    /// Bottom-right corner character.
    pub bottom_right: ChType,
}

impl BorderChars {
    /// Same character on both vertical sides and on both horizontal sides,
    /// default corners.
    #[must_use]
    pub const fn simple(vertical: ChType, horizontal: ChType) -> Self {
        Self {
            left: vertical,
            right: vertical,
            top: horizontal,
            bottom: horizontal,
            top_left: 0,
            top_right: 0,
            bottom_left: 0,
            bottom_right: 0,
        }
    }

    /// Replace the four corners.
    #[must_use]
    pub const fn with_corners(
        mut self,
        top_left: ChType,
        top_right: ChType,
        bottom_left: ChType,
        bottom_right: ChType,
    ) -> Self {
        self.top_left = top_left;
        self.top_right = top_right;
        self.bottom_left = bottom_left;
        self.bottom_right = bottom_right;
        self
    }
}
