//! Display attributes.
//!
//! Values follow the ncurses 6 layout of a 32-bit `chtype`: the character
//! in bits 0-7, the color pair in bits 8-15 and the attribute flags above.
//! Plain constants are what the window methods take; [`Attributes`] is the
//! bitflags view of the same bits.

use crate::types::{AttrT, ChType, PairT};

const SHIFT: u32 = 8;

const fn bit(n: u32) -> AttrT {
    1 << (n + SHIFT)
}

/// Normal display.
pub const A_NORMAL: AttrT = 0;
/// Character part of a `chtype`.
pub const A_CHARTEXT: AttrT = (1 << SHIFT) - 1;
/// Color pair part of a `chtype`.
pub const A_COLOR: AttrT = 0xff << SHIFT;
/// Everything except the character.
pub const A_ATTRIBUTES: AttrT = !A_CHARTEXT;
/// Best highlighting mode of the terminal.
pub const A_STANDOUT: AttrT = bit(8);
/// Underlining.
pub const A_UNDERLINE: AttrT = bit(9);
/// Reverse video.
pub const A_REVERSE: AttrT = bit(10);
/// Blinking.
pub const A_BLINK: AttrT = bit(11);
/// Half bright.
pub const A_DIM: AttrT = bit(12);
/// Extra bright or bold.
pub const A_BOLD: AttrT = bit(13);
/// Alternate character set.
pub const A_ALTCHARSET: AttrT = bit(14);
/// Invisible.
pub const A_INVIS: AttrT = bit(15);
/// Protected.
pub const A_PROTECT: AttrT = bit(16);
/// Italics, an ncurses extension.
pub const A_ITALIC: AttrT = bit(23);

/// Attribute bits selecting color pair `pair` (`COLOR_PAIR`).
///
/// ```rust
/// use ncraii::attr::{color_pair, pair_number, A_BOLD};
///
/// let attr = color_pair(3) | A_BOLD;
/// assert_eq!(pair_number(attr), 3);
/// ```
#[inline]
pub const fn color_pair(pair: PairT) -> AttrT {
    ((pair as AttrT) << SHIFT) & A_COLOR
}

/// Color pair selected by `attr` (`PAIR_NUMBER`).
#[inline]
pub const fn pair_number(attr: AttrT) -> PairT {
    ((attr & A_COLOR) >> SHIFT) as PairT
}

/// Character stored in a cell.
#[inline]
pub const fn char_of(ch: ChType) -> u8 {
    (ch & A_CHARTEXT) as u8
}

bitflags::bitflags! {
    /// Attribute flags without the color pair.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Attributes: AttrT {
        /// Best highlighting mode.
        const STANDOUT = A_STANDOUT;
        /// Underlining.
        const UNDERLINE = A_UNDERLINE;
        /// Reverse video.
        const REVERSE = A_REVERSE;
        /// Blinking.
        const BLINK = A_BLINK;
        /// Half bright.
        const DIM = A_DIM;
        /// Bold.
        const BOLD = A_BOLD;
        /// Alternate character set.
        const ALTCHARSET = A_ALTCHARSET;
        /// Invisible.
        const INVIS = A_INVIS;
        /// Protected.
        const PROTECT = A_PROTECT;
        /// Italics.
        const ITALIC = A_ITALIC;
    }
}

impl Attributes {
    /// Split a raw attribute value into flags and color pair.
    pub fn split(attr: AttrT) -> (Self, PairT) {
        (Self::from_bits_truncate(attr), pair_number(attr))
    }

    /// Raw value of these flags combined with color pair `pair`.
    pub fn with_pair(self, pair: PairT) -> AttrT {
        self.bits() | color_pair(pair)
    }
}

impl From<Attributes> for AttrT {
    fn from(attrs: Attributes) -> Self {
        attrs.bits()
    }
}
