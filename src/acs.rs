//! Line-drawing characters of the alternate character set.
//!
//! Each function reads the terminal's `acs_map`, which the library fills in
//! when the terminal is opened. Before [`Ncurses::init`](crate::Ncurses::init)
//! they return 0, which [`Window::border`](crate::Window::border) and friends
//! treat as "use the default character".

use crate::sys;
use crate::types::ChType;

/// Upper left corner.
#[inline]
pub fn ulcorner() -> ChType {
    sys::acs(b'l')
}

/// Lower left corner.
#[inline]
pub fn llcorner() -> ChType {
    sys::acs(b'm')
}

/// Upper right corner.
#[inline]
pub fn urcorner() -> ChType {
    sys::acs(b'k')
}

/// Lower right corner.
#[inline]
pub fn lrcorner() -> ChType {
    sys::acs(b'j')
}

/// Tee pointing right.
#[inline]
pub fn ltee() -> ChType {
    sys::acs(b't')
}

/// Tee pointing left.
#[inline]
pub fn rtee() -> ChType {
    sys::acs(b'u')
}

/// Tee pointing up.
#[inline]
pub fn btee() -> ChType {
    sys::acs(b'v')
}

/// Tee pointing down.
#[inline]
pub fn ttee() -> ChType {
    sys::acs(b'w')
}

/// Horizontal line.
#[inline]
pub fn hline() -> ChType {
    sys::acs(b'q')
}

/// Vertical line.
#[inline]
pub fn vline() -> ChType {
    sys::acs(b'x')
}

/// Large plus or crossover.
#[inline]
pub fn plus() -> ChType {
    sys::acs(b'n')
}

/// Scan line 1.
#[inline]
pub fn s1() -> ChType {
    sys::acs(b'o')
}

/// Scan line 3.
#[inline]
pub fn s3() -> ChType {
    sys::acs(b'p')
}

/// Scan line 7.
#[inline]
pub fn s7() -> ChType {
    sys::acs(b'r')
}

/// Scan line 9.
#[inline]
pub fn s9() -> ChType {
    sys::acs(b's')
}

/// Diamond.
#[inline]
pub fn diamond() -> ChType {
    sys::acs(b'`')
}

/// Checker board (stipple).
#[inline]
pub fn ckboard() -> ChType {
    sys::acs(b'a')
}

/// Degree symbol.
#[inline]
pub fn degree() -> ChType {
    sys::acs(b'f')
}

/// Plus/minus.
#[inline]
pub fn plminus() -> ChType {
    sys::acs(b'g')
}

/// Bullet.
#[inline]
pub fn bullet() -> ChType {
    sys::acs(b'~')
}

/// Arrow pointing left.
#[inline]
pub fn larrow() -> ChType {
    sys::acs(b',')
}

/// Arrow pointing right.
#[inline]
pub fn rarrow() -> ChType {
    sys::acs(b'+')
}

/// Arrow pointing down.
#[inline]
pub fn darrow() -> ChType {
    sys::acs(b'.')
}

/// Arrow pointing up.
#[inline]
pub fn uarrow() -> ChType {
    sys::acs(b'-')
}

/// Board of squares.
#[inline]
pub fn board() -> ChType {
    sys::acs(b'h')
}

/// Lantern symbol.
#[inline]
pub fn lantern() -> ChType {
    sys::acs(b'i')
}

/// Solid square block.
#[inline]
pub fn block() -> ChType {
    sys::acs(b'0')
}

/// Less-than-or-equal-to.
#[inline]
pub fn lequal() -> ChType {
    sys::acs(b'y')
}

/// Greater-than-or-equal-to.
#[inline]
pub fn gequal() -> ChType {
    sys::acs(b'z')
}

/// Greek pi.
#[inline]
pub fn pi() -> ChType {
    sys::acs(b'{')
}

/// Not-equal.
#[inline]
pub fn nequal() -> ChType {
    sys::acs(b'|')
}

/// UK pound sign.
#[inline]
pub fn sterling() -> ChType {
    sys::acs(b'}')
}
