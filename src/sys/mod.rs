//! Raw access to the native curses library.
//!
//! Only the opaque handle types are public; they are what
//! [`Window::as_raw`](crate::Window::as_raw) hands out and what
//! [`Window::from_raw`](crate::Window::from_raw) adopts. The function
//! surface stays crate-private and is replaced by a recording double when
//! the crate's own unit tests are built.

use std::ptr;

use libc::{c_int, c_short, FILE};

use crate::types::MmaskT;

/// Opaque native window (`WINDOW`).
#[repr(C)]
pub struct WINDOW {
    _opaque: [u8; 0],
}

/// Opaque native terminal screen (`SCREEN`).
#[repr(C)]
pub struct SCREEN {
    _opaque: [u8; 0],
}

/// Native mouse event record (`MEVENT`).
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MEVENT {
    /// Device id.
    pub id: c_short,
    /// Column.
    pub x: c_int,
    /// Line.
    pub y: c_int,
    /// Unused by the library, reserved.
    pub z: c_int,
    /// Button state bits.
    pub bstate: MmaskT,
}

/// Hand both streams to `open`, closing whichever were opened if either is
/// missing or `open` returns null.
#[cfg_attr(test, allow(dead_code))]
pub(crate) fn open_on_streams(
    out: *mut FILE,
    input: *mut FILE,
    open: impl FnOnce(*mut FILE, *mut FILE) -> *mut SCREEN,
    mut close: impl FnMut(*mut FILE),
) -> *mut SCREEN {
    if !out.is_null() && !input.is_null() {
        let screen = open(out, input);
        if !screen.is_null() {
            return screen;
        }
    }
    for stream in [out, input] {
        if !stream.is_null() {
            close(stream);
        }
    }
    ptr::null_mut()
}

#[cfg(not(test))]
mod native;
#[cfg(not(test))]
pub(crate) use native::*;

#[cfg(test)]
pub(crate) mod fake;
#[cfg(test)]
pub(crate) use fake::*;
