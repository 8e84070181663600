//! Mouse events.
//!
//! Requires the `mouse` feature. Masks use the layout of mouse protocol
//! version 2: five bits per button, buttons 1 to 5, then the modifier bits.

use crate::error::{check, Error, Result};
use crate::ncurses::Ncurses;
use crate::sys::{self, MEVENT};
use crate::types::MmaskT;

const fn button(n: u32, event: MmaskT) -> MmaskT {
    event << ((n - 1) * 5)
}

const RELEASED: MmaskT = 0o1;
const PRESSED: MmaskT = 0o2;
const CLICKED: MmaskT = 0o4;
const DOUBLE_CLICKED: MmaskT = 0o10;
const TRIPLE_CLICKED: MmaskT = 0o20;

bitflags::bitflags! {
    /// Mouse events to report, and the events reported.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct MouseMask: MmaskT {
        /// Button 1 released.
        const BUTTON1_RELEASED = button(1, RELEASED);
        /// Button 1 pressed.
        const BUTTON1_PRESSED = button(1, PRESSED);
        /// Button 1 clicked.
        const BUTTON1_CLICKED = button(1, CLICKED);
        /// Button 1 double-clicked.
        const BUTTON1_DOUBLE_CLICKED = button(1, DOUBLE_CLICKED);
        /// Button 1 triple-clicked.
        const BUTTON1_TRIPLE_CLICKED = button(1, TRIPLE_CLICKED);
        /// Button 2 released.
        const BUTTON2_RELEASED = button(2, RELEASED);
        /// Button 2 pressed.
        const BUTTON2_PRESSED = button(2, PRESSED);
        /// Button 2 clicked.
        const BUTTON2_CLICKED = button(2, CLICKED);
        /// Button 2 double-clicked.
        const BUTTON2_DOUBLE_CLICKED = button(2, DOUBLE_CLICKED);
        /// Button 2 triple-clicked.
        const BUTTON2_TRIPLE_CLICKED = button(2, TRIPLE_CLICKED);
        /// Button 3 released.
        const BUTTON3_RELEASED = button(3, RELEASED);
        /// Button 3 pressed.
        const BUTTON3_PRESSED = button(3, PRESSED);
        /// Button 3 clicked.
        const BUTTON3_CLICKED = button(3, CLICKED);
        /// Button 3 double-clicked.
        const BUTTON3_DOUBLE_CLICKED = button(3, DOUBLE_CLICKED);
        /// Button 3 triple-clicked.
        const BUTTON3_TRIPLE_CLICKED = button(3, TRIPLE_CLICKED);
        /// Button 4 released.
        const BUTTON4_RELEASED = button(4, RELEASED);
        /// Button 4 pressed, usually wheel up.
        const BUTTON4_PRESSED = button(4, PRESSED);
        /// Button 4 clicked.
        const BUTTON4_CLICKED = button(4, CLICKED);
        /// Button 4 double-clicked.
        const BUTTON4_DOUBLE_CLICKED = button(4, DOUBLE_CLICKED);
        /// Button 4 triple-clicked.
        const BUTTON4_TRIPLE_CLICKED = button(4, TRIPLE_CLICKED);
        /// Button 5 released.
        const BUTTON5_RELEASED = button(5, RELEASED);
        /// Button 5 pressed, usually wheel down.
        const BUTTON5_PRESSED = button(5, PRESSED);
        /// Button 5 clicked.
        const BUTTON5_CLICKED = button(5, CLICKED);
        /// Button 5 double-clicked.
        const BUTTON5_DOUBLE_CLICKED = button(5, DOUBLE_CLICKED);
        /// Button 5 triple-clicked.
        const BUTTON5_TRIPLE_CLICKED = button(5, TRIPLE_CLICKED);
        /// Control was held.
        const BUTTON_CTRL = button(6, 0o1);
        /// Shift was held.
        const BUTTON_SHIFT = button(6, 0o2);
        /// Alt was held.
        const BUTTON_ALT = button(6, 0o4);
        /// Report motion.
        const REPORT_MOUSE_POSITION = button(6, 0o10);
        /// Every button event and modifier, without motion.
        const ALL_MOUSE_EVENTS = button(6, 0o10) - 1;
    }
}

impl MouseMask {
    /// Whether any event of button `n` (1-5) is set.
    pub fn involves_button(self, n: u32) -> bool {
        (1..=5).contains(&n) && self.bits() & button(n, 0o37) != 0
    }
}

/// A mouse event read with [`Ncurses::getmouse`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MouseEvent {
    /// Device id.
    pub id: i16,
    /// Screen column.
    pub x: i32,
    /// Screen line.
    pub y: i32,
    /// Reserved.
    pub z: i32,
    /// What happened.
    pub state: MouseMask,
}

impl From<MEVENT> for MouseEvent {
    fn from(raw: MEVENT) -> Self {
        Self {
            id: raw.id,
            x: raw.x,
            y: raw.y,
            z: raw.z,
            state: MouseMask::from_bits_retain(raw.bstate),
        }
    }
}

impl From<MouseEvent> for MEVENT {
    fn from(event: MouseEvent) -> Self {
        MEVENT {
            id: event.id,
            x: event.x,
            y: event.y,
            z: event.z,
            bstate: event.state.bits(),
        }
    }
}

impl Ncurses {
    /// Choose the mouse events to report.
    ///
    /// Returns the mask actually applied and the previous one. An empty
    /// applied mask for a non-empty request means the terminal has no mouse.
    pub fn mousemask(&self, mask: MouseMask) -> Result<(MouseMask, MouseMask)> {
        let mut old: MmaskT = 0;
        // SAFETY: `old` is a valid out pointer for the duration of the call.
        let applied = unsafe { sys::mousemask(mask.bits(), &mut old) };
        if applied == 0 && !mask.is_empty() {
            log::warn!("mousemask({:#x}) applied no events", mask.bits());
            return Err(Error::Call("mousemask"));
        }
        Ok((
            MouseMask::from_bits_retain(applied),
            MouseMask::from_bits_retain(old),
        ))
    }

    /// Read the pending mouse event, after `getch` returned
    /// [`key::MOUSE`](crate::key::MOUSE).
    pub fn getmouse(&self) -> Result<MouseEvent> {
        let mut raw = MEVENT::default();
        // SAFETY: `raw` is a valid out pointer for the duration of the call.
        check(unsafe { sys::getmouse(&mut raw) }, "getmouse")?;
        Ok(raw.into())
    }

    /// Push an event back onto the input queue.
    pub fn ungetmouse(&self, event: MouseEvent) -> Result<()> {
        let mut raw = MEVENT::from(event);
        // SAFETY: the library copies the event out of `raw`.
        check(unsafe { sys::ungetmouse(&mut raw) }, "ungetmouse")
    }

    /// Set the maximum time in milliseconds between press and release for a
    /// click. Returns the previous interval; a negative value only queries.
    pub fn mouseinterval(&self, ms: i32) -> i32 {
        // SAFETY: no pointers involved.
        unsafe { sys::mouseinterval(ms) }
    }

    /// Whether a mouse driver is active.
    pub fn has_mouse(&self) -> bool {
        // SAFETY: no pointers involved.
        unsafe { sys::has_mouse() }
    }
}
