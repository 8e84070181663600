//! # ncurses-raii
//!
//! Safe, resource-managed access to the native ncurses library.
//!
//! The native library hands out raw `WINDOW` pointers that must be deleted
//! by hand, reports failure through the `ERR` sentinel and keeps color pairs
//! as bare numbers. This crate wraps those in:
//!
//! - [`Ncurses`]: the terminal session. Opening it starts curses mode and
//!   dropping it restores the terminal. It dereferences to `stdscr`.
//! - [`Window`] and [`Subwindow`]: windows deleted on drop, borrowing the
//!   session (or their parent) so they can't outlive it.
//! - [`Color`]: foreground/background values that are assigned color pairs on
//!   first use.
//!
//! Every fallible call returns [`Result`]; `ERR` becomes [`Error::Call`]
//! with the name of the native function.
//!
//! ## Features
//!
//! - **wide** (default): link `ncursesw` and take the locale from the
//!   environment, for UTF-8 output
//! - **mouse** (default): mouse events
//!
//! ## Example
//!
//! ```rust,no_run
//! use ncraii::{colors, key, BorderChars, Color, Ncurses, A_BOLD};
//!
//! fn main() -> ncraii::Result<()> {
//!     let nc = Ncurses::init()?;
//!     nc.cbreak(true)?;
//!     nc.echo(false)?;
//!     nc.keypad(true)?;
//!
//!     let win = nc.new_window(5, 30, 2, 2)?;
//!     win.border(BorderChars::default())?;
//!     let title = nc.color_to_attr(Color::new(colors::YELLOW, colors::BLUE))?;
//!     win.attron(title | A_BOLD)?;
//!     win.mvaddstr(2, 2, "press an arrow key")?;
//!     win.refresh()?;
//!
//!     if nc.getch()? == key::DOWN {
//!         nc.beep()?;
//!     }
//!     Ok(())
//! }
//! ```

#![allow(clippy::needless_doctest_main)]
#![warn(missing_docs)]

pub mod acs;
pub mod attr;
pub mod color;
pub mod error;
pub mod key;
pub mod ncurses;
pub mod sys;
pub mod types;
pub mod window;

#[cfg(feature = "mouse")]
pub mod mouse;

pub use attr::*;
pub use color::{colors, Color, ColorRegistry};
pub use error::{Error, Result};
pub use ncurses::Ncurses;
pub use types::*;
pub use window::{Subwindow, Window, GETSTR_LIMIT};

#[cfg(feature = "mouse")]
pub use mouse::{MouseEvent, MouseMask};
