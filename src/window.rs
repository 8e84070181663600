//! Windows.
//!
//! A [`Window`] owns one native `WINDOW` and deletes it when dropped. It
//! borrows the [`Ncurses`] session it was created in, so no window can
//! outlive the terminal. Subwindows borrow their parent in the same way.
//!
//! Every method first checks that the window still owns a handle and fails
//! with [`Error::NoWindow`] after [`Window::destroy`]. A native `ERR` comes
//! back as [`Error::Call`] naming the native function. The `mv*` variants
//! move the cursor first and stop there if the move fails.

use std::ffi::CString;
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};
use std::ptr::{self, NonNull};
use std::str::FromStr;

use libc::{c_char, c_int, c_short};

use crate::color::Color;
use crate::error::{check, Error, IntoResult, Result};
use crate::ncurses::Ncurses;
use crate::sys::{self, WINDOW};
use crate::types::{AttrT, BorderChars, ChType, Delay, PairT};

/// Longest line [`Window::getstr`] and [`Window::scanw`] read.
pub const GETSTR_LIMIT: usize = 1024;

fn c_len(n: usize) -> c_int {
    c_int::try_from(n).unwrap_or(c_int::MAX)
}

/// Longest prefix of `s` that fits in `n` bytes without splitting a
/// character.
fn prefix(s: &str, n: usize) -> &str {
    let mut end = n.min(s.len());
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// An owned native window.
///
/// Not `Clone`: use [`Window::try_clone`] for a duplicate with its own
/// handle. Moving a window moves ownership of the handle.
#[derive(Debug)]
pub struct Window<'a> {
    handle: Option<NonNull<WINDOW>>,
    owned: bool,
    _session: PhantomData<&'a Ncurses>,
}

impl<'a> Window<'a> {
    /// Create a window with `newwin`.
    ///
    /// A size of 0 extends the window to the edge of the screen.
    pub fn new(_nc: &'a Ncurses, lines: i32, cols: i32, y: i32, x: i32) -> Result<Self> {
        // SAFETY: the session is open while `_nc` is borrowed.
        let raw = unsafe { sys::newwin(lines, cols, y, x) };
        Self::adopt(raw, "newwin")
    }

    /// Take ownership of a native window.
    ///
    /// # Safety
    ///
    /// `raw` must be null or a live window of the session that nothing else
    /// will delete.
    pub unsafe fn from_raw(_nc: &'a Ncurses, raw: *mut WINDOW) -> Self {
        Self {
            handle: NonNull::new(raw),
            owned: true,
            _session: PhantomData,
        }
    }

    /// Wrap a window the library owns, such as `stdscr`. It is never deleted.
    pub(crate) fn borrowed(raw: *mut WINDOW) -> Self {
        Self {
            handle: NonNull::new(raw),
            owned: false,
            _session: PhantomData,
        }
    }

    fn adopt(raw: *mut WINDOW, func: &'static str) -> Result<Self> {
        match NonNull::new(raw) {
            Some(handle) => {
                log::trace!("{}() created window {:p}", func, raw);
                Ok(Self {
                    handle: Some(handle),
                    owned: true,
                    _session: PhantomData,
                })
            }
            None => {
                log::warn!("{}() returned no window", func);
                Err(Error::WindowInit(func))
            }
        }
    }

    /// Give up ownership without deleting the window.
    ///
    /// Returns null if the window was already destroyed.
    pub fn into_raw(mut self) -> *mut WINDOW {
        self.handle.take().map_or(ptr::null_mut(), NonNull::as_ptr)
    }

    /// Delete the current window, if any, and take ownership of `raw`.
    ///
    /// # Safety
    ///
    /// Same contract as [`Window::from_raw`].
    pub unsafe fn assign(&mut self, raw: *mut WINDOW) {
        self.destroy();
        self.handle = NonNull::new(raw);
        self.owned = true;
    }

    /// Delete the window now. Later calls fail with [`Error::NoWindow`].
    pub fn destroy(&mut self) {
        if let Some(handle) = self.handle.take() {
            if self.owned {
                log::trace!("deleting window {:p}", handle.as_ptr());
                // SAFETY: the handle is owned and was not deleted yet.
                unsafe {
                    sys::delwin(handle.as_ptr());
                }
            }
        }
    }

    /// Whether the window still owns a handle.
    pub fn is_valid(&self) -> bool {
        self.handle.is_some()
    }

    /// The native handle, null after [`Window::destroy`].
    pub fn as_raw(&self) -> *mut WINDOW {
        self.handle.map_or(ptr::null_mut(), NonNull::as_ptr)
    }

    /// A new window with the same size, position and contents (`dupwin`).
    pub fn try_clone(&self) -> Result<Window<'_>> {
        let win = self.raw()?;
        // SAFETY: `win` is live while `self` is borrowed.
        Window::adopt(unsafe { sys::dupwin(win) }, "dupwin")
    }

    /// A subwindow sharing this window's memory (`derwin`).
    ///
    /// `y` and `x` are relative to this window's origin.
    pub fn subwindow(&self, lines: i32, cols: i32, y: i32, x: i32) -> Result<Subwindow<'_>> {
        let win = self.raw()?;
        // SAFETY: `win` is live while `self` is borrowed, and the subwindow
        // holds that borrow.
        let raw = unsafe { sys::derwin(win, lines, cols, y, x) };
        Window::adopt(raw, "derwin").map(|window| Subwindow { window })
    }

    fn raw(&self) -> Result<*mut WINDOW> {
        self.handle.map(NonNull::as_ptr).ok_or(Error::NoWindow)
    }

    // The closures below hand the checked handle to a single native call.
    // It stays live for the whole call because `self` is borrowed.

    fn call(&self, func: &'static str, f: impl FnOnce(*mut WINDOW) -> c_int) -> Result<()> {
        check(f(self.raw()?), func)
    }

    fn apply(&self, f: impl FnOnce(*mut WINDOW)) -> Result<()> {
        f(self.raw()?);
        Ok(())
    }

    // ========================================================================
    // Input options
    // ========================================================================

    /// Decode function keys into single key codes.
    pub fn keypad(&self, on: bool) -> Result<()> {
        self.call("keypad", |w| unsafe { sys::keypad(w, on) })
    }

    /// Make `getch` non-blocking.
    pub fn nodelay(&self, on: bool) -> Result<()> {
        self.call("nodelay", |w| unsafe { sys::nodelay(w, on) })
    }

    /// Don't wait between the bytes of an escape sequence.
    pub fn notimeout(&self, on: bool) -> Result<()> {
        self.call("notimeout", |w| unsafe { sys::notimeout(w, on) })
    }

    /// How long `getch` waits for input.
    pub fn timeout(&self, delay: Delay) -> Result<()> {
        self.apply(|w| unsafe { sys::wtimeout(w, delay.to_raw()) })
    }

    // ========================================================================
    // Output options
    // ========================================================================

    /// Clear the screen on the next refresh of this window.
    pub fn clearok(&self, on: bool) -> Result<()> {
        self.call("clearok", |w| unsafe { sys::clearok(w, on) })
    }

    /// Software scrolling region, lines `top` to `bottom`.
    pub fn setscrreg(&self, top: i32, bottom: i32) -> Result<()> {
        self.call("wsetscrreg", |w| unsafe { sys::wsetscrreg(w, top, bottom) })
    }

    /// Scroll instead of stopping at the bottom line.
    pub fn scrollok(&self, on: bool) -> Result<()> {
        self.call("scrollok", |w| unsafe { sys::scrollok(w, on) })
    }

    /// Allow the terminal's insert/delete line feature.
    pub fn idlok(&self, on: bool) -> Result<()> {
        self.call("idlok", |w| unsafe { sys::idlok(w, on) })
    }

    /// Allow the terminal's insert/delete character feature.
    pub fn idcok(&self, on: bool) -> Result<()> {
        self.apply(|w| unsafe { sys::idcok(w, on) })
    }

    /// Refresh after every change.
    pub fn immedok(&self, on: bool) -> Result<()> {
        self.apply(|w| unsafe { sys::immedok(w, on) })
    }

    /// Leave the hardware cursor wherever the update left it.
    pub fn leaveok(&self, on: bool) -> Result<()> {
        self.call("leaveok", |w| unsafe { sys::leaveok(w, on) })
    }

    // ========================================================================
    // Input
    // ========================================================================

    /// Read a key. See [`key`](crate::key) for the special key codes.
    pub fn getch(&self) -> Result<i32> {
        let win = self.raw()?;
        // SAFETY: see `call`.
        unsafe { sys::wgetch(win) }.into_result("wgetch")
    }

    /// [`Window::getch`] at a position.
    pub fn mvgetch(&self, y: i32, x: i32) -> Result<i32> {
        self.mv(y, x)?;
        self.getch()
    }

    /// Read a line and parse it.
    ///
    /// Surrounding whitespace is ignored. A line that doesn't parse is
    /// returned in [`Error::Parse`].
    pub fn scanw<T: FromStr>(&self) -> Result<T> {
        let line = self.getstr()?;
        line.trim().parse().map_err(|_| Error::Parse(line))
    }

    /// [`Window::scanw`] at a position.
    pub fn mvscanw<T: FromStr>(&self, y: i32, x: i32) -> Result<T> {
        self.mv(y, x)?;
        self.scanw()
    }

    /// Read a line of at most [`GETSTR_LIMIT`] bytes.
    pub fn getstr(&self) -> Result<String> {
        self.getnstr(GETSTR_LIMIT)
    }

    /// Read a line of at most `n` bytes, capped at [`GETSTR_LIMIT`].
    pub fn getnstr(&self, n: usize) -> Result<String> {
        let win = self.raw()?;
        let n = n.min(GETSTR_LIMIT);
        let mut buf = vec![0u8; n + 1];
        // SAFETY: `buf` holds `n` bytes plus the terminator.
        check(
            unsafe { sys::wgetnstr(win, buf.as_mut_ptr().cast::<c_char>(), c_len(n)) },
            "wgetnstr",
        )?;
        Ok(until_nul(&buf))
    }

    /// [`Window::getstr`] at a position.
    pub fn mvgetstr(&self, y: i32, x: i32) -> Result<String> {
        self.mv(y, x)?;
        self.getstr()
    }

    /// [`Window::getnstr`] at a position.
    pub fn mvgetnstr(&self, y: i32, x: i32, n: usize) -> Result<String> {
        self.mv(y, x)?;
        self.getnstr(n)
    }

    /// The cell under the cursor.
    pub fn inch(&self) -> Result<ChType> {
        let win = self.raw()?;
        // SAFETY: see `call`.
        Ok(unsafe { sys::winch(win) })
    }

    /// [`Window::inch`] at a position.
    pub fn mvinch(&self, y: i32, x: i32) -> Result<ChType> {
        self.mv(y, x)?;
        self.inch()
    }

    /// Text from the cursor to the end of the line, attributes stripped.
    pub fn instr(&self) -> Result<String> {
        self.innstr(self.remaining()?)
    }

    /// At most `n` characters of text from the cursor, never past the end
    /// of the line.
    pub fn innstr(&self, n: usize) -> Result<String> {
        let win = self.raw()?;
        let n = n.min(self.remaining()?);
        let mut buf = vec![0u8; n + 1];
        // SAFETY: `buf` holds `n` bytes plus the terminator.
        check(
            unsafe { sys::winnstr(win, buf.as_mut_ptr().cast::<c_char>(), c_len(n)) },
            "winnstr",
        )?;
        Ok(until_nul(&buf))
    }

    /// [`Window::instr`] at a position.
    pub fn mvinstr(&self, y: i32, x: i32) -> Result<String> {
        self.mv(y, x)?;
        self.instr()
    }

    /// [`Window::innstr`] at a position.
    pub fn mvinnstr(&self, y: i32, x: i32, n: usize) -> Result<String> {
        self.mv(y, x)?;
        self.innstr(n)
    }

    /// Cells from the cursor to the end of the line.
    pub fn inchstr(&self) -> Result<Vec<ChType>> {
        self.inchnstr(self.remaining()?)
    }

    /// At most `n` cells from the cursor, never past the end of the line.
    pub fn inchnstr(&self, n: usize) -> Result<Vec<ChType>> {
        let win = self.raw()?;
        let n = n.min(self.remaining()?);
        let mut buf: Vec<ChType> = vec![0; n + 1];
        // SAFETY: `buf` holds `n` cells plus the terminator.
        check(
            unsafe { sys::winchnstr(win, buf.as_mut_ptr(), c_len(n)) },
            "winchnstr",
        )?;
        let len = buf.iter().position(|&c| c == 0).unwrap_or(n);
        buf.truncate(len);
        Ok(buf)
    }

    /// [`Window::inchstr`] at a position.
    pub fn mvinchstr(&self, y: i32, x: i32) -> Result<Vec<ChType>> {
        self.mv(y, x)?;
        self.inchstr()
    }

    /// [`Window::inchnstr`] at a position.
    pub fn mvinchnstr(&self, y: i32, x: i32, n: usize) -> Result<Vec<ChType>> {
        self.mv(y, x)?;
        self.inchnstr(n)
    }

    fn remaining(&self) -> Result<usize> {
        let (_, x) = self.getyx()?;
        let (_, cols) = self.getmaxyx()?;
        Ok(usize::try_from(cols - x).unwrap_or(0))
    }

    // ========================================================================
    // Output
    // ========================================================================

    /// Put a character and advance the cursor.
    pub fn addch(&self, ch: ChType) -> Result<()> {
        self.call("waddch", |w| unsafe { sys::waddch(w, ch) })
    }

    /// [`Window::addch`] at a position.
    pub fn mvaddch(&self, y: i32, x: i32, ch: ChType) -> Result<()> {
        self.mv(y, x)?;
        self.addch(ch)
    }

    /// [`Window::addch`] followed by a refresh.
    pub fn echochar(&self, ch: ChType) -> Result<()> {
        self.call("wechochar", |w| unsafe { sys::wechochar(w, ch) })
    }

    /// Formatted output.
    ///
    /// ```rust,no_run
    /// # fn main() -> ncraii::Result<()> {
    /// let nc = ncraii::Ncurses::init()?;
    /// nc.printw(format_args!("{} lines", nc.line_count()))?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn printw(&self, args: fmt::Arguments<'_>) -> Result<()> {
        match args.as_str() {
            Some(s) => self.addstr(s),
            None => self.addstr(&args.to_string()),
        }
    }

    /// [`Window::printw`] at a position.
    pub fn mvprintw(&self, y: i32, x: i32, args: fmt::Arguments<'_>) -> Result<()> {
        self.mv(y, x)?;
        self.printw(args)
    }

    /// Put a string.
    pub fn addstr(&self, s: &str) -> Result<()> {
        let text = CString::new(s)?;
        self.call("waddnstr", |w| unsafe { sys::waddnstr(w, text.as_ptr(), -1) })
    }

    /// Put at most `n` bytes of a string, never splitting a character.
    pub fn addnstr(&self, s: &str, n: usize) -> Result<()> {
        let part = prefix(s, n);
        let text = CString::new(part)?;
        let len = c_len(part.len());
        self.call("waddnstr", |w| unsafe { sys::waddnstr(w, text.as_ptr(), len) })
    }

    /// [`Window::addstr`] at a position.
    pub fn mvaddstr(&self, y: i32, x: i32, s: &str) -> Result<()> {
        self.mv(y, x)?;
        self.addstr(s)
    }

    /// [`Window::addnstr`] at a position.
    pub fn mvaddnstr(&self, y: i32, x: i32, s: &str, n: usize) -> Result<()> {
        self.mv(y, x)?;
        self.addnstr(s, n)
    }

    /// Put cells without moving the cursor or wrapping.
    pub fn addchstr(&self, cells: &[ChType]) -> Result<()> {
        self.addchnstr(cells, cells.len())
    }

    /// Put at most `n` cells without moving the cursor or wrapping.
    pub fn addchnstr(&self, cells: &[ChType], n: usize) -> Result<()> {
        let n = n.min(cells.len());
        let mut buf = cells[..n].to_vec();
        buf.push(0);
        self.call("waddchnstr", |w| unsafe {
            sys::waddchnstr(w, buf.as_ptr(), c_len(n))
        })
    }

    /// [`Window::addchstr`] at a position.
    pub fn mvaddchstr(&self, y: i32, x: i32, cells: &[ChType]) -> Result<()> {
        self.mv(y, x)?;
        self.addchstr(cells)
    }

    /// [`Window::addchnstr`] at a position.
    pub fn mvaddchnstr(&self, y: i32, x: i32, cells: &[ChType], n: usize) -> Result<()> {
        self.mv(y, x)?;
        self.addchnstr(cells, n)
    }

    /// Insert a character before the cursor.
    pub fn insch(&self, ch: ChType) -> Result<()> {
        self.call("winsch", |w| unsafe { sys::winsch(w, ch) })
    }

    /// [`Window::insch`] at a position.
    pub fn mvinsch(&self, y: i32, x: i32, ch: ChType) -> Result<()> {
        self.mv(y, x)?;
        self.insch(ch)
    }

    /// Insert a string before the cursor.
    pub fn insstr(&self, s: &str) -> Result<()> {
        let text = CString::new(s)?;
        self.call("winsnstr", |w| unsafe { sys::winsnstr(w, text.as_ptr(), -1) })
    }

    /// Insert at most `n` bytes of a string before the cursor.
    pub fn insnstr(&self, s: &str, n: usize) -> Result<()> {
        let part = prefix(s, n);
        let text = CString::new(part)?;
        let len = c_len(part.len());
        self.call("winsnstr", |w| unsafe { sys::winsnstr(w, text.as_ptr(), len) })
    }

    /// [`Window::insstr`] at a position.
    pub fn mvinsstr(&self, y: i32, x: i32, s: &str) -> Result<()> {
        self.mv(y, x)?;
        self.insstr(s)
    }

    /// [`Window::insnstr`] at a position.
    pub fn mvinsnstr(&self, y: i32, x: i32, s: &str, n: usize) -> Result<()> {
        self.mv(y, x)?;
        self.insnstr(s, n)
    }

    // ========================================================================
    // Deletion
    // ========================================================================

    /// Delete the character under the cursor.
    pub fn delch(&self) -> Result<()> {
        self.call("wdelch", |w| unsafe { sys::wdelch(w) })
    }

    /// [`Window::delch`] at a position.
    pub fn mvdelch(&self, y: i32, x: i32) -> Result<()> {
        self.mv(y, x)?;
        self.delch()
    }

    /// Insert `n` blank lines above the cursor, or delete `-n` lines.
    pub fn insdelln(&self, n: i32) -> Result<()> {
        self.call("winsdelln", |w| unsafe { sys::winsdelln(w, n) })
    }

    /// Insert a blank line above the cursor.
    pub fn insertln(&self) -> Result<()> {
        self.insdelln(1)
    }

    /// Delete the cursor line.
    pub fn deleteln(&self) -> Result<()> {
        self.insdelln(-1)
    }

    // ========================================================================
    // Borders and lines
    // ========================================================================

    /// Draw a border. Zero entries use the default characters.
    pub fn border(&self, chars: BorderChars) -> Result<()> {
        let BorderChars {
            left,
            right,
            top,
            bottom,
            top_left,
            top_right,
            bottom_left,
            bottom_right,
        } = chars;
        self.call("wborder", |w| unsafe {
            sys::wborder(
                w,
                left,
                right,
                top,
                bottom,
                top_left,
                top_right,
                bottom_left,
                bottom_right,
            )
        })
    }

    /// Draw a box with default corners.
    pub fn box_(&self, vertical: ChType, horizontal: ChType) -> Result<()> {
        self.call("box", |w| unsafe { sys::box_(w, vertical, horizontal) })
    }

    /// Horizontal line of at most `n` cells from the cursor.
    pub fn hline(&self, ch: ChType, n: i32) -> Result<()> {
        self.call("whline", |w| unsafe { sys::whline(w, ch, n) })
    }

    /// Vertical line of at most `n` cells from the cursor.
    pub fn vline(&self, ch: ChType, n: i32) -> Result<()> {
        self.call("wvline", |w| unsafe { sys::wvline(w, ch, n) })
    }

    /// [`Window::hline`] at a position.
    pub fn mvhline(&self, y: i32, x: i32, ch: ChType, n: i32) -> Result<()> {
        self.mv(y, x)?;
        self.hline(ch, n)
    }

    /// [`Window::vline`] at a position.
    pub fn mvvline(&self, y: i32, x: i32, ch: ChType, n: i32) -> Result<()> {
        self.mv(y, x)?;
        self.vline(ch, n)
    }

    // ========================================================================
    // Background
    // ========================================================================

    /// Set the background without touching existing cells.
    pub fn bkgdset(&self, ch: ChType) -> Result<()> {
        self.apply(|w| unsafe { sys::wbkgdset(w, ch) })
    }

    /// Set the background and apply it to every cell.
    pub fn bkgd(&self, ch: ChType) -> Result<()> {
        self.call("wbkgd", |w| unsafe { sys::wbkgd(w, ch) })
    }

    /// The current background.
    pub fn getbkgd(&self) -> Result<ChType> {
        let win = self.raw()?;
        // SAFETY: see `call`.
        Ok(unsafe { sys::getbkgd(win) })
    }

    // ========================================================================
    // Attributes
    // ========================================================================

    /// Turn on attributes for later output.
    pub fn attron(&self, attrs: AttrT) -> Result<()> {
        self.call("wattron", |w| unsafe { sys::wattron(w, attrs as c_int) })
    }

    /// Turn off attributes for later output.
    pub fn attroff(&self, attrs: AttrT) -> Result<()> {
        self.call("wattroff", |w| unsafe { sys::wattroff(w, attrs as c_int) })
    }

    /// Replace the attributes for later output.
    pub fn attrset(&self, attrs: AttrT) -> Result<()> {
        self.call("wattrset", |w| unsafe { sys::wattrset(w, attrs as c_int) })
    }

    /// Current attributes and color pair.
    pub fn attr_get(&self) -> Result<(AttrT, PairT)> {
        let win = self.raw()?;
        let mut attrs: AttrT = 0;
        let mut pair: c_short = 0;
        // SAFETY: both out pointers are valid for the call.
        check(
            unsafe { sys::wattr_get(win, &mut attrs, &mut pair, ptr::null_mut()) },
            "wattr_get",
        )?;
        Ok((attrs, pair))
    }

    /// Color of the current attributes.
    pub fn color_get(&self, nc: &Ncurses) -> Result<Color> {
        let (_, pair) = self.attr_get()?;
        nc.pair_number_to_color(pair)
    }

    /// Current attributes and their color.
    pub fn attr_color_get(&self, nc: &Ncurses) -> Result<(AttrT, Color)> {
        let (attrs, pair) = self.attr_get()?;
        Ok((attrs, nc.pair_number_to_color(pair)?))
    }

    /// Change the attributes of `n` cells from the cursor (-1 to the end of
    /// the line) without touching the text. `color` is registered if needed.
    pub fn chgat(&self, nc: &Ncurses, n: i32, attrs: AttrT, color: Color) -> Result<()> {
        let win = self.raw()?;
        let pair = nc.color_to_pair_number(color)?;
        // SAFETY: see `call`.
        check(
            unsafe { sys::wchgat(win, n, attrs, pair, ptr::null()) },
            "wchgat",
        )
    }

    /// [`Window::chgat`] at a position.
    pub fn mvchgat(
        &self,
        nc: &Ncurses,
        y: i32,
        x: i32,
        n: i32,
        attrs: AttrT,
        color: Color,
    ) -> Result<()> {
        self.mv(y, x)?;
        self.chgat(nc, n, attrs, color)
    }

    // ========================================================================
    // Cursor, clearing, refresh
    // ========================================================================

    /// Move the cursor.
    pub fn mv(&self, y: i32, x: i32) -> Result<()> {
        self.call("wmove", |w| unsafe { sys::wmove(w, y, x) })
    }

    /// Move the window on the screen.
    pub fn mvwin(&self, y: i32, x: i32) -> Result<()> {
        self.call("mvwin", |w| unsafe { sys::mvwin(w, y, x) })
    }

    /// Blank every cell.
    pub fn erase(&self) -> Result<()> {
        self.call("werase", |w| unsafe { sys::werase(w) })
    }

    /// Blank every cell and repaint the screen on the next refresh.
    pub fn clear(&self) -> Result<()> {
        self.call("wclear", |w| unsafe { sys::wclear(w) })
    }

    /// Blank from the cursor to the bottom.
    pub fn clrtobot(&self) -> Result<()> {
        self.call("wclrtobot", |w| unsafe { sys::wclrtobot(w) })
    }

    /// Blank from the cursor to the end of the line.
    pub fn clrtoeol(&self) -> Result<()> {
        self.call("wclrtoeol", |w| unsafe { sys::wclrtoeol(w) })
    }

    /// Copy to the terminal.
    pub fn refresh(&self) -> Result<()> {
        self.call("wrefresh", |w| unsafe { sys::wrefresh(w) })
    }

    /// Copy to the virtual screen only; see [`Ncurses::doupdate`].
    pub fn outrefresh(&self) -> Result<()> {
        self.call("wnoutrefresh", |w| unsafe { sys::wnoutrefresh(w) })
    }

    /// Repaint the whole window on the next refresh.
    pub fn redraw(&self) -> Result<()> {
        self.call("redrawwin", |w| unsafe { sys::redrawwin(w) })
    }

    /// Repaint `count` lines from `start` on the next refresh.
    pub fn redrawln(&self, start: i32, count: i32) -> Result<()> {
        self.call("wredrawln", |w| unsafe { sys::wredrawln(w, start, count) })
    }

    /// Scroll up `n` lines, down for negative `n`.
    pub fn scroll(&self, n: i32) -> Result<()> {
        self.call("wscrl", |w| unsafe { sys::wscrl(w, n) })
    }

    /// Mark `count` lines from `start` as changed or unchanged.
    pub fn touchln(&self, start: i32, count: i32, changed: bool) -> Result<()> {
        let changed = c_int::from(changed);
        self.call("wtouchln", |w| unsafe {
            sys::wtouchln(w, start, count, changed)
        })
    }

    /// Mark the whole window as changed.
    pub fn touchwin(&self) -> Result<()> {
        let (lines, _) = self.getmaxyx()?;
        self.touchln(0, lines, true)
    }

    // ========================================================================
    // Geometry
    // ========================================================================

    /// Cursor position.
    pub fn getyx(&self) -> Result<(i32, i32)> {
        let win = self.raw()?;
        // SAFETY: see `call`.
        Ok(unsafe { (sys::getcury(win), sys::getcurx(win)) })
    }

    /// Screen position of the top-left corner.
    pub fn getbegyx(&self) -> Result<(i32, i32)> {
        let win = self.raw()?;
        // SAFETY: see `call`.
        Ok(unsafe { (sys::getbegy(win), sys::getbegx(win)) })
    }

    /// Size in lines and columns.
    pub fn getmaxyx(&self) -> Result<(i32, i32)> {
        let win = self.raw()?;
        // SAFETY: see `call`.
        Ok(unsafe { (sys::getmaxy(win), sys::getmaxx(win)) })
    }

    /// Whether the screen position lies inside the window.
    pub fn enclose(&self, y: i32, x: i32) -> Result<bool> {
        let win = self.raw()?;
        // SAFETY: see `call`.
        Ok(unsafe { sys::wenclose(win, y, x) })
    }

    /// Convert between screen and window coordinates.
    ///
    /// With `to_screen` false, screen coordinates outside the window give
    /// `None`.
    pub fn coord_trafo(&self, y: i32, x: i32, to_screen: bool) -> Result<Option<(i32, i32)>> {
        let win = self.raw()?;
        let (mut y, mut x) = (y, x);
        // SAFETY: both pointers are valid for the call.
        let inside = unsafe { sys::wmouse_trafo(win, &mut y, &mut x, to_screen) };
        Ok(inside.then_some((y, x)))
    }
}

impl Drop for Window<'_> {
    fn drop(&mut self) {
        self.destroy();
    }
}

fn until_nul(buf: &[u8]) -> String {
    let len = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    String::from_utf8_lossy(&buf[..len]).into_owned()
}

/// A window created inside another one with [`Window::subwindow`].
///
/// Shares the parent's memory and borrows the parent, so it is always
/// deleted first.
#[derive(Debug)]
pub struct Subwindow<'p> {
    window: Window<'p>,
}

impl Subwindow<'_> {
    /// Move the subwindow inside its parent (`mvderwin`).
    pub fn mvderwin(&self, y: i32, x: i32) -> Result<()> {
        self.window
            .call("mvderwin", |w| unsafe { sys::mvderwin(w, y, x) })
    }

    /// Mark the parent's cells as changed where this window changed.
    pub fn syncup(&self) -> Result<()> {
        self.window.apply(|w| unsafe { sys::wsyncup(w) })
    }
}

impl<'p> Deref for Subwindow<'p> {
    type Target = Window<'p>;

    fn deref(&self) -> &Self::Target {
        &self.window
    }
}

impl DerefMut for Subwindow<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.window
    }
}
