//! `extern "C"` declarations for libncurses(w).
//!
//! Signatures follow `curses.h` for the ABI 6 library: `chtype`, `attr_t`
//! and `mmask_t` are 32 bits wide and C `bool` maps to Rust `bool`.

use std::ptr;
use std::sync::atomic::{AtomicBool, Ordering};

use libc::{c_char, c_int, c_short, c_void, FILE};

use super::{SCREEN, WINDOW};
#[cfg(feature = "mouse")]
use super::MEVENT;
use crate::types::{AttrT, ChType};
#[cfg(feature = "mouse")]
use crate::types::MmaskT;

#[cfg_attr(feature = "wide", link(name = "ncursesw"))]
#[cfg_attr(not(feature = "wide"), link(name = "ncurses"))]
extern "C" {
    fn newterm(term: *const c_char, outfd: *mut FILE, infd: *mut FILE) -> *mut SCREEN;
    pub(crate) fn endwin() -> c_int;
    pub(crate) fn isendwin() -> bool;
    pub(crate) fn delscreen(sp: *mut SCREEN);

    // Windows
    pub(crate) fn newwin(nlines: c_int, ncols: c_int, begin_y: c_int, begin_x: c_int)
        -> *mut WINDOW;
    pub(crate) fn delwin(win: *mut WINDOW) -> c_int;
    pub(crate) fn derwin(
        orig: *mut WINDOW,
        nlines: c_int,
        ncols: c_int,
        begin_y: c_int,
        begin_x: c_int,
    ) -> *mut WINDOW;
    pub(crate) fn dupwin(win: *mut WINDOW) -> *mut WINDOW;
    pub(crate) fn mvwin(win: *mut WINDOW, y: c_int, x: c_int) -> c_int;
    pub(crate) fn mvderwin(win: *mut WINDOW, par_y: c_int, par_x: c_int) -> c_int;
    pub(crate) fn wsyncup(win: *mut WINDOW);

    // Input options
    pub(crate) fn cbreak() -> c_int;
    pub(crate) fn nocbreak() -> c_int;
    pub(crate) fn echo() -> c_int;
    pub(crate) fn noecho() -> c_int;
    pub(crate) fn halfdelay(tenths: c_int) -> c_int;
    pub(crate) fn intrflush(win: *mut WINDOW, bf: bool) -> c_int;
    pub(crate) fn keypad(win: *mut WINDOW, bf: bool) -> c_int;
    pub(crate) fn meta(win: *mut WINDOW, bf: bool) -> c_int;
    pub(crate) fn nodelay(win: *mut WINDOW, bf: bool) -> c_int;
    pub(crate) fn notimeout(win: *mut WINDOW, bf: bool) -> c_int;
    pub(crate) fn raw() -> c_int;
    pub(crate) fn noraw() -> c_int;
    pub(crate) fn qiflush();
    pub(crate) fn noqiflush();
    pub(crate) fn typeahead(fd: c_int) -> c_int;
    pub(crate) fn wtimeout(win: *mut WINDOW, delay: c_int);

    // Output options
    pub(crate) fn clearok(win: *mut WINDOW, bf: bool) -> c_int;
    pub(crate) fn idlok(win: *mut WINDOW, bf: bool) -> c_int;
    pub(crate) fn idcok(win: *mut WINDOW, bf: bool);
    pub(crate) fn immedok(win: *mut WINDOW, bf: bool);
    pub(crate) fn leaveok(win: *mut WINDOW, bf: bool) -> c_int;
    pub(crate) fn scrollok(win: *mut WINDOW, bf: bool) -> c_int;
    pub(crate) fn wsetscrreg(win: *mut WINDOW, top: c_int, bot: c_int) -> c_int;
    pub(crate) fn nl() -> c_int;
    pub(crate) fn nonl() -> c_int;
    pub(crate) fn curs_set(visibility: c_int) -> c_int;
    pub(crate) fn beep() -> c_int;
    pub(crate) fn flash() -> c_int;

    // Input
    pub(crate) fn ungetch(ch: c_int) -> c_int;
    pub(crate) fn has_key(ch: c_int) -> c_int;
    pub(crate) fn keyname(ch: c_int) -> *const c_char;
    pub(crate) fn wgetch(win: *mut WINDOW) -> c_int;
    pub(crate) fn wgetnstr(win: *mut WINDOW, s: *mut c_char, n: c_int) -> c_int;
    pub(crate) fn winch(win: *mut WINDOW) -> ChType;
    pub(crate) fn winnstr(win: *mut WINDOW, s: *mut c_char, n: c_int) -> c_int;
    pub(crate) fn winchnstr(win: *mut WINDOW, chstr: *mut ChType, n: c_int) -> c_int;

    // Output
    pub(crate) fn waddch(win: *mut WINDOW, ch: ChType) -> c_int;
    pub(crate) fn wechochar(win: *mut WINDOW, ch: ChType) -> c_int;
    pub(crate) fn waddnstr(win: *mut WINDOW, s: *const c_char, n: c_int) -> c_int;
    pub(crate) fn waddchnstr(win: *mut WINDOW, chstr: *const ChType, n: c_int) -> c_int;
    pub(crate) fn winsch(win: *mut WINDOW, ch: ChType) -> c_int;
    pub(crate) fn winsnstr(win: *mut WINDOW, s: *const c_char, n: c_int) -> c_int;
    pub(crate) fn wdelch(win: *mut WINDOW) -> c_int;
    pub(crate) fn winsdelln(win: *mut WINDOW, n: c_int) -> c_int;

    // Borders and background
    pub(crate) fn wborder(
        win: *mut WINDOW,
        ls: ChType,
        rs: ChType,
        ts: ChType,
        bs: ChType,
        tl: ChType,
        tr: ChType,
        bl: ChType,
        br: ChType,
    ) -> c_int;
    #[link_name = "box"]
    pub(crate) fn box_(win: *mut WINDOW, verch: ChType, horch: ChType) -> c_int;
    pub(crate) fn whline(win: *mut WINDOW, ch: ChType, n: c_int) -> c_int;
    pub(crate) fn wvline(win: *mut WINDOW, ch: ChType, n: c_int) -> c_int;
    pub(crate) fn wbkgdset(win: *mut WINDOW, ch: ChType);
    pub(crate) fn wbkgd(win: *mut WINDOW, ch: ChType) -> c_int;
    pub(crate) fn getbkgd(win: *mut WINDOW) -> ChType;

    // Attributes
    pub(crate) fn wattron(win: *mut WINDOW, attrs: c_int) -> c_int;
    pub(crate) fn wattroff(win: *mut WINDOW, attrs: c_int) -> c_int;
    pub(crate) fn wattrset(win: *mut WINDOW, attrs: c_int) -> c_int;
    pub(crate) fn wattr_get(
        win: *mut WINDOW,
        attrs: *mut AttrT,
        pair: *mut c_short,
        opts: *mut c_void,
    ) -> c_int;
    pub(crate) fn wchgat(
        win: *mut WINDOW,
        n: c_int,
        attr: AttrT,
        pair: c_short,
        opts: *const c_void,
    ) -> c_int;

    // Cursor, clearing, refresh
    pub(crate) fn wmove(win: *mut WINDOW, y: c_int, x: c_int) -> c_int;
    pub(crate) fn werase(win: *mut WINDOW) -> c_int;
    pub(crate) fn wclear(win: *mut WINDOW) -> c_int;
    pub(crate) fn wclrtobot(win: *mut WINDOW) -> c_int;
    pub(crate) fn wclrtoeol(win: *mut WINDOW) -> c_int;
    pub(crate) fn wrefresh(win: *mut WINDOW) -> c_int;
    pub(crate) fn wnoutrefresh(win: *mut WINDOW) -> c_int;
    pub(crate) fn redrawwin(win: *mut WINDOW) -> c_int;
    pub(crate) fn wredrawln(win: *mut WINDOW, beg_line: c_int, num_lines: c_int) -> c_int;
    pub(crate) fn wscrl(win: *mut WINDOW, n: c_int) -> c_int;
    pub(crate) fn doupdate() -> c_int;
    pub(crate) fn wtouchln(win: *mut WINDOW, y: c_int, n: c_int, changed: c_int) -> c_int;

    // Geometry
    pub(crate) fn getcury(win: *const WINDOW) -> c_int;
    pub(crate) fn getcurx(win: *const WINDOW) -> c_int;
    pub(crate) fn getbegy(win: *const WINDOW) -> c_int;
    pub(crate) fn getbegx(win: *const WINDOW) -> c_int;
    pub(crate) fn getmaxy(win: *const WINDOW) -> c_int;
    pub(crate) fn getmaxx(win: *const WINDOW) -> c_int;
    pub(crate) fn wenclose(win: *const WINDOW, y: c_int, x: c_int) -> bool;
    pub(crate) fn wmouse_trafo(
        win: *const WINDOW,
        y: *mut c_int,
        x: *mut c_int,
        to_screen: bool,
    ) -> bool;

    // Colors
    pub(crate) fn start_color() -> c_int;
    pub(crate) fn has_colors() -> bool;
    pub(crate) fn use_default_colors() -> c_int;
    pub(crate) fn init_pair(pair: c_short, f: c_short, b: c_short) -> c_int;
    pub(crate) fn pair_content(pair: c_short, f: *mut c_short, b: *mut c_short) -> c_int;
    pub(crate) fn init_color(color: c_short, r: c_short, g: c_short, b: c_short) -> c_int;
}

#[cfg(feature = "mouse")]
#[cfg_attr(feature = "wide", link(name = "ncursesw"))]
#[cfg_attr(not(feature = "wide"), link(name = "ncurses"))]
extern "C" {
    pub(crate) fn mousemask(newmask: MmaskT, oldmask: *mut MmaskT) -> MmaskT;
    pub(crate) fn getmouse(event: *mut MEVENT) -> c_int;
    pub(crate) fn ungetmouse(event: *mut MEVENT) -> c_int;
    pub(crate) fn mouseinterval(erval: c_int) -> c_int;
    pub(crate) fn has_mouse() -> bool;
}

/// The library's global variables, kept apart from the accessors below.
mod globals {
    use libc::c_int;

    use super::WINDOW;
    use crate::types::ChType;

    #[cfg_attr(feature = "wide", link(name = "ncursesw"))]
    #[cfg_attr(not(feature = "wide"), link(name = "ncurses"))]
    extern "C" {
        pub static stdscr: *mut WINDOW;
        pub static curscr: *mut WINDOW;
        pub static LINES: c_int;
        pub static COLS: c_int;
        pub static COLORS: c_int;
        pub static COLOR_PAIRS: c_int;
        pub static acs_map: [ChType; 128];
    }
}

static SCREEN_CLAIMED: AtomicBool = AtomicBool::new(false);

/// Reserve the terminal for this process. Only the first call succeeds.
pub(crate) fn claim_screen() -> bool {
    SCREEN_CLAIMED
        .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
        .is_ok()
}

/// Open the terminal on the standard streams.
///
/// Unlike `initscr`, `newterm` reports failure with a null pointer instead of
/// exiting the process. Returns null on failure.
pub(crate) fn open_terminal() -> *mut SCREEN {
    #[cfg(feature = "wide")]
    // SAFETY: the empty string selects the locale from the environment; the
    // returned pointer is not retained.
    unsafe {
        libc::setlocale(libc::LC_ALL, c"".as_ptr());
    }

    // SAFETY: the streams wrap duplicated descriptors, so closing them on
    // failure leaves stdin and stdout open. On success newterm keeps them
    // until delscreen.
    unsafe {
        let out = dup_stream(libc::STDOUT_FILENO, c"w".as_ptr());
        let input = dup_stream(libc::STDIN_FILENO, c"r".as_ptr());
        super::open_on_streams(
            out,
            input,
            |out, input| newterm(ptr::null(), out, input),
            |stream| {
                libc::fclose(stream);
            },
        )
    }
}

/// A stream on a duplicate of `fd`, or null.
unsafe fn dup_stream(fd: c_int, mode: *const c_char) -> *mut FILE {
    let dup = libc::dup(fd);
    if dup < 0 {
        return ptr::null_mut();
    }
    let stream = libc::fdopen(dup, mode);
    if stream.is_null() {
        libc::close(dup);
    }
    stream
}

/// The `stdscr` of the current screen.
pub(crate) fn std_screen() -> *mut WINDOW {
    // SAFETY: plain read of a pointer-sized global.
    unsafe { globals::stdscr }
}

/// The `curscr` of the current screen.
pub(crate) fn cur_screen() -> *mut WINDOW {
    // SAFETY: plain read of a pointer-sized global.
    unsafe { globals::curscr }
}

/// Terminal height.
pub(crate) fn lines() -> c_int {
    // SAFETY: plain read of an int global.
    unsafe { globals::LINES }
}

/// Terminal width.
pub(crate) fn cols() -> c_int {
    // SAFETY: plain read of an int global.
    unsafe { globals::COLS }
}

/// Number of colors, valid after `start_color`.
pub(crate) fn colors() -> c_int {
    // SAFETY: plain read of an int global.
    unsafe { globals::COLORS }
}

/// Number of color pairs, valid after `start_color`.
pub(crate) fn color_pairs() -> c_int {
    // SAFETY: plain read of an int global.
    unsafe { globals::COLOR_PAIRS }
}

/// Alternate-character-set entry for a VT100 line-drawing code.
pub(crate) fn acs(code: u8) -> ChType {
    // SAFETY: acs_map has 128 entries and is filled in by newterm.
    unsafe { globals::acs_map[usize::from(code & 0x7f)] }
}
