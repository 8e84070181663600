//! In-process stand-in for the native library, used by unit tests.
//!
//! Mirrors the signatures of `native` so wrapper code compiles unchanged.
//! Every call is recorded with its integer arguments (window handles are
//! recorded by id), handles are fabricated from a counter, and any function
//! can be made to fail by name. State is thread-local, so tests running in
//! parallel do not see each other; [`reset`] clears it.

#![allow(dead_code, clippy::missing_safety_doc)]

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};
use std::ptr;

use libc::{c_char, c_int, c_short, c_void};

use super::{SCREEN, WINDOW};
#[cfg(feature = "mouse")]
use super::MEVENT;
use crate::types::{AttrT, ChType, ERR, OK};
#[cfg(feature = "mouse")]
use crate::types::MmaskT;

const A_COLOR: AttrT = 0xff << 8;
const A_ALTCHARSET: AttrT = 1 << 22;

/// Window id of `stdscr`.
pub(crate) const STDSCR: usize = 1;
/// Window id of `curscr`.
pub(crate) const CURSCR: usize = 2;

/// One recorded native call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Call {
    pub name: &'static str,
    pub args: Vec<i64>,
}

#[derive(Clone, Copy, Debug, Default)]
struct Geometry {
    beg_y: c_int,
    beg_x: c_int,
    lines: c_int,
    cols: c_int,
    cur_y: c_int,
    cur_x: c_int,
}

struct State {
    calls: Vec<Call>,
    failing: HashSet<&'static str>,
    next_id: usize,
    live: BTreeSet<usize>,
    geometry: HashMap<usize, Geometry>,
    attrs: HashMap<usize, AttrT>,
    claimed: bool,
    ended: bool,
    lines: c_int,
    cols: c_int,
    colors: c_int,
    color_pairs: c_int,
    default_colors: bool,
    pairs: HashMap<c_short, (c_short, c_short)>,
    input: VecDeque<c_int>,
    text: Vec<u8>,
    cells: Vec<ChType>,
    #[cfg(feature = "mouse")]
    mouse: VecDeque<MEVENT>,
    #[cfg(feature = "mouse")]
    mask: MmaskT,
    #[cfg(feature = "mouse")]
    interval: c_int,
}

impl State {
    fn new() -> Self {
        let mut geometry = HashMap::new();
        let screen = Geometry {
            lines: 24,
            cols: 80,
            ..Geometry::default()
        };
        geometry.insert(STDSCR, screen);
        geometry.insert(CURSCR, screen);
        Self {
            calls: Vec::new(),
            failing: HashSet::new(),
            next_id: CURSCR + 1,
            live: BTreeSet::new(),
            geometry,
            attrs: HashMap::new(),
            claimed: false,
            ended: false,
            lines: 24,
            cols: 80,
            colors: 8,
            color_pairs: 64,
            default_colors: false,
            pairs: HashMap::new(),
            input: VecDeque::new(),
            text: Vec::new(),
            cells: Vec::new(),
            #[cfg(feature = "mouse")]
            mouse: VecDeque::new(),
            #[cfg(feature = "mouse")]
            mask: 0,
            #[cfg(feature = "mouse")]
            interval: 166,
        }
    }

    fn record(&mut self, name: &'static str, args: &[i64]) -> c_int {
        self.calls.push(Call {
            name,
            args: args.to_vec(),
        });
        if self.failing.contains(name) {
            ERR
        } else {
            OK
        }
    }

    fn create(&mut self, geometry: Geometry) -> *mut WINDOW {
        let id = self.next_id;
        self.next_id += 1;
        self.live.insert(id);
        self.geometry.insert(id, geometry);
        handle(id)
    }

    fn geometry(&self, win: *const WINDOW) -> Geometry {
        self.geometry.get(&id_of(win)).copied().unwrap_or_default()
    }
}

thread_local! {
    static STATE: RefCell<State> = RefCell::new(State::new());
}

fn with<R>(f: impl FnOnce(&mut State) -> R) -> R {
    STATE.with(|state| f(&mut state.borrow_mut()))
}

fn handle(id: usize) -> *mut WINDOW {
    (id << 4) as *mut WINDOW
}

/// Id of a fabricated handle.
pub(crate) fn id_of(win: *const WINDOW) -> usize {
    win as usize >> 4
}

fn w(win: *const WINDOW) -> i64 {
    id_of(win) as i64
}

fn op(name: &'static str, args: &[i64]) -> c_int {
    with(|s| s.record(name, args))
}

// ============================================================================
// Test controls
// ============================================================================

/// Forget everything, including the claimed screen.
pub(crate) fn reset() {
    with(|s| *s = State::new());
}

/// Make every later call of `name` fail.
pub(crate) fn fail(name: &'static str) {
    with(|s| {
        s.failing.insert(name);
    });
}

/// Stop failing `name`.
pub(crate) fn succeed(name: &'static str) {
    with(|s| {
        s.failing.remove(name);
    });
}

/// All calls recorded so far.
pub(crate) fn calls() -> Vec<Call> {
    with(|s| s.calls.clone())
}

/// Names of the recorded calls, in order.
pub(crate) fn call_names() -> Vec<&'static str> {
    with(|s| s.calls.iter().map(|c| c.name).collect())
}

/// Argument lists of every recorded call of `name`.
pub(crate) fn args_of(name: &str) -> Vec<Vec<i64>> {
    with(|s| {
        s.calls
            .iter()
            .filter(|c| c.name == name)
            .map(|c| c.args.clone())
            .collect()
    })
}

/// How many times `name` was called.
pub(crate) fn count(name: &str) -> usize {
    with(|s| s.calls.iter().filter(|c| c.name == name).count())
}

/// Drop the recorded calls, keep everything else.
pub(crate) fn clear_calls() {
    with(|s| s.calls.clear());
}

/// Ids of windows created and not yet deleted.
pub(crate) fn live_windows() -> Vec<usize> {
    with(|s| s.live.iter().copied().collect())
}

/// Queue keys for `wgetch`.
pub(crate) fn push_input(keys: &[c_int]) {
    with(|s| s.input.extend(keys.iter().copied()));
}

/// Text returned by `wgetnstr` and `winnstr`.
pub(crate) fn set_text(text: &str) {
    with(|s| s.text = text.as_bytes().to_vec());
}

/// Cells returned by `winch` and `winchnstr`.
pub(crate) fn set_cells(cells: &[ChType]) {
    with(|s| s.cells = cells.to_vec());
}

/// Number of color pairs the terminal reports.
pub(crate) fn set_color_pairs(n: c_int) {
    with(|s| s.color_pairs = n);
}

/// Queue an event for `getmouse`.
#[cfg(feature = "mouse")]
pub(crate) fn push_mouse(event: MEVENT) {
    with(|s| s.mouse.push_back(event));
}

// ============================================================================
// Screen
// ============================================================================

pub(crate) fn claim_screen() -> bool {
    with(|s| !std::mem::replace(&mut s.claimed, true))
}

pub(crate) fn open_terminal() -> *mut SCREEN {
    if op("newterm", &[]) == ERR {
        ptr::null_mut()
    } else {
        0x10 as *mut SCREEN
    }
}

pub(crate) fn std_screen() -> *mut WINDOW {
    handle(STDSCR)
}

pub(crate) fn cur_screen() -> *mut WINDOW {
    handle(CURSCR)
}

pub(crate) fn lines() -> c_int {
    with(|s| s.lines)
}

pub(crate) fn cols() -> c_int {
    with(|s| s.cols)
}

pub(crate) fn colors() -> c_int {
    with(|s| s.colors)
}

pub(crate) fn color_pairs() -> c_int {
    with(|s| s.color_pairs)
}

pub(crate) fn acs(code: u8) -> ChType {
    ChType::from(code & 0x7f) | A_ALTCHARSET
}

pub(crate) unsafe fn endwin() -> c_int {
    with(|s| {
        s.ended = true;
        s.record("endwin", &[])
    })
}

pub(crate) unsafe fn isendwin() -> bool {
    with(|s| {
        s.record("isendwin", &[]);
        s.ended
    })
}

pub(crate) unsafe fn delscreen(_sp: *mut SCREEN) {
    op("delscreen", &[]);
}

// ============================================================================
// Windows
// ============================================================================

pub(crate) unsafe fn newwin(
    nlines: c_int,
    ncols: c_int,
    begin_y: c_int,
    begin_x: c_int,
) -> *mut WINDOW {
    with(|s| {
        let args = [nlines, ncols, begin_y, begin_x].map(i64::from);
        if s.record("newwin", &args) == ERR {
            return ptr::null_mut();
        }
        s.create(Geometry {
            beg_y: begin_y,
            beg_x: begin_x,
            lines: nlines,
            cols: ncols,
            ..Geometry::default()
        })
    })
}

pub(crate) unsafe fn delwin(win: *mut WINDOW) -> c_int {
    with(|s| {
        let ret = s.record("delwin", &[w(win)]);
        if s.live.remove(&id_of(win)) {
            ret
        } else {
            ERR
        }
    })
}

pub(crate) unsafe fn derwin(
    orig: *mut WINDOW,
    nlines: c_int,
    ncols: c_int,
    begin_y: c_int,
    begin_x: c_int,
) -> *mut WINDOW {
    with(|s| {
        let args = [w(orig), nlines.into(), ncols.into(), begin_y.into(), begin_x.into()];
        if s.record("derwin", &args) == ERR {
            return ptr::null_mut();
        }
        let parent = s.geometry(orig);
        s.create(Geometry {
            beg_y: parent.beg_y + begin_y,
            beg_x: parent.beg_x + begin_x,
            lines: nlines,
            cols: ncols,
            ..Geometry::default()
        })
    })
}

pub(crate) unsafe fn dupwin(win: *mut WINDOW) -> *mut WINDOW {
    with(|s| {
        if s.record("dupwin", &[w(win)]) == ERR {
            return ptr::null_mut();
        }
        let geometry = s.geometry(win);
        s.create(geometry)
    })
}

pub(crate) unsafe fn mvwin(win: *mut WINDOW, y: c_int, x: c_int) -> c_int {
    with(|s| {
        let ret = s.record("mvwin", &[w(win), y.into(), x.into()]);
        if ret == OK {
            if let Some(g) = s.geometry.get_mut(&id_of(win)) {
                g.beg_y = y;
                g.beg_x = x;
            }
        }
        ret
    })
}

pub(crate) unsafe fn mvderwin(win: *mut WINDOW, par_y: c_int, par_x: c_int) -> c_int {
    op("mvderwin", &[w(win), par_y.into(), par_x.into()])
}

pub(crate) unsafe fn wsyncup(win: *mut WINDOW) {
    op("wsyncup", &[w(win)]);
}

// ============================================================================
// Options
// ============================================================================

pub(crate) unsafe fn cbreak() -> c_int {
    op("cbreak", &[])
}

pub(crate) unsafe fn nocbreak() -> c_int {
    op("nocbreak", &[])
}

pub(crate) unsafe fn echo() -> c_int {
    op("echo", &[])
}

pub(crate) unsafe fn noecho() -> c_int {
    op("noecho", &[])
}

pub(crate) unsafe fn halfdelay(tenths: c_int) -> c_int {
    op("halfdelay", &[tenths.into()])
}

pub(crate) unsafe fn intrflush(win: *mut WINDOW, bf: bool) -> c_int {
    op("intrflush", &[w(win), bf.into()])
}

pub(crate) unsafe fn keypad(win: *mut WINDOW, bf: bool) -> c_int {
    op("keypad", &[w(win), bf.into()])
}

pub(crate) unsafe fn meta(win: *mut WINDOW, bf: bool) -> c_int {
    op("meta", &[w(win), bf.into()])
}

pub(crate) unsafe fn nodelay(win: *mut WINDOW, bf: bool) -> c_int {
    op("nodelay", &[w(win), bf.into()])
}

pub(crate) unsafe fn notimeout(win: *mut WINDOW, bf: bool) -> c_int {
    op("notimeout", &[w(win), bf.into()])
}

pub(crate) unsafe fn raw() -> c_int {
    op("raw", &[])
}

pub(crate) unsafe fn noraw() -> c_int {
    op("noraw", &[])
}

pub(crate) unsafe fn qiflush() {
    op("qiflush", &[]);
}

pub(crate) unsafe fn noqiflush() {
    op("noqiflush", &[]);
}

pub(crate) unsafe fn typeahead(fd: c_int) -> c_int {
    op("typeahead", &[fd.into()])
}

pub(crate) unsafe fn wtimeout(win: *mut WINDOW, delay: c_int) {
    op("wtimeout", &[w(win), delay.into()]);
}

pub(crate) unsafe fn clearok(win: *mut WINDOW, bf: bool) -> c_int {
    op("clearok", &[w(win), bf.into()])
}

pub(crate) unsafe fn idlok(win: *mut WINDOW, bf: bool) -> c_int {
    op("idlok", &[w(win), bf.into()])
}

pub(crate) unsafe fn idcok(win: *mut WINDOW, bf: bool) {
    op("idcok", &[w(win), bf.into()]);
}

pub(crate) unsafe fn immedok(win: *mut WINDOW, bf: bool) {
    op("immedok", &[w(win), bf.into()]);
}

pub(crate) unsafe fn leaveok(win: *mut WINDOW, bf: bool) -> c_int {
    op("leaveok", &[w(win), bf.into()])
}

pub(crate) unsafe fn scrollok(win: *mut WINDOW, bf: bool) -> c_int {
    op("scrollok", &[w(win), bf.into()])
}

pub(crate) unsafe fn wsetscrreg(win: *mut WINDOW, top: c_int, bot: c_int) -> c_int {
    op("wsetscrreg", &[w(win), top.into(), bot.into()])
}

pub(crate) unsafe fn nl() -> c_int {
    op("nl", &[])
}

pub(crate) unsafe fn nonl() -> c_int {
    op("nonl", &[])
}

pub(crate) unsafe fn curs_set(visibility: c_int) -> c_int {
    if op("curs_set", &[visibility.into()]) == ERR {
        ERR
    } else {
        1
    }
}

pub(crate) unsafe fn beep() -> c_int {
    op("beep", &[])
}

pub(crate) unsafe fn flash() -> c_int {
    op("flash", &[])
}

// ============================================================================
// Input
// ============================================================================

pub(crate) unsafe fn ungetch(ch: c_int) -> c_int {
    op("ungetch", &[ch.into()])
}

pub(crate) unsafe fn has_key(ch: c_int) -> c_int {
    if op("has_key", &[ch.into()]) == ERR {
        0
    } else {
        1
    }
}

pub(crate) unsafe fn keyname(ch: c_int) -> *const c_char {
    op("keyname", &[ch.into()]);
    match ch {
        0o402 => c"KEY_DOWN".as_ptr(),
        0o403 => c"KEY_UP".as_ptr(),
        0x41 => c"A".as_ptr(),
        _ => ptr::null(),
    }
}

pub(crate) unsafe fn wgetch(win: *mut WINDOW) -> c_int {
    with(|s| {
        if s.record("wgetch", &[w(win)]) == ERR {
            return ERR;
        }
        s.input.pop_front().unwrap_or(ERR)
    })
}

unsafe fn copy_text(text: &[u8], s: *mut c_char, n: c_int) -> usize {
    let len = text.len().min(usize::try_from(n).unwrap_or(0));
    ptr::copy_nonoverlapping(text.as_ptr().cast::<c_char>(), s, len);
    *s.add(len) = 0;
    len
}

pub(crate) unsafe fn wgetnstr(win: *mut WINDOW, s: *mut c_char, n: c_int) -> c_int {
    let (ret, text) = with(|st| (st.record("wgetnstr", &[w(win), n.into()]), st.text.clone()));
    if ret == OK {
        copy_text(&text, s, n);
    }
    ret
}

pub(crate) unsafe fn winch(win: *mut WINDOW) -> ChType {
    with(|s| {
        s.record("winch", &[w(win)]);
        s.cells.first().copied().unwrap_or(ChType::from(b' '))
    })
}

pub(crate) unsafe fn winnstr(win: *mut WINDOW, s: *mut c_char, n: c_int) -> c_int {
    let (ret, text) = with(|st| (st.record("winnstr", &[w(win), n.into()]), st.text.clone()));
    if ret == ERR {
        return ERR;
    }
    copy_text(&text, s, n) as c_int
}

pub(crate) unsafe fn winchnstr(win: *mut WINDOW, chstr: *mut ChType, n: c_int) -> c_int {
    let (ret, cells) = with(|s| (s.record("winchnstr", &[w(win), n.into()]), s.cells.clone()));
    if ret == ERR {
        return ERR;
    }
    let len = cells.len().min(usize::try_from(n).unwrap_or(0));
    ptr::copy_nonoverlapping(cells.as_ptr(), chstr, len);
    *chstr.add(len) = 0;
    len as c_int
}

// ============================================================================
// Output
// ============================================================================

pub(crate) unsafe fn waddch(win: *mut WINDOW, ch: ChType) -> c_int {
    op("waddch", &[w(win), ch.into()])
}

pub(crate) unsafe fn wechochar(win: *mut WINDOW, ch: ChType) -> c_int {
    op("wechochar", &[w(win), ch.into()])
}

pub(crate) unsafe fn waddnstr(win: *mut WINDOW, s: *const c_char, n: c_int) -> c_int {
    // The recorded args carry the byte count; the text itself goes to `last_text`.
    let text = std::ffi::CStr::from_ptr(s).to_bytes().to_vec();
    with(|st| {
        st.text = text;
        st.record("waddnstr", &[w(win), n.into()])
    })
}

pub(crate) unsafe fn waddchnstr(win: *mut WINDOW, chstr: *const ChType, n: c_int) -> c_int {
    let cells = std::slice::from_raw_parts(chstr, usize::try_from(n).unwrap_or(0)).to_vec();
    with(|s| {
        s.cells = cells;
        s.record("waddchnstr", &[w(win), n.into()])
    })
}

pub(crate) unsafe fn winsch(win: *mut WINDOW, ch: ChType) -> c_int {
    op("winsch", &[w(win), ch.into()])
}

pub(crate) unsafe fn winsnstr(win: *mut WINDOW, s: *const c_char, n: c_int) -> c_int {
    let text = std::ffi::CStr::from_ptr(s).to_bytes().to_vec();
    with(|st| {
        st.text = text;
        st.record("winsnstr", &[w(win), n.into()])
    })
}

/// Text last handed to `waddnstr`/`winsnstr`, or set with [`set_text`].
pub(crate) fn last_text() -> String {
    with(|s| String::from_utf8_lossy(&s.text).into_owned())
}

/// Cells last handed to `waddchnstr`, or set with [`set_cells`].
pub(crate) fn last_cells() -> Vec<ChType> {
    with(|s| s.cells.clone())
}

pub(crate) unsafe fn wdelch(win: *mut WINDOW) -> c_int {
    op("wdelch", &[w(win)])
}

pub(crate) unsafe fn winsdelln(win: *mut WINDOW, n: c_int) -> c_int {
    op("winsdelln", &[w(win), n.into()])
}

#[allow(clippy::too_many_arguments)]
pub(crate) unsafe fn wborder(
    win: *mut WINDOW,
    ls: ChType,
    rs: ChType,
    ts: ChType,
    bs: ChType,
    tl: ChType,
    tr: ChType,
    bl: ChType,
    br: ChType,
) -> c_int {
    let sides = [ls, rs, ts, bs, tl, tr, bl, br].map(i64::from);
    let mut args = vec![w(win)];
    args.extend_from_slice(&sides);
    op("wborder", &args)
}

pub(crate) unsafe fn box_(win: *mut WINDOW, verch: ChType, horch: ChType) -> c_int {
    op("box", &[w(win), verch.into(), horch.into()])
}

pub(crate) unsafe fn whline(win: *mut WINDOW, ch: ChType, n: c_int) -> c_int {
    op("whline", &[w(win), ch.into(), n.into()])
}

pub(crate) unsafe fn wvline(win: *mut WINDOW, ch: ChType, n: c_int) -> c_int {
    op("wvline", &[w(win), ch.into(), n.into()])
}

pub(crate) unsafe fn wbkgdset(win: *mut WINDOW, ch: ChType) {
    op("wbkgdset", &[w(win), ch.into()]);
}

pub(crate) unsafe fn wbkgd(win: *mut WINDOW, ch: ChType) -> c_int {
    op("wbkgd", &[w(win), ch.into()])
}

pub(crate) unsafe fn getbkgd(win: *mut WINDOW) -> ChType {
    op("getbkgd", &[w(win)]);
    ChType::from(b' ')
}

// ============================================================================
// Attributes
// ============================================================================

fn update_attrs(name: &'static str, win: *mut WINDOW, attrs: c_int, f: fn(AttrT, AttrT) -> AttrT) -> c_int {
    with(|s| {
        let ret = s.record(name, &[w(win), attrs.into()]);
        if ret == OK {
            let current = s.attrs.entry(id_of(win)).or_insert(0);
            *current = f(*current, attrs as AttrT);
        }
        ret
    })
}

pub(crate) unsafe fn wattron(win: *mut WINDOW, attrs: c_int) -> c_int {
    update_attrs("wattron", win, attrs, |cur, a| cur | a)
}

pub(crate) unsafe fn wattroff(win: *mut WINDOW, attrs: c_int) -> c_int {
    update_attrs("wattroff", win, attrs, |cur, a| cur & !a)
}

pub(crate) unsafe fn wattrset(win: *mut WINDOW, attrs: c_int) -> c_int {
    update_attrs("wattrset", win, attrs, |_, a| a)
}

pub(crate) unsafe fn wattr_get(
    win: *mut WINDOW,
    attrs: *mut AttrT,
    pair: *mut c_short,
    _opts: *mut c_void,
) -> c_int {
    let (ret, current) = with(|s| {
        let ret = s.record("wattr_get", &[w(win)]);
        (ret, s.attrs.get(&id_of(win)).copied().unwrap_or(0))
    });
    if ret == OK {
        *attrs = current;
        *pair = ((current & A_COLOR) >> 8) as c_short;
    }
    ret
}

pub(crate) unsafe fn wchgat(
    win: *mut WINDOW,
    n: c_int,
    attr: AttrT,
    pair: c_short,
    _opts: *const c_void,
) -> c_int {
    op("wchgat", &[w(win), n.into(), attr.into(), pair.into()])
}

// ============================================================================
// Cursor, clearing, refresh
// ============================================================================

pub(crate) unsafe fn wmove(win: *mut WINDOW, y: c_int, x: c_int) -> c_int {
    with(|s| {
        let ret = s.record("wmove", &[w(win), y.into(), x.into()]);
        if ret == OK {
            if let Some(g) = s.geometry.get_mut(&id_of(win)) {
                g.cur_y = y;
                g.cur_x = x;
            }
        }
        ret
    })
}

pub(crate) unsafe fn werase(win: *mut WINDOW) -> c_int {
    op("werase", &[w(win)])
}

pub(crate) unsafe fn wclear(win: *mut WINDOW) -> c_int {
    op("wclear", &[w(win)])
}

pub(crate) unsafe fn wclrtobot(win: *mut WINDOW) -> c_int {
    op("wclrtobot", &[w(win)])
}

pub(crate) unsafe fn wclrtoeol(win: *mut WINDOW) -> c_int {
    op("wclrtoeol", &[w(win)])
}

pub(crate) unsafe fn wrefresh(win: *mut WINDOW) -> c_int {
    with(|s| {
        s.ended = false;
        s.record("wrefresh", &[w(win)])
    })
}

pub(crate) unsafe fn wnoutrefresh(win: *mut WINDOW) -> c_int {
    op("wnoutrefresh", &[w(win)])
}

pub(crate) unsafe fn redrawwin(win: *mut WINDOW) -> c_int {
    op("redrawwin", &[w(win)])
}

pub(crate) unsafe fn wredrawln(win: *mut WINDOW, beg_line: c_int, num_lines: c_int) -> c_int {
    op("wredrawln", &[w(win), beg_line.into(), num_lines.into()])
}

pub(crate) unsafe fn wscrl(win: *mut WINDOW, n: c_int) -> c_int {
    op("wscrl", &[w(win), n.into()])
}

pub(crate) unsafe fn doupdate() -> c_int {
    with(|s| {
        s.ended = false;
        s.record("doupdate", &[])
    })
}

pub(crate) unsafe fn wtouchln(win: *mut WINDOW, y: c_int, n: c_int, changed: c_int) -> c_int {
    op("wtouchln", &[w(win), y.into(), n.into(), changed.into()])
}

// ============================================================================
// Geometry
// ============================================================================

pub(crate) unsafe fn getcury(win: *const WINDOW) -> c_int {
    with(|s| s.geometry(win).cur_y)
}

pub(crate) unsafe fn getcurx(win: *const WINDOW) -> c_int {
    with(|s| s.geometry(win).cur_x)
}

pub(crate) unsafe fn getbegy(win: *const WINDOW) -> c_int {
    with(|s| s.geometry(win).beg_y)
}

pub(crate) unsafe fn getbegx(win: *const WINDOW) -> c_int {
    with(|s| s.geometry(win).beg_x)
}

pub(crate) unsafe fn getmaxy(win: *const WINDOW) -> c_int {
    with(|s| s.geometry(win).lines)
}

pub(crate) unsafe fn getmaxx(win: *const WINDOW) -> c_int {
    with(|s| s.geometry(win).cols)
}

pub(crate) unsafe fn wenclose(win: *const WINDOW, y: c_int, x: c_int) -> bool {
    with(|s| {
        s.record("wenclose", &[w(win), y.into(), x.into()]);
        let g = s.geometry(win);
        (g.beg_y..g.beg_y + g.lines).contains(&y) && (g.beg_x..g.beg_x + g.cols).contains(&x)
    })
}

pub(crate) unsafe fn wmouse_trafo(
    win: *const WINDOW,
    y: *mut c_int,
    x: *mut c_int,
    to_screen: bool,
) -> bool {
    let g = with(|s| {
        s.record("wmouse_trafo", &[w(win), (*y).into(), (*x).into(), to_screen.into()]);
        s.geometry(win)
    });
    let (mut ty, mut tx) = (*y, *x);
    if to_screen {
        ty += g.beg_y;
        tx += g.beg_x;
        *y = ty;
        *x = tx;
        return true;
    }
    ty -= g.beg_y;
    tx -= g.beg_x;
    if !(0..g.lines).contains(&ty) || !(0..g.cols).contains(&tx) {
        return false;
    }
    *y = ty;
    *x = tx;
    true
}

// ============================================================================
// Colors
// ============================================================================

pub(crate) unsafe fn start_color() -> c_int {
    op("start_color", &[])
}

pub(crate) unsafe fn has_colors() -> bool {
    with(|s| s.record("has_colors", &[]) == OK)
}

pub(crate) unsafe fn use_default_colors() -> c_int {
    with(|s| {
        let ret = s.record("use_default_colors", &[]);
        if ret == OK {
            s.default_colors = true;
        }
        ret
    })
}

pub(crate) unsafe fn init_pair(pair: c_short, f: c_short, b: c_short) -> c_int {
    with(|s| {
        let ret = s.record("init_pair", &[pair.into(), f.into(), b.into()]);
        if ret == ERR || pair < 1 || c_int::from(pair) >= s.color_pairs {
            return ERR;
        }
        s.pairs.insert(pair, (f, b));
        OK
    })
}

pub(crate) unsafe fn pair_content(pair: c_short, f: *mut c_short, b: *mut c_short) -> c_int {
    let (ret, content) = with(|s| {
        let ret = s.record("pair_content", &[pair.into()]);
        let fallback = if s.default_colors { (-1, -1) } else { (7, 0) };
        let content = if pair == 0 {
            Some(fallback)
        } else {
            s.pairs.get(&pair).copied()
        };
        (ret, content)
    });
    match content {
        Some((fg, bg)) if ret == OK => {
            *f = fg;
            *b = bg;
            OK
        }
        _ => ERR,
    }
}

pub(crate) unsafe fn init_color(color: c_short, r: c_short, g: c_short, b: c_short) -> c_int {
    op("init_color", &[color.into(), r.into(), g.into(), b.into()])
}

// ============================================================================
// Mouse
// ============================================================================

#[cfg(feature = "mouse")]
pub(crate) unsafe fn mousemask(newmask: MmaskT, oldmask: *mut MmaskT) -> MmaskT {
    let (ret, old) = with(|s| {
        let ret = s.record("mousemask", &[newmask.into()]);
        let old = std::mem::replace(&mut s.mask, newmask);
        (ret, old)
    });
    if !oldmask.is_null() {
        *oldmask = old;
    }
    if ret == ERR {
        0
    } else {
        newmask
    }
}

#[cfg(feature = "mouse")]
pub(crate) unsafe fn getmouse(event: *mut MEVENT) -> c_int {
    let next = with(|s| {
        if s.record("getmouse", &[]) == ERR {
            None
        } else {
            s.mouse.pop_front()
        }
    });
    match next {
        Some(ev) => {
            *event = ev;
            OK
        }
        None => ERR,
    }
}

#[cfg(feature = "mouse")]
pub(crate) unsafe fn ungetmouse(event: *mut MEVENT) -> c_int {
    let ev = *event;
    with(|s| {
        let ret = s.record("ungetmouse", &[ev.y.into(), ev.x.into()]);
        if ret == OK {
            s.mouse.push_front(ev);
        }
        ret
    })
}

#[cfg(feature = "mouse")]
pub(crate) unsafe fn mouseinterval(erval: c_int) -> c_int {
    with(|s| {
        s.record("mouseinterval", &[erval.into()]);
        if erval < 0 {
            s.interval
        } else {
            std::mem::replace(&mut s.interval, erval)
        }
    })
}

#[cfg(feature = "mouse")]
pub(crate) unsafe fn has_mouse() -> bool {
    with(|s| s.record("has_mouse", &[]) == OK)
}
