//! The terminal session.

use std::cell::{Cell, RefCell};
use std::ops::Deref;
use std::ptr::NonNull;

use crate::attr::{color_pair, pair_number};
use crate::color::{Color, ColorRegistry};
use crate::error::{check, Error, IntoResult, Result};
use crate::sys::{self, SCREEN};
use crate::types::{AttrT, ColorT, CursorVisibility, PairT};
use crate::window::Window;

/// The curses session of this process.
///
/// Only one can exist per process: the native library keeps its screen in
/// global state. Dropping it restores the terminal. Windows borrow the
/// session, so they are always deleted before it ends.
///
/// `Ncurses` dereferences to the standard screen, so every [`Window`]
/// method works on `stdscr` directly.
///
/// ```rust,no_run
/// use ncraii::{colors, Color, Ncurses};
///
/// fn main() -> ncraii::Result<()> {
///     let nc = Ncurses::init()?;
///     nc.cbreak(true)?;
///     nc.echo(false)?;
///
///     let red = nc.color_to_attr(Color::new(colors::RED, colors::DEFAULT))?;
///     nc.attron(red)?;
///     nc.addstr("hello")?;
///     nc.refresh()?;
///     nc.getch()?;
///     Ok(())
/// }
/// ```
pub struct Ncurses {
    stdscr: Window<'static>,
    screen: NonNull<SCREEN>,
    registry: RefCell<ColorRegistry>,
    colors_started: Cell<bool>,
    default_colors: Cell<bool>,
}

impl Ncurses {
    /// Open the terminal on stdin and stdout.
    ///
    /// With the `wide` feature the locale is first set from the environment.
    ///
    /// # Errors
    ///
    /// [`Error::AlreadyInitialized`] if the process already opened the
    /// terminal, [`Error::NcursesInit`] if the library could not.
    pub fn init() -> Result<Self> {
        if !sys::claim_screen() {
            return Err(Error::AlreadyInitialized);
        }

        let screen = NonNull::new(sys::open_terminal()).ok_or_else(|| {
            log::warn!("newterm() failed, TERM is probably unset or unknown");
            Error::NcursesInit
        })?;

        log::debug!(
            "terminal opened, {} lines x {} columns",
            sys::lines(),
            sys::cols()
        );

        Ok(Self {
            stdscr: Window::borrowed(sys::std_screen()),
            screen,
            registry: RefCell::new(ColorRegistry::new()),
            colors_started: Cell::new(false),
            default_colors: Cell::new(false),
        })
    }

    /// Leave curses mode temporarily, e.g. to run a shell.
    pub fn suspend(&self) -> Result<()> {
        log::debug!("suspending curses mode");
        // SAFETY: the session is open.
        check(unsafe { sys::endwin() }, "endwin")
    }

    /// Return to curses mode after [`Ncurses::suspend`].
    pub fn resume(&self) -> Result<()> {
        log::debug!("resuming curses mode");
        self.doupdate()
    }

    /// Whether curses mode is currently suspended.
    pub fn is_suspended(&self) -> bool {
        // SAFETY: the session is open.
        unsafe { sys::isendwin() }
    }

    /// Create a window, same as [`Window::new`].
    pub fn new_window(&self, lines: i32, cols: i32, y: i32, x: i32) -> Result<Window<'_>> {
        Window::new(self, lines, cols, y, x)
    }

    // ========================================================================
    // Input options
    // ========================================================================

    /// Line buffering off (`cbreak`) or on (`nocbreak`).
    pub fn cbreak(&self, on: bool) -> Result<()> {
        // SAFETY: the session is open.
        unsafe {
            if on {
                check(sys::cbreak(), "cbreak")
            } else {
                check(sys::nocbreak(), "nocbreak")
            }
        }
    }

    /// Echo typed characters.
    pub fn echo(&self, on: bool) -> Result<()> {
        // SAFETY: the session is open.
        unsafe {
            if on {
                check(sys::echo(), "echo")
            } else {
                check(sys::noecho(), "noecho")
            }
        }
    }

    /// Cbreak mode where `getch` gives up after `tenths` tenths of a second.
    pub fn halfdelay(&self, tenths: i32) -> Result<()> {
        // SAFETY: the session is open.
        check(unsafe { sys::halfdelay(tenths) }, "halfdelay")
    }

    /// Flush the output queue when an interrupt key is pressed.
    pub fn intrflush(&self, on: bool) -> Result<()> {
        let win = self.stdscr.as_raw();
        // SAFETY: stdscr lives as long as the session.
        check(unsafe { sys::intrflush(win, on) }, "intrflush")
    }

    /// Return 8-bit input.
    pub fn meta(&self, on: bool) -> Result<()> {
        let win = self.stdscr.as_raw();
        // SAFETY: stdscr lives as long as the session.
        check(unsafe { sys::meta(win, on) }, "meta")
    }

    /// Raw mode: interrupt and flow control keys are passed through.
    pub fn raw(&self, on: bool) -> Result<()> {
        // SAFETY: the session is open.
        unsafe {
            if on {
                check(sys::raw(), "raw")
            } else {
                check(sys::noraw(), "noraw")
            }
        }
    }

    /// Flush queues when an interrupt, quit or suspend key is pressed.
    pub fn qiflush(&self, on: bool) {
        // SAFETY: the session is open.
        unsafe {
            if on {
                sys::qiflush();
            } else {
                sys::noqiflush();
            }
        }
    }

    /// Descriptor checked for typeahead; -1 disables the check.
    pub fn typeahead(&self, fd: i32) -> Result<()> {
        // SAFETY: the session is open.
        check(unsafe { sys::typeahead(fd) }, "typeahead")
    }

    // ========================================================================
    // Output options
    // ========================================================================

    /// Translate newline into return and line-feed.
    pub fn nl(&self, on: bool) -> Result<()> {
        // SAFETY: the session is open.
        unsafe {
            if on {
                check(sys::nl(), "nl")
            } else {
                check(sys::nonl(), "nonl")
            }
        }
    }

    /// Clear the physical screen on the next refresh of any window.
    ///
    /// Works on `curscr`; [`Window::clearok`] sets the flag of one window.
    pub fn clearok_curscr(&self, on: bool) -> Result<()> {
        // SAFETY: curscr lives as long as the session.
        check(unsafe { sys::clearok(sys::cur_screen(), on) }, "clearok")
    }

    /// Change the cursor shape and return the previous one.
    pub fn curs_set(&self, visibility: CursorVisibility) -> Result<CursorVisibility> {
        // SAFETY: the session is open.
        let previous = unsafe { sys::curs_set(visibility.to_raw()) }.into_result("curs_set")?;
        CursorVisibility::from_raw(previous).ok_or(Error::Call("curs_set"))
    }

    // ========================================================================
    // Input
    // ========================================================================

    /// Push a key back for the next `getch`.
    pub fn ungetch(&self, ch: i32) -> Result<()> {
        // SAFETY: the session is open.
        check(unsafe { sys::ungetch(ch) }, "ungetch")
    }

    /// Whether the terminal can send key code `ch`.
    pub fn has_key(&self, ch: i32) -> bool {
        // SAFETY: the session is open.
        unsafe { sys::has_key(ch) != 0 }
    }

    // ========================================================================
    // Misc
    // ========================================================================

    /// Send every pending [`Window::outrefresh`] to the terminal.
    pub fn doupdate(&self) -> Result<()> {
        // SAFETY: the session is open.
        check(unsafe { sys::doupdate() }, "doupdate")
    }

    /// Screen height (`LINES`).
    pub fn line_count(&self) -> i32 {
        sys::lines()
    }

    /// Screen width (`COLS`).
    pub fn column_count(&self) -> i32 {
        sys::cols()
    }

    /// Sound the bell.
    pub fn beep(&self) -> Result<()> {
        // SAFETY: the session is open.
        check(unsafe { sys::beep() }, "beep")
    }

    /// Flash the screen.
    pub fn flash(&self) -> Result<()> {
        // SAFETY: the session is open.
        check(unsafe { sys::flash() }, "flash")
    }

    // ========================================================================
    // Colors
    // ========================================================================

    /// Start color mode. Only the first call reaches the library.
    pub fn start_color(&self) -> Result<()> {
        if self.colors_started.get() {
            return Ok(());
        }
        // SAFETY: the session is open.
        if unsafe { sys::start_color() } == crate::types::ERR {
            log::warn!("start_color() failed");
            return Err(Error::ColorInit);
        }
        log::debug!(
            "color mode started, {} colors, {} pairs",
            sys::colors(),
            sys::color_pairs()
        );
        self.colors_started.set(true);
        Ok(())
    }

    /// Whether the terminal supports colors.
    pub fn has_colors(&self) -> bool {
        // SAFETY: the session is open.
        unsafe { sys::has_colors() }
    }

    /// Number of colors (`COLORS`), known after color mode started.
    pub fn color_count(&self) -> i32 {
        sys::colors()
    }

    /// Number of color pairs (`COLOR_PAIRS`), known after color mode started.
    pub fn color_pair_count(&self) -> i32 {
        sys::color_pairs()
    }

    /// Allow [`colors::DEFAULT`](crate::colors::DEFAULT) in colors.
    ///
    /// Starts color mode first. Called automatically by
    /// [`Ncurses::color_to_pair_number`] when needed.
    pub fn use_default_colors(&self) -> Result<()> {
        if self.default_colors.get() {
            return Ok(());
        }
        self.start_color()?;
        // SAFETY: the session is open.
        check(unsafe { sys::use_default_colors() }, "use_default_colors")?;
        self.default_colors.set(true);
        Ok(())
    }

    /// Pair number of `color`, set up on first use.
    ///
    /// # Errors
    ///
    /// [`Error::ColorInit`] if color mode can't start,
    /// [`Error::TooManyColors`] once every pair is taken.
    pub fn color_to_pair_number(&self, color: Color) -> Result<PairT> {
        if let Some(pair) = self.registry.borrow().find(color) {
            return Ok(pair);
        }

        self.start_color()?;
        if color.uses_default() {
            self.use_default_colors()?;
        }

        self.registry
            .borrow_mut()
            .register(color, sys::color_pairs(), |pair, c| {
                // SAFETY: color mode is started.
                check(
                    unsafe { sys::init_pair(pair, c.foreground, c.background) },
                    "init_pair",
                )
            })
            .inspect_err(|_| log::warn!("no color pair left for {}", color))
    }

    /// Attribute bits selecting `color`.
    pub fn color_to_attr(&self, color: Color) -> Result<AttrT> {
        self.color_to_pair_number(color).map(color_pair)
    }

    /// Color of a pair number.
    ///
    /// Pair 0 is the terminal's own pair and is asked from the library.
    pub fn pair_number_to_color(&self, pair: PairT) -> Result<Color> {
        if pair == 0 {
            let (mut fg, mut bg): (ColorT, ColorT) = (0, 0);
            // SAFETY: both out pointers are valid for the call.
            return match unsafe { sys::pair_content(0, &mut fg, &mut bg) } {
                crate::types::ERR => Err(Error::NoSuchPair(0)),
                _ => Ok(Color::new(fg, bg)),
            };
        }
        self.registry
            .borrow()
            .color(pair)
            .ok_or(Error::NoSuchPair(pair))
    }

    /// Color selected by attribute bits.
    pub fn attr_to_color(&self, attr: AttrT) -> Result<Color> {
        self.pair_number_to_color(pair_number(attr))
            .map_err(|_| Error::NoSuchAttr(attr))
    }

    /// Redefine color `color` with red, green and blue in 0..=1000.
    pub fn init_color(&self, color: ColorT, r: i16, g: i16, b: i16) -> Result<()> {
        self.start_color()?;
        // SAFETY: color mode is started.
        check(unsafe { sys::init_color(color, r, g, b) }, "init_color")
    }
}

impl Deref for Ncurses {
    type Target = Window<'static>;

    fn deref(&self) -> &Self::Target {
        &self.stdscr
    }
}

impl Drop for Ncurses {
    fn drop(&mut self) {
        log::debug!("closing terminal");
        // SAFETY: every window borrowed the session and is gone; the screen
        // is not used after this.
        unsafe {
            sys::endwin();
            sys::delscreen(self.screen.as_ptr());
        }
    }
}
