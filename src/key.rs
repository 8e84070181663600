//! Key codes returned by [`Window::getch`](crate::Window::getch).
//!
//! Ordinary characters come back as their byte value. Special keys are
//! reported with the codes below once keypad mode is enabled on the window.

use std::ffi::CStr;

use crate::sys;

/// Minimum curses key.
pub const MIN: i32 = 0o401;
/// Break key (unreliable).
pub const BREAK: i32 = 0o401;
/// Soft (partial) reset (unreliable).
pub const SRESET: i32 = 0o530;
/// Reset or hard reset (unreliable).
pub const RESET: i32 = 0o531;
/// Down-arrow key.
pub const DOWN: i32 = 0o402;
/// Up-arrow key.
pub const UP: i32 = 0o403;
/// Left-arrow key.
pub const LEFT: i32 = 0o404;
/// Right-arrow key.
pub const RIGHT: i32 = 0o405;
/// Home key.
pub const HOME: i32 = 0o406;
/// Backspace key.
pub const BACKSPACE: i32 = 0o407;
/// Function key F0.
pub const F0: i32 = 0o410;
/// Delete-line key.
pub const DL: i32 = 0o510;
/// Insert-line key.
pub const IL: i32 = 0o511;
/// Delete-character key.
pub const DC: i32 = 0o512;
/// Insert-character key.
pub const IC: i32 = 0o513;
/// Sent by rmir or smir in insert mode.
pub const EIC: i32 = 0o514;
/// Clear-screen or erase key.
pub const CLEAR: i32 = 0o515;
/// Clear-to-end-of-screen key.
pub const EOS: i32 = 0o516;
/// Clear-to-end-of-line key.
pub const EOL: i32 = 0o517;
/// Scroll-forward key.
pub const SF: i32 = 0o520;
/// Scroll-backward key.
pub const SR: i32 = 0o521;
/// Next-page key.
pub const NPAGE: i32 = 0o522;
/// Previous-page key.
pub const PPAGE: i32 = 0o523;
/// Set-tab key.
pub const STAB: i32 = 0o524;
/// Clear-tab key.
pub const CTAB: i32 = 0o525;
/// Clear-all-tabs key.
pub const CATAB: i32 = 0o526;
/// Enter/send key.
pub const ENTER: i32 = 0o527;
/// Print key.
pub const PRINT: i32 = 0o532;
/// Lower-left key (home down).
pub const LL: i32 = 0o533;
/// Upper left of keypad.
pub const A1: i32 = 0o534;
/// Upper right of keypad.
pub const A3: i32 = 0o535;
/// Center of keypad.
pub const B2: i32 = 0o536;
/// Lower left of keypad.
pub const C1: i32 = 0o537;
/// Lower right of keypad.
pub const C3: i32 = 0o540;
/// Back-tab key.
pub const BTAB: i32 = 0o541;
/// Begin key.
pub const BEG: i32 = 0o542;
/// Cancel key.
pub const CANCEL: i32 = 0o543;
/// Close key.
pub const CLOSE: i32 = 0o544;
/// Command key.
pub const COMMAND: i32 = 0o545;
/// Copy key.
pub const COPY: i32 = 0o546;
/// Create key.
pub const CREATE: i32 = 0o547;
/// End key.
pub const END: i32 = 0o550;
/// Exit key.
pub const EXIT: i32 = 0o551;
/// Find key.
pub const FIND: i32 = 0o552;
/// Help key.
pub const HELP: i32 = 0o553;
/// Mark key.
pub const MARK: i32 = 0o554;
/// Message key.
pub const MESSAGE: i32 = 0o555;
/// Move key.
pub const MOVE: i32 = 0o556;
/// Next key.
pub const NEXT: i32 = 0o557;
/// Open key.
pub const OPEN: i32 = 0o560;
/// Options key.
pub const OPTIONS: i32 = 0o561;
/// Previous key.
pub const PREVIOUS: i32 = 0o562;
/// Redo key.
pub const REDO: i32 = 0o563;
/// Reference key.
pub const REFERENCE: i32 = 0o564;
/// Refresh key.
pub const REFRESH: i32 = 0o565;
/// Replace key.
pub const REPLACE: i32 = 0o566;
/// Restart key.
pub const RESTART: i32 = 0o567;
/// Resume key.
pub const RESUME: i32 = 0o570;
/// Save key.
pub const SAVE: i32 = 0o571;
/// Shifted begin key.
pub const SBEG: i32 = 0o572;
/// Shifted cancel key.
pub const SCANCEL: i32 = 0o573;
/// Shifted command key.
pub const SCOMMAND: i32 = 0o574;
/// Shifted copy key.
pub const SCOPY: i32 = 0o575;
/// Shifted create key.
pub const SCREATE: i32 = 0o576;
/// Shifted delete-character key.
pub const SDC: i32 = 0o577;
/// Shifted delete-line key.
pub const SDL: i32 = 0o600;
/// Select key.
pub const SELECT: i32 = 0o601;
/// Shifted end key.
pub const SEND: i32 = 0o602;
/// Shifted clear-to-end-of-line key.
pub const SEOL: i32 = 0o603;
/// Shifted exit key.
pub const SEXIT: i32 = 0o604;
/// Shifted find key.
pub const SFIND: i32 = 0o605;
/// Shifted help key.
pub const SHELP: i32 = 0o606;
/// Shifted home key.
pub const SHOME: i32 = 0o607;
/// Shifted insert-character key.
pub const SIC: i32 = 0o610;
/// Shifted left-arrow key.
pub const SLEFT: i32 = 0o611;
/// Shifted message key.
pub const SMESSAGE: i32 = 0o612;
/// Shifted move key.
pub const SMOVE: i32 = 0o613;
/// Shifted next key.
pub const SNEXT: i32 = 0o614;
/// Shifted options key.
pub const SOPTIONS: i32 = 0o615;
/// Shifted previous key.
pub const SPREVIOUS: i32 = 0o616;
/// Shifted print key.
pub const SPRINT: i32 = 0o617;
/// Shifted redo key.
pub const SREDO: i32 = 0o620;
/// Shifted replace key.
pub const SREPLACE: i32 = 0o621;
/// Shifted right-arrow key.
pub const SRIGHT: i32 = 0o622;
/// Shifted resume key.
pub const SRSUME: i32 = 0o623;
/// Shifted save key.
pub const SSAVE: i32 = 0o624;
/// Shifted suspend key.
pub const SSUSPEND: i32 = 0o625;
/// Shifted undo key.
pub const SUNDO: i32 = 0o626;
/// Suspend key.
pub const SUSPEND: i32 = 0o627;
/// Undo key.
pub const UNDO: i32 = 0o630;
/// Mouse event has occurred.
pub const MOUSE: i32 = 0o631;
/// Terminal resize event.
pub const RESIZE: i32 = 0o632;

/// Code of function key `n`, `F(n)` in C.
///
/// ```rust
/// assert_eq!(ncraii::key::f(1), ncraii::key::F0 + 1);
/// ```
#[inline]
pub const fn f(n: i32) -> i32 {
    F0 + n
}

/// Whether `code` is one of the function keys F0 to F63.
pub const fn is_function_key(code: i32) -> bool {
    code >= F0 && code < F0 + 64
}

/// Printable name of a key, as the library spells it (`KEY_DOWN`, `^C`, ...).
///
/// Returns `None` for codes the library doesn't know.
pub fn name(code: i32) -> Option<String> {
    // SAFETY: keyname returns null or a pointer to a static, nul-terminated
    // buffer; it is copied out before any other library call.
    unsafe {
        let ptr = sys::keyname(code);
        if ptr.is_null() {
            None
        } else {
            Some(CStr::from_ptr(ptr).to_string_lossy().into_owned())
        }
    }
}
