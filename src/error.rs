//! Error types for ncurses-raii.

use std::ffi::NulError;

use crate::color::Color;
use crate::types::{AttrT, PairT, ERR};

/// Result type alias for wrapper operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the wrapper.
///
/// Resource-creation failures have their own variants. Per-call failures
/// of the native library (its `ERR` sentinel) become [`Error::Call`] naming
/// the native function.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The terminal could not be opened.
    #[error("can't initialize ncurses, newterm() failed")]
    NcursesInit,

    /// A terminal session was already started by this process.
    #[error("ncurses has already been initialized in this process")]
    AlreadyInitialized,

    /// The native library returned a null window.
    #[error("can't create new window, {0}() failed")]
    WindowInit(&'static str),

    /// Color mode could not be started.
    #[error("can't initialize colors, start_color() failed")]
    ColorInit,

    /// No color pair is left for the given color.
    #[error("can't register color {0}, init_pair() failed")]
    TooManyColors(Color),

    /// The pair number was never registered.
    #[error("no color registered for pair {0}")]
    NoSuchPair(PairT),

    /// The attribute refers to a pair that was never registered.
    #[error("no color registered for attribute {0:#x}")]
    NoSuchAttr(AttrT),

    /// The window no longer manages a handle.
    #[error("window doesn't manage any object")]
    NoWindow,

    /// A native call returned `ERR`.
    #[error("{0}() returned ERR")]
    Call(&'static str),

    /// A string handed to the native library contains a nul byte.
    #[error("string contains an interior nul byte at {0}")]
    Nul(usize),

    /// Input read by `scanw` could not be parsed.
    #[error("can't parse input: {0}")]
    Parse(String),
}

impl From<NulError> for Error {
    fn from(err: NulError) -> Self {
        Error::Nul(err.nul_position())
    }
}

/// Conversion of native return values into `Result`.
pub(crate) trait IntoResult {
    /// The success type.
    type Output;

    /// Convert, naming the native function in the error.
    fn into_result(self, func: &'static str) -> Result<Self::Output>;
}

impl IntoResult for i32 {
    type Output = i32;

    fn into_result(self, func: &'static str) -> Result<Self::Output> {
        if self == ERR {
            Err(Error::Call(func))
        } else {
            Ok(self)
        }
    }
}

impl IntoResult for bool {
    type Output = ();

    fn into_result(self, func: &'static str) -> Result<Self::Output> {
        if self {
            Ok(())
        } else {
            Err(Error::Call(func))
        }
    }
}

/// `OK`/`ERR` only: discard the success value.
pub(crate) fn check(ret: i32, func: &'static str) -> Result<()> {
    ret.into_result(func).map(|_| ())
}
