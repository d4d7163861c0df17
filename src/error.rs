use core::fmt;

/// Represents an error while decoding a MIDI message.
///
/// This type is a thin pointer to a static `ErrorKind`, so it is `Copy`-cheap to move around and
/// never allocates.
///
/// If the `std` feature is enabled, this type implements `std::error::Error`.
/// Otherwise, only `Display` and `Debug` are implemented.
///
/// For more information about the error policy used by this crate, see
/// [`ErrorKind`](enum.ErrorKind.html).
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Error {
    inner: &'static ErrorKind,
}
impl Error {
    /// Create a new error with the given `ErrorKind`.
    #[inline]
    pub fn new(kind: &'static ErrorKind) -> Error {
        Error { inner: kind }
    }

    /// More information about the error itself.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        *self.inner
    }
}
impl From<&'static ErrorKind> for Error {
    #[inline]
    fn from(kind: &'static ErrorKind) -> Error {
        Error::new(kind)
    }
}
impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self.inner, f)
    }
}
impl fmt::Debug for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(self.inner, f)
    }
}
#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// The type of error that occurred while decoding.
///
/// Errors are broadly categorized into 2 classes, and specific error info is provided as a
/// non-normative string literal.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The bytes cannot be interpreted as a MIDI message at all.
    Invalid(&'static str),

    /// The bytes can be interpreted, but they do not follow the MIDI standard.
    ///
    /// This kind of error is not emitted by default, only if the `strict` crate feature is
    /// enabled.
    Malformed(&'static str),
}
impl ErrorKind {
    /// Get the informative message on what exact part of the MIDI format was not respected.
    #[inline]
    pub fn message(&self) -> &'static str {
        match *self {
            ErrorKind::Invalid(msg) => msg,
            ErrorKind::Malformed(msg) => msg,
        }
    }
}
impl fmt::Display for ErrorKind {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorKind::Invalid(msg) => write!(f, "invalid midi: {}", msg),
            ErrorKind::Malformed(msg) => write!(f, "malformed midi: {}", msg),
        }
    }
}

macro_rules! err_invalid {
    ($msg:expr) => {{
        const ERR_KIND: &'static ErrorKind = &ErrorKind::Invalid($msg);
        ERR_KIND
    }};
}
macro_rules! err_malformed {
    ($msg:expr) => {{
        const ERR_KIND: &'static ErrorKind = &ErrorKind::Malformed($msg);
        ERR_KIND
    }};
}

/// The result type used by the MIDI decoder.
pub type Result<T> = StdResult<T, Error>;
pub(crate) use core::result::Result as StdResult;
