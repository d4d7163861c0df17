//! Minimal output sinks, so that messages can be handed to a transport without `std`.
//!
//! With the `std` feature enabled, [`Message::write_std`](../struct.Message.html#method.write_std)
//! writes to any `std::io::Write` instead.

use crate::prelude::*;

/// The result of writing to a `W` sink.
pub type WriteResult<W> = StdResult<(), <W as Write>::Error>;

/// A destination for raw MIDI bytes.
pub trait Write {
    type Error;

    /// Write all of `buf`, or fail.
    fn write(&mut self, buf: &[u8]) -> WriteResult<Self>;
}

#[cfg(feature = "alloc")]
impl Write for alloc::vec::Vec<u8> {
    type Error = core::convert::Infallible;
    #[inline]
    fn write(&mut self, buf: &[u8]) -> WriteResult<Self> {
        self.extend_from_slice(buf);
        Ok(())
    }
}

/// Writing into a fixed buffer that is too small to hold the message.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct OutOfSpace;
impl fmt::Display for OutOfSpace {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("out of space in midi output buffer")
    }
}
#[cfg(feature = "std")]
impl std::error::Error for OutOfSpace {}

/// Writes at the start of the slice and advances it past the written bytes.
///
/// Nothing is written if the bytes do not fit.
impl<'a> Write for &'a mut [u8] {
    type Error = OutOfSpace;
    fn write(&mut self, buf: &[u8]) -> WriteResult<Self> {
        if buf.len() > self.len() {
            return Err(OutOfSpace);
        }
        let slice = core::mem::replace(self, &mut []);
        let (head, tail) = slice.split_at_mut(buf.len());
        head.copy_from_slice(buf);
        *self = tail;
        Ok(())
    }
}
