//! # Overview
//!
//! `midi_message` models a single MIDI 1.0 message as a compact, allocation-free value: a status
//! byte and up to two data bytes, along with the amount of bytes actually used.
//!
//! Messages are classified from their status byte into the three MIDI message families (channel,
//! system common and system real-time), and typed accessors read the fields of each message type.
//!
//! ```rust
//! use midi_message::Message;
//!
//! // Raw bytes from a MIDI port, already delimited by the transport
//! let msg = Message::from_slice(&[0x93, 60, 100]).unwrap();
//!
//! if msg.is_note_on() {
//!     println!("note {} on channel {} with velocity {}", msg.note(), msg.channel(), msg.velocity());
//! }
//! ```
//!
//! # Building messages
//!
//! Messages can be built back from semantic parameters through the `new_*` factories:
//!
//! ```rust
//! use midi_message::Message;
//!
//! let msg = Message::new_pitch_bend(2, -1);
//! assert_eq!(msg.as_bytes(), &[0xE2, 0x7F, 0x3F]);
//! assert_eq!(msg.pitch_bend(), -1);
//! ```
//!
//! The resulting bytes can be retrieved through [`Message::as_bytes`] or written to any
//! [`io::Write`](io/trait.Write.html) sink.
//!
//! # Checked decoding
//!
//! The accessors on `Message` trust the caller to have checked the message type first.
//! The [`live`](live/index.html) module provides a checked view instead, produced through
//! [`Message::event`].
//!
//! # About features
//!
//! - The `std` feature (enabled by default)
//!
//!   Implements `std::error::Error` for the error types and enables `Message::write_std`.
//!   Disabling it with `default-features = false` makes the crate `no_std`.
//!
//! - The `strict` feature
//!
//!   By default messages are taken as they come, even if their length disagrees with their
//!   status byte. With `strict` enabled, such messages raise `ErrorKind::Malformed` errors on the
//!   checked paths.
//!
//! - The `serde` feature
//!
//!   Derives `Serialize` and `Deserialize` for all public types.
//!
//! # What this crate does not do
//!
//! Running status, System Exclusive payload buffering and transports are left to the code that
//! owns the byte stream.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

macro_rules! bail {
    ($err:expr) => {{
        return Err($err.into());
    }};
}
macro_rules! ensure {
    ($cond:expr, $err:expr) => {{
        if !$cond {
            bail!($err)
        }
    }};
}

/// All of the errors this crate produces.
#[macro_use]
mod error;

mod prelude {
    pub(crate) use crate::{
        error::{Error, ErrorKind, Result, StdResult},
        io::{Write, WriteResult},
        primitive::{u14, u4, u7},
        status::{
            category, data_length, is_channel_message, is_clock_message, is_real_time_message,
            is_system_message, Category, ChannelMessage, RealTimeMessage, SystemMessage,
        },
    };
    pub(crate) use core::{convert::TryFrom, fmt};
    #[cfg(feature = "std")]
    pub(crate) use std::io;
}

pub mod io;
pub mod live;
mod message;
mod primitive;
mod status;

pub use crate::{
    error::{Error, ErrorKind, Result},
    message::Message,
    status::{
        category, channel_message_length, data_length, is_channel_message, is_clock_message,
        is_real_time_message, is_system_message, system_message_length, Category, ChannelMessage,
        RealTimeMessage, SystemMessage,
    },
};

/// Exotically-sized integers used by the MIDI standard.
pub mod num {
    pub use crate::primitive::{u14, u4, u7};
}
