//! A checked, typed view over a [`Message`](../struct.Message.html).
//!
//! The accessors on `Message` read raw bytes and trust the caller to have checked the message
//! type first. [`LiveEvent`](enum.LiveEvent.html) is the alternative: decoding only succeeds if
//! the status byte is a real status and enough data bytes are stored, and each variant carries
//! exactly the fields of its message type, already masked to their bit width.
//!
//! ```
//! use midi_message::{live::{ChannelEvent, LiveEvent}, Message};
//!
//! let msg = Message::triple(0x93, 60, 100);
//! match msg.event().unwrap() {
//!     LiveEvent::Channel { channel, message: ChannelEvent::NoteOn { key, vel } } => {
//!         assert_eq!(channel.as_int(), 3);
//!         assert_eq!((key.as_int(), vel.as_int()), (60, 100));
//!     }
//!     _ => unreachable!(),
//! }
//! ```

use crate::{message::Message, prelude::*};

/// A decoded MIDI message.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LiveEvent {
    /// A MIDI message associated with a channel, carrying musical data.
    ///
    /// Status byte in the range `0x80 ..= 0xEF`.
    Channel {
        /// The MIDI channel that this message is associated with.
        channel: u4,
        /// The MIDI message type and associated data.
        message: ChannelEvent,
    },
    /// A System Common message.
    ///
    /// Status byte in the range `0xF0 ..= 0xF7`.
    Common(SystemCommon),
    /// A one-byte System Real-Time message.
    ///
    /// Status byte in the range `0xF8 ..= 0xFF`.
    RealTime(RealTimeMessage),
    /// One of the reserved status bytes `0xF4`, `0xF5`, `0xF9` or `0xFD`.
    Undefined(u8),
}
impl LiveEvent {
    pub(crate) fn read(msg: &Message) -> Result<LiveEvent> {
        ensure!(!msg.is_empty(), err_invalid!("empty message"));
        let status = msg.status();
        let expected = 1 + data_length(status);
        ensure!(
            msg.len() >= expected,
            err_invalid!("truncated midi message")
        );
        if cfg!(feature = "strict") {
            ensure!(
                msg.len() == expected,
                err_malformed!("message length does not match its status")
            );
        }
        let d0 = u7::new(msg.data0());
        let d1 = u7::new(msg.data1());
        let ev = match category(status) {
            Category::Channel => {
                let message = match status & 0xF0 {
                    0x80 => ChannelEvent::NoteOff { key: d0, vel: d1 },
                    0x90 => ChannelEvent::NoteOn { key: d0, vel: d1 },
                    0xA0 => ChannelEvent::KeyPressure {
                        key: d0,
                        pressure: d1,
                    },
                    0xB0 => ChannelEvent::ControlChange {
                        controller: d0,
                        value: d1,
                    },
                    0xC0 => ChannelEvent::ProgramChange { program: d0 },
                    0xD0 => ChannelEvent::ChannelPressure { pressure: d0 },
                    _ => ChannelEvent::PitchBend {
                        bend: PitchBend::from_u14(u14::from_data(d0, d1)),
                    },
                };
                LiveEvent::Channel {
                    channel: u4::new(status),
                    message,
                }
            }
            Category::SystemCommon => match SystemMessage::from_status(status) {
                Some(sys) => LiveEvent::Common(match sys {
                    SystemMessage::SystemExclusive => SystemCommon::SysExStart,
                    SystemMessage::TimeCode => SystemCommon::TimeCode(d0),
                    SystemMessage::SongPosition => {
                        SystemCommon::SongPosition(u14::from_data(d0, d1))
                    }
                    SystemMessage::SongSelect => SystemCommon::SongSelect(d0),
                    SystemMessage::TuneRequest => SystemCommon::TuneRequest,
                    SystemMessage::EndOfExclusive => SystemCommon::SysExEnd,
                }),
                None => LiveEvent::Undefined(status),
            },
            Category::RealTime => match RealTimeMessage::from_status(status) {
                Some(rt) => LiveEvent::RealTime(rt),
                None => LiveEvent::Undefined(status),
            },
            Category::Invalid => bail!(err_invalid!("data byte in status position")),
        };
        Ok(ev)
    }

    /// Encode this event back into a raw message.
    ///
    /// The produced message always has the length its status byte calls for.
    pub fn to_message(&self) -> Message {
        match *self {
            LiveEvent::Channel { channel, message } => {
                let status = message.kind().status() | channel.as_int();
                match message {
                    ChannelEvent::NoteOff { key, vel } | ChannelEvent::NoteOn { key, vel } => {
                        Message::triple(status, key.as_int(), vel.as_int())
                    }
                    ChannelEvent::KeyPressure { key, pressure } => {
                        Message::triple(status, key.as_int(), pressure.as_int())
                    }
                    ChannelEvent::ControlChange { controller, value } => {
                        Message::triple(status, controller.as_int(), value.as_int())
                    }
                    ChannelEvent::ProgramChange { program } => {
                        Message::pair(status, program.as_int())
                    }
                    ChannelEvent::ChannelPressure { pressure } => {
                        Message::pair(status, pressure.as_int())
                    }
                    ChannelEvent::PitchBend { bend } => {
                        let (lsb, msb) = bend.as_u14().to_data();
                        Message::triple(status, lsb.as_int(), msb.as_int())
                    }
                }
            }
            LiveEvent::Common(common) => common.to_message(),
            LiveEvent::RealTime(rt) => Message::single(rt.status()),
            LiveEvent::Undefined(status) => Message::single(status),
        }
    }
}
impl From<LiveEvent> for Message {
    #[inline]
    fn from(ev: LiveEvent) -> Message {
        ev.to_message()
    }
}

/// The payload of a channel message.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChannelEvent {
    /// Stop playing a note.
    NoteOff {
        /// The MIDI key to stop playing.
        key: u7,
        /// The velocity with which to stop playing it.
        vel: u7,
    },
    /// Start playing a note.
    NoteOn {
        /// The key to start playing.
        key: u7,
        /// The velocity (strength) with which to press it.
        ///
        /// Note that by convention a `NoteOn` message with a velocity of 0 is equivalent to a
        /// `NoteOff`.
        vel: u7,
    },
    /// Modify the pressure on a single key after it has been played.
    KeyPressure { key: u7, pressure: u7 },
    /// Modify the value of a MIDI controller.
    ControlChange { controller: u7, value: u7 },
    /// Change the program (also known as instrument) for a channel.
    ProgramChange { program: u7 },
    /// Change the pressure of a whole channel at once.
    ChannelPressure { pressure: u7 },
    /// Set the pitch bend value for the entire channel.
    PitchBend { bend: PitchBend },
}
impl ChannelEvent {
    /// The message type of this payload.
    pub fn kind(&self) -> ChannelMessage {
        match self {
            ChannelEvent::NoteOff { .. } => ChannelMessage::NoteOff,
            ChannelEvent::NoteOn { .. } => ChannelMessage::NoteOn,
            ChannelEvent::KeyPressure { .. } => ChannelMessage::KeyPressure,
            ChannelEvent::ControlChange { .. } => ChannelMessage::ControlChange,
            ChannelEvent::ProgramChange { .. } => ChannelMessage::ProgramChange,
            ChannelEvent::ChannelPressure { .. } => ChannelMessage::ChannelPressure,
            ChannelEvent::PitchBend { .. } => ChannelMessage::PitchBend,
        }
    }
}

/// A decoded System Common message.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SystemCommon {
    /// The `0xF0` byte opening a System Exclusive dump. The dump bytes are not included.
    SysExStart,
    /// A MIDI Time Code quarter frame, with its raw data byte.
    TimeCode(u7),
    /// The number of MIDI beats (6 x MIDI clocks) that have elapsed since the start of the
    /// sequence.
    SongPosition(u14),
    /// Select a given song index.
    SongSelect(u7),
    /// Request the device to tune itself.
    TuneRequest,
    /// The `0xF7` byte closing a System Exclusive dump.
    SysExEnd,
}
impl SystemCommon {
    fn to_message(self) -> Message {
        match self {
            SystemCommon::SysExStart => Message::single(0xF0),
            SystemCommon::TimeCode(data) => Message::pair(0xF1, data.as_int()),
            SystemCommon::SongPosition(pos) => {
                let (lsb, msb) = pos.to_data();
                Message::triple(0xF2, lsb.as_int(), msb.as_int())
            }
            SystemCommon::SongSelect(song) => Message::pair(0xF3, song.as_int()),
            SystemCommon::TuneRequest => Message::single(0xF6),
            SystemCommon::SysExEnd => Message::single(0xF7),
        }
    }
}

/// The value of a pitch bend, stored as a signed value in the range
/// `PitchBend::MIN ..= PitchBend::MAX`.
///
/// On the wire it travels as a 14-bit unsigned value where `0x2000` means no bend.
///
/// Serializes as its signed int. Deserialized values are clamped like `from_int`.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "i16", into = "i16")
)]
pub struct PitchBend(i16);
impl PitchBend {
    /// The minimum pitch-bend value, indicating full bend downwards.
    pub const MIN: i16 = -0x2000;
    /// The middle/zero pitch-bend value, indicating no bend.
    pub const MID: i16 = 0;
    /// The maximum pitch-bend value, indicating full bend upwards.
    pub const MAX: i16 = 0x1FFF;

    /// Create a `PitchBend` value from an int in the range `[-0x2000, 0x1FFF]`.
    ///
    /// Integers outside this range will be clamped.
    #[inline]
    pub fn from_int(int: i16) -> PitchBend {
        PitchBend(int.clamp(Self::MIN, Self::MAX))
    }

    /// Create a `PitchBend` value from its 14-bit wire representation.
    #[inline]
    pub fn from_u14(raw: u14) -> PitchBend {
        PitchBend(raw.as_int() as i16 + Self::MIN)
    }

    /// Create a `PitchBend` value from a number in the range `[-1.0, 1.0]`.
    ///
    /// Floats outside this range will be clamped.
    #[inline]
    pub fn from_f32(float: f32) -> PitchBend {
        PitchBend::from_int((float.max(-1.0).min(1.0) * -(Self::MIN as f32)) as i16)
    }

    /// Returns an int in the range `[-0x2000, 0x1FFF]`.
    #[inline]
    pub fn as_int(self) -> i16 {
        self.0
    }

    /// Returns the 14-bit wire representation, in the range `[0, 0x3FFF]`.
    #[inline]
    pub fn as_u14(self) -> u14 {
        u14::new((self.0 - Self::MIN) as u16)
    }

    /// Returns an `f32` in the range `[-1.0, 1.0)`.
    #[inline]
    pub fn as_f32(self) -> f32 {
        self.0 as f32 * (1.0 / 0x2000 as f32)
    }
}
impl From<i16> for PitchBend {
    /// Clamps into range.
    #[inline]
    fn from(int: i16) -> PitchBend {
        PitchBend::from_int(int)
    }
}
impl From<PitchBend> for i16 {
    #[inline]
    fn from(bend: PitchBend) -> i16 {
        bend.as_int()
    }
}
