//! Status byte classification.
//!
//! The first byte of every MIDI message is its status byte, always with the top bit set.
//! Its value alone decides which of the three message families the message belongs to:
//!
//! - `0x80 ..= 0xEF`: channel messages. The high nibble is the message type and the low nibble
//!     is the channel.
//! - `0xF0 ..= 0xF7`: system common messages.
//! - `0xF8 ..= 0xFF`: system real-time messages, always a single byte long.
//!
//! Bytes in `0x00 ..= 0x7F` are data bytes, and none of the predicates in this module claim them.

/// The type of a channel (voice) message, stored in the high nibble of its status byte.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ChannelMessage {
    NoteOff = 0x80,
    NoteOn = 0x90,
    KeyPressure = 0xA0,
    ControlChange = 0xB0,
    ProgramChange = 0xC0,
    ChannelPressure = 0xD0,
    PitchBend = 0xE0,
}
impl ChannelMessage {
    /// Extract the channel message type out of a status byte, ignoring the channel nibble.
    ///
    /// Returns `None` if the status is not a channel message status.
    #[inline]
    pub fn from_status(status: u8) -> Option<ChannelMessage> {
        use self::ChannelMessage::*;
        Some(match status & 0xF0 {
            0x80 => NoteOff,
            0x90 => NoteOn,
            0xA0 => KeyPressure,
            0xB0 => ControlChange,
            0xC0 => ProgramChange,
            0xD0 => ChannelPressure,
            0xE0 => PitchBend,
            _ => return None,
        })
    }

    /// The status byte for this message type on channel 0.
    #[inline]
    pub const fn status(self) -> u8 {
        self as u8
    }

    /// Returns `true` if `status` is this message type, on any channel.
    #[inline]
    pub const fn matches(self, status: u8) -> bool {
        status & 0xF0 == self as u8
    }

    /// Amount of data bytes following the status byte.
    #[inline]
    pub const fn data_length(self) -> usize {
        use self::ChannelMessage::*;
        match self {
            NoteOff | NoteOn | KeyPressure | ControlChange | PitchBend => 2,
            ProgramChange | ChannelPressure => 1,
        }
    }
}

/// A System Common message, addressed to the whole system instead of a single channel.
///
/// `0xF4` and `0xF5` are reserved by the MIDI standard and have no variant.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum SystemMessage {
    /// Start of a System Exclusive dump.
    ///
    /// The dump itself is variable-length and is not part of the message; it is up to whoever
    /// owns the byte stream to collect it until `EndOfExclusive`.
    SystemExclusive = 0xF0,
    /// A MIDI Time Code quarter frame.
    TimeCode = 0xF1,
    SongPosition = 0xF2,
    SongSelect = 0xF3,
    TuneRequest = 0xF6,
    EndOfExclusive = 0xF7,
}
impl SystemMessage {
    /// Get the named system common message for a status byte, if there is one.
    #[inline]
    pub fn from_status(status: u8) -> Option<SystemMessage> {
        use self::SystemMessage::*;
        Some(match status {
            0xF0 => SystemExclusive,
            0xF1 => TimeCode,
            0xF2 => SongPosition,
            0xF3 => SongSelect,
            0xF6 => TuneRequest,
            0xF7 => EndOfExclusive,
            _ => return None,
        })
    }

    /// The status byte of this message.
    #[inline]
    pub const fn status(self) -> u8 {
        self as u8
    }

    /// Returns `true` if `status` is exactly this message.
    #[inline]
    pub const fn matches(self, status: u8) -> bool {
        status == self as u8
    }

    /// Amount of data bytes following the status byte.
    ///
    /// `SystemExclusive` reports 0, since its payload is not stored in the message.
    #[inline]
    pub const fn data_length(self) -> usize {
        use self::SystemMessage::*;
        match self {
            TimeCode | SongSelect => 1,
            SongPosition => 2,
            SystemExclusive | TuneRequest | EndOfExclusive => 0,
        }
    }
}

/// A System Real-Time message.
/// These are always one byte long, and may be interleaved anywhere in a MIDI stream.
///
/// `0xF9` and `0xFD` are reserved by the MIDI standard and have no variant.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum RealTimeMessage {
    /// If sent, they should be sent 24 times per quarter note.
    Tick = 0xF8,
    /// Request the device to start playing at position 0.
    Start = 0xFA,
    /// Request the device to continue playing without resetting the position.
    Continue = 0xFB,
    /// Request the device to stop playing, but keep track of the position where it stopped.
    Stop = 0xFC,
    /// Once one of these messages is transmitted, a message should arrive every 300ms or else the
    /// connection is considered broken.
    ActiveSensing = 0xFE,
    /// Request the device to reset itself, usually to the same state as it was after turning on.
    Reset = 0xFF,
}
impl RealTimeMessage {
    /// Get the named real-time message for a status byte, if there is one.
    #[inline]
    pub fn from_status(status: u8) -> Option<RealTimeMessage> {
        use self::RealTimeMessage::*;
        Some(match status {
            0xF8 => Tick,
            0xFA => Start,
            0xFB => Continue,
            0xFC => Stop,
            0xFE => ActiveSensing,
            0xFF => Reset,
            _ => return None,
        })
    }

    /// The status byte of this message.
    #[inline]
    pub const fn status(self) -> u8 {
        self as u8
    }

    /// Returns `true` if `status` is exactly this message.
    #[inline]
    pub const fn matches(self, status: u8) -> bool {
        status == self as u8
    }

    /// Returns `true` for the messages that drive a sequencer clock: `Tick`, `Start`, `Continue`
    /// and `Stop`.
    #[inline]
    pub const fn is_clock(self) -> bool {
        use self::RealTimeMessage::*;
        matches!(self, Tick | Start | Continue | Stop)
    }
}

/// The message family a status byte belongs to.
///
/// Every byte maps to exactly one category.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    /// `0x80 ..= 0xEF`.
    Channel,
    /// `0xF0 ..= 0xF7`.
    SystemCommon,
    /// `0xF8 ..= 0xFF`.
    RealTime,
    /// `0x00 ..= 0x7F`: a data byte, not a status byte.
    Invalid,
}

/// Classify a status byte.
#[inline]
pub fn category(status: u8) -> Category {
    if is_channel_message(status) {
        Category::Channel
    } else if is_system_message(status) {
        Category::SystemCommon
    } else if is_real_time_message(status) {
        Category::RealTime
    } else {
        Category::Invalid
    }
}

/// Returns `true` for channel message statuses, `0x80 ..= 0xEF`.
#[inline]
pub const fn is_channel_message(status: u8) -> bool {
    status & 0xF0 >= 0x80 && status & 0xF0 < 0xF0
}

/// Returns `true` for system common statuses, `0xF0 ..= 0xF7`, including the reserved ones.
#[inline]
pub const fn is_system_message(status: u8) -> bool {
    status & 0xF8 == 0xF0
}

/// Returns `true` for system real-time statuses, `0xF8 ..= 0xFF`, including the reserved ones.
#[inline]
pub const fn is_real_time_message(status: u8) -> bool {
    status & 0xF8 == 0xF8
}

/// Returns `true` for the real-time messages that drive a sequencer clock.
/// `ActiveSensing`, `Reset` and the reserved real-time statuses are not clock messages.
#[inline]
pub const fn is_clock_message(status: u8) -> bool {
    matches!(status, 0xF8 | 0xFA | 0xFB | 0xFC)
}

/// Amount of data bytes following the status byte of a channel message.
#[inline]
pub const fn channel_message_length(message: ChannelMessage) -> usize {
    message.data_length()
}

/// Amount of data bytes following the status byte of a system common message.
#[inline]
pub const fn system_message_length(message: SystemMessage) -> usize {
    message.data_length()
}

/// Amount of data bytes implied by any status byte.
///
/// Reserved statuses, real-time messages and data bytes all report 0.
#[inline]
pub fn data_length(status: u8) -> usize {
    const LENGTH_BY_STATUS: [u8; 16] = [0, 0, 0, 0, 0, 0, 0, 0, 2, 2, 2, 2, 1, 1, 2, 0];
    if is_system_message(status) {
        SystemMessage::from_status(status).map_or(0, SystemMessage::data_length)
    } else {
        LENGTH_BY_STATUS[(status >> 4) as usize] as usize
    }
}
