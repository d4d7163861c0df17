//! The raw message value.

use crate::{
    live::{ChannelEvent, LiveEvent, PitchBend, SystemCommon},
    prelude::*,
};

/// A single MIDI message, stored as up to 3 raw bytes: a status byte followed by up to two data
/// bytes.
///
/// `Message` is a plain `Copy` value, never allocates, and can be built in two ways:
///
/// - From raw bytes, through [`single`](#method.single), [`pair`](#method.pair),
///     [`triple`](#method.triple) or [`from_slice`](#method.from_slice).
///     No checks are done on the bytes, and the stored length is whatever was given, even if the
///     status byte implies a different amount of data bytes.
/// - From semantic parameters, through the `new_*` factories, which always produce a message of
///     the correct length.
///
/// The field accessors (`note()`, `velocity()`, `pitch_bend()`, ...) read the stored bytes
/// directly. Each one assumes that the caller already checked the message type, for example
/// through `is_note_on()`, and returns whatever bytes happen to be stored otherwise.
/// For a checked alternative, see [`event`](#method.event).
///
/// A default-constructed message is empty (`len() == 0`). Its fields must not be read.
///
/// Storage bytes past `len()` are always zero, so equality and hashing only see the used bytes.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "StoredMessage")
)]
pub struct Message {
    raw: [u8; 3],
    len: u8,
}

/// The serialized layout of a `Message`, validated on the way in.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(rename = "Message")]
struct StoredMessage {
    raw: [u8; 3],
    len: u8,
}
#[cfg(feature = "serde")]
impl TryFrom<StoredMessage> for Message {
    type Error = Error;
    fn try_from(StoredMessage { raw, len }: StoredMessage) -> Result<Message> {
        let [status, data0, data1] = raw;
        Ok(match len {
            0 => Message::default(),
            1 => Message::single(status),
            2 => Message::pair(status, data0),
            3 => Message::triple(status, data0, data1),
            _ => {
                tracing::debug!(len, "rejected stored midi message");
                bail!(err_invalid!("stored message length above 3"))
            }
        })
    }
}

/// Raw storage.
impl Message {
    /// A message made of a status byte alone.
    #[inline]
    pub const fn single(status: u8) -> Message {
        Message {
            raw: [status, 0, 0],
            len: 1,
        }
    }

    /// A message made of a status byte and one data byte.
    #[inline]
    pub const fn pair(status: u8, data0: u8) -> Message {
        Message {
            raw: [status, data0, 0],
            len: 2,
        }
    }

    /// A message made of a status byte and two data bytes.
    #[inline]
    pub const fn triple(status: u8, data0: u8, data1: u8) -> Message {
        Message {
            raw: [status, data0, data1],
            len: 3,
        }
    }

    /// Build a message out of an already-delimited slice of 1 to 3 MIDI bytes.
    ///
    /// Fails if the slice is empty or longer than 3 bytes.
    /// If the `strict` feature is enabled, it also fails if the first byte is not a status byte or
    /// if the amount of data bytes does not match the status byte.
    pub fn from_slice(bytes: &[u8]) -> Result<Message> {
        let msg = match *bytes {
            [status] => Message::single(status),
            [status, data0] => Message::pair(status, data0),
            [status, data0, data1] => Message::triple(status, data0, data1),
            _ => {
                tracing::debug!(len = bytes.len(), "rejected midi message slice");
                bail!(err_invalid!("expected between 1 and 3 message bytes"))
            }
        };
        if cfg!(feature = "strict") {
            ensure!(
                msg.status() >= 0x80,
                err_malformed!("first byte is not a status byte")
            );
            ensure!(
                msg.len() == 1 + data_length(msg.status()),
                err_malformed!("message length does not match its status")
            );
        }
        Ok(msg)
    }

    /// The status byte.
    #[inline]
    pub const fn status(&self) -> u8 {
        self.raw[0]
    }

    /// The first data byte.
    #[inline]
    pub const fn data0(&self) -> u8 {
        self.raw[1]
    }

    /// The second data byte.
    #[inline]
    pub const fn data1(&self) -> u8 {
        self.raw[2]
    }

    /// All 3 storage bytes, including the unused ones past `len()`.
    #[inline]
    pub const fn raw(&self) -> &[u8; 3] {
        &self.raw
    }

    /// The bytes that make up this message, ready to be sent verbatim.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.raw[..self.len as usize]
    }

    /// Amount of stored bytes, status byte included.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// Whether this is a default-constructed, empty message.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The family of the status byte.
    #[inline]
    pub fn category(&self) -> Category {
        category(self.status())
    }

    /// Decode this message into a typed event, checking the status byte and the stored length.
    ///
    /// Fails for empty messages, for messages starting with a data byte and for messages with
    /// fewer data bytes than their status byte requires.
    /// If the `strict` feature is enabled, it also fails for messages with extra data bytes.
    pub fn event(&self) -> Result<LiveEvent> {
        LiveEvent::read(self).map_err(|err| {
            tracing::trace!(status = self.status(), len = self.len, %err, "undecodable message");
            err
        })
    }

    /// Write the message bytes to the given output, as they are.
    #[inline]
    pub fn write<W: Write>(&self, out: &mut W) -> WriteResult<W> {
        out.write(self.as_bytes())
    }

    /// Write the message bytes to the given `std::io::Write` output.
    ///
    /// This method is only available with the `std` feature enabled.
    #[cfg(feature = "std")]
    #[inline]
    pub fn write_std<W: io::Write>(&self, mut out: W) -> io::Result<()> {
        out.write_all(self.as_bytes())
    }
}
impl From<[u8; 1]> for Message {
    #[inline]
    fn from([status]: [u8; 1]) -> Message {
        Message::single(status)
    }
}
impl From<[u8; 2]> for Message {
    #[inline]
    fn from([status, data0]: [u8; 2]) -> Message {
        Message::pair(status, data0)
    }
}
impl From<[u8; 3]> for Message {
    #[inline]
    fn from([status, data0, data1]: [u8; 3]) -> Message {
        Message::triple(status, data0, data1)
    }
}
impl<'a> TryFrom<&'a [u8]> for Message {
    type Error = Error;
    #[inline]
    fn try_from(bytes: &'a [u8]) -> Result<Message> {
        Message::from_slice(bytes)
    }
}

/// Channel messages.
impl Message {
    /// Status in `0x80 ..= 0xEF`.
    #[inline]
    pub const fn is_channel_message(&self) -> bool {
        is_channel_message(self.status())
    }

    /// The channel message type, if this is a channel message.
    #[inline]
    pub fn channel_message(&self) -> Option<ChannelMessage> {
        ChannelMessage::from_status(self.status())
    }

    /// The low nibble of the status byte.
    #[inline]
    pub const fn channel(&self) -> u8 {
        self.status() & 0xF
    }

    /// `NoteOff` on any channel.
    #[inline]
    pub const fn is_note_off(&self) -> bool {
        ChannelMessage::NoteOff.matches(self.status())
    }

    /// `NoteOn` on any channel.
    #[inline]
    pub const fn is_note_on(&self) -> bool {
        ChannelMessage::NoteOn.matches(self.status())
    }

    /// The key of a `NoteOff`, `NoteOn` or `KeyPressure` message.
    #[inline]
    pub const fn note(&self) -> u8 {
        self.data0()
    }

    /// The velocity of a `NoteOff` or `NoteOn` message.
    #[inline]
    pub const fn velocity(&self) -> u8 {
        self.data1()
    }

    /// `KeyPressure` (polyphonic aftertouch) on any channel.
    #[inline]
    pub const fn is_key_pressure(&self) -> bool {
        ChannelMessage::KeyPressure.matches(self.status())
    }

    /// The pressure of a `KeyPressure` message.
    #[inline]
    pub const fn key_pressure(&self) -> u8 {
        self.data1()
    }

    /// `ControlChange` on any channel.
    #[inline]
    pub const fn is_control_change(&self) -> bool {
        ChannelMessage::ControlChange.matches(self.status())
    }

    /// The controller of a `ControlChange` message.
    #[inline]
    pub const fn controller_number(&self) -> u8 {
        self.data0()
    }

    /// The new value of a `ControlChange` message.
    #[inline]
    pub const fn controller_value(&self) -> u8 {
        self.data1()
    }

    /// `ProgramChange` on any channel.
    #[inline]
    pub const fn is_program_change(&self) -> bool {
        ChannelMessage::ProgramChange.matches(self.status())
    }

    /// The program of a `ProgramChange` message.
    #[inline]
    pub const fn program_number(&self) -> u8 {
        self.data0()
    }

    /// `ChannelPressure` (aftertouch) on any channel.
    #[inline]
    pub const fn is_channel_pressure(&self) -> bool {
        ChannelMessage::ChannelPressure.matches(self.status())
    }

    /// The pressure of a `ChannelPressure` message.
    #[inline]
    pub const fn channel_pressure(&self) -> u8 {
        self.data0()
    }

    /// `PitchBend` on any channel.
    #[inline]
    pub const fn is_pitch_bend(&self) -> bool {
        ChannelMessage::PitchBend.matches(self.status())
    }

    /// The signed pitch bend, in the range `-0x2000 ..= 0x1FFF` where 0 means no bend.
    ///
    /// Note the little-endian order of the data bytes: the first one carries the low 7 bits.
    #[inline]
    pub const fn pitch_bend(&self) -> i16 {
        ((self.data1() as i16) << 7 | self.data0() as i16) - 0x2000
    }
}

/// System common messages.
impl Message {
    /// Status in `0xF0 ..= 0xF7`, reserved ones included.
    #[inline]
    pub const fn is_system_message(&self) -> bool {
        is_system_message(self.status())
    }

    /// The named system common message, if this is one.
    ///
    /// Reserved statuses `0xF4` and `0xF5` are system messages but have no name.
    #[inline]
    pub fn system_message(&self) -> Option<SystemMessage> {
        SystemMessage::from_status(self.status())
    }

    /// The `0xF0` byte opening a System Exclusive dump.
    #[inline]
    pub const fn is_system_exclusive(&self) -> bool {
        SystemMessage::SystemExclusive.matches(self.status())
    }

    /// A MIDI Time Code quarter frame.
    #[inline]
    pub const fn is_time_code(&self) -> bool {
        SystemMessage::TimeCode.matches(self.status())
    }

    #[inline]
    pub const fn is_song_position(&self) -> bool {
        SystemMessage::SongPosition.matches(self.status())
    }

    #[inline]
    pub const fn is_song_select(&self) -> bool {
        SystemMessage::SongSelect.matches(self.status())
    }

    #[inline]
    pub const fn is_tune_request(&self) -> bool {
        SystemMessage::TuneRequest.matches(self.status())
    }

    /// The `0xF7` byte closing a System Exclusive dump.
    #[inline]
    pub const fn is_end_of_exclusive(&self) -> bool {
        SystemMessage::EndOfExclusive.matches(self.status())
    }

    /// The song position in MIDI beats, an unsigned 14-bit value.
    #[inline]
    pub const fn song_position(&self) -> u16 {
        (self.data1() as u16) << 7 | self.data0() as u16
    }

    /// The song of a `SongSelect` message.
    #[inline]
    pub const fn song_number(&self) -> u8 {
        self.data0()
    }
}

/// System real-time messages.
impl Message {
    /// Status in `0xF8 ..= 0xFF`, reserved ones included.
    #[inline]
    pub const fn is_real_time_message(&self) -> bool {
        is_real_time_message(self.status())
    }

    /// The named real-time message, if this is one.
    #[inline]
    pub fn real_time_message(&self) -> Option<RealTimeMessage> {
        RealTimeMessage::from_status(self.status())
    }

    /// `Tick`, `Start`, `Continue` or `Stop`.
    #[inline]
    pub const fn is_clock_message(&self) -> bool {
        is_clock_message(self.status())
    }

    #[inline]
    pub const fn is_tick(&self) -> bool {
        RealTimeMessage::Tick.matches(self.status())
    }

    #[inline]
    pub const fn is_start(&self) -> bool {
        RealTimeMessage::Start.matches(self.status())
    }

    #[inline]
    pub const fn is_continue(&self) -> bool {
        RealTimeMessage::Continue.matches(self.status())
    }

    #[inline]
    pub const fn is_stop(&self) -> bool {
        RealTimeMessage::Stop.matches(self.status())
    }

    #[inline]
    pub const fn is_active_sensing(&self) -> bool {
        RealTimeMessage::ActiveSensing.matches(self.status())
    }

    #[inline]
    pub const fn is_reset(&self) -> bool {
        RealTimeMessage::Reset.matches(self.status())
    }
}

/// Factories.
///
/// The channel is OR-ed into the status byte as-is, so it must be in `0 ..= 15`; larger values
/// spill into the message type nibble. Data bytes are not masked either.
impl Message {
    /// The conventional velocity of a `NoteOff` when none is given.
    pub const NOTE_OFF_VELOCITY: u8 = 0;
    /// The conventional velocity of a `NoteOn` when none is given.
    pub const NOTE_ON_VELOCITY: u8 = 127;

    /// A `NoteOff` message. See `NOTE_OFF_VELOCITY` for the usual release velocity.
    #[inline]
    pub const fn new_note_off(channel: u8, note: u8, velocity: u8) -> Message {
        Message::triple(ChannelMessage::NoteOff.status() | channel, note, velocity)
    }

    /// A `NoteOn` message.
    #[inline]
    pub const fn new_note_on(channel: u8, note: u8, velocity: u8) -> Message {
        Message::triple(ChannelMessage::NoteOn.status() | channel, note, velocity)
    }

    #[inline]
    pub const fn new_key_pressure(channel: u8, note: u8, pressure: u8) -> Message {
        Message::triple(ChannelMessage::KeyPressure.status() | channel, note, pressure)
    }

    #[inline]
    pub const fn new_control_change(channel: u8, controller: u8, value: u8) -> Message {
        Message::triple(ChannelMessage::ControlChange.status() | channel, controller, value)
    }

    #[inline]
    pub const fn new_program_change(channel: u8, program: u8) -> Message {
        Message::pair(ChannelMessage::ProgramChange.status() | channel, program)
    }

    #[inline]
    pub const fn new_channel_pressure(channel: u8, pressure: u8) -> Message {
        Message::pair(ChannelMessage::ChannelPressure.status() | channel, pressure)
    }

    /// Build a pitch bend message from a signed bend in the range `-0x2000 ..= 0x1FFF`.
    ///
    /// Values outside this range saturate to the nearest end.
    pub fn new_pitch_bend(channel: u8, bend: i16) -> Message {
        if bend < PitchBend::MIN || bend > PitchBend::MAX {
            tracing::trace!(bend, "saturating out-of-range pitch bend");
        }
        let (lsb, msb) = PitchBend::from_int(bend).as_u14().to_data();
        Message::triple(
            ChannelMessage::PitchBend.status() | channel,
            lsb.as_int(),
            msb.as_int(),
        )
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("empty");
        }
        match LiveEvent::read(self) {
            Ok(LiveEvent::Channel { channel, message }) => match message {
                ChannelEvent::NoteOff { key, vel } => {
                    write!(f, "note_off ch={} note={} vel={}", channel, key, vel)
                }
                ChannelEvent::NoteOn { key, vel } => {
                    write!(f, "note_on ch={} note={} vel={}", channel, key, vel)
                }
                ChannelEvent::KeyPressure { key, pressure } => write!(
                    f,
                    "key_pressure ch={} note={} pressure={}",
                    channel, key, pressure
                ),
                ChannelEvent::ControlChange { controller, value } => write!(
                    f,
                    "control_change ch={} cc={} value={}",
                    channel, controller, value
                ),
                ChannelEvent::ProgramChange { program } => {
                    write!(f, "program_change ch={} program={}", channel, program)
                }
                ChannelEvent::ChannelPressure { pressure } => {
                    write!(f, "channel_pressure ch={} pressure={}", channel, pressure)
                }
                ChannelEvent::PitchBend { bend } => {
                    write!(f, "pitch_bend ch={} bend={}", channel, bend.as_int())
                }
            },
            Ok(LiveEvent::Common(common)) => match common {
                SystemCommon::SysExStart => f.write_str("sysex"),
                SystemCommon::TimeCode(data) => write!(f, "time_code data={}", data),
                SystemCommon::SongPosition(pos) => write!(f, "song_position pos={}", pos),
                SystemCommon::SongSelect(song) => write!(f, "song_select song={}", song),
                SystemCommon::TuneRequest => f.write_str("tune_request"),
                SystemCommon::SysExEnd => f.write_str("end_of_exclusive"),
            },
            Ok(LiveEvent::RealTime(rt)) => f.write_str(match rt {
                RealTimeMessage::Tick => "tick",
                RealTimeMessage::Start => "start",
                RealTimeMessage::Continue => "continue",
                RealTimeMessage::Stop => "stop",
                RealTimeMessage::ActiveSensing => "active_sensing",
                RealTimeMessage::Reset => "reset",
            }),
            Ok(LiveEvent::Undefined(_)) | Err(_) => {
                f.write_str("raw [")?;
                for (i, byte) in self.as_bytes().iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{:02x}", byte)?;
                }
                f.write_str("]")
            }
        }
    }
}
