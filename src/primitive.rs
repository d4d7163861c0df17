//! Exotically-sized integers used by the MIDI wire format.
//! Each one masks off its extra bits on construction, so a value always fits its width.

use crate::prelude::*;

macro_rules! restricted_int {
    {$(#[$attr:meta])* $name:ident : $inner:ident => $bits:expr} => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
        #[repr(transparent)]
        #[allow(non_camel_case_types)]
        pub struct $name($inner);
        impl $name {
            const MASK: $inner = (1 << $bits) - 1;

            /// The largest value that fits in this width.
            #[inline]
            pub const fn max_value() -> $name {
                $name(Self::MASK)
            }

            /// Mask `raw` down to this width, dropping the top bits.
            #[inline]
            pub const fn new(raw: $inner) -> $name {
                $name(raw & Self::MASK)
            }

            /// `None` if `raw` does not fit in this width.
            #[inline]
            pub fn try_from(raw: $inner) -> Option<$name> {
                Some($name(raw)).filter(|_| raw <= Self::MASK)
            }

            /// The wrapped integer, always within range.
            #[inline]
            pub const fn as_int(self) -> $inner {
                self.0
            }
        }
        /// Deserializes the plain integer, masking it like `new`.
        #[cfg(feature = "serde")]
        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(de: D) -> StdResult<$name, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                <$inner as serde::Deserialize>::deserialize(de).map($name::new)
            }
        }
        impl fmt::Display for $name {
            #[inline]
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

restricted_int! {
    /// A 14-bit integer type, as carried by a pair of data bytes.
    ///
    /// Wraps the `u16` type and ensures that the top two bits are always zero.
    u14: u16 => 14
}
restricted_int! {
    /// A 7-bit integer type, the payload of a single data byte.
    ///
    /// Wraps the `u8` type and ensures that the top bit is always zero.
    u7: u8 => 7
}
restricted_int! {
    /// A 4-bit integer type, used for MIDI channels.
    ///
    /// Wraps the `u8` type and ensures that the top 4 bits are always zero.
    u4: u8 => 4
}

impl u14 {
    /// Join two data bytes into a 14-bit value.
    ///
    /// MIDI sends the least significant 7 bits first, so `lsb` is the first data byte and `msb`
    /// the second.
    #[inline]
    pub const fn from_data(lsb: u7, msb: u7) -> u14 {
        u14((msb.0 as u16) << 7 | lsb.0 as u16)
    }

    /// Split this value into its `(lsb, msb)` data bytes, in wire order.
    #[inline]
    pub const fn to_data(self) -> (u7, u7) {
        (u7(self.0 as u8 & 0x7F), u7((self.0 >> 7) as u8))
    }
}
