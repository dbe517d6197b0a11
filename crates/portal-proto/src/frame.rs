//! The fixed 5-byte portal frame and its codec.

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned};

/// Start-of-frame sentinel.
pub const START_BYTE: u8 = 0xAA;

/// End-of-frame sentinel.
pub const END_BYTE: u8 = 0x55;

/// Total frame size on the wire.
pub const FRAME_LEN: usize = 5;

/// On-wire layout of a portal frame.
///
/// Field order matches the wire exactly; `zerocopy` verifies the layout at
/// compile time so decoding is a reinterpretation, not a parse loop.
#[derive(FromBytes, IntoBytes, Immutable, KnownLayout, Unaligned)]
#[repr(C)]
struct RawFrame {
    start: u8,
    command: u8,
    value: u8,
    checksum: u8,
    end: u8,
}

impl RawFrame {
    fn is_valid(&self) -> bool {
        self.start == START_BYTE
            && self.end == END_BYTE
            && self.checksum == checksum(self.command, self.value)
    }
}

/// XOR checksum over the two data bytes.
#[inline]
pub fn checksum(command: u8, value: u8) -> u8 {
    command ^ value
}

/// A decoded portal frame: one command byte and one value byte.
///
/// Frames are transient; one is constructed for a single send or receive
/// and discarded. The command byte is kept raw because response codes and
/// command codes share the wire field, and the codec deliberately does not
/// validate code assignments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    /// Command or response code (see [`crate::command`]).
    pub command: u8,
    /// Command-specific parameter, 0-255.
    pub value: u8,
}

impl Frame {
    /// Build a frame from a raw command byte and value.
    #[must_use]
    pub const fn new(command: u8, value: u8) -> Self {
        Self { command, value }
    }

    /// Encode as the 5-byte wire representation.
    ///
    /// Total over all byte inputs; the codec does not check that `command`
    /// is a defined code.
    #[must_use]
    pub const fn encode(self) -> [u8; FRAME_LEN] {
        [
            START_BYTE,
            self.command,
            self.value,
            self.command ^ self.value,
            END_BYTE,
        ]
    }

    /// Decode a frame from the first 5 bytes of `bytes`.
    ///
    /// Returns `None` if fewer than 5 bytes are available, a sentinel is
    /// wrong, or the checksum does not verify. Trailing bytes are ignored.
    ///
    /// Each call is independent: there is no scan for the next start
    /// sentinel after a corrupt frame. A corrupt or short read yields
    /// `None` and the caller decides what to do next.
    #[must_use]
    pub fn decode(bytes: &[u8]) -> Option<Self> {
        let (raw, _rest) = RawFrame::ref_from_prefix(bytes).ok()?;
        raw.is_valid().then_some(Self { command: raw.command, value: raw.value })
    }
}
