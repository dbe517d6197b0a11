//! Command and response codes carried in the frame's command byte.
//!
//! Host-to-device codes and device-to-host codes live in disjoint ranges
//! but share the wire field. The codec itself never validates codes; these
//! enums exist for callers that want typed construction and readable
//! reporting.

use std::fmt;

use crate::errors::ProtocolError;

/// Host-to-device command codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Command {
    /// Switch animation program (0-9).
    SetProgram = 0x01,
    /// Set tempo; the byte maps to 60-180 BPM (see [`crate::mapping::bpm`]).
    SetBpm = 0x02,
    /// Set animation intensity (0-255 maps to 0.0-1.0).
    SetIntensity = 0x03,
    /// Set base hue (0-255 maps to 0.0-1.0).
    SetHue = 0x04,
    /// Set LED brightness (0-255).
    SetBrightness = 0x05,
    /// Trigger a flash effect; the value byte is ignored.
    TriggerFlash = 0x06,
    /// Trigger a ripple at a position (0-255 maps to an LED index).
    TriggerRipple = 0x07,
    /// Ping/keepalive; the device answers with PONG.
    Ping = 0x10,
    /// Reset the portal to its default state.
    Reset = 0x11,
}

impl Command {
    /// Canonical wire name, for operator-facing output.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SetProgram => "SET_PROGRAM",
            Self::SetBpm => "SET_BPM",
            Self::SetIntensity => "SET_INTENSITY",
            Self::SetHue => "SET_HUE",
            Self::SetBrightness => "SET_BRIGHTNESS",
            Self::TriggerFlash => "TRIGGER_FLASH",
            Self::TriggerRipple => "TRIGGER_RIPPLE",
            Self::Ping => "PING",
            Self::Reset => "RESET",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Command> for u8 {
    fn from(command: Command) -> Self {
        command as Self
    }
}

impl TryFrom<u8> for Command {
    type Error = ProtocolError;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        match byte {
            0x01 => Ok(Self::SetProgram),
            0x02 => Ok(Self::SetBpm),
            0x03 => Ok(Self::SetIntensity),
            0x04 => Ok(Self::SetHue),
            0x05 => Ok(Self::SetBrightness),
            0x06 => Ok(Self::TriggerFlash),
            0x07 => Ok(Self::TriggerRipple),
            0x10 => Ok(Self::Ping),
            0x11 => Ok(Self::Reset),
            other => Err(ProtocolError::UnknownCommand(other)),
        }
    }
}

/// Device-to-host response codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Response {
    /// Answer to [`Command::Ping`].
    Pong = 0x20,
    /// Command acknowledged.
    Ack = 0x21,
    /// Command rejected or invalid.
    Nak = 0x22,
    /// Status report.
    Status = 0x23,
}

impl Response {
    /// Canonical wire name, for operator-facing output.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pong => "PONG",
            Self::Ack => "ACK",
            Self::Nak => "NAK",
            Self::Status => "STATUS",
        }
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Response> for u8 {
    fn from(response: Response) -> Self {
        response as Self
    }
}

impl TryFrom<u8> for Response {
    type Error = ProtocolError;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        match byte {
            0x20 => Ok(Self::Pong),
            0x21 => Ok(Self::Ack),
            0x22 => Ok(Self::Nak),
            0x23 => Ok(Self::Status),
            other => Err(ProtocolError::UnknownResponse(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_codes_round_trip() {
        for command in [
            Command::SetProgram,
            Command::SetBpm,
            Command::SetIntensity,
            Command::SetHue,
            Command::SetBrightness,
            Command::TriggerFlash,
            Command::TriggerRipple,
            Command::Ping,
            Command::Reset,
        ] {
            assert_eq!(Command::try_from(u8::from(command)), Ok(command));
        }
    }

    #[test]
    fn response_codes_round_trip() {
        for response in [Response::Pong, Response::Ack, Response::Nak, Response::Status] {
            assert_eq!(Response::try_from(u8::from(response)), Ok(response));
        }
    }

    #[test]
    fn unknown_bytes_are_rejected() {
        assert_eq!(Command::try_from(0x20), Err(ProtocolError::UnknownCommand(0x20)));
        assert_eq!(Response::try_from(0x10), Err(ProtocolError::UnknownResponse(0x10)));
        assert_eq!(Command::try_from(0xFF), Err(ProtocolError::UnknownCommand(0xFF)));
    }

    #[test]
    fn names_match_wire_spec() {
        assert_eq!(Command::Ping.to_string(), "PING");
        assert_eq!(Command::SetBpm.to_string(), "SET_BPM");
        assert_eq!(Response::Nak.to_string(), "NAK");
    }
}
