//! Protocol-level error types.

use thiserror::Error;

/// Errors from interpreting the command byte of a frame.
///
/// Note that frame structure problems (bad sentinel, bad checksum, short
/// input) are not errors: [`crate::Frame::decode`] reports them as absence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ProtocolError {
    /// The byte is not a defined host-to-device command code.
    #[error("unknown command code 0x{0:02X}")]
    UnknownCommand(u8),

    /// The byte is not a defined device-to-host response code.
    #[error("unknown response code 0x{0:02X}")]
    UnknownResponse(u8),
}
