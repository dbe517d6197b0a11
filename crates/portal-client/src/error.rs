//! Transport-level error types.

use std::io;

use thiserror::Error;

/// A fault in the serial transport itself.
///
/// Malformed or missing response frames are not link errors; they surface
/// as `Ok(None)` from the read path and the caller reports them per step.
/// A `LinkError` means the session cannot usefully continue.
#[derive(Debug, Error)]
pub enum LinkError {
    /// The port could not be opened or configured.
    #[error("serial port error: {0}")]
    Serial(#[from] serialport::Error),

    /// A read or write on the open port failed.
    #[error("serial I/O error: {0}")]
    Io(#[from] io::Error),
}
