//! Frame-level client over a byte transport.

use std::io::{ErrorKind, Read, Write};

use portal_proto::{Command, FRAME_LEN, Frame};
use tracing::{debug, trace};

use crate::error::LinkError;

/// Sends command frames and reads response frames over one transport.
///
/// Every operation is blocking and sequential. Reads are bounded by the
/// transport's own timeout; an expired timeout is not a link error, it
/// just ends the read with whatever bytes arrived.
pub struct PortalClient<T> {
    transport: T,
}

impl<T: Read + Write> PortalClient<T> {
    /// Wrap an open transport.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Encode and send one command frame, then flush.
    pub fn send(&mut self, command: Command, value: u8) -> Result<(), LinkError> {
        self.send_raw(command.into(), value)
    }

    /// Send a frame with an arbitrary command byte.
    ///
    /// The codec is total over byte pairs; this exists for probing the
    /// device with codes outside the defined set.
    pub fn send_raw(&mut self, command: u8, value: u8) -> Result<(), LinkError> {
        let bytes = Frame::new(command, value).encode();
        self.transport.write_all(&bytes)?;
        self.transport.flush()?;
        debug!(command = format_args!("0x{command:02X}"), value, "frame sent");
        Ok(())
    }

    /// Read one response frame, if the device sent one in time.
    ///
    /// Gathers at most 5 bytes; a timeout or end-of-stream ends the
    /// gather early and whatever arrived goes through the decoder, so a
    /// short or corrupt read comes back as `Ok(None)`. No
    /// resynchronization is attempted: if the stream is mid-frame the
    /// bytes are dropped with the failed decode.
    pub fn read_response(&mut self) -> Result<Option<Frame>, LinkError> {
        let mut buf = [0_u8; FRAME_LEN];
        let mut filled = 0;
        while filled < FRAME_LEN {
            match self.transport.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(err) if err.kind() == ErrorKind::TimedOut => break,
                Err(err) if err.kind() == ErrorKind::Interrupted => {}
                Err(err) => return Err(err.into()),
            }
        }
        trace!(filled, "response read finished");
        let frame = Frame::decode(&buf[..filled]);
        if let Some(frame) = frame {
            debug!(
                command = format_args!("0x{:02X}", frame.command),
                value = frame.value,
                "frame received"
            );
        }
        Ok(frame)
    }

    /// Send one command and wait for its response frame.
    pub fn request(&mut self, command: Command, value: u8) -> Result<Option<Frame>, LinkError> {
        self.send(command, value)?;
        self.read_response()
    }

    /// Give back the underlying transport.
    pub fn into_inner(self) -> T {
        self.transport
    }
}
