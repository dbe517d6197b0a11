//! Serial port construction.

use std::time::Duration;

use serialport::SerialPort;
use tracing::info;

use crate::error::LinkError;

/// Open a serial port at the given baud rate with a per-read timeout.
///
/// 8N1 framing, the `serialport` defaults, which is what the device
/// firmware expects. A read on the returned port waits at most `timeout`
/// before reporting whatever arrived.
pub fn open(
    path: &str,
    baud_rate: u32,
    timeout: Duration,
) -> Result<Box<dyn SerialPort>, LinkError> {
    let port = serialport::new(path, baud_rate).timeout(timeout).open()?;
    info!(path, baud_rate, "serial port open");
    Ok(port)
}
