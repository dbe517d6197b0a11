//! Serial link layer for the Mystery Melody Machine portal.
//!
//! Owns the one serial connection to the device and moves frames across
//! it: blocking writes, then a bounded read for the optional 5-byte
//! response. Strictly sequential; at most one request is outstanding and
//! the read timeout is the only bounded wait.
//!
//! The client is generic over `io::Read + io::Write` so protocol behavior
//! is testable against in-memory transports; production hands it the port
//! from [`open`].
#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod client;
pub mod error;
pub mod port;

pub use client::PortalClient;
pub use error::LinkError;
pub use port::open;
