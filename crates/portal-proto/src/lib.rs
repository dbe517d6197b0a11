//! Wire format for the Mystery Melody Machine serial portal protocol.
//!
//! Frames are a fixed 5 bytes: a start sentinel, a command byte, a value
//! byte, an XOR checksum over (command, value), and an end sentinel. There
//! is no length field, no escaping, and no multi-frame sequencing; one
//! (command, value) pair exhausts a frame's information content.
//!
//! Parsing uses compile-time verified layouts via `zerocopy`. A frame is
//! either structurally valid or absent; there is no partial result.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod command;
pub mod errors;
pub mod frame;
pub mod mapping;

pub use command::{Command, Response};
pub use errors::ProtocolError;
pub use frame::{END_BYTE, FRAME_LEN, Frame, START_BYTE};
