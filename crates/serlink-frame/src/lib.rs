//! Checksum-protected framing for small typed messages over an unreliable
//! byte stream.
//!
//! This is the core value-add layer of serlink. Every message is framed with:
//! - A 1-byte start marker (`0xA5`) for stream synchronization
//! - The registered message ID and its fixed payload length
//! - A trailing CRC-8 over everything before it
//!
//! The parser works one byte at a time with a fixed scratch buffer, so it can
//! be driven from an interrupt- or poll-based reader, tolerates line noise,
//! and never allocates mid-frame.

pub mod codec;
pub mod crc;
pub mod error;
pub mod parser;
pub mod reader;
pub mod writer;

pub use codec::{
    encode_frame, encode_into, encode_to_bytes, wire_size, FRAME_OVERHEAD, START_BYTE,
};
pub use error::{FrameError, Result};
pub use parser::Parser;
pub use reader::FrameReader;
pub use writer::FrameWriter;
