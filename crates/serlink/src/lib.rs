//! Checksum-framed typed messaging for point-to-point byte streams.
//!
//! serlink exchanges small, strongly-typed messages over an unreliable byte
//! stream — typically a serial link between a microcontroller and a host
//! process. Frames carry a start marker, message ID, fixed payload, and a
//! trailing CRC-8; the parser reassembles them one byte at a time with
//! fixed, allocation-free memory.
//!
//! # Crate Structure
//!
//! - [`message`] — Payload types, fixed registry, tagged message envelope
//! - [`frame`] — Frame encoder, incremental parser, stream reader/writer

/// Re-export message types.
pub mod message {
    pub use serlink_message::*;
}

/// Re-export frame types.
pub mod frame {
    pub use serlink_frame::*;
}
