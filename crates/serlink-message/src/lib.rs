//! Typed message set and fixed registry for the serlink wire protocol.
//!
//! Every message that can travel over a serlink connection is declared here:
//! - A payload struct implementing [`Payload`] (fixed ID, fixed size, raw
//!   little-endian field layout)
//! - A [`registry`] entry mapping its ID to a decoder
//! - A variant of the [`Message`] envelope the parser hands back
//!
//! The registry is a `const` table, closed at compile time. Parser buffers
//! are sized from [`registry::MAX_PAYLOAD_SIZE`], so no runtime registration
//! is possible.

pub mod envelope;
pub mod error;
pub mod payload;
pub mod registry;

pub use envelope::Message;
pub use error::{MessageError, Result};
pub use payload::{Heartbeat, Payload, Request, Response};
pub use registry::{descriptor, Descriptor, MAX_PAYLOAD_SIZE};
