//! Fixed table mapping message IDs to decoders.
//!
//! The table is a `const`, closed at compile time. Adding a message type
//! means adding a payload struct, a [`Message`] variant, and one table entry
//! here; everything else (scratch buffer sizing, lookup) follows from it.

use crate::envelope::Message;
use crate::payload::{Heartbeat, Payload, Request, Response};

/// Wire-level description of one registered message type.
#[derive(Debug)]
pub struct Descriptor {
    /// Registered message ID.
    pub id: u8,
    /// Human-readable type name.
    pub name: &'static str,
    /// Fixed encoded payload size in bytes.
    pub payload_size: u8,
    decode_fn: fn(&[u8]) -> Message,
}

impl Descriptor {
    /// Decode a payload of exactly `payload_size` bytes into a message.
    pub fn decode(&self, payload: &[u8]) -> Message {
        (self.decode_fn)(payload)
    }
}

fn decode_heartbeat(src: &[u8]) -> Message {
    Message::Heartbeat(Heartbeat::read_fields(src))
}

fn decode_request(src: &[u8]) -> Message {
    Message::Request(Request::read_fields(src))
}

fn decode_response(src: &[u8]) -> Message {
    Message::Response(Response::read_fields(src))
}

const TABLE: [Descriptor; 3] = [
    Descriptor {
        id: Heartbeat::ID,
        name: "Heartbeat",
        payload_size: Heartbeat::SIZE,
        decode_fn: decode_heartbeat,
    },
    Descriptor {
        id: Request::ID,
        name: "Request",
        payload_size: Request::SIZE,
        decode_fn: decode_request,
    },
    Descriptor {
        id: Response::ID,
        name: "Response",
        payload_size: Response::SIZE,
        decode_fn: decode_response,
    },
];

static DESCRIPTORS: [Descriptor; 3] = TABLE;

/// Largest fixed payload size across all registered types.
///
/// Parser scratch buffers are sized to this, which is what keeps parsing
/// allocation-free regardless of which message arrives.
pub const MAX_PAYLOAD_SIZE: usize = {
    let mut max = 0usize;
    let mut i = 0;
    while i < TABLE.len() {
        if TABLE[i].payload_size as usize > max {
            max = TABLE[i].payload_size as usize;
        }
        i += 1;
    }
    max
};

/// Look up the descriptor for a message ID.
pub fn descriptor(id: u8) -> Option<&'static Descriptor> {
    DESCRIPTORS.iter().find(|d| d.id == id)
}

/// Whether `id` names a registered message type.
pub fn is_registered(id: u8) -> bool {
    descriptor(id).is_some()
}

/// Registered message IDs, in declaration order.
pub fn ids() -> impl Iterator<Item = u8> {
    DESCRIPTORS.iter().map(|d| d.id)
}

/// All registered descriptors, in declaration order.
pub fn descriptors() -> &'static [Descriptor] {
    &DESCRIPTORS
}
