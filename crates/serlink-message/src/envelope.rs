use bytes::BufMut;

use crate::error::MessageError;
use crate::payload::{Heartbeat, Payload, Request, Response};

/// A decoded message: tag plus typed payload.
///
/// Produced fresh by the parser for each validated frame; the caller owns it
/// from that point. Payload access goes through the checked `as_*` accessors
/// so a wrong-variant read is an error, never a reinterpretation of memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Heartbeat(Heartbeat),
    Request(Request),
    Response(Response),
}

impl Message {
    /// The registered ID of this message's type.
    pub fn id(&self) -> u8 {
        match self {
            Message::Heartbeat(_) => Heartbeat::ID,
            Message::Request(_) => Request::ID,
            Message::Response(_) => Response::ID,
        }
    }

    /// Human-readable type name.
    pub fn name(&self) -> &'static str {
        match self {
            Message::Heartbeat(_) => "Heartbeat",
            Message::Request(_) => "Request",
            Message::Response(_) => "Response",
        }
    }

    /// Fixed encoded size of this message's payload.
    pub fn payload_size(&self) -> u8 {
        match self {
            Message::Heartbeat(_) => Heartbeat::SIZE,
            Message::Request(_) => Request::SIZE,
            Message::Response(_) => Response::SIZE,
        }
    }

    /// Append this message's raw field bytes to `dst`.
    pub fn write_fields<B: BufMut>(&self, dst: &mut B) {
        match self {
            Message::Heartbeat(p) => p.write_fields(dst),
            Message::Request(p) => p.write_fields(dst),
            Message::Response(p) => p.write_fields(dst),
        }
    }

    /// View the payload as a [`Heartbeat`].
    pub fn as_heartbeat(&self) -> Result<&Heartbeat, MessageError> {
        match self {
            Message::Heartbeat(p) => Ok(p),
            other => Err(wrong_variant("Heartbeat", other)),
        }
    }

    /// View the payload as a [`Request`].
    pub fn as_request(&self) -> Result<&Request, MessageError> {
        match self {
            Message::Request(p) => Ok(p),
            other => Err(wrong_variant("Request", other)),
        }
    }

    /// View the payload as a [`Response`].
    pub fn as_response(&self) -> Result<&Response, MessageError> {
        match self {
            Message::Response(p) => Ok(p),
            other => Err(wrong_variant("Response", other)),
        }
    }
}

fn wrong_variant(expected: &'static str, actual: &Message) -> MessageError {
    MessageError::WrongVariant {
        expected,
        actual: actual.name(),
    }
}

impl From<Heartbeat> for Message {
    fn from(payload: Heartbeat) -> Self {
        Message::Heartbeat(payload)
    }
}

impl From<Request> for Message {
    fn from(payload: Request) -> Self {
        Message::Request(payload)
    }
}

impl From<Response> for Message {
    fn from(payload: Response) -> Self {
        Message::Response(payload)
    }
}
