use serlink_message::registry::{self, Descriptor, MAX_PAYLOAD_SIZE};
use serlink_message::Message;
use tracing::trace;

use crate::codec::START_BYTE;
use crate::crc;
use crate::error::{FrameError, Result};

/// Where the parser is within the current frame.
///
/// States past `GotStart` carry the descriptor resolved from the ID byte, so
/// later transitions never have to re-validate it.
#[derive(Debug, Clone, Copy)]
enum ParseState {
    Idle,
    GotStart,
    GotId(&'static Descriptor),
    GotLength {
        descriptor: &'static Descriptor,
        received: usize,
    },
    AwaitChecksum(&'static Descriptor),
}

/// Incremental frame parser: byte in, optional decoded message out.
///
/// Feed it one byte at a time as they arrive off the wire. Bytes outside a
/// frame are ignored until a start marker appears, so the parser
/// self-synchronizes after noise or a corrupted frame without outside help.
/// Memory use is fixed at construction: the scratch buffer is sized to the
/// registry's maximum payload size and nothing is allocated per frame.
///
/// One parser serves exactly one byte stream. It is a sequential automaton
/// and requires external synchronization to share across threads;
/// independent instances are fully independent.
pub struct Parser {
    state: ParseState,
    scratch: [u8; MAX_PAYLOAD_SIZE],
    checksum: u8,
}

impl Parser {
    /// Create a parser in its resting state.
    pub fn new() -> Self {
        Self {
            state: ParseState::Idle,
            scratch: [0; MAX_PAYLOAD_SIZE],
            checksum: 0,
        }
    }

    /// Discard any in-progress frame and return to the resting state.
    ///
    /// Called internally after every completed or rejected frame; callers
    /// only need it to abandon a stream midway.
    pub fn reset(&mut self) {
        self.state = ParseState::Idle;
        self.checksum = 0;
    }

    /// Consume one received byte.
    ///
    /// Returns `Ok(Some(message))` when this byte completes a valid frame,
    /// `Ok(None)` while a frame is still in progress (or the byte was
    /// inter-frame noise), and an error when it completes or invalidates a
    /// frame. After any of the three the parser is ready for the next byte;
    /// errors are local to the frame they reject.
    ///
    /// Validation happens at the earliest byte where it is possible: an
    /// unregistered ID is rejected the moment the ID byte arrives, and a
    /// length that is oversized or inconsistent with the registered type is
    /// rejected the moment the length byte arrives. No payload byte is ever
    /// stored without a validated length, which is what bounds the scratch
    /// buffer writes.
    pub fn feed(&mut self, byte: u8) -> Result<Option<Message>> {
        match self.state {
            ParseState::Idle => {
                if byte == START_BYTE {
                    self.checksum = crc::update(0, byte);
                    self.state = ParseState::GotStart;
                }
                Ok(None)
            }
            ParseState::GotStart => {
                self.checksum = crc::update(self.checksum, byte);
                match registry::descriptor(byte) {
                    Some(descriptor) => {
                        self.state = ParseState::GotId(descriptor);
                        Ok(None)
                    }
                    None => {
                        self.reset();
                        Err(FrameError::UnknownMessageId(byte))
                    }
                }
            }
            ParseState::GotId(descriptor) => {
                self.checksum = crc::update(self.checksum, byte);
                if usize::from(byte) > MAX_PAYLOAD_SIZE {
                    self.reset();
                    return Err(FrameError::PayloadTooLarge {
                        declared: byte,
                        max: MAX_PAYLOAD_SIZE,
                    });
                }
                if byte != descriptor.payload_size {
                    self.reset();
                    return Err(FrameError::LengthMismatch {
                        id: descriptor.id,
                        declared: byte,
                        expected: descriptor.payload_size,
                    });
                }
                self.state = if byte == 0 {
                    ParseState::AwaitChecksum(descriptor)
                } else {
                    ParseState::GotLength {
                        descriptor,
                        received: 0,
                    }
                };
                Ok(None)
            }
            ParseState::GotLength {
                descriptor,
                received,
            } => {
                self.scratch[received] = byte;
                self.checksum = crc::update(self.checksum, byte);
                let received = received + 1;
                self.state = if received == usize::from(descriptor.payload_size) {
                    ParseState::AwaitChecksum(descriptor)
                } else {
                    ParseState::GotLength {
                        descriptor,
                        received,
                    }
                };
                Ok(None)
            }
            ParseState::AwaitChecksum(descriptor) => {
                let expected = self.checksum;
                self.reset();
                if byte == expected {
                    let payload = &self.scratch[..usize::from(descriptor.payload_size)];
                    trace!(id = descriptor.id, name = descriptor.name, "frame complete");
                    Ok(Some(descriptor.decode(payload)))
                } else {
                    trace!(expected, actual = byte, "dropping frame on checksum mismatch");
                    Err(FrameError::ChecksumMismatch {
                        expected,
                        actual: byte,
                    })
                }
            }
        }
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}
