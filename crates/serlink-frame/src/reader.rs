use std::io::{ErrorKind, Read};

use bytes::{Buf, BytesMut};
use serlink_message::Message;
use tracing::debug;

use crate::error::{FrameError, Result};
use crate::parser::Parser;

const INITIAL_BUFFER_CAPACITY: usize = 256;
const READ_CHUNK_SIZE: usize = 256;

/// Reads complete decoded messages from any `Read` stream.
///
/// Handles partial reads internally — callers always get whole messages.
/// Received bytes are staged and drained one at a time through an internal
/// [`Parser`], so the reader inherits its noise tolerance and
/// resynchronization behavior.
pub struct FrameReader<T> {
    inner: T,
    parser: Parser,
    staged: BytesMut,
}

impl<T: Read> FrameReader<T> {
    /// Create a frame reader over `inner`.
    pub fn new(inner: T) -> Self {
        Self {
            inner,
            parser: Parser::new(),
            staged: BytesMut::with_capacity(INITIAL_BUFFER_CAPACITY),
        }
    }

    /// Read the next decoded message (blocking).
    ///
    /// Framing errors propagate but leave the reader usable: the parser has
    /// already resynchronized, and the next call continues draining the
    /// stream from where the rejected frame ended. Returns
    /// `Err(FrameError::ConnectionClosed)` when EOF is reached.
    pub fn read_message(&mut self) -> Result<Message> {
        loop {
            while self.staged.has_remaining() {
                let byte = self.staged.get_u8();
                match self.parser.feed(byte) {
                    Ok(Some(message)) => return Ok(message),
                    Ok(None) => {}
                    Err(err) => {
                        debug!(error = %err, "rejected frame on stream");
                        return Err(err);
                    }
                }
            }

            let mut chunk = [0u8; READ_CHUNK_SIZE];
            let read = match self.inner.read(&mut chunk) {
                Ok(n) => n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(FrameError::Io(err)),
            };

            if read == 0 {
                return Err(FrameError::ConnectionClosed);
            }

            self.staged.extend_from_slice(&chunk[..read]);
        }
    }

    /// Borrow the underlying stream.
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Mutably borrow the underlying stream.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Consume the reader and return the inner stream.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use serlink_message::{Heartbeat, Request, Response};

    use super::*;
    use crate::codec::{encode_frame, START_BYTE};

    fn wire_of(messages: &[Message]) -> Vec<u8> {
        let mut buf = BytesMut::new();
        for msg in messages {
            encode_frame(msg, &mut buf);
        }
        buf.to_vec()
    }

    #[test]
    fn read_single_message() {
        let wire = wire_of(&[Message::from(Heartbeat { count: 11 })]);
        let mut reader = FrameReader::new(Cursor::new(wire));

        let msg = reader.read_message().unwrap();
        assert_eq!(msg.as_heartbeat().unwrap().count, 11);
    }

    #[test]
    fn read_multiple_messages() {
        let wire = wire_of(&[
            Message::from(Request { a: 1, b: 2 }),
            Message::from(Response { a: 1, b: 2, c: 3 }),
            Message::from(Heartbeat { count: 3 }),
        ]);
        let mut reader = FrameReader::new(Cursor::new(wire));

        assert_eq!(reader.read_message().unwrap().name(), "Request");
        assert_eq!(reader.read_message().unwrap().name(), "Response");
        assert_eq!(reader.read_message().unwrap().name(), "Heartbeat");
    }

    #[test]
    fn byte_at_a_time_stream() {
        let wire = wire_of(&[Message::from(Request { a: 5, b: -3 })]);
        let mut reader = FrameReader::new(ByteByByteReader {
            bytes: wire,
            pos: 0,
        });

        let msg = reader.read_message().unwrap();
        let request = msg.as_request().unwrap();
        assert_eq!((request.a, request.b), (5, -3));
    }

    #[test]
    fn noise_between_frames_is_skipped() {
        let mut wire = vec![0x00, 0x13, 0x37];
        wire.extend_from_slice(&wire_of(&[Message::from(Heartbeat { count: 1 })]));
        wire.extend_from_slice(&[0xFE, 0xFD]);
        wire.extend_from_slice(&wire_of(&[Message::from(Heartbeat { count: 2 })]));

        let mut reader = FrameReader::new(Cursor::new(wire));
        assert_eq!(reader.read_message().unwrap().as_heartbeat().unwrap().count, 1);
        assert_eq!(reader.read_message().unwrap().as_heartbeat().unwrap().count, 2);
    }

    #[test]
    fn reader_survives_a_corrupt_frame() {
        let mut wire = wire_of(&[Message::from(Heartbeat { count: 1 })]);
        let crc_index = wire.len() - 1;
        wire[crc_index] ^= 0x55;
        wire.extend_from_slice(&wire_of(&[Message::from(Heartbeat { count: 2 })]));

        let mut reader = FrameReader::new(Cursor::new(wire));

        let err = reader.read_message().unwrap_err();
        assert!(matches!(err, FrameError::ChecksumMismatch { .. }));

        let msg = reader.read_message().unwrap();
        assert_eq!(msg.as_heartbeat().unwrap().count, 2);
    }

    #[test]
    fn unknown_id_then_resync() {
        let mut wire = vec![START_BYTE, 0xFF];
        wire.extend_from_slice(&wire_of(&[Message::from(Request { a: 4, b: 4 })]));

        let mut reader = FrameReader::new(Cursor::new(wire));
        assert!(matches!(
            reader.read_message().unwrap_err(),
            FrameError::UnknownMessageId(0xFF)
        ));
        assert_eq!(reader.read_message().unwrap().as_request().unwrap().a, 4);
    }

    #[test]
    fn connection_closed_cleanly() {
        let mut reader = FrameReader::new(Cursor::new(Vec::<u8>::new()));
        let err = reader.read_message().unwrap_err();
        assert!(matches!(err, FrameError::ConnectionClosed));
    }

    #[test]
    fn connection_closed_mid_frame() {
        let mut wire = wire_of(&[Message::from(Response { a: 1, b: 2, c: 3 })]);
        wire.truncate(6);

        let mut reader = FrameReader::new(Cursor::new(wire));
        let err = reader.read_message().unwrap_err();
        assert!(matches!(err, FrameError::ConnectionClosed));
    }

    #[test]
    fn interrupted_read_retries() {
        let wire = wire_of(&[Message::from(Heartbeat { count: 8 })]);
        let mut reader = FrameReader::new(InterruptedThenData {
            interrupted: false,
            bytes: wire,
            pos: 0,
        });

        let msg = reader.read_message().unwrap();
        assert_eq!(msg.as_heartbeat().unwrap().count, 8);
    }

    #[test]
    fn accessors_and_into_inner() {
        let cursor = Cursor::new(Vec::<u8>::new());
        let mut reader = FrameReader::new(cursor);

        let _ = reader.get_ref();
        let _ = reader.get_mut();
        let _inner = reader.into_inner();
    }

    struct ByteByByteReader {
        bytes: Vec<u8>,
        pos: usize,
    }

    impl Read for ByteByByteReader {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            if self.pos >= self.bytes.len() || buf.is_empty() {
                return Ok(0);
            }
            buf[0] = self.bytes[self.pos];
            self.pos += 1;
            Ok(1)
        }
    }

    struct InterruptedThenData {
        interrupted: bool,
        bytes: Vec<u8>,
        pos: usize,
    }

    impl Read for InterruptedThenData {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            if !self.interrupted {
                self.interrupted = true;
                return Err(std::io::Error::from(ErrorKind::Interrupted));
            }
            if self.pos >= self.bytes.len() {
                return Ok(0);
            }
            let n = (self.bytes.len() - self.pos).min(buf.len());
            buf[..n].copy_from_slice(&self.bytes[self.pos..self.pos + n]);
            self.pos += n;
            Ok(n)
        }
    }
}
