use bytes::{Buf, BufMut};

/// A fixed-size typed payload that can be carried in a serlink frame.
///
/// Implementations declare their registered ID and encoded size up front and
/// read/write their fields in declaration order, little-endian. There are no
/// variable-length fields; `read_fields` is only ever called with exactly
/// `SIZE` bytes (the registry and parser enforce this before decoding).
pub trait Payload: Sized {
    /// Registered message ID.
    const ID: u8;

    /// Encoded payload size in bytes.
    const SIZE: u8;

    /// Append the raw field bytes to `dst`.
    fn write_fields<B: BufMut>(&self, dst: &mut B);

    /// Rebuild the payload from exactly [`Self::SIZE`] bytes.
    fn read_fields(src: &[u8]) -> Self;
}

/// Periodic liveness counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Heartbeat {
    pub count: u32,
}

impl Payload for Heartbeat {
    const ID: u8 = 0;
    const SIZE: u8 = 4;

    fn write_fields<B: BufMut>(&self, dst: &mut B) {
        dst.put_u32_le(self.count);
    }

    fn read_fields(mut src: &[u8]) -> Self {
        Self {
            count: src.get_u32_le(),
        }
    }
}

/// Two operands submitted to the peer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Request {
    pub a: i32,
    pub b: i32,
}

impl Payload for Request {
    const ID: u8 = 1;
    const SIZE: u8 = 8;

    fn write_fields<B: BufMut>(&self, dst: &mut B) {
        dst.put_i32_le(self.a);
        dst.put_i32_le(self.b);
    }

    fn read_fields(mut src: &[u8]) -> Self {
        Self {
            a: src.get_i32_le(),
            b: src.get_i32_le(),
        }
    }
}

/// The peer's answer: the original operands plus the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Response {
    pub a: i32,
    pub b: i32,
    pub c: i32,
}

impl Payload for Response {
    const ID: u8 = 2;
    const SIZE: u8 = 12;

    fn write_fields<B: BufMut>(&self, dst: &mut B) {
        dst.put_i32_le(self.a);
        dst.put_i32_le(self.b);
        dst.put_i32_le(self.c);
    }

    fn read_fields(mut src: &[u8]) -> Self {
        Self {
            a: src.get_i32_le(),
            b: src.get_i32_le(),
            c: src.get_i32_le(),
        }
    }
}
