use bytes::{BufMut, Bytes, BytesMut};
use serlink_message::Message;

use crate::crc;
use crate::error::{FrameError, Result};

/// Frame start marker.
pub const START_BYTE: u8 = 0xA5;

/// Bytes a frame adds around its payload: start + id + length + checksum.
pub const FRAME_OVERHEAD: usize = 4;

/// Total wire size of the frame carrying `msg`.
pub fn wire_size(msg: &Message) -> usize {
    FRAME_OVERHEAD + usize::from(msg.payload_size())
}

/// Encode a message into the wire format, appending to `dst`.
///
/// Wire format:
/// ```text
/// ┌────────────┬─────────┬──────────┬─────────────────┬──────────┐
/// │ Start (1B) │ ID (1B) │ Len (1B) │ Payload          │ CRC (1B) │
/// │ 0xA5       │         │          │ (Len bytes, LE)  │          │
/// └────────────┴─────────┴──────────┴─────────────────┴──────────┘
/// ```
///
/// The checksum covers every preceding byte of the frame, start marker
/// included. Returns the number of bytes written. Stateless; callable
/// concurrently for independent messages.
pub fn encode_frame(msg: &Message, dst: &mut BytesMut) -> usize {
    let len = msg.payload_size();
    let total = FRAME_OVERHEAD + usize::from(len);
    let start = dst.len();

    dst.reserve(total);
    dst.put_u8(START_BYTE);
    dst.put_u8(msg.id());
    dst.put_u8(len);
    msg.write_fields(dst);
    let checksum = crc::compute(&dst[start..]);
    dst.put_u8(checksum);

    total
}

/// Encode a message into a caller-provided buffer without allocating.
///
/// Rejects a destination that cannot hold the whole frame instead of
/// writing past its end. Returns the number of bytes written.
pub fn encode_into(msg: &Message, dst: &mut [u8]) -> Result<usize> {
    let len = usize::from(msg.payload_size());
    let total = FRAME_OVERHEAD + len;
    if dst.len() < total {
        return Err(FrameError::BufferTooSmall {
            needed: total,
            available: dst.len(),
        });
    }

    dst[0] = START_BYTE;
    dst[1] = msg.id();
    dst[2] = msg.payload_size();
    let mut fields = &mut dst[3..3 + len];
    msg.write_fields(&mut fields);
    dst[3 + len] = crc::compute(&dst[..3 + len]);

    Ok(total)
}

/// Encode a message into a freshly allocated buffer.
pub fn encode_to_bytes(msg: &Message) -> Bytes {
    let mut buf = BytesMut::with_capacity(wire_size(msg));
    encode_frame(msg, &mut buf);
    buf.freeze()
}
