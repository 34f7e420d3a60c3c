/// Errors that can occur during frame encoding/decoding.
///
/// Every parsing error is local and recoverable: the parser has already
/// returned to its resting state when one of these surfaces and continues
/// accepting bytes.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// The received checksum byte differs from the running accumulator.
    #[error("checksum mismatch (computed {expected:#04x}, received {actual:#04x})")]
    ChecksumMismatch { expected: u8, actual: u8 },

    /// The declared message ID is not present in the registry.
    #[error("unknown message id {0:#04x}")]
    UnknownMessageId(u8),

    /// The declared length does not equal the registered fixed size.
    #[error("length mismatch for id {id:#04x} (declared {declared}, registered size {expected})")]
    LengthMismatch { id: u8, declared: u8, expected: u8 },

    /// The declared length exceeds the registry-wide maximum payload size.
    #[error("payload too large ({declared} bytes, max {max})")]
    PayloadTooLarge { declared: u8, max: usize },

    /// The destination buffer cannot hold the encoded frame.
    #[error("buffer too small ({available} bytes available, {needed} needed)")]
    BufferTooSmall { needed: usize, available: usize },

    /// An I/O error occurred while reading or writing frames.
    #[error("frame I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stream ended before a complete frame was received.
    #[error("connection closed (incomplete frame)")]
    ConnectionClosed,
}

pub type Result<T> = std::result::Result<T, FrameError>;
