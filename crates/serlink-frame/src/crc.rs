//! Bit-serial CRC-8, polynomial 0x07, no reflection, zero init per frame.
//!
//! Encoder and parser must fold bytes through the exact same function; any
//! divergence breaks interoperability silently.

/// Generator polynomial.
pub const POLYNOMIAL: u8 = 0x07;

/// Fold one byte into the running checksum.
pub fn update(acc: u8, byte: u8) -> u8 {
    let mut data = acc ^ byte;
    for _ in 0..8 {
        if data & 0x80 != 0 {
            data = (data << 1) ^ POLYNOMIAL;
        } else {
            data <<= 1;
        }
    }
    data
}

/// Checksum of an entire slice, starting from a zero accumulator.
pub fn compute(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0, |acc, &byte| update(acc, byte))
}
