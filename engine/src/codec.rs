//! Fixed-width, order-preserving encodings for the numeric fields that make
//! up a data key: column ids, shifted timestamps, and sequence numbers.
//!
//! Everything here is big-endian so that lexicographic byte order matches
//! numeric order, the way `storage::log`'s own length-prefix framing
//! already leans on `byteorder::BigEndian` for fixed-width fields.

use byteorder::{BigEndian, ByteOrder};

/// Width in bytes of every encoded numeric key field (id, shifted
/// timestamp, sequence number).
pub const WIDTH: usize = 8;

/// Rebases a signed timestamp into the unsigned range so that unsigned
/// big-endian byte order matches signed numeric order.
///
/// `u = t + 2^63`, computed without overflow: `i64::MIN` must not panic on
/// the naive `t + i64::MAX + 1` form.
pub fn shift(t: i64) -> u64 {
    if t < 0 {
        (i64::MAX + t + 1) as u64
    } else {
        t as u64 + i64::MAX as u64 + 1
    }
}

/// Inverse of [`shift`].
pub fn unshift(u: u64) -> i64 {
    (u as i128 - i64::MAX as i128 - 1) as i64
}

/// Encodes a `u64` as fixed-width big-endian bytes.
pub fn encode_u64(value: u64) -> [u8; WIDTH] {
    let mut buf = [0u8; WIDTH];
    BigEndian::write_u64(&mut buf, value);
    buf
}

/// Decodes a fixed-width big-endian `u64`. Panics if `bytes` is shorter
/// than [`WIDTH`]; callers only ever pass key slices already sliced to
/// width by the key schema.
pub fn decode_u64(bytes: &[u8]) -> u64 {
    BigEndian::read_u64(bytes)
}

/// Encodes a signed timestamp as the fixed-width big-endian bytes of its
/// shifted, unsigned form.
pub fn encode_timestamp(t: i64) -> [u8; WIDTH] {
    encode_u64(shift(t))
}

/// Decodes a signed timestamp from the fixed-width big-endian bytes
/// produced by [`encode_timestamp`].
pub fn decode_timestamp(bytes: &[u8]) -> i64 {
    unshift(decode_u64(bytes))
}
