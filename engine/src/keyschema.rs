//! The reserved key-space prefixes that partition the engine's single
//! ordered key space (spec table in `SPEC_FULL.md` §4.2), and the
//! concatenation rules for building and reading back each kind of key.
//!
//! A small enum of reserved prefixes plus explicit byte layout, encoded
//! by hand rather than through `serde`'s enum-variant-index scheme,
//! because the reserved prefixes and the `(id, ts, seq)` tuple must sort
//! correctly under plain lexicographic `Vec<u8>` comparison.

use crate::codec::{self, WIDTH};
use crate::error::{CResult, Error};

/// Next-id counter. Value is an 8-byte big-endian counter.
pub const NEXT_ID_PREFIX: [u8; WIDTH] = [0x00; WIDTH];
/// Column index: `db~series~column` -> 8-byte column id.
pub const COLUMN_INDEX_PREFIX: [u8; WIDTH] = [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFD];
/// Column schema: 8-byte column id -> serialized schema definition.
pub const COLUMN_SCHEMA_PREFIX: [u8; WIDTH] = [0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE];
/// Series index: `db~series` -> 8-byte id (the last column allocated for it).
pub const SERIES_INDEX_PREFIX: [u8; WIDTH] = [0xFF; WIDTH];

const SEP: u8 = b'~';

/// Rejects names that would corrupt the `~`-joined index keys. Must be
/// called at every ingress point that accepts a database, series, or
/// column name (the writer).
pub fn validate_name(name: &str) -> CResult<()> {
    if name.as_bytes().contains(&SEP) {
        return Err(Error::Value(format!(
            "name {:?} contains the reserved '~' key-schema separator",
            name
        )));
    }
    Ok(())
}

/// Key for the persisted next-id counter.
pub fn next_id_key() -> Vec<u8> {
    NEXT_ID_PREFIX.to_vec()
}

/// Key for the `(database, series, column)` -> column id index entry.
pub fn column_index_key(database: &str, series: &str, column: &str) -> Vec<u8> {
    let mut key = COLUMN_INDEX_PREFIX.to_vec();
    key.extend_from_slice(database.as_bytes());
    key.push(SEP);
    key.extend_from_slice(series.as_bytes());
    key.push(SEP);
    key.extend_from_slice(column.as_bytes());
    key
}

/// Key for the `(database, series)` -> series-exists marker.
pub fn series_index_key(database: &str, series: &str) -> Vec<u8> {
    let mut key = SERIES_INDEX_PREFIX.to_vec();
    key.extend_from_slice(database.as_bytes());
    key.push(SEP);
    key.extend_from_slice(series.as_bytes());
    key
}

/// Key for a column's schema definition record.
pub fn column_schema_key(column_id: u64) -> Vec<u8> {
    let mut key = COLUMN_SCHEMA_PREFIX.to_vec();
    key.extend_from_slice(&codec::encode_u64(column_id));
    key
}

/// Key for a single data entry: `col id ∥ shifted ts ∥ sequence`.
pub fn data_key(column_id: u64, timestamp: i64, sequence: u64) -> Vec<u8> {
    let mut key = Vec::with_capacity(WIDTH * 3);
    key.extend_from_slice(&codec::encode_u64(column_id));
    key.extend_from_slice(&codec::encode_timestamp(timestamp));
    key.extend_from_slice(&codec::encode_u64(sequence));
    key
}

/// The fixed 8-byte prefix every data key for `column_id` begins with.
/// Used by the scanner to recognize when an iterator has walked past the
/// entries belonging to its column.
pub fn data_key_prefix(column_id: u64) -> [u8; WIDTH] {
    codec::encode_u64(column_id)
}

/// Splits a data key into its `(shifted ts, sequence)` tail, assuming the
/// caller has already checked the leading column-id prefix with
/// [`data_key_prefix`].
pub fn split_data_key_suffix(key: &[u8]) -> (&[u8], &[u8]) {
    let ts = &key[WIDTH..WIDTH * 2];
    let seq = &key[WIDTH * 2..WIDTH * 3];
    (ts, seq)
}
