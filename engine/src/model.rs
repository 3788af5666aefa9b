//! The data model the storage engine persists and serves: columns, points,
//! and the assembled row points a query yields.

use serde_derive::{Deserialize, Serialize};

/// A column's declared type. The engine never interprets this beyond
/// storing and returning it -- values are opaque bytes delegated to an
/// external point-value codec.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    Float,
    Integer,
    String,
    Boolean,
}

/// A column's name and declared type, as supplied by the caller on first
/// write. Persisted verbatim under the column-schema key once per column.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub name: String,
    pub kind: FieldType,
}

impl FieldDefinition {
    pub fn new(name: impl Into<String>, kind: FieldType) -> Self {
        Self { name: name.into(), kind }
    }
}

/// One point to be written: a timestamp, a writer-supplied sequence
/// number disambiguating same-timestamp points, and one value per field
/// in `WriteRequest::fields`, positionally aligned. `None` means the
/// point omits that field.
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    pub timestamp: i64,
    pub sequence: u64,
    pub values: Vec<Option<Vec<u8>>>,
}

impl Point {
    pub fn new(timestamp: i64, sequence: u64, values: Vec<Option<Vec<u8>>>) -> Self {
        Self { timestamp, sequence, values }
    }
}

/// A batch of points for one series, plus the field definitions they're
/// positionally aligned against. The unit `Writer::write_series_data`
/// commits atomically.
#[derive(Clone, Debug)]
pub struct SeriesWrite {
    pub series: String,
    pub fields: Vec<FieldDefinition>,
    pub points: Vec<Point>,
}

impl SeriesWrite {
    pub fn new(series: impl Into<String>, fields: Vec<FieldDefinition>, points: Vec<Point>) -> Self {
        Self { series: series.into(), fields, points }
    }
}

/// One row emitted by the merge scanner: a `(timestamp, sequence)` tuple
/// with one value slot per queried column, `None` where that column had
/// no entry at this tuple.
#[derive(Clone, Debug, PartialEq)]
pub struct RowPoint {
    pub timestamp: i64,
    pub sequence: u64,
    pub values: Vec<Option<Vec<u8>>>,
}

impl RowPoint {
    pub fn new(timestamp: i64, sequence: u64, values: Vec<Option<Vec<u8>>>) -> Self {
        Self { timestamp, sequence, values }
    }
}
