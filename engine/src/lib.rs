//! A byte-oriented storage engine for time-series data: writers hand it
//! `(database, series, field definitions, points)`, the engine allocates
//! a compact numeric id per column, and encodes every point under an
//! order-preserving key so a reverse range scan yields points newest
//! first without an index. Queries name a series and a set of columns
//! and get back row points aligned on `(timestamp, sequence)`.
//!
//! ## Getting started
//!
//! ```rust
//! use ts_engine::model::{FieldDefinition, FieldType, Point, SeriesWrite};
//! use ts_engine::query::Query;
//! use ts_engine::storage::memory::Memory;
//! use ts_engine::store::Store;
//!
//! fn main() -> Result<(), ts_engine::error::Error> {
//!     let mut store = Store::new(Memory::new());
//!
//!     let write = SeriesWrite::new(
//!         "cpu",
//!         vec![FieldDefinition::new("value", FieldType::Float)],
//!         vec![
//!             Point::new(100, 0, vec![Some(b"1.0".to_vec())]),
//!             Point::new(200, 0, vec![Some(b"2.0".to_vec())]),
//!         ],
//!     );
//!     store.write("metrics", &write)?;
//!
//!     let query = Query::new("metrics", "cpu", vec!["value".into()], 0, 1000);
//!     let rows = store.query(&query)?;
//!     assert_eq!(rows[0].timestamp, 200);
//!     assert_eq!(rows[1].timestamp, 100);
//!
//!     Ok(())
//! }
//! ```

pub mod allocator;
pub mod codec;
pub mod config;
pub mod error;
pub mod keyschema;
pub mod model;
pub mod query;
pub mod scan;
pub mod storage;
pub mod store;
pub mod writer;
