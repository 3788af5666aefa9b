//! Turns a batch of points for one series into data-key writes, resolving
//! column ids (allocating new ones as needed) and committing the whole
//! batch through `Engine::write_batch` so a reader never observes a
//! partially-applied write.

use crate::allocator::IdAllocator;
use crate::error::CResult;
use crate::keyschema;
use crate::model::SeriesWrite;
use crate::storage::engine::Engine;

/// Resolves column ids and applies series writes against an engine. Holds
/// no state of its own beyond the allocator it's handed; safe to
/// construct fresh per write if the caller already shares one allocator.
pub struct Writer<'a> {
    allocator: &'a IdAllocator,
}

impl<'a> Writer<'a> {
    pub fn new(allocator: &'a IdAllocator) -> Self {
        Self { allocator }
    }

    /// Writes every point of `write` to `database`, committing column
    /// index entries (for any newly seen columns), the column schema
    /// records, and the data entries themselves as a single atomic batch.
    ///
    /// Field and column names must not contain the key-schema separator;
    /// this is the one ingress point where that's enforced.
    pub fn write_series_data<E: Engine>(
        &self,
        engine: &mut E,
        database: &str,
        write: &SeriesWrite,
    ) -> CResult<()> {
        keyschema::validate_name(database)?;
        keyschema::validate_name(&write.series)?;

        let mut column_ids = Vec::with_capacity(write.fields.len());
        let mut batch = Vec::new();

        for field in &write.fields {
            keyschema::validate_name(&field.name)?;
            let (column_id, was_present) =
                self.allocator.id_for(engine, database, &write.series, &field.name)?;
            if !was_present {
                let schema_bytes = serde_json::to_vec(field)
                    .map_err(|e| crate::error::Error::Decode(e.to_string()))?;
                batch.push((keyschema::column_schema_key(column_id), Some(schema_bytes)));
            }
            column_ids.push(column_id);
        }

        for point in &write.points {
            for (column_id, value) in column_ids.iter().zip(point.values.iter()) {
                if let Some(value) = value {
                    let key = keyschema::data_key(*column_id, point.timestamp, point.sequence);
                    batch.push((key, Some(value.clone())));
                }
            }
        }

        engine.write_batch(batch)
    }
}
