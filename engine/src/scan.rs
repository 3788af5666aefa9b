//! Serves a query by opening one reverse range over each requested
//! column's data entries and aligning them on `(timestamp, sequence)`
//! descending: the merge axis is "which column has the newest
//! still-unconsumed entry", fanned out over N sources instead of one.

use crate::codec;
use crate::error::{CResult, Error};
use crate::keyschema;
use crate::model::RowPoint;
use crate::query::Query;
use crate::storage::engine::Engine;

/// One column's unconsumed data entries for the scan's time range,
/// collected eagerly and held in descending key order so the merge loop
/// can step backward through them with a plain index instead of juggling
/// N live engine iterators borrowing the same handle at once.
struct ColumnCursor {
    entries: Vec<(Vec<u8>, Vec<u8>)>,
    position: usize,
    pending: Option<(Vec<u8>, Vec<u8>, Vec<u8>)>,
}

/// Resolves `query.columns` against the column index, opens a bounded
/// descending range per column, and merges them into row points.
///
/// Fails with `Error::UnknownColumn` if any requested column has never
/// been written in this series -- no partial results are returned.
pub fn scan<E: Engine>(engine: &mut E, query: &Query) -> CResult<Vec<RowPoint>> {
    let mut cursors = Vec::with_capacity(query.columns.len());
    for column in &query.columns {
        let index_key = keyschema::column_index_key(&query.database, &query.series, column);
        let column_id = match engine.get(&index_key)? {
            Some(bytes) => codec::decode_u64(&bytes),
            None => {
                return Err(Error::UnknownColumn {
                    series: query.series.clone(),
                    column: column.clone(),
                })
            }
        };
        cursors.push(ColumnCursor {
            entries: collect_descending(engine, column_id, query.end_time)?,
            position: 0,
            pending: None,
        });
    }

    let start_shifted = codec::encode_timestamp(query.start_time).to_vec();
    let mut rows = Vec::new();

    loop {
        for cursor in &mut cursors {
            if cursor.pending.is_none() && cursor.position < cursor.entries.len() {
                let (key, value) = &cursor.entries[cursor.position];
                let (ts_bytes, seq_bytes) = keyschema::split_data_key_suffix(key);
                if ts_bytes > start_shifted.as_slice() {
                    cursor.pending = Some((ts_bytes.to_vec(), seq_bytes.to_vec(), value.clone()));
                }
            }
        }

        let latest = cursors
            .iter()
            .filter_map(|c| c.pending.as_ref().map(|(t, s, _)| (t.clone(), s.clone())))
            .max();

        let Some((latest_time, latest_sequence)) = latest else {
            break;
        };

        let mut values = vec![None; cursors.len()];
        let mut contributed = false;
        for (slot, cursor) in values.iter_mut().zip(cursors.iter_mut()) {
            let matches = cursor
                .pending
                .as_ref()
                .is_some_and(|(t, s, _)| *t == latest_time && *s == latest_sequence);
            if matches {
                let (_, _, value) = cursor.pending.take().unwrap();
                *slot = Some(value);
                cursor.position += 1;
                contributed = true;
            }
        }

        if !contributed {
            break;
        }

        rows.push(RowPoint::new(
            codec::decode_timestamp(&latest_time),
            codec::decode_u64(&latest_sequence),
            values,
        ));
    }

    if let Some(filter) = &query.post_filter {
        rows.retain(|row| filter(row));
    }

    Ok(rows)
}

/// Collects `column_id`'s data entries up to and including `end_time` in
/// descending key order: a forward scan bounded above by a seek to
/// `id ∥ end_ts_shifted ∥ MAX_SEQUENCE`, then reversed.
fn collect_descending<E: Engine>(
    engine: &mut E,
    column_id: u64,
    end_time: i64,
) -> CResult<Vec<(Vec<u8>, Vec<u8>)>> {
    let lower = keyschema::data_key_prefix(column_id).to_vec();
    let upper = keyschema::data_key(column_id, end_time, u64::MAX);
    let range = (std::ops::Bound::Included(lower), std::ops::Bound::Included(upper));
    let mut entries = engine.scan_dyn(range).collect::<CResult<Vec<_>>>()?;
    entries.reverse();
    Ok(entries)
}
