//! Allocates the compact numeric column ids that replace
//! `(database, series, column)` triples everywhere in a data key.
//!
//! A single `Mutex`-guarded counter key hands out monotonically
//! increasing ids, double-checked so two callers racing on a brand new
//! triple never allocate two ids for it.

use std::sync::Mutex;

use crate::error::CResult;
use crate::keyschema;
use crate::storage::engine::Engine;

/// Hands out a stable id for each `(database, series, column)` triple the
/// first time it's seen, and returns the same id on every subsequent
/// lookup. Backed by a single process-wide mutex so two concurrent
/// writers naming the same new column can't race into allocating two
/// different ids for it.
pub struct IdAllocator {
    lock: Mutex<()>,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self { lock: Mutex::new(()) }
    }

    /// Returns `(id, was_present)` for `(database, series, column)`,
    /// allocating a fresh id from the persisted counter if this is the
    /// first time the triple has been seen.
    ///
    /// Double-checked locking: the index is read once before taking the
    /// lock (the common case, an already-allocated column, never blocks
    /// on the mutex for more than the engine round-trip), then re-read
    /// after acquiring it in case another thread allocated the id while
    /// this one was waiting.
    pub fn id_for<E: Engine>(
        &self,
        engine: &mut E,
        database: &str,
        series: &str,
        column: &str,
    ) -> CResult<(u64, bool)> {
        let index_key = keyschema::column_index_key(database, series, column);

        if let Some(existing) = engine.get(&index_key)? {
            return Ok((crate::codec::decode_u64(&existing), true));
        }

        let _guard = self.lock.lock()?;

        if let Some(existing) = engine.get(&index_key)? {
            return Ok((crate::codec::decode_u64(&existing), true));
        }

        let counter_key = keyschema::next_id_key();
        let current = match engine.get(&counter_key)? {
            Some(bytes) => crate::codec::decode_u64(&bytes),
            None => 0,
        };
        let next_id = current + 1;
        let next_id_bytes = crate::codec::encode_u64(next_id).to_vec();

        log::info!(
            "allocating column id {} for {}~{}~{}",
            next_id, database, series, column
        );
        engine.write_batch(vec![
            (counter_key, Some(next_id_bytes.clone())),
            (keyschema::series_index_key(database, series), Some(next_id_bytes.clone())),
            (index_key, Some(next_id_bytes)),
        ])?;
        Ok((next_id, false))
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::Memory;

    #[test]
    fn allocates_once_and_remembers() {
        let mut engine = Memory::new();
        let allocator = IdAllocator::new();

        let (id1, was_present1) = allocator.id_for(&mut engine, "m", "cpu", "value").unwrap();
        assert!(!was_present1);

        let (id2, was_present2) = allocator.id_for(&mut engine, "m", "cpu", "value").unwrap();
        assert_eq!(id1, id2);
        assert!(was_present2);
    }

    #[test]
    fn distinct_triples_get_distinct_ids() {
        let mut engine = Memory::new();
        let allocator = IdAllocator::new();

        let (a, _) = allocator.id_for(&mut engine, "m", "cpu", "value").unwrap();
        let (b, _) = allocator.id_for(&mut engine, "m", "cpu", "usage").unwrap();
        let (c, _) = allocator.id_for(&mut engine, "m", "mem", "value").unwrap();

        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }

    #[test]
    fn ids_start_at_one() {
        let mut engine = Memory::new();
        let allocator = IdAllocator::new();
        let (id, _) = allocator.id_for(&mut engine, "m", "cpu", "value").unwrap();
        assert_eq!(id, 1);
    }

    #[test]
    fn concurrent_callers_racing_on_a_new_triple_get_exactly_one_id() {
        use std::sync::{Arc, Mutex};
        use std::thread;

        let engine = Arc::new(Mutex::new(Memory::new()));
        let allocator = Arc::new(IdAllocator::new());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let engine = Arc::clone(&engine);
                let allocator = Arc::clone(&allocator);
                thread::spawn(move || {
                    let mut engine = engine.lock().unwrap();
                    allocator.id_for(&mut *engine, "m", "cpu", "value").unwrap().0
                })
            })
            .collect();

        let ids: Vec<u64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(ids.iter().all(|id| *id == ids[0]));
    }
}
