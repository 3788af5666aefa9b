//! The facade callers open a handle through: owns the engine handle and
//! the allocator mutex, and wires the writer and scanner to both.

use std::path::Path;

use crate::allocator::IdAllocator;
use crate::config::EngineConfig;
use crate::error::CResult;
use crate::model::{RowPoint, SeriesWrite};
use crate::query::Query;
use crate::scan;
use crate::storage::engine::Engine;
use crate::storage::log_cask::LogCask;
use crate::writer::Writer;

/// A storage engine handle generic over the underlying ordered
/// key-value `Engine`. `Store::open` below is the concrete,
/// log-structured-backed constructor; `new` is exposed for tests and
/// embedders running entirely in memory.
pub struct Store<E: Engine> {
    engine: E,
    allocator: IdAllocator,
}

impl<E: Engine> Store<E> {
    /// Wraps an already-constructed engine. The allocator starts empty
    /// and re-derives its state lazily from the engine's persisted
    /// next-id counter on first allocation -- there's nothing to
    /// "load" eagerly since `IdAllocator` holds no cached counter value
    /// of its own.
    pub fn new(engine: E) -> Self {
        Self { engine, allocator: IdAllocator::new() }
    }

    /// Writes `write` under `database`, allocating any new column ids
    /// and committing the whole batch atomically.
    pub fn write(&mut self, database: &str, write: &SeriesWrite) -> CResult<()> {
        Writer::new(&self.allocator).write_series_data(&mut self.engine, database, write)
    }

    /// Runs `query` to completion and returns the assembled row points.
    pub fn query(&mut self, query: &Query) -> CResult<Vec<RowPoint>> {
        scan::scan(&mut self.engine, query)
    }

    /// Flushes and drops the engine handle.
    pub fn close(mut self) -> CResult<()> {
        self.engine.flush()
    }

    /// Exposes the underlying engine for callers that need direct access
    /// (e.g. `status()` reporting).
    pub fn engine(&mut self) -> &mut E {
        &mut self.engine
    }
}

impl Store<LogCask> {
    /// Opens (or creates) a log-structured store rooted at the directory
    /// `path`; the engine's single log file lives at `path/data.log`.
    /// Compacts on open if `config.compaction_garbage_ratio` is already
    /// exceeded. `block_cache_bytes`/`block_size_bytes` remain advisory;
    /// `LogCask` does not yet act on them.
    pub fn open(path: impl AsRef<Path>, config: &EngineConfig) -> CResult<Self> {
        let dir = path.as_ref();
        log::info!("opening store at {}", dir.display());
        std::fs::create_dir_all(dir)?;
        let engine = LogCask::new_compact(dir.join("data.log"), config.compaction_garbage_ratio)?;
        Ok(Self::new(engine))
    }
}
