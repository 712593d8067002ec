use anyhow::Result;
use log::debug;
use memsnap_engine_common::{ReadOnlyStore, ScanIterator, Store, StoreConfig};
use memsnap_types::types::{Key, OptValue, TableId, Value};
use shorthand::ShortHand;
use std::iter;
use std::sync::Arc;

mod tables;

pub(crate) use tables::*;

/// The committed state shared by all snapshots.
///
/// Cloning a `MemoryStore` yields another handle to the same tables.
#[derive(ShortHand, Clone)]
#[shorthand(visibility("pub(in crate)"))]
pub struct MemoryStore {
    tables: Arc<BackingTables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::new_unchecked(StoreConfig::default())
    }

    pub fn with_config(cfg: StoreConfig) -> Result<Self> {
        cfg.validate()?;
        Ok(Self::new_unchecked(cfg))
    }

    pub fn from_env() -> Result<Self> {
        let cfg = StoreConfig::from_env()?;
        Self::with_config(cfg)
    }

    fn new_unchecked(cfg: StoreConfig) -> Self {
        debug!("Creating an in-memory store of {} tables", cfg.num_tables);
        Self {
            tables: Arc::new(BackingTables::new(cfg.num_tables)),
        }
    }

    pub fn num_tables(&self) -> usize {
        self.tables.num_tables()
    }

    /// Count of committed entries in `table`.
    pub fn table_len(&self, table: TableId) -> Result<usize> {
        Ok(self.tables.table(table)?.len())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadOnlyStore for MemoryStore {
    fn try_get(&self, table: TableId, key: &[u8]) -> Result<Option<Value>> {
        let backing = self.tables.table(table)?;
        Key::check(key)?;
        Ok(backing.get(key))
    }

    fn find(&self, table: TableId, prefix: &[u8]) -> Result<ScanIterator> {
        let captured = self.tables.table(table)?.capture();
        Ok(ScanIterator::from_unordered(captured.iter(), prefix))
    }
}

impl Store for MemoryStore {
    type Snap = crate::MemorySnapshot;

    fn get_snapshot(&self) -> Self::Snap {
        crate::MemorySnapshot::new(Arc::clone(self.tables()))
    }

    fn put_sync(&self, table: TableId, key: &[u8], value: &[u8]) -> Result<()> {
        let backing = self.tables.table(table)?;
        let key = Key::try_from(key)?;
        backing.apply_batch(table, iter::once((key, OptValue::Some(Value::from(value)))));
        Ok(())
    }

    fn delete_sync(&self, table: TableId, key: &[u8]) -> Result<()> {
        let backing = self.tables.table(table)?;
        let key = Key::try_from(key)?;
        backing.apply_batch(table, iter::once((key, OptValue::Tombstone)));
        Ok(())
    }
}
