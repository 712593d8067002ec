use anyhow::Result;
use log::{trace, warn};
use memsnap_types::types::{Key, OptValue, TableId, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

pub type TableMap = im::HashMap<Key, Value>;

/// One keyspace of the committed state.
///
/// A batch is applied to a private clone of the map, which then replaces the shared map while the
/// write lock is held. Readers therefore observe a batch either entirely or not at all.
pub struct BackingTable {
    map: RwLock<TableMap>,
}

impl BackingTable {
    fn new() -> Self {
        Self {
            map: RwLock::new(TableMap::new()),
        }
    }

    /// An immutable capture of the current contents. Later writes do not affect it.
    pub fn capture(&self) -> TableMap {
        TableMap::clone(&self.read())
    }

    pub fn get(&self, key: &[u8]) -> Option<Value> {
        self.read().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Tombstones remove (a no-op for absent keys); values insert or overwrite.
    ///
    /// @return the count of entries applied.
    pub fn apply_batch(
        &self,
        table: TableId,
        entries: impl IntoIterator<Item = (Key, OptValue<Value>)>,
    ) -> usize {
        let mut guard = self.write();

        let mut map = TableMap::clone(&guard);
        let mut applied = 0;
        for (k, opt_v) in entries {
            match opt_v {
                OptValue::Tombstone => {
                    map.remove(&k);
                }
                OptValue::Some(v) => {
                    map.insert(k, v);
                }
            }
            applied += 1;
        }
        *guard = map;

        trace!("Applied {applied} entries to table {table}");
        applied
    }

    fn read(&self) -> RwLockReadGuard<'_, TableMap> {
        self.map.read().unwrap_or_else(|poisoned| {
            warn!("Recovering a poisoned table lock for reading");
            poisoned.into_inner()
        })
    }

    fn write(&self) -> RwLockWriteGuard<'_, TableMap> {
        self.map.write().unwrap_or_else(|poisoned| {
            warn!("Recovering a poisoned table lock for writing");
            poisoned.into_inner()
        })
    }
}

/// The fixed array of tables. Its length never changes.
pub struct BackingTables {
    tables: Vec<BackingTable>,

    /// Labels snapshots in logs.
    next_snap_id: AtomicU64,
}

impl BackingTables {
    pub fn new(num_tables: usize) -> Self {
        let tables = (0..num_tables).map(|_| BackingTable::new()).collect();
        Self {
            tables,
            next_snap_id: AtomicU64::new(0),
        }
    }

    pub fn fetch_inc_snap_id(&self) -> u64 {
        self.next_snap_id.fetch_add(1, Ordering::Relaxed)
    }

    pub fn num_tables(&self) -> usize {
        self.tables.len()
    }

    pub fn table(&self, table: TableId) -> Result<&BackingTable> {
        let i = table.checked_index(self.tables.len())?;
        Ok(&self.tables[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &BackingTable> {
        self.tables.iter()
    }
}
