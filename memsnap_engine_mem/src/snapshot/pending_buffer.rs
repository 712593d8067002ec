use anyhow::Result;
use memsnap_types::types::{Key, OptValue, TableId, Value};
use std::collections::{hash_map, HashMap};

/// Per-table buffered writes, keyed by the last write to each key.
pub struct PendingBuffer {
    tables: Vec<HashMap<Key, OptValue<Value>>>,
}

impl PendingBuffer {
    pub fn new(num_tables: usize) -> Self {
        let tables = (0..num_tables).map(|_| HashMap::new()).collect();
        Self { tables }
    }

    /// Overwrites any earlier pending write to the same key.
    pub fn stage(&mut self, table: TableId, key: Key, opt_v: OptValue<Value>) -> Result<()> {
        let i = table.checked_index(self.tables.len())?;
        self.tables[i].insert(key, opt_v);
        Ok(())
    }

    pub fn num_tables(&self) -> usize {
        self.tables.len()
    }

    pub fn len(&self) -> usize {
        self.tables.iter().map(|map| map.len()).sum()
    }

    /// Empties the buffer, table by table. Tables without pending writes are skipped.
    pub fn drain(
        &mut self,
    ) -> impl '_ + Iterator<Item = (TableId, hash_map::Drain<'_, Key, OptValue<Value>>)> {
        self.tables
            .iter_mut()
            .enumerate()
            .filter(|(_, map)| !map.is_empty())
            .map(|(i, map)| (TableId::from(i as u8), map.drain()))
    }
}
