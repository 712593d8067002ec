use crate::MemorySnapshot;
use anyhow::Result;
use memsnap_engine_common::{ReadOnlyStore, ScanIterator};
use memsnap_types::types::{Key, TableId, Value};

/* Reads consult the frozen view only, never the pending buffer. */
impl ReadOnlyStore for MemorySnapshot {
    fn try_get(&self, table: TableId, key: &[u8]) -> Result<Option<Value>> {
        let frozen = self.state()?.frozen.table(table)?;
        Key::check(key)?;
        Ok(frozen.get(key).cloned())
    }

    fn find(&self, table: TableId, prefix: &[u8]) -> Result<ScanIterator> {
        let frozen = self.state()?.frozen.table(table)?;
        Ok(ScanIterator::from_unordered(frozen.iter(), prefix))
    }
}
