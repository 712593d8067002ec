use crate::MemorySnapshot;
use anyhow::Result;
use memsnap_types::types::{Key, OptValue, TableId, Value};

impl MemorySnapshot {
    pub(super) fn stage_put(&mut self, table: TableId, key: &[u8], value: &[u8]) -> Result<()> {
        self.stage(table, key, OptValue::Some(Value::from(value)))
    }

    pub(super) fn stage_delete(&mut self, table: TableId, key: &[u8]) -> Result<()> {
        self.stage(table, key, OptValue::Tombstone)
    }

    fn stage(&mut self, table: TableId, key: &[u8], opt_v: OptValue<Value>) -> Result<()> {
        let state = self.state_mut()?;
        table.checked_index(state.pending.num_tables())?;
        let key = Key::try_from(key)?;
        state.pending.stage(table, key, opt_v)
    }
}
