use crate::store::{BackingTables, TableMap};
use anyhow::Result;
use memsnap_types::types::TableId;

/// Per-table captures taken when the snapshot was created. Never mutated.
pub struct FrozenView {
    tables: Vec<TableMap>,
}

impl FrozenView {
    /// Each table is captured under its own lock. A commit racing with the capture may be
    /// observed in some tables and not others, but never partially within one table.
    pub fn capture(backing: &BackingTables) -> Self {
        let tables = backing.iter().map(|table| table.capture()).collect();
        Self { tables }
    }

    pub fn table(&self, table: TableId) -> Result<&TableMap> {
        let i = table.checked_index(self.tables.len())?;
        Ok(&self.tables[i])
    }

    pub fn entries_len(&self) -> usize {
        self.tables.iter().map(|map| map.len()).sum()
    }
}
