use crate::StoreError;
use derive_more::{Display, From, Into};

/// Selects one of a store's independent keyspaces.
#[derive(From, Into, Display, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct TableId(u8);

impl TableId {
    /// The largest number of tables a store may be configured with.
    pub const MAX_TABLES: usize = u8::MAX as usize + 1;

    pub fn index(&self) -> usize {
        self.0 as usize
    }

    /// The index of this table within a store of `num_tables` tables.
    pub fn checked_index(&self, num_tables: usize) -> Result<usize, StoreError> {
        let i = self.index();
        if i >= num_tables {
            return Err(StoreError::InvalidTable {
                table: *self,
                num_tables,
            });
        }
        Ok(i)
    }
}
