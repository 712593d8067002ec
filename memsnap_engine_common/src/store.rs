use crate::ScanIterator;
use anyhow::Result;
use memsnap_types::types::{TableId, Value};

/// Read access shared by stores and snapshots.
pub trait ReadOnlyStore {
    /// Fails if `key` is empty or `table` is out of range.
    fn try_get(&self, table: TableId, key: &[u8]) -> Result<Option<Value>>;

    /// All entries whose key starts with `prefix`, in unsigned byte-wise key order.
    /// An empty `prefix` selects the whole table.
    fn find(&self, table: TableId, prefix: &[u8]) -> Result<ScanIterator>;

    fn contains(&self, table: TableId, key: &[u8]) -> Result<bool> {
        Ok(self.try_get(table, key)?.is_some())
    }
}

/// A point-in-time view with a private buffer of pending writes.
///
/// Reads never observe the buffer. The buffer reaches the backing store only through
/// [`Snapshot::commit`], and becomes readable only to snapshots taken after that.
pub trait Snapshot: ReadOnlyStore {
    fn put(&mut self, table: TableId, key: &[u8], value: &[u8]) -> Result<()>;

    fn delete(&mut self, table: TableId, key: &[u8]) -> Result<()>;

    /// Applies and drains the pending writes.
    fn commit(&mut self) -> Result<()>;

    /// Releases the view and discards uncommitted writes. Idempotent.
    fn dispose(&mut self);
}

pub trait Store: ReadOnlyStore {
    type Snap: Snapshot;

    fn get_snapshot(&self) -> Self::Snap;

    /// Upserts directly into the committed state.
    fn put_sync(&self, table: TableId, key: &[u8], value: &[u8]) -> Result<()>;

    /// Removes directly from the committed state.
    fn delete_sync(&self, table: TableId, key: &[u8]) -> Result<()>;
}
