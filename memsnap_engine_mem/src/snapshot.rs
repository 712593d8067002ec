use crate::store::BackingTables;
use anyhow::Result;
use memsnap_engine_common::Snapshot;
use memsnap_types::types::TableId;
use memsnap_types::StoreError;
use std::sync::Arc;

mod frozen_view;
mod pending_buffer;
mod reads;
mod state_transitions;
mod writes;

use frozen_view::FrozenView;
use pending_buffer::PendingBuffer;

/// An isolated view of a [`crate::MemoryStore`] as of the moment it was taken.
///
/// Reads resolve against the capture only, including after this snapshot's own commit.
/// Puts and deletes are buffered until [`Snapshot::commit`].
/// Dropping the snapshot disposes it.
pub struct MemorySnapshot {
    tables: Arc<BackingTables>,
    snap_id: u64,

    /// `None` once disposed.
    state: Option<SnapState>,
}

struct SnapState {
    frozen: FrozenView,
    pending: PendingBuffer,
}

impl MemorySnapshot {
    pub fn id(&self) -> u64 {
        self.snap_id
    }

    pub fn is_disposed(&self) -> bool {
        self.state.is_none()
    }

    /// Count of buffered puts and deletes across all tables. Zero once disposed.
    pub fn pending_len(&self) -> usize {
        self.state
            .as_ref()
            .map_or(0, |state| state.pending.len())
    }

    fn state(&self) -> Result<&SnapState> {
        self.state
            .as_ref()
            .ok_or_else(|| StoreError::Disposed.into())
    }

    fn state_mut(&mut self) -> Result<&mut SnapState> {
        self.state
            .as_mut()
            .ok_or_else(|| StoreError::Disposed.into())
    }
}

impl Snapshot for MemorySnapshot {
    fn put(&mut self, table: TableId, key: &[u8], value: &[u8]) -> Result<()> {
        self.stage_put(table, key, value)
    }

    fn delete(&mut self, table: TableId, key: &[u8]) -> Result<()> {
        self.stage_delete(table, key)
    }

    fn commit(&mut self) -> Result<()> {
        self.apply_pending()
    }

    fn dispose(&mut self) {
        self.release()
    }
}

impl Drop for MemorySnapshot {
    fn drop(&mut self) {
        self.release();
    }
}
