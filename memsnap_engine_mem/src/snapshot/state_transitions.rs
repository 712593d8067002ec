use crate::snapshot::{FrozenView, PendingBuffer, SnapState};
use crate::store::BackingTables;
use crate::MemorySnapshot;
use anyhow::Result;
use log::debug;
use memsnap_types::StoreError;
use std::sync::Arc;

impl MemorySnapshot {
    pub(crate) fn new(tables: Arc<BackingTables>) -> Self {
        let snap_id = tables.fetch_inc_snap_id();

        let frozen = FrozenView::capture(&tables);
        let pending = PendingBuffer::new(tables.num_tables());
        debug!(
            "Snapshot {snap_id} captured {} entries",
            frozen.entries_len()
        );

        Self {
            tables,
            snap_id,
            state: Some(SnapState { frozen, pending }),
        }
    }

    /// Applies each table's pending writes as one batch, then forgets them.
    /// The frozen view is left as is.
    pub(super) fn apply_pending(&mut self) -> Result<()> {
        let Self {
            tables,
            snap_id,
            state,
        } = self;
        let state = state.as_mut().ok_or(StoreError::Disposed)?;

        let mut applied = 0;
        let mut tables_touched = 0;
        for (table, entries) in state.pending.drain() {
            applied += tables.table(table)?.apply_batch(table, entries);
            tables_touched += 1;
        }

        debug!("Snapshot {snap_id} committed {applied} entries to {tables_touched} tables");
        Ok(())
    }

    pub(super) fn release(&mut self) {
        if let Some(state) = self.state.take() {
            let discarded = state.pending.len();
            if discarded > 0 {
                debug!(
                    "Snapshot {} disposed, discarding {discarded} uncommitted writes",
                    self.snap_id
                );
            }
        }
    }
}
