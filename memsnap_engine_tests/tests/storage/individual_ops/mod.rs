mod violations;

use anyhow::Result;
use memsnap_engine_mem::MemoryStore;

/// Each test uses its own table, so they may share one store.
pub fn test_ops_serially(store: &MemoryStore) -> Result<()> {
    end_to_end::scenario(store)?;

    commit::isolation(store)?;
    commit::own_writes_invisible(store)?;
    commit::tombstone(store)?;
    commit::idempotent_commit(store)?;

    prefix_scan::ordering(store)?;
    prefix_scan::stable_after_commit(store)?;

    dispose::without_commit(store)?;

    violations::rejected_without_effect(store)?;

    Ok(())
}
