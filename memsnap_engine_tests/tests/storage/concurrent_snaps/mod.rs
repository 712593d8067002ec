mod batch_atomicity;

use anyhow::Result;
use memsnap_engine_mem::MemoryStore;

pub async fn test_concurrent_snaps(store: &MemoryStore) -> Result<()> {
    // Each test uses its own tables. All below tests could be run concurrently.

    repeatable_read::repeatable_read(store).await?;

    commit_visibility::visible_after_commit(store).await?;

    batch_atomicity::no_torn_table(store).await?;

    Ok(())
}
