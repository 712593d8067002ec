use super::super::helpers::etc::expect_store_err;
use anyhow::Result;
use memsnap_engine_common::{ReadOnlyStore, Snapshot, Store};
use memsnap_engine_mem::MemoryStore;
use memsnap_types::{types::TableId, StoreError};

pub fn rejected_without_effect(store: &MemoryStore) -> Result<()> {
    let t = TableId::from(9);
    let mut snap = store.get_snapshot();

    let empty_key = Some(StoreError::InvalidArgument("key must not be empty"));
    assert_eq!(expect_store_err(snap.try_get(t, b"")), empty_key);
    assert_eq!(expect_store_err(snap.put(t, b"", b"v")), empty_key);
    assert_eq!(expect_store_err(snap.delete(t, b"")), empty_key);
    // An empty prefix is not an empty key.
    assert_eq!(snap.find(t, b"")?.count(), 0);

    if store.num_tables() < TableId::MAX_TABLES {
        let bad = TableId::from(store.num_tables() as u8);
        assert!(matches!(
            expect_store_err(snap.put(bad, b"k", b"v")),
            Some(StoreError::InvalidTable { .. })
        ));
    }

    assert_eq!(snap.pending_len(), 0);
    snap.commit()?;
    assert_eq!(store.table_len(t)?, 0);

    snap.dispose();
    assert_eq!(expect_store_err(snap.commit()), Some(StoreError::Disposed));

    Ok(())
}
