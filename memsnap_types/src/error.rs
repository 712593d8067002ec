use crate::types::TableId;
use derive_more::Display;

/// Contract violations reported by stores and snapshots.
///
/// Engine operations return `anyhow::Result`; callers that need to branch on the kind of failure
/// may `downcast_ref::<StoreError>()` the error.
#[derive(Display, PartialEq, Eq, Clone, Debug)]
pub enum StoreError {
    #[display(fmt = "Invalid argument: {}", _0)]
    InvalidArgument(&'static str),

    #[display(fmt = "Invalid table {} in a store of {} tables", table, num_tables)]
    InvalidTable { table: TableId, num_tables: usize },

    #[display(fmt = "Snapshot has been disposed")]
    Disposed,

    #[display(fmt = "Invalid config: {}", _0)]
    InvalidConfig(String),
}

impl std::error::Error for StoreError {}
