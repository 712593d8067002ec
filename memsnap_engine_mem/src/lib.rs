//! # In-memory snapshot store
//!
//! A fixed array of tables, each an unordered byte-key to byte-value mapping, shared by every
//! snapshot taken from it.
//!
//! A [`MemorySnapshot`] captures every table when it is created and reads only from that capture.
//! Its writes are buffered privately and reach the shared tables only on commit,
//! one table at a time.
//!
//! Tables and captures are `im::HashMap`s, so capturing a table is a structural-sharing clone
//! rather than a copy of its entries.

mod snapshot;
mod store;

pub use snapshot::MemorySnapshot;
pub use store::MemoryStore;
