pub mod config;
pub mod ds_n_a;
mod scan;
mod store;

pub use config::StoreConfig;
pub use scan::*;
pub use store::*;
