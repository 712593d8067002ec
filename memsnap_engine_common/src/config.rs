//! Store configuration.
//!
//! The only tunable is the number of tables, which is fixed for the lifetime of a store.
//! `StoreConfig::from_env()` lets the embedding process override the default without code changes.

use anyhow::Result;
use memsnap_types::{types::TableId, StoreError};
use std::env;

/// Overrides [`StoreConfig::num_tables`]. Must parse as an integer in `1..=256`.
pub const ENV_VAR_NUM_TABLES: &str = "MEMSNAP_NUM_TABLES";

pub const DEFAULT_NUM_TABLES: usize = TableId::MAX_TABLES;

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct StoreConfig {
    /// Count of independent keyspaces. Table ids `0..num_tables` are valid.
    pub num_tables: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            num_tables: DEFAULT_NUM_TABLES,
        }
    }
}

impl StoreConfig {
    pub fn with_num_tables(num_tables: usize) -> Self {
        Self { num_tables }
    }

    pub fn from_env() -> Result<Self> {
        let mut cfg = Self::default();

        if let Ok(v) = env::var(ENV_VAR_NUM_TABLES) {
            cfg.num_tables = parse_num_tables(&v)?;
        }

        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.num_tables == 0 || self.num_tables > TableId::MAX_TABLES {
            return Err(StoreError::InvalidConfig(format!(
                "num_tables must be within 1..={}, got {}",
                TableId::MAX_TABLES,
                self.num_tables
            ))
            .into());
        }
        Ok(())
    }
}

fn parse_num_tables(v: &str) -> Result<usize> {
    v.trim().parse::<usize>().map_err(|_| {
        StoreError::InvalidConfig(format!("{ENV_VAR_NUM_TABLES} is not an integer: {v:?}")).into()
    })
}
