//! CLI command implementations
//!
//! Each subcommand has its own module with a `run` function.

pub mod drop;
pub mod export;
pub mod populate;

use std::path::PathBuf;

use gsdb_core::store::Store;

use crate::error::Result;

/// Open the store named by `--connection`, falling back to the default
/// database location.
pub(crate) fn open_store(connection: Option<PathBuf>) -> Result<Store> {
    let store = match connection {
        Some(path) => Store::open(path)?,
        None => Store::open_default()?,
    };

    Ok(store)
}
