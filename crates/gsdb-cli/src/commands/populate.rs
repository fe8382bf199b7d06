//! `gsdb populate` command implementation
//!
//! Loads a GMT gene set catalog into the store.

use std::path::PathBuf;

use colored::Colorize;
use gsdb_core::config::GeneSetSource;
use gsdb_core::store::{PathwayOps, SchemaOps};
use tracing::info;

use crate::commands::open_store;
use crate::error::{CliError, Result};

/// Load a catalog into the store
///
/// Refuses to write into a store that already holds pathways unless
/// `--delete-first` was passed; membership rows are plain inserts, so
/// loading on top of existing rows would fail halfway through.
pub async fn run(
    connection: Option<PathBuf>,
    path: Option<PathBuf>,
    url: Option<String>,
    delete_first: bool,
) -> Result<()> {
    let store = open_store(connection)?;

    if delete_first {
        store.reset()?;
        println!("{} Cleared the store", "✓".green());
    } else {
        let pathways = store.count_pathways()?;
        if pathways > 0 {
            return Err(CliError::StoreNotEmpty { pathways });
        }
    }

    let source = GeneSetSource { path, url };
    let summary = store.populate_from_source(&source).await?;

    info!(
        pathways = summary.pathways,
        proteins = summary.proteins,
        memberships = summary.memberships,
        "populate finished"
    );
    println!(
        "{} Loaded {} pathway(s), {} protein(s), {} membership(s)",
        "✓".green(),
        summary.pathways,
        summary.proteins,
        summary.memberships
    );

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn catalog_in(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("catalog.gmt");
        std::fs::write(&path, "SET_A\turl\tMEF2C\tRORA\n").unwrap();
        path
    }

    #[tokio::test]
    async fn test_populate_refuses_a_populated_store() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("gsdb.db");
        let catalog = catalog_in(&dir);

        run(Some(db.clone()), Some(catalog.clone()), None, false)
            .await
            .unwrap();

        let result = run(Some(db), Some(catalog), None, false).await;
        assert!(matches!(
            result,
            Err(CliError::StoreNotEmpty { pathways: 1 })
        ));
    }

    #[tokio::test]
    async fn test_delete_first_replaces_the_rows() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("gsdb.db");
        let catalog = catalog_in(&dir);

        run(Some(db.clone()), Some(catalog.clone()), None, false)
            .await
            .unwrap();
        run(Some(db.clone()), Some(catalog), None, true)
            .await
            .unwrap();

        let store = open_store(Some(db)).unwrap();
        assert_eq!(store.count_pathways().unwrap(), 1);
    }
}
