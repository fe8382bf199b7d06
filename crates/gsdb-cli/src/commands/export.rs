//! `gsdb export` command implementation
//!
//! Writes the stored gene sets as long-format TSV, one membership per row.

use std::path::PathBuf;

use colored::Colorize;
use gsdb_core::export::{export_gene_sets, export_gene_sets_to_path};

use crate::commands::open_store;
use crate::error::Result;

/// Export every membership row, to a file or to stdout
pub async fn run(connection: Option<PathBuf>, output: Option<PathBuf>) -> Result<()> {
    let store = open_store(connection)?;

    match output {
        Some(path) => {
            let rows = export_gene_sets_to_path(&store, &path)?;
            println!(
                "{} Exported {} membership row(s) to {}",
                "✓".green(),
                rows,
                path.display()
            );
        }
        None => {
            // Plain TSV on stdout so the output can be piped
            export_gene_sets(&store, std::io::stdout().lock())?;
        }
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_export_to_file_round_trips_the_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("gsdb.db");
        let catalog = dir.path().join("catalog.gmt");
        std::fs::write(&catalog, "SET_A\turl\tMEF2C\tRORA\n").unwrap();

        crate::commands::populate::run(Some(db.clone()), Some(catalog), None, false)
            .await
            .unwrap();

        let out = dir.path().join("export.tsv");
        run(Some(db), Some(out.clone())).await.unwrap();

        let exported = std::fs::read_to_string(&out).unwrap();
        let lines: Vec<&str> = exported.lines().collect();
        assert_eq!(
            lines,
            vec![
                "pathway_identifier\tpathway_name\thgnc_symbol",
                "SET_A\tSET_A\tMEF2C",
                "SET_A\tSET_A\tRORA",
            ]
        );
    }
}
