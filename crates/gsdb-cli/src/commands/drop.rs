//! `gsdb drop` command implementation
//!
//! Drops the store schema and everything in it.

use std::io::{self, Write};
use std::path::PathBuf;

use colored::Colorize;
use gsdb_core::store::SchemaOps;

use crate::commands::open_store;
use crate::error::Result;

/// Drop all store tables, prompting unless `--yes` was passed
pub async fn run(connection: Option<PathBuf>, yes: bool) -> Result<()> {
    // Confirmation prompt (unless --yes flag is used)
    if !yes {
        println!(
            "{}",
            "This will delete every pathway and protein in the store.".yellow()
        );
        print!("Continue? [y/N]: ");
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        let input = input.trim().to_lowercase();
        if input != "y" && input != "yes" {
            println!("Drop cancelled.");
            return Ok(());
        }
    }

    let store = open_store(connection)?;
    store.drop_schema()?;

    println!("{} Dropped the store schema", "✓".green());

    Ok(())
}
