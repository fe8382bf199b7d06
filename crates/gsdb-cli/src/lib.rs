//! gsdb CLI Library
//!
//! Command-line interface for managing the gsdb gene set store.
//!
//! # Overview
//!
//! The gsdb CLI wraps the batch operations of the core library:
//!
//! - **Population**: parse a GMT catalog and load it (`gsdb populate`)
//! - **Schema lifecycle**: drop the store tables (`gsdb drop`)
//! - **Export**: write every membership as long-format TSV (`gsdb export`)
//!
//! Read queries (lookups, enrichment) are served by `gsdb-server`.

pub mod commands;
pub mod error;

// Re-export commonly used types
pub use error::{CliError, Result};

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// gsdb - MSigDB gene set store manager
#[derive(Parser, Debug)]
#[command(name = "gsdb")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Database file (defaults to the platform data directory)
    #[arg(short = 'c', long, env = "GSDB_DATABASE", global = true)]
    pub connection: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load a GMT gene set catalog into the store
    Populate {
        /// Local catalog file (defaults to $GSDB_GENE_SETS or a cached download)
        #[arg(short, long)]
        path: Option<PathBuf>,

        /// Download the catalog from this URL instead
        #[arg(short, long)]
        url: Option<String>,

        /// Drop existing rows before loading
        #[arg(short, long)]
        delete_first: bool,
    },

    /// Drop the store schema and every row in it
    Drop {
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Export the stored gene sets as TSV
    Export {
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
