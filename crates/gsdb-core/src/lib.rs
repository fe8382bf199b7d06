//! gsdb core library
//!
//! Ingests MSigDB GMT gene set catalogs into an embedded SQLite store and
//! answers pathway lookups and set-overlap enrichment queries over it.
//!
//! # Layout
//!
//! - [`gmt`]: strict GMT catalog parsing
//! - [`store`]: the association store and its capability traits
//! - [`ingest`]: two-phase batch loading of parsed catalogs
//! - [`enrich`]: the enrichment query engine
//! - [`export`]: deterministic TSV export
//! - [`config`] / [`download`]: source resolution and catalog downloads
//!
//! # Example
//!
//! ```no_run
//! use gsdb_core::gmt;
//! use gsdb_core::store::Store;
//!
//! fn main() -> gsdb_core::Result<()> {
//!     let store = Store::in_memory()?;
//!     let records = gmt::parse_gmt_file(std::path::Path::new("gene_sets.gmt"))?;
//!     store.populate(&records)?;
//!
//!     let results = store.query_gene_set(&["KCNE1L"])?;
//!     for (pathway, result) in &results {
//!         println!("{pathway}: {}/{}", result.mapped_proteins, result.pathway_size);
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod download;
pub mod enrich;
pub mod error;
pub mod export;
pub mod gmt;
pub mod ingest;
pub mod models;
pub mod store;

// Re-export commonly used types
pub use config::GeneSetSource;
pub use enrich::EnrichmentResult;
pub use error::{Error, Result};
pub use gmt::GeneSetRecord;
pub use ingest::PopulateSummary;
pub use models::{Pathway, Protein};
pub use store::{PathwayOps, ProteinOps, SchemaOps, Store, StoreQueries};
