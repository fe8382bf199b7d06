//! Batch ingestion of parsed gene set catalogs
//!
//! Loading happens in two transactions: every distinct protein symbol in
//! the catalog first, then the pathways together with their membership
//! edges. A failure in the pathway phase therefore leaves the committed
//! protein rows behind, and the membership edges of the failed phase roll
//! back as one unit.
//!
//! Edges are plain inserts. Loading a catalog into a store that already
//! holds any of its pathway/protein pairs fails with
//! [`Error::UniquenessViolation`] instead of silently merging; reset the
//! schema first to reload.

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::config::GeneSetSource;
use crate::error::{Error, Result};
use crate::gmt::{self, GeneSetRecord};
use crate::store::{pathways, proteins, Store};

/// Row counts from one populate run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PopulateSummary {
    /// Pathways created by this run
    pub pathways: usize,
    /// Proteins created by this run
    pub proteins: usize,
    /// Membership edges created by this run
    pub memberships: usize,
}

impl Store {
    /// Load parsed gene set records into the store
    pub fn populate(&self, records: &[GeneSetRecord]) -> Result<PopulateSummary> {
        if records.is_empty() {
            return Err(Error::empty_source("gene set catalog"));
        }

        let mut conn = self.conn();

        let mut symbols: BTreeSet<&str> = BTreeSet::new();
        for record in records {
            symbols.extend(record.symbols.iter().map(String::as_str));
        }

        // Phase 1: proteins, one transaction for the whole catalog.
        let mut protein_ids: HashMap<&str, i64> = HashMap::with_capacity(symbols.len());
        let tx = conn.transaction()?;
        let proteins_before = proteins::count(&tx)?;
        for &symbol in &symbols {
            let protein = proteins::get_or_create(&tx, symbol)?;
            protein_ids.insert(symbol, protein.id);
        }
        let new_proteins = proteins::count(&tx)? - proteins_before;
        tx.commit()?;
        info!(proteins = new_proteins, "committed protein phase");

        // Phase 2: pathways and membership edges.
        let tx = conn.transaction()?;
        let pathways_before = pathways::count(&tx)?;
        let mut memberships = 0;
        for record in records {
            // MSigDB set names double as catalog identifiers.
            let pathway = pathways::get_or_create(&tx, &record.name, &record.name)?;
            for symbol in &record.symbols {
                let protein_id = match protein_ids.get(symbol.as_str()) {
                    Some(id) => *id,
                    None => proteins::get_or_create(&tx, symbol)?.id,
                };
                pathways::link_protein(&tx, pathway.id, protein_id)?;
                memberships += 1;
            }
        }
        let new_pathways = pathways::count(&tx)? - pathways_before;
        tx.commit()?;
        info!(
            pathways = new_pathways,
            memberships, "committed pathway phase"
        );

        Ok(PopulateSummary {
            pathways: new_pathways,
            proteins: new_proteins,
            memberships,
        })
    }

    /// Parse a GMT file and load it into the store
    pub fn populate_from_path(&self, path: &Path) -> Result<PopulateSummary> {
        info!(path = %path.display(), "loading gene set catalog");

        let records = gmt::parse_gmt_file(path)?;
        if records.is_empty() {
            return Err(Error::empty_source(path.display().to_string()));
        }

        self.populate(&records)
    }

    /// Resolve a catalog source (local file, cached download, or fresh
    /// download) and load it into the store
    pub async fn populate_from_source(&self, source: &GeneSetSource) -> Result<PopulateSummary> {
        let path = source.resolve().await?;
        self.populate_from_path(&path)
    }
}
