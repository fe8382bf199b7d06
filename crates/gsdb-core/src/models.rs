//! Row types for the association store

use serde::{Deserialize, Serialize};

/// MSigDB gene set page, keyed by set name
pub const GENE_SET_PAGE_URL: &str =
    "http://software.broadinstitute.org/gsea/msigdb/geneset_page.jsp?geneSetName=";

/// A stored gene set (pathway)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pathway {
    /// Surrogate key assigned by the store
    pub id: i64,
    /// Stable catalog identifier; MSigDB reuses the set name here
    pub identifier: String,
    /// Human-readable set name
    pub name: String,
}

impl Pathway {
    /// Link to the MSigDB page describing this gene set
    pub fn url(&self) -> String {
        format!("{}{}", GENE_SET_PAGE_URL, self.identifier)
    }
}

impl std::fmt::Display for Pathway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A stored protein, identified by its HGNC gene symbol
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Protein {
    /// Surrogate key assigned by the store
    pub id: i64,
    /// HGNC gene symbol, unique across the store
    pub hgnc_symbol: String,
    /// HGNC accession, when a catalog carries one. GMT catalogs do not.
    pub hgnc_id: Option<String>,
}

impl std::fmt::Display for Protein {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.hgnc_symbol)
    }
}
