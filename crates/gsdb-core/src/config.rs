//! Source and store location configuration
//!
//! Resolution rules for the two locations everything else needs: where the
//! SQLite store lives, and where the GMT catalog comes from.

use std::path::PathBuf;

use tracing::info;

use crate::download;
use crate::error::{Error, Result};

// ============================================================================
// Environment Variables and Defaults
// ============================================================================

/// Overrides the whole gsdb data directory (store and cached catalogs).
pub const DATA_DIR_ENV: &str = "GSDB_DATA_DIR";

/// Overrides the database file location.
pub const DATABASE_ENV: &str = "GSDB_DATABASE";

/// Points at a local GMT catalog to ingest.
pub const GENE_SETS_ENV: &str = "GSDB_GENE_SETS";

/// Overrides the catalog download URL.
pub const GENE_SETS_URL_ENV: &str = "GSDB_GENE_SETS_URL";

/// MSigDB C3 motif gene sets (gene symbols), the catalog the original
/// curation pipeline ships.
pub const DEFAULT_GENE_SETS_URL: &str =
    "https://data.broadinstitute.org/gsea-msigdb/msigdb/release/2023.2.Hs/c3.all.v2023.2.Hs.symbols.gmt";

/// File name for a cached catalog download.
const GENE_SETS_FILE: &str = "gene_sets.gmt";

/// File name for the default store.
const DATABASE_FILE: &str = "gsdb.db";

/// The gsdb data directory: `$GSDB_DATA_DIR`, else the platform data
/// directory plus `gsdb`.
pub fn data_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }

    dirs::data_dir()
        .map(|dir| dir.join("gsdb"))
        .ok_or_else(|| Error::config("could not determine a data directory; set GSDB_DATA_DIR"))
}

/// Database location: `$GSDB_DATABASE`, else `<data dir>/gsdb.db`.
pub fn default_database_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var(DATABASE_ENV) {
        return Ok(PathBuf::from(path));
    }

    Ok(data_dir()?.join(DATABASE_FILE))
}

/// Where a downloaded catalog is cached.
pub fn default_gene_sets_path() -> Result<PathBuf> {
    Ok(data_dir()?.join(GENE_SETS_FILE))
}

/// Where a GMT catalog should come from
#[derive(Debug, Clone, Default)]
pub struct GeneSetSource {
    /// Explicit local catalog path
    pub path: Option<PathBuf>,
    /// Explicit download URL; forces a fresh download
    pub url: Option<String>,
}

impl GeneSetSource {
    /// Resolve this source to a local file, downloading when nothing local
    /// is available.
    ///
    /// Order: explicit path, explicit URL (always downloads),
    /// `$GSDB_GENE_SETS`, a previously cached download, then a download
    /// from `$GSDB_GENE_SETS_URL` or the built-in MSigDB URL.
    pub async fn resolve(&self) -> Result<PathBuf> {
        if let Some(path) = &self.path {
            if !path.exists() {
                return Err(Error::source_not_found(path.display().to_string()));
            }
            return Ok(path.clone());
        }

        let cached = default_gene_sets_path()?;

        if let Some(url) = &self.url {
            download::download_gene_sets(url, &cached).await?;
            return Ok(cached);
        }

        if let Ok(path) = std::env::var(GENE_SETS_ENV) {
            let path = PathBuf::from(path);
            if !path.exists() {
                return Err(Error::source_not_found(path.display().to_string()));
            }
            return Ok(path);
        }

        if cached.exists() {
            info!(path = %cached.display(), "using cached gene set catalog");
            return Ok(cached);
        }

        let url = std::env::var(GENE_SETS_URL_ENV)
            .unwrap_or_else(|_| DEFAULT_GENE_SETS_URL.to_string());
        download::download_gene_sets(&url, &cached).await?;
        Ok(cached)
    }
}
