//! Embedded association store
//!
//! One SQLite database holds pathways, proteins, and the membership edges
//! between them. [`Store`] owns a single connection behind a mutex
//! (`rusqlite::Connection` is not `Sync`) and exposes its capabilities
//! through small traits, so engines and handlers can state exactly which
//! surface they depend on: [`SchemaOps`], [`PathwayOps`], [`ProteinOps`],
//! and the read-only [`StoreQueries`].

pub mod schema;

pub(crate) mod pathways;
pub(crate) mod proteins;

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use rusqlite::Connection;

use crate::error::{Error, Result};
use crate::models::{Pathway, Protein};

/// Map a SQLite constraint failure to [`Error::UniquenessViolation`],
/// passing every other database error through unchanged.
pub(crate) fn map_constraint_err(err: rusqlite::Error, detail: String) -> Error {
    if err.sqlite_error_code() == Some(rusqlite::ErrorCode::ConstraintViolation) {
        Error::uniqueness(detail)
    } else {
        Error::Database(err)
    }
}

/// Schema lifecycle operations
pub trait SchemaOps {
    /// Create tables and indexes if they do not exist
    fn create_schema(&self) -> Result<()>;

    /// Drop all tables
    fn drop_schema(&self) -> Result<()>;

    /// Drop and re-create all tables, leaving an empty store
    fn reset(&self) -> Result<()>;
}

/// Pathway persistence and lookups
pub trait PathwayOps {
    /// Insert a pathway, failing if the identifier or name is taken
    fn create_pathway(&self, identifier: &str, name: &str) -> Result<Pathway>;

    /// Fetch a pathway by identifier, inserting it if absent
    fn get_or_create_pathway(&self, identifier: &str, name: &str) -> Result<Pathway>;

    fn get_pathway_by_identifier(&self, identifier: &str) -> Result<Option<Pathway>>;

    fn get_pathway_by_name(&self, name: &str) -> Result<Option<Pathway>>;

    fn count_pathways(&self) -> Result<usize>;
}

/// Protein persistence and lookups
pub trait ProteinOps {
    /// Insert a protein, failing if the symbol is taken
    fn create_protein(&self, hgnc_symbol: &str) -> Result<Protein>;

    /// Fetch a protein by symbol, inserting it if absent
    fn get_or_create_protein(&self, hgnc_symbol: &str) -> Result<Protein>;

    fn get_protein_by_symbol(&self, hgnc_symbol: &str) -> Result<Option<Protein>>;

    fn get_protein_by_id(&self, id: i64) -> Result<Option<Protein>>;

    fn count_proteins(&self) -> Result<usize>;
}

/// Read-only query surface shared by enrichment, export, and the admin API
pub trait StoreQueries {
    /// All pathways in storage order
    fn list_pathways(&self) -> Result<Vec<Pathway>>;

    /// Case-sensitive substring search over pathway names; `limit` caps
    /// the result set
    fn search_pathways_by_name(&self, query: &str, limit: Option<usize>)
        -> Result<Vec<Pathway>>;

    /// Pathway name -> identifier for every stored pathway
    fn pathway_names_to_identifiers(&self) -> Result<BTreeMap<String, String>>;

    /// Pathway name -> member count; pathways without members are absent
    fn pathway_size_distribution(&self) -> Result<BTreeMap<String, usize>>;

    /// Member symbols of one pathway
    fn pathway_gene_set(&self, pathway_id: i64) -> Result<BTreeSet<String>>;

    /// Identifiers of the pathways a protein belongs to, sorted
    fn pathway_identifiers_for_protein(&self, protein_id: i64) -> Result<Vec<String>>;

    /// Every symbol that is a member of at least one pathway
    fn all_hgnc_symbols(&self) -> Result<BTreeSet<String>>;
}

/// SQLite-backed association store
pub struct Store {
    conn: Mutex<Connection>,
}

impl Store {
    /// Open (or create) a store at `path` and initialize the schema.
    ///
    /// Missing parent directories are created.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            // A bare file name has an empty parent.
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        Self::from_connection(Connection::open(path)?)
    }

    /// Open the store at the configured default location
    pub fn open_default() -> Result<Self> {
        Self::open(crate::config::default_database_path()?)
    }

    /// Open an in-memory store; used by tests and one-shot tooling
    pub fn in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.pragma_update(None, "foreign_keys", true)?;
        schema::init_schema(&conn)?;

        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Lock the connection, recovering it if another thread panicked while
    /// holding the guard.
    pub(crate) fn conn(&self) -> MutexGuard<'_, Connection> {
        self.conn
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl SchemaOps for Store {
    fn create_schema(&self) -> Result<()> {
        schema::init_schema(&self.conn())
    }

    fn drop_schema(&self) -> Result<()> {
        schema::drop_schema(&self.conn())
    }

    fn reset(&self) -> Result<()> {
        let conn = self.conn();
        schema::drop_schema(&conn)?;
        schema::init_schema(&conn)
    }
}

impl PathwayOps for Store {
    fn create_pathway(&self, identifier: &str, name: &str) -> Result<Pathway> {
        pathways::insert(&self.conn(), identifier, name)
    }

    fn get_or_create_pathway(&self, identifier: &str, name: &str) -> Result<Pathway> {
        pathways::get_or_create(&self.conn(), identifier, name)
    }

    fn get_pathway_by_identifier(&self, identifier: &str) -> Result<Option<Pathway>> {
        pathways::by_identifier(&self.conn(), identifier)
    }

    fn get_pathway_by_name(&self, name: &str) -> Result<Option<Pathway>> {
        pathways::by_name(&self.conn(), name)
    }

    fn count_pathways(&self) -> Result<usize> {
        pathways::count(&self.conn())
    }
}

impl ProteinOps for Store {
    fn create_protein(&self, hgnc_symbol: &str) -> Result<Protein> {
        proteins::insert(&self.conn(), hgnc_symbol)
    }

    fn get_or_create_protein(&self, hgnc_symbol: &str) -> Result<Protein> {
        proteins::get_or_create(&self.conn(), hgnc_symbol)
    }

    fn get_protein_by_symbol(&self, hgnc_symbol: &str) -> Result<Option<Protein>> {
        proteins::by_symbol(&self.conn(), hgnc_symbol)
    }

    fn get_protein_by_id(&self, id: i64) -> Result<Option<Protein>> {
        proteins::by_id(&self.conn(), id)
    }

    fn count_proteins(&self) -> Result<usize> {
        proteins::count(&self.conn())
    }
}

impl StoreQueries for Store {
    fn list_pathways(&self) -> Result<Vec<Pathway>> {
        pathways::all(&self.conn())
    }

    fn search_pathways_by_name(
        &self,
        query: &str,
        limit: Option<usize>,
    ) -> Result<Vec<Pathway>> {
        pathways::search_by_name(&self.conn(), query, limit)
    }

    fn pathway_names_to_identifiers(&self) -> Result<BTreeMap<String, String>> {
        pathways::names_to_identifiers(&self.conn())
    }

    fn pathway_size_distribution(&self) -> Result<BTreeMap<String, usize>> {
        pathways::size_distribution(&self.conn())
    }

    fn pathway_gene_set(&self, pathway_id: i64) -> Result<BTreeSet<String>> {
        pathways::gene_set(&self.conn(), pathway_id)
    }

    fn pathway_identifiers_for_protein(&self, protein_id: i64) -> Result<Vec<String>> {
        let memberships = proteins::pathway_memberships(&self.conn(), protein_id)?;
        Ok(memberships
            .into_iter()
            .map(|(_, identifier)| identifier)
            .collect())
    }

    fn all_hgnc_symbols(&self) -> Result<BTreeSet<String>> {
        proteins::member_symbols(&self.conn())
    }
}
