//! SQLite schema for the association store
//!
//! Uniqueness lives in the schema, not in application checks: pathway
//! identifiers and names, protein symbols, and membership pairs are all
//! constrained here.

use crate::error::Result;
use rusqlite::Connection;

/// Create all store tables and indexes if they do not exist
pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute(
        r#"
        CREATE TABLE IF NOT EXISTS pathways (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            identifier TEXT NOT NULL UNIQUE,
            name TEXT NOT NULL UNIQUE
        )
        "#,
        [],
    )?;

    conn.execute(
        r#"
        CREATE TABLE IF NOT EXISTS proteins (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            hgnc_symbol TEXT NOT NULL UNIQUE,
            hgnc_id TEXT
        )
        "#,
        [],
    )?;

    conn.execute(
        r#"
        CREATE TABLE IF NOT EXISTS pathway_proteins (
            pathway_id INTEGER NOT NULL,
            protein_id INTEGER NOT NULL,

            PRIMARY KEY (pathway_id, protein_id),
            FOREIGN KEY(pathway_id) REFERENCES pathways(id) ON DELETE CASCADE,
            FOREIGN KEY(protein_id) REFERENCES proteins(id) ON DELETE CASCADE
        )
        "#,
        [],
    )?;

    // Protein-side lookups (enrichment, protein detail) walk this index.
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_memberships_protein ON pathway_proteins(protein_id)",
        [],
    )?;

    Ok(())
}

/// Drop all store tables
pub fn drop_schema(conn: &Connection) -> Result<()> {
    // Membership edges first so the drops never trip foreign keys.
    conn.execute("DROP TABLE IF EXISTS pathway_proteins", [])?;
    conn.execute("DROP TABLE IF EXISTS proteins", [])?;
    conn.execute("DROP TABLE IF EXISTS pathways", [])?;
    Ok(())
}
