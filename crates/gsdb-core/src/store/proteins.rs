//! Connection-level protein operations
//!
//! Free functions over `&Connection`, so the same SQL serves the `Store`
//! trait surface and the transactional ingestion path alike.

use std::collections::BTreeSet;

use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::Result;
use crate::models::Protein;
use crate::store::map_constraint_err;

pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Protein> {
    Ok(Protein {
        id: row.get(0)?,
        hgnc_symbol: row.get(1)?,
        hgnc_id: row.get(2)?,
    })
}

/// Insert a protein row, failing on a duplicate symbol
pub(crate) fn insert(conn: &Connection, hgnc_symbol: &str) -> Result<Protein> {
    conn.execute(
        "INSERT INTO proteins (hgnc_symbol) VALUES (?1)",
        params![hgnc_symbol],
    )
    .map_err(|e| map_constraint_err(e, format!("protein '{hgnc_symbol}' already exists")))?;

    Ok(Protein {
        id: conn.last_insert_rowid(),
        hgnc_symbol: hgnc_symbol.to_string(),
        hgnc_id: None,
    })
}

pub(crate) fn by_symbol(conn: &Connection, hgnc_symbol: &str) -> Result<Option<Protein>> {
    let mut stmt =
        conn.prepare("SELECT id, hgnc_symbol, hgnc_id FROM proteins WHERE hgnc_symbol = ?1")?;

    Ok(stmt.query_row(params![hgnc_symbol], from_row).optional()?)
}

pub(crate) fn by_id(conn: &Connection, id: i64) -> Result<Option<Protein>> {
    let mut stmt = conn.prepare("SELECT id, hgnc_symbol, hgnc_id FROM proteins WHERE id = ?1")?;

    Ok(stmt.query_row(params![id], from_row).optional()?)
}

pub(crate) fn get_or_create(conn: &Connection, hgnc_symbol: &str) -> Result<Protein> {
    match by_symbol(conn, hgnc_symbol)? {
        Some(protein) => Ok(protein),
        None => insert(conn, hgnc_symbol),
    }
}

pub(crate) fn count(conn: &Connection) -> Result<usize> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM proteins", [], |row| row.get(0))?;
    Ok(count as usize)
}

/// Distinct symbols that are members of at least one pathway
pub(crate) fn member_symbols(conn: &Connection) -> Result<BTreeSet<String>> {
    let mut stmt = conn.prepare(
        r#"
        SELECT DISTINCT pr.hgnc_symbol
        FROM proteins pr
        JOIN pathway_proteins pp ON pp.protein_id = pr.id
        WHERE pr.hgnc_symbol <> ''
        "#,
    )?;

    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut symbols = BTreeSet::new();
    for symbol in rows {
        symbols.insert(symbol?);
    }
    Ok(symbols)
}

/// (pathway id, pathway identifier) pairs the protein belongs to
pub(crate) fn pathway_memberships(
    conn: &Connection,
    protein_id: i64,
) -> Result<Vec<(i64, String)>> {
    let mut stmt = conn.prepare(
        r#"
        SELECT p.id, p.identifier
        FROM pathways p
        JOIN pathway_proteins pp ON pp.pathway_id = p.id
        WHERE pp.protein_id = ?1
        ORDER BY p.identifier
        "#,
    )?;

    let rows = stmt.query_map(params![protein_id], |row| {
        Ok((row.get(0)?, row.get(1)?))
    })?;

    rows.collect::<rusqlite::Result<Vec<_>>>()
        .map_err(Into::into)
}
