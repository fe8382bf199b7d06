//! Connection-level pathway and membership operations

use std::collections::{BTreeMap, BTreeSet};

use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::error::Result;
use crate::models::Pathway;
use crate::store::map_constraint_err;

pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Pathway> {
    Ok(Pathway {
        id: row.get(0)?,
        identifier: row.get(1)?,
        name: row.get(2)?,
    })
}

/// Insert a pathway row, failing on a duplicate identifier or name
pub(crate) fn insert(conn: &Connection, identifier: &str, name: &str) -> Result<Pathway> {
    conn.execute(
        "INSERT INTO pathways (identifier, name) VALUES (?1, ?2)",
        params![identifier, name],
    )
    .map_err(|e| map_constraint_err(e, format!("pathway '{name}' already exists")))?;

    Ok(Pathway {
        id: conn.last_insert_rowid(),
        identifier: identifier.to_string(),
        name: name.to_string(),
    })
}

pub(crate) fn by_identifier(conn: &Connection, identifier: &str) -> Result<Option<Pathway>> {
    let mut stmt =
        conn.prepare("SELECT id, identifier, name FROM pathways WHERE identifier = ?1")?;

    Ok(stmt.query_row(params![identifier], from_row).optional()?)
}

pub(crate) fn by_name(conn: &Connection, name: &str) -> Result<Option<Pathway>> {
    let mut stmt = conn.prepare("SELECT id, identifier, name FROM pathways WHERE name = ?1")?;

    Ok(stmt.query_row(params![name], from_row).optional()?)
}

pub(crate) fn get_or_create(conn: &Connection, identifier: &str, name: &str) -> Result<Pathway> {
    match by_identifier(conn, identifier)? {
        Some(pathway) => Ok(pathway),
        None => insert(conn, identifier, name),
    }
}

/// All pathways in storage order
pub(crate) fn all(conn: &Connection) -> Result<Vec<Pathway>> {
    let mut stmt = conn.prepare("SELECT id, identifier, name FROM pathways ORDER BY id")?;

    let rows = stmt.query_map([], from_row)?;
    rows.collect::<rusqlite::Result<Vec<_>>>()
        .map_err(Into::into)
}

/// Case-sensitive substring search over pathway names
pub(crate) fn search_by_name(
    conn: &Connection,
    query: &str,
    limit: Option<usize>,
) -> Result<Vec<Pathway>> {
    let mut stmt = conn.prepare(
        "SELECT id, identifier, name FROM pathways WHERE instr(name, ?1) > 0 LIMIT ?2",
    )?;

    // SQLite treats a negative LIMIT as "no limit".
    let limit = limit.map_or(-1, |n| n as i64);
    let rows = stmt.query_map(params![query, limit], from_row)?;
    rows.collect::<rusqlite::Result<Vec<_>>>()
        .map_err(Into::into)
}

pub(crate) fn count(conn: &Connection) -> Result<usize> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM pathways", [], |row| row.get(0))?;
    Ok(count as usize)
}

/// Pathway name -> identifier for every stored pathway
pub(crate) fn names_to_identifiers(conn: &Connection) -> Result<BTreeMap<String, String>> {
    let mut stmt = conn.prepare("SELECT name, identifier FROM pathways")?;

    let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;

    let mut mapping = BTreeMap::new();
    for row in rows {
        let (name, identifier) = row?;
        mapping.insert(name, identifier);
    }
    Ok(mapping)
}

/// Pathway name -> member count; pathways without members are absent
pub(crate) fn size_distribution(conn: &Connection) -> Result<BTreeMap<String, usize>> {
    let mut stmt = conn.prepare(
        r#"
        SELECT p.name, COUNT(pp.protein_id)
        FROM pathways p
        JOIN pathway_proteins pp ON pp.pathway_id = p.id
        GROUP BY p.id, p.name
        "#,
    )?;

    let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get::<_, i64>(1)?)))?;

    let mut sizes = BTreeMap::new();
    for row in rows {
        let (name, size) = row?;
        sizes.insert(name, size as usize);
    }
    Ok(sizes)
}

/// Record a membership edge, failing if the pair is already stored
pub(crate) fn link_protein(conn: &Connection, pathway_id: i64, protein_id: i64) -> Result<()> {
    conn.execute(
        "INSERT INTO pathway_proteins (pathway_id, protein_id) VALUES (?1, ?2)",
        params![pathway_id, protein_id],
    )
    .map_err(|e| {
        map_constraint_err(
            e,
            format!("pathway {pathway_id} is already linked to protein {protein_id}"),
        )
    })?;

    Ok(())
}

/// Member symbols of one pathway, empty symbols excluded
pub(crate) fn gene_set(conn: &Connection, pathway_id: i64) -> Result<BTreeSet<String>> {
    let mut stmt = conn.prepare(
        r#"
        SELECT pr.hgnc_symbol
        FROM proteins pr
        JOIN pathway_proteins pp ON pp.protein_id = pr.id
        WHERE pp.pathway_id = ?1 AND pr.hgnc_symbol <> ''
        "#,
    )?;

    let rows = stmt.query_map(params![pathway_id], |row| row.get::<_, String>(0))?;

    let mut symbols = BTreeSet::new();
    for symbol in rows {
        symbols.insert(symbol?);
    }
    Ok(symbols)
}
