//! GMT (Gene Matrix Transposed) catalog parsing
//!
//! One gene set per line: the set name, a source field (a URL in MSigDB
//! releases), then any number of tab-separated gene symbols. Parsing is
//! strict: the first line that does not fit fails the whole catalog with
//! the offending 1-based line number.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, Result};

/// One parsed GMT line: a named gene set and its member symbols
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneSetRecord {
    /// Set name; MSigDB uses it as the catalog identifier as well
    pub name: String,
    /// Second field of the line; MSigDB puts the gene set card URL here
    pub info_url: String,
    /// Member symbols, whitespace-trimmed, empty fields dropped,
    /// duplicates collapsed
    pub symbols: BTreeSet<String>,
}

/// Parse an entire GMT catalog, preserving file order
pub fn parse_gmt<R: BufRead>(reader: R) -> Result<Vec<GeneSetRecord>> {
    let mut records = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        records.push(parse_line(&line, idx + 1)?);
    }

    Ok(records)
}

/// Parse a GMT catalog from a file on disk
pub fn parse_gmt_file(path: &Path) -> Result<Vec<GeneSetRecord>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => Error::source_not_found(path.display().to_string()),
        _ => Error::Io(e),
    })?;

    parse_gmt(BufReader::new(file))
}

fn parse_line(line: &str, lineno: usize) -> Result<GeneSetRecord> {
    let fields: Vec<&str> = line.split('\t').collect();

    // A blank line splits into a single empty field and fails here too.
    if fields.len() < 2 {
        return Err(Error::malformed_record(
            lineno,
            format!("expected at least 2 tab-separated fields, found {}", fields.len()),
        ));
    }

    let name = fields[0].trim();
    if name.is_empty() {
        return Err(Error::malformed_record(lineno, "gene set name is empty"));
    }

    let symbols = fields[2..]
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();

    Ok(GeneSetRecord {
        name: name.to_string(),
        info_url: fields[1].trim().to_string(),
        symbols,
    })
}
