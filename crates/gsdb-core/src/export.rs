//! Deterministic catalog export
//!
//! Writes the stored associations as long-format TSV, one row per
//! membership, sorted by pathway identifier and then by symbol. Identical
//! stores always serialize to identical bytes, so exports can be diffed.
//! Pathways without members contribute no rows.

use std::io::Write;
use std::path::Path;

use csv::WriterBuilder;

use crate::error::Result;
use crate::store::StoreQueries;

/// Header row preceding the membership rows
pub const EXPORT_HEADERS: [&str; 3] = ["pathway_identifier", "pathway_name", "hgnc_symbol"];

/// Write every membership as one TSV row; returns the number of data rows
pub fn export_gene_sets<S, W>(store: &S, writer: W) -> Result<usize>
where
    S: StoreQueries,
    W: Write,
{
    let mut tsv = WriterBuilder::new().delimiter(b'\t').from_writer(writer);
    tsv.write_record(EXPORT_HEADERS)?;

    let mut pathways = store.list_pathways()?;
    pathways.sort_by(|a, b| a.identifier.cmp(&b.identifier));

    let mut rows = 0;
    for pathway in &pathways {
        for symbol in store.pathway_gene_set(pathway.id)? {
            tsv.write_record([
                pathway.identifier.as_str(),
                pathway.name.as_str(),
                symbol.as_str(),
            ])?;
            rows += 1;
        }
    }

    tsv.flush()?;
    Ok(rows)
}

/// Export to a file, creating or truncating it
pub fn export_gene_sets_to_path<S>(store: &S, path: impl AsRef<Path>) -> Result<usize>
where
    S: StoreQueries,
{
    let file = std::fs::File::create(path)?;
    export_gene_sets(store, file)
}
