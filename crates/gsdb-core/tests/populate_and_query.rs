//! End-to-end populate and query tests over an on-disk store
//!
//! The fixture catalog holds three motif gene sets sharing PDS5B, thirteen
//! distinct symbols in total.

use std::collections::BTreeSet;
use std::path::PathBuf;

use gsdb_core::store::{PathwayOps, ProteinOps, Store, StoreQueries};
use gsdb_core::{Error, GeneSetSource};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/gene_sets.gmt")
}

fn populated_store(dir: &tempfile::TempDir) -> Store {
    let store = Store::open(dir.path().join("gsdb.db")).unwrap();
    store.populate_from_path(&fixture_path()).unwrap();
    store
}

#[test]
fn populate_loads_the_full_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::open(dir.path().join("gsdb.db")).unwrap();

    let summary = store.populate_from_path(&fixture_path()).unwrap();

    assert_eq!(summary.pathways, 3);
    assert_eq!(summary.proteins, 13);
    assert_eq!(summary.memberships, 15);
    assert_eq!(store.count_pathways().unwrap(), 3);
    assert_eq!(store.count_proteins().unwrap(), 13);
}

#[test]
fn catalog_survives_reopening_the_store() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("gsdb.db");

    {
        let store = Store::open(&db_path).unwrap();
        store.populate_from_path(&fixture_path()).unwrap();
    }

    let store = Store::open(&db_path).unwrap();
    assert_eq!(store.count_pathways().unwrap(), 3);

    let results = store.query_gene_set(&["KCNE1L"]).unwrap();
    assert_eq!(results["MYOD_01"].pathway_size, 8);
}

#[test]
fn enrichment_matches_known_overlaps() {
    let dir = tempfile::tempdir().unwrap();
    let store = populated_store(&dir);

    let results = store.query_gene_set(&["PDS5B", "ATP1B1"]).unwrap();

    assert_eq!(results.len(), 3);
    assert_eq!(results["AAANWWTGC_UNKNOWN"].mapped_proteins, 2);
    assert_eq!(results["AAANWWTGC_UNKNOWN"].pathway_size, 4);
    assert_eq!(results["AAAYRNCTG_UNKNOWN"].mapped_proteins, 1);
    assert_eq!(results["AAAYRNCTG_UNKNOWN"].pathway_size, 3);
    assert_eq!(results["MYOD_01"].mapped_proteins, 1);
    assert_eq!(results["MYOD_01"].pathway_size, 8);
}

#[test]
fn enrichment_of_unknown_symbols_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = populated_store(&dir);

    let results = store.query_gene_set(&["NOT_A_GENE"]).unwrap();
    assert!(results.is_empty());
}

#[test]
fn export_covers_every_membership() {
    let dir = tempfile::tempdir().unwrap();
    let store = populated_store(&dir);

    let mut out = Vec::new();
    let rows = gsdb_core::export::export_gene_sets(&store, &mut out).unwrap();
    assert_eq!(rows, 15);

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 16);
    assert_eq!(lines[0], "pathway_identifier\tpathway_name\thgnc_symbol");
    assert_eq!(lines[1], "AAANWWTGC_UNKNOWN\tAAANWWTGC_UNKNOWN\tATP1B1");
    assert_eq!(lines[15], "MYOD_01\tMYOD_01\tPGF");
}

#[test]
fn empty_catalog_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let empty = dir.path().join("empty.gmt");
    std::fs::write(&empty, "").unwrap();

    let store = Store::open(dir.path().join("gsdb.db")).unwrap();
    let result = store.populate_from_path(&empty);

    assert!(matches!(result, Err(Error::EmptySource(_))));
    assert_eq!(store.count_pathways().unwrap(), 0);
}

#[test]
fn malformed_catalog_reports_the_line() {
    let dir = tempfile::tempdir().unwrap();
    let broken = dir.path().join("broken.gmt");
    std::fs::write(&broken, "MYOD_01\turl\tDST\nbroken-line\n").unwrap();

    let store = Store::open(dir.path().join("gsdb.db")).unwrap();
    let result = store.populate_from_path(&broken);

    match result {
        Err(Error::MalformedRecord { line, .. }) => assert_eq!(line, 2),
        other => panic!("expected MalformedRecord, got {:?}", other),
    }
    // Fail-fast parsing means nothing was loaded.
    assert_eq!(store.count_pathways().unwrap(), 0);
}

#[test]
fn repopulating_a_populated_store_fails() {
    let dir = tempfile::tempdir().unwrap();
    let store = populated_store(&dir);

    let result = store.populate_from_path(&fixture_path());

    assert!(matches!(result, Err(Error::UniquenessViolation(_))));
    assert_eq!(store.count_pathways().unwrap(), 3);
    assert_eq!(store.count_proteins().unwrap(), 13);
}

#[tokio::test]
async fn populate_from_source_resolves_an_explicit_path() {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::open(dir.path().join("gsdb.db")).unwrap();

    let source = GeneSetSource {
        path: Some(fixture_path()),
        url: None,
    };
    let summary = store.populate_from_source(&source).await.unwrap();

    assert_eq!(summary.pathways, 3);
}

#[tokio::test]
async fn populate_from_source_rejects_a_missing_path() {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::open(dir.path().join("gsdb.db")).unwrap();

    let source = GeneSetSource {
        path: Some(dir.path().join("nope.gmt")),
        url: None,
    };
    let result = store.populate_from_source(&source).await;

    assert!(matches!(result, Err(Error::SourceNotFound(_))));
}

#[test]
fn size_distribution_and_symbol_listing_cover_the_catalog() {
    let dir = tempfile::tempdir().unwrap();
    let store = populated_store(&dir);

    let sizes = store.pathway_size_distribution().unwrap();
    assert_eq!(sizes.len(), 3);
    assert_eq!(sizes.get("AAANWWTGC_UNKNOWN"), Some(&4));
    assert_eq!(sizes.get("AAAYRNCTG_UNKNOWN"), Some(&3));
    assert_eq!(sizes.get("MYOD_01"), Some(&8));

    let symbols: BTreeSet<String> = store.all_hgnc_symbols().unwrap();
    assert_eq!(symbols.len(), 13);
    assert!(symbols.contains("PDS5B"));
    assert!(symbols.contains("KCNE1L"));

    let mapping = store.pathway_names_to_identifiers().unwrap();
    assert_eq!(mapping.len(), 3);
    assert_eq!(mapping.get("MYOD_01"), Some(&"MYOD_01".to_string()));
}

#[test]
fn search_finds_motif_sets_by_substring() {
    let dir = tempfile::tempdir().unwrap();
    let store = populated_store(&dir);

    let hits = store.search_pathways_by_name("UNKNOWN", None).unwrap();
    assert_eq!(hits.len(), 2);

    let capped = store.search_pathways_by_name("UNKNOWN", Some(1)).unwrap();
    assert_eq!(capped.len(), 1);
    assert!(capped[0].name.contains("UNKNOWN"));

    assert!(store
        .search_pathways_by_name("NO_SUCH_SET", None)
        .unwrap()
        .is_empty());
}
