//! Set-overlap enrichment queries
//!
//! Maps a queried gene list onto the stored pathways: every pathway that
//! shares at least one symbol with the query is reported with its hit
//! count, total size, and full member set.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::store::{pathways, proteins, Store};

/// One pathway's overlap with a queried gene set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichmentResult {
    /// Catalog identifier of the pathway
    pub pathway_id: String,
    /// Display name of the pathway
    pub pathway_name: String,
    /// Distinct queried symbols found in this pathway
    pub mapped_proteins: usize,
    /// Total member count of the pathway
    pub pathway_size: usize,
    /// Full member symbol set of the pathway
    pub pathway_gene_set: BTreeSet<String>,
}

impl Store {
    /// Map a query gene list onto stored pathways, keyed by pathway
    /// identifier.
    ///
    /// Unknown symbols are skipped, so a query with no stored symbol yields
    /// an empty map. Duplicate query symbols count once.
    pub fn query_gene_set<S: AsRef<str>>(
        &self,
        gene_set: &[S],
    ) -> Result<HashMap<String, EnrichmentResult>> {
        let conn = self.conn();

        let symbols: BTreeSet<&str> = gene_set.iter().map(|s| s.as_ref()).collect();

        // Pathway identifier -> (pathway id, hit count).
        let mut hits: BTreeMap<String, (i64, usize)> = BTreeMap::new();
        for symbol in symbols {
            let Some(protein) = proteins::by_symbol(&conn, symbol)? else {
                debug!(symbol, "query symbol not in store");
                continue;
            };

            for (pathway_id, identifier) in proteins::pathway_memberships(&conn, protein.id)? {
                let entry = hits.entry(identifier).or_insert((pathway_id, 0));
                entry.1 += 1;
            }
        }

        let mut results = HashMap::with_capacity(hits.len());
        for (identifier, (pathway_id, mapped)) in hits {
            // The identifier came out of the membership join one query ago,
            // so the lookup only misses if the store mutated underneath us.
            let Some(pathway) = pathways::by_identifier(&conn, &identifier)? else {
                continue;
            };

            let members = pathways::gene_set(&conn, pathway_id)?;
            let result = EnrichmentResult {
                pathway_id: pathway.identifier,
                pathway_name: pathway.name,
                mapped_proteins: mapped,
                pathway_size: members.len(),
                pathway_gene_set: members,
            };
            results.insert(identifier, result);
        }

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gmt::parse_gmt;
    use std::io::Cursor;

    const CATALOG: &str = "\
AAANWWTGC_UNKNOWN\turl\tMEF2C\tATP1B1\tRORA\tPDS5B
AAAYRNCTG_UNKNOWN\turl\tPDS5B\tLEKHM1\tLTBP1
MYOD_01\turl\tPDS5B\tEIF2C1\tEFNA1\tHMGN2\tPGF\tDST\tKCNE1L\tFAM126A
";

    fn fixture_store() -> Store {
        let store = Store::in_memory().unwrap();
        let records = parse_gmt(Cursor::new(CATALOG)).unwrap();
        store.populate(&records).unwrap();
        store
    }

    fn member_set(symbols: &[&str]) -> BTreeSet<String> {
        symbols.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_gene_query() {
        let store = fixture_store();

        let results = store.query_gene_set(&["KCNE1L"]).unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(
            results["MYOD_01"],
            EnrichmentResult {
                pathway_id: "MYOD_01".to_string(),
                pathway_name: "MYOD_01".to_string(),
                mapped_proteins: 1,
                pathway_size: 8,
                pathway_gene_set: member_set(&[
                    "DST", "EFNA1", "EIF2C1", "FAM126A", "HMGN2", "KCNE1L", "PDS5B", "PGF"
                ]),
            }
        );
    }

    #[test]
    fn test_multi_gene_query_counts_per_pathway() {
        let store = fixture_store();

        let results = store.query_gene_set(&["PDS5B", "ATP1B1"]).unwrap();

        assert_eq!(results.len(), 3);

        let aaanwwtgc = &results["AAANWWTGC_UNKNOWN"];
        assert_eq!(aaanwwtgc.pathway_id, "AAANWWTGC_UNKNOWN");
        assert_eq!(aaanwwtgc.pathway_name, "AAANWWTGC_UNKNOWN");
        assert_eq!(aaanwwtgc.mapped_proteins, 2);
        assert_eq!(aaanwwtgc.pathway_size, 4);
        assert_eq!(
            aaanwwtgc.pathway_gene_set,
            member_set(&["ATP1B1", "MEF2C", "PDS5B", "RORA"])
        );

        let aaayrnctg = &results["AAAYRNCTG_UNKNOWN"];
        assert_eq!(aaayrnctg.mapped_proteins, 1);
        assert_eq!(aaayrnctg.pathway_size, 3);
        assert_eq!(
            aaayrnctg.pathway_gene_set,
            member_set(&["LEKHM1", "LTBP1", "PDS5B"])
        );

        let myod = &results["MYOD_01"];
        assert_eq!(myod.mapped_proteins, 1);
        assert_eq!(myod.pathway_size, 8);
    }

    #[test]
    fn test_unknown_symbols_are_skipped() {
        let store = fixture_store();

        let with_unknown = store.query_gene_set(&["KCNE1L", "NOT_A_GENE"]).unwrap();
        let without = store.query_gene_set(&["KCNE1L"]).unwrap();

        assert_eq!(with_unknown, without);
    }

    #[test]
    fn test_all_unknown_query_returns_empty_map() {
        let store = fixture_store();

        let results = store.query_gene_set(&["NOT_A_GENE", "ALSO_FAKE"]).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_empty_query_returns_empty_map() {
        let store = fixture_store();

        let results = store.query_gene_set::<&str>(&[]).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_duplicate_query_symbols_count_once() {
        let store = fixture_store();

        let duplicated = store
            .query_gene_set(&["PDS5B", "PDS5B", "ATP1B1"])
            .unwrap();
        let deduplicated = store.query_gene_set(&["PDS5B", "ATP1B1"]).unwrap();

        assert_eq!(duplicated, deduplicated);
        assert_eq!(duplicated["AAANWWTGC_UNKNOWN"].mapped_proteins, 2);
    }

    #[test]
    fn test_queries_do_not_modify_the_store() {
        let store = fixture_store();

        let first = store.query_gene_set(&["PDS5B", "ATP1B1"]).unwrap();
        let second = store.query_gene_set(&["PDS5B", "ATP1B1"]).unwrap();

        assert_eq!(first, second);
    }
}
