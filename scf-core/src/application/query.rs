// scf-core/src/application/query.rs
//
// The four read-only catalog operations plus registry accessors.
// Every operation is a pure function of the dataset and its arguments: no I/O,
// no interior state, safe to call concurrently through a shared reference.

use serde::Serialize;

use crate::domain::catalog::{Control, Framework};
use crate::domain::dataset::Dataset;
use crate::domain::snippet::{self, FoldedText};

/// Fixed placeholder: hits are not ranked.
pub const SEARCH_RELEVANCE: f64 = 1.0;

pub const UNCATEGORIZED: &str = "uncategorized";

// --- RESULT ROWS ---

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    pub control_id: String,
    pub name: String,
    pub snippet: String,
    pub relevance: f64,
    pub mapped_frameworks: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameworkControlRow {
    pub scf_id: String,
    pub scf_name: String,
    pub framework_control_ids: Vec<String>,
    pub weight: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mapping {
    pub scf_id: String,
    pub scf_name: String,
    pub source_controls: Vec<String>,
    /// Empty when the control has no equivalent in the target framework.
    pub target_controls: Vec<String>,
    pub weight: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameworkGroup {
    pub category: String,
    pub frameworks: Vec<Framework>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub controls: usize,
    pub frameworks: usize,
    pub categories: usize,
    pub top_frameworks: Vec<Framework>,
}

// --- ENGINE ---

#[derive(Debug, Clone, Copy)]
pub struct QueryEngine<'a> {
    dataset: &'a Dataset,
}

impl<'a> QueryEngine<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }

    pub fn dataset(&self) -> &'a Dataset {
        self.dataset
    }

    /// Exact lookup by SCF id.
    pub fn get_control(&self, control_id: &str) -> Option<&'a Control> {
        self.dataset.control(control_id)
    }

    /// Case-insensitive substring search over name and description, in source order.
    ///
    /// With a non-empty `frameworks` filter a hit must also be mapped to at least one
    /// of the keys. Stops after `limit` hits; a zero limit yields nothing.
    pub fn search_controls(
        &self,
        query: &str,
        frameworks: Option<&[String]>,
        limit: usize,
    ) -> Vec<SearchHit> {
        if limit == 0 {
            return Vec::new();
        }
        let needle = FoldedText::new(query);
        let filter = frameworks.filter(|keys| !keys.is_empty());

        let mut hits = Vec::new();
        for (control, text) in self.dataset.searchable() {
            if !(text.name.contains(&needle) || text.description.contains(&needle)) {
                continue;
            }
            if let Some(keys) = filter {
                if !keys.iter().any(|key| control.is_mapped_to(key)) {
                    continue;
                }
            }

            hits.push(SearchHit {
                control_id: control.id.clone(),
                name: control.name.clone(),
                snippet: snippet::extract(&text.description, &needle),
                relevance: SEARCH_RELEVANCE,
                mapped_frameworks: control.mapped_frameworks(),
            });

            if hits.len() >= limit {
                break;
            }
        }
        hits
    }

    /// Every control mapped to `framework_key`, in source order.
    /// An unknown key is indistinguishable from an unmapped one: both give an empty list.
    pub fn get_framework_controls(
        &self,
        framework_key: &str,
        include_descriptions: bool,
    ) -> Vec<FrameworkControlRow> {
        self.dataset
            .controls()
            .iter()
            .filter_map(|control| {
                let ids = control.mappings_for(framework_key)?;
                Some(FrameworkControlRow {
                    scf_id: control.id.clone(),
                    scf_name: control.name.clone(),
                    framework_control_ids: ids.to_vec(),
                    weight: control.weight,
                    description: include_descriptions.then(|| control.description.clone()),
                })
            })
            .collect()
    }

    /// Pivots through SCF ids: each control mapped to `source_key` yields one row with
    /// what the same control maps to under `target_key`.
    ///
    /// `source_control_id` keeps only rows whose source list contains it verbatim.
    pub fn map_frameworks(
        &self,
        source_key: &str,
        target_key: &str,
        source_control_id: Option<&str>,
    ) -> Vec<Mapping> {
        self.dataset
            .controls()
            .iter()
            .filter_map(|control| {
                let source = control.mappings_for(source_key)?;
                if let Some(wanted) = source_control_id {
                    if !source.iter().any(|id| id == wanted) {
                        return None;
                    }
                }
                let target = control.mappings_for(target_key).unwrap_or(&[]);
                Some(Mapping {
                    scf_id: control.id.clone(),
                    scf_name: control.name.clone(),
                    source_controls: source.to_vec(),
                    target_controls: target.to_vec(),
                    weight: control.weight,
                })
            })
            .collect()
    }

    /// Registered frameworks by coverage. With a category, only its registered members.
    /// `None` when the category does not exist.
    pub fn list_frameworks(&self, category: Option<&str>) -> Option<Vec<&'a Framework>> {
        let registry = self.dataset.frameworks();
        let sorted = registry.by_coverage();
        match category {
            None => Some(sorted),
            Some(name) => {
                let members = self.category_members(name)?;
                Some(
                    sorted
                        .into_iter()
                        .filter(|fw| members.contains(&fw.key.as_str()))
                        .collect(),
                )
            }
        }
    }

    /// Registered frameworks grouped by category, in category-table order.
    /// Registered frameworks outside every category close the list.
    pub fn frameworks_by_category(&self) -> Vec<FrameworkGroup> {
        let registry = self.dataset.frameworks();
        let mut groups: Vec<FrameworkGroup> = self
            .dataset
            .framework_categories()
            .iter()
            .map(|(category, keys)| {
                let mut frameworks: Vec<Framework> =
                    keys.iter().filter_map(|k| registry.get(k)).cloned().collect();
                frameworks.sort_by(|a, b| b.controls_mapped.cmp(&a.controls_mapped));
                FrameworkGroup {
                    category: category.to_string(),
                    frameworks,
                }
            })
            .filter(|group| !group.frameworks.is_empty())
            .collect();

        let uncategorized: Vec<Framework> = registry
            .by_coverage()
            .into_iter()
            .filter(|fw| {
                !self
                    .dataset
                    .framework_categories()
                    .iter()
                    .any(|(_, keys)| keys.contains(&fw.key.as_str()))
            })
            .cloned()
            .collect();
        if !uncategorized.is_empty() {
            groups.push(FrameworkGroup {
                category: UNCATEGORIZED.to_string(),
                frameworks: uncategorized,
            });
        }
        groups
    }

    /// Category names in table order.
    pub fn categories(&self) -> Vec<&'static str> {
        self.dataset
            .framework_categories()
            .iter()
            .map(|(name, _)| *name)
            .collect()
    }

    pub fn statistics(&self, top_n: usize) -> Statistics {
        let registry = self.dataset.frameworks();
        Statistics {
            controls: self.dataset.controls().len(),
            frameworks: registry.len(),
            categories: self.dataset.framework_categories().len(),
            top_frameworks: registry
                .by_coverage()
                .into_iter()
                .take(top_n)
                .cloned()
                .collect(),
        }
    }

    /// SCF ids that reference a framework-native control id.
    pub fn resolve_native_control(&self, framework_key: &str, native_id: &str) -> &'a [String] {
        self.dataset.reverse_index().scf_ids(framework_key, native_id)
    }

    fn category_members(&self, name: &str) -> Option<&'static [&'static str]> {
        self.dataset
            .framework_categories()
            .iter()
            .find(|(category, _)| *category == name)
            .map(|(_, keys)| *keys)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::testing::fixture_dataset;

    fn ids<T, F: Fn(&T) -> &str>(rows: &[T], f: F) -> Vec<&str> {
        rows.iter().map(f).collect()
    }

    // --- get_control ---

    #[test]
    fn test_get_control_returns_every_loaded_control() {
        let dataset = fixture_dataset();
        let engine = QueryEngine::new(&dataset);
        for control in dataset.controls() {
            assert_eq!(engine.get_control(&control.id), Some(control));
        }
        assert!(engine.get_control("nonexistent-id").is_none());
    }

    #[test]
    fn test_get_control_exact_lookup() {
        let dataset = fixture_dataset();
        let control = QueryEngine::new(&dataset).get_control("GOV-01").unwrap();
        assert!(control.name.contains("Cybersecurity"));
        assert_eq!(
            control.mappings_for("iso_27001_2022").unwrap(),
            ["5.1", "5.2"]
        );
        // Lookup is exact: no case folding on ids
        assert!(QueryEngine::new(&dataset).get_control("gov-01").is_none());
    }

    // --- search_controls ---

    #[test]
    fn test_search_matches_case_insensitively_in_source_order() {
        let dataset = fixture_dataset();
        let hits = QueryEngine::new(&dataset).search_controls("CYBERSECURITY", None, 10);
        assert_eq!(ids(&hits, |h| h.control_id.as_str()), vec!["GOV-01", "GOV-02"]);
        assert!(hits.iter().all(|h| h.relevance == SEARCH_RELEVANCE));
    }

    #[test]
    fn test_search_encryption_scenario() {
        let dataset = fixture_dataset();
        let engine = QueryEngine::new(&dataset);
        let hits = engine.search_controls("encryption", None, 5);

        assert!(hits.len() <= 5);
        assert!(!hits.is_empty());
        for hit in &hits {
            let control = engine.get_control(&hit.control_id).unwrap();
            assert!(
                control.name.to_lowercase().contains("encryption")
                    || control.description.to_lowercase().contains("encryption")
            );
        }
    }

    #[test]
    fn test_search_finds_every_match_within_limit() {
        let dataset = fixture_dataset();
        let engine = QueryEngine::new(&dataset);
        for query in ["program", "o", "data", "response"] {
            let expected: Vec<&str> = dataset
                .controls()
                .iter()
                .filter(|c| {
                    c.name.to_lowercase().contains(query)
                        || c.description.to_lowercase().contains(query)
                })
                .map(|c| c.id.as_str())
                .take(3)
                .collect();
            let hits = engine.search_controls(query, None, 3);
            assert_eq!(ids(&hits, |h| h.control_id.as_str()), expected, "query '{query}'");
        }
    }

    #[test]
    fn test_search_limit_short_circuits() {
        let dataset = fixture_dataset();
        let engine = QueryEngine::new(&dataset);
        assert_eq!(engine.search_controls("o", None, 2).len(), 2);
        assert!(engine.search_controls("o", None, 0).is_empty());
    }

    #[test]
    fn test_search_framework_filter_only_narrows() {
        let dataset = fixture_dataset();
        let engine = QueryEngine::new(&dataset);
        let filters: [&[&str]; 4] = [&["dora"], &["gdpr", "dora"], &["pci_dss_4.0.1"], &["nope"]];
        for query in ["cryptographic", "program", "data", "o"] {
            let unfiltered = engine.search_controls(query, None, 10);
            for filter in filters {
                let keys: Vec<String> = filter.iter().map(|s| s.to_string()).collect();
                let filtered = engine.search_controls(query, Some(&keys), 10);
                assert!(filtered.len() <= unfiltered.len());
                for hit in &filtered {
                    let control = engine.get_control(&hit.control_id).unwrap();
                    assert!(keys.iter().any(|k| control.is_mapped_to(k)));
                }
            }
        }
    }

    #[test]
    fn test_search_filter_uses_or_semantics() {
        let dataset = fixture_dataset();
        let engine = QueryEngine::new(&dataset);
        let keys = vec!["dora".to_string(), "gdpr".to_string()];
        let hits = engine.search_controls("data", Some(&keys), 10);
        // GOV-02 also matches "data" but is mapped to neither framework
        assert_eq!(ids(&hits, |h| h.control_id.as_str()), vec!["CRY-05", "PRI-01"]);
    }

    #[test]
    fn test_empty_filter_is_no_filter() {
        let dataset = fixture_dataset();
        let engine = QueryEngine::new(&dataset);
        let none = engine.search_controls("boundary", None, 10);
        let empty = engine.search_controls("boundary", Some(&[]), 10);
        assert_eq!(none, empty);
        assert_eq!(none.len(), 1);
        assert!(none[0].mapped_frameworks.is_empty());
    }

    #[test]
    fn test_search_hit_shape() {
        let dataset = fixture_dataset();
        let hits = QueryEngine::new(&dataset).search_controls("at rest", None, 10);
        assert_eq!(hits.len(), 1);
        let hit = &hits[0];
        assert_eq!(hit.control_id, "CRY-05");
        assert_eq!(hit.snippet, "Encryption of Data at Rest");
        assert_eq!(
            hit.mapped_frameworks,
            vec!["soc_2_tsc", "iso_27001_2022", "gdpr", "nist_csf_2.0"]
        );
    }

    #[test]
    fn test_search_no_results() {
        let dataset = fixture_dataset();
        assert!(QueryEngine::new(&dataset)
            .search_controls("quantum teleportation", None, 10)
            .is_empty());
    }

    // --- get_framework_controls ---

    #[test]
    fn test_framework_controls_match_registry_counts() {
        let dataset = fixture_dataset();
        let engine = QueryEngine::new(&dataset);
        for framework in dataset.frameworks().iter() {
            let rows = engine.get_framework_controls(&framework.key, false);
            assert_eq!(rows.len(), framework.controls_mapped, "{}", framework.key);
        }
    }

    #[test]
    fn test_framework_controls_rows() {
        let dataset = fixture_dataset();
        let engine = QueryEngine::new(&dataset);
        let rows = engine.get_framework_controls("dora", false);

        assert_eq!(
            ids(&rows, |r| r.scf_id.as_str()),
            vec!["GOV-01", "CRY-01", "IAC-01", "IRO-01"]
        );
        assert_eq!(rows[0].framework_control_ids, vec!["5.1", "6.1"]);
        assert_eq!(rows[0].weight, 10);
        assert!(rows.iter().all(|r| r.description.is_none()));

        let with_descriptions = engine.get_framework_controls("dora", true);
        assert_eq!(
            with_descriptions[1].description.as_deref(),
            Some("Use of Cryptographic Controls")
        );
    }

    #[test]
    fn test_framework_controls_unknown_key_is_empty() {
        let dataset = fixture_dataset();
        let engine = QueryEngine::new(&dataset);
        assert!(engine.get_framework_controls("not_a_real_framework", false).is_empty());
        // A known key with only null mappings looks the same at this layer
        assert!(engine.get_framework_controls("pci_dss_4.0.1", false).is_empty());
    }

    #[test]
    fn test_framework_controls_outside_name_table() {
        let dataset = fixture_dataset();
        let rows = QueryEngine::new(&dataset).get_framework_controls("internal_baseline", false);
        assert_eq!(ids(&rows, |r| r.scf_id.as_str()), vec!["GOV-01"]);
    }

    // --- map_frameworks ---

    #[test]
    fn test_map_frameworks_pivots_through_scf() {
        let dataset = fixture_dataset();
        let mappings = QueryEngine::new(&dataset).map_frameworks("iso_27001_2022", "dora", None);

        assert_eq!(
            ids(&mappings, |m| m.scf_id.as_str()),
            vec!["GOV-01", "GOV-02", "CRY-01", "CRY-05", "IAC-01", "IRO-01"]
        );
        assert!(mappings.iter().all(|m| !m.source_controls.is_empty()));
        assert_eq!(mappings[0].target_controls, vec!["5.1", "6.1"]);
        assert_eq!(mappings[4].source_controls, vec!["5.15", "5.16"]);
    }

    #[test]
    fn test_map_frameworks_without_target_equivalent() {
        let dataset = fixture_dataset();
        let mappings = QueryEngine::new(&dataset).map_frameworks("iso_27001_2022", "dora", None);
        let gov02 = mappings.iter().find(|m| m.scf_id == "GOV-02").unwrap();
        assert!(gov02.target_controls.is_empty());
        assert_eq!(gov02.weight, 5);
    }

    #[test]
    fn test_map_frameworks_filtered_by_source_control() {
        let dataset = fixture_dataset();
        let engine = QueryEngine::new(&dataset);
        let filtered = engine.map_frameworks("iso_27001_2022", "dora", Some("5.1"));

        assert_eq!(ids(&filtered, |m| m.scf_id.as_str()), vec!["GOV-01", "GOV-02"]);
        assert!(filtered.iter().all(|m| m.source_controls.iter().any(|c| c == "5.1")));

        let unfiltered = engine.map_frameworks("iso_27001_2022", "dora", None);
        assert!(filtered.len() <= unfiltered.len());
    }

    #[test]
    fn test_map_frameworks_filter_is_exact() {
        let dataset = fixture_dataset();
        let engine = QueryEngine::new(&dataset);
        // "5.1" must not match "5.15" or "5.16"
        let filtered = engine.map_frameworks("iso_27001_2022", "dora", Some("5.1"));
        assert!(filtered.iter().all(|m| m.scf_id != "IAC-01"));
        assert!(engine.map_frameworks("iso_27001_2022", "dora", Some("5")).is_empty());
    }

    #[test]
    fn test_map_frameworks_empty_paths() {
        let dataset = fixture_dataset();
        let engine = QueryEngine::new(&dataset);
        assert!(engine.map_frameworks("pci_dss_4.0.1", "dora", None).is_empty());
        assert!(engine.map_frameworks("not_a_real_framework", "dora", None).is_empty());
        // Unknown target is a valid pivot with no equivalents
        let rows = engine.map_frameworks("dora", "not_a_real_framework", None);
        assert_eq!(rows.len(), 4);
        assert!(rows.iter().all(|m| m.target_controls.is_empty()));
    }

    // --- idempotence ---

    #[test]
    fn test_operations_are_idempotent() {
        let dataset = fixture_dataset();
        let engine = QueryEngine::new(&dataset);
        let keys = vec!["gdpr".to_string()];

        assert_eq!(engine.get_control("CRY-01"), engine.get_control("CRY-01"));
        assert_eq!(
            engine.search_controls("data", Some(&keys), 10),
            engine.search_controls("data", Some(&keys), 10)
        );
        assert_eq!(
            engine.get_framework_controls("gdpr", true),
            engine.get_framework_controls("gdpr", true)
        );
        assert_eq!(
            engine.map_frameworks("gdpr", "soc_2_tsc", None),
            engine.map_frameworks("gdpr", "soc_2_tsc", None)
        );
    }

    #[test]
    fn test_concurrent_readers() {
        let dataset = fixture_dataset();
        let expected = QueryEngine::new(&dataset).map_frameworks("soc_2_tsc", "gdpr", None);
        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    let engine = QueryEngine::new(&dataset);
                    assert_eq!(engine.map_frameworks("soc_2_tsc", "gdpr", None), expected);
                });
            }
        });
    }

    // --- registry accessors ---

    #[test]
    fn test_list_frameworks_by_coverage() {
        let dataset = fixture_dataset();
        let engine = QueryEngine::new(&dataset);
        let all = engine.list_frameworks(None).unwrap();
        assert_eq!(
            ids(&all, |f| f.key.as_str()),
            vec!["soc_2_tsc", "iso_27001_2022", "gdpr", "nist_csf_2.0", "dora"]
        );

        let financial = engine.list_frameworks(Some("financial")).unwrap();
        assert_eq!(ids(&financial, |f| f.key.as_str()), vec!["soc_2_tsc", "dora"]);

        assert!(engine.list_frameworks(Some("fake_category")).is_none());
        // Known category whose members are all unmapped
        assert_eq!(engine.list_frameworks(Some("automotive")).unwrap().len(), 0);
    }

    #[test]
    fn test_frameworks_by_category_skips_empty_groups() {
        let dataset = fixture_dataset();
        let groups = QueryEngine::new(&dataset).frameworks_by_category();
        let eu = groups.iter().find(|g| g.category == "eu_regulations").unwrap();
        assert_eq!(ids(&eu.frameworks, |f| f.key.as_str()), vec!["gdpr", "dora"]);
        assert!(groups.iter().all(|g| !g.frameworks.is_empty()));
        assert!(groups.iter().all(|g| g.category != UNCATEGORIZED));
    }

    #[test]
    fn test_statistics() {
        let dataset = fixture_dataset();
        let stats = QueryEngine::new(&dataset).statistics(2);
        assert_eq!(stats.controls, 8);
        assert_eq!(stats.frameworks, 5);
        assert_eq!(ids(&stats.top_frameworks, |f| f.key.as_str()), vec!["soc_2_tsc", "iso_27001_2022"]);
    }

    #[test]
    fn test_resolve_native_control() {
        let dataset = fixture_dataset();
        let engine = QueryEngine::new(&dataset);
        assert_eq!(engine.resolve_native_control("iso_27001_2022", "8.24"), ["CRY-01", "CRY-05"]);
        assert!(engine.resolve_native_control("iso_27001_2022", "99.9").is_empty());
    }
}
