// scf-core/src/domain/catalog/reverse_index.rs

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::control::Control;

/// framework key -> native control id -> SCF ids referencing it.
///
/// Logical inverse of every non-empty `framework_mappings` entry. Built once, read-only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReverseIndex(HashMap<String, HashMap<String, Vec<String>>>);

impl ReverseIndex {
    /// Inverts the per-control mappings. SCF ids keep control order.
    pub fn from_controls(controls: &[Control]) -> Self {
        let mut index: HashMap<String, HashMap<String, Vec<String>>> = HashMap::new();
        for control in controls {
            for (framework, native_ids) in control.framework_mappings.mapped() {
                let per_framework = index.entry(framework.to_string()).or_default();
                for native_id in native_ids {
                    let scf_ids = per_framework.entry(native_id.clone()).or_default();
                    if !scf_ids.contains(&control.id) {
                        scf_ids.push(control.id.clone());
                    }
                }
            }
        }
        Self(index)
    }

    /// SCF ids referencing `native_id` under `framework_key`. Empty when unknown.
    pub fn scf_ids(&self, framework_key: &str, native_id: &str) -> &[String] {
        self.0
            .get(framework_key)
            .and_then(|natives| natives.get(native_id))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Framework keys whose entries differ between the two indices, sorted.
    pub fn diverging_frameworks(&self, other: &ReverseIndex) -> Vec<String> {
        let mut keys: Vec<&String> = self.0.keys().chain(other.0.keys()).collect();
        keys.sort();
        keys.dedup();
        keys.into_iter()
            .filter(|key| self.0.get(*key) != other.0.get(*key))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
