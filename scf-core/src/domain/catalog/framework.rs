// scf-core/src/domain/catalog/framework.rs

use serde::Serialize;
use std::collections::HashMap;

use super::control::Control;

/// An external regulatory or standards catalog with at least one mapped control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Framework {
    pub key: String,
    pub name: String,
    /// Number of controls with a non-empty mapping to this framework.
    pub controls_mapped: usize,
}

/// Frameworks visible to consumers, in name-table order.
///
/// Only built from the control set, so counts cannot drift from the source of truth.
#[derive(Debug, Clone, Default)]
pub struct FrameworkRegistry {
    frameworks: Vec<Framework>,
    by_key: HashMap<String, usize>,
}

impl FrameworkRegistry {
    /// Counts mapped controls for every known `(key, name)` pair and keeps the
    /// pairs with a count above zero.
    pub fn build<'a>(
        names: impl IntoIterator<Item = (&'a str, &'a str)>,
        controls: &[Control],
    ) -> Self {
        let mut registry = Self::default();
        for (key, name) in names {
            if registry.by_key.contains_key(key) {
                continue;
            }
            let controls_mapped = controls.iter().filter(|c| c.is_mapped_to(key)).count();
            if controls_mapped > 0 {
                registry
                    .by_key
                    .insert(key.to_string(), registry.frameworks.len());
                registry.frameworks.push(Framework {
                    key: key.to_string(),
                    name: name.to_string(),
                    controls_mapped,
                });
            }
        }
        registry
    }

    pub fn get(&self, key: &str) -> Option<&Framework> {
        self.by_key.get(key).map(|&pos| &self.frameworks[pos])
    }

    pub fn contains(&self, key: &str) -> bool {
        self.by_key.contains_key(key)
    }

    /// Registry order (name-table order).
    pub fn iter(&self) -> impl Iterator<Item = &Framework> {
        self.frameworks.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.frameworks.iter().map(|f| f.key.as_str())
    }

    /// Frameworks by coverage, most mapped first. Ties keep registry order.
    pub fn by_coverage(&self) -> Vec<&Framework> {
        let mut sorted: Vec<&Framework> = self.frameworks.iter().collect();
        sorted.sort_by(|a, b| b.controls_mapped.cmp(&a.controls_mapped));
        sorted
    }

    pub fn len(&self) -> usize {
        self.frameworks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frameworks.is_empty()
    }
}
