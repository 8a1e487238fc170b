// scf-core/src/domain/catalog/control.rs

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

pub const DEFAULT_WEIGHT: u8 = 5;
pub const DEFAULT_VALIDATION_CADENCE: &str = "Annual";

/// SCF ids look like `GOV-01` or `CRY-01.2`.
fn control_id_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[A-Z]{2,5}-\d{2}(\.\d{1,2})?$")
            .unwrap_or_else(|_| Regex::new("$^").unwrap_or_else(|_| unreachable!()))
    })
}

pub fn is_well_formed_id(id: &str) -> bool {
    control_id_regex().is_match(id)
}

/// One requirement of the SCF master catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Control {
    /// Primary key, stable across releases (ex: "GOV-01").
    pub id: String,
    pub domain: String,
    pub name: String,
    /// Searchable text body. Equal to `name` in the shipped release.
    pub description: String,
    /// Criticality, 1 to 10.
    pub weight: u8,
    pub pptdf: String,
    pub validation_cadence: String,
    pub framework_mappings: FrameworkMappings,
}

impl Control {
    /// Native ids this control satisfies under `framework_key`.
    /// `None` covers both an explicit null and an empty list.
    pub fn mappings_for(&self, framework_key: &str) -> Option<&[String]> {
        self.framework_mappings.get(framework_key)
    }

    pub fn is_mapped_to(&self, framework_key: &str) -> bool {
        self.mappings_for(framework_key).is_some()
    }

    /// Framework keys with a non-empty mapping, in source order.
    pub fn mapped_frameworks(&self) -> Vec<String> {
        self.framework_mappings
            .mapped()
            .map(|(key, _)| key.to_string())
            .collect()
    }
}

/// Per-control mapping table: framework key -> native control ids.
///
/// Entries keep their source order (deterministic output) while lookups by key
/// stay O(1) through a position index.
#[derive(Debug, Clone, Default)]
pub struct FrameworkMappings {
    entries: Vec<(String, Option<Vec<String>>)>,
    positions: HashMap<String, usize>,
}

impl FrameworkMappings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the mapping for a key. A repeated key replaces the earlier value in place.
    pub fn insert(&mut self, key: impl Into<String>, ids: Option<Vec<String>>) {
        let key = key.into();
        match self.positions.get(&key) {
            Some(&pos) => self.entries[pos].1 = ids,
            None => {
                self.positions.insert(key.clone(), self.entries.len());
                self.entries.push((key, ids));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        let pos = *self.positions.get(key)?;
        match &self.entries[pos].1 {
            Some(ids) if !ids.is_empty() => Some(ids.as_slice()),
            _ => None,
        }
    }

    /// Whether the key is present at all, mapped or not.
    pub fn contains_key(&self, key: &str) -> bool {
        self.positions.contains_key(key)
    }

    /// All entries, nulls included, in source order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&[String]>)> {
        self.entries
            .iter()
            .map(|(key, ids)| (key.as_str(), ids.as_deref()))
    }

    /// Non-empty entries only, in source order.
    pub fn mapped(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries.iter().filter_map(|(key, ids)| match ids {
            Some(ids) if !ids.is_empty() => Some((key.as_str(), ids.as_slice())),
            _ => None,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// Position index is derived, equality is on the ordered entries only.
impl PartialEq for FrameworkMappings {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K: Into<String>> FromIterator<(K, Option<Vec<String>>)> for FrameworkMappings {
    fn from_iter<I: IntoIterator<Item = (K, Option<Vec<String>>)>>(iter: I) -> Self {
        let mut mappings = Self::new();
        for (key, ids) in iter {
            mappings.insert(key, ids);
        }
        mappings
    }
}

impl Serialize for FrameworkMappings {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, ids) in &self.entries {
            map.serialize_entry(key, ids)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FrameworkMappings {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MappingsVisitor;

        impl<'de> Visitor<'de> for MappingsVisitor {
            type Value = FrameworkMappings;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of framework key to null or a list of control ids")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut mappings = FrameworkMappings::new();
                while let Some((key, ids)) = access.next_entry::<String, Option<Vec<String>>>()? {
                    mappings.insert(key, ids);
                }
                Ok(mappings)
            }
        }

        deserializer.deserialize_map(MappingsVisitor)
    }
}
