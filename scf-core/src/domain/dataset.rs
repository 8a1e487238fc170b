// scf-core/src/domain/dataset.rs

use std::collections::HashMap;
use tracing::{debug, info, warn};

use crate::domain::catalog::categories::FRAMEWORK_CATEGORIES;
use crate::domain::catalog::control::is_well_formed_id;
use crate::domain::catalog::names::FRAMEWORK_NAMES;
use crate::domain::catalog::{Control, FrameworkRegistry, ReverseIndex};
use crate::domain::ports::{DatasetSource, RawDataset};
use crate::domain::snippet::FoldedText;
use crate::error::ScfError;

/// Case-folded searchable fields of one control, aligned with `Dataset::controls`.
#[derive(Debug, Clone)]
pub(crate) struct SearchText {
    pub name: FoldedText,
    pub description: FoldedText,
}

/// The immutable, fully indexed catalog.
///
/// Built once before any query is served and never mutated afterwards, so a shared
/// reference can be read from any number of threads.
#[derive(Debug, Clone)]
pub struct Dataset {
    controls: Vec<Control>,
    controls_by_id: HashMap<String, usize>,
    search_texts: Vec<SearchText>,
    reverse_index: ReverseIndex,
    frameworks: FrameworkRegistry,
    categories: &'static [(&'static str, &'static [&'static str])],
}

impl Dataset {
    /// Loads from a source and indexes the result.
    pub fn from_source(source: &dyn DatasetSource) -> Result<Self, ScfError> {
        let raw = source.load()?;
        Ok(Self::build(raw))
    }

    pub fn build(raw: RawDataset) -> Self {
        let RawDataset {
            controls,
            reverse_index,
        } = raw;

        // Single pass. A repeated id keeps the later record.
        let mut controls_by_id = HashMap::with_capacity(controls.len());
        for (pos, control) in controls.iter().enumerate() {
            if controls_by_id.insert(control.id.clone(), pos).is_some() {
                warn!(id = %control.id, "Duplicate control id, later record wins");
            }
        }

        let malformed = controls
            .iter()
            .filter(|c| !is_well_formed_id(&c.id))
            .inspect(|c| debug!(id = %c.id, "Control id outside the usual SCF format"))
            .count();
        if malformed > 0 {
            warn!(malformed, "Controls with unusual ids");
        }

        let search_texts = controls
            .iter()
            .map(|c| SearchText {
                name: FoldedText::new(&c.name),
                description: FoldedText::new(&c.description),
            })
            .collect();

        let frameworks = FrameworkRegistry::build(FRAMEWORK_NAMES.iter().copied(), &controls);

        for (category, keys) in FRAMEWORK_CATEGORIES {
            let hidden = keys.iter().filter(|k| !frameworks.contains(k)).count();
            if hidden > 0 {
                debug!(category, hidden, "Category members without mapped controls");
            }
        }

        let drift = reverse_index.diverging_frameworks(&ReverseIndex::from_controls(&controls));
        if !drift.is_empty() {
            debug!(frameworks = ?drift, "Reverse index differs from control mappings");
        }

        info!(
            controls = controls.len(),
            frameworks = frameworks.len(),
            categories = FRAMEWORK_CATEGORIES.len(),
            "Dataset indexed"
        );

        Self {
            controls,
            controls_by_id,
            search_texts,
            reverse_index,
            frameworks,
            categories: FRAMEWORK_CATEGORIES,
        }
    }

    /// Controls in source order.
    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    pub fn control(&self, id: &str) -> Option<&Control> {
        self.controls_by_id.get(id).map(|&pos| &self.controls[pos])
    }

    pub(crate) fn searchable(&self) -> impl Iterator<Item = (&Control, &SearchText)> {
        self.controls.iter().zip(self.search_texts.iter())
    }

    pub fn frameworks(&self) -> &FrameworkRegistry {
        &self.frameworks
    }

    /// Category table, as compiled in.
    pub fn framework_categories(&self) -> &'static [(&'static str, &'static [&'static str])] {
        self.categories
    }

    pub fn reverse_index(&self) -> &ReverseIndex {
        &self.reverse_index
    }

    /// Framework keys whose loaded reverse-index entries differ from the inverse
    /// of the control mappings.
    pub fn reverse_index_drift(&self) -> Vec<String> {
        let derived = ReverseIndex::from_controls(&self.controls);
        self.reverse_index.diverging_frameworks(&derived)
    }
}
