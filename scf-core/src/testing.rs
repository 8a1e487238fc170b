// scf-core/src/testing.rs
//
// Shared fixture: the small catalog shipped under fixtures/data at the workspace root.

use crate::domain::dataset::Dataset;
use crate::domain::ports::RawDataset;
use crate::infrastructure::dataset::{parse_controls, parse_reverse_index};

const CONTROLS_JSON: &str = include_str!("../../fixtures/data/scf-controls.json");
const REVERSE_INDEX_JSON: &str = include_str!("../../fixtures/data/framework-to-scf.json");

#[allow(clippy::expect_used)]
pub(crate) fn fixture_raw() -> RawDataset {
    RawDataset {
        controls: parse_controls(CONTROLS_JSON).expect("fixture controls parse"),
        reverse_index: parse_reverse_index(REVERSE_INDEX_JSON).expect("fixture index parses"),
    }
}

pub(crate) fn fixture_dataset() -> Dataset {
    Dataset::build(fixture_raw())
}
