// scf-core/src/infrastructure/dataset/mod.rs

pub mod json;

pub use json::{JsonDatasetLoader, parse_controls, parse_reverse_index};
