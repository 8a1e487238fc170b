// src/domain/ports/mod.rs

pub mod dataset;

pub use dataset::{DatasetSource, RawDataset};
