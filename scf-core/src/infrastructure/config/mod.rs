pub mod loader;

pub use crate::domain::configuration::{DatasetConfig, DisplaySettings, ScfConfig, SearchSettings};
pub use loader::load_config;
