// src/domain/configuration.rs

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use validator::{Validate, ValidationError};

pub const DEFAULT_DATABASE_VERSION: &str = "SCF 2025.4";

#[derive(Debug, Deserialize, Serialize, Clone, Validate, Default)]
pub struct ScfConfig {
    #[serde(default)]
    pub dataset: DatasetConfig,

    #[validate(nested)]
    #[serde(default)]
    pub search: SearchSettings,

    #[validate(nested)]
    #[serde(default)]
    pub display: DisplaySettings,
}

/// Location and release label of the dataset files.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatasetConfig {
    #[serde(rename = "data-dir", default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(rename = "controls-file", default = "default_controls_file")]
    pub controls_file: String,

    #[serde(rename = "reverse-index-file", default = "default_reverse_index_file")]
    pub reverse_index_file: String,

    #[serde(default = "default_database_version")]
    pub version: String,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            controls_file: default_controls_file(),
            reverse_index_file: default_reverse_index_file(),
            version: default_database_version(),
        }
    }
}

/// Bounds applied to caller-supplied search limits.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Validate, PartialEq)]
#[validate(schema(function = "validate_limits"))]
pub struct SearchSettings {
    #[validate(range(min = 1, message = "default-limit must be at least 1"))]
    #[serde(rename = "default-limit", default = "default_limit")]
    pub default_limit: usize,

    #[validate(range(min = 1, max = 1000, message = "max-limit must be within 1..=1000"))]
    #[serde(rename = "max-limit", default = "default_max_limit")]
    pub max_limit: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
        }
    }
}

impl SearchSettings {
    /// Resolves a requested limit: default when absent, then clamped to `[1, max_limit]`.
    pub fn resolve_limit(&self, requested: Option<i64>) -> usize {
        match requested {
            None => self.default_limit.min(self.max_limit),
            Some(n) if n < 1 => 1,
            Some(n) => usize::try_from(n).map_or(self.max_limit, |n| n.min(self.max_limit)),
        }
    }
}

fn validate_limits(settings: &SearchSettings) -> Result<(), ValidationError> {
    if settings.default_limit > settings.max_limit {
        return Err(ValidationError::new("default_limit_above_max")
            .with_message("default-limit cannot exceed max-limit".into()));
    }
    Ok(())
}

/// Truncation applied by text renderers. Never affects query results.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, Validate, PartialEq)]
pub struct DisplaySettings {
    #[validate(range(min = 1))]
    #[serde(rename = "max-mappings", default = "default_max_mappings")]
    pub max_mappings: usize,

    #[validate(range(min = 1))]
    #[serde(rename = "max-per-domain", default = "default_max_per_domain")]
    pub max_per_domain: usize,

    #[validate(range(min = 1))]
    #[serde(rename = "max-ids", default = "default_max_ids")]
    pub max_ids: usize,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            max_mappings: default_max_mappings(),
            max_per_domain: default_max_per_domain(),
            max_ids: default_max_ids(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}
fn default_controls_file() -> String {
    "scf-controls.json".to_string()
}
fn default_reverse_index_file() -> String {
    "framework-to-scf.json".to_string()
}
fn default_database_version() -> String {
    DEFAULT_DATABASE_VERSION.to_string()
}
fn default_limit() -> usize {
    10
}
fn default_max_limit() -> usize {
    100
}
fn default_max_mappings() -> usize {
    20
}
fn default_max_per_domain() -> usize {
    10
}
fn default_max_ids() -> usize {
    5
}
