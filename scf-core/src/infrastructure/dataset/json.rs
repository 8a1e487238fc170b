// scf-core/src/infrastructure/dataset/json.rs
//
// Reads the two files produced by the SCF extraction script:
// - scf-controls.json:     { "controls": [ { id, domain, name, ... }, ... ] }
// - framework-to-scf.json: { framework_key: { native_id: [scf_id, ...] } }

use anyhow::Context;
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument, warn};

use crate::domain::catalog::control::{DEFAULT_VALIDATION_CADENCE, DEFAULT_WEIGHT};
use crate::domain::catalog::{Control, FrameworkMappings, ReverseIndex};
use crate::domain::ports::{DatasetSource, RawDataset};
use crate::error::ScfError;
use crate::infrastructure::config::DatasetConfig;
use crate::infrastructure::error::InfrastructureError;

const MIN_WEIGHT: u8 = 1;
const MAX_WEIGHT: u8 = 10;

/// File-backed `DatasetSource`.
#[derive(Debug, Clone)]
pub struct JsonDatasetLoader {
    controls_path: PathBuf,
    reverse_index_path: PathBuf,
}

impl JsonDatasetLoader {
    pub fn new(controls_path: impl Into<PathBuf>, reverse_index_path: impl Into<PathBuf>) -> Self {
        Self {
            controls_path: controls_path.into(),
            reverse_index_path: reverse_index_path.into(),
        }
    }

    pub fn from_config(config: &DatasetConfig) -> Self {
        Self::new(
            config.data_dir.join(&config.controls_file),
            config.data_dir.join(&config.reverse_index_file),
        )
    }
}

impl DatasetSource for JsonDatasetLoader {
    #[instrument(skip(self), fields(controls = ?self.controls_path, reverse_index = ?self.reverse_index_path))]
    fn load(&self) -> Result<RawDataset, ScfError> {
        let controls = parse_controls(&read_file(&self.controls_path)?)?;
        info!(count = controls.len(), "Controls loaded");

        let reverse_index = parse_reverse_index(&read_file(&self.reverse_index_path)?)?;
        info!(frameworks = reverse_index.len(), "Reverse index loaded");

        Ok(RawDataset {
            controls,
            reverse_index,
        })
    }
}

fn read_file(path: &Path) -> Result<String, InfrastructureError> {
    if !path.exists() {
        return Err(InfrastructureError::DatasetNotFound(
            path.display().to_string(),
        ));
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read dataset file at {:?}", path))?;
    Ok(content)
}

// --- RECORD PARSING ---

#[derive(Deserialize)]
struct ControlsFile {
    controls: Vec<RawControl>,
}

#[derive(Deserialize)]
struct RawControl {
    id: String,
    #[serde(default)]
    domain: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    weight: Option<Value>,
    #[serde(default)]
    pptdf: Option<String>,
    #[serde(default)]
    validation_cadence: Option<String>,
    #[serde(default)]
    framework_mappings: FrameworkMappings,
}

impl From<RawControl> for Control {
    fn from(raw: RawControl) -> Self {
        let name = raw.name.unwrap_or_default();
        let description = raw.description.unwrap_or_else(|| name.clone());
        let validation_cadence = raw
            .validation_cadence
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_VALIDATION_CADENCE.to_string());

        Control {
            weight: parse_weight(raw.weight.as_ref()),
            id: raw.id,
            domain: raw.domain.unwrap_or_default(),
            name,
            description,
            pptdf: raw.pptdf.unwrap_or_default(),
            validation_cadence,
            framework_mappings: raw.framework_mappings,
        }
    }
}

/// Integer weights (or all-digit strings) are kept, clamped to 1..=10.
/// Anything else falls back to the default weight.
fn parse_weight(value: Option<&Value>) -> u8 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_u64(),
        Some(Value::String(s)) if !s.is_empty() && s.chars().all(|c| c.is_ascii_digit()) => {
            s.parse::<u64>().ok()
        }
        _ => None,
    };
    match parsed {
        Some(w) => w.clamp(MIN_WEIGHT as u64, MAX_WEIGHT as u64) as u8,
        None => DEFAULT_WEIGHT,
    }
}

/// Parses the controls file, keeping record order.
pub fn parse_controls(content: &str) -> Result<Vec<Control>, InfrastructureError> {
    let file: ControlsFile = serde_json::from_str(content)?;
    let controls: Vec<Control> = file.controls.into_iter().map(Control::from).collect();
    if let Some(empty) = controls.iter().find(|c| c.id.trim().is_empty()) {
        warn!(name = %empty.name, "Control record with an empty id");
    }
    Ok(controls)
}

pub fn parse_reverse_index(content: &str) -> Result<ReverseIndex, InfrastructureError> {
    Ok(serde_json::from_str(content)?)
}
