// scf-core/src/infrastructure/config/loader.rs

use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};
use validator::Validate;

use crate::domain::configuration::ScfConfig;
use crate::infrastructure::error::InfrastructureError;

const CONFIG_CANDIDATES: [&str; 3] = ["scf.yaml", "scf.yml", "scf_config.yaml"];

pub const ENV_DATA_DIR: &str = "SCF_DATA_DIR";
pub const ENV_DATABASE_VERSION: &str = "SCF_DATABASE_VERSION";

/// Loads `scf.yaml` from `config_dir`, falling back to defaults when no file exists.
///
/// Layering: file, then environment (`SCF_DATA_DIR`, `SCF_DATABASE_VERSION`).
/// A relative data directory is resolved against `config_dir`.
#[instrument(skip(config_dir))]
pub fn load_config(config_dir: &Path) -> Result<ScfConfig, InfrastructureError> {
    load_config_with_env(config_dir, |key| std::env::var(key).ok())
}

pub fn load_config_with_env(
    config_dir: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> Result<ScfConfig, InfrastructureError> {
    let mut config = match find_config_file(config_dir) {
        Some(path) => {
            info!(path = ?path, "Loading configuration");
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read configuration at {:?}", path))?;
            serde_yaml::from_str::<ScfConfig>(&content)?
        }
        None => ScfConfig::default(),
    };

    apply_env_overrides(&mut config, &env);

    if config.dataset.data_dir.is_relative() {
        config.dataset.data_dir = config_dir.join(&config.dataset.data_dir);
    }

    config.validate()?;
    Ok(config)
}

fn find_config_file(root: &Path) -> Option<PathBuf> {
    CONFIG_CANDIDATES
        .iter()
        .map(|name| root.join(name))
        .find(|p| p.exists())
}

fn apply_env_overrides(config: &mut ScfConfig, env: &impl Fn(&str) -> Option<String>) {
    if let Some(val) = env(ENV_DATA_DIR) {
        info!(old = ?config.dataset.data_dir, new = ?val, "Overriding data dir via ENV");
        config.dataset.data_dir = PathBuf::from(val);
    }
    if let Some(val) = env(ENV_DATABASE_VERSION) {
        info!(old = ?config.dataset.version, new = ?val, "Overriding database version via ENV");
        config.dataset.version = val;
    }
}
