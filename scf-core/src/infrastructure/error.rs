// scf-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(scf::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- DATASET / JSON ---
    #[error("JSON Parsing Error: {0}")]
    #[diagnostic(
        code(scf::infra::json),
        help("The dataset files must be produced by the SCF extraction script.")
    )]
    JsonError(#[from] serde_json::Error),

    #[error("Dataset file not found at '{0}'")]
    #[diagnostic(
        code(scf::infra::dataset_missing),
        help("Point --data-dir (or SCF_DATA_DIR) at the directory holding the SCF JSON files.")
    )]
    DatasetNotFound(String),

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(scf::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    YamlError(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    #[diagnostic(code(scf::infra::config_invalid))]
    InvalidConfig(#[from] validator::ValidationErrors),

    #[error("{0}")]
    #[diagnostic(code(scf::infra::context))]
    Context(String),
}

// Lets `with_context` (anyhow) flow through `?` on file reads.
impl From<anyhow::Error> for InfrastructureError {
    fn from(err: anyhow::Error) -> Self {
        InfrastructureError::Context(format!("{err:#}"))
    }
}
