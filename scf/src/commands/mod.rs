// scf/src/commands/mod.rs
//
// One module per group of subcommands. `main` opens the `Session` once; each handler
// (`controls::get`, `mapping::map`, ...) calls the `ControlService` facade and prints
// through `Session::emit`.

pub mod controls;
pub mod frameworks;
pub mod mapping;
pub mod status;

use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use tracing::{debug, info, instrument};

use scf_core::application::{ControlService, QueryEngine};
use scf_core::domain::Dataset;
use scf_core::infrastructure::config::{ScfConfig, load_config};
use scf_core::infrastructure::dataset::JsonDatasetLoader;

use crate::cli::{GlobalArgs, OutputFormat};

/// Configuration plus the indexed dataset, loaded once per invocation.
pub struct Session {
    pub config: ScfConfig,
    pub dataset: Dataset,
    pub format: OutputFormat,
}

impl Session {
    #[instrument(skip_all, fields(config_dir = ?global.config_dir))]
    pub fn open(global: &GlobalArgs) -> Result<Self> {
        let mut config = load_config(&global.config_dir)?;
        if let Some(data_dir) = &global.data_dir {
            debug!(data_dir = ?data_dir, "Data dir overridden on the command line");
            config.dataset.data_dir = data_dir.clone();
        }

        let loader = JsonDatasetLoader::from_config(&config.dataset);
        let dataset = Dataset::from_source(&loader)?;
        info!(
            controls = dataset.controls().len(),
            version = %config.dataset.version,
            "Session ready"
        );

        Ok(Self {
            config,
            dataset,
            format: global.format,
        })
    }

    pub fn service(&self) -> ControlService<'_> {
        ControlService::new(
            QueryEngine::new(&self.dataset),
            self.config.search,
            self.config.dataset.version.clone(),
        )
    }

    /// Prints `value` as pretty JSON, or through the text renderer.
    pub fn emit<T: Serialize>(&self, value: &T, text: impl FnOnce(&T) -> String) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(value).into_diagnostic()?;
                println!("{}", json);
            }
            OutputFormat::Text => print!("{}", text(value)),
        }
        Ok(())
    }
}
