use super::{
    optimizer::OptimizerConfig,
    orchestrator::OrchestratorConfig,
    traits::ConfigSection,
};
use crate::error::ProbeforgeError;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const ENV_PREFIX: &str = "PROBEFORGE";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub optimizer: OptimizerConfig,
    pub orchestrator: OrchestratorConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), ProbeforgeError> {
        self.optimizer.validate()?;
        self.orchestrator.validate()?;
        Ok(())
    }
}

pub struct ConfigManager {
    config: AppConfig,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    /// Layers defaults, an optional TOML file and `PROBEFORGE__SECTION__KEY`
    /// environment overrides, then validates the result.
    pub fn load(path: Option<&Path>) -> Result<Self, ProbeforgeError> {
        let mut builder = Config::builder().add_source(Config::try_from(&AppConfig::default())?);

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
        }

        let config: AppConfig = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate()?;
        log::debug!("Loaded configuration: {:?}", config);

        Ok(Self { config })
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ProbeforgeError> {
        std::fs::write(path, self.to_toml()?)
            .map_err(|e| ProbeforgeError::Configuration(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    pub fn to_toml(&self) -> Result<String, ProbeforgeError> {
        toml::to_string_pretty(&self.config)
            .map_err(|e| ProbeforgeError::Configuration(format!("Failed to serialize: {}", e)))
    }

    pub fn get(&self) -> &AppConfig {
        &self.config
    }

    pub fn update<F>(&mut self, f: F) -> Result<(), ProbeforgeError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut candidate = self.config.clone();
        f(&mut candidate);
        candidate.validate()?;
        self.config = candidate;
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
