use super::{baseline::BaselineConfig, evolution::EvolutionConfig, traits::ConfigSection};
use crate::error::WeaselError;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Prefix of the environment variables read by [`ConfigManager::load_layered`],
/// e.g. `WEASEL_EVOLUTION__POPULATION_SIZE=20`.
pub const ENV_PREFIX: &str = "WEASEL";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub evolution: EvolutionConfig,
    pub baseline: BaselineConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), WeaselError> {
        self.evolution.validate()?;
        self.baseline.validate()?;
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct ConfigManager {
    config: AppConfig,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), WeaselError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| WeaselError::Configuration(format!("Failed to read config: {}", e)))?;

        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;

        self.config = config;
        Ok(())
    }

    /// Defaults, then the optional TOML file, then `WEASEL_*` environment
    /// variables.
    pub fn load_layered(&mut self, path: Option<&Path>) -> Result<(), WeaselError> {
        self.load_layered_from(path, Self::environment())
    }

    /// Like [`load_layered`](Self::load_layered) with an explicit environment
    /// source.
    pub fn load_layered_from(
        &mut self,
        path: Option<&Path>,
        environment: Environment,
    ) -> Result<(), WeaselError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            let name = path.to_str().ok_or_else(|| {
                WeaselError::Configuration(format!("Invalid config path: {}", path.display()))
            })?;
            builder = builder.add_source(File::new(name, FileFormat::Toml).required(true));
        }

        let config: AppConfig = builder.add_source(environment).build()?.try_deserialize()?;
        config.validate()?;

        self.config = config;
        Ok(())
    }

    pub fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), WeaselError> {
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String, WeaselError> {
        Ok(toml::to_string_pretty(&self.config)?)
    }

    pub fn get(&self) -> AppConfig {
        self.config.clone()
    }

    /// Apply `f` and keep the result only if it still validates.
    pub fn update<F>(&mut self, f: F) -> Result<(), WeaselError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut config = self.config.clone();
        f(&mut config);
        config.validate()?;
        self.config = config;
        Ok(())
    }
}
