use std::path::Path;

use figment::providers::{Env, Format, Yaml};
use figment::Figment;

use crate::domain::models::ConfigDocument;
use crate::domain::{ConfigError, ConfigResult};
use crate::services::DefaultsProvider;

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Prefix of environment overrides, `__` separates nested keys
    pub const ENV_PREFIX: &'static str = "CHECKER_";

    /// Load the configuration document
    ///
    /// Precedence (lowest to highest):
    /// 1. Built-in defaults ([`DefaultsProvider`])
    /// 2. The YAML file at `path`, when given
    /// 3. Environment variables (`CHECKER_*`, e.g. `CHECKER_CHECKER__CHECK_INTERVAL=15s`)
    ///
    /// Intervals are not parsed here; that happens during resolution.
    pub fn load(path: Option<&Path>) -> ConfigResult<ConfigDocument> {
        let mut figment = Figment::new();
        if let Some(path) = path {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.to_path_buf()));
            }
            figment = figment.merge(Yaml::file(path));
        }

        let document: ConfigDocument = figment
            .merge(Env::prefixed(Self::ENV_PREFIX).split("__"))
            .extract()?;

        Ok(DefaultsProvider::complete(document))
    }

    /// Load from a YAML string, without environment overrides
    pub fn load_from_str(yaml: &str) -> ConfigResult<ConfigDocument> {
        let document: ConfigDocument = Figment::new().merge(Yaml::string(yaml)).extract()?;
        Ok(DefaultsProvider::complete(document))
    }

    /// Default document rendered as YAML
    pub fn default_document_yaml() -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(&DefaultsProvider::document())
    }
}
