//! Configuration file support for the WOD generator.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/wod/config.toml`.

use crate::{Catalog, Error, Exercise, Intensity, MuscleGroup, Result, WodRequest, MAX_TIME_LIMIT};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,

    #[serde(default)]
    pub generator: GeneratorConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Request used when user input is missing or malformed
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default = "default_time_limit")]
    pub time_limit: u32,

    #[serde(default = "default_intensity")]
    pub intensity: u8,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            time_limit: default_time_limit(),
            intensity: default_intensity(),
        }
    }
}

/// Random source settings
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct GeneratorConfig {
    /// Fixed seed for reproducible WODs
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Custom exercise definition
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CustomExercise {
    pub name: String,
    pub group: MuscleGroup,
    pub counts: [u32; 3],
    /// Held position, counted in seconds
    #[serde(default)]
    pub hold: bool,
}

impl CustomExercise {
    pub fn to_exercise(&self) -> Exercise {
        if self.hold {
            Exercise::hold(self.name.clone(), self.counts)
        } else {
            Exercise::reps(self.name.clone(), self.counts)
        }
    }
}

/// Catalog extensions
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct CatalogConfig {
    #[serde(default)]
    pub custom: Vec<CustomExercise>,
}

// Default value functions
fn default_time_limit() -> u32 {
    30
}

fn default_intensity() -> u8 {
    2
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path()?;
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.default_request()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> Result<PathBuf> {
        let base = dirs::config_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
            .ok_or_else(|| Error::Config("Unable to determine config directory".into()))?;
        Ok(base.join("wod").join("config.toml"))
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Fallback request described by the `[defaults]` section
    pub fn default_request(&self) -> Result<WodRequest> {
        let intensity = Intensity::from_tier(self.defaults.intensity)
            .map_err(|e| Error::Config(format!("[defaults] intensity: {}", e)))?;
        if self.defaults.time_limit > MAX_TIME_LIMIT {
            return Err(Error::Config(format!(
                "[defaults] time_limit {} exceeds {} minutes",
                self.defaults.time_limit, MAX_TIME_LIMIT
            )));
        }
        Ok(WodRequest::new(self.defaults.time_limit, intensity))
    }

    /// Catalog to generate from: the built-in one plus custom exercises
    pub fn catalog(&self) -> Result<Catalog> {
        crate::get_default_catalog().with_custom(&self.catalog.custom)
    }
}
