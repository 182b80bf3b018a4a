use crate::error::{NameError, Result as NameResult};
use crate::style::{Gender, Style};
use anyhow::{anyhow, Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const MIN_NAME_COUNT: usize = 1;
pub const MAX_NAME_COUNT: usize = 10;
pub const DEFAULT_NAME_COUNT: usize = 3;

/// Path to a JSON or TOML file with a [`NameConfig`].
pub const CONFIG_PATH_ENV: &str = "KOREAN_NAME_CONFIG";
/// Fixed RNG seed; overrides the `seed` field of the config file.
pub const SEED_ENV: &str = "KOREAN_NAME_SEED";

/// Tunables for name generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NameConfig {
    /// Smallest batch a request is clamped up to
    pub min_count: usize,

    /// Largest batch a request is clamped down to
    pub max_count: usize,

    /// Batch size when the caller gives none
    pub default_count: usize,

    pub default_style: Style,

    pub default_gender: Gender,

    /// Seed for reproducible output; entropy-seeded when absent
    pub seed: Option<u64>,
}

impl Default for NameConfig {
    fn default() -> Self {
        Self {
            min_count: MIN_NAME_COUNT,
            max_count: MAX_NAME_COUNT,
            default_count: DEFAULT_NAME_COUNT,
            default_style: Style::default(),
            default_gender: Gender::default(),
            seed: None,
        }
    }
}

impl NameConfig {
    /// Parse a config from JSON, falling back to TOML.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let value: serde_json::Value = match serde_json::from_slice(bytes) {
            Ok(value) => value,
            Err(json_err) => {
                let utf8 =
                    std::str::from_utf8(bytes).map_err(|err| anyhow!("{json_err}; {err}"))?;
                let toml_value: toml::Value = toml::from_str(utf8).map_err(|toml_err| {
                    anyhow!("Config is not valid JSON or TOML ({json_err}); TOML parse error: {toml_err}")
                })?;
                serde_json::to_value(toml_value)
                    .map_err(|err| anyhow!("Failed to convert TOML config to JSON: {err}"))?
            }
        };

        let config: Self =
            serde_json::from_value(value).map_err(|err| anyhow!("Config parse error: {err}"))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_bytes(&bytes)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Load from `KOREAN_NAME_CONFIG` / `KOREAN_NAME_SEED`; defaults when neither is set.
    pub fn from_env() -> Result<Self> {
        Self::load(None)
    }

    /// Load `path` (or the `KOREAN_NAME_CONFIG` file when `path` is `None`), then apply
    /// `KOREAN_NAME_SEED` on top.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::from_config_path(std::env::var(CONFIG_PATH_ENV).ok())?,
        };
        config.apply_seed(std::env::var(SEED_ENV).ok())?;
        Ok(config)
    }

    /// Like [`NameConfig::from_env`], but each layer that fails is skipped with a warning: an
    /// unusable config file leaves the defaults, a malformed seed leaves the file's seed.
    #[must_use]
    pub fn from_env_or_default() -> Self {
        Self::from_env_values_or_default(
            std::env::var(CONFIG_PATH_ENV).ok(),
            std::env::var(SEED_ENV).ok(),
        )
    }

    #[cfg(test)]
    fn from_env_values(config_path: Option<String>, seed: Option<String>) -> Result<Self> {
        let mut config = Self::from_config_path(config_path)?;
        config.apply_seed(seed)?;
        Ok(config)
    }

    fn from_env_values_or_default(config_path: Option<String>, seed: Option<String>) -> Self {
        let mut config = Self::from_config_path(config_path).unwrap_or_else(|err| {
            log::warn!("Failed to load name config: {err:#}; falling back to defaults");
            Self::default()
        });
        if let Err(err) = config.apply_seed(seed) {
            log::warn!("Ignoring {SEED_ENV}: {err:#}");
        }
        config
    }

    fn from_config_path(config_path: Option<String>) -> Result<Self> {
        match config_path
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
        {
            Some(path) => Self::from_file(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    fn apply_seed(&mut self, seed: Option<String>) -> Result<()> {
        if let Some(raw) = seed.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
            let seed = raw
                .parse::<u64>()
                .with_context(|| format!("{SEED_ENV} must be an unsigned integer, got '{raw}'"))?;
            self.seed = Some(seed);
        }
        Ok(())
    }

    pub fn validate(&self) -> NameResult<()> {
        if self.min_count == 0 {
            return Err(NameError::invalid_config("min_count must be >= 1"));
        }

        if self.min_count > self.max_count {
            return Err(NameError::invalid_config(format!(
                "min_count ({}) cannot exceed max_count ({})",
                self.min_count, self.max_count
            )));
        }

        if !(self.min_count..=self.max_count).contains(&self.default_count) {
            return Err(NameError::invalid_config(format!(
                "default_count ({}) must lie within [{}, {}]",
                self.default_count, self.min_count, self.max_count
            )));
        }

        Ok(())
    }

    /// Clamp a caller-requested batch size into `[min_count, max_count]`.
    #[must_use]
    pub fn clamp_count(&self, requested: i64) -> usize {
        usize::try_from(requested.max(0))
            .unwrap_or(usize::MAX)
            .clamp(self.min_count, self.max_count)
    }

    /// RNG for a generation session: seeded when configured, entropy otherwise.
    #[must_use]
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
