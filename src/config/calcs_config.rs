// src/config/calcs_config.rs

use serde::{Deserialize, Serialize};
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use config::builder::DefaultState;
use std::path::Path;

use crate::integer_math::sieve::{DEFAULT_MAX_VALUE, SIEVE_CEILING};
use crate::polynomial::quintic::NewtonOptions;

/// Main calculator configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalcsConfig {
    /// Logging level (error, warn, info, debug, trace)
    pub log_level: String,

    /// Primality sieve limits
    pub sieve: SieveConfig,

    /// Newton iteration settings for the quintic solver
    pub newton: NewtonOptions,
}

/// Sieve configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SieveConfig {
    /// Largest value the sieve accepts (default: 10 000 000)
    pub max_value: u64,
}

impl Default for CalcsConfig {
    fn default() -> Self {
        CalcsConfig {
            log_level: "info".to_string(),
            sieve: SieveConfig::default(),
            newton: NewtonOptions::default(),
        }
    }
}

impl Default for SieveConfig {
    fn default() -> Self {
        SieveConfig {
            max_value: DEFAULT_MAX_VALUE,
        }
    }
}

impl CalcsConfig {
    /// Load configuration with precedence: defaults → config file → env vars
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        // TOML preferred, YAML fallback
        if Path::new("calcs.toml").exists() {
            builder = builder.add_source(File::with_name("calcs.toml"));
        } else if Path::new("calcs.yaml").exists() {
            builder = builder.add_source(File::with_name("calcs.yaml"));
        }

        Self::finish(builder)
    }

    /// Load configuration with custom file path
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        if path.as_ref().exists() {
            builder = builder.add_source(File::from(path.as_ref()));
        }

        Self::finish(builder)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let newton = NewtonOptions::default();
        Config::builder()
            .set_default("log_level", "info")?
            .set_default("sieve.max_value", DEFAULT_MAX_VALUE)?
            .set_default("newton.initial_guess", newton.initial_guess)?
            .set_default("newton.tolerance", newton.tolerance)?
            .set_default("newton.max_iterations", newton.max_iterations as u64)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        // Override with environment variables, e.g. CALCS_SIEVE__MAX_VALUE
        let config = builder
            .add_source(
                Environment::with_prefix("CALCS")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        let config: CalcsConfig = config.try_deserialize()?;

        if config.sieve.max_value > SIEVE_CEILING {
            return Err(ConfigError::Message(format!(
                "sieve.max_value {} exceeds the ceiling of {}",
                config.sieve.max_value, SIEVE_CEILING
            )));
        }
        Ok(config)
    }
}
