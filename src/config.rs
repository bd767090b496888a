use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use snafu::{ResultExt, Snafu, ensure};

use crate::buffer::{DEFAULT_CAPACITY, MAX_CAPACITY};

/// How a run that could not retrieve the attribute is reported.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExitPolicy {
    /// Exit 0 whenever the arguments were valid, like the classic tool.
    #[default]
    Legacy,
    /// Exit non-zero if the attribute was unavailable. Empty values still succeed.
    Strict,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub buffer_capacity: usize,
    pub exit_policy: ExitPolicy,
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "Configuration:")?;
        writeln!(f, "Buffer capacity: {} bytes", self.buffer_capacity)?;
        writeln!(f, "Exit policy: {:?}", self.exit_policy)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            buffer_capacity: DEFAULT_CAPACITY,
            exit_policy: ExitPolicy::default(),
        }
    }
}

pub fn load_config() -> Result<Config, ConfigError> {
    let config: Config = Figment::from(Serialized::defaults(Config::default()))
        .merge(Env::prefixed("GETXATTR_"))
        .extract()
        .context(FigmentSnafu)?;
    ensure!(config.buffer_capacity > 0, ZeroCapacitySnafu);
    ensure!(
        config.buffer_capacity <= MAX_CAPACITY,
        CapacityTooLargeSnafu {
            capacity: config.buffer_capacity
        }
    );
    Ok(config)
}

#[derive(Debug, Snafu)]
pub enum ConfigError {
    #[snafu(display("Failed to set configuration: {source}"))]
    Figment { source: figment::Error },
    #[snafu(display("Buffer capacity must be at least one byte"))]
    ZeroCapacity,
    #[snafu(display(
        "Buffer capacity of {capacity} bytes exceeds the {MAX_CAPACITY} byte attribute size limit"
    ))]
    CapacityTooLarge { capacity: usize },
}
