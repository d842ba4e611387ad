//! Configuration for the telemetry simulator.
//!
//! Layered loading with priority:
//! 1. Default values (hardcoded)
//! 2. Main config file (`config/simulator.toml`)
//! 3. Explicit override file / `CONFIG_PATH`
//! 4. Environment variables (highest priority)

mod region;
pub use region::*;


use std::env;
use std::net::SocketAddr;

use config::Config;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;
use serde::Serialize;

use crate::Error;
use crate::Result;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SimulatorConfig {
    /// Broadcast cadence and server parameters
    #[serde(default)]
    pub simulator: SimulatorSettings,

    /// Geographic regions coordinates are drawn from; may be empty
    #[serde(default)]
    pub regions: Vec<RegionConfig>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            simulator: SimulatorSettings::default(),
            regions: vec![],
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SimulatorSettings {
    /// Fixed broadcast interval in milliseconds
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,

    /// Address the query API binds to
    #[serde(default = "default_listen_address")]
    pub listen_address: SocketAddr,

    /// Capacity of the broadcast channel; slow subscribers past this lag
    /// lose readings
    #[serde(default = "default_broadcast_capacity")]
    pub broadcast_capacity: usize,
}

impl Default for SimulatorSettings {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
            listen_address: default_listen_address(),
            broadcast_capacity: default_broadcast_capacity(),
        }
    }
}

impl SimulatorConfig {
    /// Load configuration from multiple sources with priority:
    /// 1. Base config file (optional)
    /// 2. Explicit override file
    /// 3. `CONFIG_PATH` file
    /// 4. `DRONE`-prefixed environment variables
    ///
    /// # Arguments
    /// * `override_path` - Optional path to an explicit configuration file
    pub fn load(override_path: Option<&str>) -> Result<Self> {
        let mut builder =
            Config::builder().add_source(File::with_name("config/simulator").required(false));

        if let Some(path) = override_path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        if let Ok(path) = env::var("CONFIG_PATH") {
            builder = builder.add_source(File::with_name(&path));
        }

        builder = builder.add_source(
            Environment::with_prefix("DRONE")
                .separator("__")
                .ignore_empty(true)
                .try_parsing(true),
        );

        let config: SimulatorConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validates all simulator settings and region definitions
    pub fn validate(&self) -> Result<()> {
        if self.simulator.interval_ms < 1 {
            return Err(Error::Config(ConfigError::Message(
                "simulator.interval_ms must be at least 1ms".into(),
            )));
        }

        if self.simulator.broadcast_capacity < 1 {
            return Err(Error::Config(ConfigError::Message(
                "simulator.broadcast_capacity must be at least 1".into(),
            )));
        }

        for region in &self.regions {
            region.validate()?;
        }

        Ok(())
    }
}

fn default_interval_ms() -> u64 {
    3000
}

fn default_listen_address() -> SocketAddr {
    "127.0.0.1:8080".parse().unwrap()
}

fn default_broadcast_capacity() -> usize {
    64
}
