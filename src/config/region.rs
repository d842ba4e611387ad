use config::ConfigError;
use serde::Deserialize;
use serde::Serialize;

use crate::Error;
use crate::Result;

/// Raw region definition as it appears in configuration.
///
/// Bounds are kept as arrays so that malformed input (wrong arity, inverted
/// order) is rejected explicitly instead of being silently coerced.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RegionConfig {
    pub name: String,
    pub lat_range: Vec<f64>,
    pub lon_range: Vec<f64>,
}

impl RegionConfig {
    /// Validates bound arity and ordering
    /// # Errors
    /// Returns `Error::Config` if either axis breaks the rules
    pub fn validate(&self) -> Result<()> {
        check_bounds(&self.name, "lat_range", &self.lat_range)?;
        check_bounds(&self.name, "lon_range", &self.lon_range)?;
        Ok(())
    }
}

fn check_bounds(region: &str, axis: &str, bounds: &[f64]) -> Result<()> {
    if bounds.len() != 2 {
        return Err(Error::Config(ConfigError::Message(format!(
            "region '{}': {} must contain exactly 2 values",
            region, axis
        ))));
    }
    if bounds[0] > bounds[1] {
        return Err(Error::Config(ConfigError::Message(format!(
            "region '{}': {} must be ordered: min <= max",
            region, axis
        ))));
    }
    Ok(())
}

/// A validated geographic bounding box.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    pub name: String,
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

/// Immutable, ordered set of regions loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct RegionCatalog {
    regions: Vec<Region>,
}

impl RegionCatalog {
    /// Builds the catalog, failing fast on the first malformed region.
    ///
    /// An empty list is a valid catalog: the generator treats it as an idle
    /// state, not a failure.
    pub fn from_configs(configs: &[RegionConfig]) -> Result<Self> {
        let mut regions = Vec::with_capacity(configs.len());
        for config in configs {
            config.validate()?;
            regions.push(Region {
                name: config.name.clone(),
                lat_min: config.lat_range[0],
                lat_max: config.lat_range[1],
                lon_min: config.lon_range[0],
                lon_max: config.lon_range[1],
            });
        }
        Ok(Self { regions })
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }
}
