use std::path::Path;

use serde::Deserialize;

use crate::capacity::{
    CapacityTable, DEFAULT_CP1_MAX_KG, DEFAULT_CP2_MAX_KG, DEFAULT_CP3_MAX_KG, DEFAULT_CP4_MAX_KG,
    DEFAULT_CP5_MAX_KG,
};
use crate::error::ConfigError;
use crate::models::{Compartment, CompartmentMap};

pub const ENV_PREFIX: &str = "LOADMASTER";

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoadmasterConfig {
    pub capacities: CapacityConfig,
}

/// Compartment limits in kg.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct CapacityConfig {
    pub cp1: f64,
    pub cp2: f64,
    pub cp3: f64,
    pub cp4: f64,
    pub cp5: f64,
}

impl Default for CapacityConfig {
    fn default() -> Self {
        Self {
            cp1: DEFAULT_CP1_MAX_KG,
            cp2: DEFAULT_CP2_MAX_KG,
            cp3: DEFAULT_CP3_MAX_KG,
            cp4: DEFAULT_CP4_MAX_KG,
            cp5: DEFAULT_CP5_MAX_KG,
        }
    }
}

impl LoadmasterConfig {
    /// Built-in limits, overlaid by an optional file, overlaid by
    /// `LOADMASTER_CAPACITIES__CPn` environment variables.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = ::config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(::config::File::from(path).required(true));
        }
        let settings = builder
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    pub fn capacity_table(&self) -> Result<CapacityTable, ConfigError> {
        let limits = CompartmentMap::from_fn(|compartment| self.capacities.limit(compartment));
        for (compartment, value) in limits.iter() {
            if !value.is_finite() || *value < 0.0 {
                return Err(ConfigError::InvalidCapacity {
                    compartment,
                    value: *value,
                });
            }
        }
        Ok(CapacityTable::new(limits))
    }
}

impl CapacityConfig {
    fn limit(&self, compartment: Compartment) -> f64 {
        match compartment {
            Compartment::First => self.cp1,
            Compartment::Second => self.cp2,
            Compartment::Third => self.cp3,
            Compartment::Fourth => self.cp4,
            Compartment::Fifth => self.cp5,
        }
    }
}
