use thiserror::Error;

use crate::models::Compartment;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCompartmentError {
    #[error("Unknown compartment: {0:?} (expected CP1 to CP5)")]
    Unknown(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),
    #[error("Invalid capacity for {compartment}: {value}")]
    InvalidCapacity { compartment: Compartment, value: f64 },
}
