use serde::Serialize;

use crate::models::{Compartment, CompartmentMap, ExceedsMap, WeightMap};

pub const DEFAULT_CP1_MAX_KG: f64 = 2202.0;
pub const DEFAULT_CP2_MAX_KG: f64 = 3468.0;
pub const DEFAULT_CP3_MAX_KG: f64 = 3587.0;
pub const DEFAULT_CP4_MAX_KG: f64 = 2083.0;
pub const DEFAULT_CP5_MAX_KG: f64 = 800.0;

/// Maximum allowed weight per compartment, in kg.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CapacityTable {
    limits: CompartmentMap<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct LimitWarning {
    pub compartment: Compartment,
    pub weight_kg: f64,
    pub max_kg: f64,
    pub over_kg: f64,
}

impl CapacityTable {
    pub fn new(limits: CompartmentMap<f64>) -> Self {
        Self { limits }
    }

    pub fn max_kg(&self, compartment: Compartment) -> f64 {
        self.limits[compartment]
    }

    pub fn limits(&self) -> &CompartmentMap<f64> {
        &self.limits
    }

    pub fn over_kg(&self, compartment: Compartment, weight_kg: f64) -> f64 {
        (weight_kg - self.limits[compartment]).max(0.0)
    }

    /// Whole pieces of `per_piece_kg` that still fit under the limit.
    pub fn remaining_pieces(&self, compartment: Compartment, weight_kg: f64, per_piece_kg: f64) -> u32 {
        if per_piece_kg <= 0.0 {
            return 0;
        }
        let remaining_kg = (self.limits[compartment] - weight_kg).max(0.0);
        // float-to-int casts saturate, so a tiny per-piece weight cannot wrap
        (remaining_kg / per_piece_kg).floor() as u32
    }

    pub fn exceeds(&self, weights: &WeightMap) -> ExceedsMap {
        ExceedsMap::from_fn(|compartment| weights[compartment] > self.limits[compartment])
    }

    pub fn warnings(&self, weights: &WeightMap) -> Vec<LimitWarning> {
        weights
            .iter()
            .filter(|(compartment, weight)| **weight > self.limits[*compartment])
            .map(|(compartment, weight)| LimitWarning {
                compartment,
                weight_kg: *weight,
                max_kg: self.limits[compartment],
                over_kg: *weight - self.limits[compartment],
            })
            .collect()
    }
}

impl Default for CapacityTable {
    fn default() -> Self {
        Self::new(CompartmentMap::from_fn(|compartment| match compartment {
            Compartment::First => DEFAULT_CP1_MAX_KG,
            Compartment::Second => DEFAULT_CP2_MAX_KG,
            Compartment::Third => DEFAULT_CP3_MAX_KG,
            Compartment::Fourth => DEFAULT_CP4_MAX_KG,
            Compartment::Fifth => DEFAULT_CP5_MAX_KG,
        }))
    }
}
