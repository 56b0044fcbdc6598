//! Turns raw form text into the clamped numbers the allocation core expects.
//!
//! Blank, malformed, negative and non-finite values all collapse to zero.

use crate::correction::CorrectionRequest;
use crate::models::Compartment;
use crate::workflow::LoadInputs;

pub fn to_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => value,
        _ => 0.0,
    }
}

pub fn to_int(raw: &str) -> u32 {
    to_number(raw).floor() as u32
}

/// Text an input field settles on once edited.
pub fn normalize_number(raw: &str) -> String {
    to_number(raw).to_string()
}

pub fn normalize_int(raw: &str) -> String {
    to_int(raw).to_string()
}

impl LoadInputs {
    pub fn from_raw(
        total_kg: &str,
        pieces: &str,
        reserved_kg: &str,
        correction_target: Compartment,
        correction_pieces: &str,
    ) -> Self {
        Self {
            total_kg: to_number(total_kg),
            pieces: to_int(pieces),
            reserved_kg: to_number(reserved_kg),
            correction: CorrectionRequest {
                target: correction_target,
                pieces: to_int(correction_pieces),
            },
        }
    }
}
