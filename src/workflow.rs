use serde::Serialize;
use tracing::info;

use crate::allocator::{allocate_base, BaseOutcome};
use crate::capacity::{CapacityTable, LimitWarning};
use crate::correction::{apply_correction, CorrectionOutcome, CorrectionRequest};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct LoadInputs {
    pub total_kg: f64,
    pub pieces: u32,
    pub reserved_kg: f64,
    pub correction: CorrectionRequest,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LoadPlan {
    pub inputs: LoadInputs,
    pub base: BaseOutcome,
    pub corrected: CorrectionOutcome,
    pub warnings: Vec<LimitWarning>,
}

impl LoadPlan {
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Full recomputation: base split, overflow, then the manual correction.
pub fn plan_load(inputs: &LoadInputs, capacities: &CapacityTable) -> LoadPlan {
    let base = allocate_base(inputs.total_kg, inputs.pieces, inputs.reserved_kg, capacities);
    let corrected = apply_correction(
        &base.allocation,
        base.per_piece_kg,
        inputs.reserved_kg,
        inputs.correction,
        capacities,
    );
    let warnings = capacities.warnings(&corrected.weights);

    info!(
        pieces = inputs.pieces,
        per_piece_kg = base.per_piece_kg,
        shown_kg = corrected.totals.shown_kg,
        removed = corrected.removal.removed,
        over_limit = warnings.len(),
        "load planned"
    );

    LoadPlan {
        inputs: *inputs,
        base,
        corrected,
        warnings,
    }
}
