use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::capacity::CapacityTable;
use crate::models::{Compartment, DerivedTotals, ExceedsMap, PieceAllocation, WeightMap};
use crate::weights::{compute_weights, derive_totals};

/// Manual load correction: take pieces out of one compartment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectionRequest {
    pub target: Compartment,
    pub pieces: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RemovalReport {
    pub target: Compartment,
    /// Pieces held at the target before removal.
    pub max_removable: u32,
    pub removed: u32,
    pub removed_kg: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct CorrectionOutcome {
    pub allocation: PieceAllocation,
    pub weights: WeightMap,
    pub totals: DerivedTotals,
    pub exceeds: ExceedsMap,
    pub removal: RemovalReport,
}

/// Removes up to `request.pieces` from the target compartment only.
///
/// Removed pieces leave the load entirely; nothing is redistributed. On CP5
/// only the piece-bearing part shrinks, the reserved item stays.
pub fn apply_correction(
    allocation: &PieceAllocation,
    per_piece_kg: f64,
    reserved_kg: f64,
    request: CorrectionRequest,
    capacities: &CapacityTable,
) -> CorrectionOutcome {
    let mut corrected = *allocation;
    let max_removable = corrected[request.target];
    let removed = request.pieces.min(max_removable);
    corrected[request.target] -= removed;

    if removed > 0 {
        debug!(
            target_compartment = %request.target,
            requested = request.pieces,
            removed,
            "load correction applied"
        );
    }

    let weights = compute_weights(&corrected, per_piece_kg, reserved_kg);
    CorrectionOutcome {
        allocation: corrected,
        totals: derive_totals(&corrected, &weights, per_piece_kg),
        exceeds: capacities.exceeds(&weights),
        weights,
        removal: RemovalReport {
            target: request.target,
            max_removable,
            removed,
            removed_kg: removed as f64 * per_piece_kg,
        },
    }
}
