use serde::Serialize;
use tracing::trace;

use crate::capacity::CapacityTable;
use crate::models::{Compartment, DerivedTotals, Distribution, ExceedsMap, PieceAllocation, WeightMap};
use crate::overflow::redistribute_overflow;
use crate::weights::{compute_weights, derive_totals, per_piece_weight};

/// Percentage of the piece count given to each middle compartment.
pub const BASE_SHARES: [(Compartment, u64); 3] = [
    (Compartment::Second, 30),
    (Compartment::Third, 40),
    (Compartment::Fourth, 30),
];

/// Receives whatever flooring the shares leaves behind.
pub const REMAINDER_COMPARTMENT: Compartment = Compartment::Third;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BaseOutcome {
    /// Split before any overflow movement.
    pub initial: Distribution,
    pub allocation: PieceAllocation,
    pub weights: WeightMap,
    pub per_piece_kg: f64,
    pub totals: DerivedTotals,
    pub exceeds: ExceedsMap,
}

pub fn base_split(pieces: u32) -> PieceAllocation {
    let mut allocation = PieceAllocation::default();
    let mut used = 0_u32;
    for (compartment, percent) in BASE_SHARES {
        let share = (pieces as u64 * percent / 100) as u32;
        allocation[compartment] = share;
        used += share;
    }
    allocation[REMAINDER_COMPARTMENT] += pieces - used;
    allocation
}

/// Splits the shipment 30/40/30 over CP2-CP4, then resolves overflow.
pub fn allocate_base(
    total_kg: f64,
    pieces: u32,
    reserved_kg: f64,
    capacities: &CapacityTable,
) -> BaseOutcome {
    let per_piece_kg = per_piece_weight(total_kg, pieces, reserved_kg);
    let allocation = base_split(pieces);
    trace!(
        pieces,
        per_piece_kg,
        cp2 = allocation[Compartment::Second],
        cp3 = allocation[Compartment::Third],
        cp4 = allocation[Compartment::Fourth],
        "base split"
    );

    let initial = Distribution {
        weights: compute_weights(&allocation, per_piece_kg, reserved_kg),
        allocation,
    };
    let settled = redistribute_overflow(&initial, per_piece_kg, reserved_kg, capacities);

    BaseOutcome {
        initial,
        allocation: settled.allocation,
        weights: settled.weights,
        per_piece_kg,
        totals: derive_totals(&settled.allocation, &settled.weights, per_piece_kg),
        exceeds: capacities.exceeds(&settled.weights),
    }
}
