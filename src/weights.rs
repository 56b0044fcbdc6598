use crate::models::{Compartment, DerivedTotals, PieceAllocation, WeightMap};

/// Uniform weight per piece once the reserved item is taken out.
pub fn per_piece_weight(total_kg: f64, pieces: u32, reserved_kg: f64) -> f64 {
    if pieces == 0 {
        return 0.0;
    }
    adjusted_total(total_kg, reserved_kg) / pieces as f64
}

pub fn adjusted_total(total_kg: f64, reserved_kg: f64) -> f64 {
    (total_kg - reserved_kg).max(0.0)
}

/// Pieces times per-piece weight; CP5 also carries the reserved item.
pub fn compute_weights(allocation: &PieceAllocation, per_piece_kg: f64, reserved_kg: f64) -> WeightMap {
    WeightMap::from_fn(|compartment| {
        let piece_kg = allocation[compartment] as f64 * per_piece_kg;
        if compartment == Compartment::Fifth {
            piece_kg + reserved_kg
        } else {
            piece_kg
        }
    })
}

pub fn derive_totals(allocation: &PieceAllocation, weights: &WeightMap, per_piece_kg: f64) -> DerivedTotals {
    let adjusted_kg = weights[Compartment::First]
        + weights[Compartment::Second]
        + weights[Compartment::Third]
        + weights[Compartment::Fourth];
    let distributed_kg =
        weights[Compartment::Second] + weights[Compartment::Third] + weights[Compartment::Fourth];

    DerivedTotals {
        pieces: allocation.total_pieces(),
        per_piece_kg,
        adjusted_kg,
        shown_kg: adjusted_kg + weights[Compartment::Fifth],
        distributed_kg,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_weight_lands_in_fifth_only() {
        let allocation = PieceAllocation::from_fn(|_| 2);
        let weights = compute_weights(&allocation, 5.0, 100.0);
        assert_eq!(weights[Compartment::First], 10.0);
        assert_eq!(weights[Compartment::Fifth], 110.0);

        let totals = derive_totals(&allocation, &weights, 5.0);
        assert_eq!(totals.pieces, 10);
        assert_eq!(totals.adjusted_kg, 40.0);
        assert_eq!(totals.shown_kg, 150.0);
        assert_eq!(totals.distributed_kg, 30.0);
    }

    #[test]
    fn per_piece_is_zero_without_pieces() {
        assert_eq!(per_piece_weight(1000.0, 0, 0.0), 0.0);
        assert_eq!(per_piece_weight(100.0, 4, 300.0), 0.0);
        assert_eq!(per_piece_weight(1000.0, 100, 0.0), 10.0);
    }
}
