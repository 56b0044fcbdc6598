//! Sweeps the full pipeline over generated shipments and checks the
//! conservation and capacity rules hold for every one of them.

use loadmaster::allocator::base_split;
use loadmaster::capacity::CapacityTable;
use loadmaster::correction::CorrectionRequest;
use loadmaster::models::Compartment;
use loadmaster::overflow::{OVERFLOW_DESTINATIONS, OVERFLOW_SOURCES};
use loadmaster::workflow::{plan_load, LoadInputs};

const ITERATIONS: usize = 400;

fn generated(idx: usize) -> LoadInputs {
    let pieces = ((idx * 37) % 420) as u32;
    // whole-kg pieces keep every weight exact
    let per_piece = ((idx * 13) % 160) as f64 + 1.0;
    let reserved = ((idx % 9) * 75) as f64;
    LoadInputs {
        total_kg: pieces as f64 * per_piece + reserved,
        pieces,
        reserved_kg: reserved,
        correction: CorrectionRequest {
            target: Compartment::ALL[idx % 5],
            pieces: ((idx * 7) % 60) as u32,
        },
    }
}

#[test]
fn overflow_conserves_pieces() {
    let capacities = CapacityTable::default();
    for idx in 0..ITERATIONS {
        let inputs = generated(idx);
        let plan = plan_load(&inputs, &capacities);
        assert_eq!(base_split(inputs.pieces).total_pieces(), inputs.pieces, "split at idx {}", idx);
        assert_eq!(plan.base.allocation.total_pieces(), inputs.pieces, "overflow at idx {}", idx);
    }
}

#[test]
fn residual_excess_only_when_spillover_is_full() {
    let capacities = CapacityTable::default();
    for idx in 0..ITERATIONS {
        let plan = plan_load(&generated(idx), &capacities);
        let base = &plan.base;
        let spillover_full = OVERFLOW_DESTINATIONS.iter().all(|destination| {
            capacities.remaining_pieces(*destination, base.weights[*destination], base.per_piece_kg) == 0
        });
        for source in OVERFLOW_SOURCES {
            if base.exceeds[source] {
                assert!(spillover_full, "{} over with spillover room at idx {}", source, idx);
            }
        }
    }
}

#[test]
fn correction_removes_min_of_request_and_held() {
    let capacities = CapacityTable::default();
    for idx in 0..ITERATIONS {
        let inputs = generated(idx);
        let plan = plan_load(&inputs, &capacities);
        let target = inputs.correction.target;
        let held = plan.base.allocation[target];
        let removal = plan.corrected.removal;
        assert_eq!(removal.max_removable, held);
        assert_eq!(removal.removed, inputs.correction.pieces.min(held), "idx {}", idx);
        assert_eq!(plan.corrected.allocation[target], held - removal.removed);
        assert_eq!(
            plan.corrected.totals.pieces,
            inputs.pieces - removal.removed,
            "idx {}",
            idx
        );
    }
}

#[test]
fn replanning_is_bit_identical() {
    let capacities = CapacityTable::default();
    for idx in 0..ITERATIONS {
        let inputs = generated(idx);
        let first = plan_load(&inputs, &capacities);
        let second = plan_load(&inputs, &capacities);
        for compartment in Compartment::ALL {
            assert_eq!(
                first.corrected.weights[compartment].to_bits(),
                second.corrected.weights[compartment].to_bits()
            );
        }
        assert_eq!(first, second);
    }
}
