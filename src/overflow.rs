use tracing::debug;

use crate::capacity::CapacityTable;
use crate::models::{Compartment, Distribution};
use crate::weights::compute_weights;

/// Compartments drained when over capacity, in priority order.
pub const OVERFLOW_SOURCES: [Compartment; 3] =
    [Compartment::Second, Compartment::Third, Compartment::Fourth];

/// Spillover targets, tried in this order for every move.
pub const OVERFLOW_DESTINATIONS: [Compartment; 2] = [Compartment::Fifth, Compartment::First];

/// Moves whole pieces out of over-capacity CP2/CP3/CP4 into CP5, then CP1.
///
/// Sources are handled once each, CP2 first. A source is abandoned as soon as
/// neither destination has room for a single piece, so the result may still
/// carry excess; that shows up in the exceeds flags rather than as an error.
/// The total piece count never changes.
pub fn redistribute_overflow(
    initial: &Distribution,
    per_piece_kg: f64,
    reserved_kg: f64,
    capacities: &CapacityTable,
) -> Distribution {
    if per_piece_kg <= 0.0 {
        return *initial;
    }

    let mut allocation = initial.allocation;
    let mut weights = initial.weights;

    for source in OVERFLOW_SOURCES {
        weights = compute_weights(&allocation, per_piece_kg, reserved_kg);
        let mut over_kg = capacities.over_kg(source, weights[source]);

        'source: while over_kg > 0.0 && allocation[source] > 0 {
            let mut needed = allocation[source].min(pieces_to_cover(over_kg, per_piece_kg));
            let mut saturated = 0;

            for destination in OVERFLOW_DESTINATIONS {
                let room = capacities.remaining_pieces(destination, weights[destination], per_piece_kg);
                if room == 0 {
                    saturated += 1;
                    continue;
                }

                let moved = needed.min(room);
                allocation[source] -= moved;
                allocation[destination] += moved;
                weights = compute_weights(&allocation, per_piece_kg, reserved_kg);
                over_kg = capacities.over_kg(source, weights[source]);
                needed -= moved;
                debug!(
                    source = %source,
                    destination = %destination,
                    pieces = moved,
                    remaining_over_kg = over_kg,
                    "overflow pieces moved"
                );

                if needed == 0 {
                    break 'source;
                }
            }

            if saturated == OVERFLOW_DESTINATIONS.len() {
                debug!(
                    source = %source,
                    over_kg,
                    "spillover compartments full, source left over capacity"
                );
                break;
            }
        }
    }

    Distribution {
        weights: compute_weights(&allocation, per_piece_kg, reserved_kg),
        allocation,
    }
}

fn pieces_to_cover(over_kg: f64, per_piece_kg: f64) -> u32 {
    (over_kg / per_piece_kg).ceil() as u32
}
