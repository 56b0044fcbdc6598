use loadmaster::capacity::CapacityTable;
use loadmaster::correction::CorrectionRequest;
use loadmaster::models::Compartment;
use loadmaster::workflow::{plan_load, LoadInputs};

fn inputs(total_kg: f64, pieces: u32, reserved_kg: f64, target: Compartment, remove: u32) -> LoadInputs {
    LoadInputs {
        total_kg,
        pieces,
        reserved_kg,
        correction: CorrectionRequest { target, pieces: remove },
    }
}

#[test]
fn identical_inputs_give_identical_plans() {
    let capacities = CapacityTable::default();
    let request = inputs(17_345.5, 213, 412.25, Compartment::Fifth, 3);
    let first = plan_load(&request, &capacities);
    let second = plan_load(&request, &capacities);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn correction_runs_on_post_overflow_allocation() {
    let capacities = CapacityTable::default();
    let plan = plan_load(&inputs(10_000.0, 100, 0.0, Compartment::First, 100), &capacities);
    assert_eq!(plan.base.allocation[Compartment::First], 7);
    assert_eq!(plan.corrected.removal.max_removable, 7);
    assert_eq!(plan.corrected.removal.removed, 7);
    assert_eq!(plan.corrected.allocation[Compartment::First], 0);
    assert_eq!(plan.corrected.totals.pieces, 93);
    assert!(!plan.has_warnings());
}

#[test]
fn warnings_follow_compartment_order() {
    let capacities = CapacityTable::default();
    let plan = plan_load(&inputs(20_000.0, 100, 0.0, Compartment::Third, 0), &capacities);
    let flagged: Vec<Compartment> = plan.warnings.iter().map(|w| w.compartment).collect();
    assert_eq!(flagged, vec![Compartment::Third, Compartment::Fourth]);
    assert_eq!(plan.warnings[0].over_kg, 7600.0 - 3587.0);
    assert_eq!(plan.warnings[1].over_kg, 6000.0 - 2083.0);
}

#[test]
fn empty_inputs_produce_an_empty_plan() {
    let plan = plan_load(&LoadInputs::default(), &CapacityTable::default());
    assert_eq!(plan.corrected.totals.shown_kg, 0.0);
    assert_eq!(plan.corrected.allocation.total_pieces(), 0);
    assert_eq!(plan.corrected.removal.target, Compartment::Third);
    assert!(!plan.has_warnings());
}

#[test]
fn plan_serializes_with_compartment_labels() {
    let plan = plan_load(&inputs(1000.0, 100, 0.0, Compartment::Second, 1), &CapacityTable::default());
    let json: serde_json::Value = serde_json::to_value(&plan).unwrap();
    assert_eq!(json["corrected"]["allocation"]["CP2"], 29);
    assert_eq!(json["corrected"]["removal"]["target"], "CP2");
    assert_eq!(json["base"]["per_piece_kg"], 10.0);
}
