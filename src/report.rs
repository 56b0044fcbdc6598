use std::fmt::Write;

use crate::capacity::CapacityTable;
use crate::models::Compartment;
use crate::workflow::LoadPlan;

/// Whole kilograms with thousands separators, e.g. `1,235 kg`.
pub fn format_kg(value: f64) -> String {
    format!("{} kg", group_thousands(value.round() as i64))
}

pub fn format_count(value: u32) -> String {
    group_thousands(value as i64)
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

pub fn status_label(over: bool) -> &'static str {
    if over {
        "Over"
    } else {
        "OK"
    }
}

pub fn render_plan(plan: &LoadPlan, capacities: &CapacityTable) -> String {
    let mut out = String::new();
    let base = &plan.base;
    let corrected = &plan.corrected;
    let removal = &corrected.removal;

    // Writing into a String cannot fail.
    let _ = writeln!(
        out,
        "Per piece: {}  Adj. total pre-LMC: {}  AVI: {}",
        format_kg(base.per_piece_kg),
        format_kg(base.totals.adjusted_kg),
        format_kg(plan.inputs.reserved_kg),
    );
    let _ = writeln!(
        out,
        "LMC {}: max {} pcs, removed {} pcs ≈ {}",
        removal.target,
        format_count(removal.max_removable),
        format_count(removal.removed),
        format_kg(removal.removed_kg),
    );
    if removal.target == Compartment::Fifth {
        let _ = writeln!(out, "Note: removing from CP5 affects overflow pieces only, AVI remains in CP5.");
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{:<4} {:>12} {:>8} {:>12} {:>6}", "CP", "Weight", "Pieces", "(Max)", "Status");
    for compartment in Compartment::ALL {
        let _ = writeln!(
            out,
            "{:<4} {:>12} {:>8} {:>12} {:>6}",
            compartment.label(),
            format_kg(corrected.weights[compartment]),
            format_count(corrected.allocation[compartment]),
            format!("({})", format_kg(capacities.max_kg(compartment))),
            status_label(corrected.exceeds[compartment]),
        );
    }

    if plan.has_warnings() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Limit warning:");
        for warning in &plan.warnings {
            let _ = writeln!(out, "  - {} exceeds by {}", warning.compartment, format_kg(warning.over_kg));
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Adj. excl. AVI: {}  Total incl. AVI: {}",
        format_kg(corrected.totals.adjusted_kg),
        format_kg(corrected.totals.shown_kg),
    );
    out
}
