pub mod allocator;
pub mod capacity;
pub mod config;
pub mod correction;
pub mod error;
pub mod input;
pub mod models;
pub mod overflow;
pub mod report;
pub mod telemetry;
pub mod weights;
pub mod workflow;

pub use allocator::{allocate_base, BaseOutcome};
pub use capacity::{CapacityTable, LimitWarning};
pub use correction::{apply_correction, CorrectionOutcome, CorrectionRequest, RemovalReport};
pub use models::{Compartment, DerivedTotals, Distribution, ExceedsMap, PieceAllocation, WeightMap};
pub use workflow::{plan_load, LoadInputs, LoadPlan};
