mod fleet_weights;
mod vmt_weights;
mod weight_entry;
mod weight_table;

pub use fleet_weights::FleetWeights;
pub use vmt_weights::VmtWeights;
pub use weight_entry::WeightEntry;
pub use weight_table::{WeightTable, WEIGHT_SUM_TOLERANCE};
