use serde::{Deserialize, Serialize};

/// counts describing one generation run
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FleetSummary {
    pub fleet_size: usize,
    pub n_strata: usize,
    pub materialized_members: usize,
    pub bound_members: usize,
    pub dropped_members: usize,
    pub activity_rows: usize,
    pub n_warnings: usize,
}
