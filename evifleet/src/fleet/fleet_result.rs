use super::{FleetActivity, FleetMember, FleetStats, FleetSummary, FleetWarning};
use evifleet_core::model::weights::VmtWeights;

/// everything produced by one fleet generation
#[derive(Clone, Debug)]
pub struct FleetResult {
    pub fleet_members: Vec<FleetMember>,
    pub fleet_activity: Vec<FleetActivity>,
    pub fleet_stats: FleetStats,
    pub summary: FleetSummary,
    pub warnings: Vec<FleetWarning>,
    /// the mileage tables the fleet was generated from
    pub vmt_weights: VmtWeights,
}
