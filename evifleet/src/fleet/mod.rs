//! the fleet synthesis engine. a single generation runs, in order:
//!
//!   1. [`JointDistribution::build`]: cartesian product of the weight tables
//!   2. [`materialize_ops::materialize`]: expansion to an exact fleet size per day of week
//!   3. [`binding_ops::bind`]: draw a source vehicle for each member
//!   4. [`session_ops::join_sessions`]: expand members into their charging sessions
//!   5. [`FleetStats::from_activity`]: realized vs target proportions
//!
//! see [`fleet_generator::generate`] for the entry point.
pub mod binding_ops;
mod fleet_activity;
mod fleet_error;
#[cfg(test)]
pub(crate) mod fleet_fixtures;
pub mod fleet_generator;
mod fleet_generator_config;
mod fleet_id;
mod fleet_member;
mod fleet_parameters;
mod fleet_result;
mod fleet_stats;
mod fleet_summary;
mod fleet_warning;
mod joint_distribution;
pub mod materialize_ops;
pub mod session_ops;

pub use fleet_activity::FleetActivity;
pub use fleet_error::FleetError;
pub use fleet_generator::FleetGenerator;
pub use fleet_generator_config::{FleetGeneratorConfig, DEFAULT_SIZE_TOLERANCE};
pub use fleet_id::FleetId;
pub use fleet_member::FleetMember;
pub use fleet_parameters::FleetParameters;
pub use fleet_result::FleetResult;
pub use fleet_stats::{FleetStats, FleetStatsRow};
pub use fleet_summary::FleetSummary;
pub use fleet_warning::FleetWarning;
pub use joint_distribution::{JointDistribution, JointStratum};
