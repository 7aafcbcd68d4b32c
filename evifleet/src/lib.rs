//! synthesizes representative electric vehicle charging fleets. a joint target
//! distribution is composed from independent per-dimension weight tables, materialized
//! into a fleet of an exact size, and each member is bound to a simulated vehicle from
//! a source pool whose charging sessions become the fleet's activity.
pub mod app;
pub mod fleet;
pub mod source;
pub mod vmt;
