//! data model shared by the evifleet fleet synthesis engine: closed vocabularies for
//! each stratifying dimension, validated weight tables, and the composite stratum key
//! used to match fleet members against the source pool.
pub mod model;
