use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// identifier of a simulated vehicle in the source pool. not unique within a
/// fleet, since vehicles are drawn with replacement.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct SourceVehicleId(pub u64);

impl Display for SourceVehicleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
