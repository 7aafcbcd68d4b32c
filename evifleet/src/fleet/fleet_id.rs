use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// dense, 1-based identifier of a fleet member, unique within one generated fleet
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct FleetId(pub usize);

impl Display for FleetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
