use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// location type where a charging session takes place
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DestinationType {
    Home,
    Work,
    Public,
}

impl Display for DestinationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            DestinationType::Home => "home",
            DestinationType::Work => "work",
            DestinationType::Public => "public",
        };
        write!(f, "{s}")
    }
}
