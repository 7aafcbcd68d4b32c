use crate::model::FleetConfigurationError;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

/// day type of a simulated charging schedule. weekday and weekend fleets are
/// materialized independently, each at the full target fleet size.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DayOfWeek {
    Weekday,
    Weekend,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 2] = [DayOfWeek::Weekday, DayOfWeek::Weekend];

    pub fn as_str(&self) -> &'static str {
        match self {
            DayOfWeek::Weekday => "weekday",
            DayOfWeek::Weekend => "weekend",
        }
    }
}

impl Display for DayOfWeek {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DayOfWeek {
    type Err = FleetConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weekday" => Ok(DayOfWeek::Weekday),
            "weekend" => Ok(DayOfWeek::Weekend),
            _ => Err(FleetConfigurationError::invalid_parameter(
                "day_of_week",
                format!("'{s}' is not one of [weekday, weekend]"),
            )),
        }
    }
}
