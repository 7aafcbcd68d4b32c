use super::GammaParameters;
use evifleet_core::model::category::{DayOfWeek, LocClass};
use serde::{Deserialize, Serialize};

/// configures a [`super::GammaVmtDistribution`]. the default shape parameters give
/// urban regions a heavier short-trip mass than rural ones, and the default mean
/// ratios weight to ~1.0 over a 5 weekday / 2 weekend day week.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct GammaVmtConfig {
    /// upper edge of the mileage binning. the final bin absorbs the distribution tail.
    pub max_vmt: u32,
    pub urban_weekday: GammaParameters,
    pub urban_weekend: GammaParameters,
    pub rural_weekday: GammaParameters,
    pub rural_weekend: GammaParameters,
}

impl Default for GammaVmtConfig {
    fn default() -> Self {
        Self {
            max_vmt: 300,
            urban_weekday: GammaParameters::new(1.6, 1.05),
            urban_weekend: GammaParameters::new(1.2, 0.88),
            rural_weekday: GammaParameters::new(1.9, 1.05),
            rural_weekend: GammaParameters::new(1.4, 0.88),
        }
    }
}

impl GammaVmtConfig {
    pub fn parameters(&self, loc_class: LocClass, day_of_week: DayOfWeek) -> &GammaParameters {
        match (loc_class, day_of_week) {
            (LocClass::Urban, DayOfWeek::Weekday) => &self.urban_weekday,
            (LocClass::Urban, DayOfWeek::Weekend) => &self.urban_weekend,
            (LocClass::Rural, DayOfWeek::Weekday) => &self.rural_weekday,
            (LocClass::Rural, DayOfWeek::Weekend) => &self.rural_weekend,
        }
    }
}
