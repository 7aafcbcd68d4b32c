use super::{WeightEntry, WeightTable};
use crate::model::{
    category::{DayOfWeek, VmtBin},
    FleetConfigurationError,
};

/// the combined mileage dimension: one validated mileage table per day of week.
#[derive(Clone, Debug, PartialEq)]
pub struct VmtWeights {
    weekday: WeightTable<VmtBin>,
    weekend: WeightTable<VmtBin>,
}

impl VmtWeights {
    pub fn new(weekday: WeightTable<VmtBin>, weekend: WeightTable<VmtBin>) -> VmtWeights {
        VmtWeights { weekday, weekend }
    }

    pub fn try_from_entries(
        weekday: &[WeightEntry],
        weekend: &[WeightEntry],
    ) -> Result<VmtWeights, FleetConfigurationError> {
        let with_day = |day_of_week: DayOfWeek| {
            move |e: FleetConfigurationError| FleetConfigurationError::DayOfWeekError {
                day_of_week,
                source: Box::new(e),
            }
        };
        let weekday = WeightTable::try_from_entries(weekday).map_err(with_day(DayOfWeek::Weekday))?;
        let weekend = WeightTable::try_from_entries(weekend).map_err(with_day(DayOfWeek::Weekend))?;
        Ok(VmtWeights { weekday, weekend })
    }

    pub fn get(&self, day_of_week: DayOfWeek) -> &WeightTable<VmtBin> {
        match day_of_week {
            DayOfWeek::Weekday => &self.weekday,
            DayOfWeek::Weekend => &self.weekend,
        }
    }

    /// all (day of week, bin, weight) entries, weekday entries first
    pub fn iter(&self) -> impl Iterator<Item = (DayOfWeek, VmtBin, f64)> + '_ {
        DayOfWeek::ALL
            .into_iter()
            .flat_map(move |day| self.get(day).iter().map(move |(bin, w)| (day, bin, w)))
    }
}
