use super::WeightEntry;
use crate::model::{category::CategoryLabel, FleetConfigurationError};
use itertools::Itertools;

/// allowed distance between the sum of a weight table and 1.0
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// an ordered set of target proportions over the categories of one stratifying
/// dimension. a table can only be constructed if
///   - it has at least one entry
///   - each category appears once
///   - each weight is finite and non-negative
///   - the weights sum to 1 within [`WEIGHT_SUM_TOLERANCE`]
#[derive(Clone, Debug, PartialEq)]
pub struct WeightTable<C> {
    entries: Vec<(C, f64)>,
}

impl<C: CategoryLabel> WeightTable<C> {
    pub fn try_new(entries: Vec<(C, f64)>) -> Result<WeightTable<C>, FleetConfigurationError> {
        if entries.is_empty() {
            return Err(FleetConfigurationError::EmptyWeightTable(C::DIMENSION));
        }
        if let Some(duplicate) = entries.iter().map(|(c, _)| c).duplicates().next() {
            return Err(FleetConfigurationError::DuplicateCategory {
                dimension: C::DIMENSION,
                label: duplicate.to_string(),
            });
        }
        if let Some((c, w)) = entries.iter().find(|(_, w)| !w.is_finite() || *w < 0.0) {
            return Err(FleetConfigurationError::InvalidWeight {
                dimension: C::DIMENSION,
                label: c.to_string(),
                weight: *w,
            });
        }
        let sum: f64 = entries.iter().map(|(_, w)| w).sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(FleetConfigurationError::WeightSumError {
                dimension: C::DIMENSION,
                sum,
                tolerance: WEIGHT_SUM_TOLERANCE,
            });
        }
        Ok(WeightTable { entries })
    }

    /// parses the category labels of raw configuration entries against the
    /// vocabulary of `C` and validates the result.
    pub fn try_from_entries(
        entries: &[WeightEntry],
    ) -> Result<WeightTable<C>, FleetConfigurationError> {
        let parsed = entries
            .iter()
            .map(|e| e.category.parse::<C>().map(|c| (c, e.weight)))
            .collect::<Result<Vec<_>, _>>()?;
        WeightTable::try_new(parsed)
    }

    pub fn iter(&self) -> impl Iterator<Item = (C, f64)> + Clone + '_ {
        self.entries.iter().copied()
    }

    pub fn get(&self, category: &C) -> Option<f64> {
        self.entries
            .iter()
            .find(|(c, _)| c == category)
            .map(|(_, w)| *w)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
