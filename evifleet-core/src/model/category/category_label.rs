use super::Dimension;
use crate::model::FleetConfigurationError;
use std::{
    fmt::{Debug, Display},
    hash::Hash,
    str::FromStr,
};

/// a label belonging to one stratifying dimension. parsing a label that falls outside
/// of the dimension's vocabulary fails with [`FleetConfigurationError::UnknownCategory`].
pub trait CategoryLabel:
    Copy + Eq + Ord + Hash + Debug + Display + FromStr<Err = FleetConfigurationError>
{
    const DIMENSION: Dimension;
}
