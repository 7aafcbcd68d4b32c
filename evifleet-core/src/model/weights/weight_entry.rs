use serde::{Deserialize, Serialize};

/// a raw, unvalidated (category, weight) pair as it appears in a run configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WeightEntry {
    pub category: String,
    pub weight: f64,
}

impl WeightEntry {
    pub fn new(category: &str, weight: f64) -> WeightEntry {
        WeightEntry {
            category: category.to_string(),
            weight,
        }
    }
}
