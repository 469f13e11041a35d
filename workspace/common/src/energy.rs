use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single month's energy usage figure.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MonthlyEnergyUsage {
    /// Energy used over the month, in kWh.
    pub energy: f64,
}

/// Before/after energy usage for one retrofit plan.
///
/// Both maps are keyed by month number. The JSON wire format uses string
/// object keys ("1".."12"); serde_json parses them into `u32`, so iteration
/// is always in numeric month order regardless of key order on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BeforeAfterEnergyUsage {
    /// Pre-retrofit usage per month.
    pub baseline: BTreeMap<u32, MonthlyEnergyUsage>,
    /// Post-retrofit usage per month.
    pub improved: BTreeMap<u32, MonthlyEnergyUsage>,
}

/// The two chart series extracted from a [`BeforeAfterEnergyUsage`] payload.
///
/// Both series are aligned on the baseline months, so they always have the
/// same length. A month present in `baseline` but missing from `improved`
/// yields `None`, which serializes to a `null` chart point (a gap in the
/// improved trace) rather than failing the whole extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSeries {
    pub baseline: Vec<f64>,
    pub improved: Vec<Option<f64>>,
}

impl BeforeAfterEnergyUsage {
    /// Extract the baseline and improved series in baseline month order.
    pub fn comparison_series(&self) -> ComparisonSeries {
        let mut baseline = Vec::with_capacity(self.baseline.len());
        let mut improved = Vec::with_capacity(self.baseline.len());

        for (month, usage) in &self.baseline {
            baseline.push(usage.energy);
            improved.push(self.improved.get(month).map(|u| u.energy));
        }

        ComparisonSeries { baseline, improved }
    }
}

/// Month numbers used as the chart's category axis.
pub fn month_labels() -> [u32; 12] {
    [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]
}
