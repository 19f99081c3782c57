use strum::{AsRefStr, Display, EnumString};

/// Weight-status label shown next to a computed BMI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, AsRefStr, Display, EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    #[strum(serialize = "OVER-WEIGHT")]
    #[cfg_attr(feature = "serde", serde(rename = "OVER-WEIGHT"))]
    OverWeight,
    #[strum(serialize = "NORMAL-RANGE")]
    #[cfg_attr(feature = "serde", serde(rename = "NORMAL-RANGE"))]
    NormalRange,
    #[strum(serialize = "UNDER-WEIGHT")]
    #[cfg_attr(feature = "serde", serde(rename = "UNDER-WEIGHT"))]
    UnderWeight,
}

const OVER_WEIGHT_ABOVE: f64 = 24.9;
const NORMAL_RANGE_FROM: f64 = 18.6;

impl Category {
    /// Classifies a BMI already rounded to two decimals.
    ///
    /// Both 18.6 and 24.9 belong to the normal range. The three branches are
    /// checked in order and must stay that way.
    #[allow(clippy::manual_range_contains)]
    pub fn classify(bmi: f64) -> Self {
        if bmi > OVER_WEIGHT_ABOVE {
            Category::OverWeight
        } else if bmi >= NORMAL_RANGE_FROM && bmi <= OVER_WEIGHT_ABOVE {
            Category::NormalRange
        } else {
            Category::UnderWeight
        }
    }
}
