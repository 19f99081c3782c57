use std::fmt;

use crate::category::Category;
use crate::measurement::{Height, Weight};

/// Body Mass Index rounded to two decimals.
///
/// The text is what gets displayed. The numeric value is read back from that
/// text, so classification always sees the same number the user does.
#[derive(Clone, Debug, PartialEq)]
pub struct Bmi {
    text: String,
    value: f64,
}

impl Bmi {
    /// `weight / ((height * height) / 10000)` with height in centimeters.
    pub fn compute(height: Height, weight: Weight) -> Self {
        let height = height.centimeters();
        Self::from_raw(weight.kilograms() / ((height * height) / 10000.0))
    }

    pub fn from_raw(raw: f64) -> Self {
        let text = to_fixed_2(raw);
        let value = text.parse().unwrap_or(raw);
        Self { text, value }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn category(&self) -> Category {
        Category::classify(self.value)
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

impl fmt::Display for Bmi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Formats `x` with exactly two decimals.
///
/// Matches browser fixed-point formatting: an exact tie rounds away from zero,
/// infinities are spelled out and magnitudes from 1e21 up switch to exponent
/// notation with an explicit sign.
fn to_fixed_2(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_owned();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }
    if x.abs() >= 1e21 {
        return format!("{:e}", x).replacen("e", "e+", 1);
    }

    // Only multiples of 1/8 with an odd numerator sit exactly halfway
    // between two hundredths.
    let eighths = x.abs() * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 == 1.0 {
        let hundredths = (eighths as u64 * 25 + 1) / 2;
        let sign = if x < 0.0 { "-" } else { "" };
        return format!("{}{}.{:02}", sign, hundredths / 100, hundredths % 100);
    }

    format!("{:.2}", x)
}
