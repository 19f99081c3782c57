use crate::evaluate::EvaluationError;
use crate::parse::parse_int;

/// Height as entered in the form, in centimeters, truncated to an integer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Height(f64);

/// Weight as entered in the form, in kilograms, truncated to an integer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Weight(f64);

impl Height {
    pub fn parse(text: &str) -> Result<Self, EvaluationError> {
        parse_positive(text)
            .map(Self)
            .ok_or(EvaluationError::InvalidHeight)
    }

    pub fn centimeters(&self) -> f64 {
        self.0
    }
}

impl Weight {
    pub fn parse(text: &str) -> Result<Self, EvaluationError> {
        parse_positive(text)
            .map(Self)
            .ok_or(EvaluationError::InvalidWeight)
    }

    pub fn kilograms(&self) -> f64 {
        self.0
    }
}

fn parse_positive(text: &str) -> Option<f64> {
    parse_int(text).filter(|value| value.is_finite() && *value > 0.0)
}
