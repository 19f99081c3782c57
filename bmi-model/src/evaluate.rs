use crate::bmi::Bmi;
use crate::category::Category;
use crate::measurement::{Height, Weight};

/// Rejected submission. The message is what the user sees.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EvaluationError {
    #[error("plz enter a valid height")]
    InvalidHeight,
    #[error("plz enter a valid weight")]
    InvalidWeight,
}

/// BMI text together with the label derived from that same text.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Evaluation {
    pub value: String,
    pub message: Category,
}

/// Evaluates raw height (cm) and weight (kg) field contents.
///
/// Height is checked first; only the first invalid field is reported.
pub fn evaluate(height: &str, weight: &str) -> Result<Evaluation, EvaluationError> {
    let height = Height::parse(height)?;
    let weight = Weight::parse(weight)?;

    let bmi = Bmi::compute(height, weight);
    Ok(Evaluation {
        message: bmi.category(),
        value: bmi.into_text(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_input() {
        let test_data = [
            ("170", "70", "24.22", Category::NormalRange),
            ("160", "60", "23.44", Category::NormalRange),
            ("170.9", "70.9", "24.22", Category::NormalRange),
            ("1000", "1860", "18.60", Category::NormalRange),
            ("1000", "2490", "24.90", Category::NormalRange),
            ("1000", "2491", "24.91", Category::OverWeight),
            ("1000", "1859", "18.59", Category::UnderWeight),
            ("400", "2", "0.13", Category::UnderWeight),
        ];

        for (i, (height, weight, value, message)) in test_data.into_iter().enumerate() {
            assert_eq!(
                evaluate(height, weight),
                Ok(Evaluation {
                    value: value.to_owned(),
                    message
                }),
                "Test case #{}",
                i
            );
        }
    }

    #[test]
    fn invalid_height_wins() {
        let test_data = [
            ("0", "70"),
            ("-170", "70"),
            ("abc", "70"),
            ("", ""),
            ("0", "0"),
            ("tall", "heavy"),
        ];

        for (i, (height, weight)) in test_data.into_iter().enumerate() {
            assert_eq!(
                evaluate(height, weight),
                Err(EvaluationError::InvalidHeight),
                "Test case #{}",
                i
            );
        }
    }

    #[test]
    fn invalid_weight() {
        let test_data = [("170", "0"), ("170", "-1"), ("170", ""), ("170", "kg")];

        for (i, (height, weight)) in test_data.into_iter().enumerate() {
            assert_eq!(
                evaluate(height, weight),
                Err(EvaluationError::InvalidWeight),
                "Test case #{}",
                i
            );
        }
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            EvaluationError::InvalidHeight.to_string(),
            "plz enter a valid height"
        );
        assert_eq!(
            EvaluationError::InvalidWeight.to_string(),
            "plz enter a valid weight"
        );
    }

    #[test]
    fn repeated_submission_is_identical() {
        assert_eq!(evaluate("182", "77"), evaluate("182", "77"));
        assert_eq!(evaluate("0", "77"), evaluate("0", "77"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_labels() {
        let evaluation = evaluate("170", "70").unwrap();
        assert_eq!(
            serde_json::to_string(&evaluation).unwrap(),
            r#"{"value":"24.22","message":"NORMAL-RANGE"}"#
        );
    }
}
