use serde::{Deserialize, Serialize};

use super::{FieldError, FieldValue, FieldValues};

/// Declarative validation rule applied to a non-blank value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Rule {
    /// Minimum number of characters.
    MinLength { min: usize },
    /// Inclusive numeric range. Either bound may be open.
    Range { min: Option<f64>, max: Option<f64> },
    /// Value must equal the value of another field (confirmation inputs).
    Matches { field: String, label: String },
}

impl Rule {
    pub(crate) fn check(
        &self,
        label: &str,
        value: &FieldValue,
        values: &FieldValues,
    ) -> Result<(), FieldError> {
        match self {
            Rule::MinLength { min } => {
                let len = value.as_text().map_or(0, |text| text.chars().count());
                if len < *min {
                    return Err(FieldError::TooShort {
                        label: label.to_string(),
                        min: *min,
                    });
                }
            }
            Rule::Range { min, max } => {
                let number = value
                    .as_text()
                    .and_then(parse_number)
                    .ok_or_else(|| FieldError::NotANumber {
                        label: label.to_string(),
                    })?;
                if let Some(min) = min {
                    if number < *min {
                        return Err(FieldError::BelowMinimum {
                            label: label.to_string(),
                            min: min.to_string(),
                        });
                    }
                }
                if let Some(max) = max {
                    if number > *max {
                        return Err(FieldError::AboveMaximum {
                            label: label.to_string(),
                            max: max.to_string(),
                        });
                    }
                }
            }
            Rule::Matches {
                field,
                label: other,
            } => {
                if values.get(field) != Some(value) {
                    return Err(FieldError::Mismatch {
                        label: label.to_string(),
                        other: other.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Field this rule reads besides its own, if any.
    pub fn referenced_field(&self) -> Option<&str> {
        match self {
            Rule::Matches { field, .. } => Some(field.as_str()),
            _ => None,
        }
    }
}

/// Strict numeric parse: plain decimal notation only.
///
/// Currency symbols, thousands separators and non-finite values are rejected.
pub fn parse_number(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_number_rejects_locale_formatting() {
        assert_eq!(parse_number(" 50000 "), Some(50000.0));
        assert_eq!(parse_number("12.5"), Some(12.5));
        assert_eq!(parse_number("$50000"), None);
        assert_eq!(parse_number("50,000"), None);
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("NaN"), None);
    }

    #[test]
    fn range_reports_bounds_without_trailing_zeros() {
        let rule = Rule::Range {
            min: Some(50000.0),
            max: Some(250000.0),
        };
        let values = FieldValues::new();

        let low = rule.check("Amount", &FieldValue::text("10"), &values);
        assert_eq!(
            low.unwrap_err().to_string(),
            "Amount must be at least 50000"
        );

        let high = rule.check("Amount", &FieldValue::text("300000"), &values);
        assert_eq!(
            high.unwrap_err().to_string(),
            "Amount must be at most 250000"
        );

        assert!(rule
            .check("Amount", &FieldValue::text("50000"), &values)
            .is_ok());
    }

    #[test]
    fn non_numeric_and_out_of_range_are_both_rejected() {
        let rule = Rule::Range {
            min: Some(1.0),
            max: None,
        };
        let values = FieldValues::new();
        assert!(matches!(
            rule.check("Amount", &FieldValue::text("1,000"), &values),
            Err(FieldError::NotANumber { .. })
        ));
        assert!(matches!(
            rule.check("Amount", &FieldValue::text("0"), &values),
            Err(FieldError::BelowMinimum { .. })
        ));
    }

    #[test]
    fn matches_compares_against_other_field() {
        let rule = Rule::Matches {
            field: "password".to_string(),
            label: "Password".to_string(),
        };
        let mut values = FieldValues::new();
        values.insert("password".to_string(), FieldValue::text("longenough1"));

        assert!(rule
            .check("Confirm", &FieldValue::text("longenough1"), &values)
            .is_ok());
        assert!(matches!(
            rule.check("Confirm", &FieldValue::text("mismatch"), &values),
            Err(FieldError::Mismatch { .. })
        ));
    }
}
