// Record well-formedness, checked at the boundary before persistence

use crate::record::ResourceRecord;
use chrono::NaiveDate;

/// Format a `date_verified` value must match exactly.
pub const DATE_VERIFIED_FORMAT: &str = "%Y-%m-%d";

// ============================================================================
// VALIDATION RESULT
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

pub type ValidationResult = Result<(), Vec<ValidationError>>;

// ============================================================================
// VALIDATOR
// ============================================================================

impl ResourceRecord {
    /// Validate the record, collecting every failure.
    ///
    /// Only two rules apply: `name` must be present and non-blank, and
    /// `date_verified` (when present and non-blank) must be an exact
    /// `YYYY-MM-DD` calendar date. No other field is checked. Safe to call
    /// on any record, including one with every optional field unset.
    pub fn validate(&self) -> ValidationResult {
        let mut errors = Vec::new();

        match &self.name {
            Some(name) if !name.trim().is_empty() => {}
            _ => errors.push(ValidationError {
                field: "name".to_string(),
                message: "Required field is missing or blank".to_string(),
            }),
        }

        // A blank date_verified is treated as absent, not invalid
        if let Some(date) = &self.date_verified {
            let date = date.trim();
            if !date.is_empty() && !is_verified_date(date) {
                errors.push(ValidationError {
                    field: "date_verified".to_string(),
                    message: format!("Expected a YYYY-MM-DD date, got {:?}", date),
                });
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// True when the record is well-formed enough to hand to persistence.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

// %Y-%m-%d alone accepts sub-four-digit years and unpadded components, so
// the exact ten-character shape is required before parsing.
fn is_verified_date(raw: &str) -> bool {
    raw.len() == 10 && NaiveDate::parse_from_str(raw, DATE_VERIFIED_FORMAT).is_ok()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_with_name_only() {
        assert!(ResourceRecord::new("Valid").is_valid());
    }

    #[test]
    fn test_is_valid_with_date_verified() {
        let record = ResourceRecord::new("Valid").with_date_verified("2015-08-27");
        assert!(record.is_valid());
    }

    #[test]
    fn test_invalid_without_name() {
        assert!(!ResourceRecord::default().is_valid());
        assert!(!ResourceRecord::new("").is_valid());
        assert!(!ResourceRecord::new("    ").is_valid());
    }

    #[test]
    fn test_invalid_name_regardless_of_other_fields() {
        let record = ResourceRecord::new("   ")
            .with_city("Chicago")
            .with_date_verified("2015-08-27");
        assert!(!record.is_valid());
    }

    #[test]
    fn test_invalid_date_verified_format() {
        let record = ResourceRecord::new("Valid").with_date_verified("9/9/99");
        assert!(!record.is_valid());
    }

    #[test]
    fn test_invalid_date_verified_unpadded() {
        // The format is exact: two-digit month and day, four-digit year
        assert!(!ResourceRecord::new("Valid")
            .with_date_verified("2015-8-27")
            .is_valid());
        assert!(!ResourceRecord::new("Valid")
            .with_date_verified("215-08-27")
            .is_valid());
    }

    #[test]
    fn test_invalid_date_verified_not_a_calendar_date() {
        let record = ResourceRecord::new("Valid").with_date_verified("2015-02-30");
        assert!(!record.is_valid());
    }

    #[test]
    fn test_blank_date_verified_treated_as_absent() {
        assert!(ResourceRecord::new("Valid").with_date_verified("").is_valid());
        assert!(ResourceRecord::new("Valid").with_date_verified("   ").is_valid());
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let record = ResourceRecord::default().with_date_verified("9/9/99");
        let errors = record.validate().unwrap_err();

        assert_eq!(errors.len(), 2);
        assert!(errors.iter().any(|e| e.field == "name"));
        assert!(errors.iter().any(|e| e.field == "date_verified"));
    }

    #[test]
    fn test_validation_error_display() {
        let error = ValidationError {
            field: "name".to_string(),
            message: "Required field is missing or blank".to_string(),
        };
        assert_eq!(error.to_string(), "name: Required field is missing or blank");
    }
}
