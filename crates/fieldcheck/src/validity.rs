// File: src/validity.rs
// Purpose: Derive a single validity outcome per field, in fixed priority order

use crate::field::{Field, FieldType};
use fieldcheck_rules::{
    is_valid_email, is_valid_url, matches_pattern, pattern_compiles, violations,
};
use tracing::warn;

/// Header rendered for the password field when its rules are violated;
/// the detailed messages come from the rule list.
pub const PASSWORD_PATTERN_HEADER: &str = "Please correct the following errors:";

/// Why a field's current value fails its declared constraints.
///
/// At most one reason is active at a time: evaluation stops at the first
/// failing check in priority order, replacing the flag bag the hosting
/// environment would otherwise supply.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidityError {
    ValueMissing,
    TypeMismatch,
    TooShort { min: usize, len: usize },
    TooLong { max: usize, len: usize },
    BadInput,
    StepMismatch,
    RangeOverflow { max: f64 },
    RangeUnderflow { min: f64 },
    PatternMismatch,
    /// Catch-all for constraints outside the closed set above.
    Invalid,
}

/// Evaluate a field against its declared constraints.
///
/// Pure read: no attribute writes, no rendering. Disabled fields and
/// exempt types are never in error.
pub fn evaluate(field: &Field) -> Option<ValidityError> {
    evaluate_inner(field, pattern_attribute_fails)
}

/// Variant for the bound password field: its pattern constraint is the
/// fixed rule set, not a `pattern` attribute.
pub fn evaluate_password(field: &Field) -> Option<ValidityError> {
    evaluate_inner(field, |f| {
        !f.value.is_empty() && !violations(&f.value).is_empty()
    })
}

fn evaluate_inner(field: &Field, pattern_fails: impl Fn(&Field) -> bool) -> Option<ValidityError> {
    if field.disabled || field.field_type.is_exempt() {
        return None;
    }

    let value = field.value.as_str();
    let len = value.chars().count();

    if field.required && value.is_empty() {
        return Some(ValidityError::ValueMissing);
    }

    if !value.is_empty() {
        let mismatched = match field.field_type {
            FieldType::Email => !is_valid_email(value),
            FieldType::Url => !is_valid_url(value),
            _ => false,
        };
        if mismatched {
            return Some(ValidityError::TypeMismatch);
        }
    }

    if let Some(min) = field.min_length {
        if !value.is_empty() && len < min {
            return Some(ValidityError::TooShort { min, len });
        }
    }
    if let Some(max) = field.max_length {
        if len > max {
            return Some(ValidityError::TooLong { max, len });
        }
    }

    if field.field_type == FieldType::Number && !value.is_empty() {
        match value.trim().parse::<f64>() {
            Err(_) => return Some(ValidityError::BadInput),
            Ok(number) => {
                if let Some(step) = field.step {
                    if step > 0.0 && off_step_grid(number, step, field.min) {
                        return Some(ValidityError::StepMismatch);
                    }
                }
                if let Some(max) = field.max {
                    if number > max {
                        return Some(ValidityError::RangeOverflow { max });
                    }
                }
                if let Some(min) = field.min {
                    if number < min {
                        return Some(ValidityError::RangeUnderflow { min });
                    }
                }
            }
        }
    }

    if pattern_fails(field) {
        return Some(ValidityError::PatternMismatch);
    }

    None
}

// Step offsets are measured from `min` when present, else from zero.
fn off_step_grid(number: f64, step: f64, min: Option<f64>) -> bool {
    let base = min.unwrap_or(0.0);
    let ratio = (number - base) / step;
    (ratio - ratio.round()).abs() > 1e-9
}

// Empty values never pattern-mismatch; uncompilable patterns are ignored
// the way browsers ignore them.
fn pattern_attribute_fails(field: &Field) -> bool {
    let pattern = match &field.pattern {
        Some(pattern) if !field.value.is_empty() => pattern,
        _ => return false,
    };
    if !pattern_compiles(pattern) {
        warn!(field = %field.id, pattern = %pattern, "ignoring uncompilable pattern attribute");
        return false;
    }
    !matches_pattern(&field.value, pattern)
}

/// Render a validity outcome as a human-readable message.
pub fn message(field: &Field, error: &ValidityError) -> String {
    match error {
        ValidityError::ValueMissing => "Please fill out this field.".to_string(),
        ValidityError::TypeMismatch => match field.field_type {
            FieldType::Url => "Please enter a URL.".to_string(),
            _ => "Please enter a valid email address.".to_string(),
        },
        ValidityError::TooShort { min, len } => format!(
            "Please lengthen this text to {} characters or more. You are currently using {} characters.",
            min, len
        ),
        ValidityError::TooLong { max, len } => format!(
            "Please shorten this text to no more than {} characters. You are currently using {} characters.",
            max, len
        ),
        ValidityError::BadInput => "Please enter a number.".to_string(),
        ValidityError::StepMismatch => "Please select a valid value.".to_string(),
        ValidityError::RangeOverflow { max } => format!(
            "Please select a value that is no more than {}.",
            format_number(*max)
        ),
        ValidityError::RangeUnderflow { min } => format!(
            "Please select a value that is no less than {}.",
            format_number(*min)
        ),
        ValidityError::PatternMismatch => match &field.title {
            Some(title) => format!("Please use the required format: {}.", title),
            None => "Please match the requested format.".to_string(),
        },
        ValidityError::Invalid => "The value you entered for this field is invalid.".to_string(),
    }
}

/// Evaluate and render in one step: `None` means the field is fine.
pub fn inspect(field: &Field) -> Option<String> {
    evaluate(field).map(|error| message(field, &error))
}

/// [`inspect`] for the bound password field: a pattern mismatch renders
/// the header only, since the rule list carries the details.
pub fn inspect_password(field: &Field) -> Option<String> {
    evaluate_password(field).map(|error| match error {
        ValidityError::PatternMismatch => PASSWORD_PATTERN_HEADER.to_string(),
        other => message(field, &other),
    })
}

// Format range bounds the way they were written: integers without the
// trailing .0.
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_and_exempt_fields_are_never_in_error() {
        let disabled = Field::new("email", FieldType::Email)
            .required()
            .disabled();
        assert_eq!(evaluate(&disabled), None);

        for field_type in [
            FieldType::File,
            FieldType::Reset,
            FieldType::Submit,
            FieldType::Button,
        ] {
            let field = Field::new("f", field_type).required();
            assert_eq!(evaluate(&field), None);
        }
    }

    #[test]
    fn test_valid_field_has_no_error() {
        let field = Field::new("email", FieldType::Email)
            .required()
            .with_value("john@example.com");
        assert_eq!(evaluate(&field), None);
        assert_eq!(inspect(&field), None);
    }

    #[test]
    fn test_value_missing() {
        let field = Field::new("email", FieldType::Email).required();
        assert_eq!(evaluate(&field), Some(ValidityError::ValueMissing));
        assert_eq!(
            inspect(&field).unwrap(),
            "Please fill out this field."
        );
    }

    #[test]
    fn test_value_missing_outranks_type_mismatch() {
        let field = Field::new("email", FieldType::Email).required();
        // Empty and required: ValueMissing wins; an empty value is not a
        // type mismatch.
        assert_eq!(evaluate(&field), Some(ValidityError::ValueMissing));
    }

    #[test]
    fn test_type_mismatch_messages() {
        let email = Field::new("email", FieldType::Email).with_value("not-an-email");
        assert_eq!(evaluate(&email), Some(ValidityError::TypeMismatch));
        assert_eq!(
            inspect(&email).unwrap(),
            "Please enter a valid email address."
        );

        let url = Field::new("website", FieldType::Url).with_value("example.com");
        assert_eq!(inspect(&url).unwrap(), "Please enter a URL.");
    }

    #[test]
    fn test_too_short_interpolates_lengths() {
        let field = Field::new("name", FieldType::Text)
            .with_min_length(5)
            .with_value("abc");
        let message = inspect(&field).unwrap();
        assert_eq!(
            message,
            "Please lengthen this text to 5 characters or more. You are currently using 3 characters."
        );
    }

    #[test]
    fn test_too_long_interpolates_lengths() {
        let field = Field::new("name", FieldType::Text)
            .with_max_length(4)
            .with_value("abcdef");
        assert_eq!(
            inspect(&field).unwrap(),
            "Please shorten this text to no more than 4 characters. You are currently using 6 characters."
        );
    }

    #[test]
    fn test_empty_value_is_not_too_short() {
        let field = Field::new("name", FieldType::Text).with_min_length(5);
        assert_eq!(evaluate(&field), None);
    }

    #[test]
    fn test_bad_input() {
        let field = Field::new("age", FieldType::Number).with_value("abc");
        assert_eq!(evaluate(&field), Some(ValidityError::BadInput));
        assert_eq!(inspect(&field).unwrap(), "Please enter a number.");
    }

    #[test]
    fn test_step_mismatch() {
        let field = Field::new("age", FieldType::Number)
            .with_step(2.0)
            .with_value("3");
        assert_eq!(evaluate(&field), Some(ValidityError::StepMismatch));
        assert_eq!(inspect(&field).unwrap(), "Please select a valid value.");

        let on_grid = Field::new("age", FieldType::Number)
            .with_step(2.0)
            .with_value("4");
        assert_eq!(evaluate(&on_grid), None);
    }

    #[test]
    fn test_step_is_relative_to_min() {
        let field = Field::new("age", FieldType::Number)
            .with_range(1.0, 99.0)
            .with_step(2.0)
            .with_value("3");
        // 3 = 1 + 2*1, on the grid.
        assert_eq!(evaluate(&field), None);
    }

    #[test]
    fn test_range_messages_format_integers_cleanly() {
        let over = Field::new("age", FieldType::Number)
            .with_range(18.0, 99.0)
            .with_value("120");
        assert_eq!(
            inspect(&over).unwrap(),
            "Please select a value that is no more than 99."
        );

        let under = Field::new("age", FieldType::Number)
            .with_range(18.0, 99.0)
            .with_value("12");
        assert_eq!(
            inspect(&under).unwrap(),
            "Please select a value that is no less than 18."
        );
    }

    #[test]
    fn test_pattern_mismatch_uses_title_hint() {
        let with_title = Field::new("zip", FieldType::Text)
            .with_pattern(r"^\d{5}$")
            .with_title("e.g., 12345")
            .with_value("1234");
        assert_eq!(
            inspect(&with_title).unwrap(),
            "Please use the required format: e.g., 12345."
        );

        let without_title = Field::new("zip", FieldType::Text)
            .with_pattern(r"^\d{5}$")
            .with_value("1234");
        assert_eq!(
            inspect(&without_title).unwrap(),
            "Please match the requested format."
        );
    }

    #[test]
    fn test_empty_value_is_not_a_pattern_mismatch() {
        let field = Field::new("zip", FieldType::Text).with_pattern(r"^\d{5}$");
        assert_eq!(evaluate(&field), None);
    }

    #[test]
    fn test_uncompilable_pattern_is_ignored() {
        let field = Field::new("zip", FieldType::Text)
            .with_pattern("(unclosed")
            .with_value("whatever");
        assert_eq!(evaluate(&field), None);
    }

    #[test]
    fn test_password_pattern_derives_from_rules() {
        let weak = Field::new("password", FieldType::Password).with_value("abc");
        assert_eq!(evaluate_password(&weak), Some(ValidityError::PatternMismatch));
        assert_eq!(inspect_password(&weak).unwrap(), PASSWORD_PATTERN_HEADER);

        let strong = Field::new("password", FieldType::Password).with_value("Abcdef1!");
        assert_eq!(evaluate_password(&strong), None);

        let empty = Field::new("password", FieldType::Password);
        assert_eq!(evaluate_password(&empty), None);
    }

    #[test]
    fn test_required_empty_password_reports_value_missing() {
        let field = Field::new("password", FieldType::Password).required();
        assert_eq!(
            inspect_password(&field).unwrap(),
            "Please fill out this field."
        );
    }

    #[test]
    fn test_catchall_message() {
        let field = Field::new("other", FieldType::Text);
        assert_eq!(
            message(&field, &ValidityError::Invalid),
            "The value you entered for this field is invalid."
        );
    }
}
