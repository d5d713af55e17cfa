//! Validation Pipeline
//!
//! required -> constraints in table order, stopping at the first failure.

use thiserror::Error;

use crate::field::{FieldName, FieldValue};
use crate::rules::rule_for;

/// Why a field was rejected. `Display` is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{label} is required")]
    Required { label: String },
    #[error("{0}")]
    Invalid(&'static str),
    #[error("Passwords do not match")]
    Mismatch,
}

/// Check one field against its rule
pub fn validate(field: FieldName, value: FieldValue<'_>) -> Result<(), ValidationError> {
    let rule = rule_for(field);
    let value = match value {
        FieldValue::Text(text) => FieldValue::Text(text.trim()),
        checked => checked,
    };

    if value.is_blank() {
        if rule.required {
            return Err(ValidationError::Required {
                label: field.label(),
            });
        }
        return Ok(());
    }

    // A ticked checkbox has nothing left to check
    let FieldValue::Text(text) = value else {
        return Ok(());
    };

    match rule.constraints.iter().find(|c| !c.accepts(text)) {
        Some(_) => Err(ValidationError::Invalid(rule.message)),
        None => Ok(()),
    }
}

/// Compare password and confirmation.
///
/// Returns `None` while either side is empty: nothing is checked and
/// existing annotations stay as they are.
pub fn check_confirmation(password: &str, confirm: &str) -> Option<Result<(), ValidationError>> {
    if password.is_empty() || confirm.is_empty() {
        return None;
    }
    if password == confirm {
        Some(Ok(()))
    } else {
        Some(Err(ValidationError::Mismatch))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const USERNAME_MESSAGE: &str =
        "Username must be 3-20 characters, letters, numbers, and underscores only";

    #[test]
    fn test_username_length_and_pattern() {
        assert_eq!(
            validate(FieldName::Username, FieldValue::Text("ab")),
            Err(ValidationError::Invalid(USERNAME_MESSAGE))
        );
        assert_eq!(validate(FieldName::Username, FieldValue::Text("abc")), Ok(()));
        assert_eq!(
            validate(FieldName::Username, FieldValue::Text("abc def")),
            Err(ValidationError::Invalid(USERNAME_MESSAGE))
        );
        assert!(validate(FieldName::Username, FieldValue::Text(&"a".repeat(21))).is_err());
        assert!(validate(FieldName::Username, FieldValue::Text(&"a".repeat(20))).is_ok());
    }

    #[test]
    fn test_values_are_trimmed() {
        assert_eq!(validate(FieldName::Username, FieldValue::Text("  abc  ")), Ok(()));
        let err = validate(FieldName::Username, FieldValue::Text("   ")).unwrap_err();
        assert_eq!(err.to_string(), "Username is required");
    }

    #[test]
    fn test_email_requires_tld_segment() {
        assert!(validate(FieldName::Email, FieldValue::Text("a@b")).is_err());
        assert_eq!(validate(FieldName::Email, FieldValue::Text("a@b.com")), Ok(()));
        assert!(validate(FieldName::Email, FieldValue::Text("a b@c.com")).is_err());
    }

    #[test]
    fn test_password_rule() {
        let err = validate(FieldName::Password, FieldValue::Text("Ab1!")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Password must be 8+ characters with uppercase, lowercase, number, and special character"
        );
        assert!(validate(FieldName::Password, FieldValue::Text("abcdefgh1!")).is_err());
        assert!(validate(FieldName::Password, FieldValue::Text("#Abcdefg1!")).is_err());
        assert_eq!(validate(FieldName::Password, FieldValue::Text("Abcdefg1!")), Ok(()));
    }

    #[test]
    fn test_age_is_optional_but_bounded() {
        assert_eq!(validate(FieldName::Age, FieldValue::Text("")), Ok(()));
        assert_eq!(validate(FieldName::Age, FieldValue::Text("13")), Ok(()));
        assert_eq!(validate(FieldName::Age, FieldValue::Text("120")), Ok(()));
        assert_eq!(
            validate(FieldName::Age, FieldValue::Text("12")),
            Err(ValidationError::Invalid("Age must be between 13 and 120"))
        );
        assert!(validate(FieldName::Age, FieldValue::Text("121")).is_err());
    }

    #[test]
    fn test_terms_checkbox() {
        let err = validate(FieldName::Terms, FieldValue::Checked(false)).unwrap_err();
        assert_eq!(err.to_string(), "Terms is required");
        assert_eq!(validate(FieldName::Terms, FieldValue::Checked(true)), Ok(()));
    }

    #[test]
    fn test_confirmation() {
        assert_eq!(check_confirmation("X1!aaaaa", ""), None);
        assert_eq!(check_confirmation("", "Y"), None);
        assert_eq!(
            check_confirmation("X1!aaaaa", "Y"),
            Some(Err(ValidationError::Mismatch))
        );
        assert_eq!(
            ValidationError::Mismatch.to_string(),
            "Passwords do not match"
        );
        assert_eq!(check_confirmation("X1!aaaaa", "X1!aaaaa"), Some(Ok(())));
    }
}
