// File: src/field.rs
// Purpose: Single-field validation against one rule

use crate::rule::FieldRule;
use crate::string::{is_blank, validate_max_length, validate_min_length};
use serde::Serialize;

/// Outcome of validating one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "message", rename_all = "lowercase")]
pub enum FieldResult {
    Valid,
    Invalid(String),
}

impl FieldResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, FieldResult::Valid)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            FieldResult::Valid => None,
            FieldResult::Invalid(message) => Some(message),
        }
    }
}

/// Validate one value against its rule. Checks run in a fixed order and
/// stop at the first failure. A field without a rule is always valid.
pub fn validate_field(rule: Option<&FieldRule>, value: Option<&str>) -> FieldResult {
    let Some(rule) = rule else {
        return FieldResult::Valid;
    };
    let value = value.unwrap_or("").trim();

    if is_blank(value) {
        return if rule.required {
            FieldResult::Invalid(format!("{} is required", rule.display_label()))
        } else {
            FieldResult::Valid
        };
    }

    if let Some(min) = rule.min_length {
        if let Err(message) = validate_min_length(value, min) {
            return FieldResult::Invalid(message);
        }
    }

    if let Some(max) = rule.max_length {
        if let Err(message) = validate_max_length(value, max) {
            return FieldResult::Invalid(message);
        }
    }

    if let Some(pattern) = &rule.pattern {
        if !pattern.is_match(value) {
            return FieldResult::Invalid(rule.message.clone());
        }
    }

    FieldResult::Valid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::email::EMAIL_PATTERN;
    use rstest::rstest;

    fn email_rule() -> FieldRule {
        FieldRule::new("email")
            .required()
            .pattern(EMAIL_PATTERN, "Enter a valid email.")
            .unwrap()
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("   "))]
    #[case(Some("\t\n"))]
    fn test_required_blank_is_invalid(#[case] value: Option<&str>) {
        let rule = FieldRule::new("name").required().min_length(2);
        assert_eq!(
            validate_field(Some(&rule), value),
            FieldResult::Invalid("Name is required".to_string())
        );
    }

    #[rstest]
    #[case(FieldRule::new("website").min_length(10))]
    #[case(FieldRule::new("website").max_length(1))]
    #[case(FieldRule::new("website").pattern("^https://", "Use https").unwrap())]
    fn test_optional_empty_is_valid(#[case] rule: FieldRule) {
        assert!(validate_field(Some(&rule), Some("")).is_valid());
        assert!(validate_field(Some(&rule), Some("  ")).is_valid());
        assert!(validate_field(Some(&rule), None).is_valid());
    }

    #[test]
    fn test_min_length_uses_trimmed_value() {
        let rule = FieldRule::new("message").required().min_length(10);
        assert_eq!(
            validate_field(Some(&rule), Some("  short    ")),
            FieldResult::Invalid("Minimum 10 characters required".to_string())
        );
        assert!(validate_field(Some(&rule), Some("hello there friend")).is_valid());
    }

    #[test]
    fn test_max_length() {
        let rule = FieldRule::new("subject").max_length(5);
        assert_eq!(
            validate_field(Some(&rule), Some("too long")),
            FieldResult::Invalid("Maximum 5 characters allowed".to_string())
        );
    }

    #[test]
    fn test_pattern_uses_custom_message() {
        let rule = email_rule();
        assert_eq!(
            validate_field(Some(&rule), Some("bad-email")),
            FieldResult::Invalid("Enter a valid email.".to_string())
        );
        assert!(validate_field(Some(&rule), Some(" a@b.com ")).is_valid());
    }

    #[test]
    fn test_length_checked_before_pattern() {
        let rule = FieldRule::new("code")
            .min_length(4)
            .pattern("^[0-9]+$", "Digits only")
            .unwrap();
        assert_eq!(
            validate_field(Some(&rule), Some("ab")).message(),
            Some("Minimum 4 characters required")
        );
        assert_eq!(validate_field(Some(&rule), Some("abcd")).message(), Some("Digits only"));
    }

    #[test]
    fn test_missing_rule_is_valid() {
        assert!(validate_field(None, Some("")).is_valid());
        assert!(validate_field(None, None).is_valid());
    }
}
