// File: src/form.rs
// Purpose: Whole-form validation in rule declaration order

use crate::field::{validate_field, FieldResult};
use crate::rule::RuleSet;
use crate::values::FormValues;
use serde::Serialize;
use std::collections::BTreeMap;

/// Per-field results in rule declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    fields: Vec<(String, FieldResult)>,
}

impl ValidationResult {
    /// True when every field passed
    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(|(_, result)| result.is_valid())
    }

    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    pub fn result(&self, field: &str) -> Option<&FieldResult> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, result)| result)
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.result(field).and_then(FieldResult::message)
    }

    pub fn has_error(&self, field: &str) -> bool {
        self.error(field).is_some()
    }

    /// First failing field in declaration order
    pub fn first_invalid(&self) -> Option<&str> {
        self.fields
            .iter()
            .find(|(_, result)| !result.is_valid())
            .map(|(name, _)| name.as_str())
    }

    /// Field name to message, failing fields only
    pub fn errors(&self) -> BTreeMap<&str, &str> {
        self.fields
            .iter()
            .filter_map(|(name, result)| result.message().map(|msg| (name.as_str(), msg)))
            .collect()
    }

    pub fn error_count(&self) -> usize {
        self.fields.iter().filter(|(_, result)| !result.is_valid()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldResult)> {
        self.fields.iter().map(|(name, result)| (name.as_str(), result))
    }
}

/// Validate every configured field of `values`
pub fn validate_form(values: &FormValues, rules: &RuleSet) -> ValidationResult {
    let fields = rules
        .iter()
        .map(|rule| {
            let result = validate_field(Some(rule), values.get(&rule.field));
            (rule.field.clone(), result)
        })
        .collect();

    ValidationResult { fields }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preset::contact_rules;
    use crate::rule::FieldRule;
    use pretty_assertions::assert_eq;

    fn values(name: &str, email: &str, message: &str) -> FormValues {
        [("name", name), ("email", email), ("message", message)]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_only_name_fails() {
        let result = validate_form(&values("", "a@b.com", "hello there friend"), &contact_rules());

        assert!(result.is_invalid());
        assert_eq!(result.error_count(), 1);
        assert_eq!(result.error("name"), Some("Name is required"));
        assert!(!result.has_error("email"));
        assert!(!result.has_error("message"));
        assert_eq!(result.first_invalid(), Some("name"));
    }

    #[test]
    fn test_email_and_message_fail() {
        let result = validate_form(&values("Jo", "bad-email", "short"), &contact_rules());

        let expected: BTreeMap<&str, &str> = [
            ("email", "Enter a valid email."),
            ("message", "Minimum 10 characters required"),
        ]
        .into_iter()
        .collect();
        assert_eq!(result.errors(), expected);
        assert_eq!(result.first_invalid(), Some("email"));
    }

    #[test]
    fn test_all_valid() {
        let result = validate_form(&values("Jo", "jo@example.com", "hello there friend"), &contact_rules());
        assert!(result.is_valid());
        assert_eq!(result.first_invalid(), None);
        assert!(result.errors().is_empty());
    }

    #[test]
    fn test_aggregate_independent_of_order() {
        let forward = RuleSet::new(contact_rules().iter().cloned().collect()).unwrap();
        let reversed = RuleSet::new(contact_rules().iter().rev().cloned().collect()).unwrap();

        for input in [
            values("", "a@b.com", "hello there friend"),
            values("Jo", "bad-email", "short"),
            values("Jo", "jo@example.com", "hello there friend"),
            values("", "", ""),
        ] {
            let a = validate_form(&input, &forward);
            let b = validate_form(&input, &reversed);
            assert_eq!(a.is_valid(), b.is_valid());
            assert_eq!(a.errors(), b.errors());
        }
    }

    #[test]
    fn test_first_invalid_follows_declaration_order() {
        let reversed = RuleSet::new(contact_rules().iter().rev().cloned().collect()).unwrap();
        let result = validate_form(&values("Jo", "bad-email", "short"), &reversed);
        assert_eq!(result.first_invalid(), Some("message"));
    }

    #[test]
    fn test_unconfigured_values_are_ignored() {
        let rules = RuleSet::new(vec![FieldRule::new("name").required()]).unwrap();
        let mut input = values("Ada", "", "");
        input.insert("_gotcha", "");
        let result = validate_form(&input, &rules);
        assert!(result.is_valid());
        assert_eq!(result.iter().count(), 1);
    }
}
