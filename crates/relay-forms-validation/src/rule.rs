// File: src/rule.rs
// Purpose: Declarative per-field rules and the ordered rule set

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;

/// Errors raised while building a rule set
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("duplicate rule for field '{0}'")]
    DuplicateField(String),

    #[error("field '{field}': min_length {min} exceeds max_length {max}")]
    LengthBounds { field: String, min: usize, max: usize },

    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Compiled regular expression that (de)serializes as its source string
#[derive(Clone)]
pub struct Pattern(Regex);

impl Pattern {
    pub fn new(pattern: &str) -> Result<Self, RuleError> {
        Regex::new(pattern)
            .map(Self)
            .map_err(|source| RuleError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })
    }

    pub fn is_match(&self, value: &str) -> bool {
        self.0.is_match(value)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern").field(&self.as_str()).finish()
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Serialize for Pattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Pattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let source = String::deserialize(deserializer)?;
        Pattern::new(&source).map_err(serde::de::Error::custom)
    }
}

/// Validation contract for a single form field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldRule {
    /// Field identifier, matching the input's `name`
    pub field: String,

    /// Label used in the "is required" message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(default)]
    pub required: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<Pattern>,

    /// Shown when the pattern does not match
    #[serde(default = "default_message")]
    pub message: String,
}

fn default_message() -> String {
    "Please enter a valid value".to_string()
}

impl FieldRule {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            label: None,
            required: false,
            min_length: None,
            max_length: None,
            pattern: None,
            message: default_message(),
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Set the pattern and the message reported when it fails
    pub fn pattern(mut self, pattern: &str, message: impl Into<String>) -> Result<Self, RuleError> {
        self.pattern = Some(Pattern::new(pattern)?);
        self.message = message.into();
        Ok(self)
    }

    /// Label shown to the user: the configured label, or the identifier
    /// with separators turned into spaces and the first letter capitalised.
    pub fn display_label(&self) -> String {
        if let Some(label) = &self.label {
            return label.clone();
        }

        let spaced: String = self
            .field
            .chars()
            .map(|c| if c == '_' || c == '-' { ' ' } else { c })
            .collect();
        let mut chars = spaced.trim().chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    fn check_bounds(&self) -> Result<(), RuleError> {
        match (self.min_length, self.max_length) {
            (Some(min), Some(max)) if min > max => Err(RuleError::LengthBounds {
                field: self.field.clone(),
                min,
                max,
            }),
            _ => Ok(()),
        }
    }
}

/// Rules in declaration order. The order decides which invalid field
/// receives focus after a rejected submission.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RuleSet {
    rules: Vec<FieldRule>,
}

impl RuleSet {
    pub fn new(rules: Vec<FieldRule>) -> Result<Self, RuleError> {
        let mut seen = HashSet::new();
        for rule in &rules {
            if !seen.insert(rule.field.as_str()) {
                return Err(RuleError::DuplicateField(rule.field.clone()));
            }
            rule.check_bounds()?;
        }
        Ok(Self { rules })
    }

    pub fn get(&self, field: &str) -> Option<&FieldRule> {
        self.rules.iter().find(|rule| rule.field == field)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &FieldRule> {
        self.rules.iter()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|rule| rule.field.as_str())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<'de> Deserialize<'de> for RuleSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rules = Vec::<FieldRule>::deserialize(deserializer)?;
        RuleSet::new(rules).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_label() {
        assert_eq!(FieldRule::new("name").display_label(), "Name");
        assert_eq!(FieldRule::new("first_name").display_label(), "First name");
        assert_eq!(FieldRule::new("phone").label("Phone number").display_label(), "Phone number");
    }

    #[test]
    fn test_duplicate_field_rejected() {
        let result = RuleSet::new(vec![FieldRule::new("email"), FieldRule::new("email")]);
        assert!(matches!(result, Err(RuleError::DuplicateField(f)) if f == "email"));
    }

    #[test]
    fn test_inverted_bounds_rejected() {
        let rule = FieldRule::new("message").min_length(20).max_length(5);
        assert!(matches!(RuleSet::new(vec![rule]), Err(RuleError::LengthBounds { .. })));
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(FieldRule::new("code").pattern("([a-z", "bad").is_err());
    }

    #[test]
    fn test_rules_from_toml() {
        #[derive(Deserialize)]
        struct Doc {
            fields: RuleSet,
        }

        let doc: Doc = toml::from_str(
            r#"
            [[fields]]
            field = "email"
            required = true
            pattern = '^\S+@\S+$'
            message = "Enter a valid email."

            [[fields]]
            field = "company"
            max_length = 80
            "#,
        )
        .unwrap();

        assert_eq!(doc.fields.field_names().collect::<Vec<_>>(), vec!["email", "company"]);
        let email = doc.fields.get("email").unwrap();
        assert!(email.required);
        assert!(email.pattern.as_ref().unwrap().is_match("a@b"));
        assert_eq!(doc.fields.get("company").unwrap().max_length, Some(80));
        assert!(doc.fields.get("missing").is_none());
    }

    #[test]
    fn test_bad_pattern_in_toml_is_an_error() {
        #[derive(Debug, Deserialize)]
        struct Doc {
            #[allow(dead_code)]
            fields: RuleSet,
        }

        let result = toml::from_str::<Doc>(
            r#"
            [[fields]]
            field = "zip"
            pattern = "[0-9"
            "#,
        );
        assert!(result.is_err());
    }
}
