//! Stock rules for the portfolio contact form

use crate::email::EMAIL_PATTERN;
use crate::rule::{FieldRule, RuleSet};

/// `name` (required, at least 2 characters), `email` (required, must look
/// like an address) and `message` (required, at least 10 characters).
pub fn contact_rules() -> RuleSet {
    let rules = vec![
        FieldRule::new("name").required().min_length(2),
        FieldRule::new("email")
            .required()
            .pattern(EMAIL_PATTERN, "Enter a valid email.")
            .expect("EMAIL_PATTERN is a valid regex"),
        FieldRule::new("message").required().min_length(10),
    ];

    RuleSet::new(rules).expect("contact rules have unique fields and sane lengths")
}
