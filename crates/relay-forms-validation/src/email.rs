//! Email validation

use once_cell::sync::Lazy;
use regex::Regex;

/// Something, an `@`, something, a dot, something. No whitespace and no
/// second `@`. Deliberately loose: the relay service does the real check.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("EMAIL_PATTERN is a valid regex"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}
