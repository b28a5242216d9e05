//! String length validation functions
//!
//! Lengths count Unicode scalar values, so "café" is four characters.

/// Number of characters in `s`
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

pub fn validate_min_length(s: &str, min: usize) -> Result<(), String> {
    if char_len(s) >= min {
        Ok(())
    } else {
        Err(format!("Minimum {} characters required", min))
    }
}

pub fn validate_max_length(s: &str, max: usize) -> Result<(), String> {
    if char_len(s) <= max {
        Ok(())
    } else {
        Err(format!("Maximum {} characters allowed", max))
    }
}

/// True when the value is empty or whitespace-only
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
