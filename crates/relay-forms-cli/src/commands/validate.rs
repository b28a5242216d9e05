use colored::Colorize;
use relay_forms::validation::validate_form;
use relay_forms::{Config, FormValues};

use crate::terminal::print_field_errors;

/// Returns whether every field passed
pub fn execute(config: &Config, fields: Vec<(String, String)>) -> bool {
    let rules = config.rules();
    let values: FormValues = fields.into_iter().collect();
    let result = validate_form(&values, &rules);

    if result.is_valid() {
        println!("{}", "All fields valid".green().bold());
        return true;
    }

    println!(
        "{}",
        format!("{} field(s) invalid", result.error_count()).red().bold()
    );
    print_field_errors(result.iter().filter_map(|(field, r)| r.message().map(|m| (field, m))));
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_invalid_fields_fail() {
        let config = Config::default();
        assert!(!execute(&config, fields(&[("name", "J"), ("email", "nope")])));
        assert!(!execute(&config, Vec::new()));
    }

    #[test]
    fn test_valid_fields_pass() {
        let config = Config::default();
        let valid = fields(&[
            ("name", "Ada"),
            ("email", "ada@example.com"),
            ("message", "hello there friend"),
        ]);
        assert!(execute(&config, valid));
    }
}
