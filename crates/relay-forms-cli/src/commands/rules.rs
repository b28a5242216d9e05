use colored::Colorize;
use relay_forms::Config;

pub fn execute(config: &Config) {
    let rules = config.rules();

    println!("{}", "Field rules".green().bold());
    println!();
    for rule in rules.iter() {
        let mut checks = Vec::new();
        if rule.required {
            checks.push("required".to_string());
        }
        if let Some(min) = rule.min_length {
            checks.push(format!("min {}", min));
        }
        if let Some(max) = rule.max_length {
            checks.push(format!("max {}", max));
        }
        if let Some(pattern) = &rule.pattern {
            checks.push(format!("pattern {}", pattern.as_str()));
        }
        let checks = if checks.is_empty() { "optional".to_string() } else { checks.join(", ") };
        println!("  {} ({}) {}", rule.field.cyan(), rule.display_label(), checks);
    }
    println!();
    println!("Decoy field: {}", config.form.decoy_field.cyan());
    println!(
        "Endpoint: {}",
        config.form.endpoint.as_deref().unwrap_or("(not configured)")
    );
}
