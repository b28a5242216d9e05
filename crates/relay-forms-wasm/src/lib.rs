//! Relay-Forms WASM
//!
//! WebAssembly bindings for relay-forms validation.
//! Lets browser code validate fields on blur with the same rules and
//! messages the submission pipeline uses.

use relay_forms_validation as core;
use relay_forms_validation::{FieldRule, FormValues, RuleSet};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use wasm_bindgen::prelude::*;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Rule for a single field, as written in JavaScript. Length keys are
/// accepted in both camelCase and the snake_case used by TOML configs.
#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct JsFieldRule {
    #[serde(default)]
    pub field: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default, alias = "min_length", skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(default, alias = "max_length", skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<&FieldRule> for JsFieldRule {
    fn from(rule: &FieldRule) -> Self {
        Self {
            field: rule.field.clone(),
            label: rule.label.clone(),
            required: rule.required,
            min_length: rule.min_length,
            max_length: rule.max_length,
            pattern: rule.pattern.as_ref().map(|p| p.as_str().to_string()),
            message: Some(rule.message.clone()),
        }
    }
}

impl JsFieldRule {
    fn into_rule(self, field: &str) -> Result<FieldRule, String> {
        let name = if self.field.is_empty() { field.to_string() } else { self.field };
        let mut rule = FieldRule::new(name);
        rule.label = self.label;
        rule.required = self.required;
        rule.min_length = self.min_length;
        rule.max_length = self.max_length;
        if let Some(message) = self.message {
            rule.message = message;
        }
        if let Some(pattern) = self.pattern {
            rule.pattern = Some(core::Pattern::new(&pattern).map_err(|e| e.to_string())?);
        }
        Ok(rule)
    }
}

/// Form-level result handed back to JavaScript
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct FormReport {
    pub valid: bool,
    pub errors: BTreeMap<String, String>,
    pub first_invalid: Option<String>,
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    Ok(value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?)
}

fn rejected_rules(reason: String) -> JsValue {
    web_sys::console::warn_1(&JsValue::from_str(&format!("relay-forms: {}", reason)));
    JsValue::from_str(&reason)
}

fn build_rules(rules: Vec<JsFieldRule>) -> Result<RuleSet, String> {
    let rules = rules
        .into_iter()
        .map(|rule| rule.into_rule(""))
        .collect::<Result<Vec<_>, _>>()?;
    RuleSet::new(rules).map_err(|e| e.to_string())
}

fn report(values: BTreeMap<String, String>, rules: &RuleSet) -> FormReport {
    let values: FormValues = values.into_iter().collect();
    let result = core::validate_form(&values, rules);
    FormReport {
        valid: result.is_valid(),
        errors: result
            .errors()
            .into_iter()
            .map(|(field, message)| (field.to_string(), message.to_string()))
            .collect(),
        first_invalid: result.first_invalid().map(String::from),
    }
}

/// Validate a single field value
///
/// # Returns
/// `null` when valid, otherwise the error message
///
/// # Example (JavaScript)
/// ```javascript
/// const error = validateField('message', textarea.value, {
///     required: true,
///     minLength: 10
/// });
/// ```
#[wasm_bindgen(js_name = validateField)]
pub fn validate_field(field_name: &str, value: &str, rule: JsValue) -> Result<Option<String>, JsValue> {
    let rule: JsFieldRule = serde_wasm_bindgen::from_value(rule)
        .map_err(|e| rejected_rules(format!("Failed to parse rule: {}", e)))?;
    let rule = rule.into_rule(field_name).map_err(rejected_rules)?;

    Ok(core::validate_field(Some(&rule), Some(value))
        .message()
        .map(String::from))
}

/// Validate a whole form
///
/// `values` is an object of field name to value, `rules` an array of rules
/// in the order fields should be checked. Returns
/// `{ valid, errors: { field: message }, firstInvalid }`.
#[wasm_bindgen(js_name = validateForm)]
pub fn validate_form(values: JsValue, rules: JsValue) -> Result<JsValue, JsValue> {
    let values: BTreeMap<String, String> = serde_wasm_bindgen::from_value(values)
        .map_err(|e| rejected_rules(format!("Failed to parse values: {}", e)))?;
    let rules: Vec<JsFieldRule> = serde_wasm_bindgen::from_value(rules)
        .map_err(|e| rejected_rules(format!("Failed to parse rules: {}", e)))?;
    let rules = build_rules(rules).map_err(rejected_rules)?;

    to_js(&report(values, &rules))
}

/// Rules of the stock contact form, for pages that do not define their own
#[wasm_bindgen(js_name = contactRules)]
pub fn contact_rules_js() -> Result<JsValue, JsValue> {
    to_js(&contact_js_rules())
}

fn contact_js_rules() -> Vec<JsFieldRule> {
    core::contact_rules().iter().map(JsFieldRule::from).collect()
}

/// Quick email validation
#[wasm_bindgen(js_name = isValidEmail)]
pub fn is_valid_email_js(email: &str) -> bool {
    core::is_valid_email(email)
}
