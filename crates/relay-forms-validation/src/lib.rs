//! Relay-Forms-Validation
//!
//! Declarative field rules and the ordered validator that checks a snapshot of
//! form values against them. Shared by the submission pipeline and the WASM
//! bindings so both sides report the same messages.
//!
//! ```rust
//! use relay_forms_validation::{contact_rules, validate_form, FormValues};
//!
//! let rules = contact_rules();
//! let values = FormValues::capture(rules.field_names(), |field| match field {
//!     "name" => Some("Jo".to_string()),
//!     "email" => Some("jo@example.com".to_string()),
//!     "message" => Some("Hello from the contact page".to_string()),
//!     _ => None,
//! });
//!
//! assert!(validate_form(&values, &rules).is_valid());
//! ```

pub mod email;
pub mod field;
pub mod form;
pub mod preset;
pub mod rule;
pub mod string;
pub mod values;

pub use email::{is_valid_email, EMAIL_PATTERN};
pub use field::{validate_field, FieldResult};
pub use form::{validate_form, ValidationResult};
pub use preset::contact_rules;
pub use rule::{FieldRule, Pattern, RuleError, RuleSet};
pub use values::FormValues;
