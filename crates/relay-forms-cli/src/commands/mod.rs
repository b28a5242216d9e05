pub mod rules;
pub mod submit;
pub mod validate;
