pub mod config;
pub mod engine;
pub mod extract;
pub mod json;
pub mod matchers_api;
pub mod model;
pub mod protocol;
pub mod report;
pub mod validate;

pub use matchers_api::{Matcher, ValidationResult};
pub use validate::{validate, validate_structure};
