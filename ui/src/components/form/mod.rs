//! Declarative form engine
//!
//! A caller describes its form as a list of [`types::FieldConfig`] entries;
//! the builder infers one validation rule per field, renders the matching
//! controls, and delivers a typed value map on submit.

pub mod builder;
pub mod fields;
pub mod rules;
pub mod types;

pub use builder::{submit_handler, FormBuilder, SubmitHandler};
pub use rules::{infer_rule, infer_schema, FormSchema, Rule};
pub use types::{FieldConfig, FieldType, FieldValue, FormValues, SelectOption};
