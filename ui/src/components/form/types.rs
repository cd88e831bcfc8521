//! Core types for declarative form generation

use std::collections::HashMap;

use super::rules::Rule;

/// Control kind for a single form field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldType {
    Text,
    Email,
    Password,
    Number,
    Textarea,
    Select,
    Checkbox,
    Radio,
    Switch,
}

/// One entry in a choice control (select/radio).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub disabled: bool,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// Current value of a single field.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Bool(bool),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Text representation used to fill input controls.
    pub fn display(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Bool(b) => b.to_string(),
        }
    }
}

/// Declarative description of one form control.
///
/// Descriptors are built by the caller and stay unchanged for the lifetime
/// of a form instance.
#[derive(Clone)]
pub struct FieldConfig {
    pub name: String,
    pub field_type: FieldType,
    pub label: String,
    pub placeholder: Option<String>,
    pub description: Option<String>,
    pub required: bool,
    pub disabled: bool,
    pub options: Vec<SelectOption>,
    pub rows: Option<u32>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: Option<f64>,
    /// Replaces the inferred rule wholesale when set.
    pub validation: Option<Rule>,
    /// Literal default applied on mount and on reset.
    pub default: Option<FieldValue>,
}

impl FieldConfig {
    pub fn new(name: impl Into<String>, field_type: FieldType, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type,
            label: label.into(),
            placeholder: None,
            description: None,
            required: false,
            disabled: false,
            options: Vec::new(),
            rows: None,
            min: None,
            max: None,
            step: None,
            validation: None,
            default: None,
        }
    }

    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }

    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn options(mut self, options: Vec<SelectOption>) -> Self {
        self.options = options;
        self
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    pub fn step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }

    pub fn validation(mut self, rule: Rule) -> Self {
        self.validation = Some(rule);
        self
    }

    pub fn default_value(mut self, value: FieldValue) -> Self {
        self.default = Some(value);
        self
    }
}

/// Values keyed by field name, delivered to the submit handler.
pub type FormValues = HashMap<String, FieldValue>;
