//! Field validation rules
//!
//! One rule per field, inferred from the descriptor unless the caller
//! supplies an explicit rule or a whole-form schema. Inference is a pure
//! per-field mapping so each arm can be tested on its own.

use std::collections::HashMap;
use std::sync::Arc;

use super::types::{FieldConfig, FieldType, FieldValue, FormValues};

/// Validation rule attached to a single field.
#[derive(Clone)]
pub enum Rule {
    /// Free text; `required` rejects the empty string.
    Text { required: bool },
    /// Email-shaped text.
    Email { required: bool },
    /// Numeric input with optional bounds; empty input coerces to zero.
    Number { min: Option<f64>, max: Option<f64> },
    /// Boolean toggle; required-ness is deliberately not enforced.
    Bool,
    /// Caller-supplied predicate, replaces any inferred rule.
    Custom(Arc<dyn Fn(&FieldValue) -> Result<(), String> + Send + Sync>),
}

impl Rule {
    pub fn custom<F>(check: F) -> Self
    where
        F: Fn(&FieldValue) -> Result<(), String> + Send + Sync + 'static,
    {
        Rule::Custom(Arc::new(check))
    }

    /// Validate a single value against this rule.
    pub fn validate(&self, value: &FieldValue) -> Result<(), String> {
        match self {
            Rule::Text { required } => {
                let text = value.as_text().unwrap_or_default();
                if *required && text.trim().is_empty() {
                    Err("Campo obrigatório".to_string())
                } else {
                    Ok(())
                }
            }
            Rule::Email { required } => {
                let text = value.as_text().unwrap_or_default();
                if text.trim().is_empty() {
                    if *required {
                        Err("Campo obrigatório".to_string())
                    } else {
                        Ok(())
                    }
                } else if !looks_like_email(text.trim()) {
                    Err("Email inválido".to_string())
                } else {
                    Ok(())
                }
            }
            Rule::Number { min, max } => {
                let number = match value {
                    FieldValue::Number(n) => *n,
                    FieldValue::Text(text) => {
                        let text = text.trim();
                        if text.is_empty() {
                            0.0
                        } else {
                            match text.parse::<f64>() {
                                Ok(n) => n,
                                Err(_) => return Err("Número inválido".to_string()),
                            }
                        }
                    }
                    FieldValue::Bool(_) => return Err("Número inválido".to_string()),
                };
                if let Some(min) = min {
                    if number < *min {
                        return Err(format!("Valor mínimo: {}", min));
                    }
                }
                if let Some(max) = max {
                    if number > *max {
                        return Err(format!("Valor máximo: {}", max));
                    }
                }
                Ok(())
            }
            Rule::Bool => Ok(()),
            Rule::Custom(check) => check(value),
        }
    }

    /// Default value produced by this rule when the descriptor has none.
    pub fn default_value(&self) -> FieldValue {
        match self {
            Rule::Number { .. } => FieldValue::Number(0.0),
            Rule::Bool => FieldValue::Bool(false),
            _ => FieldValue::Text(String::new()),
        }
    }
}

/// Schema for a whole form: one rule per field, keyed by name.
pub type FormSchema = HashMap<String, Rule>;

/// Infer the rule for one descriptor.
///
/// An explicit `validation` rule replaces the inferred one entirely,
/// including its bounds and required flag. Checkbox and switch fields use
/// the boolean rule; `required` on them is not enforced.
pub fn infer_rule(field: &FieldConfig) -> Rule {
    if let Some(rule) = &field.validation {
        return rule.clone();
    }
    match field.field_type {
        FieldType::Email => Rule::Email {
            required: field.required,
        },
        FieldType::Number => Rule::Number {
            min: field.min,
            max: field.max,
        },
        FieldType::Checkbox | FieldType::Switch => Rule::Bool,
        _ => Rule::Text {
            required: field.required,
        },
    }
}

/// Derive a schema for the whole field list.
pub fn infer_schema(fields: &[FieldConfig]) -> FormSchema {
    fields
        .iter()
        .map(|field| (field.name.clone(), infer_rule(field)))
        .collect()
}

/// Validate every field; the result maps field name to error message and is
/// empty when the form passes.
pub fn validate_values(schema: &FormSchema, values: &FormValues) -> HashMap<String, String> {
    let mut errors = HashMap::new();
    for (name, rule) in schema {
        let fallback = rule.default_value();
        let value = values.get(name).unwrap_or(&fallback);
        if let Err(message) = rule.validate(value) {
            errors.insert(name.clone(), message);
        }
    }
    errors
}

fn looks_like_email(s: &str) -> bool {
    let mut parts = s.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !s.contains(char::is_whitespace)
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::form::types::SelectOption;

    fn text_field(name: &str) -> FieldConfig {
        FieldConfig::new(name, FieldType::Text, name)
    }

    #[test]
    fn test_optional_fields_accept_empty_submission() {
        let fields = vec![
            text_field("label"),
            FieldConfig::new("email", FieldType::Email, "Email"),
            FieldConfig::new("count", FieldType::Number, "Count"),
            FieldConfig::new("active", FieldType::Checkbox, "Active"),
        ];
        let schema = infer_schema(&fields);
        let values: FormValues = fields
            .iter()
            .map(|f| (f.name.clone(), infer_rule(f).default_value()))
            .collect();

        assert!(validate_values(&schema, &values).is_empty());
    }

    #[test]
    fn test_required_text_field_blocks_empty_submission() {
        let fields = vec![text_field("label").required()];
        let schema = infer_schema(&fields);
        let values: FormValues =
            [("label".to_string(), FieldValue::Text(String::new()))].into();

        let errors = validate_values(&schema, &values);
        assert_eq!(errors.get("label").map(String::as_str), Some("Campo obrigatório"));
    }

    #[test]
    fn test_email_rule_rejects_malformed_address() {
        let field = FieldConfig::new("email", FieldType::Email, "Email").required();
        let rule = infer_rule(&field);

        assert!(rule.validate(&FieldValue::Text("user@example.com".into())).is_ok());
        assert!(rule.validate(&FieldValue::Text("not-an-email".into())).is_err());
        assert!(rule.validate(&FieldValue::Text("a b@example.com".into())).is_err());
        assert!(rule.validate(&FieldValue::Text(String::new())).is_err());
    }

    #[test]
    fn test_number_rule_enforces_bounds() {
        let field = FieldConfig::new("age", FieldType::Number, "Age")
            .required()
            .range(1.0, 120.0);
        let rule = infer_rule(&field);

        assert!(rule.validate(&FieldValue::Number(30.0)).is_ok());
        assert!(rule.validate(&FieldValue::Number(0.0)).is_err());
        assert!(rule.validate(&FieldValue::Number(121.0)).is_err());
        // Text input coerces before the bounds apply.
        assert!(rule.validate(&FieldValue::Text("15".into())).is_ok());
        assert!(rule.validate(&FieldValue::Text("abc".into())).is_err());
        // Empty input coerces to zero, so a positive minimum rejects it.
        assert!(rule.validate(&FieldValue::Text(String::new())).is_err());
    }

    #[test]
    fn test_required_checkbox_is_not_enforced() {
        let field = FieldConfig::new("accept", FieldType::Checkbox, "Accept").required();
        let rule = infer_rule(&field);
        assert!(rule.validate(&FieldValue::Bool(false)).is_ok());
    }

    #[test]
    fn test_explicit_rule_replaces_inferred_one() {
        // The inferred rule would accept any non-empty text; the explicit one
        // only accepts "exact".
        let field = text_field("token").required().validation(Rule::custom(|v| {
            if v.as_text() == Some("exact") {
                Ok(())
            } else {
                Err("Valor inválido".to_string())
            }
        }));
        let rule = infer_rule(&field);

        assert!(rule.validate(&FieldValue::Text("anything".into())).is_err());
        assert!(rule.validate(&FieldValue::Text("exact".into())).is_ok());
        // And the other direction: the explicit rule accepts the empty string
        // that the inferred required-text rule would reject.
        let lax = text_field("free").required().validation(Rule::custom(|_| Ok(())));
        assert!(infer_rule(&lax).validate(&FieldValue::Text(String::new())).is_ok());
    }

    #[test]
    fn test_defaults_follow_field_type() {
        let select = FieldConfig::new("level", FieldType::Select, "Level")
            .options(vec![SelectOption::new("1", "One")]);
        assert_eq!(infer_rule(&select).default_value(), FieldValue::Text(String::new()));

        let number = FieldConfig::new("n", FieldType::Number, "N");
        assert_eq!(infer_rule(&number).default_value(), FieldValue::Number(0.0));

        let toggle = FieldConfig::new("t", FieldType::Switch, "T");
        assert_eq!(infer_rule(&toggle).default_value(), FieldValue::Bool(false));
    }
}
