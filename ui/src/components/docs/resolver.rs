//! Reference resolution for the documentation viewer
//!
//! References have the fixed form `#/components/<kind>/<name>` and resolve
//! against the document's components tables. A parameter may carry a schema
//! that is itself a reference; that hop is followed too. A visited set plus
//! a hop cap turns cycles in the fetched document into a definite error
//! instead of unbounded recursion, since the document is untrusted input.

use serde_json::Value;
use std::collections::HashSet;
use std::fmt;

use super::document::Components;

pub const PARAMETER_PREFIX: &str = "#/components/parameters/";
pub const SCHEMA_PREFIX: &str = "#/components/schemas/";

const MAX_HOPS: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    UnknownReference(String),
    UnsupportedReference(String),
    CircularReference(String),
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::UnknownReference(r) => write!(f, "unknown reference: {}", r),
            ResolveError::UnsupportedReference(r) => write!(f, "unsupported reference: {}", r),
            ResolveError::CircularReference(r) => write!(f, "circular reference: {}", r),
        }
    }
}

/// A parameter with every reference substituted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedParameter {
    pub name: String,
    /// Where the parameter goes: `path`, `query`, `header`...
    pub location: String,
    pub required: bool,
    pub description: String,
    pub schema_type: String,
    pub example: Option<String>,
}

/// Resolves references against one document's components.
pub struct Resolver<'a> {
    components: &'a Components,
    visited: HashSet<String>,
}

impl<'a> Resolver<'a> {
    pub fn new(components: &'a Components) -> Self {
        Self {
            components,
            visited: HashSet::new(),
        }
    }

    /// Substitute a `$ref` parameter (or pass an inline one through), then
    /// follow the parameter's own schema reference if present.
    pub fn resolve_parameter(&mut self, raw: &Value) -> Result<ResolvedParameter, ResolveError> {
        self.visited.clear();
        let parameter = self.deref(raw, 0)?;
        let schema = match parameter.get("schema") {
            Some(schema) => self.deref(schema, 0)?,
            None => Value::Null,
        };

        let example = parameter
            .get("example")
            .or_else(|| schema.get("example"))
            .map(display_value);

        Ok(ResolvedParameter {
            name: string_field(&parameter, "name"),
            location: string_field(&parameter, "in"),
            required: parameter
                .get("required")
                .and_then(Value::as_bool)
                .unwrap_or(false),
            description: string_field(&parameter, "description"),
            schema_type: schema
                .get("type")
                .and_then(Value::as_str)
                .unwrap_or("string")
                .to_string(),
            example,
        })
    }

    /// Resolve every parameter of an operation, keeping failures so the
    /// view can render them as invalid entries.
    pub fn resolve_parameters(
        &mut self,
        raw: &[Value],
    ) -> Vec<Result<ResolvedParameter, ResolveError>> {
        raw.iter().map(|value| self.resolve_parameter(value)).collect()
    }

    /// Follow `$ref` nodes until a concrete value.
    fn deref(&mut self, value: &Value, hops: usize) -> Result<Value, ResolveError> {
        let Some(reference) = value.get("$ref").and_then(Value::as_str) else {
            return Ok(value.clone());
        };
        let reference = reference.trim();
        if hops >= MAX_HOPS || !self.visited.insert(reference.to_string()) {
            return Err(ResolveError::CircularReference(reference.to_string()));
        }

        let target = if let Some(name) = reference.strip_prefix(PARAMETER_PREFIX) {
            self.components.parameters.get(name.trim())
        } else if let Some(name) = reference.strip_prefix(SCHEMA_PREFIX) {
            self.components.schemas.get(name.trim())
        } else {
            return Err(ResolveError::UnsupportedReference(reference.to_string()));
        };

        match target {
            Some(found) => {
                let found = found.clone();
                self.deref(&found, hops + 1)
            }
            None => Err(ResolveError::UnknownReference(reference.to_string())),
        }
    }
}

fn string_field(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn components() -> Components {
        serde_json::from_value(json!({
            "parameters": {
                "OccupationId": {
                    "name": "id",
                    "in": "path",
                    "required": true,
                    "description": "Código da ocupação",
                    "example": 252105,
                    "schema": { "type": "integer" }
                },
                "LabelFilter": {
                    "name": "label",
                    "in": "query",
                    "schema": { "$ref": "#/components/schemas/Label" }
                },
                "Loop": { "$ref": "#/components/parameters/Loop" }
            },
            "schemas": {
                "Label": { "type": "string", "example": "médico" }
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_resolves_parameter_reference() {
        let components = components();
        let mut resolver = Resolver::new(&components);
        let raw = json!({ "$ref": "#/components/parameters/OccupationId" });

        let resolved = resolver.resolve_parameter(&raw).unwrap();
        assert_eq!(resolved.name, "id");
        assert_eq!(resolved.location, "path");
        assert!(resolved.required);
        assert_eq!(resolved.schema_type, "integer");
        assert_eq!(resolved.example.as_deref(), Some("252105"));
    }

    #[test]
    fn test_resolves_schema_reference_inside_parameter() {
        let components = components();
        let mut resolver = Resolver::new(&components);
        let raw = json!({ "$ref": "#/components/parameters/LabelFilter" });

        let resolved = resolver.resolve_parameter(&raw).unwrap();
        assert_eq!(resolved.name, "label");
        assert_eq!(resolved.location, "query");
        assert!(!resolved.required);
        // The schema hop substituted the Label definition.
        assert_eq!(resolved.schema_type, "string");
        assert_eq!(resolved.example.as_deref(), Some("médico"));
    }

    #[test]
    fn test_inline_parameter_passes_through() {
        let components = components();
        let mut resolver = Resolver::new(&components);
        let raw = json!({ "name": "page", "in": "query", "schema": { "type": "integer" } });

        let resolved = resolver.resolve_parameter(&raw).unwrap();
        assert_eq!(resolved.name, "page");
        assert_eq!(resolved.schema_type, "integer");
    }

    #[test]
    fn test_unknown_reference_is_an_error() {
        let components = components();
        let mut resolver = Resolver::new(&components);
        let raw = json!({ "$ref": "#/components/parameters/Missing" });

        assert_eq!(
            resolver.resolve_parameter(&raw),
            Err(ResolveError::UnknownReference(
                "#/components/parameters/Missing".to_string()
            ))
        );
    }

    #[test]
    fn test_foreign_reference_shape_is_rejected() {
        let components = components();
        let mut resolver = Resolver::new(&components);
        let raw = json!({ "$ref": "#/definitions/Other" });

        assert!(matches!(
            resolver.resolve_parameter(&raw),
            Err(ResolveError::UnsupportedReference(_))
        ));
    }

    #[test]
    fn test_reference_cycle_is_a_definite_error() {
        let components = components();
        let mut resolver = Resolver::new(&components);
        let raw = json!({ "$ref": "#/components/parameters/Loop" });

        assert!(matches!(
            resolver.resolve_parameter(&raw),
            Err(ResolveError::CircularReference(_))
        ));
    }
}
