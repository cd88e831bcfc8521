//! OpenAPI-like document model
//!
//! Parsed leniently: operations keep their raw parameter list (inline or
//! `$ref`) and component schemas stay as JSON values; the resolver
//! substitutes references on demand. Maps preserve document order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DocInfo {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub version: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Server {
    pub url: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ResponseDef {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub content: Option<IndexMap<String, Value>>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Operation {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Inline parameter objects or `{"$ref": "#/components/parameters/..."}`.
    #[serde(default)]
    pub parameters: Vec<Value>,
    #[serde(default)]
    pub responses: IndexMap<String, ResponseDef>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Components {
    #[serde(default)]
    pub schemas: IndexMap<String, Value>,
    #[serde(default)]
    pub parameters: IndexMap<String, Value>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ApiDocument {
    #[serde(default)]
    pub info: DocInfo,
    #[serde(default)]
    pub servers: Vec<Server>,
    #[serde(default)]
    pub paths: IndexMap<String, IndexMap<String, Operation>>,
    #[serde(default)]
    pub components: Components,
}

impl ApiDocument {
    /// Path prefix for try-out requests, from the first server entry.
    pub fn base_path(&self) -> &str {
        self.servers.first().map(|s| s.url.as_str()).unwrap_or("")
    }
}

/// Endpoint filter: a path is kept when the term appears (case-insensitive)
/// in any operation tag, in the path text, or in any operation summary.
pub fn path_matches<'a>(
    path: &str,
    operations: impl IntoIterator<Item = &'a Operation>,
    term: &str,
) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    if path.to_lowercase().contains(&term) {
        return true;
    }
    operations.into_iter().any(|op| {
        op.tags.iter().any(|tag| tag.to_lowercase().contains(&term))
            || op.summary.to_lowercase().contains(&term)
    })
}

/// Schema filter: matched by name only.
pub fn schema_matches(name: &str, term: &str) -> bool {
    term.is_empty() || name.to_lowercase().contains(&term.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn operation(tags: &[&str], summary: &str) -> Operation {
        Operation {
            summary: summary.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_path_matches_by_tag_case_insensitive() {
        let ops = vec![operation(&["Ocupação"], "Busca ocupações")];
        assert!(path_matches("/occupations/search", &ops, "ocupação"));
        assert!(path_matches("/occupations/search", &ops, "OCUPAÇÃO"));
        assert!(!path_matches("/occupations/search", &ops, "estatísticas"));
    }

    #[test]
    fn test_path_matches_by_path_text_and_summary() {
        let ops = vec![operation(&[], "Lista grandes grupos")];
        assert!(path_matches("/big-groups", &ops, "big-group"));
        assert!(path_matches("/big-groups", &ops, "grandes grupos"));
        assert!(path_matches("/big-groups", &ops, ""));
    }

    #[test]
    fn test_path_filter_is_idempotent() {
        let paths = vec![
            ("/occupations", vec![operation(&["Ocupação"], "Lista")]),
            ("/analytics/stats", vec![operation(&["Estatísticas"], "Números")]),
        ];
        let filter = |term: &str| -> Vec<&str> {
            paths
                .iter()
                .filter(|(path, ops)| path_matches(path, ops, term))
                .map(|(path, _)| *path)
                .collect()
        };
        let first = filter("ocupação");
        let second = filter("ocupação");
        assert_eq!(first, vec!["/occupations"]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_schema_matches_by_name() {
        assert!(schema_matches("OccupationResponse", "occupation"));
        assert!(schema_matches("OccupationResponse", ""));
        assert!(!schema_matches("OccupationResponse", "pagination"));
    }

    #[test]
    fn test_document_decodes_paths_and_components() {
        let doc: ApiDocument = serde_json::from_value(json!({
            "info": { "title": "Catalog API", "version": "1.0.0" },
            "servers": [{ "url": "/api" }],
            "paths": {
                "/occupations/{id}": {
                    "get": {
                        "summary": "Busca por código",
                        "tags": ["Ocupação"],
                        "parameters": [{ "$ref": "#/components/parameters/OccupationId" }],
                        "responses": { "200": { "description": "ok" } }
                    }
                }
            },
            "components": {
                "parameters": {
                    "OccupationId": {
                        "name": "id", "in": "path", "required": true,
                        "schema": { "type": "integer" }
                    }
                },
                "schemas": {}
            }
        }))
        .unwrap();

        assert_eq!(doc.base_path(), "/api");
        let methods = doc.paths.get("/occupations/{id}").unwrap();
        let get = methods.get("get").unwrap();
        assert_eq!(get.parameters.len(), 1);
        assert!(get.responses.contains_key("200"));
        assert!(doc.components.parameters.contains_key("OccupationId"));
    }
}
