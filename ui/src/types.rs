//! Shared types for the CBO Explorer Web UI
//!
//! These types mirror the catalog API envelopes and domain models.

use serde::{Deserialize, Serialize};

/// Pagination block attached to list responses
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
    pub items: u32,
    pub total_items: u64,
    pub total_pages: u32,
    pub has_next: bool,
}

/// Generic API response envelope
///
/// Success responses carry `data` (plus `pagination` on list endpoints);
/// error responses carry `code` and `message` with `success == false`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// Position of an occupation within the classification tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Hierarchy {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub big_group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_sub_group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
}

/// One occupation entry, at any level of the classification
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Occupation {
    pub id: u32,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub level: u8,
    #[serde(default)]
    pub hierarchy: Hierarchy,
    #[serde(default)]
    pub synonymous: Vec<String>,
    #[serde(default)]
    pub activities: Vec<String>,
    #[serde(default)]
    pub competencies: Vec<String>,
    #[serde(default)]
    pub work_conditions: Vec<String>,
    #[serde(default)]
    pub academy: Vec<String>,
    #[serde(default)]
    pub work_resources: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Family {
    pub id: u32,
    pub label: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub occupations: Vec<Occupation>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SubGroup {
    pub id: u32,
    pub label: String,
    #[serde(default)]
    pub family: Vec<Family>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct MainSubGroup {
    pub id: u32,
    pub label: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub sub_group: Vec<SubGroup>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BigGroup {
    pub id: u32,
    pub label: String,
    #[serde(default)]
    pub main_sub_groups: Vec<MainSubGroup>,
}

/// Aggregate counts shown on the home statistics grid
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub total_occupations: u64,
    pub total_big_groups: u64,
    pub total_sub_groups: u64,
    pub total_main_sub_groups: u64,
    pub total_family: u64,
}

/// Query parameters accepted by the occupation search endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    pub label: Option<String>,
    pub id: Option<String>,
    pub level: Option<u8>,
    pub big_group: Option<String>,
    pub main_sub_group: Option<String>,
    pub sub_group: Option<String>,
    pub family: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl SearchParams {
    /// Label-only search with the default page size.
    pub fn labelled(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            per_page: Some(20),
            ..Default::default()
        }
    }

    /// Serialize the set fields as a URL query string.
    ///
    /// The wire key for `sub_group` is the all-lowercase `subgroup`; the
    /// backend does not accept the camel-cased form.
    pub fn to_query_string(&self) -> String {
        fn pair(key: &str, value: &str) -> String {
            format!("{}={}", key, urlencoding::encode(value))
        }

        let mut pairs = Vec::new();
        if let Some(v) = &self.label {
            pairs.push(pair("label", v));
        }
        if let Some(v) = &self.id {
            pairs.push(pair("id", v));
        }
        if let Some(v) = self.level {
            pairs.push(format!("level={}", v));
        }
        if let Some(v) = &self.big_group {
            pairs.push(pair("bigGroup", v));
        }
        if let Some(v) = &self.main_sub_group {
            pairs.push(pair("mainSubGroup", v));
        }
        if let Some(v) = &self.sub_group {
            pairs.push(pair("subgroup", v));
        }
        if let Some(v) = &self.family {
            pairs.push(pair("family", v));
        }
        if let Some(v) = self.page {
            pairs.push(format!("page={}", v));
        }
        if let Some(v) = self.per_page {
            pairs.push(format!("perPage={}", v));
        }
        pairs.join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_multi_success_envelope() {
        let body = json!({
            "success": true,
            "message": "ok",
            "data": [
                { "id": 252105, "label": "Administrador", "level": 5 }
            ],
            "pagination": {
                "page": 1, "perPage": 20, "items": 1,
                "totalItems": 1, "totalPages": 1, "hasNext": false
            }
        });

        let envelope: ApiResponse<Vec<Occupation>> = serde_json::from_value(body).unwrap();
        assert!(envelope.success);
        let data = envelope.data.unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data[0].id, 252105);
        assert_eq!(data[0].level, 5);
        let pagination = envelope.pagination.unwrap();
        assert_eq!(pagination.total_items, 1);
        assert!(!pagination.has_next);
    }

    #[test]
    fn test_decode_single_success_with_null_data() {
        let body = json!({ "success": true, "message": "not found", "data": null });
        let envelope: ApiResponse<Occupation> = serde_json::from_value(body).unwrap();
        assert!(envelope.success);
        assert!(envelope.data.is_none());
        assert!(envelope.pagination.is_none());
    }

    #[test]
    fn test_decode_error_envelope() {
        let body = json!({
            "success": false,
            "code": "BAD_REQUEST",
            "message": "invalid level"
        });
        let envelope: ApiResponse<Occupation> = serde_json::from_value(body).unwrap();
        assert!(!envelope.success);
        assert_eq!(envelope.code.as_deref(), Some("BAD_REQUEST"));
        assert_eq!(envelope.message.as_deref(), Some("invalid level"));
    }

    #[test]
    fn test_query_string_skips_unset_fields() {
        let params = SearchParams {
            label: Some("engenheiro".into()),
            per_page: Some(20),
            ..Default::default()
        };
        assert_eq!(params.to_query_string(), "label=engenheiro&perPage=20");
    }

    #[test]
    fn test_query_string_percent_encodes_values() {
        let params = SearchParams {
            label: Some("médico".into()),
            ..Default::default()
        };
        assert_eq!(params.to_query_string(), "label=m%C3%A9dico");
    }

    #[test]
    fn test_query_string_uses_lowercase_subgroup_key() {
        let params = SearchParams {
            sub_group: Some("dirigentes".into()),
            level: Some(3),
            ..Default::default()
        };
        assert_eq!(params.to_query_string(), "level=3&subgroup=dirigentes");
    }
}
