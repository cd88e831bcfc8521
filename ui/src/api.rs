//! HTTP client for the catalog backend
//!
//! Every transport failure is normalized into [`ApiError`] at this boundary;
//! components never see raw fetch errors. A 401 clears the stored credential
//! and forces navigation to the login route.

#![allow(dead_code)]

use futures::future::{select, Either};
use gloo_net::http::{Request, RequestBuilder, Response};
use gloo_timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;

use crate::components::docs::document::ApiDocument;
use crate::session;
use crate::types::{
    ApiResponse, BigGroup, CatalogStats, Family, MainSubGroup, Occupation, Pagination,
    SearchParams, SubGroup,
};

/// Public catalog host used when no override is compiled in.
pub const DEFAULT_BASE_URL: &str = "https://cbo2002.analiseops.com.br";

const REQUEST_TIMEOUT_MS: u32 = 60_000;

/// Normalized request failure; `status` is 0 when no response was received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub message: String,
    pub status: u16,
    pub code: Option<String>,
}

impl ApiError {
    fn transport(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: 0,
            code: None,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// One page of a list endpoint.
#[derive(Debug, Clone, Default)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Option<Pagination>,
}

/// Client for the catalog API, provided to pages through Leptos context.
///
/// Construct one per application; holding it in context keeps the
/// base-URL and credential wiring out of individual components.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Build from the compile-time `CBO_API_URL` override, falling back to
    /// the public host.
    pub fn from_env() -> Self {
        Self::new(option_env!("CBO_API_URL").unwrap_or(DEFAULT_BASE_URL))
    }

    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url: String = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ------------------------------------------------------------------
    // Occupations
    // ------------------------------------------------------------------

    pub async fn search_occupations(&self, params: &SearchParams) -> Result<Page<Occupation>, ApiError> {
        let query = params.to_query_string();
        let path = if query.is_empty() {
            "/api/occupations/search".to_string()
        } else {
            format!("/api/occupations/search?{}", query)
        };
        self.fetch_list(&path).await
    }

    /// Suggestion lookup: a label search capped at `limit` entries.
    pub async fn auto_complete(&self, query: &str, limit: u32) -> Result<Page<Occupation>, ApiError> {
        let params = SearchParams {
            label: Some(query.to_string()),
            per_page: Some(limit),
            ..Default::default()
        };
        self.search_occupations(&params).await
    }

    pub async fn occupation_by_id(&self, id: u32) -> Result<Option<Occupation>, ApiError> {
        self.fetch_one(&format!("/api/occupations/{}", id)).await
    }

    /// Most consulted occupations, used on the home page.
    pub async fn frequent_occupations(&self, limit: u32) -> Result<Page<Occupation>, ApiError> {
        self.fetch_list(&format!("/api/occupations?perPage={}", limit)).await
    }

    // ------------------------------------------------------------------
    // Taxonomy groups
    // ------------------------------------------------------------------

    pub async fn big_groups(&self) -> Result<Page<BigGroup>, ApiError> {
        self.fetch_list("/api/big-groups").await
    }

    pub async fn big_group_by_id(&self, id: u32) -> Result<Option<BigGroup>, ApiError> {
        self.fetch_one(&format!("/api/big-groups/{}", id)).await
    }

    pub async fn sub_groups(&self) -> Result<Page<SubGroup>, ApiError> {
        self.fetch_list("/api/sub-groups").await
    }

    pub async fn sub_group_by_id(&self, id: u32) -> Result<Option<SubGroup>, ApiError> {
        self.fetch_one(&format!("/api/sub-groups/{}", id)).await
    }

    pub async fn main_sub_groups(&self) -> Result<Page<MainSubGroup>, ApiError> {
        self.fetch_list("/api/main-sub-groups").await
    }

    pub async fn families(&self) -> Result<Page<Family>, ApiError> {
        self.fetch_list("/api/families").await
    }

    // ------------------------------------------------------------------
    // Statistics and documentation
    // ------------------------------------------------------------------

    pub async fn stats(&self) -> Result<Option<CatalogStats>, ApiError> {
        self.fetch_one("/api/analytics/stats").await
    }

    /// The OpenAPI document is served raw, outside the envelope contract.
    pub async fn api_docs(&self) -> Result<ApiDocument, ApiError> {
        let response = self.send("/api/docs.json").await?;
        let status = response.status();
        if !(200..300).contains(&status) {
            return Err(ApiError {
                message: "Falha ao carregar documentação".to_string(),
                status,
                code: None,
            });
        }
        response.json::<ApiDocument>().await.map_err(|e| ApiError {
            message: format!("Documento inválido: {}", e),
            status,
            code: None,
        })
    }

    // ------------------------------------------------------------------
    // Transport helpers
    // ------------------------------------------------------------------

    async fn send(&self, path_and_query: &str) -> Result<Response, ApiError> {
        let url = format!("{}{}", self.base_url, path_and_query);
        let mut builder = Request::get(&url)
            .header("Content-Type", "application/json")
            .header("Cache-Control", "no-store");
        if let Some(token) = session::token() {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }
        log::debug!("GET {}", url);

        let response = send_with_timeout(builder).await?;
        if response.status() == 401 {
            session::clear_token();
            redirect_to_login();
            return Err(ApiError {
                message: "Sessão expirada".to_string(),
                status: 401,
                code: None,
            });
        }
        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<ApiResponse<T>, ApiError> {
        let status = response.status();
        response
            .json::<ApiResponse<T>>()
            .await
            .map_err(|e| ApiError {
                message: format!("Resposta inválida: {}", e),
                status,
                code: None,
            })
    }

    async fn fetch_one<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, ApiError> {
        let response = self.send(path).await?;
        let status = response.status();
        let envelope = Self::decode::<T>(response).await?;
        if envelope.success {
            // Missing data on a success envelope is a not-found, not a failure.
            Ok(envelope.data)
        } else {
            Err(envelope_error(envelope.message, envelope.code, status))
        }
    }

    async fn fetch_list<T: DeserializeOwned>(&self, path: &str) -> Result<Page<T>, ApiError> {
        let response = self.send(path).await?;
        let status = response.status();
        let envelope = Self::decode::<Vec<T>>(response).await?;
        if envelope.success {
            Ok(Page {
                items: envelope.data.unwrap_or_default(),
                pagination: envelope.pagination,
            })
        } else {
            Err(envelope_error(envelope.message, envelope.code, status))
        }
    }
}

fn envelope_error(message: Option<String>, code: Option<String>, status: u16) -> ApiError {
    ApiError {
        message: message.unwrap_or_else(|| "Erro na requisição".to_string()),
        status,
        code,
    }
}

async fn send_with_timeout(builder: RequestBuilder) -> Result<Response, ApiError> {
    let request = Box::pin(builder.send());
    let timeout = Box::pin(TimeoutFuture::new(REQUEST_TIMEOUT_MS));
    match select(request, timeout).await {
        Either::Left((result, _)) => result.map_err(|e| ApiError::transport(e.to_string())),
        Either::Right(_) => Err(ApiError::transport("Tempo limite da requisição excedido")),
    }
}

fn redirect_to_login() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/login");
    }
}
