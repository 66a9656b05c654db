//! HTTP client with bearer authentication, pagination unwrapping, and error interception
//!
//! Every request picks up the current bearer token from the injected
//! [`TokenProvider`]. Every response carrying an `x-pagination` header is
//! rewrapped as [`ResponseBody::Paginated`]. Every failed response runs the
//! error interceptor once and is then returned to the caller as
//! [`ApiError::Status`].

use std::sync::Arc;
use std::time::Duration;

use parking_lot::RwLock;
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::HttpClientConfig;
use crate::constants::PAGINATION_HEADER;
use crate::error::{ApiError, ErrorResponse, Result};
use crate::interceptor::intercept;
use crate::model::{MetaData, PaginatedResponse, SearchParams};
use crate::notify::{Navigator, NoopNavigator, Notifier, TracingNotifier};

/// Source of the bearer token attached to outgoing requests
pub trait TokenProvider: Send + Sync {
    fn bearer_token(&self) -> Option<String>;
}

/// Token provider for anonymous clients
#[derive(Clone, Copy, Debug, Default)]
pub struct NoToken;

impl TokenProvider for NoToken {
    fn bearer_token(&self) -> Option<String> {
        None
    }
}

/// Token provider holding a token set by hand
#[derive(Debug, Default)]
pub struct StaticToken {
    token: RwLock<Option<String>>,
}

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }

    pub fn set(&self, token: impl Into<String>) {
        *self.token.write() = Some(token.into());
    }

    pub fn clear(&self) {
        *self.token.write() = None;
    }
}

impl TokenProvider for StaticToken {
    fn bearer_token(&self) -> Option<String> {
        self.token.read().clone()
    }
}

/// Successful response body, with the pagination header unwrapped when present
#[derive(Clone, Debug, PartialEq)]
pub enum ResponseBody {
    Plain(Value),
    Paginated { items: Value, pagination: MetaData },
}

impl ResponseBody {
    pub fn pagination(&self) -> Option<&MetaData> {
        match self {
            ResponseBody::Plain(_) => None,
            ResponseBody::Paginated { pagination, .. } => Some(pagination),
        }
    }

    /// Decode the body (or the items of a paginated body)
    pub fn into_json<T: DeserializeOwned>(self) -> Result<T> {
        let value = match self {
            ResponseBody::Plain(value) => value,
            ResponseBody::Paginated { items, .. } => items,
        };
        Ok(serde_json::from_value(value)?)
    }

    /// Decode a list body; plain bodies yield no metadata
    pub fn into_page<T: DeserializeOwned>(self) -> Result<PaginatedResponse<T>> {
        match self {
            ResponseBody::Plain(value) => Ok(PaginatedResponse::new(
                serde_json::from_value(value)?,
                None,
            )),
            ResponseBody::Paginated { items, pagination } => Ok(PaginatedResponse::new(
                serde_json::from_value(items)?,
                Some(pagination),
            )),
        }
    }
}

/// HTTP client wrapper shared by every resource API
pub struct MotormateHttpClient {
    client: Client,
    config: HttpClientConfig,
    tokens: Arc<dyn TokenProvider>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
}

impl MotormateHttpClient {
    /// Create an anonymous client that logs notifications and ignores navigation
    pub fn new(config: HttpClientConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .timeout(Duration::from_millis(config.read_timeout_ms))
            .build()?;

        Ok(Self {
            client,
            config,
            tokens: Arc::new(NoToken),
            notifier: Arc::new(TracingNotifier),
            navigator: Arc::new(NoopNavigator),
        })
    }

    pub fn with_token_provider(mut self, tokens: Arc<dyn TokenProvider>) -> Self {
        self.tokens = tokens;
        self
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn with_navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
        self.navigator = navigator;
        self
    }

    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    pub fn notifier(&self) -> &Arc<dyn Notifier> {
        &self.notifier
    }

    /// Join the base URL and a relative API path
    fn build_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Make a GET request with optional query parameters
    pub async fn get(&self, path: &str, params: Option<&SearchParams>) -> Result<ResponseBody> {
        let mut request = self.client.get(self.build_url(path));
        if let Some(params) = params {
            request = request.query(params);
        }
        self.execute(Method::GET, path, request).await
    }

    /// Make a POST request with a JSON body
    pub async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<ResponseBody> {
        let request = self.client.post(self.build_url(path)).json(body);
        self.execute(Method::POST, path, request).await
    }

    /// Make a PUT request with a JSON body
    pub async fn put<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<ResponseBody> {
        let request = self.client.put(self.build_url(path)).json(body);
        self.execute(Method::PUT, path, request).await
    }

    /// Make a PATCH request with a JSON body
    pub async fn patch<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<ResponseBody> {
        let request = self.client.patch(self.build_url(path)).json(body);
        self.execute(Method::PATCH, path, request).await
    }

    /// Make a DELETE request
    pub async fn delete(&self, path: &str) -> Result<ResponseBody> {
        let request = self.client.delete(self.build_url(path));
        self.execute(Method::DELETE, path, request).await
    }

    /// GET and decode the body
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: Option<&SearchParams>,
    ) -> Result<T> {
        self.get(path, params).await?.into_json()
    }

    /// GET a list, keeping the pagination metadata
    pub async fn get_page<T: DeserializeOwned>(
        &self,
        path: &str,
        params: Option<&SearchParams>,
    ) -> Result<PaginatedResponse<T>> {
        self.get(path, params).await?.into_page()
    }

    /// POST and decode the body
    pub async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.post(path, body).await?.into_json()
    }

    /// PUT and decode the body
    pub async fn put_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.put(path, body).await?.into_json()
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        request: RequestBuilder,
    ) -> Result<ResponseBody> {
        let request = match self.tokens.bearer_token().filter(|t| !t.is_empty()) {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        debug!(%method, path, "sending request");
        let response = request.send().await.map_err(|e| {
            warn!(%method, path, "request failed: {}", e);
            ApiError::Transport(e)
        })?;

        self.handle_response(response).await
    }

    /// Unwrap pagination on success, intercept and reject on failure
    async fn handle_response(&self, response: Response) -> Result<ResponseBody> {
        let status = response.status();
        let pagination = response
            .headers()
            .get(PAGINATION_HEADER)
            .map(|value| value.to_str().map(str::to_string));
        let bytes = response.bytes().await?;
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };

        if status.is_success() {
            return match pagination {
                Some(raw) => {
                    let raw = raw.map_err(|e| ApiError::InvalidPagination(e.to_string()))?;
                    let pagination: MetaData = serde_json::from_str(&raw)
                        .map_err(|e| ApiError::InvalidPagination(e.to_string()))?;
                    Ok(ResponseBody::Paginated {
                        items: body,
                        pagination,
                    })
                }
                None => Ok(ResponseBody::Plain(body)),
            };
        }

        let failure = ErrorResponse::new(status.as_u16(), body);
        warn!(status = failure.status, "request failed: {}", failure);
        intercept(
            self.config.error_policy,
            &failure,
            self.notifier.as_ref(),
            self.navigator.as_ref(),
        );
        Err(ApiError::Status(failure))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_build_url_trims_slashes() {
        let client =
            MotormateHttpClient::new(HttpClientConfig::new("http://localhost:5000/")).unwrap();
        assert_eq!(
            client.build_url("api/brand"),
            "http://localhost:5000/api/brand"
        );
        assert_eq!(
            client.build_url("/api/brand/1"),
            "http://localhost:5000/api/brand/1"
        );
    }

    #[test]
    fn test_static_token() {
        let token = StaticToken::new("abc");
        assert_eq!(token.bearer_token().as_deref(), Some("abc"));
        token.clear();
        assert!(token.bearer_token().is_none());
        token.set("def");
        assert_eq!(token.bearer_token().as_deref(), Some("def"));
        assert!(NoToken.bearer_token().is_none());
    }

    #[test]
    fn test_response_body_into_page() {
        let plain = ResponseBody::Plain(json!([1, 2, 3]));
        assert!(plain.pagination().is_none());
        let page: PaginatedResponse<u32> = plain.into_page().unwrap();
        assert_eq!(page.items, vec![1, 2, 3]);
        assert!(page.meta_data.is_none());

        let meta = MetaData {
            current_page: 1,
            total_pages: 1,
            page_size: 5,
            total_count: 2,
        };
        let paginated = ResponseBody::Paginated {
            items: json!([7, 8]),
            pagination: meta,
        };
        let page: PaginatedResponse<u32> = paginated.into_page().unwrap();
        assert_eq!(page.items, vec![7, 8]);
        assert_eq!(page.meta_data, Some(meta));
    }
}
