//! The HTTP client core.

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::auth::RequestAuth;
use crate::error::{classify, ApiError, ApiResult};

/// Header carrying the tenant scope on every request.
pub const COMPANY_HEADER: &str = "x-company-id";

/// Thin request layer over `reqwest` with the two interceptors.
///
/// Timeouts are left to the transport's defaults; there is no retry layer.
#[derive(Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    auth: RequestAuth,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            auth: RequestAuth::anonymous(),
        }
    }

    /// Replace the outbound auth state (login).
    pub fn set_auth(&mut self, auth: RequestAuth) {
        self.auth = auth;
    }

    /// Drop the outbound auth state (logout / session-fatal failure).
    pub fn clear_auth(&mut self) {
        self.auth = RequestAuth::anonymous();
    }

    pub fn auth(&self) -> &RequestAuth {
        &self.auth
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Outbound interceptor: attach bearer credential and tenant header.
    fn decorate(&self, mut rb: RequestBuilder) -> RequestBuilder {
        if let Some(credential) = &self.auth.credential {
            rb = rb.bearer_auth(credential);
        }
        if let Some(company_id) = self.auth.company_id {
            rb = rb.header(COMPANY_HEADER, company_id.to_string());
        }
        rb
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.decorate(self.http.request(method, self.url(path)))
    }

    /// Inbound interceptor: run the request, classify any error response.
    async fn execute<T: DeserializeOwned>(&self, rb: RequestBuilder) -> ApiResult<T> {
        let response = rb.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response.json().await?);
        }

        let body = match response.json::<Value>().await {
            Ok(v) => v,
            Err(e) => {
                tracing::debug!(error = %e, "error response body was not JSON");
                Value::Null
            }
        };

        let class = classify(status.as_u16(), &body);
        tracing::warn!(status = status.as_u16(), failure = %class, "request failed");
        Err(ApiError::Failure(class))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.execute(self.request(Method::GET, path)).await
    }

    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.execute(self.request(Method::POST, path).json(body))
            .await
    }

    /// POST with an empty body (progress transitions, logout).
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.execute(self.request(Method::POST, path)).await
    }

    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.execute(self.request(Method::PUT, path).json(body))
            .await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.execute(self.request(Method::DELETE, path)).await
    }
}
