//! HTTP transport layer.
//!
//! A [`Transport`] performs exactly one HTTP request described by an
//! [`ApiRequest`] and returns the raw status, body and headers. All protocol
//! decisions (bearer headers, 401 retries, redirect handling) live in the
//! layers above; only network-level failures surface as errors here.

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::redirect;

use super::endpoints::Method;
use crate::error::ApiResult;

#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl ApiRequest {
    pub fn new(method: Method, url: &str) -> Self {
        ApiRequest {
            method,
            url: url.to_string(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn get(url: &str) -> Self {
        ApiRequest::new(Method::Get, url)
    }

    pub fn post(url: &str) -> Self {
        ApiRequest::new(Method::Post, url)
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    pub fn json_body(self, body: String) -> Self {
        let mut request = self.header("Content-Type", "application/json");
        request.body = Some(body);
        request
    }

    pub fn form_body(self, body: String) -> Self {
        let mut request = self.header("Content-Type", "application/x-www-form-urlencoded");
        request.body = Some(body);
        request
    }
}

#[derive(Debug, Clone, Default)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
    /// Response headers with lower-cased names.
    pub headers: HashMap<String, String>,
}

impl ApiResponse {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: ApiRequest) -> ApiResult<ApiResponse>;
}

/// Production transport backed by `reqwest`.
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> ApiResult<Self> {
        // the authorize endpoint answers with a 302 whose Location header
        // carries the authorization code, so redirects must not be followed
        let client = reqwest::Client::builder()
            .redirect(redirect::Policy::none())
            .build()?;
        Ok(HttpTransport { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        let mut builder = match request.method {
            Method::Get => self.client.get(&request.url),
            Method::Post => self.client.post(&request.url),
            Method::Delete => self.client.delete(&request.url),
        };

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let mut headers = HashMap::new();
        for (name, value) in response.headers() {
            if let Ok(value) = value.to_str() {
                headers.insert(name.as_str().to_ascii_lowercase(), value.to_string());
            }
        }
        let body = response.text().await?;

        Ok(ApiResponse {
            status,
            body,
            headers,
        })
    }
}
