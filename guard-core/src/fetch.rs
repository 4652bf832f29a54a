//! A thin JSON-over-HTTP client.
//!
//! [`FetchClient`] owns URL joining, headers and response decoding; the actual
//! wire is a [`Transport`]. The browser transport lives in the UI crate.

use log::{debug, error};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    /// Non-2xx response. `message` is the response body, or a generic
    /// description when the body was empty.
    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("failed to parse response body: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("network error: {0}")]
    Network(String),
}

impl FetchError {
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Sends one request and hands back whatever came over the wire. Non-2xx
/// statuses are not errors at this level.
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, FetchError>;
}

pub fn join_url(base: &str, path: &str) -> String {
    if path.starts_with("http") {
        return path.to_string();
    }
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

fn request_headers(token: Option<&str>) -> Vec<(String, String)> {
    let mut headers = Vec::with_capacity(2);
    if let Some(token) = token {
        headers.push(("Authorization".to_string(), format!("Token {token}")));
    }
    headers.push(("Content-Type".to_string(), "application/json".to_string()));
    headers
}

/// Turns a raw response into the caller's type. 204 and empty bodies yield
/// `None` without touching the JSON parser.
pub fn decode_response<R: DeserializeOwned>(response: HttpResponse) -> Result<Option<R>, FetchError> {
    if !response.is_success() {
        let status = response.status;
        error!("request failed with status {status}: {}", response.body);
        let message = if response.body.trim().is_empty() {
            format!("request failed with status {status}")
        } else {
            response.body
        };
        return Err(FetchError::Status { status, message });
    }

    if response.status == 204 || response.body.trim().is_empty() {
        return Ok(None);
    }

    serde_json::from_str(&response.body)
        .map(Some)
        .map_err(|e| {
            error!("malformed response body: {e}");
            FetchError::Parse(e)
        })
}

pub struct FetchClient<T> {
    base_url: String,
    transport: T,
}

impl<T: Transport> FetchClient<T> {
    pub fn new(base_url: impl Into<String>, transport: T) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn fetch<R: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
    ) -> Result<Option<R>, FetchError> {
        self.request::<R, ()>(Method::Get, path, token, None).await
    }

    pub async fn request<R, B>(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Option<&B>,
    ) -> Result<Option<R>, FetchError>
    where
        R: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = body
            .map(serde_json::to_string)
            .transpose()
            .map_err(FetchError::Encode)?;
        let url = join_url(&self.base_url, path);
        debug!("{} {url}", method.as_str());

        let request = HttpRequest {
            method,
            url: url.clone(),
            headers: request_headers(token),
            body,
        };
        let response = self.transport.send(request).await.map_err(|e| {
            error!("request to {url} failed: {e}");
            e
        })?;

        decode_response(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedTransport;
    use futures::executor::block_on;
    use serde::Deserialize;

    const BASE: &str = "https://app.globalguard.com.au:8000/api/v2";

    #[derive(Debug, Deserialize, PartialEq)]
    struct Counts {
        guards: u64,
    }

    fn client(responses: Vec<Result<HttpResponse, FetchError>>) -> FetchClient<ScriptedTransport> {
        FetchClient::new(BASE, ScriptedTransport::new(responses))
    }

    #[test]
    fn joins_relative_paths_with_one_slash() {
        assert_eq!(join_url(BASE, "guards/count/"), format!("{BASE}/guards/count/"));
        assert_eq!(join_url(BASE, "/guards/count/"), format!("{BASE}/guards/count/"));
        assert_eq!(join_url(&format!("{BASE}/"), "guards/"), format!("{BASE}/guards/"));
    }

    #[test]
    fn absolute_urls_pass_through() {
        let url = "https://other.example.com/api/v1/ping";
        assert_eq!(join_url(BASE, url), url);
        assert_eq!(join_url(BASE, "http://x"), "http://x");
    }

    #[test]
    fn sends_token_and_content_type() {
        let client = client(vec![Ok(HttpResponse::new(200, r#"{"guards":3}"#))]);
        let out: Option<Counts> = block_on(client.fetch("guards/", Some("abc123"))).expect("fetch");
        assert_eq!(out, Some(Counts { guards: 3 }));

        let sent = client.transport().requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, Method::Get);
        assert_eq!(sent[0].url, format!("{BASE}/guards/"));
        assert_eq!(sent[0].header("authorization"), Some("Token abc123"));
        assert_eq!(sent[0].header("Content-Type"), Some("application/json"));
        assert!(sent[0].body.is_none());
    }

    #[test]
    fn omits_authorization_without_token() {
        let client = client(vec![Ok(HttpResponse::new(204, ""))]);
        let _: Option<Counts> = block_on(client.fetch("ping/", None)).expect("fetch");
        assert_eq!(client.transport().requests()[0].header("Authorization"), None);
    }

    #[test]
    fn no_content_is_none_even_with_garbage_body() {
        let client = client(vec![Ok(HttpResponse::new(204, "not json"))]);
        let out: Option<Counts> = block_on(client.fetch("x/", Some("t"))).expect("fetch");
        assert!(out.is_none());
    }

    #[test]
    fn server_error_carries_body_text() {
        let client = client(vec![Ok(HttpResponse::new(500, "boom"))]);
        let err = block_on(client.fetch::<Counts>("x/", Some("t"))).expect_err("should fail");
        assert_eq!(err.status(), Some(500));
        assert!(err.to_string().contains("boom"));
    }

    #[test]
    fn empty_error_body_gets_generic_message() {
        let client = client(vec![Ok(HttpResponse::new(403, "  "))]);
        let err = block_on(client.fetch::<Counts>("x/", Some("t"))).expect_err("should fail");
        assert_eq!(err.to_string(), "request failed with status 403");
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let client = client(vec![Ok(HttpResponse::new(200, "{guards:"))]);
        let err = block_on(client.fetch::<Counts>("x/", Some("t"))).expect_err("should fail");
        assert!(matches!(err, FetchError::Parse(_)));
    }

    #[test]
    fn network_failures_propagate() {
        let client = client(vec![Err(FetchError::Network("connection refused".into()))]);
        let err = block_on(client.fetch::<Counts>("x/", Some("t"))).expect_err("should fail");
        assert!(matches!(err, FetchError::Network(_)));
    }

    #[test]
    fn request_encodes_body() {
        let client = client(vec![Ok(HttpResponse::new(201, r#"{"guards":1}"#))]);
        let body = serde_json::json!({"name": "North gate"});
        let _: Option<Counts> =
            block_on(client.request(Method::Post, "sites/", Some("t"), Some(&body))).expect("post");
        let sent = client.transport().requests();
        assert_eq!(sent[0].method, Method::Post);
        assert_eq!(sent[0].body.as_deref(), Some(r#"{"name":"North gate"}"#));
    }
}
