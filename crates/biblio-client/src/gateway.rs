//! Single entry point for every call to the library backend.
//!
//! [`Gateway::request`] turns an endpoint, an optional bearer token and
//! request options into either the parsed JSON body or an [`ApiError`].
//! The domain modules (`auth`, `books`, `users`, `loans`) only fix the
//! path, the verb and the payload types and delegate here.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::ApiError;

pub const DEFAULT_BASE_ORIGIN: &str = "http://localhost:8080";

#[derive(Clone, Debug)]
pub struct GatewayConfig {
    pub base_origin: String,
    /// Transport timeout; `None` leaves it to the underlying client.
    pub timeout: Option<Duration>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            base_origin: DEFAULT_BASE_ORIGIN.into(),
            timeout: None,
        }
    }
}

#[derive(Clone, Debug)]
pub enum RequestBody {
    /// Serialized JSON text.
    Json(String),
    /// Form fields; the transport sets its own content type.
    Form(Vec<(String, String)>),
}

#[derive(Clone, Debug)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: HeaderMap,
    pub body: Option<RequestBody>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            headers: HeaderMap::new(),
            body: None,
        }
    }
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn put() -> Self {
        Self::method(Method::PUT)
    }

    pub fn delete() -> Self {
        Self::method(Method::DELETE)
    }

    pub fn method(method: Method) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    pub fn post_json<T: Serialize>(payload: &T) -> Result<Self, ApiError> {
        Self::method(Method::POST).json(payload)
    }

    pub fn put_json<T: Serialize>(payload: &T) -> Result<Self, ApiError> {
        Self::method(Method::PUT).json(payload)
    }

    pub fn json<T: Serialize>(mut self, payload: &T) -> Result<Self, ApiError> {
        let text = serde_json::to_string(payload).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.body = Some(RequestBody::Json(text));
        Ok(self)
    }

    pub fn form(mut self, fields: Vec<(String, String)>) -> Self {
        self.body = Some(RequestBody::Form(fields));
        self
    }

    pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// Stateless HTTP client bound to one backend origin.
///
/// Cloning is cheap and shares the connection pool; concurrent calls do not
/// interfere with each other.
#[derive(Clone, Debug)]
pub struct Gateway {
    client: reqwest::Client,
    baseOrigin: String,
}

impl Gateway {
    pub fn new(config: GatewayConfig) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ApiError::Transport(format!("failed to build http client: {e}")))?;

        Ok(Self::with_client(client, config.base_origin))
    }

    pub fn with_client(client: reqwest::Client, baseOrigin: impl Into<String>) -> Self {
        Self {
            client,
            baseOrigin: baseOrigin.into(),
        }
    }

    pub fn base_origin(&self) -> &str {
        &self.baseOrigin
    }

    /// Performs one exchange with the backend.
    ///
    /// Returns `Ok(None)` for `204 No Content` and for empty 2xx bodies.
    pub async fn request(
        &self,
        endpoint: &str,
        token: Option<&str>,
        options: RequestOptions,
    ) -> Result<Option<Value>, ApiError> {
        let url = resolve_url(&self.baseOrigin, endpoint);
        let RequestOptions {
            method,
            mut headers,
            body,
        } = options;

        // The token replaces any Authorization the caller put in the options.
        if token.is_some() {
            headers.remove(AUTHORIZATION);
        }

        debug!("{method} {url}");

        let hasContentType = headers.contains_key(CONTENT_TYPE);
        let mut builder = self.client.request(method.clone(), &url).headers(headers);

        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }

        builder = match body {
            Some(RequestBody::Form(fields)) => builder.form(&fields),
            other => {
                if !hasContentType {
                    builder = builder.header(CONTENT_TYPE, "application/json");
                }
                match other {
                    Some(RequestBody::Json(text)) => builder.body(text),
                    _ => builder,
                }
            }
        };

        let response = builder.send().await.map_err(|e| {
            warn!("{method} {url} failed without response: {e}");
            ApiError::Transport(e.to_string())
        })?;

        let status = response.status().as_u16();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let result = interpret_response(status, &bytes);
        if let Err(ApiError::Api { status, message }) = &result {
            warn!("{method} {url} answered {status}: {message}");
        }
        result
    }

    /// Like [`Gateway::request`], decoding the body into `T`. An empty body is
    /// a decode failure.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        token: Option<&str>,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        match self.request(endpoint, token, options).await? {
            Some(value) => serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string())),
            None => Err(ApiError::Decode(format!("empty response from {endpoint}"))),
        }
    }

    /// Like [`Gateway::request`], discarding any body.
    pub async fn send(
        &self,
        endpoint: &str,
        token: Option<&str>,
        options: RequestOptions,
    ) -> Result<(), ApiError> {
        self.request(endpoint, token, options).await.map(|_| ())
    }
}

impl Default for Gateway {
    fn default() -> Self {
        Self::with_client(reqwest::Client::new(), DEFAULT_BASE_ORIGIN)
    }
}

/// Absolute URLs are used verbatim; anything else is rooted at `baseOrigin`.
pub fn resolve_url(baseOrigin: &str, endpoint: &str) -> String {
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        return endpoint.to_string();
    }
    let base = baseOrigin.trim_end_matches('/');
    if endpoint.starts_with('/') {
        format!("{base}{endpoint}")
    } else {
        format!("{base}/{endpoint}")
    }
}

/// Maps a status code and raw body to the gateway result.
pub fn interpret_response(status: u16, body: &[u8]) -> Result<Option<Value>, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::Api {
            status,
            message: failure_message(status, body),
        });
    }

    if status == 204 || body.is_empty() {
        return Ok(None);
    }

    serde_json::from_slice(body)
        .map(Some)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

fn failure_message(status: u16, body: &[u8]) -> String {
    serde_json::from_slice::<Value>(body)
        .ok()
        .as_ref()
        .and_then(|v| v.get("message"))
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("Erreur API: {status}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_endpoints_are_rooted_at_the_origin() {
        assert_eq!(
            resolve_url("http://localhost:8080", "/api/books"),
            "http://localhost:8080/api/books"
        );
        assert_eq!(
            resolve_url("http://localhost:8080/", "api/books"),
            "http://localhost:8080/api/books"
        );
        assert_eq!(
            resolve_url("http://localhost:8080", "https://other.example/api/x"),
            "https://other.example/api/x"
        );
    }

    #[test]
    fn no_content_is_no_value() {
        assert_eq!(interpret_response(204, b""), Ok(None));
        assert_eq!(interpret_response(200, b""), Ok(None));
    }

    #[test]
    fn success_body_is_parsed() {
        let value = interpret_response(201, br#"{"id":4}"#).unwrap().unwrap();
        assert_eq!(value["id"], 4);
    }

    #[test]
    fn success_body_that_is_not_json_is_a_decode_failure() {
        assert!(matches!(
            interpret_response(200, b"<html>"),
            Err(ApiError::Decode(_))
        ));
    }

    #[test]
    fn failure_uses_backend_message() {
        let err = interpret_response(404, br#"{"message": "livre introuvable"}"#).unwrap_err();
        assert_eq!(
            err,
            ApiError::Api {
                status: 404,
                message: "livre introuvable".into()
            }
        );
    }

    #[test]
    fn failure_without_json_body_uses_generic_message() {
        let err = interpret_response(500, b"Internal Server Error").unwrap_err();
        assert_eq!(err.to_string(), "Erreur API: 500");
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn failure_with_json_but_no_message_uses_generic_message() {
        let err = interpret_response(400, br#"{"titre":"obligatoire"}"#).unwrap_err();
        assert_eq!(err.to_string(), "Erreur API: 400");
    }

    #[test]
    fn json_options_carry_serialized_body() {
        let options = RequestOptions::post_json(&serde_json::json!({"a": 1})).unwrap();
        assert_eq!(options.method, Method::POST);
        match options.body {
            Some(RequestBody::Json(text)) => assert_eq!(text, r#"{"a":1}"#),
            other => panic!("unexpected body {other:?}"),
        }
    }
}
