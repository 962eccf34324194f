//! Shared HTTP client for the backend API.
//!
//! All gateways go through one [`ApiClient`]: a single base URL, a shared
//! cookie jar (the backend keeps the session in httpOnly cookies), and
//! the CSRF echo on mutating verbs. The backend sets an `XSRF-TOKEN`
//! cookie; every POST/PUT/DELETE reads it back from the jar and sends it
//! as the `X-XSRF-TOKEN` header.

use std::sync::Arc;

use reqwest::cookie::{CookieStore, Jar};
use reqwest::{Client, Method, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::ApiConfig;
use crate::ports::ApiError;

/// Cookie the backend stores the CSRF token in.
pub const XSRF_COOKIE: &str = "XSRF-TOKEN";

/// Header the backend expects the token echoed back on.
pub const XSRF_HEADER: &str = "X-XSRF-TOKEN";

/// Configured HTTP client: base URL, timeout, cookie jar.
pub struct ApiClient {
    http: Client,
    base_url: String,
    jar: Arc<Jar>,
}

impl ApiClient {
    /// Creates a client from the API configuration.
    pub fn new(config: &ApiConfig) -> Self {
        let jar = Arc::new(Jar::default());
        let http = Client::builder()
            .timeout(config.timeout())
            .cookie_provider(jar.clone())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            jar,
        }
    }

    /// GET that decodes a JSON body.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .http
            .get(self.url(path))
            .send()
            .await
            .map_err(map_transport)?;
        json_body(check_status(response).await?).await
    }

    /// GET where only the status matters (CSRF priming).
    pub async fn get_unit(&self, path: &str) -> Result<(), ApiError> {
        let response = self
            .http
            .get(self.url(path))
            .send()
            .await
            .map_err(map_transport)?;
        check_status(response).await.map(|_| ())
    }

    /// POST that decodes a JSON body.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.mutate(Method::POST, path, Some(body)).await?;
        json_body(response).await
    }

    /// POST where the response body is ignored (login, logout).
    pub async fn post_unit<B>(&self, path: &str, body: &B) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.mutate(Method::POST, path, Some(body)).await.map(|_| ())
    }

    /// PUT that decodes a JSON body.
    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.mutate(Method::PUT, path, Some(body)).await?;
        json_body(response).await
    }

    /// DELETE where the response body is ignored.
    pub async fn delete_unit(&self, path: &str) -> Result<(), ApiError> {
        self.mutate::<()>(Method::DELETE, path, None).await.map(|_| ())
    }

    /// Sends a mutating request with the CSRF header attached.
    async fn mutate<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let mut request = self.http.request(method, self.url(path));
        if let Some(body) = body {
            request = request.json(body);
        }
        if let Some(token) = self.csrf_token() {
            request = request.header(XSRF_HEADER, token);
        }

        let response = request.send().await.map_err(map_transport)?;
        check_status(response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Reads the CSRF token back out of the cookie jar, if primed.
    fn csrf_token(&self) -> Option<String> {
        let url = Url::parse(&self.base_url).ok()?;
        let header = self.jar.cookies(&url)?;
        let cookies = header.to_str().ok()?.to_string();
        cookies
            .split(';')
            .map(str::trim)
            .find_map(|cookie| {
                cookie
                    .strip_prefix(XSRF_COOKIE)
                    .and_then(|rest| rest.strip_prefix('='))
            })
            .map(str::to_string)
    }

    #[cfg(test)]
    fn seed_cookie(&self, cookie: &str) {
        let url = Url::parse(&self.base_url).unwrap();
        self.jar.add_cookie_str(cookie, &url);
    }
}

/// Classifies a non-success status into the error taxonomy.
fn classify(status: StatusCode, body: &str) -> ApiError {
    match status.as_u16() {
        401 => ApiError::Unauthorized {
            message: extract_message(body),
        },
        404 => ApiError::NotFound,
        code => ApiError::api(code, extract_message(body)),
    }
}

/// Pulls the human-readable `message` field out of an error body.
///
/// Nest-style backends answer with `{"message": "..."}` or, for
/// validation failures, `{"message": ["...", "..."]}`.
fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("message")? {
        serde_json::Value::String(message) => Some(message.clone()),
        serde_json::Value::Array(parts) => {
            let parts: Vec<&str> = parts.iter().filter_map(|p| p.as_str()).collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join("; "))
            }
        }
        _ => None,
    }
}

async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(classify(status, &body))
}

async fn json_body<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json()
        .await
        .map_err(|e| ApiError::decode(e.to_string()))
}

fn map_transport(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        ApiError::Timeout
    } else {
        ApiError::network(err.to_string())
    }
}
