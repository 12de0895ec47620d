//! Core HTTP client for the backend REST API.
//!
//! Wraps `reqwest` with the three behaviors every endpoint shares:
//! bearer-token attachment from the [`Session`], a fixed timeout past
//! which a call counts as a transport failure, and mapping of non-2xx
//! responses onto the application error taxonomy. Transport failures
//! stay distinct from server rejections so the console can say "check
//! your connection" instead of a domain message.

use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::multipart::Form;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::session::Session;
use crate::config::{Config, BEARER_TOKEN_PREFIX};
use crate::errors::{AppError, AppResult};

/// HTTP client bound to one backend and one session.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Session,
}

impl ApiClient {
    /// Build a client from configuration. The timeout is fixed for the
    /// lifetime of the client; operations are not cancellable once
    /// issued.
    pub fn new(config: &Config, session: Session) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()
            .map_err(|e| AppError::internal(format!("Building HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Bearer header value, or `Unauthenticated` when no token is held.
    /// Protected calls fail here without touching the network.
    fn bearer(&self) -> AppResult<String> {
        self.session
            .access_token()
            .map(|token| format!("{}{}", BEARER_TOKEN_PREFIX, token))
            .ok_or(AppError::Unauthenticated)
    }

    // -------------------------------------------------------------------------
    // JSON operations (protected unless noted)
    // -------------------------------------------------------------------------

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let request = self
            .http
            .get(self.endpoint(path))
            .header(AUTHORIZATION, self.bearer()?);
        Self::decode(self.send(path, request).await?).await
    }

    pub(crate) async fn get_json_query<T, Q>(&self, path: &str, query: &Q) -> AppResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let request = self
            .http
            .get(self.endpoint(path))
            .header(AUTHORIZATION, self.bearer()?)
            .query(query);
        Self::decode(self.send(path, request).await?).await
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> AppResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self
            .http
            .post(self.endpoint(path))
            .header(AUTHORIZATION, self.bearer()?)
            .json(body);
        Self::decode(self.send(path, request).await?).await
    }

    /// POST without a token, for the authentication endpoints.
    pub(crate) async fn post_public<B, T>(&self, path: &str, body: &B) -> AppResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.http.post(self.endpoint(path)).json(body);
        Self::decode(self.send(path, request).await?).await
    }

    pub(crate) async fn put_json_discard<B>(&self, path: &str, body: &B) -> AppResult<()>
    where
        B: Serialize + ?Sized,
    {
        let request = self
            .http
            .put(self.endpoint(path))
            .header(AUTHORIZATION, self.bearer()?)
            .json(body);
        self.send(path, request).await?;
        Ok(())
    }

    pub(crate) async fn put_discard(&self, path: &str) -> AppResult<()> {
        let request = self
            .http
            .put(self.endpoint(path))
            .header(AUTHORIZATION, self.bearer()?);
        self.send(path, request).await?;
        Ok(())
    }

    pub(crate) async fn delete_discard(&self, path: &str) -> AppResult<()> {
        let request = self
            .http
            .delete(self.endpoint(path))
            .header(AUTHORIZATION, self.bearer()?);
        self.send(path, request).await?;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Binary and multipart operations
    // -------------------------------------------------------------------------

    /// GET a binary blob (generated report, spreadsheet download).
    pub(crate) async fn get_bytes<Q>(
        &self,
        path: &str,
        query: &Q,
        accept: &str,
    ) -> AppResult<Vec<u8>>
    where
        Q: Serialize + ?Sized,
    {
        let request = self
            .http
            .get(self.endpoint(path))
            .header(AUTHORIZATION, self.bearer()?)
            .header(ACCEPT, accept)
            .query(query);
        let response = self.send(path, request).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::internal(format!("Reading response body: {}", e)))?;
        Ok(bytes.to_vec())
    }

    /// POST a multipart form (spreadsheet batch upload).
    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: Form,
    ) -> AppResult<T> {
        let request = self
            .http
            .post(self.endpoint(path))
            .header(AUTHORIZATION, self.bearer()?)
            .multipart(form);
        Self::decode(self.send(path, request).await?).await
    }

    // -------------------------------------------------------------------------
    // Shared plumbing
    // -------------------------------------------------------------------------

    async fn send(&self, path: &str, request: RequestBuilder) -> AppResult<Response> {
        tracing::debug!("Calling backend: {}", path);
        let response = request.send().await.map_err(AppError::Transport)?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::debug!("Backend rejected {} with {}: {}", path, status, body);
        Err(rejection(status, &body))
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> AppResult<T> {
        response
            .json::<T>()
            .await
            .map_err(|e| AppError::internal(format!("Unexpected response body: {}", e)))
    }
}

/// Map a non-2xx response onto the error taxonomy.
fn rejection(status: StatusCode, body: &str) -> AppError {
    match status {
        StatusCode::UNAUTHORIZED => AppError::Unauthenticated,
        StatusCode::FORBIDDEN => AppError::Forbidden,
        StatusCode::NOT_FOUND => AppError::NotFound,
        _ => AppError::server(status.as_u16(), decode_error_message(body)),
    }
}

/// Pull a human-readable message out of a structured error body.
///
/// The backend answers either `{"detail": "..."}` or a per-field map
/// `{"field": ["msg", ...]}`; anything else yields an empty message and
/// the caller's generic fallback.
fn decode_error_message(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return String::new();
    };

    let Some(object) = value.as_object() else {
        return String::new();
    };

    if let Some(detail) = object.get("detail").and_then(|d| d.as_str()) {
        return detail.to_string();
    }

    let mut messages = Vec::new();
    for field_value in object.values() {
        match field_value {
            serde_json::Value::String(s) => messages.push(s.clone()),
            serde_json::Value::Array(items) => {
                messages.extend(items.iter().filter_map(|i| i.as_str().map(String::from)));
            }
            _ => {}
        }
    }
    messages.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_map_onto_taxonomy() {
        assert!(matches!(
            rejection(StatusCode::UNAUTHORIZED, ""),
            AppError::Unauthenticated
        ));
        assert!(matches!(
            rejection(StatusCode::FORBIDDEN, ""),
            AppError::Forbidden
        ));
        assert!(matches!(
            rejection(StatusCode::NOT_FOUND, ""),
            AppError::NotFound
        ));
        assert!(matches!(
            rejection(StatusCode::CONFLICT, "{}"),
            AppError::Server { status: 409, .. }
        ));
    }

    #[test]
    fn detail_message_is_used_verbatim() {
        let message = decode_error_message(r#"{"detail": "Not enough funds."}"#);
        assert_eq!(message, "Not enough funds.");
    }

    #[test]
    fn field_errors_are_flattened() {
        let message =
            decode_error_message(r#"{"name": ["This field is required."], "amount": ["Must be positive."]}"#);
        assert!(message.contains("This field is required."));
        assert!(message.contains("Must be positive."));
    }

    #[test]
    fn unparseable_bodies_yield_empty_message() {
        assert_eq!(decode_error_message("<html>boom</html>"), "");
        assert_eq!(decode_error_message(""), "");
    }
}
