//! Typed client for the ticketing backend's REST API.
//!
//! Endpoint methods are grouped by domain in the submodules; this module holds the request
//! pipeline they share: URL building, bearer authentication, status interpretation and
//! JSON decoding.
//!
//! # Status handling
//! - 2xx: the body is decoded into the expected type
//! - 401 on an authenticated request: the stored session is cleared and
//!   [`ApiError::Unauthorized`] is returned so the UI can send the user to `/login`
//! - any other status: [`ApiError::RequestFailed`] carrying a message derived from the body
//!   by [`error_message`]

mod auth;
mod billing;
mod hotel;
mod privacy;
mod ticket;
mod user;

use dioxus_logger::tracing;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    error::{ApiError, Error},
    model::{api::ErrorDto, ticket::ImageUpload},
    service::{
        session::AuthSession,
        storage::SessionStorage,
        transport::{ApiRequest, ApiResponse, HttpTransport, Method, MultipartPart, RequestBody},
    },
};

/// Whether a request carries the session token.
///
/// Public endpoints (login, registration, guest ticket reporting) never attach a token and a
/// 401 from them is a regular failure, not an expired session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Authenticated,
}

#[derive(Clone)]
pub struct ApiService<T, S> {
    base_url: String,
    transport: T,
    storage: S,
}

impl<T, S> ApiService<T, S>
where
    T: HttpTransport,
    S: SessionStorage,
{
    pub fn new(base_url: impl Into<String>, transport: T, storage: S) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            base_url,
            transport,
            storage,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request and interpret its status.
    ///
    /// # Returns
    /// - `Ok(ApiResponse)` - The server answered with a 2xx status
    /// - `Err(Error::ApiError)` - Transport failure, 401 or any other non-2xx status
    async fn execute(
        &self,
        method: Method,
        path: &str,
        access: Access,
        body: RequestBody,
    ) -> Result<ApiResponse, Error> {
        let bearer = match access {
            Access::Public => None,
            Access::Authenticated => AuthSession::token(&self.storage),
        };

        let request = ApiRequest {
            method,
            url: self.url(path),
            bearer,
            body,
        };

        tracing::debug!(method = %method, path = %path, "Sending API request");

        let response = self.transport.send(request).await.map_err(|e| {
            tracing::warn!(method = %method, path = %path, "{}", e);
            e
        })?;

        if response.is_success() {
            return Ok(response);
        }

        if response.status == 401 && access == Access::Authenticated {
            tracing::info!(path = %path, "Session rejected by the server; clearing stored session");
            AuthSession::clear(&self.storage);

            return Err(ApiError::Unauthorized.into());
        }

        let message = error_message(response.status, &response.body);
        tracing::warn!(
            method = %method,
            path = %path,
            status = response.status,
            "Request failed: {}",
            message
        );

        Err(ApiError::RequestFailed {
            status: response.status,
            message,
        }
        .into())
    }

    async fn get_json<R: DeserializeOwned>(&self, path: &str, access: Access) -> Result<R, Error> {
        let response = self
            .execute(Method::Get, path, access, RequestBody::Empty)
            .await?;

        decode(path, &response)
    }

    async fn send_json<B, R>(
        &self,
        method: Method,
        path: &str,
        access: Access,
        body: &B,
    ) -> Result<R, Error>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let body = RequestBody::Json(serde_json::to_string(body)?);
        let response = self.execute(method, path, access, body).await?;

        decode(path, &response)
    }

    async fn send_multipart<R: DeserializeOwned>(
        &self,
        path: &str,
        access: Access,
        parts: Vec<MultipartPart>,
    ) -> Result<R, Error> {
        let response = self
            .execute(Method::Post, path, access, RequestBody::Multipart(parts))
            .await?;

        decode(path, &response)
    }

    /// Send an authenticated request without a body and decode its response
    async fn send_bare<R: DeserializeOwned>(&self, method: Method, path: &str) -> Result<R, Error> {
        let response = self
            .execute(method, path, Access::Authenticated, RequestBody::Empty)
            .await?;

        decode(path, &response)
    }

    /// Send a request whose response body is irrelevant
    async fn send_empty(&self, method: Method, path: &str) -> Result<(), Error> {
        self.execute(method, path, Access::Authenticated, RequestBody::Empty)
            .await?;

        Ok(())
    }
}

fn decode<R: DeserializeOwned>(path: &str, response: &ApiResponse) -> Result<R, Error> {
    serde_json::from_str(&response.body).map_err(|e| {
        ApiError::Decode {
            path: path.to_string(),
            reason: e.to_string(),
        }
        .into()
    })
}

/// Derive a human-readable message from a failed response body.
///
/// Tries, in order: a JSON object with `error` or `message`, a JSON string, the trimmed raw
/// text, and finally a generic message naming the status code.
pub fn error_message(status: u16, body: &str) -> String {
    let trimmed = body.trim();

    if trimmed.is_empty() {
        return format!("Request failed with status {}", status);
    }

    if let Ok(error_dto) = serde_json::from_str::<ErrorDto>(trimmed) {
        if !error_dto.error.trim().is_empty() {
            return error_dto.error.trim().to_string();
        }
    }

    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::String(message)) if !message.trim().is_empty() => {
            message.trim().to_string()
        }
        Ok(serde_json::Value::Object(fields)) => ["message", "error"]
            .iter()
            .filter_map(|key| fields.get(*key).and_then(|value| value.as_str()))
            .map(str::trim)
            .find(|message| !message.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| format!("Request failed with status {}", status)),
        Ok(serde_json::Value::Array(_)) => format!("Request failed with status {}", status),
        _ => trimmed.to_string(),
    }
}

/// Percent-encode a single path segment
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, NON_ALPHANUMERIC).to_string()
}

/// Append an encoded query string to a path
pub fn with_query(path: &str, params: &[(&str, String)]) -> String {
    if params.is_empty() {
        return path.to_string();
    }

    let query = params
        .iter()
        .map(|(key, value)| format!("{}={}", key, encode_segment(value)))
        .collect::<Vec<_>>()
        .join("&");

    format!("{}?{}", path, query)
}

/// Turn picked images into multipart parts named `images`
fn image_parts(images: &[ImageUpload]) -> Vec<MultipartPart> {
    images
        .iter()
        .map(|image| MultipartPart {
            name: "images".to_string(),
            file_name: Some(image.file_name.clone()),
            content_type: image.content_type.clone(),
            bytes: image.bytes.clone(),
        })
        .collect()
}
