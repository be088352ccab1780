//! Lenient JSON body extractor
//!
//! Clients of the item API routinely send no body, a `null` body, or no
//! `Content-Type` at all. Those requests must reach the handler as an empty
//! request object so that validation answers with the usual
//! `{success:false, message}` envelope instead of a plain-text rejection.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header, HeaderMap},
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::RegistryError;

/// JSON request body that falls back to `T::default()`
///
/// - a body without a JSON content type is ignored
/// - an empty body, `null`, or any non-object JSON value becomes the default
/// - malformed JSON or wrongly typed fields are rejected with `InvalidBody`
#[derive(Debug, Clone, Default)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = RegistryError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !is_json_content_type(req.headers()) {
            return Ok(Self(T::default()));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| RegistryError::InvalidBody(e.body_text()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(T::default()));
        }

        let value: Value = serde_json::from_slice(&bytes)
            .map_err(|e| RegistryError::InvalidBody(e.to_string()))?;

        match value {
            Value::Object(_) => serde_json::from_value(value)
                .map(Self)
                .map_err(|e| RegistryError::InvalidBody(e.to_string())),
            _ => Ok(Self(T::default())),
        }
    }
}

fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();
    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}
