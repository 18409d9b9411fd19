//! Request body extractor for customer endpoints.

use axum::{
    Json,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{HeaderMap, header},
};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON request body that falls back to `T::default()` when there is nothing
/// to decode.
///
/// A request without a JSON content type, or with an empty body, yields the
/// default value so that field presence checks report the missing fields.
/// Only a JSON body that fails to decode is rejected, with the decoder
/// message as a 400.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !has_json_content_type(req.headers()) {
            return Ok(Self(T::default()));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::bad_request(rejection.body_text()))?;

        if bytes.is_empty() {
            return Ok(Self(T::default()));
        }

        let Json(value) = Json::<T>::from_bytes(&bytes)?;
        Ok(Self(value))
    }
}

/// `application/json` or any `application/*+json`, parameters ignored.
fn has_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|mime| mime.trim().to_ascii_lowercase())
        .is_some_and(|mime| {
            mime == "application/json"
                || (mime.starts_with("application/") && mime.ends_with("+json"))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::StatusCode};
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    struct Payload {
        name: Option<String>,
    }

    async fn extract(content_type: Option<&str>, body: &'static str) -> Result<Payload, AppError> {
        let mut builder = Request::builder().method("POST").uri("/customers");
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        let req = builder.body(Body::from(body)).unwrap();

        JsonBody::<Payload>::from_request(req, &())
            .await
            .map(|JsonBody(payload)| payload)
    }

    #[tokio::test]
    async fn test_json_body_decoded() {
        let payload = extract(Some("application/json"), r#"{"name": "Ada"}"#)
            .await
            .unwrap();

        assert_eq!(payload.name.as_deref(), Some("Ada"));
    }

    #[tokio::test]
    async fn test_json_content_type_with_parameters() {
        let payload = extract(Some("Application/JSON; charset=utf-8"), r#"{"name": "Ada"}"#)
            .await
            .unwrap();
        assert_eq!(payload.name.as_deref(), Some("Ada"));

        let payload = extract(Some("application/merge-patch+json"), r#"{"name": "Ada"}"#)
            .await
            .unwrap();
        assert_eq!(payload.name.as_deref(), Some("Ada"));
    }

    #[tokio::test]
    async fn test_missing_body_defaults() {
        assert_eq!(extract(None, "").await.unwrap(), Payload::default());
        assert_eq!(
            extract(Some("application/json"), "").await.unwrap(),
            Payload::default()
        );
    }

    #[tokio::test]
    async fn test_non_json_content_type_defaults() {
        assert_eq!(
            extract(Some("text/plain"), "name=Ada").await.unwrap(),
            Payload::default()
        );
        assert_eq!(
            extract(Some("application/x-www-form-urlencoded"), "name=Ada")
                .await
                .unwrap(),
            Payload::default()
        );
    }

    #[tokio::test]
    async fn test_malformed_json_rejected() {
        let err = extract(Some("application/json"), "{not json")
            .await
            .unwrap_err();

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_wrong_field_type_rejected() {
        let err = extract(Some("application/json"), r#"{"name": 42}"#)
            .await
            .unwrap_err();

        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }
}
