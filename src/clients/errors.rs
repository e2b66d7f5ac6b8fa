//! Error types and response classification for HTTP clients.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use thiserror::Error;

/// Message carried by [`ApiError::Unexpected`].
///
/// Non-401 failures that lack a well-formed error envelope all surface
/// this fixed message, so callers never depend on transport details.
pub const UNEXPECTED_MESSAGE: &str =
    "An unexpected error happened, please contact Zoop support";

/// A single error detail extracted from the Zoop error envelope.
///
/// The envelope shape is `{"error": {"status_code": ..., "category": ...,
/// "message": ...}}`. Zoop serializes `status_code` sometimes as a number
/// and sometimes as a string, so deserialization accepts both.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ErrorDetail {
    /// The error code, normalised to a string.
    #[serde(rename = "status_code", deserialize_with = "string_or_number")]
    pub code: String,
    /// Machine-readable error category, e.g. `resource.id`.
    #[serde(default)]
    pub category: String,
    /// Human-readable description of what went wrong.
    #[serde(default)]
    pub message: String,
}

impl std::fmt::Display for ErrorDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.code, self.category, self.message)
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Number(i64),
    }

    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s,
        StringOrNumber::Number(n) => n.to_string(),
    })
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

/// Errors that can occur when talking to the Zoop API.
///
/// Every response is classified into exactly one of three categories:
/// authentication failures, validation failures carrying a structured
/// detail, and everything else.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The API rejected the credentials (HTTP 401).
    #[error("the server returned HTTP 401, check the configured API key")]
    Unauthorized,

    /// A 4xx response carrying a well-formed error envelope.
    #[error("validation failed with HTTP {status}: {error}")]
    Validation {
        /// The HTTP status code of the response.
        status: u16,
        /// The decoded error detail.
        error: ErrorDetail,
    },

    /// Any other failure: 5xx responses, malformed bodies, transport errors.
    #[error("{UNEXPECTED_MESSAGE}")]
    Unexpected {
        /// The underlying cause, when one exists.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ApiError {
    /// Wraps a lower-level error as [`ApiError::Unexpected`].
    pub fn unexpected(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unexpected {
            source: Some(Box::new(source)),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::unexpected(err)
    }
}

/// The request could not be constructed.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InvalidRequestError {
    /// The request path was empty.
    #[error("request path cannot be empty")]
    EmptyPath,
}

impl From<InvalidRequestError> for ApiError {
    fn from(err: InvalidRequestError) -> Self {
        Self::unexpected(err)
    }
}

/// Classifies an HTTP response into a decoded body or an [`ApiError`].
///
/// - 2xx: the body is decoded as JSON (an empty body decodes to `{}`);
///   a body that is not valid JSON is an [`ApiError::Unexpected`].
/// - 401: [`ApiError::Unauthorized`], regardless of body.
/// - Other 4xx: the body is decoded as an error envelope and surfaced as
///   [`ApiError::Validation`]; a malformed envelope degrades to
///   [`ApiError::Unexpected`].
/// - Everything else: [`ApiError::Unexpected`].
///
/// # Errors
///
/// Returns an [`ApiError`] for any non-2xx status or undecodable body.
pub fn classify(status: u16, body: &str) -> Result<Value, ApiError> {
    match status {
        200..=299 => {
            if body.trim().is_empty() {
                return Ok(Value::Object(serde_json::Map::new()));
            }
            serde_json::from_str(body).map_err(ApiError::unexpected)
        }
        401 => Err(ApiError::Unauthorized),
        400..=499 => match serde_json::from_str::<ErrorEnvelope>(body) {
            Ok(envelope) => Err(ApiError::Validation {
                status,
                error: envelope.error,
            }),
            Err(err) => Err(ApiError::unexpected(err)),
        },
        _ => Err(ApiError::Unexpected { source: None }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_success_decodes_body() {
        let value = classify(200, r#"{"id":"buy_1"}"#).unwrap();
        assert_eq!(value["id"], "buy_1");
    }

    #[test]
    fn test_classify_success_empty_body_yields_empty_object() {
        let value = classify(204, "").unwrap();
        assert_eq!(value, Value::Object(serde_json::Map::new()));
    }

    #[test]
    fn test_classify_success_invalid_json_is_unexpected() {
        let err = classify(200, "<html>oops</html>").unwrap_err();
        assert!(matches!(err, ApiError::Unexpected { source: Some(_) }));
    }

    #[test]
    fn test_classify_401_is_unauthorized() {
        let err = classify(401, r#"{"error":{"status_code":401}}"#).unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized));
    }

    #[test]
    fn test_classify_401_ignores_body_entirely() {
        let err = classify(401, "").unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized));

        let err = classify(401, "<html>denied</html>").unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized));
    }

    #[test]
    fn test_classify_4xx_envelope_is_validation() {
        let body = r#"{"error":{"status_code":404,"category":"resource.id","message":"not found"}}"#;
        let err = classify(404, body).unwrap_err();
        match err {
            ApiError::Validation { status, error } => {
                assert_eq!(status, 404);
                assert_eq!(error.code, "404");
                assert_eq!(error.category, "resource.id");
                assert_eq!(error.message, "not found");
            }
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_accepts_string_status_code() {
        let body = r#"{"error":{"status_code":"422","category":"invalid_parameter","message":"bad"}}"#;
        let err = classify(422, body).unwrap_err();
        match err {
            ApiError::Validation { error, .. } => assert_eq!(error.code, "422"),
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_malformed_envelope_is_unexpected() {
        let err = classify(400, "not json at all").unwrap_err();
        assert!(matches!(err, ApiError::Unexpected { source: Some(_) }));
    }

    #[test]
    fn test_classify_5xx_is_unexpected_with_fixed_message() {
        let err = classify(500, "internal error").unwrap_err();
        assert!(matches!(err, ApiError::Unexpected { source: None }));
        assert_eq!(err.to_string(), UNEXPECTED_MESSAGE);
    }

    #[test]
    fn test_error_detail_display() {
        let detail = ErrorDetail {
            code: "404".to_string(),
            category: "resource.id".to_string(),
            message: "not found".to_string(),
        };
        assert_eq!(detail.to_string(), "[404] resource.id: not found");
    }
}
