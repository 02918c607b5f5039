//! Error types for the Salt Edge client
//!
//! Every failure surfaces to the immediate caller. Nothing here is retried
//! or swallowed.

use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// Which optional secret an operation needed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretScope {
    Customer,
    Connection,
}

impl fmt::Display for SecretScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SecretScope::Customer => write!(f, "customer"),
            SecretScope::Connection => write!(f, "connection"),
        }
    }
}

/// Errors returned by the client
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Application credentials could not be resolved at construction time
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A customer- or connection-scoped call was made without the secret
    #[error("please provide {0} secret")]
    MissingCredential(SecretScope),

    /// The identifier field named by the operation was absent from its parameters
    #[error("identifier field `{0}` is missing from request parameters")]
    MissingIdentifier(String),

    /// The API answered with status >= 400 and a well-formed error body
    #[error(transparent)]
    Remote(#[from] RemoteApiError),

    /// The API answered with status >= 400 but the body is not an error record
    #[error("unexpected response (HTTP {status}): {body}")]
    UnexpectedResponse { status: u16, body: String },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl Error {
    /// The remote error record, if this is a remote failure
    pub fn remote(&self) -> Option<&RemoteApiError> {
        match self {
            Error::Remote(e) => Some(e),
            _ => None,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error record reported by the Salt Edge API
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteApiError {
    pub error_class: String,
    pub message: String,
    pub documentation_url: String,
    pub request_id: String,
    /// The request payload echoed back by the API
    pub request: Value,
    pub status: u16,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: ErrorDetails,
    #[serde(default)]
    request: Value,
}

#[derive(Deserialize)]
struct ErrorDetails {
    class: String,
    message: String,
    #[serde(default)]
    documentation_url: String,
    #[serde(default)]
    request_id: String,
}

impl RemoteApiError {
    /// Decode an error-shaped response body.
    ///
    /// Returns `None` when the body does not carry an `error` object with at
    /// least `class` and `message`.
    pub fn from_body(body: &str, status: u16) -> Option<Self> {
        let parsed: ErrorBody = serde_json::from_str(body).ok()?;
        Some(Self {
            error_class: parsed.error.class,
            message: parsed.error.message,
            documentation_url: parsed.error.documentation_url,
            request_id: parsed.error.request_id,
            request: parsed.request,
            status,
        })
    }

    /// Check the remote error class, e.g. `"CustomerNotFound"`
    pub fn is_class(&self, class: &str) -> bool {
        self.error_class == class
    }
}

impl fmt::Display for RemoteApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} (HTTP {})", self.error_class, self.message, self.status)
    }
}

impl std::error::Error for RemoteApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_body_reads_all_fields() {
        let body = json!({
            "error": {
                "class": "ProviderNotFound",
                "message": "Provider with code 'x' was not found",
                "documentation_url": "https://docs.saltedge.com/account_information/v5/#errors",
                "request_id": "r-42"
            },
            "request": {"provider_code": "x"}
        })
        .to_string();

        let err = RemoteApiError::from_body(&body, 404).unwrap();
        assert_eq!(err.error_class, "ProviderNotFound");
        assert_eq!(err.request_id, "r-42");
        assert_eq!(err.request["provider_code"], "x");
        assert_eq!(err.status, 404);
        assert!(err.is_class("ProviderNotFound"));
        assert_eq!(
            err.to_string(),
            "ProviderNotFound: Provider with code 'x' was not found (HTTP 404)"
        );
    }

    #[test]
    fn test_from_body_rejects_other_shapes() {
        assert!(RemoteApiError::from_body("<html>bad gateway</html>", 502).is_none());
        assert!(RemoteApiError::from_body(r#"{"data": {}}"#, 400).is_none());
    }

    #[test]
    fn test_missing_credential_message() {
        let err = Error::MissingCredential(SecretScope::Customer);
        assert_eq!(err.to_string(), "please provide customer secret");
    }
}
