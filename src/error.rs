mod error_kind;

pub use self::error_kind::ErrorKind;
use actix_web::{body::BoxBody, http::StatusCode, HttpResponse, ResponseError};
use anyhow::anyhow;
use serde_json::json;
use std::fmt::{Debug, Display, Formatter};

/// Application-specific error that knows the HTTP response it should be rendered as.
pub struct Error {
    pub root_cause: anyhow::Error,
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a client-caused error (HTTP 400) with the specified message.
    pub fn client<M: Display + Debug + Send + Sync + 'static>(message: M) -> Self {
        Self {
            root_cause: anyhow!(message),
            kind: ErrorKind::ClientError,
        }
    }

    /// Creates a client-caused error (HTTP 400) preserving the underlying root cause.
    pub fn client_with_root_cause(root_cause: anyhow::Error) -> Self {
        Self {
            root_cause,
            kind: ErrorKind::ClientError,
        }
    }

    /// Creates an error for a request that used an HTTP method the endpoint doesn't support
    /// (HTTP 405).
    pub fn method_not_allowed() -> Self {
        Self {
            root_cause: anyhow!("Method not allowed"),
            kind: ErrorKind::MethodNotAllowed,
        }
    }

    /// Creates an error carrying a task store rejection (HTTP 500). The store message is passed
    /// through to the caller as-is for diagnosability.
    pub fn store(root_cause: anyhow::Error) -> Self {
        Self {
            root_cause,
            kind: ErrorKind::StoreError,
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self.kind {
            ErrorKind::ClientError => StatusCode::BAD_REQUEST,
            ErrorKind::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ErrorKind::StoreError | ErrorKind::Unknown => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        let message = match self.kind {
            // Unknown errors may carry arbitrary internals, the message is always generic.
            ErrorKind::Unknown => "Internal server error".to_string(),
            _ => self.root_cause.to_string(),
        };
        HttpResponse::build(self.status_code()).json(json!({ "error": message }))
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.root_cause)
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.root_cause)
    }
}

impl std::error::Error for Error {}

impl From<anyhow::Error> for Error {
    fn from(root_cause: anyhow::Error) -> Self {
        match root_cause.downcast::<Error>() {
            Ok(error) => error,
            Err(root_cause) => Self {
                root_cause,
                kind: ErrorKind::Unknown,
            },
        }
    }
}
