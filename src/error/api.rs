use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The backend answered 401; the stored session has already been cleared.
    #[error("Your session has expired, please log in again.")]
    Unauthorized,
    /// Any other non-2xx answer. `message` is derived from the response body.
    #[error("{message}")]
    RequestFailed { status: u16, message: String },
    /// The request never produced a response (network down, CORS, DNS).
    #[error("Failed to send request: {0}")]
    Transport(String),
    /// A 2xx response whose body did not match the expected shape.
    #[error("Failed to parse response from {path}: {reason}")]
    Decode { path: String, reason: String },
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Unauthorized => Some(401),
            Self::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}
