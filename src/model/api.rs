use serde::{Deserialize, Serialize};

/// The response body the backend sends alongside a non-2xx status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDto {
    /// The error message, sent as either `error` or `message`
    #[serde(alias = "message")]
    pub error: String,
}
