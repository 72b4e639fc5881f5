use serde::{Deserialize, Serialize};

/// Common error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message; the framework's own errors use `detail`
    #[serde(alias = "detail")]
    pub error: String,
}
