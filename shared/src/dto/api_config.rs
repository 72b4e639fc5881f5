use serde::{Deserialize, Serialize};

use crate::models::environment::Environment;

/// Runtime configuration served by the backend at `/api-config/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfigDto {
    /// Base of all API calls; may be relative to the page origin (`/api`).
    #[serde(rename = "apiBaseUrl")]
    pub api_base_url: String,
    /// Base of uploaded media; relative like `api_base_url` when present.
    #[serde(rename = "mediaBaseUrl", default, skip_serializing_if = "Option::is_none")]
    pub media_base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<Environment>,
}
