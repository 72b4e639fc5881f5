use gloo_net::http::{RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::api::error::ApiError;
use crate::auth::stored_token;

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Attaches the Authorization header from localStorage
pub fn authorize(req: RequestBuilder) -> RequestBuilder {
    match stored_token() {
        Some(token) => req.header("Authorization", &bearer(&token)),
        // No token stored, continue without authentication
        None => req,
    }
}

/// Decodes a JSON body, turning non-2xx responses into [`ApiError::Status`].
pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::from_status(status, &body));
    }

    response.json::<T>().await.map_err(ApiError::decode)
}
