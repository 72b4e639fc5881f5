use bingo_shared::{LoginRequest, LoginResponse, SharedError};
use log::debug;
use validator::Validate;

use crate::api::client::ApiClient;
use crate::api::error::ApiError;

pub const LOGIN_PATH: &str = "/login/";

pub fn login_request(username: &str, password: &str) -> Result<LoginRequest, ApiError> {
    let request = LoginRequest {
        username: username.trim().to_string(),
        password: password.to_string(),
    };
    request.validate().map_err(SharedError::from)?;
    Ok(request)
}

pub async fn login(client: &ApiClient, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
    let request = login_request(username, password)?;
    debug!("Attempting login for user: {}", request.username);

    let response = client
        .post_json::<_, LoginResponse>(LOGIN_PATH, &request)
        .await?;

    debug!("Login successful for user: {}", request.username);
    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_username_is_rejected_before_sending() {
        let err = login_request("   ", "secret").unwrap_err();
        assert!(matches!(err, ApiError::Shared(SharedError::Validation(_))));
    }

    #[test]
    fn username_is_trimmed() {
        let request = login_request(" taskuser ", "testpass").unwrap();
        assert_eq!(request.username, "taskuser");
        assert_eq!(request.password, "testpass");
    }
}
