use bingo_shared::{ApiConfigDto, RedirectRule};
use gloo_net::http::Request;
use log::{error, info, warn};

use crate::api::client::ApiClient;
use crate::api::error::ApiError;
use crate::api::utils::read_json;
use crate::config::{Config, API_CONFIG_PATH};

/// Get the runtime API configuration from the serving origin
pub async fn fetch_api_config() -> Result<ApiConfigDto, ApiError> {
    let response = Request::get(API_CONFIG_PATH)
        .send()
        .await
        .map_err(ApiError::transport)?;

    read_json(response).await
}

/// Builds the client from the build configuration and the server's answer.
///
/// When the server configuration could not be loaded, or its base URL does
/// not resolve, the client is built without a redirect and URLs go out as
/// callers wrote them.
pub fn configure(
    config: Config,
    server: Result<ApiConfigDto, ApiError>,
    page_origin: &str,
) -> ApiClient {
    let server = match server {
        Ok(server) => server,
        Err(e) => {
            error!("Failed to load API configuration: {}", e);
            return ApiClient::new(config);
        }
    };

    if let Some(environment) = server.environment {
        if environment != config.environment {
            warn!(
                "Server reports a {} API but this build targets {}",
                environment, config.environment
            );
        }
    }

    let rule = match RedirectRule::from_server_base(&server.api_base_url, page_origin) {
        Ok(rule) => rule,
        Err(e) => {
            warn!("Ignoring API configuration with base {}: {}", server.api_base_url, e);
            return ApiClient::new(config);
        }
    };

    let config = match config.clone().with_server_config(&server, page_origin) {
        Ok(config) => config,
        Err(e) => {
            warn!("Ignoring media base from API configuration: {}", e);
            config
        }
    };

    info!(
        "API requests to {} redirect to {}",
        rule.match_prefix(),
        rule.replacement()
    );
    ApiClient::new(config).with_redirect(rule)
}

/// Fetches `/api-config/` and builds the client every view will use.
pub async fn build_client(config: Config, page_origin: Option<&str>) -> ApiClient {
    match page_origin {
        Some(origin) => configure(config, fetch_api_config().await, origin),
        None => {
            warn!("Page origin unavailable; API requests will not be redirected");
            ApiClient::new(config)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bingo_shared::{Environment, Target};
    use pretty_assertions::assert_eq;

    fn dev_config() -> Config {
        Config::for_environment(Environment::Development)
    }

    fn server(api_base_url: &str) -> ApiConfigDto {
        ApiConfigDto {
            api_base_url: api_base_url.to_string(),
            media_base_url: None,
            environment: None,
        }
    }

    #[test]
    fn server_base_becomes_the_replacement() {
        let client = configure(
            dev_config(),
            Ok(server("https://example.org/api")),
            "https://bingo.example",
        );
        let target: Target<()> = "http://localhost:8000/tasks/?x=1#y".into();
        assert_eq!(
            client.resolve(target),
            Target::Url("https://example.org/api/tasks/?x=1#y".to_string())
        );
    }

    #[test]
    fn relative_server_base_uses_page_origin() {
        let client = configure(dev_config(), Ok(server("/api")), "https://bingo.example");
        assert_eq!(client.url("/tasks/"), "https://bingo.example/api/tasks/");
    }

    #[test]
    fn failed_fetch_installs_no_redirect() {
        let client = configure(
            dev_config(),
            Err(ApiError::Transport("connection refused".to_string())),
            "https://bingo.example",
        );
        assert_eq!(client.redirect(), None);
        assert_eq!(client.url("/tasks/"), "http://localhost:8000/tasks/");
    }

    #[test]
    fn unresolvable_base_installs_no_redirect() {
        let client = configure(dev_config(), Ok(server("/api")), "null");
        assert_eq!(client.redirect(), None);
    }

    #[test]
    fn environment_mismatch_still_redirects() {
        let mut dto = server("https://example.org/api");
        dto.environment = Some(Environment::Production);
        let client = configure(dev_config(), Ok(dto), "https://bingo.example");
        assert_eq!(client.config().environment, Environment::Development);
        assert_eq!(client.url("/tasks/"), "https://example.org/api/tasks/");
    }

    #[test]
    fn server_media_base_is_applied() {
        let mut dto = server("/api");
        dto.media_base_url = Some("/media/".to_string());
        let client = configure(dev_config(), Ok(dto), "https://bingo.example");
        assert_eq!(client.config().media_url, "https://bingo.example/media");
    }
}
