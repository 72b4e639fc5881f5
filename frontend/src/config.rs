use bingo_shared::redirect::resolve_against_origin;
use bingo_shared::{ApiConfigDto, Environment, SharedError};
use log::warn;

pub const PRODUCTION_API_BASE_URL: &str = "https://caffeinated-divas.fly.dev";
pub const PRODUCTION_MEDIA_URL: &str = "https://caffeinated-divas.fly.dev/media";
pub const DEVELOPMENT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEVELOPMENT_MEDIA_URL: &str = "http://localhost:8000/media";

/// Image shown wherever a picture is missing
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/150";

/// Same-origin endpoint that describes where the API really lives
pub const API_CONFIG_PATH: &str = "/api-config/";

/// Application configuration, built once at startup and passed down.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub environment: Environment,
    pub api_base_url: String,
    pub media_url: String,
    pub placeholder_image: String,
}

impl Config {
    pub fn for_environment(environment: Environment) -> Self {
        let (api_base_url, media_url) = match environment {
            Environment::Production => (PRODUCTION_API_BASE_URL, PRODUCTION_MEDIA_URL),
            Environment::Development => (DEVELOPMENT_API_BASE_URL, DEVELOPMENT_MEDIA_URL),
        };

        Self {
            environment,
            api_base_url: api_base_url.to_string(),
            media_url: media_url.to_string(),
            placeholder_image: PLACEHOLDER_IMAGE.to_string(),
        }
    }

    /// Configuration for the environment this binary was built for.
    pub fn from_build() -> Self {
        Self::for_environment(build_environment(option_env!("APP_ENV")))
    }

    /// Takes the media location advertised by the server, if any.
    pub fn with_server_config(
        mut self,
        server: &ApiConfigDto,
        page_origin: &str,
    ) -> Result<Self, SharedError> {
        if let Some(media_base_url) = &server.media_base_url {
            self.media_url = resolve_against_origin(media_base_url, page_origin)?;
        }
        Ok(self)
    }

    /// `<api_base_url>/<path>` with exactly one slash at the join.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Absolute URL for a stored media path, or the placeholder when there is none.
    pub fn media_url_for(&self, path: Option<&str>) -> String {
        let path = match path.map(str::trim) {
            Some(path) if !path.is_empty() => path,
            _ => return self.placeholder_image.clone(),
        };

        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }

        let relative = path.trim_start_matches('/');
        let relative = relative.strip_prefix("media/").unwrap_or(relative);
        format!("{}/{}", self.media_url.trim_end_matches('/'), relative)
    }
}

/// Picks the environment from the `APP_ENV` value baked in at compile time;
/// without one, debug builds are development and release builds production.
pub fn build_environment(app_env: Option<&str>) -> Environment {
    let fallback = if cfg!(debug_assertions) {
        Environment::Development
    } else {
        Environment::Production
    };

    match app_env {
        Some(value) => value.parse().unwrap_or_else(|e| {
            warn!("{}; using {}", e, fallback);
            fallback
        }),
        None => fallback,
    }
}

/// Scheme, host and port of the page, when running in a browser.
pub fn page_origin() -> Option<String> {
    gloo_utils::window().location().origin().ok()
}
