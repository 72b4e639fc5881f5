use std::borrow::Cow;

use bingo_shared::{RedirectRule, Target};
use gloo_net::http::{Request, RequestBuilder, Response};
use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::utils::{authorize, read_json};
use crate::config::Config;

/// HTTP client shared by every view.
///
/// Built once at startup and handed down through a context. String targets
/// whose URL starts with the development origin are redirected before they
/// are sent; prepared requests go out exactly as given.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    config: Config,
    redirect: Option<RedirectRule>,
}

impl ApiClient {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            redirect: None,
        }
    }

    /// Sets the redirect rule. A second call replaces the first one.
    pub fn with_redirect(mut self, rule: RedirectRule) -> Self {
        self.redirect = Some(rule);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn redirect(&self) -> Option<&RedirectRule> {
        self.redirect.as_ref()
    }

    /// Absolute endpoint URL before any redirect is applied.
    pub fn endpoint(&self, path: &str) -> String {
        self.config.endpoint(path)
    }

    /// Endpoint URL with the redirect applied, for building prepared requests.
    pub fn url(&self, path: &str) -> String {
        let endpoint = self.endpoint(path);
        let rewritten = match self.redirect.as_ref().map(|rule| rule.rewrite(&endpoint)) {
            Some(Cow::Owned(rewritten)) => Some(rewritten),
            _ => None,
        };
        rewritten.unwrap_or(endpoint)
    }

    pub fn resolve<R>(&self, target: Target<R>) -> Target<R> {
        let Some(rule) = &self.redirect else {
            return target;
        };

        if let Target::Url(url) = &target {
            if let Cow::Owned(rewritten) = rule.rewrite(url) {
                debug!("Redirecting API request from {} to {}", url, rewritten);
            }
        }

        rule.apply(target)
    }

    /// URL targets become authenticated GET requests; prepared ones are kept.
    pub fn build_request(&self, target: Target<Request>) -> Result<Request, ApiError> {
        match self.resolve(target) {
            Target::Url(url) => authorize(Request::get(&url))
                .build()
                .map_err(ApiError::transport),
            Target::Prepared(request) => Ok(request),
        }
    }

    pub async fn send(&self, target: Target<Request>) -> Result<Response, ApiError> {
        let request = self.build_request(target)?;
        request.send().await.map_err(ApiError::transport)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(Target::Url(self.endpoint(path))).await?;
        read_json(response).await
    }

    /// Authenticated POST builder for an endpoint, redirect already applied.
    pub fn post(&self, path: &str) -> RequestBuilder {
        authorize(Request::post(&self.url(path)))
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let request = self.post(path).json(body).map_err(ApiError::transport)?;
        let response = self.send(Target::Prepared(request)).await?;
        read_json(response).await
    }
}
