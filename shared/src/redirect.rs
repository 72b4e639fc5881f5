//! Rewriting of outgoing request URLs that still point at the development API.
//!
//! Builds made for local development carry absolute URLs under
//! [`DEV_ORIGIN`]. When such a build is served from somewhere else, every
//! string URL that starts with that origin is redirected to the replacement
//! prefix, keeping the path, query and fragment exactly as they were.

use std::borrow::Cow;

use url::Url;

use crate::error::Result;

/// Origin the development backend listens on.
pub const DEV_ORIGIN: &str = "http://localhost:8000";

/// What a caller hands to the dispatcher: either a URL string, which may be
/// rewritten, or an already prepared request descriptor, which never is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target<R> {
    Url(String),
    Prepared(R),
}

impl<R> From<String> for Target<R> {
    fn from(url: String) -> Self {
        Target::Url(url)
    }
}

impl<R> From<&str> for Target<R> {
    fn from(url: &str) -> Self {
        Target::Url(url.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedirectRule {
    match_prefix: String,
    replacement: String,
}

impl RedirectRule {
    /// Trailing slashes on the replacement are dropped so that joining it with
    /// the remainder of a URL never doubles the separator.
    pub fn new(match_prefix: impl Into<String>, replacement: impl Into<String>) -> Self {
        let replacement = replacement.into();
        Self {
            match_prefix: match_prefix.into(),
            replacement: replacement.trim_end_matches('/').to_string(),
        }
    }

    /// Redirects the development origin to the origin the page was loaded from.
    pub fn to_origin(page_origin: &str) -> Self {
        Self::new(DEV_ORIGIN, page_origin)
    }

    /// Redirects the development origin to the API base the server advertises.
    /// A relative base such as `/api` is resolved against the page origin.
    pub fn from_server_base(api_base_url: &str, page_origin: &str) -> Result<Self> {
        let replacement = resolve_against_origin(api_base_url, page_origin)?;
        Ok(Self::new(DEV_ORIGIN, replacement))
    }

    pub fn match_prefix(&self) -> &str {
        &self.match_prefix
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// True when `url` starts with the match prefix and the prefix ends on an
    /// origin boundary (`http://localhost:80001` is a different origin).
    pub fn matches(&self, url: &str) -> bool {
        url.strip_prefix(self.match_prefix.as_str())
            .map(is_origin_boundary)
            .unwrap_or(false)
    }

    pub fn rewrite<'a>(&self, url: &'a str) -> Cow<'a, str> {
        // Already redirected; only possible when the replacement lives under the prefix.
        if url
            .strip_prefix(self.replacement.as_str())
            .map(is_origin_boundary)
            .unwrap_or(false)
        {
            return Cow::Borrowed(url);
        }

        if !self.matches(url) {
            return Cow::Borrowed(url);
        }

        Cow::Owned(format!("{}{}", self.replacement, &url[self.match_prefix.len()..]))
    }

    /// Rewrites URL targets; prepared requests pass through untouched.
    pub fn apply<R>(&self, target: Target<R>) -> Target<R> {
        match target {
            Target::Url(url) => {
                let rewritten = match self.rewrite(&url) {
                    Cow::Owned(rewritten) => Some(rewritten),
                    Cow::Borrowed(_) => None,
                };
                Target::Url(rewritten.unwrap_or(url))
            }
            prepared => prepared,
        }
    }
}

fn is_origin_boundary(rest: &str) -> bool {
    rest.is_empty() || rest.starts_with(['/', '?', '#'])
}

/// Resolves `base` against `origin`, returning it without a trailing slash.
/// Absolute bases are used as they are, whatever the origin.
pub fn resolve_against_origin(base: &str, origin: &str) -> Result<String> {
    let resolved = match Url::parse(base) {
        Ok(absolute) => absolute,
        Err(url::ParseError::RelativeUrlWithoutBase) => Url::parse(origin)?.join(base)?,
        Err(e) => return Err(e.into()),
    };
    Ok(resolved.as_str().trim_end_matches('/').to_string())
}
