use std::rc::Rc;

use gloo_storage::{LocalStorage, Storage};
use log::{debug, error};
use wasm_bindgen_futures::spawn_local;
use yew::functional::use_reducer_eq;
use yew::prelude::*;

use crate::api::{auth, ApiClient};

/// localStorage key holding the bearer token
pub const TOKEN_KEY: &str = "token";

/// Reads the token as the raw string other login flows write with `setItem`.
pub fn stored_token() -> Option<String> {
    match LocalStorage::raw().get_item(TOKEN_KEY) {
        Ok(raw) => raw.as_deref().and_then(parse_stored_token),
        Err(e) => {
            error!("Failed to read token from local storage: {:?}", e);
            None
        }
    }
}

/// Accepts a raw token or one left JSON-quoted by an older build.
pub fn parse_stored_token(raw: &str) -> Option<String> {
    let raw = raw.trim();
    let token = if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
        serde_json::from_str::<String>(raw).ok()?
    } else {
        raw.to_string()
    };
    Some(token).filter(|token| !token.is_empty() && token != "null")
}

pub fn store_token(token: &str) {
    if let Err(e) = LocalStorage::raw().set_item(TOKEN_KEY, token) {
        error!("Failed to store token in local storage: {:?}", e);
    }
}

pub fn clear_token() {
    LocalStorage::delete(TOKEN_KEY);
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub token: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
}

impl AuthState {
    pub fn is_signed_in(&self) -> bool {
        self.token.is_some()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum AuthAction {
    LoginStarted,
    LoginSuccess(String),
    LoginError(String),
    Logout,
}

impl Reducible for AuthState {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AuthAction::LoginStarted => Rc::new(Self {
                loading: true,
                error: None,
                ..(*self).clone()
            }),
            AuthAction::LoginSuccess(token) => Rc::new(Self {
                token: Some(token),
                loading: false,
                error: None,
            }),
            AuthAction::LoginError(error) => Rc::new(Self {
                token: None,
                loading: false,
                error: Some(error),
            }),
            AuthAction::Logout => Rc::new(Self::default()),
        }
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct AuthProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AuthContext {
    pub state: AuthState,
    pub login: Callback<(String, String)>,
    pub logout: Callback<()>,
}

#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let client = use_context::<ApiClient>().expect("API client not found");
    let auth = use_reducer_eq(|| AuthState {
        token: stored_token(),
        ..Default::default()
    });

    let login = {
        let auth = auth.clone();
        Callback::from(move |(username, password): (String, String)| {
            let auth = auth.clone();
            let client = client.clone();
            spawn_local(async move {
                auth.dispatch(AuthAction::LoginStarted);

                match auth::login(&client, &username, &password).await {
                    Ok(response) => {
                        store_token(&response.token);
                        auth.dispatch(AuthAction::LoginSuccess(response.token));
                    }
                    Err(e) => {
                        error!("Login failed: {}", e);
                        auth.dispatch(AuthAction::LoginError(e.to_string()));
                    }
                }
            });
        })
    };

    let logout = {
        let auth = auth.clone();
        Callback::from(move |_: ()| {
            debug!("Signing out");
            clear_token();
            auth.dispatch(AuthAction::Logout);
        })
    };

    let context = AuthContext {
        state: (*auth).clone(),
        login,
        logout,
    };

    html! {
        <ContextProvider<AuthContext> context={context}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn reduce(state: AuthState, action: AuthAction) -> AuthState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn login_success_stores_token_in_state() {
        let started = reduce(AuthState::default(), AuthAction::LoginStarted);
        assert!(started.loading);

        let signed_in = reduce(started, AuthAction::LoginSuccess("abc".to_string()));
        assert_eq!(signed_in.token.as_deref(), Some("abc"));
        assert!(!signed_in.loading);
        assert!(signed_in.is_signed_in());
    }

    #[test]
    fn login_error_clears_token() {
        let state = AuthState {
            token: Some("old".to_string()),
            ..Default::default()
        };
        let failed = reduce(state, AuthAction::LoginError("HTTP 400: Invalid credentials".to_string()));
        assert_eq!(failed.token, None);
        assert_eq!(failed.error.as_deref(), Some("HTTP 400: Invalid credentials"));
    }

    #[test]
    fn raw_tokens_are_read_as_written() {
        assert_eq!(
            parse_stored_token("9944b09199c62bcf9418ad846dd0e4bbdfc6ee4b").as_deref(),
            Some("9944b09199c62bcf9418ad846dd0e4bbdfc6ee4b")
        );
    }

    #[test]
    fn json_quoted_tokens_are_unquoted() {
        assert_eq!(parse_stored_token("\"abc123\"").as_deref(), Some("abc123"));
    }

    #[test]
    fn empty_and_null_tokens_are_absent() {
        assert_eq!(parse_stored_token(""), None);
        assert_eq!(parse_stored_token("  "), None);
        assert_eq!(parse_stored_token("null"), None);
        assert_eq!(parse_stored_token("\"\""), None);
    }

    #[test]
    fn logout_resets_state() {
        let state = AuthState {
            token: Some("abc".to_string()),
            loading: false,
            error: Some("stale".to_string()),
        };
        assert_eq!(reduce(state, AuthAction::Logout), AuthState::default());
    }
}
