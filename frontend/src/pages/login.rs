use log::debug;
use web_sys::HtmlInputElement;
use yew::events::SubmitEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::AuthContext;
use crate::Route;

#[function_component(Login)]
pub fn login() -> Html {
    let username = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(String::new);

    let auth = use_context::<AuthContext>().expect("Auth context not found");
    let navigator = use_navigator().unwrap();

    let onsubmit = {
        let username = username.clone();
        let password = password.clone();
        let error = error.clone();
        let auth = auth.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let username = username.to_string();
            let password = password.to_string();

            if username.trim().is_empty() || password.is_empty() {
                error.set("Please enter both username and password".to_string());
                return;
            }

            error.set(String::new());
            auth.login.emit((username, password));
        })
    };

    let onusernamechange = {
        let username = username.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            username.set(input.value());
        })
    };

    let onpasswordchange = {
        let password = password.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    // Surface errors from the auth state
    {
        let error = error.clone();
        use_effect_with(auth.state.error.clone(), move |state_error| {
            if let Some(err) = state_error {
                error.set(err.clone());
            }
            || ()
        });
    }

    // Back to the board once a token is stored
    {
        let navigator = navigator.clone();
        use_effect_with(auth.state.is_signed_in(), move |signed_in| {
            if *signed_in {
                debug!("Signed in, redirecting to the board");
                navigator.push(&Route::Home);
            }
            || ()
        });
    }

    let loading = auth.state.loading;

    html! {
        <div class="login-container">
            <h2>{"Sign in to play"}</h2>
            <form onsubmit={onsubmit}>
                <label for="username">{"Username"}</label>
                <input
                    id="username"
                    name="username"
                    type="text"
                    required=true
                    placeholder="Username"
                    onchange={onusernamechange}
                />
                <label for="password">{"Password"}</label>
                <input
                    id="password"
                    name="password"
                    type="password"
                    required=true
                    placeholder="Password"
                    onchange={onpasswordchange}
                />

                if !error.is_empty() {
                    <div class="error">{error.to_string()}</div>
                }

                <button type="submit" disabled={loading}>
                    if loading {
                        {"Signing in..."}
                    } else {
                        {"Sign in"}
                    }
                </button>
            </form>
            <Link<Route> to={Route::Home}>{"Back to board"}</Link<Route>>
        </div>
    }
}
