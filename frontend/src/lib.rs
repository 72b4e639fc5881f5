use log::{debug, info};
use wasm_bindgen::prelude::*;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::server_config::build_client;
use crate::api::ApiClient;
use crate::auth::AuthProvider;
use crate::config::{page_origin, Config};

pub mod api;
pub mod auth;
pub mod config;
pub mod tasks;
pub mod pages {
    pub mod home;
    pub mod leaderboard;
    pub mod login;
    pub mod not_found;
}

use pages::{home::Home, leaderboard::Leaderboard, login::Login, not_found::NotFound};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/leaderboard")]
    Leaderboard,
    #[at("/login")]
    Login,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub client: ApiClient,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    debug!("App component rendering");
    html! {
        <ContextProvider<ApiClient> context={props.client.clone()}>
            <AuthProvider>
                <BrowserRouter>
                    <main class="app-container">
                        <Switch<Route> render={switch} />
                    </main>
                </BrowserRouter>
            </AuthProvider>
        </ContextProvider<ApiClient>>
    }
}

fn switch(routes: Route) -> Html {
    debug!("Route switch: {:?}", routes);
    match routes {
        Route::Home => html! { <Home /> },
        Route::Leaderboard => html! { <Leaderboard /> },
        Route::Login => html! { <Login /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[wasm_bindgen]
pub async fn run_app() -> Result<(), JsValue> {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    console_error_panic_hook::set_once();
    info!("Initializing application...");

    let config = Config::from_build();
    info!(
        "Environment: {}, API base: {}",
        config.environment, config.api_base_url
    );

    // The client must exist before anything renders and issues requests.
    let origin = page_origin();
    let client = build_client(config, origin.as_deref()).await;

    info!("Mounting application");
    yew::Renderer::<App>::with_props(AppProps { client }).render();

    Ok(())
}

// Add a start function that Trunk can call
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = run_app().await {
            log::error!("Failed to run app: {:?}", e);
        }
    });
    Ok(())
}
