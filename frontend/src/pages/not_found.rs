use yew::prelude::*;
use yew_router::prelude::Link;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page">
            <h1>{"404 - Page Not Found"}</h1>
            <p>{"There is no bingo square here."}</p>
            <Link<Route> to={Route::Home}>{"Back to board"}</Link<Route>>
        </div>
    }
}
