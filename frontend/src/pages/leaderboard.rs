use bingo_shared::LeaderboardEntryDto;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::api::leaderboard::fetch_leaderboard;
use crate::api::ApiClient;
use crate::Route;

#[function_component(Leaderboard)]
pub fn leaderboard() -> Html {
    let client = use_context::<ApiClient>().expect("API client not found");
    let entries = use_state(|| None::<Vec<LeaderboardEntryDto>>);
    let loading = use_state(|| false);
    let error = use_state(|| None::<String>);

    {
        let client = client.clone();
        let entries = entries.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_effect_with((), move |_| {
            loading.set(true);
            error.set(None);

            spawn_local(async move {
                match fetch_leaderboard(&client).await {
                    Ok(data) => entries.set(Some(data)),
                    Err(e) => error.set(Some(format!("Failed to fetch leaderboard: {}", e))),
                }
                loading.set(false);
            });

            || ()
        });
    }

    let config = client.config();

    html! {
        <div class="leaderboard-container">
            <h1>{"Leaderboard"}</h1>

            if *loading {
                <p class="loading">{"Loading leaderboard..."}</p>
            }
            if let Some(message) = &*error {
                <p class="error">{message.clone()}</p>
            }

            if let Some(entries) = &*entries {
                if entries.is_empty() {
                    <p>{"No scores yet."}</p>
                } else {
                    <table class="leaderboard">
                        <thead>
                            <tr>
                                <th>{"#"}</th>
                                <th></th>
                                <th>{"Player"}</th>
                                <th>{"Points"}</th>
                                <th>{"Rank"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for entries.iter().enumerate().map(|(index, entry)| html! {
                                <tr key={format!("{}-{}", index, entry.username)}>
                                    <td>{index + 1}</td>
                                    <td>
                                        <img
                                            class="avatar"
                                            src={config.media_url_for(entry.profile_picture.as_deref())}
                                            alt={entry.username.clone()}
                                        />
                                    </td>
                                    <td>{entry.username.clone()}</td>
                                    <td>{entry.points}</td>
                                    <td>{entry.rank().title()}</td>
                                </tr>
                            }) }
                        </tbody>
                    </table>
                }
            }

            <Link<Route> to={Route::Home}>{"Back to board"}</Link<Route>>
        </div>
    }
}
