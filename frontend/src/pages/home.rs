use log::{debug, error};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::tasks::{complete_task, fetch_tasks};
use crate::api::ApiClient;
use crate::auth::AuthContext;
use crate::tasks::{TaskAction, TaskListState};
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    let client = use_context::<ApiClient>().expect("API client not found");
    let auth = use_context::<AuthContext>().expect("Auth context not found");
    let navigator = use_navigator().unwrap();
    let board = use_reducer(TaskListState::default);

    // Load once on first display
    {
        let board = board.clone();
        let client = client.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match fetch_tasks(&client).await {
                    Ok(tasks) => board.dispatch(TaskAction::Loaded(tasks)),
                    Err(e) => board.dispatch(TaskAction::LoadFailed(e)),
                }
            });
            || ()
        });
    }

    let on_complete = {
        let board = board.clone();
        let client = client.clone();
        Callback::from(move |task_id: i64| {
            let board = board.clone();
            let client = client.clone();
            spawn_local(async move {
                match complete_task(&client, task_id).await {
                    Ok(_) => board.dispatch(TaskAction::Completed(task_id)),
                    Err(e) => error!("Error completing task {}: {}", task_id, e),
                }
            });
        })
    };

    let on_leaderboard = {
        let navigator = navigator.clone();
        Callback::from(move |_| navigator.push(&Route::Leaderboard))
    };

    let on_login = {
        let navigator = navigator.clone();
        Callback::from(move |_| navigator.push(&Route::Login))
    };

    let on_logout = {
        let logout = auth.logout.clone();
        Callback::from(move |_| logout.emit(()))
    };

    debug!("Rendering home board with {} tasks", board.count());

    html! {
        <div class="home-container">
            <h1>{"Bingo Game Board"}</h1>
            <p>{"Complete tasks to earn points and win!"}</p>

            <p class="task-count">{format!("{} tasks available", board.count())}</p>
            <ul class="task-list">
                { for board.tasks.iter().map(|task| {
                    let task_id = task.id;
                    let done = board.is_completed(task_id);
                    let onclick = {
                        let on_complete = on_complete.clone();
                        Callback::from(move |_| on_complete.emit(task_id))
                    };
                    html! {
                        <li key={task_id} class={classes!("task", done.then_some("task-completed"))}>
                            <span class="task-label">{task.label()}</span>
                            if let Some(points) = task.points {
                                <span class="task-points">{format!("{} pts", points)}</span>
                            }
                            <button disabled={done || !auth.state.is_signed_in()} {onclick}>
                                {if done { "Completed" } else { "Complete" }}
                            </button>
                        </li>
                    }
                }) }
            </ul>

            <div class="buttons">
                <button onclick={on_leaderboard}>{"View Leaderboard"}</button>
                <button onclick={on_login}>{"Login"}</button>
                if auth.state.is_signed_in() {
                    <button onclick={on_logout}>{"Logout"}</button>
                }
            </div>
        </div>
    }
}
