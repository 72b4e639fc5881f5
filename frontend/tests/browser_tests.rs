#![cfg(target_arch = "wasm32")]

use bingo_frontend::api::tasks::TASKS_PATH;
use bingo_frontend::api::ApiClient;
use bingo_frontend::auth::{clear_token, store_token, stored_token};
use bingo_frontend::config::{page_origin, Config};
use bingo_shared::{Environment, RedirectRule, Target};
use gloo_net::http::Request;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn dev_client() -> ApiClient {
    ApiClient::new(Config::for_environment(Environment::Development))
}

#[wasm_bindgen_test]
fn page_origin_is_available() {
    let origin = page_origin().expect("origin in a browser");
    assert!(origin.starts_with("http://") || origin.starts_with("https://"));
}

#[wasm_bindgen_test]
fn redirect_to_the_test_page_origin() {
    let origin = page_origin().expect("origin in a browser");
    let client = dev_client().with_redirect(RedirectRule::to_origin(&origin));
    assert_eq!(client.url("/tasks/"), format!("{}/tasks/", origin));
}

#[wasm_bindgen_test]
fn task_request_carries_the_stored_token() {
    store_token("9944b09199c62bcf9418ad846dd0e4bbdfc6ee4b");
    assert_eq!(
        stored_token().as_deref(),
        Some("9944b09199c62bcf9418ad846dd0e4bbdfc6ee4b")
    );

    let client = dev_client();
    let request = client
        .build_request(Target::Url(client.endpoint(TASKS_PATH)))
        .expect("request builds");

    assert_eq!(request.url(), "http://localhost:8000/tasks/");
    assert_eq!(
        request.headers().get("Authorization").as_deref(),
        Some("Bearer 9944b09199c62bcf9418ad846dd0e4bbdfc6ee4b")
    );
    clear_token();
}

#[wasm_bindgen_test]
fn task_request_without_token_has_no_authorization() {
    clear_token();

    let client = dev_client();
    let request = client
        .build_request(Target::Url(client.endpoint(TASKS_PATH)))
        .expect("request builds");

    assert_eq!(request.url(), "http://localhost:8000/tasks/");
    assert_eq!(request.headers().get("Authorization"), None);
}

#[wasm_bindgen_test]
fn redirected_task_request_keeps_the_token() {
    store_token("abc123");
    let origin = page_origin().expect("origin in a browser");
    let client = dev_client().with_redirect(RedirectRule::to_origin(&origin));

    let request = client
        .build_request(Target::Url(client.endpoint(TASKS_PATH)))
        .expect("request builds");

    assert_eq!(request.url(), format!("{}/tasks/", origin));
    assert_eq!(
        request.headers().get("Authorization").as_deref(),
        Some("Bearer abc123")
    );
    clear_token();
}

#[wasm_bindgen_test]
fn prepared_requests_are_sent_as_given() {
    let origin = page_origin().expect("origin in a browser");
    let client = dev_client().with_redirect(RedirectRule::to_origin(&origin));
    let prepared = Request::get("http://localhost:8000/tasks/")
        .header("X-Custom", "1")
        .build()
        .expect("request builds");

    let request = client
        .build_request(Target::Prepared(prepared))
        .expect("prepared request");

    assert_eq!(request.url(), "http://localhost:8000/tasks/");
    assert_eq!(request.headers().get("X-Custom").as_deref(), Some("1"));
}
