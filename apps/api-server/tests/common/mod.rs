//! Shared setup for the HTTP integration tests.

#![allow(dead_code, unused_macros)]

use api_server::AppState;
use blog_core::domain::BlogPost;
use blog_infra::seed::seed_posts;

/// Build the application service over `$state`, wired as in production.
macro_rules! test_app {
    ($state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(api_server::observability::RequestIdMiddleware)
                .app_data(actix_web::web::Data::new($state.clone()))
                .configure(api_server::handlers::configure_routes),
        )
        .await
    };
}

/// Fresh in-memory state seeded with `count` sample posts.
pub async fn seeded_state(count: usize) -> (AppState, Vec<BlogPost>) {
    let state = AppState::in_memory();
    let posts = seed_posts(state.posts.as_ref(), count)
        .await
        .expect("seeding the in-memory store cannot fail");
    (state, posts)
}

/// Drop every post, mirroring database teardown between tests.
pub async fn tear_down(state: &AppState) {
    state.posts.drop_all().await.expect("drop_all");
}

/// Sorted keys of a JSON object.
pub fn keys(value: &serde_json::Value) -> Vec<String> {
    let mut keys: Vec<String> = value
        .as_object()
        .expect("expected a JSON object")
        .keys()
        .cloned()
        .collect();
    keys.sort();
    keys
}
