pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::store::ActivityStore;

/// The JSON API surface. Static assets and outer layers are stacked on top
/// of this in `main`, so tests can drive the API router directly.
pub fn router(store: Arc<ActivityStore>) -> Router {
    Router::new()
        .route("/activities", get(routes::activities::list_activities_handler))
        .route(
            "/activities/:name/signup",
            post(routes::activities::signup_handler),
        )
        .route(
            "/activities/:name/unregister",
            post(routes::activities::unregister_handler),
        )
        .with_state(store)
}
