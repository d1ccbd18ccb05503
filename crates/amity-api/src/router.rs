use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers;
use crate::state::AppState;

/// Build the full route table over the shared state.
///
/// The permissive CORS layer also answers OPTIONS preflight requests.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::status))
        .route("/status", get(handlers::status))
        .route(
            "/users",
            get(handlers::list_users).post(handlers::create_user),
        )
        .route("/users/{name}", get(handlers::get_user))
        .route("/friends/{name}", get(handlers::list_friends))
        .route("/recommendations/{name}", get(handlers::recommendations))
        .route("/path/{user1}/{user2}", get(handlers::shortest_path))
        .route("/friendship", post(handlers::create_friendship))
        .route(
            "/friendship/{user1}/{user2}",
            delete(handlers::delete_friendship),
        )
        .route("/seed", post(handlers::seed))
        .route("/clear", delete(handlers::clear))
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
