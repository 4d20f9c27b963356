// src/routes.rs

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::{
    handlers::{auth, question, quiz},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Mounts the question routes and nests the per-user routes.
/// * Applies global middleware (Trace).
/// * Injects global state (services over the record store).
pub fn create_router(state: AppState) -> Router {
    let user_routes = Router::new()
        .route("/login", post(auth::login))
        .route("/{user}/answer", post(quiz::answer_question))
        .route("/{user}/answered", get(quiz::get_answered))
        .route("/{user}/finish", post(quiz::finish_quiz))
        .route("/{user}/score", get(quiz::get_score));

    Router::new()
        .route("/questions", get(question::list_questions))
        .route("/questions/{id}", get(question::get_question))
        .nest("/users", user_routes)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
