pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::auth::handlers as auth;
use crate::chat::handlers as chat;
use crate::dashboard::handlers as dashboard;
use crate::jobs::handlers as jobs;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Chat relay — non-POST verbs get the documented 405 body
        .route(
            "/api/chat",
            post(chat::handle_chat).fallback(chat::handle_chat_method_not_allowed),
        )
        // Auth
        .route("/api/auth/login", post(auth::handle_login))
        .route("/api/auth/signup", post(auth::handle_signup))
        .route("/api/auth/config", get(auth::handle_auth_config))
        // Jobs
        .route("/api/jobs", get(jobs::handle_list_jobs))
        .route("/api/jobs/:id", get(jobs::handle_get_job))
        // Dashboard
        .route("/api/dashboard", get(dashboard::handle_dashboard))
        .route("/api/proposals", get(dashboard::handle_list_proposals))
        .route("/api/wallet", get(dashboard::handle_wallet))
        .route("/api/wallet/transactions", get(dashboard::handle_transactions))
        .with_state(state)
}
