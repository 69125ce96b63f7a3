use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::{json, Value};

use crate::auth::models::{AuthFormData, AuthFormMode};
use crate::auth::session::{sign_in, SessionOutcome};
use crate::auth::strength;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SignupResponse {
    #[serde(flatten)]
    pub outcome: SessionOutcome,
    pub password_strength: u8,
    pub strength_label: &'static str,
}

/// POST /api/auth/login
pub async fn handle_login(
    State(_state): State<AppState>,
    Json(form): Json<AuthFormData>,
) -> Result<Json<SessionOutcome>, AppError> {
    let outcome = sign_in(&form, AuthFormMode::Login).await?;
    Ok(Json(outcome))
}

/// POST /api/auth/signup
///
/// Echoes the strength of the accepted password so the client can show the
/// final meter state without rescoring.
pub async fn handle_signup(
    State(_state): State<AppState>,
    Json(form): Json<AuthFormData>,
) -> Result<Json<SignupResponse>, AppError> {
    let outcome = sign_in(&form, AuthFormMode::Signup).await?;
    let password_strength = strength::score(&form.password);
    Ok(Json(SignupResponse {
        outcome,
        password_strength,
        strength_label: strength::label(password_strength),
    }))
}

/// GET /api/auth/config
/// Client id for the Google SSO widget. Empty when unconfigured; the widget
/// hides itself in that case.
pub async fn handle_auth_config(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "google_client_id": state.config.google_client_id }))
}
