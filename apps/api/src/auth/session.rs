//! The sign-in task behind the login/signup endpoints.
//!
//! There is no real account backend yet; submission resolves after a fixed,
//! named latency. The contract is explicit all the same: request → pending →
//! success | failure, with validation short-circuiting before the task
//! starts. A started task always runs to completion — no cancellation.

use std::time::Duration;

use serde::Serialize;

use crate::auth::models::{AuthFormData, AuthFormMode};
use crate::auth::validation::validate;
use crate::errors::AppError;

/// The stand-in latency for the account backend. This is the only delay in
/// the flow; no other timeout applies.
pub const SIMULATED_LATENCY: Duration = Duration::from_millis(1500);

/// Where the client should land after a successful submit.
#[derive(Debug, Clone, Serialize)]
pub struct SessionOutcome {
    pub redirect: &'static str,
    pub remembered: bool,
}

/// Validates the form, then resolves the sign-in task.
///
/// A non-empty error set returns `FormInvalid` immediately — the task never
/// starts, so an invalid form costs no latency and reaches no backend.
pub async fn sign_in(
    form: &AuthFormData,
    mode: AuthFormMode,
) -> Result<SessionOutcome, AppError> {
    let errors = validate(form, mode);
    if !errors.is_empty() {
        return Err(AppError::FormInvalid(errors));
    }

    tokio::time::sleep(SIMULATED_LATENCY).await;

    Ok(SessionOutcome {
        redirect: "/dashboard",
        remembered: form.remember_me,
    })
}
