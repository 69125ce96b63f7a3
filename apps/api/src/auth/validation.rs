//! Auth form validation. Pure and synchronous: the submit path calls this
//! first and issues no sign-in task while the error set is non-empty.

use crate::auth::models::{AuthFormData, AuthFormErrors, AuthFormMode};

/// Validates the raw form for the given mode, recomputing every field check.
pub fn validate(form: &AuthFormData, mode: AuthFormMode) -> AuthFormErrors {
    let mut errors = AuthFormErrors::default();

    if form.email.is_empty() {
        errors.email = Some("Email is required".to_string());
    } else if !looks_like_email(&form.email) {
        errors.email = Some("Email is invalid".to_string());
    }

    if form.password.is_empty() {
        errors.password = Some("Password is required".to_string());
    } else if form.password.chars().count() < 8 {
        errors.password = Some("Password must be at least 8 characters".to_string());
    }

    if mode == AuthFormMode::Signup && form.name.is_empty() {
        errors.name = Some("Full name is required".to_string());
    }

    errors
}

/// Permissive `<non-space>@<non-space>.<non-space>` shape check: some
/// whitespace-free run of the input must contain an `@` with text before it
/// and a dotted domain after it. Deliberately not RFC 5322 — it accepts many
/// invalid addresses and rejects dotless domains.
fn looks_like_email(email: &str) -> bool {
    email.split_whitespace().any(|token| {
        token.char_indices().any(|(at, c)| {
            if c != '@' || at == 0 {
                return false;
            }
            let domain = &token[at + 1..];
            domain
                .char_indices()
                .any(|(dot, d)| d == '.' && dot > 0 && dot + 1 < domain.len())
        })
    })
}
