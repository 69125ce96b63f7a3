// Auth flow: form validation, password-strength scoring, and the simulated
// sign-in task behind the login/signup endpoints. No real credential store
// exists; a valid form always signs in after the fixed latency.

pub mod handlers;
pub mod models;
pub mod session;
pub mod strength;
pub mod validation;
