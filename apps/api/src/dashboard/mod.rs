// Logged-in dashboard surface: greeting, summary stats, proposals list,
// wallet summary and transaction history.

pub mod greet;
pub mod handlers;
pub mod models;
