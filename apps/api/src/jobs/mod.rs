// Jobs: the static job board dataset and the search filter over it.

pub mod filter;
pub mod handlers;
pub mod models;
