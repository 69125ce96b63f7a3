use std::sync::Arc;

use crate::config::Config;
use crate::dashboard::models::{Proposal, Transaction};
use crate::jobs::models::Job;
use crate::llm_client::CompletionBackend;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Every dataset is parsed once at startup and never mutated afterwards, so
/// handlers share plain `Arc` snapshots with no locking.
#[derive(Clone)]
pub struct AppState {
    /// Completion seam. The reqwest client in production; tests substitute a
    /// scripted backend.
    pub llm: Arc<dyn CompletionBackend>,
    pub config: Config,
    pub jobs: Arc<Vec<Job>>,
    pub proposals: Arc<Vec<Proposal>>,
    pub transactions: Arc<Vec<Transaction>>,
}
