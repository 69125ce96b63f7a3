use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::jobs::filter::filter_jobs;
use crate::jobs::models::Job;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct JobSearchQuery {
    /// Absent behaves the same as empty: every job matches.
    #[serde(default)]
    pub q: String,
}

#[derive(Serialize)]
pub struct JobListResponse {
    pub jobs: Vec<Job>,
    pub total: usize,
}

/// GET /api/jobs
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    Query(params): Query<JobSearchQuery>,
) -> Json<JobListResponse> {
    let matched = filter_jobs(&state.jobs, &params.q);
    Json(JobListResponse {
        total: matched.len(),
        jobs: matched.into_iter().cloned().collect(),
    })
}

/// GET /api/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<Job>, AppError> {
    state
        .jobs
        .iter()
        .find(|job| job.id == id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))
}
