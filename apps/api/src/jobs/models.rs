use serde::{Deserialize, Serialize};

/// One job posting. Loaded wholesale from the embedded dataset at startup;
/// immutable thereafter — the UI never creates, updates, or deletes jobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// Unique within a loaded set.
    pub id: u32,
    pub title: String,
    pub description: String,
    pub budget: String,
    pub location: String,
    pub posted_time: String,
    pub tags: Vec<String>,
}

/// Wire shape of the jobs dataset: `{ "jobs": [...] }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobsData {
    pub jobs: Vec<Job>,
}
