//! Embedded static datasets.
//!
//! The dashboard pages read their records from fixed JSON resources; nothing
//! in the product creates, updates, or deletes them. They are compiled into
//! the binary, parsed once at startup, and held immutable in `AppState`.

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::dashboard::models::{Proposal, Transaction};
use crate::jobs::models::{Job, JobsData};

const JOBS_JSON: &str = include_str!("../data/jobs.json");
const PROPOSALS_JSON: &str = include_str!("../data/proposals.json");
const TRANSACTIONS_JSON: &str = include_str!("../data/transactions.json");

#[derive(Deserialize)]
struct ProposalsData {
    proposals: Vec<Proposal>,
}

#[derive(Deserialize)]
struct TransactionsData {
    transactions: Vec<Transaction>,
}

pub fn load_jobs() -> Result<Vec<Job>> {
    let data: JobsData =
        serde_json::from_str(JOBS_JSON).context("embedded jobs dataset is not valid JSON")?;
    Ok(data.jobs)
}

pub fn load_proposals() -> Result<Vec<Proposal>> {
    let data: ProposalsData = serde_json::from_str(PROPOSALS_JSON)
        .context("embedded proposals dataset is not valid JSON")?;
    Ok(data.proposals)
}

pub fn load_transactions() -> Result<Vec<Transaction>> {
    let data: TransactionsData = serde_json::from_str(TRANSACTIONS_JSON)
        .context("embedded transactions dataset is not valid JSON")?;
    Ok(data.transactions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::models::ProposalStatus;

    #[test]
    fn test_jobs_dataset_parses() {
        let jobs = load_jobs().unwrap();
        assert_eq!(jobs.len(), 3);
        assert_eq!(jobs[0].title, "Website Development");
        assert!(jobs[0].tags.contains(&"React".to_string()));
    }

    #[test]
    fn test_job_ids_unique() {
        let jobs = load_jobs().unwrap();
        let mut ids: Vec<u32> = jobs.iter().map(|j| j.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), jobs.len());
    }

    #[test]
    fn test_proposals_dataset_parses() {
        let proposals = load_proposals().unwrap();
        assert_eq!(proposals.len(), 4);
        assert_eq!(proposals[1].status, ProposalStatus::Accepted);
    }

    #[test]
    fn test_transactions_dataset_parses() {
        let transactions = load_transactions().unwrap();
        assert_eq!(transactions.len(), 3);
        assert_eq!(transactions[0].amount, "UGX 1,250,000");
    }
}
