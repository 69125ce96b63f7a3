use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{Local, Timelike};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::dashboard::greet::greet;
use crate::dashboard::models::{Proposal, WalletSummary};
use crate::state::AppState;

/// Headline figures mirrored from the wallet overview cards.
const WALLET_SUMMARY: WalletSummary = WalletSummary {
    balance: "UGX 3,450,000",
    this_month: "UGX 1,250,000",
    last_month: "UGX 950,000",
    total_earnings: "UGX 8,750,000",
};

#[derive(Deserialize)]
pub struct ProposalSearchQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Serialize)]
pub struct ProposalListResponse {
    pub proposals: Vec<Proposal>,
    pub total: usize,
}

/// Same containment semantics as the job filter, matched against the job
/// title or the client name.
pub fn filter_proposals<'a>(proposals: &'a [Proposal], query: &str) -> Vec<&'a Proposal> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return proposals.iter().collect();
    }

    proposals
        .iter()
        .filter(|proposal| {
            proposal.job_title.to_lowercase().contains(&needle)
                || proposal.client_name.to_lowercase().contains(&needle)
        })
        .collect()
}

/// GET /api/proposals
pub async fn handle_list_proposals(
    State(state): State<AppState>,
    Query(params): Query<ProposalSearchQuery>,
) -> Json<ProposalListResponse> {
    let matched = filter_proposals(&state.proposals, &params.q);
    Json(ProposalListResponse {
        total: matched.len(),
        proposals: matched.into_iter().cloned().collect(),
    })
}

/// GET /api/wallet
pub async fn handle_wallet(State(_state): State<AppState>) -> Json<WalletSummary> {
    Json(WALLET_SUMMARY)
}

/// GET /api/wallet/transactions
pub async fn handle_transactions(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "transactions": &*state.transactions }))
}

#[derive(Deserialize)]
pub struct DashboardQuery {
    #[serde(default)]
    pub name: String,
}

/// GET /api/dashboard
/// Welcome greeting plus the stat cards shown at the top of the dashboard.
pub async fn handle_dashboard(
    State(_state): State<AppState>,
    Query(params): Query<DashboardQuery>,
) -> Json<Value> {
    let hour = Local::now().hour();
    Json(json!({
        "greeting": greet(&params.name, hour),
        "stats": {
            "this_month": "UGX 1,250,000",
            "total_earned": "UGX 8,750,000",
            "active_contracts": 3,
            "job_success": "92%",
        },
    }))
}
