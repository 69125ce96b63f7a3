use serde::{Deserialize, Serialize};

/// Lifecycle of a submitted proposal as the client sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProposalStatus {
    Sent,
    Viewed,
    Accepted,
    Rejected,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proposal {
    pub id: u32,
    pub job_title: String,
    pub client_name: String,
    pub submitted_date: String,
    pub status: ProposalStatus,
    pub budget: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: u32,
    pub date: String,
    pub description: String,
    pub amount: String,
    pub status: String,
}

/// Headline wallet figures. Display strings, not amounts — the UI renders
/// them verbatim and nothing computes with them.
#[derive(Debug, Clone, Serialize)]
pub struct WalletSummary {
    pub balance: &'static str,
    pub this_month: &'static str,
    pub last_month: &'static str,
    pub total_earnings: &'static str,
}
