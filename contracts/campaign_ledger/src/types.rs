//! # Types
//!
//! Shared data structures used across all modules of the campaign ledger.
//!
//! ## Design decisions
//!
//! ### Config / State split
//!
//! A `Campaign` is internally stored as two separate ledger entries:
//!
//! - [`CampaignConfig`] — written once by the factory; never mutated.
//! - [`CampaignState`] — written on every contribution, request and payout.
//!
//! The public API exposes the reconstructed [`Campaign`] struct for convenience.
//!
//! ### Request lifecycle
//!
//! A [`Request`] only ever moves forward:
//!
//! ```text
//! Open (complete = false) ──► Finalized (complete = true)
//! ```
//!
//! A request that never reaches quorum simply stays open. There is no
//! explicit rejected or cancelled state.

use soroban_sdk::{contracttype, Address, String};

/// Immutable campaign configuration, written once at creation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignConfig {
    pub id: u64,
    pub manager: Address,
    pub token: Address,
    pub minimum_contribution: i128,
    pub created_at: u64,
}

/// Mutable campaign state.
///
/// `approvers_count` is the quorum denominator and only ever grows.
/// `requests_count` doubles as the next request index.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignState {
    pub balance: i128,
    pub approvers_count: u32,
    pub requests_count: u32,
}

/// Full view of a campaign, reconstructed from config and state.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Campaign {
    /// Handle allocated by the factory (sequential from 0).
    pub id: u64,
    /// Account that created the campaign; sole authority over requests.
    pub manager: Address,
    /// Asset contributions and payouts are denominated in.
    pub token: Address,
    /// Smallest accepted contribution.
    pub minimum_contribution: i128,
    /// Funds currently held for this campaign.
    pub balance: i128,
    /// Distinct contributors eligible to approve requests.
    pub approvers_count: u32,
    /// Number of spending requests ever created.
    pub requests_count: u32,
    /// Ledger timestamp at creation.
    pub created_at: u64,
}

impl Campaign {
    pub(crate) fn from_parts(config: CampaignConfig, state: CampaignState) -> Self {
        Campaign {
            id: config.id,
            manager: config.manager,
            token: config.token,
            minimum_contribution: config.minimum_contribution,
            balance: state.balance,
            approvers_count: state.approvers_count,
            requests_count: state.requests_count,
            created_at: config.created_at,
        }
    }
}

/// A spending request raised by the campaign manager.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Request {
    pub description: String,
    /// Payout amount; checked against the held balance only at finalization.
    pub value: i128,
    pub recipient: Address,
    /// Terminal once set.
    pub complete: bool,
    pub approval_count: u32,
}
