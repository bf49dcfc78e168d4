//! # Campaign Ledger Contract
//!
//! A quorum-gated crowdfunding escrow. A single deployed `CampaignFactory`
//! contract hosts every campaign it creates; each campaign is addressed by
//! the `u64` handle the factory returned.
//!
//! | Phase        | Entry Point(s)                                       |
//! |--------------|------------------------------------------------------|
//! | Factory      | [`CampaignFactory::create_campaign`], `get_deployed_campaigns` |
//! | Funding      | [`CampaignFactory::contribute`]                      |
//! | Spending     | `create_request`, `approve_request`, `finalize_request` |
//! | Queries      | `get_campaign`, `get_request`, `is_approver`, ...    |
//!
//! ## Architecture
//!
//! Campaign rules live in [`campaign`], registry handling in [`factory`],
//! storage access in [`storage`] and token movement in [`ledger`]. This file
//! contains only the public entry points and caller authentication.
//!
//! Every entry point returns `Result<_, Error>`. A failed invocation is
//! rolled back in full by the host, so no partial effect is ever persisted.

#![no_std]

use soroban_sdk::{contract, contracterror, contractimpl, Address, Env, String, Vec};

mod campaign;
mod events;
mod factory;
mod ledger;
mod storage;
mod types;

#[cfg(test)]
mod test_events;

pub use events::{
    CampaignCreated, ContributionReceived, RequestApproved, RequestCreated, RequestFinalized,
};
pub use types::{Campaign, Request};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    Unauthorized             = 1,
    InsufficientContribution = 2,
    AlreadyApproved          = 3,
    AlreadyFinalized         = 4,
    QuorumNotMet             = 5,
    InsufficientFunds        = 6,
    NotFound                 = 7,
    InvalidAmount            = 8,
}

#[contract]
pub struct CampaignFactory;

#[contractimpl]
impl CampaignFactory {
    // ─────────────────────────────────────────────────────────
    // Factory
    // ─────────────────────────────────────────────────────────

    /// Create a new campaign managed by `manager` and denominated in `token`.
    ///
    /// Anyone may create a campaign. `minimum_contribution` must be positive.
    /// Returns the new campaign's handle.
    pub fn create_campaign(
        env: Env,
        manager: Address,
        token: Address,
        minimum_contribution: i128,
    ) -> Result<u64, Error> {
        manager.require_auth();
        factory::create_campaign(&env, &manager, &token, minimum_contribution)
    }

    /// Every campaign handle ever created, in creation order.
    pub fn get_deployed_campaigns(env: Env) -> Vec<u64> {
        factory::deployed_campaigns(&env)
    }

    /// Number of campaigns created so far.
    pub fn get_campaign_count(env: Env) -> u64 {
        storage::campaign_count(&env)
    }

    // ─────────────────────────────────────────────────────────
    // Campaign operations
    // ─────────────────────────────────────────────────────────

    /// Contribute `amount` of the campaign's token.
    ///
    /// `amount` must be at least the campaign's minimum contribution. The
    /// contributor joins the approver set on their first contribution;
    /// later contributions only add to the balance.
    pub fn contribute(
        env: Env,
        campaign_id: u64,
        contributor: Address,
        amount: i128,
    ) -> Result<(), Error> {
        contributor.require_auth();
        campaign::contribute(&env, campaign_id, &contributor, amount)
    }

    /// Raise a spending request. Manager only.
    ///
    /// The held balance is not checked here. Returns the request index.
    pub fn create_request(
        env: Env,
        campaign_id: u64,
        manager: Address,
        description: String,
        value: i128,
        recipient: Address,
    ) -> Result<u32, Error> {
        manager.require_auth();
        campaign::create_request(&env, campaign_id, &manager, description, value, recipient)
    }

    /// Approve request `request_index`. Approvers only, once per request.
    pub fn approve_request(
        env: Env,
        campaign_id: u64,
        approver: Address,
        request_index: u32,
    ) -> Result<(), Error> {
        approver.require_auth();
        campaign::approve_request(&env, campaign_id, &approver, request_index)
    }

    /// Pay out request `request_index` to its recipient. Manager only.
    ///
    /// Requires strictly more than half of the current approvers to have
    /// approved, and enough held balance and token custody to cover the value.
    pub fn finalize_request(
        env: Env,
        campaign_id: u64,
        manager: Address,
        request_index: u32,
    ) -> Result<(), Error> {
        manager.require_auth();
        campaign::finalize_request(&env, campaign_id, &manager, request_index)
    }

    // ─────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────

    /// Summary of a campaign: manager, token, minimum, balance and counters.
    pub fn get_campaign(env: Env, campaign_id: u64) -> Result<Campaign, Error> {
        storage::load_campaign(&env, campaign_id)
    }

    /// The campaign's manager.
    pub fn manager(env: Env, campaign_id: u64) -> Result<Address, Error> {
        Ok(storage::load_campaign_config(&env, campaign_id)?.manager)
    }

    /// Request `request_index`, or `NotFound`.
    pub fn get_request(env: Env, campaign_id: u64, request_index: u32) -> Result<Request, Error> {
        campaign::get_request(&env, campaign_id, request_index)
    }

    /// Number of requests ever created on the campaign.
    pub fn get_requests_count(env: Env, campaign_id: u64) -> Result<u32, Error> {
        Ok(storage::load_campaign_state(&env, campaign_id)?.requests_count)
    }

    /// Whether `address` belongs to the campaign's approver set.
    pub fn is_approver(env: Env, campaign_id: u64, address: Address) -> bool {
        storage::is_approver(&env, campaign_id, &address)
    }

    /// Whether `address` has approved request `request_index`.
    pub fn has_approved(env: Env, campaign_id: u64, request_index: u32, address: Address) -> bool {
        storage::has_approved(&env, campaign_id, request_index, &address)
    }
}
