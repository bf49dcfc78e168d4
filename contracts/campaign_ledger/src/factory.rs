//! # Factory
//!
//! Creates campaigns and keeps the registry of their handles. The registry
//! is the `CampaignCount` counter: handles are allocated sequentially from
//! 0 and never reused, so `0..count` is the full creation-ordered list.

use soroban_sdk::{log, Address, Env, Vec};

use crate::events::{self, CampaignCreated};
use crate::storage;
use crate::types::{CampaignConfig, CampaignState};
use crate::Error;

pub fn create_campaign(
    env: &Env,
    manager: &Address,
    token: &Address,
    minimum_contribution: i128,
) -> Result<u64, Error> {
    if minimum_contribution <= 0 {
        return Err(Error::InvalidAmount);
    }

    let id = storage::get_and_increment_campaign_id(env);

    let config = CampaignConfig {
        id,
        manager: manager.clone(),
        token: token.clone(),
        minimum_contribution,
        created_at: env.ledger().timestamp(),
    };
    let state = CampaignState {
        balance: 0,
        approvers_count: 0,
        requests_count: 0,
    };
    storage::save_campaign(env, &config, &state);

    log!(env, "campaign created", id, minimum_contribution);
    events::campaign_created(
        env,
        CampaignCreated {
            campaign_id: id,
            manager: config.manager,
            token: config.token,
            minimum_contribution,
        },
    );
    Ok(id)
}

pub fn deployed_campaigns(env: &Env) -> Vec<u64> {
    let count = storage::campaign_count(env);
    let mut ids = Vec::new(env);
    for id in 0..count {
        ids.push_back(id);
    }
    ids
}
