//! # Events
//!
//! Every state transition publishes one event. The first topic names the
//! transition, the second is the campaign id, and the data is one of the
//! structs below.
//!
//! | Topic 0     | Data                    |
//! |-------------|-------------------------|
//! | `created`   | [`CampaignCreated`]     |
//! | `contrib`   | [`ContributionReceived`]|
//! | `requested` | [`RequestCreated`]      |
//! | `approved`  | [`RequestApproved`]     |
//! | `finalized` | [`RequestFinalized`]    |

use soroban_sdk::{contracttype, symbol_short, Address, Env};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignCreated {
    pub campaign_id: u64,
    pub manager: Address,
    pub token: Address,
    pub minimum_contribution: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContributionReceived {
    pub campaign_id: u64,
    pub contributor: Address,
    pub amount: i128,
    /// True when this contribution added the contributor to the approver set.
    pub new_approver: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RequestCreated {
    pub campaign_id: u64,
    pub request_index: u32,
    pub value: i128,
    pub recipient: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RequestApproved {
    pub campaign_id: u64,
    pub request_index: u32,
    pub approver: Address,
    pub approval_count: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RequestFinalized {
    pub campaign_id: u64,
    pub request_index: u32,
    pub recipient: Address,
    pub value: i128,
}

pub fn campaign_created(env: &Env, event: CampaignCreated) {
    env.events()
        .publish((symbol_short!("created"), event.campaign_id), event);
}

pub fn contribution_received(env: &Env, event: ContributionReceived) {
    env.events()
        .publish((symbol_short!("contrib"), event.campaign_id), event);
}

pub fn request_created(env: &Env, event: RequestCreated) {
    env.events()
        .publish((symbol_short!("requested"), event.campaign_id), event);
}

pub fn request_approved(env: &Env, event: RequestApproved) {
    env.events()
        .publish((symbol_short!("approved"), event.campaign_id), event);
}

pub fn request_finalized(env: &Env, event: RequestFinalized) {
    env.events()
        .publish((symbol_short!("finalized"), event.campaign_id), event);
}
