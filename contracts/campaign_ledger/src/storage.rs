//! # Storage
//!
//! Typed helpers over the two Soroban storage tiers used by the ledger.
//!
//! ## Instance storage (contract-lifetime TTL)
//!
//! | Key             | Type  | Description                                |
//! |-----------------|-------|--------------------------------------------|
//! | `CampaignCount` | `u64` | Factory registry size / next campaign id   |
//!
//! Instance TTL is bumped by **7 days** whenever it falls below 1 day remaining.
//!
//! ## Persistent storage (per-entry TTL)
//!
//! | Key                        | Type             | Description                     |
//! |----------------------------|------------------|---------------------------------|
//! | `CampConfig(id)`           | `CampaignConfig` | Immutable campaign parameters   |
//! | `CampState(id)`            | `CampaignState`  | Balance and counters            |
//! | `Approver(id, addr)`       | `bool`           | Approver set membership         |
//! | `Request(id, index)`       | `Request`        | Spending request                |
//! | `Approval(id, index, addr)`| `bool`           | Per-request approval membership |
//!
//! Persistent TTL is bumped by **30 days** whenever it falls below 7 days remaining.
//!
//! Set membership is stored as one presence flag per member. Entries are
//! never removed, which is what keeps both sets monotonic.

use soroban_sdk::{contracttype, Address, Env};

use crate::types::{Campaign, CampaignConfig, CampaignState, Request};
use crate::Error;

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Number of campaigns created by the factory (Instance).
    CampaignCount,
    /// Immutable campaign configuration keyed by id (Persistent).
    CampConfig(u64),
    /// Mutable campaign state keyed by id (Persistent).
    CampState(u64),
    /// Approver membership flag (Persistent).
    Approver(u64, Address),
    /// Request keyed by (campaign id, request index) (Persistent).
    Request(u64, u32),
    /// Approval flag keyed by (campaign id, request index, approver) (Persistent).
    Approval(u64, u32, Address),
}

// ── Instance Storage Helpers ─────────────────────────────────────────

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

/// Number of campaigns the factory has created so far.
pub fn campaign_count(env: &Env) -> u64 {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::CampaignCount)
        .unwrap_or(0)
}

/// Reads, increments, and stores the campaign counter.
/// Returns the id to use for the *current* campaign (pre-increment value).
pub fn get_and_increment_campaign_id(env: &Env) -> u64 {
    let current = campaign_count(env);
    env.storage()
        .instance()
        .set(&DataKey::CampaignCount, &(current + 1));
    current
}

// ── Persistent Storage Helpers ───────────────────────────────────────

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

fn write<V>(env: &Env, key: &DataKey, value: &V)
where
    V: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
{
    env.storage().persistent().set(key, value);
    bump_persistent(env, key);
}

/// Save both the immutable config and the initial state for a new campaign.
pub fn save_campaign(env: &Env, config: &CampaignConfig, state: &CampaignState) {
    write(env, &DataKey::CampConfig(config.id), config);
    write(env, &DataKey::CampState(config.id), state);
}

/// Load the full `Campaign` by combining config and state.
pub fn load_campaign(env: &Env, id: u64) -> Result<Campaign, Error> {
    let config = load_campaign_config(env, id)?;
    let state = load_campaign_state(env, id)?;
    Ok(Campaign::from_parts(config, state))
}

pub fn load_campaign_config(env: &Env, id: u64) -> Result<CampaignConfig, Error> {
    let key = DataKey::CampConfig(id);
    let config: CampaignConfig = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(Error::NotFound)?;
    bump_persistent(env, &key);
    Ok(config)
}

pub fn load_campaign_state(env: &Env, id: u64) -> Result<CampaignState, Error> {
    let key = DataKey::CampState(id);
    let state: CampaignState = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(Error::NotFound)?;
    bump_persistent(env, &key);
    Ok(state)
}

pub fn save_campaign_state(env: &Env, id: u64, state: &CampaignState) {
    write(env, &DataKey::CampState(id), state);
}

/// Presence check that keeps a found flag alive like any other load.
fn has_flag(env: &Env, key: &DataKey) -> bool {
    let present = env.storage().persistent().has(key);
    if present {
        bump_persistent(env, key);
    }
    present
}

pub fn is_approver(env: &Env, id: u64, who: &Address) -> bool {
    has_flag(env, &DataKey::Approver(id, who.clone()))
}

pub fn add_approver(env: &Env, id: u64, who: &Address) {
    write(env, &DataKey::Approver(id, who.clone()), &true);
}

pub fn load_request(env: &Env, id: u64, index: u32) -> Result<Request, Error> {
    let key = DataKey::Request(id, index);
    let request: Request = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(Error::NotFound)?;
    bump_persistent(env, &key);
    Ok(request)
}

pub fn save_request(env: &Env, id: u64, index: u32, request: &Request) {
    write(env, &DataKey::Request(id, index), request);
}

pub fn has_approved(env: &Env, id: u64, index: u32, who: &Address) -> bool {
    has_flag(env, &DataKey::Approval(id, index, who.clone()))
}

pub fn add_approval(env: &Env, id: u64, index: u32, who: &Address) {
    write(env, &DataKey::Approval(id, index, who.clone()), &true);
}
