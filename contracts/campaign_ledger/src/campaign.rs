//! # Campaign
//!
//! Contribution, approval and payout rules for a single campaign.
//!
//! Roles are checked as guard clauses at the top of each operation against
//! stored identities: `caller == manager` for request management and
//! approver-set membership for approvals. Callers are authenticated by the
//! entry points in `lib.rs` before any of these run.
//!
//! ## Ordering rule
//!
//! Every write to this contract's storage happens before [`ledger::pay_out`]
//! is invoked. A call that re-enters during the payout observes the request
//! as complete and is rejected with [`Error::AlreadyFinalized`].

use soroban_sdk::{log, Address, Env, String};

use crate::events::{
    self, ContributionReceived, RequestApproved, RequestCreated, RequestFinalized,
};
use crate::ledger;
use crate::storage;
use crate::types::Request;
use crate::Error;

/// A request passes quorum once strictly more than half of all approvers,
/// counted at the time of the check, have approved it.
pub fn quorum_reached(approval_count: u32, approvers_count: u32) -> bool {
    approval_count > approvers_count / 2
}

pub fn contribute(
    env: &Env,
    campaign_id: u64,
    contributor: &Address,
    amount: i128,
) -> Result<(), Error> {
    let config = storage::load_campaign_config(env, campaign_id)?;
    let mut state = storage::load_campaign_state(env, campaign_id)?;

    if amount < config.minimum_contribution {
        return Err(Error::InsufficientContribution);
    }

    ledger::collect(env, &config.token, contributor, amount);

    state.balance += amount;
    // For a returning contributor the lookup renews the flag's TTL.
    let new_approver = !storage::is_approver(env, campaign_id, contributor);
    if new_approver {
        storage::add_approver(env, campaign_id, contributor);
        state.approvers_count += 1;
    }
    storage::save_campaign_state(env, campaign_id, &state);

    events::contribution_received(
        env,
        ContributionReceived {
            campaign_id,
            contributor: contributor.clone(),
            amount,
            new_approver,
        },
    );
    Ok(())
}

pub fn create_request(
    env: &Env,
    campaign_id: u64,
    caller: &Address,
    description: String,
    value: i128,
    recipient: Address,
) -> Result<u32, Error> {
    let config = storage::load_campaign_config(env, campaign_id)?;
    if *caller != config.manager {
        return Err(Error::Unauthorized);
    }
    // No balance check: sufficiency is decided at finalization.
    if value < 0 {
        return Err(Error::InvalidAmount);
    }

    let mut state = storage::load_campaign_state(env, campaign_id)?;
    let index = state.requests_count;

    let request = Request {
        description,
        value,
        recipient: recipient.clone(),
        complete: false,
        approval_count: 0,
    };
    storage::save_request(env, campaign_id, index, &request);

    state.requests_count += 1;
    storage::save_campaign_state(env, campaign_id, &state);

    events::request_created(
        env,
        RequestCreated {
            campaign_id,
            request_index: index,
            value,
            recipient,
        },
    );
    Ok(index)
}

pub fn approve_request(
    env: &Env,
    campaign_id: u64,
    approver: &Address,
    index: u32,
) -> Result<(), Error> {
    // Unknown campaign is reported before any role check.
    storage::load_campaign_config(env, campaign_id)?;

    if !storage::is_approver(env, campaign_id, approver) {
        return Err(Error::Unauthorized);
    }
    if storage::has_approved(env, campaign_id, index, approver) {
        return Err(Error::AlreadyApproved);
    }
    let mut request = storage::load_request(env, campaign_id, index)?;
    if request.complete {
        return Err(Error::AlreadyFinalized);
    }

    storage::add_approval(env, campaign_id, index, approver);
    request.approval_count += 1;
    storage::save_request(env, campaign_id, index, &request);

    events::request_approved(
        env,
        RequestApproved {
            campaign_id,
            request_index: index,
            approver: approver.clone(),
            approval_count: request.approval_count,
        },
    );
    Ok(())
}

pub fn finalize_request(
    env: &Env,
    campaign_id: u64,
    caller: &Address,
    index: u32,
) -> Result<(), Error> {
    let config = storage::load_campaign_config(env, campaign_id)?;
    if *caller != config.manager {
        return Err(Error::Unauthorized);
    }

    let mut request = storage::load_request(env, campaign_id, index)?;
    if request.complete {
        return Err(Error::AlreadyFinalized);
    }

    let mut state = storage::load_campaign_state(env, campaign_id)?;
    if !quorum_reached(request.approval_count, state.approvers_count) {
        return Err(Error::QuorumNotMet);
    }
    if state.balance < request.value {
        return Err(Error::InsufficientFunds);
    }
    // Holdings can shrink outside this contract (admin clawback, burn).
    let custody = ledger::balance_of(env, &config.token, &env.current_contract_address());
    if custody < request.value {
        return Err(Error::InsufficientFunds);
    }

    request.complete = true;
    state.balance -= request.value;
    storage::save_request(env, campaign_id, index, &request);
    storage::save_campaign_state(env, campaign_id, &state);

    if request.value > 0 {
        ledger::pay_out(env, &config.token, &request.recipient, request.value);
    }
    log!(env, "request paid out", campaign_id, index, request.value);

    events::request_finalized(
        env,
        RequestFinalized {
            campaign_id,
            request_index: index,
            recipient: request.recipient,
            value: request.value,
        },
    );
    Ok(())
}

pub fn get_request(env: &Env, campaign_id: u64, index: u32) -> Result<Request, Error> {
    storage::load_campaign_config(env, campaign_id)?;
    storage::load_request(env, campaign_id, index)
}
