extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events},
    token, vec, Address, Env, IntoVal, String, TryIntoVal,
};

use crate::events::{
    CampaignCreated, ContributionReceived, RequestApproved, RequestCreated, RequestFinalized,
};
use crate::{CampaignFactory, CampaignFactoryClient};

fn setup() -> (Env, CampaignFactoryClient<'static>) {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(CampaignFactory, ());
    let client = CampaignFactoryClient::new(&env, &contract_id);
    (env, client)
}

fn create_token<'a>(env: &Env, admin: &Address) -> token::Client<'a> {
    let addr = env.register_stellar_asset_contract_v2(admin.clone());
    token::Client::new(env, &addr.address())
}

#[test]
fn test_campaign_created_event() {
    let (env, client) = setup();
    let manager = Address::generate(&env);
    let token_admin = Address::generate(&env);
    let token = create_token(&env, &token_admin);

    let campaign_id = client.create_campaign(&manager, &token.address, &100);

    let all_events = env.events().all();
    let last_event = all_events.last().expect("No events found");

    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("created").into_val(&env),
        campaign_id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);

    let event_data: CampaignCreated = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        CampaignCreated {
            campaign_id,
            manager: manager.clone(),
            token: token.address.clone(),
            minimum_contribution: 100,
        }
    );
}

#[test]
fn test_contribution_event_flags_new_approver() {
    let (env, client) = setup();
    let manager = Address::generate(&env);
    let token_admin = Address::generate(&env);
    let token = create_token(&env, &token_admin);
    let donor = Address::generate(&env);
    let campaign_id = client.create_campaign(&manager, &token.address, &100);
    token::StellarAssetClient::new(&env, &token.address).mint(&donor, &1_000);

    client.contribute(&campaign_id, &donor, &400);

    let last_event = env.events().all().last().expect("No events found");
    let expected_topics = vec![
        &env,
        symbol_short!("contrib").into_val(&env),
        campaign_id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);
    let event_data: ContributionReceived = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        ContributionReceived {
            campaign_id,
            contributor: donor.clone(),
            amount: 400,
            new_approver: true,
        }
    );

    client.contribute(&campaign_id, &donor, &600);

    let last_event = env.events().all().last().expect("No events found");
    let event_data: ContributionReceived = last_event.2.try_into_val(&env).unwrap();
    assert!(!event_data.new_approver);
    assert_eq!(event_data.amount, 600);
}

#[test]
fn test_request_lifecycle_events() {
    let (env, client) = setup();
    let manager = Address::generate(&env);
    let token_admin = Address::generate(&env);
    let token = create_token(&env, &token_admin);
    let donor = Address::generate(&env);
    let vendor = Address::generate(&env);
    let campaign_id = client.create_campaign(&manager, &token.address, &100);
    token::StellarAssetClient::new(&env, &token.address).mint(&donor, &500);
    client.contribute(&campaign_id, &donor, &500);

    let index = client.create_request(
        &campaign_id,
        &manager,
        &String::from_str(&env, "Pay vendor"),
        &250,
        &vendor,
    );
    let last_event = env.events().all().last().expect("No events found");
    let expected_topics = vec![
        &env,
        symbol_short!("requested").into_val(&env),
        campaign_id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);
    let event_data: RequestCreated = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        RequestCreated {
            campaign_id,
            request_index: index,
            value: 250,
            recipient: vendor.clone(),
        }
    );

    client.approve_request(&campaign_id, &donor, &index);
    let last_event = env.events().all().last().expect("No events found");
    let expected_topics = vec![
        &env,
        symbol_short!("approved").into_val(&env),
        campaign_id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);
    let event_data: RequestApproved = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        RequestApproved {
            campaign_id,
            request_index: index,
            approver: donor.clone(),
            approval_count: 1,
        }
    );

    client.finalize_request(&campaign_id, &manager, &index);
    let last_event = env.events().all().last().expect("No events found");
    assert_eq!(last_event.0, client.address);
    let expected_topics = vec![
        &env,
        symbol_short!("finalized").into_val(&env),
        campaign_id.into_val(&env),
    ];
    assert_eq!(last_event.1, expected_topics);
    let event_data: RequestFinalized = last_event.2.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        RequestFinalized {
            campaign_id,
            request_index: index,
            recipient: vendor.clone(),
            value: 250,
        }
    );
}
