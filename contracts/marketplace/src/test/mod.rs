pub mod listing_test;

use crate::{Marketplace, MarketplaceClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token, Address, Env, String,
};

pub fn setup_test() -> (
    Env,
    MarketplaceClient<'static>,
    Address,
    Address,
    Address,
    token::TokenClient<'static>,
    token::StellarAssetClient<'static>,
) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(Marketplace, ());
    let client = MarketplaceClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    let seller = Address::generate(&env);
    let buyer = Address::generate(&env);

    let token_admin = Address::generate(&env);
    let token_contract = env.register_stellar_asset_contract_v2(token_admin.clone());
    let token_address = token_contract.address();
    let token_client = token::TokenClient::new(&env, &token_address);
    let token_admin_client = token::StellarAssetClient::new(&env, &token_address);

    token_admin_client.mint(&seller, &10_000_000);
    token_admin_client.mint(&buyer, &10_000_000);

    client.initialize(
        &admin,
        &token_address,
        &String::from_str(&env, "Collectibles"),
        &String::from_str(&env, "CLX"),
    );

    (env, client, admin, seller, buyer, token_client, token_admin_client)
}

pub fn advance_ledger(env: &Env, seconds: u64) {
    env.ledger().with_mut(|li| {
        li.timestamp += seconds;
    });
}
