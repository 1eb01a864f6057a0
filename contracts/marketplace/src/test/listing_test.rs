use crate::test::{advance_ledger, setup_test};
use crate::types::{AuctionStatus, MarketItemStatus};
use crate::Error;
use soroban_sdk::Env;

fn end_time_in(env: &Env, seconds: u64) -> u64 {
    env.ledger().timestamp() + seconds
}

#[test]
fn test_create_market_item() {
    let (_env, client, admin, seller, _, _, _) = setup_test();
    client.mint(&admin, &seller, &1);

    let item_id = client.create_market_item(&seller, &1, &1000);
    assert_eq!(item_id, 1);

    let item = client.get_market_item(&item_id);
    assert_eq!(item.asset_id, 1);
    assert_eq!(item.seller, seller);
    assert_eq!(item.price, 1000);
    assert_eq!(item.status, MarketItemStatus::Listed);

    // Custody is held by the contract while listed.
    assert_eq!(client.custodian_of(&1), client.address);
}

#[test]
fn test_create_market_item_not_owner() {
    let (_env, client, admin, seller, buyer, _, _) = setup_test();
    client.mint(&admin, &seller, &1);

    let result = client.try_create_market_item(&buyer, &1, &1000);
    assert_eq!(result, Err(Ok(Error::NotOwner)));
}

#[test]
fn test_create_market_item_invalid_price() {
    let (_env, client, admin, seller, _, _, _) = setup_test();
    client.mint(&admin, &seller, &1);

    let result = client.try_create_market_item(&seller, &1, &0);
    assert_eq!(result, Err(Ok(Error::InvalidPrice)));
}

#[test]
fn test_create_market_item_unknown_asset() {
    let (_env, client, _, seller, _, _, _) = setup_test();
    let result = client.try_create_market_item(&seller, &7, &1000);
    assert_eq!(result, Err(Ok(Error::UnknownAsset)));
}

#[test]
fn test_listed_asset_cannot_be_listed_again() {
    let (_env, client, admin, seller, _, _, _) = setup_test();
    client.mint(&admin, &seller, &1);
    client.create_market_item(&seller, &1, &1000);

    // The contract holds custody now, so the seller no longer owns the asset.
    let result = client.try_create_market_item(&seller, &1, &2000);
    assert_eq!(result, Err(Ok(Error::NotOwner)));
}

#[test]
fn test_create_auction_item() {
    let (env, client, admin, seller, _, _, _) = setup_test();
    client.mint(&admin, &seller, &1);

    let end_time = end_time_in(&env, 3600);
    let item_id = client.create_auction_item(&seller, &1, &3000, &end_time);
    assert_eq!(item_id, 1);

    let item = client.get_auction_item(&item_id);
    assert_eq!(item.asset_id, 1);
    assert_eq!(item.seller, seller);
    assert_eq!(item.starting_price, 3000);
    assert_eq!(item.highest_bid, 3000);
    assert_eq!(item.highest_bidder, None);
    assert_eq!(item.end_time, end_time);
    assert_eq!(item.status, AuctionStatus::Open);

    assert_eq!(client.auction_end_time(&item_id), end_time);
    assert_eq!(client.custodian_of(&1), client.address);
}

#[test]
fn test_create_auction_item_invalid_end_time() {
    let (env, client, admin, seller, _, _, _) = setup_test();
    client.mint(&admin, &seller, &1);

    let now = env.ledger().timestamp();
    let result = client.try_create_auction_item(&seller, &1, &3000, &now);
    assert_eq!(result, Err(Ok(Error::InvalidEndTime)));
}

#[test]
fn test_create_auction_item_invalid_price() {
    let (env, client, admin, seller, _, _, _) = setup_test();
    client.mint(&admin, &seller, &1);

    let end_time = end_time_in(&env, 3600);
    let result = client.try_create_auction_item(&seller, &1, &0, &end_time);
    assert_eq!(result, Err(Ok(Error::InvalidPrice)));
}

#[test]
fn test_item_ids_shared_across_listing_kinds() {
    let (env, client, admin, seller, _, _, _) = setup_test();
    client.mint(&admin, &seller, &2);

    let market_id = client.create_market_item(&seller, &1, &1000);
    let auction_id = client.create_auction_item(&seller, &2, &3000, &end_time_in(&env, 3600));

    assert_eq!(market_id, 1);
    assert_eq!(auction_id, 2);
}

#[test]
fn test_cancel_market_item() {
    let (_env, client, admin, seller, _, _, _) = setup_test();
    client.mint(&admin, &seller, &1);
    let item_id = client.create_market_item(&seller, &1, &1000);

    client.cancel_market_item(&seller, &item_id);

    let item = client.get_market_item(&item_id);
    assert_eq!(item.status, MarketItemStatus::Cancelled);
    assert_eq!(client.custodian_of(&1), seller);

    // Cancelled is terminal.
    let result = client.try_cancel_market_item(&seller, &item_id);
    assert_eq!(result, Err(Ok(Error::ItemNotListed)));
}

#[test]
fn test_cancel_market_item_not_seller() {
    let (_env, client, admin, seller, buyer, _, _) = setup_test();
    client.mint(&admin, &seller, &1);
    let item_id = client.create_market_item(&seller, &1, &1000);

    let result = client.try_cancel_market_item(&buyer, &item_id);
    assert_eq!(result, Err(Ok(Error::Unauthorized)));
}

#[test]
fn test_fetch_fix_price_items_snapshot() {
    let (_env, client, admin, seller, buyer, _, _) = setup_test();
    client.mint(&admin, &seller, &3);

    let first = client.create_market_item(&seller, &1, &1000);
    let second = client.create_market_item(&seller, &2, &2000);
    let third = client.create_market_item(&seller, &3, &3000);

    client.fix_buy(&second, &buyer, &2000);
    client.cancel_market_item(&seller, &third);

    let items = client.fetch_fix_price_items();
    assert_eq!(items.len(), 1);
    assert_eq!(items.get(0).unwrap().id, first);
}

#[test]
fn test_fetch_auction_items_reports_derived_ended_status() {
    let (env, client, admin, seller, _, _, _) = setup_test();
    client.mint(&admin, &seller, &1);
    let item_id = client.create_auction_item(&seller, &1, &3000, &end_time_in(&env, 3600));

    advance_ledger(&env, 3601);

    let items = client.fetch_auction_items();
    assert_eq!(items.len(), 1);
    assert_eq!(items.get(0).unwrap().status, AuctionStatus::Ended);
    assert_eq!(client.get_auction_item(&item_id).status, AuctionStatus::Ended);
}

#[test]
fn test_fetch_auction_items_excludes_claimed() {
    let (env, client, admin, seller, _, _, _) = setup_test();
    client.mint(&admin, &seller, &2);
    let first = client.create_auction_item(&seller, &1, &3000, &end_time_in(&env, 3600));
    let second = client.create_auction_item(&seller, &2, &3000, &end_time_in(&env, 7200));

    advance_ledger(&env, 3601);
    client.claim(&first);

    let items = client.fetch_auction_items();
    assert_eq!(items.len(), 1);
    assert_eq!(items.get(0).unwrap().id, second);
}
