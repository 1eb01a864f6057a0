use soroban_sdk::{Address, Env, Vec};

use crate::types::{
    AuctionItem, BidRecord, Config, MarketItem, StorageKey, PERSISTENT_TTL_AMOUNT,
    PERSISTENT_TTL_THRESHOLD,
};

// ============================================================================
// INITIALIZATION STORAGE
// ============================================================================

/// Check if contract is initialized
pub fn is_initialized(e: &Env) -> bool {
    e.storage()
        .instance()
        .get::<_, bool>(&StorageKey::Initialized)
        .unwrap_or(false)
}

/// Mark contract as initialized
pub fn set_initialized(e: &Env) {
    e.storage().instance().set(&StorageKey::Initialized, &true);
}

// ============================================================================
// CONFIG STORAGE
// ============================================================================

/// Get marketplace configuration
pub fn get_config(e: &Env) -> Option<Config> {
    let key = StorageKey::Config;
    let config = e.storage().persistent().get::<_, Config>(&key);
    if config.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    config
}

/// Set marketplace configuration
pub fn set_config(e: &Env, config: &Config) {
    let key = StorageKey::Config;
    e.storage().persistent().set(&key, config);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ============================================================================
// ASSET CUSTODY STORAGE
// ============================================================================

/// Get the recorded custodian of an asset
pub fn get_custodian(e: &Env, asset_id: u64) -> Option<Address> {
    let key = StorageKey::Custodian(asset_id);
    let custodian = e.storage().persistent().get::<_, Address>(&key);
    if custodian.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    custodian
}

/// Record the custodian of an asset
pub fn set_custodian(e: &Env, asset_id: u64, custodian: &Address) {
    let key = StorageKey::Custodian(asset_id);
    e.storage().persistent().set(&key, custodian);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

/// Allocate the next asset id
pub fn increment_asset_counter(e: &Env) -> u64 {
    let counter: u64 = e
        .storage()
        .instance()
        .get(&StorageKey::AssetCounter)
        .unwrap_or(0)
        + 1;
    e.storage()
        .instance()
        .set(&StorageKey::AssetCounter, &counter);
    counter
}

// ============================================================================
// ITEM STORAGE
// ============================================================================

/// Get a fixed-price item by id
pub fn get_market_item(e: &Env, item_id: u64) -> Option<MarketItem> {
    let key = StorageKey::MarketItem(item_id);
    let item = e.storage().persistent().get::<_, MarketItem>(&key);
    if item.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    item
}

/// Set a fixed-price item
pub fn set_market_item(e: &Env, item: &MarketItem) {
    let key = StorageKey::MarketItem(item.id);
    e.storage().persistent().set(&key, item);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

/// Get an auction item by id
pub fn get_auction_item(e: &Env, item_id: u64) -> Option<AuctionItem> {
    let key = StorageKey::AuctionItem(item_id);
    let item = e.storage().persistent().get::<_, AuctionItem>(&key);
    if item.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    item
}

/// Set an auction item
pub fn set_auction_item(e: &Env, item: &AuctionItem) {
    let key = StorageKey::AuctionItem(item.id);
    e.storage().persistent().set(&key, item);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

/// Get the last allocated item id
pub fn get_item_counter(e: &Env) -> u64 {
    e.storage()
        .instance()
        .get(&StorageKey::ItemCounter)
        .unwrap_or(0)
}

/// Allocate the next item id (shared by market and auction items)
pub fn increment_item_counter(e: &Env) -> u64 {
    let counter = get_item_counter(e) + 1;
    e.storage()
        .instance()
        .set(&StorageKey::ItemCounter, &counter);
    counter
}

// ============================================================================
// BID HISTORY STORAGE
// ============================================================================

/// Get the full bid history for an item, oldest first
pub fn get_bid_history(e: &Env, item_id: u64) -> Vec<BidRecord> {
    let key = StorageKey::BidHistory(item_id);
    let history = e
        .storage()
        .persistent()
        .get::<_, Vec<BidRecord>>(&key)
        .unwrap_or(Vec::new(e));
    if !history.is_empty() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    history
}

/// Append an accepted bid to an item's history
pub fn add_bid_to_history(e: &Env, item_id: u64, bid: BidRecord) {
    let key = StorageKey::BidHistory(item_id);
    let mut history = get_bid_history(e, item_id);
    history.push_back(bid);
    e.storage().persistent().set(&key, &history);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ============================================================================
// ESCROW STORAGE
// ============================================================================

/// Get the live escrowed amount for a bidder on an item
pub fn get_escrowed_bid(e: &Env, item_id: u64, bidder: &Address) -> i128 {
    let key = StorageKey::EscrowedBid(item_id, bidder.clone());
    e.storage().persistent().get(&key).unwrap_or(0)
}

/// Record the live escrowed amount for a bidder on an item
pub fn set_escrowed_bid(e: &Env, item_id: u64, bidder: &Address, amount: i128) {
    let key = StorageKey::EscrowedBid(item_id, bidder.clone());
    e.storage().persistent().set(&key, &amount);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

/// Clear the live escrow entry for a bidder on an item
pub fn remove_escrowed_bid(e: &Env, item_id: u64, bidder: &Address) {
    let key = StorageKey::EscrowedBid(item_id, bidder.clone());
    e.storage().persistent().remove(&key);
}

/// Get the accumulated refund credit for a bidder on an item
pub fn get_refundable_balance(e: &Env, item_id: u64, bidder: &Address) -> i128 {
    let key = StorageKey::RefundableBalance(item_id, bidder.clone());
    e.storage().persistent().get(&key).unwrap_or(0)
}

/// Add to a bidder's refund credit on an item
pub fn add_refundable_balance(e: &Env, item_id: u64, bidder: &Address, amount: i128) {
    let key = StorageKey::RefundableBalance(item_id, bidder.clone());
    let credit = get_refundable_balance(e, item_id, bidder) + amount;
    e.storage().persistent().set(&key, &credit);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

/// Clear a bidder's refund credit on an item
pub fn remove_refundable_balance(e: &Env, item_id: u64, bidder: &Address) {
    let key = StorageKey::RefundableBalance(item_id, bidder.clone());
    e.storage().persistent().remove(&key);
}
