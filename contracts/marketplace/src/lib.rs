#![no_std]

mod errors;
mod events;
mod registry;
mod storage;
mod types;

#[cfg(test)]
mod test;

use soroban_sdk::{contract, contractimpl, token, Address, Env, String, Vec};

use crate::errors::Error;
use crate::events::*;
use crate::types::*;

// ============================================================================
// Constants
// ============================================================================

/// Number of ledgers in a day (assuming ~5 second block time)
const DAY_IN_LEDGERS: u32 = 17280;

/// TTL extension amount for instance storage (30 days)
const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// TTL threshold before extending (29 days)
const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;

// ============================================================================
// Contract
// ============================================================================

/// NFT marketplace escrow and auction engine.
///
/// The contract is the single authority over asset custody, fixed-price and
/// auction listings, bid escrow, and settlement:
/// - Minted assets are tracked in an internal custody registry
/// - Listed assets are held by the contract until sold, claimed, or cancelled
/// - Competing bids are escrowed; outbid bidders receive a withdrawable credit
/// - Every listing settles at most once
#[contract]
pub struct Marketplace;

#[contractimpl]
impl Marketplace {
    // ========================================================================
    // INITIALIZATION
    // ========================================================================

    /// Initialize the marketplace. One-shot; never re-enterable.
    ///
    /// # Arguments
    /// * `admin` - Address allowed to mint new assets
    /// * `payment_token` - Token used for all payments and bid escrow
    /// * `name` - Collection name
    /// * `symbol` - Collection symbol
    ///
    /// # Errors
    /// * `Error::AlreadyInitialized` - If the contract has already been initialized
    pub fn initialize(
        e: &Env,
        admin: Address,
        payment_token: Address,
        name: String,
        symbol: String,
    ) -> Result<(), Error> {
        admin.require_auth();

        if storage::is_initialized(e) {
            return Err(Error::AlreadyInitialized);
        }

        let config = Config {
            admin: admin.clone(),
            payment_token,
            name: name.clone(),
            symbol: symbol.clone(),
        };

        storage::set_config(e, &config);
        storage::set_initialized(e);
        Self::extend_instance_ttl(e);

        InitializedEventData {
            admin,
            name,
            symbol,
        }
        .publish(e);

        Ok(())
    }

    /// Get marketplace configuration
    pub fn get_config(e: &Env) -> Result<Config, Error> {
        storage::get_config(e).ok_or(Error::NotInitialized)
    }

    // ========================================================================
    // ISSUANCE
    // ========================================================================

    /// Mint `count` new assets to `to` (admin only).
    ///
    /// # Returns
    /// * The newly allocated asset ids, in increasing order
    ///
    /// # Errors
    /// * `Error::Unauthorized` - If caller is not the configured admin
    /// * `Error::InvalidAmount` - If `count` is zero
    /// * `Error::InvalidRecipient` - If `to` is the contract's own address
    pub fn mint(e: &Env, admin: Address, to: Address, count: u32) -> Result<Vec<u64>, Error> {
        admin.require_auth();

        let config = storage::get_config(e).ok_or(Error::NotInitialized)?;

        if admin != config.admin {
            return Err(Error::Unauthorized);
        }

        if count == 0 {
            return Err(Error::InvalidAmount);
        }

        // The contract address is reserved for listing-held custody.
        if to == e.current_contract_address() {
            return Err(Error::InvalidRecipient);
        }

        let asset_ids = registry::mint_assets(e, &to, count);

        AssetsMintedEventData {
            to,
            first_asset_id: asset_ids.get(0).unwrap_or(0),
            count,
        }
        .publish(e);

        Self::extend_instance_ttl(e);
        Ok(asset_ids)
    }

    /// Get the current custodian of an asset. While an asset is listed the
    /// custodian is the contract's own address.
    pub fn custodian_of(e: &Env, asset_id: u64) -> Result<Address, Error> {
        registry::custodian_of(e, asset_id)
    }

    // ========================================================================
    // LISTING LEDGER
    // ========================================================================

    /// List an asset at a fixed price. Custody moves to the contract for the
    /// duration of the listing.
    ///
    /// # Errors
    /// * `Error::UnknownAsset` - If the asset id is not registered
    /// * `Error::NotOwner` - If `seller` is not the asset's custodian
    /// * `Error::InvalidPrice` - If `price` is not positive
    pub fn create_market_item(
        e: &Env,
        seller: Address,
        asset_id: u64,
        price: i128,
    ) -> Result<u64, Error> {
        seller.require_auth();

        storage::get_config(e).ok_or(Error::NotInitialized)?;

        let custodian = registry::custodian_of(e, asset_id)?;
        if custodian != seller {
            return Err(Error::NotOwner);
        }

        if price <= 0 {
            return Err(Error::InvalidPrice);
        }

        registry::transfer(e, asset_id, &seller, &e.current_contract_address())?;

        let item_id = storage::increment_item_counter(e);
        let item = MarketItem {
            id: item_id,
            asset_id,
            seller: seller.clone(),
            price,
            status: MarketItemStatus::Listed,
            created_at: e.ledger().timestamp(),
        };
        storage::set_market_item(e, &item);

        MarketItemListedEventData {
            seller,
            item_id,
            asset_id,
            price,
        }
        .publish(e);

        Self::extend_instance_ttl(e);
        Ok(item_id)
    }

    /// List an asset for auction until `end_time`. Custody moves to the
    /// contract until the auction is claimed.
    ///
    /// The item starts with `highest_bid` equal to `starting_price` and no
    /// bidder, so the first accepted bid must exceed the starting price.
    ///
    /// # Errors
    /// * `Error::UnknownAsset` - If the asset id is not registered
    /// * `Error::NotOwner` - If `seller` is not the asset's custodian
    /// * `Error::InvalidPrice` - If `starting_price` is not positive
    /// * `Error::InvalidEndTime` - If `end_time` is not strictly in the future
    pub fn create_auction_item(
        e: &Env,
        seller: Address,
        asset_id: u64,
        starting_price: i128,
        end_time: u64,
    ) -> Result<u64, Error> {
        seller.require_auth();

        storage::get_config(e).ok_or(Error::NotInitialized)?;

        let custodian = registry::custodian_of(e, asset_id)?;
        if custodian != seller {
            return Err(Error::NotOwner);
        }

        if starting_price <= 0 {
            return Err(Error::InvalidPrice);
        }

        if end_time <= e.ledger().timestamp() {
            return Err(Error::InvalidEndTime);
        }

        registry::transfer(e, asset_id, &seller, &e.current_contract_address())?;

        let item_id = storage::increment_item_counter(e);
        let item = AuctionItem {
            id: item_id,
            asset_id,
            seller: seller.clone(),
            starting_price,
            end_time,
            highest_bid: starting_price,
            highest_bidder: None,
            status: AuctionStatus::Open,
            created_at: e.ledger().timestamp(),
        };
        storage::set_auction_item(e, &item);

        AuctionItemListedEventData {
            seller,
            item_id,
            asset_id,
            starting_price,
            end_time,
        }
        .publish(e);

        Self::extend_instance_ttl(e);
        Ok(item_id)
    }

    /// Cancel a fixed-price listing (seller only). Custody returns to the
    /// seller and the item becomes terminal.
    pub fn cancel_market_item(e: &Env, seller: Address, item_id: u64) -> Result<(), Error> {
        seller.require_auth();

        let mut item = storage::get_market_item(e, item_id).ok_or(Error::UnknownItem)?;

        if seller != item.seller {
            return Err(Error::Unauthorized);
        }

        if item.status != MarketItemStatus::Listed {
            return Err(Error::ItemNotListed);
        }

        registry::transfer(e, item.asset_id, &e.current_contract_address(), &item.seller)?;

        item.status = MarketItemStatus::Cancelled;
        storage::set_market_item(e, &item);

        MarketItemCancelledEventData { seller, item_id }.publish(e);

        Self::extend_instance_ttl(e);
        Ok(())
    }

    /// Get a fixed-price item by id
    pub fn get_market_item(e: &Env, item_id: u64) -> Result<MarketItem, Error> {
        storage::get_market_item(e, item_id).ok_or(Error::UnknownItem)
    }

    /// Get an auction item by id. Items past their end time that have not
    /// been claimed are reported with status `Ended`.
    pub fn get_auction_item(e: &Env, item_id: u64) -> Result<AuctionItem, Error> {
        let item = storage::get_auction_item(e, item_id).ok_or(Error::UnknownItem)?;
        Ok(Self::with_derived_status(e, item))
    }

    /// Get all fixed-price items still open for purchase, in creation order.
    /// Read-only snapshot; never mutates state.
    pub fn fetch_fix_price_items(e: &Env) -> Vec<MarketItem> {
        let mut results: Vec<MarketItem> = Vec::new(e);
        for item_id in 1..=storage::get_item_counter(e) {
            if let Some(item) = storage::get_market_item(e, item_id) {
                if item.status == MarketItemStatus::Listed {
                    results.push_back(item);
                }
            }
        }
        results
    }

    /// Get all unclaimed auction items, in creation order, with derived
    /// status. Read-only snapshot; never mutates state.
    pub fn fetch_auction_items(e: &Env) -> Vec<AuctionItem> {
        let mut results: Vec<AuctionItem> = Vec::new(e);
        for item_id in 1..=storage::get_item_counter(e) {
            if let Some(item) = storage::get_auction_item(e, item_id) {
                if item.status != AuctionStatus::Claimed {
                    results.push_back(Self::with_derived_status(e, item));
                }
            }
        }
        results
    }

    // ========================================================================
    // BIDDING
    // ========================================================================

    /// Place a bid on an open auction.
    ///
    /// `amount` is escrowed from the bidder in the same invocation. The
    /// previous highest bidder's escrow, if any, becomes a refund credit
    /// withdrawable via `withdraw_refund`; it is never silently dropped.
    ///
    /// # Errors
    /// * `Error::UnknownItem` - If no auction item exists with this id
    /// * `Error::AuctionClosed` - If past end time or already claimed
    /// * `Error::BidTooLow` - If `amount` does not exceed the highest bid
    /// * `Error::InsufficientFunds` - If the bidder cannot cover `amount`
    pub fn bid(e: &Env, item_id: u64, bidder: Address, amount: i128) -> Result<(), Error> {
        bidder.require_auth();

        let config = storage::get_config(e).ok_or(Error::NotInitialized)?;
        let mut item = storage::get_auction_item(e, item_id).ok_or(Error::UnknownItem)?;

        if item.status != AuctionStatus::Open || e.ledger().timestamp() >= item.end_time {
            return Err(Error::AuctionClosed);
        }

        if amount <= item.highest_bid {
            return Err(Error::BidTooLow);
        }

        let token_client = token::TokenClient::new(e, &config.payment_token);
        if token_client.balance(&bidder) < amount {
            return Err(Error::InsufficientFunds);
        }

        // All preconditions hold; mutate.
        if let Some(previous_bidder) = &item.highest_bidder {
            let escrowed = storage::get_escrowed_bid(e, item_id, previous_bidder);
            storage::remove_escrowed_bid(e, item_id, previous_bidder);
            storage::add_refundable_balance(e, item_id, previous_bidder, escrowed);

            RefundCreditedEventData {
                bidder: previous_bidder.clone(),
                item_id,
                amount: escrowed,
            }
            .publish(e);
        }

        token_client.transfer(&bidder, &e.current_contract_address(), &amount);
        storage::set_escrowed_bid(e, item_id, &bidder, amount);

        item.highest_bid = amount;
        item.highest_bidder = Some(bidder.clone());
        storage::set_auction_item(e, &item);

        let record = BidRecord {
            bidder: bidder.clone(),
            amount,
            timestamp: e.ledger().timestamp(),
        };
        storage::add_bid_to_history(e, item_id, record);

        BidPlacedEventData {
            bidder,
            item_id,
            amount,
        }
        .publish(e);

        Self::extend_instance_ttl(e);
        Ok(())
    }

    /// Get every bid ever accepted for an item, oldest first
    pub fn all_bidders(e: &Env, item_id: u64) -> Result<Vec<BidRecord>, Error> {
        if storage::get_auction_item(e, item_id).is_none() {
            return Err(Error::UnknownItem);
        }
        Ok(storage::get_bid_history(e, item_id))
    }

    /// Get the stored end time of an auction
    pub fn auction_end_time(e: &Env, item_id: u64) -> Result<u64, Error> {
        let item = storage::get_auction_item(e, item_id).ok_or(Error::UnknownItem)?;
        Ok(item.end_time)
    }

    /// Get a bidder's withdrawable refund credit on an item
    pub fn refundable_balance(e: &Env, item_id: u64, bidder: Address) -> Result<i128, Error> {
        if storage::get_auction_item(e, item_id).is_none() {
            return Err(Error::UnknownItem);
        }
        Ok(storage::get_refundable_balance(e, item_id, &bidder))
    }

    /// Withdraw an outbid refund credit in full.
    ///
    /// # Errors
    /// * `Error::UnknownItem` - If no auction item exists with this id
    /// * `Error::NothingToWithdraw` - If the bidder has no credit on this item
    pub fn withdraw_refund(e: &Env, item_id: u64, bidder: Address) -> Result<i128, Error> {
        bidder.require_auth();

        let config = storage::get_config(e).ok_or(Error::NotInitialized)?;

        if storage::get_auction_item(e, item_id).is_none() {
            return Err(Error::UnknownItem);
        }

        let credit = storage::get_refundable_balance(e, item_id, &bidder);
        if credit == 0 {
            return Err(Error::NothingToWithdraw);
        }

        let token_client = token::TokenClient::new(e, &config.payment_token);
        token_client.transfer(&e.current_contract_address(), &bidder, &credit);
        storage::remove_refundable_balance(e, item_id, &bidder);

        RefundWithdrawnEventData {
            bidder,
            item_id,
            amount: credit,
        }
        .publish(e);

        Self::extend_instance_ttl(e);
        Ok(credit)
    }

    // ========================================================================
    // SETTLEMENT
    // ========================================================================

    /// Buy a fixed-price item. Payment must match the listed price exactly.
    ///
    /// Credits the price to the seller, moves asset custody to the buyer, and
    /// marks the item Sold in one invocation. Succeeds at most once per item;
    /// any retry fails with `ItemNotListed`.
    ///
    /// # Errors
    /// * `Error::UnknownItem` - If no market item exists with this id
    /// * `Error::ItemNotListed` - If the item is already Sold or Cancelled
    /// * `Error::WrongPayment` - If `payment` differs from the listed price
    pub fn fix_buy(e: &Env, item_id: u64, buyer: Address, payment: i128) -> Result<(), Error> {
        buyer.require_auth();

        let config = storage::get_config(e).ok_or(Error::NotInitialized)?;
        let mut item = storage::get_market_item(e, item_id).ok_or(Error::UnknownItem)?;

        if item.status != MarketItemStatus::Listed {
            return Err(Error::ItemNotListed);
        }

        if payment != item.price {
            return Err(Error::WrongPayment);
        }

        let token_client = token::TokenClient::new(e, &config.payment_token);
        token_client.transfer(&buyer, &item.seller, &item.price);

        registry::transfer(e, item.asset_id, &e.current_contract_address(), &buyer)?;

        item.status = MarketItemStatus::Sold;
        storage::set_market_item(e, &item);

        ItemSoldEventData {
            buyer,
            seller: item.seller.clone(),
            item_id,
            price: item.price,
        }
        .publish(e);

        Self::extend_instance_ttl(e);
        Ok(())
    }

    /// Claim an ended auction.
    ///
    /// Pays the final highest bid to the seller and moves asset custody to
    /// the winner. With no bids the asset returns to the seller and no funds
    /// move. Succeeds at most once per item.
    ///
    /// # Errors
    /// * `Error::UnknownItem` - If no auction item exists with this id
    /// * `Error::AuctionStillOpen` - If the end time has not been reached
    /// * `Error::AlreadyClaimed` - If the auction was already claimed
    pub fn claim(e: &Env, item_id: u64) -> Result<(), Error> {
        let config = storage::get_config(e).ok_or(Error::NotInitialized)?;
        let mut item = storage::get_auction_item(e, item_id).ok_or(Error::UnknownItem)?;

        if item.status == AuctionStatus::Claimed {
            return Err(Error::AlreadyClaimed);
        }

        if e.ledger().timestamp() < item.end_time {
            return Err(Error::AuctionStillOpen);
        }

        match &item.highest_bidder {
            Some(winner) => {
                let token_client = token::TokenClient::new(e, &config.payment_token);
                token_client.transfer(&e.current_contract_address(), &item.seller, &item.highest_bid);
                storage::remove_escrowed_bid(e, item_id, winner);
                registry::transfer(e, item.asset_id, &e.current_contract_address(), winner)?;
            }
            None => {
                // No bids were ever placed; the asset goes back to the seller.
                registry::transfer(e, item.asset_id, &e.current_contract_address(), &item.seller)?;
            }
        }

        item.status = AuctionStatus::Claimed;
        storage::set_auction_item(e, &item);

        AuctionClaimedEventData {
            seller: item.seller.clone(),
            item_id,
            winner: item.highest_bidder.clone(),
            final_price: item.highest_bid,
        }
        .publish(e);

        Self::extend_instance_ttl(e);
        Ok(())
    }

    // ========================================================================
    // INTERNAL HELPERS
    // ========================================================================

    /// Present an unclaimed auction past its end time as Ended. The stored
    /// status only ever moves Open -> Claimed; Ended is a read-side view.
    fn with_derived_status(e: &Env, mut item: AuctionItem) -> AuctionItem {
        if item.status == AuctionStatus::Open && e.ledger().timestamp() >= item.end_time {
            item.status = AuctionStatus::Ended;
        }
        item
    }

    /// Extend the TTL of instance storage.
    /// Called internally during state-changing operations.
    fn extend_instance_ttl(e: &Env) {
        e.storage()
            .instance()
            .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
    }
}
