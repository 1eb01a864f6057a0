use soroban_sdk::{contractevent, Address, String};

/// Event emitted when the marketplace is initialized
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEventData {
    #[topic]
    pub admin: Address,
    pub name: String,
    pub symbol: String,
}

/// Event emitted when new assets are minted
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssetsMintedEventData {
    #[topic]
    pub to: Address,
    pub first_asset_id: u64,
    pub count: u32,
}

/// Event emitted when an asset is listed at a fixed price
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MarketItemListedEventData {
    #[topic]
    pub seller: Address,
    pub item_id: u64,
    pub asset_id: u64,
    pub price: i128,
}

/// Event emitted when an asset is listed for auction
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionItemListedEventData {
    #[topic]
    pub seller: Address,
    pub item_id: u64,
    pub asset_id: u64,
    pub starting_price: i128,
    pub end_time: u64,
}

/// Event emitted when a fixed-price listing is cancelled
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MarketItemCancelledEventData {
    #[topic]
    pub seller: Address,
    pub item_id: u64,
}

/// Event emitted when a bid is accepted
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidPlacedEventData {
    #[topic]
    pub bidder: Address,
    pub item_id: u64,
    pub amount: i128,
}

/// Event emitted when an outbid bidder's escrow becomes a refund credit
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RefundCreditedEventData {
    #[topic]
    pub bidder: Address,
    pub item_id: u64,
    pub amount: i128,
}

/// Event emitted when a bidder withdraws a refund credit
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RefundWithdrawnEventData {
    #[topic]
    pub bidder: Address,
    pub item_id: u64,
    pub amount: i128,
}

/// Event emitted when a fixed-price item is sold
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ItemSoldEventData {
    #[topic]
    pub buyer: Address,
    #[topic]
    pub seller: Address,
    pub item_id: u64,
    pub price: i128,
}

/// Event emitted when an auction is claimed
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionClaimedEventData {
    #[topic]
    pub seller: Address,
    pub item_id: u64,
    pub winner: Option<Address>,
    pub final_price: i128,
}
