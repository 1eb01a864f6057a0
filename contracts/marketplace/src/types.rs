use soroban_sdk::{contracttype, Address, String};

/// Storage keys for the marketplace contract.
#[contracttype]
#[derive(Clone)]
pub enum StorageKey {
    /// Initialization flag
    Initialized,
    /// Marketplace configuration
    Config,
    /// Current custodian by asset id
    Custodian(u64),
    /// Last asset id counter
    AssetCounter,
    /// Fixed-price item by id
    MarketItem(u64),
    /// Auction item by id
    AuctionItem(u64),
    /// Last item id counter (shared by both listing kinds)
    ItemCounter,
    /// Append-only bid log by item id
    BidHistory(u64),
    /// Live escrow for the current highest bid, by (item id, bidder)
    EscrowedBid(u64, Address),
    /// Accumulated refund credit for outbid bidders, by (item id, bidder)
    RefundableBalance(u64, Address),
}

/// Fixed-price listing status
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum MarketItemStatus {
    /// Open for purchase
    Listed = 0,
    /// Bought, terminal
    Sold = 1,
    /// Withdrawn by the seller, terminal
    Cancelled = 2,
}

/// Auction listing status
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum AuctionStatus {
    /// Accepting bids
    Open = 0,
    /// Past end time, awaiting claim. Derived on reads, never stored.
    Ended = 1,
    /// Settled, terminal
    Claimed = 2,
}

/// Fixed-price listing
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MarketItem {
    /// Unique item identifier
    pub id: u64,
    /// Asset held by the contract while Listed
    pub asset_id: u64,
    /// Seller's address
    pub seller: Address,
    /// Exact purchase price
    pub price: i128,
    /// Current status
    pub status: MarketItemStatus,
    /// Creation timestamp
    pub created_at: u64,
}

/// Time-boxed auction listing
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionItem {
    /// Unique item identifier
    pub id: u64,
    /// Asset held by the contract until claim
    pub asset_id: u64,
    /// Seller's address
    pub seller: Address,
    /// Minimum bid threshold; also the initial highest_bid
    pub starting_price: i128,
    /// Absolute close timestamp, fixed at creation
    pub end_time: u64,
    /// Highest accepted bid; equals starting_price until the first bid
    pub highest_bid: i128,
    /// Account whose funds are in live escrow, None until the first bid
    pub highest_bidder: Option<Address>,
    /// Current status
    pub status: AuctionStatus,
    /// Creation timestamp
    pub created_at: u64,
}

/// One accepted bid, kept in the per-item history
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidRecord {
    pub bidder: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Marketplace configuration, written once by initialize
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Admin address allowed to mint
    pub admin: Address,
    /// Token used for all payments and escrow
    pub payment_token: Address,
    /// Collection name
    pub name: String,
    /// Collection symbol
    pub symbol: String,
}

/// Number of ledgers in a day (assuming ~5 second block time)
pub const DAY_IN_LEDGERS: u32 = 17280;

/// TTL extension amount for persistent storage (90 days)
pub const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;

/// TTL threshold for persistent storage
pub const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;
