use soroban_sdk::contracterror;

/// Error codes for the marketplace contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Contract has already been initialized
    AlreadyInitialized = 1,
    /// Contract has not been initialized
    NotInitialized = 2,
    /// Caller does not have required permissions
    Unauthorized = 3,
    /// Asset id is not registered
    UnknownAsset = 4,
    /// Transfer source is not the recorded custodian
    NotCustodian = 5,
    /// Mint recipient is not a valid owner account
    InvalidRecipient = 6,
    /// Mint count must be positive
    InvalidAmount = 7,
    /// Caller does not own the asset being listed
    NotOwner = 8,
    /// Listing price must be positive
    InvalidPrice = 9,
    /// Auction end time must be in the future
    InvalidEndTime = 10,
    /// No item with the given id
    UnknownItem = 11,
    /// Auction has ended or is already claimed
    AuctionClosed = 12,
    /// Bid does not exceed the current highest bid
    BidTooLow = 13,
    /// Bidder balance cannot cover the bid
    InsufficientFunds = 14,
    /// Market item is not in Listed status
    ItemNotListed = 15,
    /// Payment does not match the listed price exactly
    WrongPayment = 16,
    /// Auction end time has not been reached
    AuctionStillOpen = 17,
    /// Auction has already been claimed
    AlreadyClaimed = 18,
    /// No refundable balance to withdraw
    NothingToWithdraw = 19,
}
