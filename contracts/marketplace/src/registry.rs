//! Asset custody bookkeeping. Every asset has exactly one custodian at any
//! time; listed assets are held by the contract's own address until
//! settlement or cancellation.

use soroban_sdk::{Address, Env, Vec};

use crate::errors::Error;
use crate::storage;

/// Look up the current custodian of an asset
pub fn custodian_of(e: &Env, asset_id: u64) -> Result<Address, Error> {
    storage::get_custodian(e, asset_id).ok_or(Error::UnknownAsset)
}

/// Move custody of an asset. Fails unless `from` is the recorded custodian.
pub fn transfer(e: &Env, asset_id: u64, from: &Address, to: &Address) -> Result<(), Error> {
    let custodian = custodian_of(e, asset_id)?;
    if custodian != *from {
        return Err(Error::NotCustodian);
    }
    storage::set_custodian(e, asset_id, to);
    Ok(())
}

/// Register `count` fresh assets with `to` as custodian of each.
/// Asset ids are monotonically increasing and never reused.
pub fn mint_assets(e: &Env, to: &Address, count: u32) -> Vec<u64> {
    let mut asset_ids = Vec::new(e);
    for _ in 0..count {
        let asset_id = storage::increment_asset_counter(e);
        storage::set_custodian(e, asset_id, to);
        asset_ids.push_back(asset_id);
    }
    asset_ids
}
