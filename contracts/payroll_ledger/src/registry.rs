//! Exchange rates published by the oracle.
//!
//! A rate is "reference-currency units per smallest unit of the asset".
//! Nothing derived from a rate is cached: valuations read it again every
//! time, so a new rate reprices existing balances immediately.

use soroban_sdk::{Address, Env, Vec};

use crate::storage::{PayrollError, StorageKey};

pub fn set_exchange_rate(env: &Env, asset: &Address, rate: i128) -> Result<(), PayrollError> {
    if rate <= 0 {
        return Err(PayrollError::InvalidRate);
    }

    let storage = env.storage().persistent();
    let key = StorageKey::Rate(asset.clone());
    if !storage.has(&key) {
        let mut assets = get_supported_assets(env);
        assets.push_back(asset.clone());
        storage.set(&StorageKey::RatedAssets, &assets);
    }
    storage.set(&key, &rate);
    Ok(())
}

pub fn get_exchange_rate(env: &Env, asset: &Address) -> Result<i128, PayrollError> {
    env.storage()
        .persistent()
        .get(&StorageKey::Rate(asset.clone()))
        .ok_or(PayrollError::UnknownAsset)
}

pub fn get_supported_assets(env: &Env) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&StorageKey::RatedAssets)
        .unwrap_or(Vec::new(env))
}
