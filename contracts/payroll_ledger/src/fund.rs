//! Per-asset balances held by the payroll and their total valuation.
//!
//! The recorded balance only ever changes together with a token transfer:
//! credits are written after the inbound transfer succeeds, and a debit whose
//! outbound transfer fails is restored before the error is returned.

use soroban_sdk::{log, token, Address, Env, Vec};

use crate::events::{emit_funds_deposited, FundsDeposited};
use crate::registry;
use crate::storage::{PayrollError, StorageKey};

pub fn get_balance(env: &Env, asset: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&StorageKey::Balance(asset.clone()))
        .unwrap_or(0)
}

fn set_balance(env: &Env, asset: &Address, balance: i128) {
    let storage = env.storage().persistent();
    let mut assets = fund_assets(env);
    if !assets.contains(asset) {
        assets.push_back(asset.clone());
        storage.set(&StorageKey::FundAssets, &assets);
    }
    storage.set(&StorageKey::Balance(asset.clone()), &balance);
}

/// Every asset that was ever credited, including drained ones.
pub fn fund_assets(env: &Env) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&StorageKey::FundAssets)
        .unwrap_or(Vec::new(env))
}

fn transfer(
    env: &Env,
    asset: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), PayrollError> {
    let client = token::Client::new(env, asset);
    match client.try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "transfer of {} {} declined", amount, asset);
            Err(PayrollError::TransferFailed)
        }
    }
}

/// Pulls `amount` of `asset` from `payer` into the payroll.
pub fn deposit(env: &Env, asset: &Address, amount: i128, payer: &Address) -> Result<(), PayrollError> {
    if amount <= 0 {
        return Err(PayrollError::InvalidAmount);
    }
    let new_balance = get_balance(env, asset)
        .checked_add(amount)
        .ok_or(PayrollError::Overflow)?;

    transfer(env, asset, payer, &env.current_contract_address(), amount)?;
    set_balance(env, asset, new_balance);

    emit_funds_deposited(
        env,
        FundsDeposited {
            asset: asset.clone(),
            payer: payer.clone(),
            amount,
        },
    );
    Ok(())
}

/// Sends `amount` of `asset` out of the payroll.
pub fn withdraw(
    env: &Env,
    asset: &Address,
    amount: i128,
    recipient: &Address,
) -> Result<(), PayrollError> {
    if amount <= 0 {
        return Err(PayrollError::InvalidAmount);
    }
    let balance = get_balance(env, asset);
    if balance < amount {
        return Err(PayrollError::InsufficientFunds);
    }

    set_balance(env, asset, balance - amount);
    if let Err(err) = transfer(env, asset, &env.current_contract_address(), recipient, amount) {
        set_balance(env, asset, balance);
        return Err(err);
    }
    Ok(())
}

/// Σ(balance × rate) over every asset with a nonzero balance.
pub fn total_valuation(env: &Env) -> Result<i128, PayrollError> {
    let mut total: i128 = 0;
    for asset in fund_assets(env).iter() {
        let balance = get_balance(env, &asset);
        if balance == 0 {
            continue;
        }
        let rate = registry::get_exchange_rate(env, &asset)?;
        let value = balance.checked_mul(rate).ok_or(PayrollError::Overflow)?;
        total = total.checked_add(value).ok_or(PayrollError::Overflow)?;
    }
    Ok(total)
}

/// Moves every nonzero balance to `recipient`. Returns how many assets were
/// drained.
pub fn drain(env: &Env, recipient: &Address) -> Result<u32, PayrollError> {
    let mut drained = 0u32;
    for asset in fund_assets(env).iter() {
        let balance = get_balance(env, &asset);
        if balance == 0 {
            continue;
        }
        withdraw(env, &asset, balance, recipient)?;
        drained += 1;
    }
    Ok(drained)
}
