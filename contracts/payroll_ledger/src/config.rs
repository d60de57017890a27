use soroban_sdk::{Address, Env};

use crate::storage::{ConfigData, PayrollError, StorageKey};

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&StorageKey::Config)
}

pub fn read_config(env: &Env) -> Result<ConfigData, PayrollError> {
    env.storage()
        .instance()
        .get(&StorageKey::Config)
        .ok_or(PayrollError::NotInitialized)
}

pub fn write_config(env: &Env, config: &ConfigData) {
    env.storage().instance().set(&StorageKey::Config, config);
}

pub fn is_terminated(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&StorageKey::Terminated)
        .unwrap_or(false)
}

pub fn mark_terminated(env: &Env) {
    env.storage().instance().set(&StorageKey::Terminated, &true);
}

/// Fails once the escape hatch has drained the payroll.
pub fn require_active(env: &Env) -> Result<(), PayrollError> {
    if is_terminated(env) {
        return Err(PayrollError::Terminated);
    }
    Ok(())
}

/// Authenticates `caller` and checks it is the configured admin.
pub fn require_admin(env: &Env, caller: &Address) -> Result<ConfigData, PayrollError> {
    let config = read_config(env)?;
    caller.require_auth();
    if *caller != config.admin {
        return Err(PayrollError::Unauthorized);
    }
    Ok(config)
}

/// Authenticates `caller` and checks it is the configured oracle.
pub fn require_oracle(env: &Env, caller: &Address) -> Result<ConfigData, PayrollError> {
    let config = read_config(env)?;
    caller.require_auth();
    if *caller != config.oracle {
        return Err(PayrollError::Unauthorized);
    }
    Ok(config)
}
