mod test_payday;

use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token::{StellarAssetClient, TokenClient},
    vec, Address, Env, Vec,
};

use crate::{PayrollLedgerContract, PayrollLedgerContractClient};

pub const ONE_HOUR: u64 = 3_600;
pub const ONE_DAY: u64 = 86_400;
pub const ONE_MONTH: u64 = 30 * ONE_DAY;
pub const SIX_MONTHS: u64 = 6 * ONE_MONTH;

/// Ledger clock used by default; far past every lock window.
pub const START_TIME: u64 = 1_700_000_000;

pub const BASE_SALARY: i128 = 12_000;
pub const MINTED: i128 = 100_000;

pub struct Setup<'a> {
    pub env: Env,
    pub contract_id: Address,
    pub client: PayrollLedgerContractClient<'a>,
    pub admin: Address,
    pub oracle: Address,
    pub native: Address,
    pub token1: Address,
    pub token2: Address,
}

impl Setup<'_> {
    /// Native currency first, then the two tokens.
    pub fn assets(&self) -> Vec<Address> {
        vec![
            &self.env,
            self.native.clone(),
            self.token1.clone(),
            self.token2.clone(),
        ]
    }

    pub fn distribution(&self, weights: [u32; 3]) -> Vec<u32> {
        vec![&self.env, weights[0], weights[1], weights[2]]
    }

    /// Adds an employee on `weights` with the base salary.
    pub fn hire(&self, weights: [u32; 3]) -> Address {
        let employee = Address::generate(&self.env);
        self.client.add_employee(
            &self.admin,
            &employee,
            &self.assets(),
            &self.distribution(weights),
            &BASE_SALARY,
        );
        employee
    }

    pub fn balance_of(&self, asset: &Address, who: &Address) -> i128 {
        TokenClient::new(&self.env, asset).balance(who)
    }
}

pub fn create_token(env: &Env) -> Address {
    let admin = Address::generate(env);
    env.register_stellar_asset_contract_v2(admin).address()
}

pub fn mint(env: &Env, token: &Address, to: &Address, amount: i128) {
    StellarAssetClient::new(env, token).mint(to, &amount);
}

pub fn set_time(env: &Env, timestamp: u64) {
    env.ledger().with_mut(|li| li.timestamp = timestamp);
}

pub fn advance(env: &Env, seconds: u64) {
    env.ledger().with_mut(|li| li.timestamp += seconds);
}

/// Initialized payroll with every asset priced at 1 and `MINTED` units of
/// each asset in the admin's wallet. Nothing is deposited yet.
pub fn setup<'a>() -> Setup<'a> {
    let env = Env::default();
    env.mock_all_auths();
    set_time(&env, START_TIME);

    let contract_id = env.register(PayrollLedgerContract, ());
    let client = PayrollLedgerContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    let oracle = Address::generate(&env);
    let native = create_token(&env);
    let token1 = create_token(&env);
    let token2 = create_token(&env);

    for asset in [&native, &token1, &token2] {
        mint(&env, asset, &admin, MINTED);
    }

    client.initialize(&admin, &oracle, &native);
    for asset in [&native, &token1, &token2] {
        client.set_exchange_rate(&oracle, asset, &1);
    }

    Setup {
        env,
        contract_id,
        client,
        admin,
        oracle,
        native,
        token1,
        token2,
    }
}
