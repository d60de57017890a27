#![no_std]

//! Payroll disbursement ledger.
//!
//! Holds a multi-asset fund valued through oracle exchange rates, keeps the
//! employee directory, and pays salaries out across each employee's chosen
//! asset allocation. Paydays and allocation changes are time-locked.
//!
//! Every entry point takes the acting identity as its first argument and
//! checks its role (admin, oracle or the employee itself) before touching
//! any state.

mod config;
mod directory;
mod events;
mod fund;
mod payroll;
mod registry;
pub mod storage;

#[cfg(test)]
mod tests;

use soroban_sdk::{contract, contractimpl, log, Address, Env, Vec};

use events::{
    emit_allocation_changed, emit_employee_added, emit_employee_removed,
    emit_escape_hatch_triggered, emit_exchange_rate_set, emit_oracle_changed,
    emit_salary_changed, AllocationChanged, EmployeeAdded, EmployeeRemoved,
    EscapeHatchTriggered, ExchangeRateSet, OracleChanged, SalaryChanged,
};
use storage::{ConfigData, Employee, PayoutLeg, PayrollError};

#[contract]
pub struct PayrollLedgerContract;

#[contractimpl]
impl PayrollLedgerContract {
    /// Initializes the payroll.
    ///
    /// # Arguments
    ///
    /// * `admin` - Runs all administrative operations (must authenticate)
    /// * `oracle` - The only identity allowed to set exchange rates
    /// * `native_asset` - Stellar Asset Contract of the native currency
    ///
    /// # Errors
    ///
    /// * `AlreadyInitialized` - on any call after the first
    pub fn initialize(
        env: Env,
        admin: Address,
        oracle: Address,
        native_asset: Address,
    ) -> Result<(), PayrollError> {
        admin.require_auth();
        if config::is_initialized(&env) {
            return Err(PayrollError::AlreadyInitialized);
        }
        config::write_config(
            &env,
            &ConfigData {
                admin,
                oracle,
                native_asset,
            },
        );
        Ok(())
    }

    pub fn get_config(env: Env) -> Result<ConfigData, PayrollError> {
        config::read_config(&env)
    }

    /// Replaces the oracle identity. Admin only.
    pub fn set_oracle(env: Env, admin: Address, oracle: Address) -> Result<(), PayrollError> {
        let mut cfg = config::require_admin(&env, &admin)?;
        config::require_active(&env)?;

        let old_oracle = cfg.oracle.clone();
        cfg.oracle = oracle.clone();
        config::write_config(&env, &cfg);

        emit_oracle_changed(
            &env,
            OracleChanged {
                old_oracle,
                new_oracle: oracle,
            },
        );
        Ok(())
    }

    //-------------------------------------------------------------------------
    // Exchange rates
    //-------------------------------------------------------------------------

    /// Publishes the rate of `asset` in reference-currency units per smallest
    /// unit. Oracle only; `rate` must be positive.
    pub fn set_exchange_rate(
        env: Env,
        oracle: Address,
        asset: Address,
        rate: i128,
    ) -> Result<(), PayrollError> {
        config::require_oracle(&env, &oracle)?;
        config::require_active(&env)?;
        registry::set_exchange_rate(&env, &asset, rate)?;

        emit_exchange_rate_set(&env, ExchangeRateSet { asset, rate });
        Ok(())
    }

    pub fn get_exchange_rate(env: Env, asset: Address) -> Result<i128, PayrollError> {
        registry::get_exchange_rate(&env, &asset)
    }

    /// Assets with a published rate, in the order they were first priced.
    pub fn get_supported_assets(env: Env) -> Vec<Address> {
        registry::get_supported_assets(&env)
    }

    //-------------------------------------------------------------------------
    // Funds
    //-------------------------------------------------------------------------

    /// Deposits `amount` of the native currency from the admin.
    pub fn add_funds(env: Env, admin: Address, amount: i128) -> Result<(), PayrollError> {
        let cfg = config::require_admin(&env, &admin)?;
        config::require_active(&env)?;
        fund::deposit(&env, &cfg.native_asset, amount, &admin)
    }

    /// Deposits `amount` of `asset` from the admin. The admin must hold the
    /// tokens; a declined transfer fails with `TransferFailed`.
    pub fn deposit(env: Env, admin: Address, asset: Address, amount: i128) -> Result<(), PayrollError> {
        config::require_admin(&env, &admin)?;
        config::require_active(&env)?;
        fund::deposit(&env, &asset, amount, &admin)
    }

    /// Total value of the fund in reference-currency units.
    pub fn get_payroll_funds(env: Env) -> Result<i128, PayrollError> {
        fund::total_valuation(&env)
    }

    pub fn get_fund_balance(env: Env, asset: Address) -> i128 {
        fund::get_balance(&env, &asset)
    }

    /// Emergency drain: sends every balance to the admin and terminates the
    /// payroll. Cannot be undone. If any asset's transfer is declined the
    /// call fails with `TransferFailed` and nothing is drained.
    pub fn escape_hatch(env: Env, admin: Address) -> Result<(), PayrollError> {
        config::require_admin(&env, &admin)?;
        config::require_active(&env)?;

        let assets_drained = fund::drain(&env, &admin)?;
        config::mark_terminated(&env);
        log!(&env, "escape hatch drained {} assets", assets_drained);

        emit_escape_hatch_triggered(
            &env,
            EscapeHatchTriggered {
                recipient: admin,
                assets_drained,
            },
        );
        Ok(())
    }

    pub fn is_terminated(env: Env) -> bool {
        config::is_terminated(&env)
    }

    //-------------------------------------------------------------------------
    // Employees
    //-------------------------------------------------------------------------

    /// Adds an employee and returns its index.
    ///
    /// # Arguments
    ///
    /// * `admin` - Must be the configured admin
    /// * `employee` - Identity the employee signs paydays with
    /// * `assets` / `distribution` - Parallel lists of assets and whole
    ///   percentages summing to 100
    /// * `salary` - Yearly salary in reference-currency units
    ///
    /// # Errors
    ///
    /// * `InvalidDistribution` - malformed allocation
    /// * `DuplicateEmployee` - `employee` is already on the payroll
    /// * `InvalidAmount` - negative salary
    pub fn add_employee(
        env: Env,
        admin: Address,
        employee: Address,
        assets: Vec<Address>,
        distribution: Vec<u32>,
        salary: i128,
    ) -> Result<u32, PayrollError> {
        config::require_admin(&env, &admin)?;
        config::require_active(&env)?;
        let index = directory::add_employee(&env, &employee, assets, distribution, salary)?;

        emit_employee_added(
            &env,
            EmployeeAdded {
                employee,
                index,
                salary,
            },
        );
        Ok(index)
    }

    /// Removes the employee at `index`; employees after it move down by one.
    pub fn remove_employee(env: Env, admin: Address, index: u32) -> Result<(), PayrollError> {
        config::require_admin(&env, &admin)?;
        config::require_active(&env)?;
        let removed = directory::remove_employee(&env, index)?;

        emit_employee_removed(
            &env,
            EmployeeRemoved {
                employee: removed.address,
                index,
            },
        );
        Ok(())
    }

    pub fn set_employee_salary(
        env: Env,
        admin: Address,
        index: u32,
        salary: i128,
    ) -> Result<(), PayrollError> {
        config::require_admin(&env, &admin)?;
        config::require_active(&env)?;
        let old_salary = directory::set_salary(&env, index, salary)?;
        let employee = directory::get_employee(&env, index)?;

        emit_salary_changed(
            &env,
            SalaryChanged {
                employee: employee.address,
                old_salary,
                new_salary: salary,
            },
        );
        Ok(())
    }

    pub fn get_employee(env: Env, index: u32) -> Result<Employee, PayrollError> {
        directory::get_employee(&env, index)
    }

    pub fn get_employee_count(env: Env) -> u32 {
        directory::get_count(&env)
    }

    pub fn get_employee_index(env: Env, employee: Address) -> Result<u32, PayrollError> {
        directory::find_index(&env, &employee).ok_or(PayrollError::UnknownEmployee)
    }

    /// Lets an employee choose how future paydays are split across assets.
    ///
    /// Allowed once every six months; the first change is always allowed.
    pub fn determine_allocation(
        env: Env,
        employee: Address,
        assets: Vec<Address>,
        distribution: Vec<u32>,
    ) -> Result<(), PayrollError> {
        employee.require_auth();
        config::read_config(&env)?;
        config::require_active(&env)?;

        let index = directory::find_index(&env, &employee).ok_or(PayrollError::UnknownEmployee)?;
        let now = env.ledger().timestamp();
        directory::set_allocation(&env, index, assets, distribution, now)?;

        emit_allocation_changed(
            &env,
            AllocationChanged {
                employee,
                timestamp: now,
            },
        );
        Ok(())
    }

    //-------------------------------------------------------------------------
    // Payouts and projections
    //-------------------------------------------------------------------------

    /// Pays the calling employee one month of salary, split by allocation.
    /// Allowed once every 30 days; the first payday is always allowed.
    ///
    /// Returns the per-asset amounts that were sent.
    pub fn payday(env: Env, employee: Address) -> Result<Vec<PayoutLeg>, PayrollError> {
        employee.require_auth();
        config::read_config(&env)?;
        config::require_active(&env)?;
        payroll::payday(&env, &employee)
    }

    /// Monthly spend: the sum of all yearly salaries divided by 12.
    pub fn calculate_payroll_burnrate(env: Env) -> Result<i128, PayrollError> {
        payroll::calculate_burnrate(&env)
    }

    /// Days of funding left at the current spend and valuation, or
    /// `u64::MAX` when nothing is being spent.
    pub fn calculate_payroll_runway(env: Env) -> Result<u64, PayrollError> {
        payroll::calculate_runway(&env)
    }
}
