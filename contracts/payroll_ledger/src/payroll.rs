//! Payday execution and spend projections.

use soroban_sdk::{log, Address, Env, Vec};

use crate::directory;
use crate::events::{emit_payday_completed, emit_salary_paid, PaydayCompleted, SalaryPaid};
use crate::fund;
use crate::registry;
use crate::storage::{
    Employee, PayoutLeg, PayrollError, DAYS_PER_YEAR, DISTRIBUTION_TOTAL, PAYDAY_LOCK_SECONDS,
    PAY_PERIODS_PER_YEAR, RUNWAY_UNBOUNDED,
};

/// Salary owed for one pay period, in reference-currency units.
pub fn period_salary(employee: &Employee) -> i128 {
    employee.salary / PAY_PERIODS_PER_YEAR
}

/// Splits one period's salary across the employee's allocation.
///
/// Nothing is written: every rate is resolved and every leg is checked
/// against the fund before the caller moves any money. Legs that round down
/// to zero units are left out.
pub fn plan_payout(env: &Env, employee: &Employee) -> Result<Vec<PayoutLeg>, PayrollError> {
    let owed = period_salary(employee);
    let mut legs = Vec::new(env);

    for i in 0..employee.assets.len() {
        let asset = employee.assets.get_unchecked(i);
        let weight = employee.distribution.get_unchecked(i);
        if weight == 0 {
            continue;
        }

        let reference = owed
            .checked_mul(i128::from(weight))
            .ok_or(PayrollError::Overflow)?
            / i128::from(DISTRIBUTION_TOTAL);
        let rate = registry::get_exchange_rate(env, &asset)?;
        let amount = reference / rate;
        if amount == 0 {
            continue;
        }

        if fund::get_balance(env, &asset) < amount {
            log!(env, "payday short of {}: need {}", asset, amount);
            return Err(PayrollError::InsufficientFunds);
        }
        legs.push_back(PayoutLeg { asset, amount });
    }
    Ok(legs)
}

/// Pays one period's salary to `employee_address`.
///
/// All legs are planned first; a failing leg restores its own debit and the
/// error return discards the legs already sent, so a failed payday leaves the
/// fund and the employee's timestamps as they were.
pub fn payday(env: &Env, employee_address: &Address) -> Result<Vec<PayoutLeg>, PayrollError> {
    let index = directory::find_index(env, employee_address).ok_or(PayrollError::UnknownEmployee)?;
    let employee = directory::get_employee(env, index)?;

    let now = env.ledger().timestamp();
    if !directory::lock_elapsed(now, employee.last_payday, PAYDAY_LOCK_SECONDS) {
        log!(env, "payday locked, last paid at {}", employee.last_payday);
        return Err(PayrollError::PaydayLocked);
    }

    let legs = plan_payout(env, &employee)?;
    for leg in legs.iter() {
        fund::withdraw(env, &leg.asset, leg.amount, employee_address)?;
        emit_salary_paid(
            env,
            SalaryPaid {
                employee: employee_address.clone(),
                asset: leg.asset.clone(),
                amount: leg.amount,
            },
        );
    }
    directory::record_payday(env, index, now)?;

    emit_payday_completed(
        env,
        PaydayCompleted {
            employee: employee_address.clone(),
            legs: legs.len(),
            timestamp: now,
        },
    );
    Ok(legs)
}

/// Sum of every employee's yearly salary.
fn yearly_spend(env: &Env) -> Result<i128, PayrollError> {
    directory::read_employees(env)
        .iter()
        .try_fold(0i128, |acc, employee| acc.checked_add(employee.salary))
        .ok_or(PayrollError::Overflow)
}

/// Monthly spend in reference-currency units.
pub fn calculate_burnrate(env: &Env) -> Result<i128, PayrollError> {
    Ok(yearly_spend(env)? / PAY_PERIODS_PER_YEAR)
}

/// Days the current valuation lasts at the current daily spend.
///
/// Returns `RUNWAY_UNBOUNDED` only when no salary is being paid at all. A
/// yearly spend under 365 has no whole daily spend, so the days are taken
/// from the yearly figure instead.
pub fn calculate_runway(env: &Env) -> Result<u64, PayrollError> {
    let funds = fund::total_valuation(env)?;
    let yearly = yearly_spend(env)?;
    if yearly == 0 {
        return Ok(RUNWAY_UNBOUNDED);
    }

    let daily_spend = yearly / DAYS_PER_YEAR;
    let days = if daily_spend == 0 {
        funds.checked_mul(DAYS_PER_YEAR).ok_or(PayrollError::Overflow)? / yearly
    } else {
        funds / daily_spend
    };
    Ok(u64::try_from(days).unwrap_or(RUNWAY_UNBOUNDED))
}
