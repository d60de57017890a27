use soroban_sdk::{testutils::Address as _, vec, Address};

use super::mock_token::{FlakyToken, FlakyTokenClient};
use super::{advance, set_time, setup, Setup, ONE_DAY, ONE_HOUR, ONE_MONTH, START_TIME};
use crate::storage::{PayoutLeg, PayrollError};

fn fund_all(s: &Setup) {
    s.client.add_funds(&s.admin, &100_000);
    s.client.deposit(&s.admin, &s.token1, &100_000);
    s.client.deposit(&s.admin, &s.token2, &100_000);
}

#[test]
fn test_payday_pays_one_month_in_native() {
    let s = setup();
    fund_all(&s);
    let employee = s.hire([100, 0, 0]);

    let legs = s.client.payday(&employee);

    assert_eq!(
        legs,
        vec![
            &s.env,
            PayoutLeg {
                asset: s.native.clone(),
                amount: 1_000
            }
        ]
    );
    assert_eq!(s.client.get_fund_balance(&s.native), 99_000);
    assert_eq!(s.balance_of(&s.native, &employee), 1_000);
    assert_eq!(s.client.get_payroll_funds(), 299_000);
    assert_eq!(s.client.get_employee(&0).last_payday, START_TIME);
}

#[test]
fn test_payday_splits_by_allocation() {
    let s = setup();
    fund_all(&s);
    let employee = s.hire([50, 25, 25]);

    let legs = s.client.payday(&employee);

    assert_eq!(legs.len(), 3);
    assert_eq!(s.balance_of(&s.native, &employee), 500);
    assert_eq!(s.balance_of(&s.token1, &employee), 250);
    assert_eq!(s.balance_of(&s.token2, &employee), 250);
    assert_eq!(s.client.get_fund_balance(&s.native), 99_500);
    assert_eq!(s.client.get_payroll_funds(), 299_000);
}

#[test]
fn test_payday_converts_through_rate() {
    let s = setup();
    fund_all(&s);
    // 1 unit of token1 is worth 3 reference units, so 500 reference buys 166.
    s.client.set_exchange_rate(&s.oracle, &s.token1, &3);
    let employee = s.hire([50, 50, 0]);

    s.client.payday(&employee);

    assert_eq!(s.balance_of(&s.native, &employee), 500);
    assert_eq!(s.balance_of(&s.token1, &employee), 166);
}

#[test]
fn test_zero_weight_assets_need_no_rate_or_funds() {
    let s = setup();
    s.client.add_funds(&s.admin, &10_000);
    let unpriced = Address::generate(&s.env);
    let employee = Address::generate(&s.env);
    s.client.add_employee(
        &s.admin,
        &employee,
        &vec![&s.env, s.native.clone(), unpriced],
        &vec![&s.env, 100u32, 0],
        &12_000,
    );

    s.client.payday(&employee);
    assert_eq!(s.balance_of(&s.native, &employee), 1_000);
}

#[test]
fn test_second_payday_within_month_locked() {
    let s = setup();
    fund_all(&s);
    let employee = s.hire([100, 0, 0]);
    s.client.payday(&employee);

    advance(&s.env, ONE_MONTH - ONE_HOUR);
    let result = s.client.try_payday(&employee);

    assert_eq!(result, Err(Ok(PayrollError::PaydayLocked)));
    assert_eq!(s.client.get_fund_balance(&s.native), 99_000);
    assert_eq!(s.client.get_employee(&0).last_payday, START_TIME);
}

#[test]
fn test_payday_after_one_month() {
    let s = setup();
    fund_all(&s);
    let employee = s.hire([100, 0, 0]);
    s.client.payday(&employee);

    advance(&s.env, ONE_MONTH + ONE_HOUR);
    s.client.payday(&employee);

    assert_eq!(s.balance_of(&s.native, &employee), 2_000);
    assert_eq!(
        s.client.get_employee(&0).last_payday,
        START_TIME + ONE_MONTH + ONE_HOUR
    );
}

#[test]
fn test_payday_exactly_at_lock_boundary() {
    let s = setup();
    fund_all(&s);
    let employee = s.hire([100, 0, 0]);
    s.client.payday(&employee);

    advance(&s.env, ONE_MONTH);
    s.client.payday(&employee);
    assert_eq!(s.balance_of(&s.native, &employee), 2_000);
}

/// The "never paid" stamp is 0, so the 30-day window is measured from the
/// epoch; a clock under 30 days keeps even the first payday locked.
#[test]
fn test_first_payday_near_epoch_is_locked() {
    let s = setup();
    fund_all(&s);
    let employee = s.hire([100, 0, 0]);
    set_time(&s.env, 10 * ONE_DAY);

    assert_eq!(
        s.client.try_payday(&employee),
        Err(Ok(PayrollError::PaydayLocked))
    );

    set_time(&s.env, ONE_MONTH);
    s.client.payday(&employee);
}

#[test]
fn test_payday_unknown_employee() {
    let s = setup();
    fund_all(&s);
    let stranger = Address::generate(&s.env);

    assert_eq!(
        s.client.try_payday(&stranger),
        Err(Ok(PayrollError::UnknownEmployee))
    );
}

#[test]
fn test_payday_short_on_one_asset_pays_nothing() {
    let s = setup();
    s.client.add_funds(&s.admin, &100_000);
    s.client.deposit(&s.admin, &s.token1, &100);
    let employee = s.hire([50, 50, 0]);

    let result = s.client.try_payday(&employee);

    assert_eq!(result, Err(Ok(PayrollError::InsufficientFunds)));
    assert_eq!(s.client.get_fund_balance(&s.native), 100_000);
    assert_eq!(s.client.get_fund_balance(&s.token1), 100);
    assert_eq!(s.balance_of(&s.native, &employee), 0);
    assert_eq!(s.client.get_employee(&0).last_payday, 0);
}

#[test]
fn test_payday_with_unpriced_asset_fails() {
    let s = setup();
    s.client.add_funds(&s.admin, &100_000);
    let unpriced = Address::generate(&s.env);
    let employee = Address::generate(&s.env);
    s.client.add_employee(
        &s.admin,
        &employee,
        &vec![&s.env, s.native.clone(), unpriced],
        &vec![&s.env, 50u32, 50],
        &12_000,
    );

    assert_eq!(
        s.client.try_payday(&employee),
        Err(Ok(PayrollError::UnknownAsset))
    );
    assert_eq!(s.client.get_fund_balance(&s.native), 100_000);
}

#[test]
fn test_declined_leg_rolls_back_whole_payday() {
    let s = setup();
    s.client.add_funds(&s.admin, &100_000);

    let flaky_id = s.env.register(FlakyToken, ());
    let flaky = FlakyTokenClient::new(&s.env, &flaky_id);
    flaky.mint(&s.admin, &10_000);
    s.client.set_exchange_rate(&s.oracle, &flaky_id, &1);
    s.client.deposit(&s.admin, &flaky_id, &10_000);

    let employee = Address::generate(&s.env);
    s.client.add_employee(
        &s.admin,
        &employee,
        &vec![&s.env, s.native.clone(), flaky_id.clone()],
        &vec![&s.env, 50u32, 50],
        &12_000,
    );

    flaky.set_failing(&true);
    let result = s.client.try_payday(&employee);

    assert_eq!(result, Err(Ok(PayrollError::TransferFailed)));
    assert_eq!(s.client.get_fund_balance(&s.native), 100_000);
    assert_eq!(s.client.get_fund_balance(&flaky_id), 10_000);
    assert_eq!(s.balance_of(&s.native, &employee), 0);
    assert_eq!(s.client.get_employee(&0).last_payday, 0);

    // Once the token accepts transfers again the same payday goes through.
    flaky.set_failing(&false);
    s.client.payday(&employee);
    assert_eq!(s.balance_of(&s.native, &employee), 500);
    assert_eq!(flaky.balance(&employee), 500);
}

#[test]
fn test_zero_salary_payday_moves_nothing() {
    let s = setup();
    fund_all(&s);
    let employee = Address::generate(&s.env);
    s.client.add_employee(
        &s.admin,
        &employee,
        &s.assets(),
        &s.distribution([100, 0, 0]),
        &0,
    );

    let legs = s.client.payday(&employee);

    assert!(legs.is_empty());
    assert_eq!(s.client.get_fund_balance(&s.native), 100_000);
    assert_eq!(s.client.get_employee(&0).last_payday, START_TIME);
}
