//! Employee records.
//!
//! Employees are kept in a single compacted list; an employee's index is its
//! position in that list. Removing an employee shifts the ones after it down
//! by one without touching any of their fields.

use soroban_sdk::{Address, Env, Vec};

use crate::storage::{Employee, PayrollError, StorageKey, ALLOCATION_LOCK_SECONDS, DISTRIBUTION_TOTAL};

pub fn read_employees(env: &Env) -> Vec<Employee> {
    env.storage()
        .persistent()
        .get(&StorageKey::Employees)
        .unwrap_or(Vec::new(env))
}

fn write_employees(env: &Env, employees: &Vec<Employee>) {
    env.storage().persistent().set(&StorageKey::Employees, employees);
}

/// `true` once at least `lock` seconds passed since `last`.
///
/// A `last` of 0 means "never happened"; measured from the epoch, any real
/// ledger clock is already past every lock window.
pub fn lock_elapsed(now: u64, last: u64, lock: u64) -> bool {
    now.saturating_sub(last) >= lock
}

/// Parallel lists, non-empty, no repeated asset, weights summing to 100.
pub fn validate_distribution(assets: &Vec<Address>, distribution: &Vec<u32>) -> Result<(), PayrollError> {
    if assets.is_empty() || assets.len() != distribution.len() {
        return Err(PayrollError::InvalidDistribution);
    }

    for i in 0..assets.len() {
        let asset = assets.get_unchecked(i);
        if assets.first_index_of(&asset) != Some(i) {
            return Err(PayrollError::InvalidDistribution);
        }
    }

    let total = distribution
        .iter()
        .try_fold(0u32, |acc, weight| acc.checked_add(weight))
        .ok_or(PayrollError::InvalidDistribution)?;
    if total != DISTRIBUTION_TOTAL {
        return Err(PayrollError::InvalidDistribution);
    }
    Ok(())
}

fn validate_salary(salary: i128) -> Result<(), PayrollError> {
    if salary < 0 {
        return Err(PayrollError::InvalidAmount);
    }
    Ok(())
}

pub fn get_count(env: &Env) -> u32 {
    read_employees(env).len()
}

pub fn get_employee(env: &Env, index: u32) -> Result<Employee, PayrollError> {
    read_employees(env)
        .get(index)
        .ok_or(PayrollError::UnknownEmployee)
}

pub fn find_index(env: &Env, address: &Address) -> Option<u32> {
    read_employees(env)
        .iter()
        .position(|employee| employee.address == *address)
        .map(|position| position as u32)
}

/// Appends a new employee with zeroed timestamps and returns its index.
pub fn add_employee(
    env: &Env,
    address: &Address,
    assets: Vec<Address>,
    distribution: Vec<u32>,
    salary: i128,
) -> Result<u32, PayrollError> {
    validate_distribution(&assets, &distribution)?;
    validate_salary(salary)?;
    if find_index(env, address).is_some() {
        return Err(PayrollError::DuplicateEmployee);
    }

    let mut employees = read_employees(env);
    employees.push_back(Employee {
        address: address.clone(),
        salary,
        last_payday: 0,
        last_allocation: 0,
        assets,
        distribution,
    });
    write_employees(env, &employees);
    Ok(employees.len() - 1)
}

/// Removes and returns the employee at `index`.
pub fn remove_employee(env: &Env, index: u32) -> Result<Employee, PayrollError> {
    let mut employees = read_employees(env);
    let removed = employees.get(index).ok_or(PayrollError::UnknownEmployee)?;
    employees.remove(index);
    write_employees(env, &employees);
    Ok(removed)
}

/// Replaces the salary and returns the previous one.
pub fn set_salary(env: &Env, index: u32, salary: i128) -> Result<i128, PayrollError> {
    validate_salary(salary)?;
    let mut employees = read_employees(env);
    let mut employee = employees.get(index).ok_or(PayrollError::UnknownEmployee)?;
    let old_salary = employee.salary;
    employee.salary = salary;
    employees.set(index, employee);
    write_employees(env, &employees);
    Ok(old_salary)
}

/// Replaces the allocation, at most once per `ALLOCATION_LOCK_SECONDS`.
pub fn set_allocation(
    env: &Env,
    index: u32,
    assets: Vec<Address>,
    distribution: Vec<u32>,
    now: u64,
) -> Result<(), PayrollError> {
    validate_distribution(&assets, &distribution)?;
    let mut employees = read_employees(env);
    let mut employee = employees.get(index).ok_or(PayrollError::UnknownEmployee)?;
    if !lock_elapsed(now, employee.last_allocation, ALLOCATION_LOCK_SECONDS) {
        return Err(PayrollError::AllocationLocked);
    }

    employee.assets = assets;
    employee.distribution = distribution;
    employee.last_allocation = now;
    employees.set(index, employee);
    write_employees(env, &employees);
    Ok(())
}

pub fn record_payday(env: &Env, index: u32, now: u64) -> Result<(), PayrollError> {
    let mut employees = read_employees(env);
    let mut employee = employees.get(index).ok_or(PayrollError::UnknownEmployee)?;
    employee.last_payday = now;
    employees.set(index, employee);
    write_employees(env, &employees);
    Ok(())
}
