use soroban_sdk::{contractevent, Address, Env};

/// Event: oracle published a rate
#[contractevent]
#[derive(Clone, Debug)]
pub struct ExchangeRateSet {
    #[topic]
    pub asset: Address,
    pub rate: i128,
}

/// Event: funds moved into the payroll
#[contractevent]
#[derive(Clone, Debug)]
pub struct FundsDeposited {
    #[topic]
    pub asset: Address,
    pub payer: Address,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct EmployeeAdded {
    #[topic]
    pub employee: Address,
    pub index: u32,
    pub salary: i128,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct EmployeeRemoved {
    #[topic]
    pub employee: Address,
    pub index: u32,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct SalaryChanged {
    #[topic]
    pub employee: Address,
    pub old_salary: i128,
    pub new_salary: i128,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct AllocationChanged {
    #[topic]
    pub employee: Address,
    pub timestamp: u64,
}

/// Event: one asset leg of a payday
#[contractevent]
#[derive(Clone, Debug)]
pub struct SalaryPaid {
    #[topic]
    pub employee: Address,
    pub asset: Address,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct PaydayCompleted {
    #[topic]
    pub employee: Address,
    pub legs: u32,
    pub timestamp: u64,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct OracleChanged {
    pub old_oracle: Address,
    pub new_oracle: Address,
}

/// Event: emergency drain, the payroll is terminated afterwards
#[contractevent]
#[derive(Clone, Debug)]
pub struct EscapeHatchTriggered {
    pub recipient: Address,
    pub assets_drained: u32,
}

pub fn emit_exchange_rate_set(e: &Env, event: ExchangeRateSet) {
    event.publish(e);
}

pub fn emit_funds_deposited(e: &Env, event: FundsDeposited) {
    event.publish(e);
}

pub fn emit_employee_added(e: &Env, event: EmployeeAdded) {
    event.publish(e);
}

pub fn emit_employee_removed(e: &Env, event: EmployeeRemoved) {
    event.publish(e);
}

pub fn emit_salary_changed(e: &Env, event: SalaryChanged) {
    event.publish(e);
}

pub fn emit_allocation_changed(e: &Env, event: AllocationChanged) {
    event.publish(e);
}

pub fn emit_salary_paid(e: &Env, event: SalaryPaid) {
    event.publish(e);
}

pub fn emit_payday_completed(e: &Env, event: PaydayCompleted) {
    event.publish(e);
}

pub fn emit_oracle_changed(e: &Env, event: OracleChanged) {
    event.publish(e);
}

pub fn emit_escape_hatch_triggered(e: &Env, event: EscapeHatchTriggered) {
    event.publish(e);
}
