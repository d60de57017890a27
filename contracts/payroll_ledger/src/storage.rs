use soroban_sdk::{contracterror, contracttype, Address, Vec};

/// Minimum time between two successful paydays of the same employee.
pub const PAYDAY_LOCK_SECONDS: u64 = 30 * 24 * 60 * 60;

/// Minimum time between two allocation changes of the same employee.
pub const ALLOCATION_LOCK_SECONDS: u64 = 6 * PAYDAY_LOCK_SECONDS;

/// Salaries are yearly; one payday pays out one of these periods.
pub const PAY_PERIODS_PER_YEAR: i128 = 12;

/// Divisor turning the yearly salary total into the daily spend the runway
/// is measured in.
pub const DAYS_PER_YEAR: i128 = 365;

/// Allocation weights are whole percentages and must add up to this.
pub const DISTRIBUTION_TOTAL: u32 = 100;

/// Runway reported when nothing is being spent.
pub const RUNWAY_UNBOUNDED: u64 = u64::MAX;

//-----------------------------------------------------------------------------
// Errors
//-----------------------------------------------------------------------------

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PayrollError {
    /// `initialize` was already called.
    AlreadyInitialized = 1,
    /// The contract has no configuration yet.
    NotInitialized = 2,
    /// Caller does not hold the admin, oracle or employee role required.
    Unauthorized = 3,
    /// No exchange rate was ever set for the asset.
    UnknownAsset = 4,
    /// Index out of range or identity not on the payroll.
    UnknownEmployee = 5,
    /// The identity is already on the payroll.
    DuplicateEmployee = 6,
    /// Length mismatch, empty, repeated asset or weights not summing to 100.
    InvalidDistribution = 7,
    /// Amount or salary outside its allowed range.
    InvalidAmount = 8,
    /// Exchange rates must be strictly positive.
    InvalidRate = 9,
    /// The fund holds less of the asset than requested.
    InsufficientFunds = 10,
    /// The token contract declined the transfer.
    TransferFailed = 11,
    /// Less than 30 days since the last payday.
    PaydayLocked = 12,
    /// Less than 6 months since the last allocation change.
    AllocationLocked = 13,
    /// Arithmetic overflow while valuing or paying out.
    Overflow = 14,
    /// The escape hatch drained this payroll.
    Terminated = 15,
}

//-----------------------------------------------------------------------------
// Records
//-----------------------------------------------------------------------------

/// Deployment-wide configuration, written once by `initialize`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConfigData {
    /// Runs every administrative operation.
    pub admin: Address,
    /// The only identity allowed to publish exchange rates.
    pub oracle: Address,
    /// Stellar Asset Contract of the native currency, used by `add_funds`.
    pub native_asset: Address,
}

/// One employee on the payroll.
///
/// `assets` and `distribution` are parallel lists: `distribution[i]` is the
/// percentage of every payday paid out in `assets[i]`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Employee {
    pub address: Address,
    /// Yearly salary in reference-currency units.
    pub salary: i128,
    /// Ledger timestamp of the last successful payday, 0 if never paid.
    pub last_payday: u64,
    /// Ledger timestamp of the last allocation change, 0 if never changed.
    pub last_allocation: u64,
    pub assets: Vec<Address>,
    pub distribution: Vec<u32>,
}

/// A single per-asset disbursement of a payday.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PayoutLeg {
    pub asset: Address,
    /// Amount in the asset's smallest unit.
    pub amount: i128,
}

/// Storage keys
#[contracttype]
#[derive(Clone)]
pub enum StorageKey {
    /// ConfigData (instance)
    Config,
    /// Set once the escape hatch ran (instance)
    Terminated,
    /// Exchange rate: asset -> i128
    Rate(Address),
    /// Assets with a rate, in first-set order
    RatedAssets,
    /// Fund balance: asset -> i128
    Balance(Address),
    /// Assets that were ever credited to the fund
    FundAssets,
    /// Compacted employee list
    Employees,
}
