use soroban_sdk::{contracterror, contracttype, Address, Map, String, Symbol, Vec};

/// Lifecycle status of a staking record, owned by the external ledger
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StakingStatus {
    Active,      // Accruing daily yield
    Completed,   // Lock period served, full yield earned
    Cancelled,   // Terminated before completion
    Paused,      // Accrual suspended
    FreeStaking, // Promotional stake, excluded from yield buckets
}

/// Package terms attached to a staking record
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakingPackage {
    pub stake_amount: i128,           // Principal in whole token units
    pub daily_yield_percentage: i128, // Daily yield, percent units
    pub lock_period_days: u32,        // Contractual lock period
}

// Under testutils, `#[contracttype]` on `StakingRecord` emits an `ScMap`
// conversion calling `.try_into()` on `&Option<StakingPackage>`. The SDK only
// provides `ScVal: From<&Option<T>>` for `T: Into<ScVal>`, which
// macro-generated types never satisfy (their `TryFrom` impls would conflict
// with core's blanket), so `core::convert::TryInto` has no applicable impl
// for this receiver and the generated code does not compile. This test-only
// trait supplies the conversion; method resolution selects it because the
// core trait has no candidate impl. `None` maps to `ScVal::Void`, mirroring
// the SDK's own `From<Option<T>>` impl.
#[cfg(test)]
trait OptionStakingPackageToScVal {
    fn try_into(self) -> Result<soroban_sdk::xdr::ScVal, soroban_sdk::xdr::Error>;
}

#[cfg(test)]
impl OptionStakingPackageToScVal for &Option<StakingPackage> {
    fn try_into(self) -> Result<soroban_sdk::xdr::ScVal, soroban_sdk::xdr::Error> {
        match self {
            Some(p) => p.try_into(),
            None => Ok(soroban_sdk::xdr::ScVal::Void),
        }
    }
}

/// One staking position as read from the ledger. Immutable once persisted;
/// a missing package degrades to zero amount/yield during aggregation.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakingRecord {
    pub id: u64,                         // Ledger identifier
    pub owner: Address,                  // Owning user
    pub package: Option<StakingPackage>, // Package terms, may be absent
    pub status: StakingStatus,           // Current lifecycle status
    pub created_at: u64,                 // Creation timestamp (seconds)
}

/// Aggregate yield statistics, recomputed on every call and never persisted
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakingStatistics {
    pub total_staking_amount: i128,      // Sum of all stake amounts, any status
    pub active_staking_amount: i128,     // Principal currently active
    pub active_staking_number: u32,      // Count of active records
    pub completed_staking_amount: i128,  // Principal of completed records
    pub completed_staking_number: u32,   // Count of completed records
    pub earned_from_active: i128,        // Yield accrued so far on active stakes
    pub earned_from_completed: i128,     // Full-period yield of completed stakes
    pub earning_claimed_from_active: i128, // Theoretical full-period yield if claimed
}

/// Which leg of the binary network a referral landed on
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum NetworkLeg {
    Left,
    Right,
}

/// A referred user as supplied by the upstream network snapshot
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReferredUser {
    pub address: Address,
    pub name: String,
    pub email: String,
    pub joined_at: u64,
    pub leg: NetworkLeg,
}

/// Recursive referral tree node; `sub_referrals` may be empty
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReferralNode {
    pub user: ReferredUser,
    pub sub_referrals: Vec<ReferralNode>,
}

/// A referred user annotated with its depth in the network (1 = direct)
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FlatReferral {
    pub user: ReferredUser,
    pub level: u32,
}

/// Flattened view of a referral network, derived and ephemeral
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReferralAggregate {
    pub referrals: Vec<FlatReferral>, // Pre-order: parent before descendants
    pub total_referral_count: u32,
    pub referrals_by_level: Map<u32, Vec<FlatReferral>>,
}

/// One ledger transaction. Categories are an open set keyed by symbol;
/// the eight known categories are projected into `TransactionSummary`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransactionRecord {
    pub id: u64,
    pub user: Address,
    pub category: Symbol, // staking, withdrawal, purchase, daily_reward, ...
    pub amount: i128,     // Signed
    pub created_at: u64,
}

/// Per-category transaction totals. Unknown categories are preserved in
/// `by_category` but have no named field.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransactionSummary {
    pub by_category: Map<Symbol, i128>,
    pub staked_amount: i128,
    pub withdrawal_amount: i128,
    pub purchase_amount: i128,
    pub daily_reward_amount: i128,
    pub unilevel_commission_amount: i128,
    pub universal_cashback_amount: i128,
    pub weak_leg_bonus_amount: i128,
    pub admin_adjustment_amount: i128,
}

/// Withdrawal lifecycle status, owned by the external ledger
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum WithdrawalStatus {
    Pending,
    Approved,
    Completed,
    Rejected,
}

/// A withdrawal request as read from the ledger. Settlement only reads
/// `amount`; status transitions stay with the ledger.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawalRecord {
    pub id: u64,
    pub user: Address,
    pub amount: i128, // Requested payout in whole token units
    pub status: WithdrawalStatus,
    pub created_at: u64,
    pub updated_at: u64,
}

/// Platform fee configuration, passed explicitly into settlement
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PlatformFeeConfig {
    pub fee_percentage: u32,       // Valid range 0-100; out of range falls back
    pub treasury: Option<Address>, // Platform wallet funding payouts
}

/// Terminal settlement failure reasons
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FailureReason {
    InvalidAmount,         // Withdrawal amount not positive
    MisconfiguredPlatform, // Treasury address missing
    InsufficientFunds,     // Gateway: treasury cannot cover the transfer
    UserRejected,          // Gateway: recipient-side rejection
    NotYetApproved,        // Gateway: transfer allowance not granted
    NetworkError,          // Gateway: external leg unreachable
    Unknown,               // Anything else
}

/// Amounts actually settled for a completed withdrawal
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SettlementReceipt {
    pub withdrawal_id: u64,
    pub fee_amount: i128,       // Platform fee, whole units, floored
    pub net_amount: i128,       // Payout after fee, whole units
    pub net_minimal_units: i128, // Payout scaled by gateway decimals
}

/// Outcome of a settlement attempt. Every failure is terminal; retries are
/// a fresh invocation by the caller.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SettlementResult {
    Completed(SettlementReceipt),
    Failed(FailureReason),
}

/// Storage keys for contract data
#[contracttype]
pub enum DataKey {
    Admin,                // Contract administrator
    ContractPaused,       // Contract pause status
    TotalSettlements,     // Settlement attempts, any outcome
    CompletedSettlements, // Settlements that paid out
    FailedSettlements,    // Settlements that failed
    TotalFeesCollected,   // Cumulative fees, whole units
    TotalNetPaid,         // Cumulative net payouts, whole units
}

/// Contract error types
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,     // Contract not initialized
    AlreadyInitialized = 2, // Contract already setup
    Unauthorized = 3,       // Caller lacks permission
    ContractPaused = 4,     // Contract is paused
}
