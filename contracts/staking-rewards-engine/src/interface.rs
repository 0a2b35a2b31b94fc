use crate::types::{
    Error, PlatformFeeConfig, ReferralAggregate, ReferralNode, SettlementResult, StakingRecord,
    StakingStatistics, TransactionRecord, TransactionSummary, WithdrawalRecord,
};
use soroban_sdk::{Address, Env, String, Vec};

/// Computes yield and earnings statistics from staking snapshots
pub trait StakingStatsOperations {
    /// Fold a staking snapshot into aggregate statistics. Pure and total;
    /// `now` is injected so accrual is deterministic.
    fn compute_statistics(records: Vec<StakingRecord>, now: u64) -> StakingStatistics;
}

/// Aggregates raw transactions by category
pub trait TransactionOperations {
    /// Sum signed amounts per category. Pure, total, order-independent.
    fn summarize(env: Env, records: Vec<TransactionRecord>) -> TransactionSummary;
}

/// Flattens the recursive referral network
pub trait ReferralNetworkOperations {
    /// Pre-order flatten of the referral tree with per-level bucketing
    fn flatten(env: Env, roots: Vec<ReferralNode>) -> ReferralAggregate;
}

/// Executes withdrawal settlements against the transfer gateway
pub trait SettlementOperations {
    /// Validate a withdrawal, compute net payout after fee, invoke the
    /// gateway transfer, and classify the outcome
    fn settle_withdrawal(
        env: Env,
        withdrawal: WithdrawalRecord,
        config: PlatformFeeConfig,
        gateway: Address,
        recipient: Address,
    ) -> Result<SettlementResult, Error>;
}

/// Manages administrative operations
pub trait AdminOperations {
    /// Initialize contract with admin address
    fn initialize(env: Env, admin: Address) -> Result<(), Error>;

    /// get admin address
    fn get_admin(env: Env) -> Result<Address, Error>;

    /// Transfer admin rights to new address
    fn transfer_admin(env: Env, new_admin: Address) -> Result<(), Error>;

    /// Pause contract operations (emergency)
    fn pause_contract(env: Env) -> Result<(), Error>;

    /// Resume contract operations
    fn resume_contract(env: Env) -> Result<(), Error>;

    /// Check if contract is paused
    fn get_paused_state(env: Env) -> Result<bool, Error>;
}

/// Settlement counters and monitoring
pub trait MetricsOperations {
    /// Get settlement attempts, any outcome
    fn get_total_settlements(env: Env) -> Result<u32, Error>;

    /// Get cumulative fees collected
    fn get_total_fees_collected(env: Env) -> Result<i128, Error>;

    /// Get cumulative net paid out
    fn get_total_net_paid(env: Env) -> Result<i128, Error>;

    /// Get settlement statistics as key-value pairs
    fn get_settlement_metrics(env: Env) -> Result<Vec<(String, i128)>, Error>;
}
