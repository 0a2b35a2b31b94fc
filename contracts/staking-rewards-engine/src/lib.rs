#![no_std]
use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

mod admin;
mod gateway;
mod interface;
mod metrics;
mod network;
mod settlement;
mod staking;
mod transactions;
mod types;

use admin::*;
use interface::*;
use metrics::*;
use network::*;
use settlement::*;
use staking::*;
use transactions::*;
use types::*;

#[contract]
pub struct StakingRewardsContract;

#[contractimpl]
impl StakingRewardsContract {
    /// Initializes the engine with an admin address
    ///
    /// # Arguments
    /// * `admin` - The address of the contract administrator
    pub fn initialize(env: Env, admin: Address) -> Result<(), Error> {
        AdminModule::initialize(env, admin)
    }

    /// get admin address
    pub fn get_admin(env: Env) -> Result<Address, Error> {
        AdminModule::get_admin(env)
    }

    /// Transfers admin rights to a new address
    ///
    /// # Arguments
    /// * `new_admin` - The address of the new administrator
    pub fn transfer_admin(env: Env, new_admin: Address) -> Result<(), Error> {
        AdminModule::transfer_admin(env, new_admin)
    }

    /// Pauses settlement operations
    pub fn pause_contract(env: Env) -> Result<(), Error> {
        AdminModule::pause_contract(env)
    }

    /// Resumes settlement operations after being paused
    pub fn resume_contract(env: Env) -> Result<(), Error> {
        AdminModule::resume_contract(env)
    }

    /// Check if contract is paused
    pub fn get_paused_state(env: Env) -> Result<bool, Error> {
        AdminModule::get_paused_state(env)
    }

    /// Computes aggregate yield statistics from a staking snapshot.
    /// Accrual is evaluated against the current ledger timestamp.
    ///
    /// # Arguments
    /// * `records` - The staking records to aggregate
    pub fn compute_staking_statistics(
        env: Env,
        records: Vec<StakingRecord>,
    ) -> StakingStatistics {
        StakingStatsModule::compute_statistics(records, env.ledger().timestamp())
    }

    /// Sums transaction amounts per category
    ///
    /// # Arguments
    /// * `records` - The transaction records to aggregate
    pub fn summarize_transactions(
        env: Env,
        records: Vec<TransactionRecord>,
    ) -> TransactionSummary {
        TransactionModule::summarize(env, records)
    }

    /// Flattens a referral network into a level-annotated list with
    /// per-level grouping
    ///
    /// # Arguments
    /// * `roots` - The direct referrals, each carrying its own sub-tree
    pub fn flatten_referral_network(env: Env, roots: Vec<ReferralNode>) -> ReferralAggregate {
        ReferralNetworkModule::flatten(env, roots)
    }

    /// Settles a withdrawal: validates it, deducts the platform fee and
    /// transfers the net amount from the treasury through the gateway.
    /// The outcome is returned as a typed result; failures are terminal.
    ///
    /// # Arguments
    /// * `withdrawal` - The withdrawal record to settle
    /// * `config` - Platform fee percentage and treasury address
    /// * `gateway` - Address of the transfer gateway contract
    /// * `recipient` - External wallet receiving the net payout
    pub fn settle_withdrawal(
        env: Env,
        withdrawal: WithdrawalRecord,
        config: PlatformFeeConfig,
        gateway: Address,
        recipient: Address,
    ) -> Result<SettlementResult, Error> {
        SettlementModule::settle_withdrawal(env, withdrawal, config, gateway, recipient)
    }

    /// Gets the total number of settlement attempts
    pub fn get_total_settlements(env: Env) -> Result<u32, Error> {
        MetricsModule::get_total_settlements(env)
    }

    /// Gets the cumulative platform fees collected
    pub fn get_total_fees_collected(env: Env) -> Result<i128, Error> {
        MetricsModule::get_total_fees_collected(env)
    }

    /// Gets the cumulative net amount paid out
    pub fn get_total_net_paid(env: Env) -> Result<i128, Error> {
        MetricsModule::get_total_net_paid(env)
    }

    /// Gets settlement statistics as key-value pairs
    /// total_settlements, completed_settlements, failed_settlements,
    /// total_fees_collected, total_net_paid
    pub fn get_settlement_metrics(env: Env) -> Result<Vec<(String, i128)>, Error> {
        MetricsModule::get_settlement_metrics(env)
    }
}
