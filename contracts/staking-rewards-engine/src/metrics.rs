use crate::interface::MetricsOperations;
use crate::types::{DataKey, Error, SettlementResult};
use soroban_sdk::{Env, String, Vec};

pub struct MetricsModule;

impl MetricsOperations for MetricsModule {
    fn get_total_settlements(env: Env) -> Result<u32, Error> {
        Ok(Self::counter(&env, &DataKey::TotalSettlements))
    }

    fn get_total_fees_collected(env: Env) -> Result<i128, Error> {
        Ok(Self::amount(&env, &DataKey::TotalFeesCollected))
    }

    fn get_total_net_paid(env: Env) -> Result<i128, Error> {
        Ok(Self::amount(&env, &DataKey::TotalNetPaid))
    }

    fn get_settlement_metrics(env: Env) -> Result<Vec<(String, i128)>, Error> {
        let mut metrics = Vec::new(&env);

        metrics.push_back((
            String::from_str(&env, "total_settlements"),
            Self::counter(&env, &DataKey::TotalSettlements) as i128,
        ));
        metrics.push_back((
            String::from_str(&env, "completed_settlements"),
            Self::counter(&env, &DataKey::CompletedSettlements) as i128,
        ));
        metrics.push_back((
            String::from_str(&env, "failed_settlements"),
            Self::counter(&env, &DataKey::FailedSettlements) as i128,
        ));
        metrics.push_back((
            String::from_str(&env, "total_fees_collected"),
            Self::amount(&env, &DataKey::TotalFeesCollected),
        ));
        metrics.push_back((
            String::from_str(&env, "total_net_paid"),
            Self::amount(&env, &DataKey::TotalNetPaid),
        ));

        Ok(metrics)
    }
}

// Helper functions
impl MetricsModule {
    /// Advance the settlement counters for one terminal outcome
    pub fn record_settlement(env: &Env, result: &SettlementResult) {
        Self::bump(env, &DataKey::TotalSettlements);

        match result {
            SettlementResult::Completed(receipt) => {
                Self::bump(env, &DataKey::CompletedSettlements);
                Self::add(env, &DataKey::TotalFeesCollected, receipt.fee_amount);
                Self::add(env, &DataKey::TotalNetPaid, receipt.net_amount);
            }
            SettlementResult::Failed(_) => {
                Self::bump(env, &DataKey::FailedSettlements);
            }
        }
    }

    fn counter(env: &Env, key: &DataKey) -> u32 {
        env.storage().instance().get(key).unwrap_or(0)
    }

    fn amount(env: &Env, key: &DataKey) -> i128 {
        env.storage().instance().get(key).unwrap_or(0)
    }

    fn bump(env: &Env, key: &DataKey) {
        let current = Self::counter(env, key);
        env.storage().instance().set(key, &(current + 1));
    }

    fn add(env: &Env, key: &DataKey, value: i128) {
        let current = Self::amount(env, key);
        env.storage().instance().set(key, &(current + value));
    }
}
