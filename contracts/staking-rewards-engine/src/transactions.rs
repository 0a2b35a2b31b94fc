use crate::interface::TransactionOperations;
use crate::types::{TransactionRecord, TransactionSummary};
use soroban_sdk::{Env, Map, Symbol, Vec};

pub struct TransactionModule;

impl TransactionOperations for TransactionModule {
    fn summarize(env: Env, records: Vec<TransactionRecord>) -> TransactionSummary {
        let mut by_category: Map<Symbol, i128> = Map::new(&env);

        for record in records.iter() {
            let current = by_category.get(record.category.clone()).unwrap_or(0);
            by_category.set(record.category.clone(), current + record.amount);
        }

        // Known categories get named fields; anything else stays in the raw map
        let staked_amount = Self::category_total(&env, &by_category, "staking");
        let withdrawal_amount = Self::category_total(&env, &by_category, "withdrawal");
        let purchase_amount = Self::category_total(&env, &by_category, "purchase");
        let daily_reward_amount = Self::category_total(&env, &by_category, "daily_reward");
        let unilevel_commission_amount =
            Self::category_total(&env, &by_category, "unilevel_commission");
        let universal_cashback_amount =
            Self::category_total(&env, &by_category, "universal_cashback");
        let weak_leg_bonus_amount = Self::category_total(&env, &by_category, "weak_leg_bonus");
        let admin_adjustment_amount =
            Self::category_total(&env, &by_category, "admin_adjustment");

        TransactionSummary {
            by_category,
            staked_amount,
            withdrawal_amount,
            purchase_amount,
            daily_reward_amount,
            unilevel_commission_amount,
            universal_cashback_amount,
            weak_leg_bonus_amount,
            admin_adjustment_amount,
        }
    }
}

// Helper functions
impl TransactionModule {
    fn category_total(env: &Env, by_category: &Map<Symbol, i128>, category: &str) -> i128 {
        by_category.get(Symbol::new(env, category)).unwrap_or(0)
    }
}
