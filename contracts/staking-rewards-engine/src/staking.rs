use crate::interface::StakingStatsOperations;
use crate::types::{StakingRecord, StakingStatistics, StakingStatus};
use soroban_sdk::Vec;

/// Fixed normalization period for full-period yield, independent of each
/// package's own lock period
pub const YIELD_NORMALIZATION_DAYS: i128 = 365;

pub const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

pub struct StakingStatsModule;

impl StakingStatsOperations for StakingStatsModule {
    fn compute_statistics(records: Vec<StakingRecord>, now: u64) -> StakingStatistics {
        let mut stats = StakingStatistics {
            total_staking_amount: 0,
            active_staking_amount: 0,
            active_staking_number: 0,
            completed_staking_amount: 0,
            completed_staking_number: 0,
            earned_from_active: 0,
            earned_from_completed: 0,
            earning_claimed_from_active: 0,
        };

        for record in records.iter() {
            // Missing or malformed package data degrades to zero, never errors
            let (amount, daily_yield) = match &record.package {
                Some(package) => (
                    package.stake_amount.max(0),
                    package.daily_yield_percentage.max(0),
                ),
                None => (0, 0),
            };

            stats.total_staking_amount += amount;

            match record.status {
                StakingStatus::Active => {
                    stats.active_staking_amount += amount;
                    stats.active_staking_number += 1;

                    // Whole days elapsed, clamped so future timestamps accrue nothing
                    let days_active =
                        (now.saturating_sub(record.created_at) / SECONDS_PER_DAY) as i128;

                    stats.earned_from_active += amount * daily_yield * days_active / 100;
                    stats.earning_claimed_from_active +=
                        amount * daily_yield * YIELD_NORMALIZATION_DAYS / 100;
                }
                StakingStatus::Completed => {
                    stats.completed_staking_amount += amount;
                    stats.completed_staking_number += 1;
                    stats.earned_from_completed +=
                        amount * daily_yield * YIELD_NORMALIZATION_DAYS / 100;
                }
                // Cancelled, paused and free stakes count toward the total only
                _ => {}
            }
        }

        stats
    }
}
