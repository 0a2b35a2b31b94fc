use crate::interface::ReferralNetworkOperations;
use crate::types::{FlatReferral, ReferralAggregate, ReferralNode};
use soroban_sdk::{Env, Map, Vec};

/// Bound on traversal depth. The upstream source guarantees acyclicity,
/// but a corrupted payload must not walk forever; nodes at this depth are
/// emitted, their children are not visited.
pub const MAX_REFERRAL_DEPTH: u32 = 64;

pub struct ReferralNetworkModule;

impl ReferralNetworkOperations for ReferralNetworkModule {
    fn flatten(env: Env, roots: Vec<ReferralNode>) -> ReferralAggregate {
        let mut referrals: Vec<FlatReferral> = Vec::new(&env);
        let mut stack: Vec<(ReferralNode, u32)> = Vec::new(&env);

        // Push in reverse so popping preserves input order of siblings
        for index in (0..roots.len()).rev() {
            stack.push_back((roots.get_unchecked(index), 1));
        }

        // Pre-order: parent first, then its descendants, then later siblings
        while let Some((node, level)) = stack.pop_back() {
            referrals.push_back(FlatReferral {
                user: node.user.clone(),
                level,
            });

            if level < MAX_REFERRAL_DEPTH {
                let children = node.sub_referrals;
                for index in (0..children.len()).rev() {
                    stack.push_back((children.get_unchecked(index), level + 1));
                }
            }
        }

        let mut referrals_by_level: Map<u32, Vec<FlatReferral>> = Map::new(&env);
        for referral in referrals.iter() {
            let mut bucket = referrals_by_level
                .get(referral.level)
                .unwrap_or_else(|| Vec::new(&env));
            bucket.push_back(referral.clone());
            referrals_by_level.set(referral.level, bucket);
        }

        ReferralAggregate {
            total_referral_count: referrals.len(),
            referrals,
            referrals_by_level,
        }
    }
}
