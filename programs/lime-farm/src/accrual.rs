//! Block-driven reward accrual using an accumulator per staked unit and a
//! per-position snapshot of the accumulator at its last settlement, so
//! distribution is O(1) regardless of the number of stakers.
//!
//! Nothing in here knows about pool ids, owners or transfers; the ledger
//! wires these numbers into its records.

use anchor_lang::prelude::*;

use crate::amount::{Amount, RewardPerShare};

/// Accrual state of a single pool.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct PoolAccrual {
    /// Reward base units emitted per block, split across all stakers.
    pub reward_rate: Amount,

    /// Sum of every position's stake.
    pub total_staked: Amount,

    /// Reward earned per staked base unit since creation, scaled by 10^36.
    pub acc_reward_per_share: RewardPerShare,

    /// Block at which `acc_reward_per_share` was last brought up to date.
    pub last_reward_block: u64,
}

impl PoolAccrual {
    pub fn new(reward_rate: Amount, start_block: u64) -> Self {
        Self {
            reward_rate,
            total_staked: Amount::zero(),
            acc_reward_per_share: RewardPerShare::zero(),
            last_reward_block: start_block,
        }
    }

    /// Brings the accumulator up to `current_block` and returns the reward that
    /// was distributed to stakers. Blocks that elapse while nothing is staked
    /// are skipped, never paid out later.
    pub fn checkpoint(&mut self, current_block: u64) -> Amount {
        if current_block <= self.last_reward_block {
            return Amount::zero();
        }
        let elapsed = current_block - self.last_reward_block;
        self.last_reward_block = current_block;

        let reward = self.reward_rate.times(elapsed);
        match RewardPerShare::per_unit(&reward, &self.total_staked) {
            Some(increase) => {
                self.acc_reward_per_share += &increase;
                reward
            }
            None => Amount::zero(),
        }
    }

    /// Copy of this state checkpointed at `current_block`, for read-only queries.
    pub fn projected(&self, current_block: u64) -> PoolAccrual {
        let mut projected = self.clone();
        projected.checkpoint(current_block);
        projected
    }

    pub fn add_stake(&mut self, amount: &Amount) {
        self.total_staked += amount;
    }

    /// Returns `None` (leaving the total untouched) if `amount` exceeds the total.
    pub fn remove_stake(&mut self, amount: &Amount) -> Option<()> {
        self.total_staked = self.total_staked.checked_sub(amount)?;
        Some(())
    }
}

/// Reward a constant stake earned while the accumulator grew from `paid` to
/// `acc_reward_per_share`. Rounds down once, over the whole growth.
pub fn entitlement(
    acc_reward_per_share: &RewardPerShare,
    staked: &Amount,
    paid: &RewardPerShare,
) -> Amount {
    acc_reward_per_share.since(paid).share_of(staked)
}
