use anchor_lang::prelude::*;

use crate::accrual::PoolAccrual;
use crate::amount::{Amount, RewardPerShare};

/// A farm pool accepting a single stake token
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct StakingPool {
    /// Sequential index, assigned at creation and never reused
    pub id: u64,

    /// Asset accepted by this pool
    pub stake_token: Pubkey,

    /// When false, deposits and withdrawals pay the farm tax
    pub tax_free: bool,

    /// Reward rate, total stake and accumulator
    pub accrual: PoolAccrual,

    /// Number of positions with a non-zero stake
    pub staker_count: u32,

    /// Reward tokens harvested out of this pool
    pub rewards_harvested: Amount,

    /// Pool creation timestamp
    pub created_at: i64,
}

impl StakingPool {
    pub fn new(
        id: u64,
        stake_token: Pubkey,
        reward_rate: Amount,
        tax_free: bool,
        current_block: u64,
        created_at: i64,
    ) -> Self {
        Self {
            id,
            stake_token,
            tax_free,
            accrual: PoolAccrual::new(reward_rate, current_block),
            staker_count: 0,
            rewards_harvested: Amount::zero(),
            created_at,
        }
    }

    pub fn total_staked(&self) -> &Amount {
        &self.accrual.total_staked
    }

    pub fn reward_rate(&self) -> &Amount {
        &self.accrual.reward_rate
    }

    pub fn acc_reward_per_share(&self) -> &RewardPerShare {
        &self.accrual.acc_reward_per_share
    }

    pub fn last_reward_block(&self) -> u64 {
        self.accrual.last_reward_block
    }
}
