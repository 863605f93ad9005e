use anchor_lang::prelude::*;

use crate::accrual;
use crate::amount::{Amount, RewardPerShare};

/// A participant's position in one pool, keyed by (pool id, owner)
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct StakeAccount {
    /// Owner of this position
    pub owner: Pubkey,

    /// The pool this position belongs to
    pub pool_id: u64,

    /// Amount of stake token currently staked
    pub staked_amount: Amount,

    /// Pool accumulator value at the last settlement
    pub reward_per_share_paid: RewardPerShare,

    /// Settled reward waiting for a harvest window
    pub pending_harvest: Amount,

    /// Timestamp of the deposit that opened the current stake
    pub staked_at: i64,

    /// Timestamp of the last harvest, 0 if never harvested
    pub last_harvest_at: i64,
}

impl StakeAccount {
    pub fn new(owner: Pubkey, pool_id: u64, staked_at: i64) -> Self {
        Self {
            owner,
            pool_id,
            staked_amount: Amount::zero(),
            reward_per_share_paid: RewardPerShare::zero(),
            pending_harvest: Amount::zero(),
            staked_at,
            last_harvest_at: 0,
        }
    }

    /// Reward earned since the last settlement
    pub fn entitlement(&self, acc_reward_per_share: &RewardPerShare) -> Amount {
        accrual::entitlement(acc_reward_per_share, &self.staked_amount, &self.reward_per_share_paid)
    }

    /// Moves the current entitlement into `pending_harvest` and marks the
    /// accumulator as paid up to `acc_reward_per_share`. Must run before every
    /// stake change.
    pub fn settle(&mut self, acc_reward_per_share: &RewardPerShare) -> Amount {
        let earned = self.entitlement(acc_reward_per_share);
        self.pending_harvest += &earned;
        self.reward_per_share_paid = acc_reward_per_share.clone();
        earned
    }

    /// Pending plus unsettled reward
    pub fn available_harvest(&self, acc_reward_per_share: &RewardPerShare) -> Amount {
        &self.pending_harvest + &self.entitlement(acc_reward_per_share)
    }

    /// Empties `pending_harvest`, returning what it held
    pub fn take_pending(&mut self) -> Amount {
        std::mem::take(&mut self.pending_harvest)
    }
}
