use std::collections::BTreeMap;

use anchor_lang::prelude::*;

use crate::amount::Amount;
use crate::errors::FarmError;
use crate::state::{GlobalConfig, StakeAccount, StakingPool};

/// Every record the farm owns. Only instruction handlers mutate it.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct FarmLedger {
    pub config: GlobalConfig,
    pub pools: Vec<StakingPool>,
    pub positions: BTreeMap<(u64, Pubkey), StakeAccount>,
}

impl FarmLedger {
    pub fn new(config: GlobalConfig) -> Self {
        Self {
            config,
            pools: Vec::new(),
            positions: BTreeMap::new(),
        }
    }

    pub fn pool(&self, pool_id: u64) -> Result<&StakingPool> {
        usize::try_from(pool_id)
            .ok()
            .and_then(|index| self.pools.get(index))
            .ok_or_else(|| error!(FarmError::UnknownPool))
    }

    pub fn position(&self, pool_id: u64, owner: &Pubkey) -> Option<&StakeAccount> {
        self.positions.get(&(pool_id, *owner))
    }

    pub fn positions_in(&self, pool_id: u64) -> impl Iterator<Item = &StakeAccount> {
        self.positions
            .range((pool_id, Pubkey::default())..)
            .take_while(move |((id, _), _)| *id == pool_id)
            .map(|(_, position)| position)
    }

    /// Sum of every position's stake in `pool_id`.
    pub fn summed_stake(&self, pool_id: u64) -> Amount {
        self.positions_in(pool_id).map(|p| &p.staked_amount).sum()
    }

    /// Writes back a staged pool and, optionally, a staged position.
    pub(crate) fn commit(&mut self, pool: StakingPool, position: Option<StakeAccount>) {
        if let Some(position) = position {
            self.positions
                .insert((position.pool_id, position.owner), position);
        }
        let slot = usize::try_from(pool.id)
            .ok()
            .and_then(|index| self.pools.get_mut(index));
        if let Some(slot) = slot {
            *slot = pool;
        }
    }
}
