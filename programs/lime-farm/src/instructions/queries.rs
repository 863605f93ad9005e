use anchor_lang::prelude::*;

use crate::amount::Amount;
use crate::state::FarmLedger;

/// Rewards `owner` could harvest from `pool_id` as of `current_block`,
/// computed on a projected copy of the pool.
pub fn available_harvest(
    ledger: &FarmLedger,
    current_block: u64,
    pool_id: u64,
    owner: &Pubkey,
) -> Result<Amount> {
    let pool = ledger.pool(pool_id)?;
    let projected = pool.accrual.projected(current_block);
    Ok(ledger
        .position(pool_id, owner)
        .map(|account| account.available_harvest(&projected.acc_reward_per_share))
        .unwrap_or_default())
}

pub fn pool_size(ledger: &FarmLedger, pool_id: u64) -> Result<Amount> {
    Ok(ledger.pool(pool_id)?.total_staked().clone())
}

pub fn user_stake(ledger: &FarmLedger, pool_id: u64, owner: &Pubkey) -> Result<Amount> {
    ledger.pool(pool_id)?;
    Ok(ledger
        .position(pool_id, owner)
        .map(|account| account.staked_amount.clone())
        .unwrap_or_default())
}

pub fn total_pools(ledger: &FarmLedger) -> u64 {
    ledger.pools.len() as u64
}
