use anchor_lang::prelude::*;

use crate::amount::Amount;
use crate::errors::FarmError;
use crate::instructions::FarmContext;
use crate::state::StakingPool;

/// Appends a pool; only the farm authority may call this
pub fn handler(
    ctx: FarmContext,
    stake_token: Pubkey,
    reward_rate: Amount,
    tax_free: bool,
) -> Result<u64> {
    require!(ctx.authority.is_admin(&ctx.actor), FarmError::Unauthorized);

    let ledger = ctx.ledger;
    let pool_id = ledger.pools.len() as u64;
    let total_pools = ledger
        .config
        .total_pools
        .checked_add(1)
        .ok_or(FarmError::Overflow)?;

    let pool = StakingPool::new(
        pool_id,
        stake_token,
        reward_rate,
        tax_free,
        ctx.clock.current_block(),
        ctx.clock.current_timestamp(),
    );

    msg!("Created pool {} for token: {}", pool_id, pool.stake_token);
    msg!("Reward rate: {}, tax free: {}", pool.reward_rate(), pool.tax_free);

    ledger.pools.push(pool);
    ledger.config.total_pools = total_pools;

    Ok(pool_id)
}
