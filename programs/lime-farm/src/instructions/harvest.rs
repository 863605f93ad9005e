use anchor_lang::prelude::*;

use crate::adapters::{execute_batch, Transfer};
use crate::amount::Amount;
use crate::errors::FarmError;
use crate::instructions::FarmContext;

/// Mints the caller's settled rewards to them; only inside a harvesting window
pub fn handler(ctx: FarmContext, pool_id: u64) -> Result<Amount> {
    let FarmContext { ledger, clock, gateway, actor, .. } = ctx;
    let now = clock.current_timestamp();

    require!(
        ledger.config.harvest.is_harvesting_period(now),
        FarmError::NotHarvestingPeriod
    );

    let mut pool = ledger.pool(pool_id)?.clone();
    let mut stake_account = ledger
        .position(pool_id, &actor)
        .cloned()
        .ok_or_else(|| error!(FarmError::NoRewardsToHarvest))?;

    pool.accrual.checkpoint(clock.current_block());
    stake_account.settle(pool.acc_reward_per_share());

    let rewards = stake_account.take_pending();
    require!(!rewards.is_zero(), FarmError::NoRewardsToHarvest);

    execute_batch(
        gateway,
        vec![Transfer::mint(actor, ledger.config.reward_token, rewards.clone())],
    )?;

    stake_account.last_harvest_at = now;
    pool.rewards_harvested += &rewards;
    ledger.config.total_rewards_harvested += &rewards;

    msg!("Harvested {} reward tokens from pool {}", rewards, pool_id);

    ledger.commit(pool, Some(stake_account));

    Ok(rewards)
}
