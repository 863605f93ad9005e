use anchor_lang::prelude::*;

use crate::amount::Amount;
use crate::instructions::FarmContext;

/// Brings a pool up to the current block and settles the caller's entitlement
/// into their pending harvest without touching their stake.
///
/// Returns the caller's pending harvest after settling.
pub fn handler(ctx: FarmContext, pool_id: u64) -> Result<Amount> {
    let FarmContext { ledger, clock, actor, .. } = ctx;

    let mut pool = ledger.pool(pool_id)?.clone();
    let distributed = pool.accrual.checkpoint(clock.current_block());

    let stake_account = ledger.position(pool_id, &actor).cloned().map(|mut account| {
        account.settle(pool.acc_reward_per_share());
        account
    });

    let settled = stake_account
        .as_ref()
        .map(|account| account.pending_harvest.clone())
        .unwrap_or_default();

    msg!("Checkpointed pool {} at block {}", pool_id, pool.last_reward_block());
    msg!("Distributed: {}, pending harvest: {}", distributed, settled);

    ledger.commit(pool, stake_account);

    Ok(settled)
}
