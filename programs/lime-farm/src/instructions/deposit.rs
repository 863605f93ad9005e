use anchor_lang::prelude::*;

use crate::adapters::{execute_batch, Transfer};
use crate::amount::Amount;
use crate::errors::FarmError;
use crate::instructions::FarmContext;
use crate::policy::TaxFlow;
use crate::state::StakeAccount;

/// Stakes `amount` into a pool, returning the stake credited after tax
pub fn handler(ctx: FarmContext, pool_id: u64, amount: Amount) -> Result<Amount> {
    let FarmContext { ledger, clock, gateway, actor, .. } = ctx;
    let current_block = clock.current_block();
    let now = clock.current_timestamp();

    let mut pool = ledger.pool(pool_id)?.clone();
    require!(!amount.is_zero(), FarmError::InvalidAmount);

    let mut stake_account = ledger
        .position(pool_id, &actor)
        .cloned()
        .unwrap_or_else(|| StakeAccount::new(actor, pool_id, now));

    // Settle what the existing stake earned before it grows
    pool.accrual.checkpoint(current_block);
    stake_account.settle(pool.acc_reward_per_share());

    let split = ledger
        .config
        .tax
        .compute(&amount, pool.tax_free, TaxFlow::Deposit);

    let is_new_staker = stake_account.staked_amount.is_zero() && !split.net.is_zero();
    if is_new_staker {
        stake_account.staked_at = now;
        pool.staker_count = pool.staker_count.saturating_add(1);
    }

    stake_account.staked_amount += &split.net;
    pool.accrual.add_stake(&split.net);

    execute_batch(
        gateway,
        vec![
            Transfer::pull(actor, pool.stake_token, amount.clone()),
            Transfer::push(ledger.config.tax_beneficiary, pool.stake_token, split.tax.clone()),
        ],
    )?;

    msg!("Deposited {} into pool {}, taxed {}", amount, pool_id, split.tax);
    msg!("Staked: {}, pool size: {}", stake_account.staked_amount, pool.total_staked());

    ledger.config.total_tax_collected += &split.tax;
    ledger.commit(pool, Some(stake_account));

    Ok(split.net)
}
