use anchor_lang::prelude::*;

use crate::adapters::{execute_batch, Transfer};
use crate::amount::Amount;
use crate::errors::FarmError;
use crate::instructions::FarmContext;
use crate::policy::TaxFlow;

/// Unstakes `amount` (gross) from a pool, returning what was paid out after tax
pub fn handler(ctx: FarmContext, pool_id: u64, amount: Amount) -> Result<Amount> {
    let FarmContext { ledger, clock, gateway, actor, .. } = ctx;
    let current_block = clock.current_block();

    let mut pool = ledger.pool(pool_id)?.clone();
    require!(!amount.is_zero(), FarmError::InvalidWithdrawal);

    let mut stake_account = ledger
        .position(pool_id, &actor)
        .cloned()
        .ok_or_else(|| error!(FarmError::InvalidWithdrawal))?;

    require!(
        amount <= stake_account.staked_amount,
        FarmError::InvalidWithdrawal
    );

    // Rewards earned by the full stake are settled before it shrinks
    pool.accrual.checkpoint(current_block);
    stake_account.settle(pool.acc_reward_per_share());

    stake_account.staked_amount = stake_account
        .staked_amount
        .checked_sub(&amount)
        .ok_or(FarmError::InvalidWithdrawal)?;
    pool.accrual
        .remove_stake(&amount)
        .ok_or(FarmError::Overflow)?;

    if stake_account.staked_amount.is_zero() {
        pool.staker_count = pool.staker_count.saturating_sub(1);
    }

    let split = ledger
        .config
        .tax
        .compute(&amount, pool.tax_free, TaxFlow::Withdraw);

    execute_batch(
        gateway,
        vec![
            Transfer::push(actor, pool.stake_token, split.net.clone()),
            Transfer::push(ledger.config.tax_beneficiary, pool.stake_token, split.tax.clone()),
        ],
    )?;

    msg!("Withdrew {} from pool {}, taxed {}", amount, pool_id, split.tax);
    msg!("Remaining: {}, pool size: {}", stake_account.staked_amount, pool.total_staked());

    ledger.config.total_tax_collected += &split.tax;
    ledger.commit(pool, Some(stake_account));

    Ok(split.net)
}
