use std::collections::{BTreeMap, BTreeSet};

use anchor_lang::prelude::*;

use crate::amount::Amount;
use crate::errors::FarmError;

/// How a transfer moves value relative to the farm.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// From `account` into farm custody.
    Pull,
    /// From farm custody to `account`.
    Push,
    /// Newly issued to `account`; only valid for assets the farm may mint.
    Mint,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transfer {
    pub account: Pubkey,
    pub asset: Pubkey,
    pub amount: Amount,
    pub direction: Direction,
}

impl Transfer {
    pub fn pull(account: Pubkey, asset: Pubkey, amount: Amount) -> Self {
        Self { account, asset, amount, direction: Direction::Pull }
    }

    pub fn push(account: Pubkey, asset: Pubkey, amount: Amount) -> Self {
        Self { account, asset, amount, direction: Direction::Push }
    }

    pub fn mint(account: Pubkey, asset: Pubkey, amount: Amount) -> Self {
        Self { account, asset, amount, direction: Direction::Mint }
    }
}

/// Moves real balances on behalf of the farm.
///
/// A batch is atomic: either every transfer is applied or none is. Failures
/// should be reported as `InsufficientExternalBalance` or `TransferRejected`.
pub trait AssetGateway {
    fn execute(&mut self, batch: &[Transfer]) -> Result<()>;
}

/// Runs a batch, dropping zero-amount legs and folding unknown failures into
/// `TransferRejected`.
pub(crate) fn execute_batch(gateway: &mut dyn AssetGateway, batch: Vec<Transfer>) -> Result<()> {
    let batch: Vec<Transfer> = batch.into_iter().filter(|t| !t.amount.is_zero()).collect();
    if batch.is_empty() {
        return Ok(());
    }
    gateway.execute(&batch).map_err(|err| {
        if FarmError::InsufficientExternalBalance.matches(&err)
            || FarmError::TransferRejected.matches(&err)
        {
            err
        } else {
            error!(FarmError::TransferRejected)
        }
    })
}

/// In-memory balance book standing in for the token contracts.
#[derive(Clone, Debug, Default)]
pub struct MemoryGateway {
    /// (asset, account) -> balance
    balances: BTreeMap<(Pubkey, Pubkey), Amount>,
    /// asset -> amount held by the farm
    custody: BTreeMap<Pubkey, Amount>,
    /// asset -> amount minted by the farm
    minted: BTreeMap<Pubkey, Amount>,
    mintable: BTreeSet<Pubkey>,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grants the farm mint rights over `asset`.
    pub fn with_mint_authority(mut self, asset: Pubkey) -> Self {
        self.mintable.insert(asset);
        self
    }

    /// Credits `account` out of thin air, to fund test wallets.
    pub fn fund(&mut self, asset: Pubkey, account: Pubkey, amount: Amount) {
        *self.balances.entry((asset, account)).or_default() += &amount;
    }

    pub fn balance_of(&self, asset: &Pubkey, account: &Pubkey) -> Amount {
        self.balances
            .get(&(*asset, *account))
            .cloned()
            .unwrap_or_default()
    }

    pub fn custody_of(&self, asset: &Pubkey) -> Amount {
        self.custody.get(asset).cloned().unwrap_or_default()
    }

    pub fn minted(&self, asset: &Pubkey) -> Amount {
        self.minted.get(asset).cloned().unwrap_or_default()
    }

    fn apply(&mut self, transfer: &Transfer) -> Result<()> {
        let Transfer { account, asset, amount, direction } = transfer;
        match direction {
            Direction::Pull => {
                let balance = self.balances.entry((*asset, *account)).or_default();
                *balance = balance
                    .checked_sub(amount)
                    .ok_or_else(|| error!(FarmError::InsufficientExternalBalance))?;
                *self.custody.entry(*asset).or_default() += amount;
            }
            Direction::Push => {
                let held = self.custody.entry(*asset).or_default();
                *held = held
                    .checked_sub(amount)
                    .ok_or_else(|| error!(FarmError::TransferRejected))?;
                *self.balances.entry((*asset, *account)).or_default() += amount;
            }
            Direction::Mint => {
                require!(self.mintable.contains(asset), FarmError::TransferRejected);
                *self.minted.entry(*asset).or_default() += amount;
                *self.balances.entry((*asset, *account)).or_default() += amount;
            }
        }
        Ok(())
    }
}

impl AssetGateway for MemoryGateway {
    fn execute(&mut self, batch: &[Transfer]) -> Result<()> {
        let mut staged = self.clone();
        for transfer in batch {
            staged.apply(transfer)?;
        }
        *self = staged;
        Ok(())
    }
}
