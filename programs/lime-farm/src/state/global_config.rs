use anchor_lang::prelude::*;

use crate::amount::Amount;
use crate::errors::FarmError;
use crate::policy::{HarvestSchedule, TaxPolicy};

/// Farm-wide configuration and running totals
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct GlobalConfig {
    /// Receives every deposit and withdrawal tax
    pub tax_beneficiary: Pubkey,

    /// Asset minted to stakers on harvest
    pub reward_token: Pubkey,

    pub tax: TaxPolicy,

    pub harvest: HarvestSchedule,

    /// Total number of pools created
    pub total_pools: u64,

    /// Total reward tokens paid out through harvests
    pub total_rewards_harvested: Amount,

    /// Total tax routed to the beneficiary, summed across stake tokens
    pub total_tax_collected: Amount,
}

impl GlobalConfig {
    pub fn new(tax_beneficiary: Pubkey, reward_token: Pubkey) -> Self {
        Self {
            tax_beneficiary,
            reward_token,
            tax: TaxPolicy::default(),
            harvest: HarvestSchedule::default(),
            total_pools: 0,
            total_rewards_harvested: Amount::zero(),
            total_tax_collected: Amount::zero(),
        }
    }

    pub fn with_tax(mut self, tax: TaxPolicy) -> Self {
        self.tax = tax;
        self
    }

    pub fn with_harvest(mut self, harvest: HarvestSchedule) -> Self {
        self.harvest = harvest;
        self
    }

    pub fn validate(&self) -> Result<()> {
        require!(self.tax.is_valid(), FarmError::InvalidConfig);
        require!(self.harvest.is_valid(), FarmError::InvalidConfig);
        Ok(())
    }
}
