#![allow(dead_code)]

use anchor_lang::prelude::*;
use lime_farm::adapters::{ManualClock, MemoryGateway};
use lime_farm::amount::Amount;
use lime_farm::errors::FarmError;
use lime_farm::policy::TaxPolicy;
use lime_farm::state::GlobalConfig;
use lime_farm::TokenFarm;

/// 2021-06-01T12:00:00Z, five and a half days into a harvesting cycle.
pub const START_TIMESTAMP: i64 = 1_622_548_800;
pub const START_BLOCK: u64 = 1_000;

pub type Farm = TokenFarm<ManualClock, MemoryGateway>;

pub struct Harness {
    pub farm: Farm,
    pub owner: Pubkey,
    pub dev: Pubkey,
    pub lime: Pubkey,
    pub investor: Pubkey,
    pub other_investor: Pubkey,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_tax(TaxPolicy::default())
    }

    pub fn with_tax(tax: TaxPolicy) -> Self {
        let owner = Pubkey::new_unique();
        let dev = Pubkey::new_unique();
        let lime = Pubkey::new_unique();

        let gateway = MemoryGateway::new().with_mint_authority(lime);
        let clock = ManualClock::new(START_BLOCK, START_TIMESTAMP);
        let farm = TokenFarm::new(GlobalConfig::new(dev, lime).with_tax(tax), clock, gateway, owner).unwrap();

        Self {
            farm,
            owner,
            dev,
            lime,
            investor: Pubkey::new_unique(),
            other_investor: Pubkey::new_unique(),
        }
    }

    pub fn create_pool(&mut self, token: Pubkey, rate: &str, tax_free: bool) -> u64 {
        let owner = self.owner;
        self.farm
            .create_pool(&owner, token, amt(rate), tax_free)
            .unwrap()
    }

    pub fn fund(&mut self, token: Pubkey, account: Pubkey, amount: &str) {
        self.farm.gateway_mut().fund(token, account, amt(amount));
    }

    pub fn balance(&self, token: &Pubkey, account: &Pubkey) -> Amount {
        self.farm.gateway().balance_of(token, account)
    }

    pub fn deposit(&mut self, pool_id: u64, amount: &str, actor: Pubkey) -> Amount {
        self.farm.deposit(pool_id, amt(amount), &actor).unwrap()
    }

    pub fn withdraw(&mut self, pool_id: u64, amount: &str, actor: Pubkey) -> Amount {
        self.farm.withdraw(pool_id, amt(amount), &actor).unwrap()
    }

    pub fn advance_blocks(&mut self, blocks: u64) {
        self.farm.clock_mut().advance_blocks(blocks);
    }

    pub fn advance_until_harvesting(&mut self) {
        let schedule = self.farm.config().harvest;
        self.farm.clock_mut().advance_until_harvesting(&schedule);
    }
}

pub fn amt(s: &str) -> Amount {
    s.parse().unwrap()
}

pub fn token() -> Pubkey {
    Pubkey::new_unique()
}

#[track_caller]
pub fn assert_fails<T: std::fmt::Debug>(result: Result<T>, kind: FarmError) {
    let err = result.unwrap_err();
    assert!(kind.matches(&err), "expected {kind:?}, got {err:?}");
}

#[track_caller]
pub fn assert_between(value: &Amount, low: &str, high: &str) {
    assert!(
        *value > amt(low) && *value < amt(high),
        "{value} not in ({low}, {high})"
    );
}
