use anchor_lang::prelude::*;

use crate::adapters::{AssetGateway, Authority, ChainClock};
use crate::state::FarmLedger;

pub mod checkpoint;
pub mod create_pool;
pub mod deposit;
pub mod harvest;
pub mod queries;
pub mod snapshot;
pub mod withdraw;

/// Everything a mutating handler may touch, on behalf of `actor`.
pub struct FarmContext<'a> {
    pub ledger: &'a mut FarmLedger,
    pub clock: &'a dyn ChainClock,
    pub gateway: &'a mut dyn AssetGateway,
    pub authority: &'a dyn Authority,
    pub actor: Pubkey,
}
