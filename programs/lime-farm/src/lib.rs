use anchor_lang::prelude::*;

pub mod accrual;
pub mod adapters;
pub mod amount;
pub mod errors;
pub mod instructions;
pub mod policy;
pub mod state;

use adapters::{AssetGateway, Authority, ChainClock};
use amount::Amount;
use instructions::snapshot::LedgerSnapshot;
use instructions::FarmContext;
use state::{FarmLedger, GlobalConfig, StakeAccount, StakingPool};

/// LIME token farm
///
/// Stakers deposit tokens into pools and accrue LIME every block in proportion
/// to their share of the pool. Rewards can only be harvested during the
/// harvesting window at the start of each cycle.
///
/// Mutating calls take `&mut self`, so the farm is a single writer; each call
/// either commits fully or leaves the ledger untouched.
pub struct TokenFarm<C, G, A = Pubkey> {
    ledger: FarmLedger,
    clock: C,
    gateway: G,
    authority: A,
}

impl<C, G, A> TokenFarm<C, G, A>
where
    C: ChainClock,
    G: AssetGateway,
    A: Authority,
{
    pub fn new(config: GlobalConfig, clock: C, gateway: G, authority: A) -> Result<Self> {
        config.validate()?;

        msg!("Initialized token farm");
        msg!("Tax beneficiary: {}", config.tax_beneficiary);
        msg!("Reward token: {}", config.reward_token);

        Ok(Self {
            ledger: FarmLedger::new(config),
            clock,
            gateway,
            authority,
        })
    }

    fn context(&mut self, actor: &Pubkey) -> FarmContext<'_> {
        FarmContext {
            ledger: &mut self.ledger,
            clock: &self.clock,
            gateway: &mut self.gateway,
            authority: &self.authority,
            actor: *actor,
        }
    }

    /// Create a staking pool (admin only)
    pub fn create_pool(
        &mut self,
        actor: &Pubkey,
        stake_token: Pubkey,
        reward_rate: Amount,
        tax_free: bool,
    ) -> Result<u64> {
        instructions::create_pool::handler(self.context(actor), stake_token, reward_rate, tax_free)
    }

    /// Stake tokens into a pool
    pub fn deposit(&mut self, pool_id: u64, amount: Amount, actor: &Pubkey) -> Result<Amount> {
        instructions::deposit::handler(self.context(actor), pool_id, amount)
    }

    /// Unstake tokens from a pool
    pub fn withdraw(&mut self, pool_id: u64, amount: Amount, actor: &Pubkey) -> Result<Amount> {
        instructions::withdraw::handler(self.context(actor), pool_id, amount)
    }

    /// Lock in accrued rewards without changing stake
    pub fn checkpoint(&mut self, pool_id: u64, actor: &Pubkey) -> Result<Amount> {
        instructions::checkpoint::handler(self.context(actor), pool_id)
    }

    /// Claim accumulated rewards
    pub fn harvest(&mut self, pool_id: u64, actor: &Pubkey) -> Result<Amount> {
        instructions::harvest::handler(self.context(actor), pool_id)
    }

    pub fn available_harvest(&self, pool_id: u64, actor: &Pubkey) -> Result<Amount> {
        instructions::queries::available_harvest(
            &self.ledger,
            self.clock.current_block(),
            pool_id,
            actor,
        )
    }

    pub fn pool_size(&self, pool_id: u64) -> Result<Amount> {
        instructions::queries::pool_size(&self.ledger, pool_id)
    }

    pub fn user_stake(&self, pool_id: u64, actor: &Pubkey) -> Result<Amount> {
        instructions::queries::user_stake(&self.ledger, pool_id, actor)
    }

    pub fn total_pools(&self) -> u64 {
        instructions::queries::total_pools(&self.ledger)
    }

    pub fn is_harvesting_period(&self) -> bool {
        self.ledger
            .config
            .harvest
            .is_harvesting_period(self.clock.current_timestamp())
    }

    /// Seconds until harvesting opens, 0 while it is open
    pub fn time_until_harvesting(&self) -> i64 {
        self.ledger
            .config
            .harvest
            .time_until_next_window(self.clock.current_timestamp())
    }

    pub fn pool(&self, pool_id: u64) -> Result<&StakingPool> {
        self.ledger.pool(pool_id)
    }

    pub fn position(&self, pool_id: u64, actor: &Pubkey) -> Option<&StakeAccount> {
        self.ledger.position(pool_id, actor)
    }

    pub fn config(&self) -> &GlobalConfig {
        &self.ledger.config
    }

    pub fn ledger(&self) -> &FarmLedger {
        &self.ledger
    }

    pub fn snapshot(&self) -> Result<LedgerSnapshot> {
        instructions::snapshot::take(&self.ledger)
    }

    pub fn restore(&mut self, snapshot: &LedgerSnapshot) -> Result<()> {
        instructions::snapshot::restore(&mut self.ledger, snapshot)
    }

    pub fn state_digest(&self) -> Result<[u8; 32]> {
        instructions::snapshot::state_digest(&self.ledger)
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn gateway_mut(&mut self) -> &mut G {
        &mut self.gateway
    }
}
