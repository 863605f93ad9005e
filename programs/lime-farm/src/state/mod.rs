pub mod global_config;
pub mod ledger;
pub mod stake_account;
pub mod staking_pool;

pub use global_config::*;
pub use ledger::*;
pub use stake_account::*;
pub use staking_pool::*;
