use anchor_lang::error::Error;
use anchor_lang::prelude::*;

#[error_code]
pub enum FarmError {
    #[msg("Caller is not the farm authority")]
    Unauthorized,

    #[msg("Pool does not exist")]
    UnknownPool,

    #[msg("Amount must be greater than 0")]
    InvalidAmount,

    #[msg("Invalid withdrawal amount")]
    InvalidWithdrawal,

    #[msg("Not in harvesting period")]
    NotHarvestingPeriod,

    #[msg("No rewards to harvest")]
    NoRewardsToHarvest,

    #[msg("Transfer amount exceeds balance")]
    InsufficientExternalBalance,

    #[msg("Transfer rejected by asset gateway")]
    TransferRejected,

    #[msg("Invalid farm configuration")]
    InvalidConfig,

    #[msg("Arithmetic overflow")]
    Overflow,

    #[msg("Snapshot digest does not match its contents")]
    SnapshotMismatch,
}

/// Numeric code carried by an anchor error, if it came from an `#[error_code]` enum.
pub fn error_code(err: &Error) -> Option<u32> {
    match err {
        Error::AnchorError(anchor_error) => Some(anchor_error.error_code_number),
        Error::ProgramError(_) => None,
    }
}

impl FarmError {
    /// Whether `err` was raised as this variant.
    pub fn matches(self, err: &Error) -> bool {
        error_code(err) == Some(u32::from(self))
    }
}
