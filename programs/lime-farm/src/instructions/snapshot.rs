use anchor_lang::prelude::*;
use constant_time_eq::constant_time_eq_32;

use crate::errors::FarmError;
use crate::state::FarmLedger;

/// Serialized ledger state plus its blake3 digest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LedgerSnapshot {
    bytes: Vec<u8>,
    digest: [u8; 32],
}

impl LedgerSnapshot {
    /// Reassembles a snapshot received from elsewhere; checked on restore.
    pub fn from_parts(bytes: Vec<u8>, digest: [u8; 32]) -> Self {
        Self { bytes, digest }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn digest(&self) -> &[u8; 32] {
        &self.digest
    }
}

fn encode(ledger: &FarmLedger) -> Result<Vec<u8>> {
    ledger
        .try_to_vec()
        .map_err(|_| error!(FarmError::SnapshotMismatch))
}

pub fn state_digest(ledger: &FarmLedger) -> Result<[u8; 32]> {
    Ok(*blake3::hash(&encode(ledger)?).as_bytes())
}

pub fn take(ledger: &FarmLedger) -> Result<LedgerSnapshot> {
    let bytes = encode(ledger)?;
    let digest = *blake3::hash(&bytes).as_bytes();
    Ok(LedgerSnapshot { bytes, digest })
}

/// Replaces `ledger` with the snapshot's state. External balances are not
/// part of the ledger and stay as they are.
///
/// The digest only detects corruption, so the restored config is validated
/// like a fresh one.
pub fn restore(ledger: &mut FarmLedger, snapshot: &LedgerSnapshot) -> Result<()> {
    let digest = blake3::hash(&snapshot.bytes);
    require!(
        constant_time_eq_32(digest.as_bytes(), &snapshot.digest),
        FarmError::SnapshotMismatch
    );

    let restored = FarmLedger::try_from_slice(&snapshot.bytes)
        .map_err(|_| error!(FarmError::SnapshotMismatch))?;
    restored.config.validate()?;
    *ledger = restored;

    msg!("Restored ledger with {} pools", ledger.pools.len());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{HarvestSchedule, TaxPolicy};
    use crate::state::GlobalConfig;

    fn ledger() -> FarmLedger {
        FarmLedger::new(GlobalConfig::new(Pubkey::new_unique(), Pubkey::new_unique()))
    }

    #[test]
    fn round_trips_through_bytes() {
        let source = ledger();
        let mut target = ledger();

        restore(&mut target, &take(&source).unwrap()).unwrap();
        assert_eq!(target, source);
    }

    #[test]
    fn rejects_a_zero_length_cycle() {
        let mut broken = ledger();
        broken.config = broken.config.with_harvest(HarvestSchedule {
            cycle_secs: 0,
            window_secs: 0,
        });
        let sealed = take(&broken).unwrap();

        let mut target = ledger();
        let before = target.clone();
        let err = restore(&mut target, &sealed).unwrap_err();

        assert!(FarmError::InvalidConfig.matches(&err));
        assert_eq!(target, before);
    }

    #[test]
    fn rejects_tax_above_one_hundred_percent() {
        let mut broken = ledger();
        broken.config = broken.config.with_tax(TaxPolicy {
            deposit_bps: 10_001,
            withdraw_bps: 0,
        });
        let bytes = broken.try_to_vec().unwrap();
        let digest = *blake3::hash(&bytes).as_bytes();

        let mut target = ledger();
        let err = restore(&mut target, &LedgerSnapshot::from_parts(bytes, digest)).unwrap_err();
        assert!(FarmError::InvalidConfig.matches(&err));
    }

    #[test]
    fn rejects_a_digest_that_does_not_match() {
        let mut snapshot = take(&ledger()).unwrap();
        snapshot.digest[0] ^= 0xff;

        let err = restore(&mut ledger(), &snapshot).unwrap_err();
        assert!(FarmError::SnapshotMismatch.matches(&err));
    }
}
