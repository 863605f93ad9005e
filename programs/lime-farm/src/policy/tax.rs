use anchor_lang::prelude::*;

use crate::amount::{Amount, BPS_DENOMINATOR};

/// Deposit tax applied to taxed pools (0.9%).
pub const DEFAULT_DEPOSIT_TAX_BPS: u16 = 90;

/// Withdrawal tax applied to taxed pools (3.5%).
pub const DEFAULT_WITHDRAW_TAX_BPS: u16 = 350;

/// Direction of the principal flow being taxed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaxFlow {
    Deposit,
    Withdraw,
}

/// Result of taxing a gross amount: `net + tax == gross`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaxSplit {
    pub net: Amount,
    pub tax: Amount,
}

/// Flat basis-point tax on principal moving into or out of a taxed pool.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct TaxPolicy {
    pub deposit_bps: u16,
    pub withdraw_bps: u16,
}

impl Default for TaxPolicy {
    fn default() -> Self {
        Self {
            deposit_bps: DEFAULT_DEPOSIT_TAX_BPS,
            withdraw_bps: DEFAULT_WITHDRAW_TAX_BPS,
        }
    }
}

impl TaxPolicy {
    pub fn rate_bps(&self, flow: TaxFlow) -> u16 {
        match flow {
            TaxFlow::Deposit => self.deposit_bps,
            TaxFlow::Withdraw => self.withdraw_bps,
        }
    }

    pub fn is_valid(&self) -> bool {
        u32::from(self.deposit_bps) <= BPS_DENOMINATOR
            && u32::from(self.withdraw_bps) <= BPS_DENOMINATOR
    }

    /// Splits `amount` into the part credited to the actor and the part owed to
    /// the tax beneficiary. The net part rounds down and dust goes to tax, so
    /// splitting a transfer into small pieces never lowers the total tax.
    pub fn compute(&self, amount: &Amount, tax_free: bool, flow: TaxFlow) -> TaxSplit {
        if tax_free {
            return TaxSplit {
                net: amount.clone(),
                tax: Amount::zero(),
            };
        }
        let kept_bps = (BPS_DENOMINATOR as u16).saturating_sub(self.rate_bps(flow));
        let net = amount.bps(kept_bps);
        TaxSplit {
            tax: amount.saturating_sub(&net),
            net,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amt(s: &str) -> Amount {
        s.parse().unwrap()
    }

    #[test]
    fn tax_free_pools_pass_through() {
        let split = TaxPolicy::default().compute(&Amount::tokens(1000), true, TaxFlow::Withdraw);
        assert_eq!(split.net, Amount::tokens(1000));
        assert!(split.tax.is_zero());
    }

    #[test]
    fn deposit_tax_matches_observed_rate() {
        let policy = TaxPolicy::default();
        let split = policy.compute(&Amount::tokens(1000), false, TaxFlow::Deposit);
        assert_eq!(split.net, Amount::tokens(991));
        assert_eq!(split.tax, Amount::tokens(9));

        let split = policy.compute(&Amount::tokens(100), false, TaxFlow::Deposit);
        assert_eq!(split.net, amt("99.1"));
        assert_eq!(split.tax, amt("0.9"));
    }

    #[test]
    fn withdraw_tax_matches_observed_rate() {
        let policy = TaxPolicy::default();
        let split = policy.compute(&Amount::tokens(100), false, TaxFlow::Withdraw);
        assert_eq!(split.net, amt("96.5"));
        assert_eq!(split.tax, amt("3.5"));

        let split = policy.compute(&amt("240.55"), false, TaxFlow::Withdraw);
        assert_eq!(split.net, amt("232.13075"));
        assert_eq!(split.tax, amt("8.41925"));
    }

    #[test]
    fn dust_goes_to_tax() {
        let split = TaxPolicy::default().compute(&Amount::from_base_units(1), false, TaxFlow::Deposit);
        assert!(split.net.is_zero());
        assert_eq!(split.tax, Amount::from_base_units(1));

        let split = TaxPolicy::default().compute(&Amount::from_base_units(111), false, TaxFlow::Deposit);
        assert_eq!(split.net, Amount::from_base_units(110));
        assert_eq!(split.tax, Amount::from_base_units(1));
    }

    #[test]
    fn chunked_transfers_pay_at_least_the_whole_tax() {
        let policy = TaxPolicy::default();
        let whole = policy.compute(&Amount::from_base_units(111_000), false, TaxFlow::Deposit);
        let chunk = policy.compute(&Amount::from_base_units(111), false, TaxFlow::Deposit);
        assert!(chunk.tax.times(1_000) >= whole.tax);
        assert!(chunk.net.times(1_000) <= whole.net);
    }

    #[test]
    fn full_rate_keeps_nothing() {
        let policy = TaxPolicy {
            deposit_bps: 10_000,
            withdraw_bps: 0,
        };
        let split = policy.compute(&Amount::tokens(5), false, TaxFlow::Deposit);
        assert!(split.net.is_zero());
        assert_eq!(split.tax, Amount::tokens(5));

        let split = policy.compute(&Amount::tokens(5), false, TaxFlow::Withdraw);
        assert_eq!(split.net, Amount::tokens(5));
    }

    #[test]
    fn rates_above_one_hundred_percent_are_invalid() {
        let policy = TaxPolicy {
            deposit_bps: 10_001,
            withdraw_bps: 0,
        };
        assert!(!policy.is_valid());
        assert!(TaxPolicy::default().is_valid());
    }
}
