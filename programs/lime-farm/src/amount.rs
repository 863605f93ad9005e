use std::fmt;
use std::io::{Read, Write};
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

use anchor_lang::prelude::*;
use num::{BigUint, ToPrimitive, Zero};

use crate::errors::FarmError;

/// Fractional digits carried by every token amount.
pub const DECIMALS: u32 = 18;

/// Fractional digits carried by the reward-per-share accumulator.
pub const ACC_PRECISION_DIGITS: u32 = 36;

/// Denominator for basis-point rates.
pub const BPS_DENOMINATOR: u32 = 10_000;

fn pow10(exponent: u32) -> BigUint {
    BigUint::from(10u32).pow(exponent)
}

fn write_biguint<W: Write>(value: &BigUint, writer: &mut W) -> std::io::Result<()> {
    value.to_bytes_le().serialize(writer)
}

fn read_biguint<R: Read>(reader: &mut R) -> std::io::Result<BigUint> {
    let bytes = Vec::<u8>::deserialize_reader(reader)?;
    Ok(BigUint::from_bytes_le(&bytes))
}

/// Token quantity as an exact integer of base units (10^-18 of a token).
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(BigUint);

impl Amount {
    pub fn zero() -> Self {
        Self(BigUint::zero())
    }

    pub fn from_base_units(units: u128) -> Self {
        Self(BigUint::from(units))
    }

    /// Whole tokens, i.e. `whole * 10^18` base units.
    pub fn tokens(whole: u64) -> Self {
        Self(BigUint::from(whole) * pow10(DECIMALS))
    }

    pub fn to_u128(&self) -> Option<u128> {
        self.0.to_u128()
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn checked_sub(&self, other: &Amount) -> Option<Amount> {
        if self.0 >= other.0 {
            Some(Self(&self.0 - &other.0))
        } else {
            None
        }
    }

    pub fn saturating_sub(&self, other: &Amount) -> Amount {
        self.checked_sub(other).unwrap_or_default()
    }

    /// `self * factor`, used for `elapsed_blocks * reward_rate`.
    pub fn times(&self, factor: u64) -> Amount {
        Self(&self.0 * BigUint::from(factor))
    }

    /// `floor(self * bps / 10_000)`.
    pub fn bps(&self, bps: u16) -> Amount {
        Self(&self.0 * BigUint::from(bps) / BigUint::from(BPS_DENOMINATOR))
    }
}

impl Add for Amount {
    type Output = Amount;

    fn add(self, rhs: Amount) -> Amount {
        Self(self.0 + rhs.0)
    }
}

impl<'a> Add<&'a Amount> for &'a Amount {
    type Output = Amount;

    fn add(self, rhs: &'a Amount) -> Amount {
        Amount(&self.0 + &rhs.0)
    }
}

impl AddAssign<&Amount> for Amount {
    fn add_assign(&mut self, rhs: &Amount) {
        self.0 += &rhs.0;
    }
}

impl<'a> Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Amount {
        iter.fold(Amount::zero(), |acc, amount| &acc + amount)
    }
}

impl From<u64> for Amount {
    fn from(units: u64) -> Self {
        Self(BigUint::from(units))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let one = pow10(DECIMALS);
        let whole = &self.0 / &one;
        let fraction = &self.0 % &one;
        if fraction.is_zero() {
            return write!(f, "{}", whole);
        }
        let digits = format!("{:0>width$}", fraction.to_string(), width = DECIMALS as usize);
        write!(f, "{}.{}", whole, digits.trim_end_matches('0'))
    }
}

impl FromStr for Amount {
    type Err = anchor_lang::error::Error;

    /// Parses a decimal token quantity such as `"99.1"` into base units.
    fn from_str(s: &str) -> Result<Self> {
        let (whole, fraction) = match s.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (s, ""),
        };
        let is_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        require!(
            !whole.is_empty() && is_digits(whole) && is_digits(fraction),
            FarmError::InvalidAmount
        );
        require!(
            fraction.len() <= DECIMALS as usize,
            FarmError::InvalidAmount
        );

        let padded = format!("{}{:0<width$}", whole, fraction, width = DECIMALS as usize);
        let units = padded
            .parse::<BigUint>()
            .map_err(|_| error!(FarmError::InvalidAmount))?;
        Ok(Self(units))
    }
}

impl AnchorSerialize for Amount {
    fn serialize<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        write_biguint(&self.0, writer)
    }
}

impl AnchorDeserialize for Amount {
    fn deserialize_reader<R: Read>(reader: &mut R) -> std::io::Result<Self> {
        Ok(Self(read_biguint(reader)?))
    }
}

/// Cumulative reward per staked base unit, scaled by 10^36.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct RewardPerShare(BigUint);

impl RewardPerShare {
    pub fn zero() -> Self {
        Self(BigUint::zero())
    }

    pub fn precision() -> BigUint {
        pow10(ACC_PRECISION_DIGITS)
    }

    /// `floor(reward * 10^36 / total_staked)`; `None` when nothing is staked.
    pub fn per_unit(reward: &Amount, total_staked: &Amount) -> Option<RewardPerShare> {
        if total_staked.is_zero() {
            return None;
        }
        Some(Self(&reward.0 * Self::precision() / &total_staked.0))
    }

    /// `floor(staked * self / 10^36)`, in reward base units.
    pub fn share_of(&self, staked: &Amount) -> Amount {
        Amount(&staked.0 * &self.0 / Self::precision())
    }

    /// Growth since `earlier`, zero if `earlier` is ahead.
    pub fn since(&self, earlier: &RewardPerShare) -> RewardPerShare {
        if self.0 >= earlier.0 {
            Self(&self.0 - &earlier.0)
        } else {
            Self::zero()
        }
    }
}

impl AddAssign<&RewardPerShare> for RewardPerShare {
    fn add_assign(&mut self, rhs: &RewardPerShare) {
        self.0 += &rhs.0;
    }
}

impl AnchorSerialize for RewardPerShare {
    fn serialize<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        write_biguint(&self.0, writer)
    }
}

impl AnchorDeserialize for RewardPerShare {
    fn deserialize_reader<R: Read>(reader: &mut R) -> std::io::Result<Self> {
        Ok(Self(read_biguint(reader)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amt(s: &str) -> Amount {
        s.parse().unwrap()
    }

    #[test]
    fn parses_decimal_token_strings() {
        assert_eq!(amt("1000"), Amount::tokens(1000));
        assert_eq!(amt("0.9").to_u128(), Some(900_000_000_000_000_000));
        assert_eq!(amt("954.13075").to_string(), "954.13075");
        assert_eq!(amt("0.000000000000000001"), Amount::from_base_units(1));
    }

    #[test]
    fn rejects_malformed_strings() {
        for bad in ["", ".5", "1.2.3", "-1", "12a", "0.0000000000000000001"] {
            let err = bad.parse::<Amount>().unwrap_err();
            assert!(FarmError::InvalidAmount.matches(&err), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn display_trims_trailing_zeros() {
        assert_eq!(Amount::tokens(991).to_string(), "991");
        assert_eq!(amt("1089.20").to_string(), "1089.2");
        assert_eq!(Amount::zero().to_string(), "0");
    }

    #[test]
    fn basis_points_truncate() {
        assert_eq!(Amount::tokens(1000).bps(90), Amount::tokens(9));
        assert_eq!(Amount::from_base_units(111).bps(90), Amount::zero());
        assert_eq!(Amount::from_base_units(112).bps(90), Amount::from_base_units(1));
    }

    #[test]
    fn subtraction_never_goes_negative() {
        let small = Amount::tokens(1);
        let large = Amount::tokens(2);
        assert_eq!(small.checked_sub(&large), None);
        assert_eq!(small.saturating_sub(&large), Amount::zero());
        assert_eq!(large.checked_sub(&small), Some(Amount::tokens(1)));
    }

    #[test]
    fn per_unit_requires_stake() {
        assert_eq!(RewardPerShare::per_unit(&Amount::tokens(1), &Amount::zero()), None);
        let acc = RewardPerShare::per_unit(&Amount::tokens(300), &Amount::tokens(3)).unwrap();
        assert_eq!(acc.share_of(&Amount::tokens(1)), Amount::tokens(100));
    }

    #[test]
    fn accumulator_growth_is_never_negative() {
        let early = RewardPerShare::per_unit(&Amount::tokens(1), &Amount::tokens(4)).unwrap();
        let mut late = early.clone();
        late += &early;

        assert_eq!(late.since(&early), early);
        assert_eq!(early.since(&late), RewardPerShare::zero());
    }

    #[test]
    fn borsh_keeps_large_values() {
        let value = Amount::tokens(u64::MAX).times(u64::MAX);
        let bytes = value.try_to_vec().unwrap();
        assert_eq!(Amount::try_from_slice(&bytes).unwrap(), value);
    }
}
