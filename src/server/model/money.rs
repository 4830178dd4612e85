//! Fixed-point money.

use std::fmt;

/// Amount of money counted in minor currency units (hundredths).
///
/// Prices, payouts and shift totals all travel as `Money` so that no rounding
/// happens anywhere except in the payment calculator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Minor units per major unit.
    pub const SCALE: i64 = 100;

    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    pub const fn from_major(major: i64) -> Self {
        Self(major * Self::SCALE)
    }

    /// Converts a major-unit float (as received from clients) rounding to the
    /// nearest minor unit.
    ///
    /// Returns `None` for NaN, infinities and values outside the `i64` minor-unit range.
    pub fn from_major_f64(major: f64) -> Option<Self> {
        let minor = (major * Self::SCALE as f64).round();
        if !minor.is_finite() || minor < i64::MIN as f64 || minor >= i64::MAX as f64 {
            return None;
        }

        Some(Self(minor as i64))
    }

    pub const fn minor(self) -> i64 {
        self.0
    }

    /// Major-unit representation for display and DTOs.
    pub fn as_major_f64(self) -> f64 {
        self.0 as f64 / Self::SCALE as f64
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Adds two amounts, `None` on overflow.
    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    /// Sums amounts, `None` on overflow.
    pub fn checked_sum<I: IntoIterator<Item = Money>>(amounts: I) -> Option<Money> {
        amounts
            .into_iter()
            .try_fold(Money::ZERO, Money::checked_add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let scale = Self::SCALE as u64;
        write!(f, "{}{}.{:02}", sign, abs / scale, abs % scale)
    }
}
