use crate::server::model::{money::Money, payment::DriverShare};

/// Computes driver payouts from order prices.
#[derive(Debug, Clone, Copy)]
pub struct PaymentCalculator {
    share: DriverShare,
}

impl PaymentCalculator {
    pub fn new(share: DriverShare) -> Self {
        Self { share }
    }

    /// Driver payout for an order price
    ///
    /// `price × share`, rounded to the nearest minor unit with halves rounded away
    /// from zero.
    pub fn driver_payout(&self, price: Money) -> Money {
        let whole = i128::from(DriverShare::WHOLE);
        let scaled = i128::from(price.minor()) * i128::from(self.share.basis_points());

        let half = whole / 2;
        let rounded = if scaled >= 0 {
            (scaled + half) / whole
        } else {
            (scaled - half) / whole
        };

        // share <= WHOLE keeps |rounded| <= |price|, so the conversion cannot fail
        Money::from_minor(i64::try_from(rounded).unwrap_or(i64::MAX))
    }
}
