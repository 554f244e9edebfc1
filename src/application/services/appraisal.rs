//! Chest appraisal service
//!
//! Values treasure chests in dollars against an injected gold price source.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{DomainError, GoldPrice, TreasureChest};
use crate::infrastructure::traits::PriceSource;

/// Service for computing the dollar value of chests.
pub struct AppraisalService {
    prices: Arc<dyn PriceSource>,
}

impl AppraisalService {
    /// Create a new appraisal service reading prices from `prices`.
    pub fn new(prices: Arc<dyn PriceSource>) -> Self {
        Self { prices }
    }

    /// Price the service would appraise at right now.
    pub fn current_price(&self) -> GoldPrice {
        self.prices.gold_price()
    }

    /// Dollar value of a chest at the current gold price.
    pub fn value_in_dollars(&self, chest: &TreasureChest) -> ApplicationResult<Decimal> {
        let price = self.prices.gold_price();
        let value = chest.value_in_dollars(price)?;
        debug!(
            "value_in_dollars: coins={} price={} value={}",
            chest.coin_count(),
            price,
            value
        );
        Ok(value)
    }

    /// Combined dollar value of several chests.
    ///
    /// The price is read once, so every chest is valued at the same snapshot
    /// even if the market moves mid-call.
    pub fn total_value<'a, I>(&self, chests: I) -> ApplicationResult<Decimal>
    where
        I: IntoIterator<Item = &'a TreasureChest>,
    {
        let price = self.prices.gold_price();
        let mut total = Decimal::ZERO;
        let mut count = 0usize;
        for chest in chests {
            let value = chest.value_in_dollars(price)?;
            total = total.checked_add(value).ok_or_else(|| {
                ApplicationError::Domain(DomainError::ValueOverflow {
                    coins: chest.coin_count(),
                })
            })?;
            count += 1;
        }
        debug!("total_value: chests={} price={} total={}", count, price, total);
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::traits::FixedPrice;
    use rust_decimal_macros::dec;

    fn service_at(price: Decimal) -> AppraisalService {
        AppraisalService::new(Arc::new(FixedPrice(GoldPrice::new(price).unwrap())))
    }

    #[test]
    fn test_empty_chest_is_worth_nothing() {
        let service = service_at(dec!(99999.99));
        let value = service.value_in_dollars(&TreasureChest::default()).unwrap();
        assert_eq!(value, Decimal::ZERO);
    }

    #[test]
    fn test_total_value_of_no_chests_is_zero() {
        let service = service_at(dec!(1426.90));
        let none: Vec<TreasureChest> = Vec::new();
        assert_eq!(service.total_value(&none).unwrap(), Decimal::ZERO);
    }
}
