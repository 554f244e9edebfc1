//! Price boundary traits for testability
//!
//! Chests never read a hidden global price. Callers inject a `PriceSource`,
//! which lets services be tested with a pinned price.

use parking_lot::RwLock;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::domain::{DomainResult, GoldPrice};

/// Source of the current gold price per ounce.
pub trait PriceSource: Send + Sync {
    /// Current price of one ounce of gold.
    fn gold_price(&self) -> GoldPrice;
}

// ============================================================
// IMPLEMENTATIONS
// ============================================================

/// Shared, mutable gold price.
///
/// One market stands for one real-world gold market: every chest appraised
/// against it sees the same price. Wrap in `Arc` to share across services
/// and threads.
#[derive(Debug, Default)]
pub struct GoldMarket {
    price: RwLock<GoldPrice>,
}

impl GoldMarket {
    /// Create a market opening at `initial`.
    pub fn new(initial: GoldPrice) -> Self {
        Self {
            price: RwLock::new(initial),
        }
    }

    /// Current price of one ounce of gold.
    pub fn gold_price(&self) -> GoldPrice {
        *self.price.read()
    }

    /// Overwrite the price for every reader of this market.
    ///
    /// A negative price is rejected and the previous price stays in effect.
    pub fn set_gold_price(&self, price: Decimal) -> DomainResult<()> {
        let price = GoldPrice::new(price).inspect_err(|e| {
            warn!("set_gold_price: rejected: {}", e);
        })?;
        let previous = std::mem::replace(&mut *self.price.write(), price);
        debug!("set_gold_price: {} -> {}", previous, price);
        Ok(())
    }
}

impl PriceSource for GoldMarket {
    fn gold_price(&self) -> GoldPrice {
        GoldMarket::gold_price(self)
    }
}

/// Constant price source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedPrice(pub GoldPrice);

impl PriceSource for FixedPrice {
    fn gold_price(&self) -> GoldPrice {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_market_opens_at_default_price() {
        let market = GoldMarket::default();
        assert_eq!(market.gold_price(), GoldPrice::DEFAULT);
    }

    #[test]
    fn test_set_gold_price_negative_keeps_previous() {
        let market = GoldMarket::new(GoldPrice::new(dec!(1000)).unwrap());
        assert!(market.set_gold_price(dec!(-1)).is_err());
        assert_eq!(market.gold_price().value(), dec!(1000));
    }

    #[test]
    fn test_market_as_price_source() {
        let market = GoldMarket::default();
        market.set_gold_price(dec!(42.5)).unwrap();
        let source: &dyn PriceSource = &market;
        assert_eq!(source.gold_price().value(), dec!(42.5));
    }

    #[test]
    fn test_fixed_price() {
        let source = FixedPrice(GoldPrice::ZERO);
        assert_eq!(source.gold_price(), GoldPrice::ZERO);
    }
}
