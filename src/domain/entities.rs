//! Domain entities: treasure chest and gold price

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::error::{DomainError, DomainResult};

/// Ounces of gold in one Twenty-dollar Liberty gold coin.
pub const GOLD_OUNCES_PER_COIN: Decimal = dec!(0.9675);

/// Most decimal places a price may carry. Multiplying by
/// `GOLD_OUNCES_PER_COIN` adds four more, and `Decimal` holds 28.
pub const MAX_PRICE_SCALE: u32 = 24;

/// Price of one ounce of gold in dollars. Never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct GoldPrice(Decimal);

impl GoldPrice {
    /// Price the market opens with when nothing else is configured.
    pub const DEFAULT: GoldPrice = GoldPrice(dec!(1426.90));

    pub const ZERO: GoldPrice = GoldPrice(Decimal::ZERO);

    /// Validate a price per ounce.
    ///
    /// # Errors
    /// `InvalidArgument` if `price` is negative or has more than
    /// `MAX_PRICE_SCALE` decimal places.
    pub fn new(price: Decimal) -> DomainResult<Self> {
        if price < Decimal::ZERO {
            return Err(DomainError::invalid_argument(format!(
                "the price of gold can't be negative: {price}"
            )));
        }
        if price.scale() > MAX_PRICE_SCALE {
            return Err(DomainError::invalid_argument(format!(
                "the price of gold can't have more than {MAX_PRICE_SCALE} decimal places: {price}"
            )));
        }
        Ok(Self(price))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl Default for GoldPrice {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<Decimal> for GoldPrice {
    type Error = DomainError;

    fn try_from(price: Decimal) -> DomainResult<Self> {
        Self::new(price)
    }
}

impl From<GoldPrice> for Decimal {
    fn from(price: GoldPrice) -> Self {
        price.0
    }
}

impl fmt::Display for GoldPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A chest of gold coins.
///
/// The coin count is never negative: construction and every mutation are
/// validated, and a rejected call leaves the chest untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TreasureChest {
    coins: i32,
}

impl TreasureChest {
    /// Create a chest holding `initial_coins` coins.
    ///
    /// # Errors
    /// `InvalidArgument` if `initial_coins` is negative.
    pub fn new(initial_coins: i32) -> DomainResult<Self> {
        if initial_coins < 0 {
            return Err(DomainError::invalid_argument(format!(
                "the number of gold coins in the treasure chest can't be negative: {initial_coins}"
            )));
        }
        Ok(Self {
            coins: initial_coins,
        })
    }

    pub fn coin_count(&self) -> i32 {
        self.coins
    }

    pub fn is_empty(&self) -> bool {
        self.coins == 0
    }

    /// Add `n` coins. Adding zero is a no-op.
    ///
    /// # Errors
    /// `InvalidArgument` if `n` is negative or the total would not fit in an `i32`.
    pub fn add_coins(&mut self, n: i32) -> DomainResult<()> {
        if n < 0 {
            return Err(DomainError::invalid_argument(format!(
                "the number of gold coins to add can't be negative: {n}"
            )));
        }
        self.coins = self.coins.checked_add(n).ok_or_else(|| {
            DomainError::invalid_argument(format!(
                "adding {n} coins to {} exceeds the chest capacity",
                self.coins
            ))
        })?;
        Ok(())
    }

    /// Remove `n` coins and return the remaining count.
    ///
    /// Removing more coins than stored is rejected, not clamped.
    ///
    /// # Errors
    /// `InvalidArgument` if `n` is negative or greater than the coin count.
    pub fn remove_coins(&mut self, n: i32) -> DomainResult<i32> {
        if n < 0 || n > self.coins {
            return Err(DomainError::invalid_argument(format!(
                "can't remove {n} coins from a chest holding {}: \
                 the amount must be between 0 and the total stored",
                self.coins
            )));
        }
        self.coins -= n;
        Ok(self.coins)
    }

    /// Dollar value of the chest at the given price per ounce.
    ///
    /// `coins * price * GOLD_OUNCES_PER_COIN`, in decimal arithmetic. The
    /// fractional digits always fit (see `MAX_PRICE_SCALE`); a product with
    /// more than 28 significant digits is rounded to 28, as `Decimal` does.
    ///
    /// # Errors
    /// `ValueOverflow` if the product leaves the `Decimal` range.
    pub fn value_in_dollars(&self, price: GoldPrice) -> DomainResult<Decimal> {
        Decimal::from(self.coins)
            .checked_mul(price.value())
            .and_then(|v| v.checked_mul(GOLD_OUNCES_PER_COIN))
            .ok_or(DomainError::ValueOverflow { coins: self.coins })
    }
}

impl fmt::Display for TreasureChest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[  {} coins ]", self.coins)
    }
}
