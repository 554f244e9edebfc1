//! Treasure chests of gold coins.
//!
//! A [`TreasureChest`] holds a non-negative number of Twenty-dollar Liberty
//! gold coins. Its dollar value follows from the gold price and the fixed
//! [`GOLD_OUNCES_PER_COIN`]. The price lives in a [`GoldMarket`] that callers
//! share explicitly instead of in hidden global state.
//!
//! ```
//! use std::sync::Arc;
//! use rust_decimal_macros::dec;
//! use treasure_chest::{AppraisalService, GoldMarket, TreasureChest};
//!
//! let market = Arc::new(GoldMarket::default());
//! let appraisal = AppraisalService::new(market.clone());
//!
//! let mut chest = TreasureChest::new(10).unwrap();
//! assert_eq!(chest.remove_coins(5).unwrap(), 5);
//! assert_eq!(chest.to_string(), "[  5 coins ]");
//!
//! market.set_gold_price(dec!(2000)).unwrap();
//! assert_eq!(appraisal.value_in_dollars(&chest).unwrap(), dec!(9675));
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod util;

pub use application::services::AppraisalService;
pub use application::{ApplicationError, ApplicationResult};
pub use config::Settings;
pub use domain::{DomainError, DomainResult, GoldPrice, TreasureChest, GOLD_OUNCES_PER_COIN};
pub use infrastructure::{FixedPrice, GoldMarket, PriceSource, ServiceContainer};
