//! Service container for dependency injection
//!
//! Wires up the gold market and services from settings.

use std::sync::Arc;

use tracing::debug;

use crate::application::services::AppraisalService;
use crate::config::Settings;
use crate::infrastructure::traits::GoldMarket;

/// Container holding all application services.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Shared gold market; price updates here are seen by `appraisal`
    pub market: Arc<GoldMarket>,

    pub appraisal: AppraisalService,
}

impl ServiceContainer {
    /// Create a container with a fresh market opening at the configured price.
    pub fn new(settings: Settings) -> Self {
        let opening = settings.initial_price();
        debug!("ServiceContainer::new: opening price={}", opening);
        Self::with_deps(settings, Arc::new(GoldMarket::new(opening)))
    }

    /// Create a container around an existing market (for testing or sharing).
    pub fn with_deps(settings: Settings, market: Arc<GoldMarket>) -> Self {
        let settings = Arc::new(settings);
        let appraisal = AppraisalService::new(market.clone());

        Self {
            settings,
            market,
            appraisal,
        }
    }
}
