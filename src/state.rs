//! Shared application state
//! 
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum: la configuración y la fuente de tendencia
//! de mercado (inyectable para que los tests sean deterministas).

use std::sync::Arc;

use crate::config::environment::EnvironmentConfig;
use crate::services::market_trend::{MarketTrendSource, RandomMarketTrend};

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub trend_source: Arc<dyn MarketTrendSource>,
}

impl AppState {
    pub fn new(config: EnvironmentConfig, trend_source: Arc<dyn MarketTrendSource>) -> Self {
        Self {
            config,
            trend_source,
        }
    }

    /// Estado de producción: tendencia de mercado aleatoria
    pub fn with_random_trend(config: EnvironmentConfig) -> Self {
        Self::new(config, Arc::new(RandomMarketTrend))
    }
}
