//! Fuente de tendencia de mercado
//!
//! La única no-determinismo del estimador es el ruido de mercado. Se modela
//! como trait inyectable para que los tests puedan fijar el valor y obtener
//! resultados reproducibles.

use rand::Rng;

/// Fuente del porcentaje de tendencia de mercado
pub trait MarketTrendSource: Send + Sync {
    /// Porcentaje de tendencia, uniforme en [-5.0, +5.0) en producción
    fn trend_percent(&self) -> f64;
}

/// Fuente real: muestrea el generador del thread
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomMarketTrend;

impl MarketTrendSource for RandomMarketTrend {
    fn trend_percent(&self) -> f64 {
        rand::thread_rng().gen_range(-5.0..5.0)
    }
}

/// Fuente fija para tests y reproducibilidad
#[derive(Debug, Clone, Copy)]
pub struct FixedMarketTrend(pub f64);

impl MarketTrendSource for FixedMarketTrend {
    fn trend_percent(&self) -> f64 {
        self.0
    }
}
