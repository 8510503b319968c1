//! Modelo de resultado de valuación
//!
//! Este módulo contiene el resultado que produce el estimador: precio,
//! confianza, desglose de factores y rango de precio. El resultado se
//! calcula fresco en cada invocación; no persiste ni tiene identidad.

use serde::{Deserialize, Serialize};

/// Desglose de factores en porcentaje, redondeados a un decimal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceFactors {
    /// Componente por edad (cifra lineal de 12%/año, solo para display)
    pub depreciation: f64,
    /// Componente por kilometraje, siempre en [-25.0, 0.0]
    pub mileage: f64,
    /// Componente por estado del vehículo
    pub condition: f64,
    /// Ruido de tendencia de mercado en [-5.0, +5.0]
    pub market: f64,
}

/// Rango estimado: precio predicho ± 15%
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: i64,
    pub max: i64,
}

/// Resultado de la valuación
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationResult {
    /// Precio final estimado, redondeado a unidades enteras
    pub predicted_price: i64,
    /// Porcentaje de confianza, siempre en [65, 95]
    pub confidence: u8,
    pub factors: PriceFactors,
    pub price_range: PriceRange,
}

impl ValuationResult {
    /// Invariante del rango: min <= precio <= max
    pub fn range_contains_price(&self) -> bool {
        self.price_range.min <= self.predicted_price && self.predicted_price <= self.price_range.max
    }
}
