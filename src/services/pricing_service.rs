//! Servicio de estimación de precios
//!
//! Este módulo contiene el núcleo del sistema: la función pura que mapea
//! los atributos del vehículo a una valuación (precio, confianza, desglose
//! de factores y rango). El cálculo es un ajuste multiplicativo secuencial
//! sobre un precio base fijo; la única fuente de no-determinismo es la
//! tendencia de mercado inyectada vía [`MarketTrendSource`].

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Datelike, Utc};
use lazy_static::lazy_static;

use crate::models::{
    AccidentHistory, Condition, FuelType, PriceFactors, PriceRange, ValuationResult,
    VehicleAttributes,
};
use crate::services::market_trend::MarketTrendSource;

/// Precio base fijo antes de cualquier ajuste
pub const BASE_PRICE: f64 = 25000.0;

/// Tasa de depreciación lineal mostrada al usuario (12%/año)
pub const DEPRECIATION_RATE: f64 = 0.12;

/// Base de decaimiento compuesto aplicado al precio (0.88^edad)
pub const AGE_DECAY_BASE: f64 = 0.88;

/// Piso del impacto por kilometraje: nunca más del -25%
pub const MILEAGE_IMPACT_FLOOR: f64 = -25.0;

/// Varianza simétrica del rango de precio (±15%)
pub const PRICE_RANGE_VARIANCE: f64 = 0.15;

lazy_static! {
    /// Multiplicadores por marca; marca desconocida recibe 1.0 (neutro)
    static ref MAKE_MULTIPLIERS: HashMap<&'static str, f64> = {
        let mut m = HashMap::new();
        m.insert("BMW", 1.4);
        m.insert("Mercedes-Benz", 1.5);
        m.insert("Audi", 1.3);
        m.insert("Toyota", 1.1);
        m.insert("Honda", 1.05);
        m.insert("Ford", 0.9);
        m.insert("Chevrolet", 0.85);
        m.insert("Volkswagen", 1.0);
        m.insert("Nissan", 0.95);
        m.insert("Hyundai", 0.8);
        m
    };

    static ref CONDITION_MULTIPLIERS: HashMap<Condition, f64> = {
        let mut m = HashMap::new();
        m.insert(Condition::Excellent, 1.15);
        m.insert(Condition::VeryGood, 1.05);
        m.insert(Condition::Good, 1.0);
        m.insert(Condition::Fair, 0.85);
        m.insert(Condition::Poor, 0.65);
        m
    };

    static ref ACCIDENT_MULTIPLIERS: HashMap<AccidentHistory, f64> = {
        let mut m = HashMap::new();
        m.insert(AccidentHistory::NoAccidents, 1.0);
        m.insert(AccidentHistory::MinorAccident, 0.92);
        m.insert(AccidentHistory::MajorAccident, 0.75);
        m
    };

    static ref FUEL_MULTIPLIERS: HashMap<FuelType, f64> = {
        let mut m = HashMap::new();
        m.insert(FuelType::Gasoline, 1.0);
        m.insert(FuelType::Diesel, 0.95);
        m.insert(FuelType::Hybrid, 1.1);
        m.insert(FuelType::Electric, 1.2);
        m
    };
}

/// Multiplicador de marca; cualquier marca fuera de la tabla es neutra
pub fn make_multiplier(make: &str) -> f64 {
    MAKE_MULTIPLIERS.get(make).copied().unwrap_or(1.0)
}

fn condition_multiplier(condition: Condition) -> f64 {
    CONDITION_MULTIPLIERS.get(&condition).copied().unwrap_or(1.0)
}

fn accident_multiplier(accidents: AccidentHistory) -> f64 {
    ACCIDENT_MULTIPLIERS.get(&accidents).copied().unwrap_or(1.0)
}

fn fuel_multiplier(fuel_type: FuelType) -> f64 {
    FUEL_MULTIPLIERS.get(&fuel_type).copied().unwrap_or(1.0)
}

/// Redondeo a entero con .5 hacia arriba
fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Redondeo a un decimal para los factores mostrados
fn round1(value: f64) -> f64 {
    round_half_up(value * 10.0) / 10.0
}

/// Servicio de estimación
///
/// Sin estado mutable: cada llamada es independiente y reentrante. El único
/// colaborador es la fuente de tendencia de mercado.
pub struct PricingService {
    trend_source: Arc<dyn MarketTrendSource>,
}

impl PricingService {
    pub fn new(trend_source: Arc<dyn MarketTrendSource>) -> Self {
        Self { trend_source }
    }

    /// Estimar usando el año calendario actual como referencia
    pub fn estimate(&self, attrs: &VehicleAttributes) -> ValuationResult {
        self.estimate_for_year(attrs, Utc::now().year())
    }

    /// Estimar con año de referencia explícito (determinista junto con
    /// una tendencia fija)
    pub fn estimate_for_year(&self, attrs: &VehicleAttributes, reference_year: i32) -> ValuationResult {
        let age = (reference_year - attrs.year) as f64;

        let mut base_price = BASE_PRICE;

        base_price *= make_multiplier(&attrs.make);

        // La cifra de depreciación mostrada es lineal (12%/año); el descuento
        // aplicado al precio compone a 0.88^edad. La discrepancia es parte
        // del comportamiento observable y se mantiene.
        let depreciation = -age * DEPRECIATION_RATE * 100.0;
        base_price *= AGE_DECAY_BASE.powf(age);

        // Cada 10,000 millas cuestan 8%, con piso total de -25%
        let mileage_impact = (-(attrs.mileage as f64) / 10_000.0 * 8.0).max(MILEAGE_IMPACT_FLOOR);
        base_price *= 1.0 + mileage_impact / 100.0;

        let condition_multiplier = condition_multiplier(attrs.condition);
        let condition_factor = (condition_multiplier - 1.0) * 100.0;
        base_price *= condition_multiplier;

        base_price *= accident_multiplier(attrs.accidents);
        base_price *= fuel_multiplier(attrs.fuel_type);

        // Penalización por dueños anteriores, 5% por dueño extra, sin piso
        let owner_penalty = ((attrs.owners as f64 - 1.0) * 0.05).max(0.0);
        base_price *= 1.0 - owner_penalty;

        let market_trend = self.trend_source.trend_percent();
        base_price *= 1.0 + market_trend / 100.0;

        let predicted_price = round_half_up(base_price) as i64;
        let min = round_half_up(predicted_price as f64 * (1.0 - PRICE_RANGE_VARIANCE)) as i64;
        let max = round_half_up(predicted_price as f64 * (1.0 + PRICE_RANGE_VARIANCE)) as i64;

        let confidence =
            round_half_up((85.0 - age * 2.0 - mileage_impact.abs()).clamp(65.0, 95.0)) as u8;

        ValuationResult {
            predicted_price,
            confidence,
            factors: PriceFactors {
                depreciation: round1(depreciation),
                mileage: round1(mileage_impact),
                condition: round1(condition_factor),
                market: round1(market_trend),
            },
            price_range: PriceRange { min, max },
        }
    }
}
