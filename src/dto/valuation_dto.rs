//! DTOs de valuación
//!
//! Requests y responses del endpoint de estimación. El request replica los
//! campos del formulario; el response lleva tanto los números crudos como
//! los strings ya formateados para el renderer.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{
    AccidentHistory, Condition, FuelType, Location, Transmission, ValuationResult,
    VehicleAttributes, ACCIDENT_HISTORY, CONDITIONS, FUEL_TYPES, KNOWN_MAKES, LOCATIONS,
    TRANSMISSION_TYPES,
};
use crate::utils::formatting::{format_currency_usd, format_signed_percent};

/// Request de estimación - todos los campos del formulario son requeridos
///
/// Los enums cerrados se rechazan en deserialización si traen un valor fuera
/// del set; los rangos numéricos se validan aquí. El tope dinámico del año
/// (año calendario actual) se verifica en el controller.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EstimateRequest {
    #[validate(length(min = 1, max = 100))]
    pub make: String,

    #[validate(length(min = 1, max = 100))]
    pub model: String,

    #[validate(range(min = 1990))]
    pub year: i32,

    #[validate(range(min = 0))]
    pub mileage: i64,

    pub fuel_type: FuelType,

    pub transmission: Transmission,

    #[validate(range(min = 1.0, max = 8.0))]
    pub engine_size: f64,

    pub condition: Condition,

    pub accidents: AccidentHistory,

    #[validate(range(min = 1, max = 10))]
    pub owners: u32,

    pub location: Location,
}

impl From<EstimateRequest> for VehicleAttributes {
    fn from(request: EstimateRequest) -> Self {
        Self {
            make: request.make,
            model: request.model,
            year: request.year,
            mileage: request.mileage,
            fuel_type: request.fuel_type,
            transmission: request.transmission,
            engine_size: request.engine_size,
            condition: request.condition,
            accidents: request.accidents,
            owners: request.owners,
            location: request.location,
        }
    }
}

/// Resumen del vehículo que el renderer muestra en el encabezado
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleSummary {
    pub make: String,
    pub model: String,
    pub year: i32,
}

/// Factores ya formateados con signo explícito ("+15%", "-8.3%")
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedFactors {
    pub depreciation: String,
    pub mileage: String,
    pub condition: String,
    pub market: String,
}

/// Valuación lista para display: moneda USD sin decimales
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayValuation {
    pub predicted_price: String,
    pub price_range: String,
    pub confidence: String,
    pub factors: FormattedFactors,
}

/// Response de estimación
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateResponse {
    pub vehicle: VehicleSummary,
    pub prediction: ValuationResult,
    pub display: DisplayValuation,
}

impl EstimateResponse {
    pub fn new(vehicle: VehicleSummary, prediction: ValuationResult) -> Self {
        let display = DisplayValuation {
            predicted_price: format_currency_usd(prediction.predicted_price),
            price_range: format!(
                "{} - {}",
                format_currency_usd(prediction.price_range.min),
                format_currency_usd(prediction.price_range.max)
            ),
            confidence: format!("{}%", prediction.confidence),
            factors: FormattedFactors {
                depreciation: format_signed_percent(prediction.factors.depreciation),
                mileage: format_signed_percent(prediction.factors.mileage),
                condition: format_signed_percent(prediction.factors.condition),
                market: format_signed_percent(prediction.factors.market),
            },
        };

        Self {
            vehicle,
            prediction,
            display,
        }
    }
}

/// Sets enumerados que el formulario ofrece en sus selects
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormOptionsResponse {
    pub makes: &'static [&'static str],
    pub fuel_types: &'static [&'static str],
    pub transmission_types: &'static [&'static str],
    pub conditions: &'static [&'static str],
    pub accident_history: &'static [&'static str],
    pub locations: &'static [&'static str],
}

impl FormOptionsResponse {
    pub fn current() -> Self {
        Self {
            makes: KNOWN_MAKES,
            fuel_types: FUEL_TYPES,
            transmission_types: TRANSMISSION_TYPES,
            conditions: CONDITIONS,
            accident_history: ACCIDENT_HISTORY,
            locations: LOCATIONS,
        }
    }
}

// Response genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}
