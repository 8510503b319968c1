//! Modelo de atributos del vehículo
//!
//! Este módulo contiene el record inmutable de atributos que consume el
//! estimador de precios, junto con los enums cerrados que el formulario
//! restringe mediante selects.

use serde::{Deserialize, Serialize};

/// Tipo de combustible - afecta el precio (Electric 1.2 ... Diesel 0.95)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FuelType {
    Gasoline,
    Diesel,
    Hybrid,
    Electric,
}

/// Tipo de transmisión - recolectado por el formulario, no participa en la fórmula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Transmission {
    Manual,
    Automatic,
    #[serde(rename = "CVT")]
    Cvt,
}

/// Estado general del vehículo - 5 niveles con multiplicador propio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Condition {
    Excellent,
    #[serde(rename = "Very Good")]
    VeryGood,
    Good,
    Fair,
    Poor,
}

/// Historial de accidentes declarado
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccidentHistory {
    #[serde(rename = "No Accidents")]
    NoAccidents,
    #[serde(rename = "Minor Accident")]
    MinorAccident,
    #[serde(rename = "Major Accident")]
    MajorAccident,
}

/// Tipo de ubicación - recolectado por el formulario, no participa en la fórmula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    Urban,
    Suburban,
    Rural,
}

/// Atributos del vehículo - entrada inmutable del estimador
///
/// El estimador asume que los rangos numéricos ya fueron validados en la
/// frontera (controller); aquí no se re-valida nada.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleAttributes {
    /// Marca - string libre; una marca desconocida recibe multiplicador neutro 1.0
    pub make: String,
    /// Modelo - texto libre, no participa en la fórmula
    pub model: String,
    pub year: i32,
    /// Kilometraje en millas
    pub mileage: i64,
    pub fuel_type: FuelType,
    pub transmission: Transmission,
    /// Cilindrada en litros (1.0 - 8.0), no participa en la fórmula
    pub engine_size: f64,
    pub condition: Condition,
    pub accidents: AccidentHistory,
    /// Número de dueños anteriores (1 - 10)
    pub owners: u32,
    pub location: Location,
}

/// Marcas conocidas que el formulario ofrece en su select
pub const KNOWN_MAKES: &[&str] = &[
    "Toyota",
    "Honda",
    "Ford",
    "Chevrolet",
    "BMW",
    "Mercedes-Benz",
    "Audi",
    "Volkswagen",
    "Nissan",
    "Hyundai",
];

/// Valores de los selects del formulario, en el orden en que se muestran
pub const FUEL_TYPES: &[&str] = &["Gasoline", "Diesel", "Hybrid", "Electric"];
pub const TRANSMISSION_TYPES: &[&str] = &["Manual", "Automatic", "CVT"];
pub const CONDITIONS: &[&str] = &["Excellent", "Very Good", "Good", "Fair", "Poor"];
pub const ACCIDENT_HISTORY: &[&str] = &["No Accidents", "Minor Accident", "Major Accident"];
pub const LOCATIONS: &[&str] = &["Urban", "Suburban", "Rural"];
