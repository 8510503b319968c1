//! Modelos del sistema
//! 
//! Este módulo contiene los modelos de datos del dominio de valuación:
//! los atributos del vehículo que entran al estimador y el resultado
//! que éste produce.

pub mod vehicle;
pub mod valuation;

pub use vehicle::*;
pub use valuation::*;
