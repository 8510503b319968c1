//! Services module
//! 
//! Este módulo contiene la lógica de negocio de la aplicación: el estimador
//! de precios y la fuente de tendencia de mercado que éste consume.

pub mod market_trend;
pub mod pricing_service;

pub use market_trend::*;
pub use pricing_service::*;
