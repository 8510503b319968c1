//! DTOs de la API
//!
//! Este módulo contiene los requests y responses que viajan por la frontera
//! HTTP, separados de los modelos del dominio.

pub mod valuation_dto;

pub use valuation_dto::*;
