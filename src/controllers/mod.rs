//! Controladores de la API
//!
//! Capa entre las rutas y los servicios: validación de frontera y armado
//! de responses.

pub mod valuation_controller;

pub use valuation_controller::*;
