//! Utilidades del sistema
//! 
//! Este módulo contiene utilidades para manejo de errores, validación
//! y formato de display.

pub mod errors;
pub mod validation;
pub mod formatting;
