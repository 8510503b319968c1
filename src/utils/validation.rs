//! Utilidades de validación
//!
//! Este módulo contiene la validación de frontera que el derive de
//! `validator` no puede expresar: el tope del año del modelo es dinámico
//! (el año calendario al momento de evaluar). El estimador en sí no valida
//! rangos; todo rechazo ocurre antes de invocarlo.

use validator::ValidationError;

/// Año mínimo aceptado por el formulario
pub const MIN_MODEL_YEAR: i32 = 1990;

/// Validar el año del modelo: 1990 <= año <= año de referencia
///
/// El año de referencia es el año calendario al momento de evaluar, no un
/// dato del caller.
pub fn validate_model_year(year: i32, reference_year: i32) -> Result<(), ValidationError> {
    if year < MIN_MODEL_YEAR || year > reference_year {
        let mut error = ValidationError::new("model_year");
        error.add_param("min".into(), &MIN_MODEL_YEAR);
        error.add_param("max".into(), &reference_year);
        error.add_param("actual".into(), &year);
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_model_year_accepts_range() {
        assert!(validate_model_year(2020, 2026).is_ok());
        assert!(validate_model_year(1990, 2026).is_ok());
        assert!(validate_model_year(2026, 2026).is_ok());
    }

    #[test]
    fn test_validate_model_year_rejects_out_of_range() {
        assert!(validate_model_year(1989, 2026).is_err());
        assert!(validate_model_year(2027, 2026).is_err());
    }

    #[test]
    fn test_validate_model_year_error_carries_bounds() {
        let error = validate_model_year(2030, 2026).unwrap_err();
        assert_eq!(error.code, "model_year");
        assert!(error.params.contains_key("max"));
        assert!(error.params.contains_key("actual"));
    }
}
