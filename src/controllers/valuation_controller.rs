//! Controlador de valuación
//!
//! Este módulo es la frontera de recolección: valida el request del
//! formulario, aplica la pausa de análisis simulada y delega el cálculo
//! al servicio de pricing.

use std::sync::Arc;
use std::time::Duration;

use chrono::{Datelike, Utc};
use validator::Validate;

use crate::dto::valuation_dto::{ApiResponse, EstimateRequest, EstimateResponse, VehicleSummary};
use crate::services::market_trend::MarketTrendSource;
use crate::services::pricing_service::PricingService;
use crate::utils::errors::AppError;
use crate::utils::validation::validate_model_year;

pub struct ValuationController {
    service: PricingService,
    analysis_delay_ms: u64,
}

impl ValuationController {
    pub fn new(trend_source: Arc<dyn MarketTrendSource>, analysis_delay_ms: u64) -> Self {
        Self {
            service: PricingService::new(trend_source),
            analysis_delay_ms,
        }
    }

    pub async fn estimate(
        &self,
        request: EstimateRequest,
    ) -> Result<ApiResponse<EstimateResponse>, AppError> {
        // Validar rangos estáticos del formulario
        request.validate()?;

        // El tope del año es dinámico: el año calendario al momento de evaluar
        let reference_year = Utc::now().year();
        if let Err(error) = validate_model_year(request.year, reference_year) {
            let mut errors = validator::ValidationErrors::new();
            errors.add("year", error);
            return Err(AppError::Validation(errors));
        }

        // Pausa presentacional ("análisis en progreso"); no altera el resultado
        if self.analysis_delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.analysis_delay_ms)).await;
        }

        let summary = VehicleSummary {
            make: request.make.clone(),
            model: request.model.clone(),
            year: request.year,
        };

        let attrs = request.into();
        let result = self.service.estimate_for_year(&attrs, reference_year);

        tracing::info!(
            "💰 Valuación calculada: {} {} {} -> ${} (confianza {}%)",
            summary.year,
            summary.make,
            summary.model,
            result.predicted_price,
            result.confidence
        );

        Ok(ApiResponse::success_with_message(
            EstimateResponse::new(summary, result),
            "Valuación calculada exitosamente".to_string(),
        ))
    }
}
