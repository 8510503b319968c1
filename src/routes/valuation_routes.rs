use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use crate::controllers::valuation_controller::ValuationController;
use crate::dto::valuation_dto::{ApiResponse, EstimateRequest, EstimateResponse, FormOptionsResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_valuation_router() -> Router<AppState> {
    Router::new()
        .route("/estimate", post(estimate_price))
        .route("/options", get(get_form_options))
}

async fn estimate_price(
    State(state): State<AppState>,
    payload: Result<Json<EstimateRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<EstimateResponse>>, AppError> {
    // Un body malformado o un enum fuera del set se rechaza aquí con 400
    let Json(request) = payload.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let controller = ValuationController::new(
        state.trend_source.clone(),
        state.config.analysis_delay_ms,
    );
    let response = controller.estimate(request).await?;
    Ok(Json(response))
}

async fn get_form_options() -> Json<FormOptionsResponse> {
    Json(FormOptionsResponse::current())
}
