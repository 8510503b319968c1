//! Car Valuation API
//!
//! Estimador de precios de autos usados: un formulario envía los atributos
//! del vehículo y la API responde con una valuación simulada (precio,
//! confianza, desglose de factores y rango). El cálculo es una fórmula
//! cerrada determinista salvo por el ruido de tendencia de mercado.

pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use axum::{response::Json, routing::get, Router};
use serde_json::json;

use middleware::cors::{cors_middleware, cors_middleware_with_origins};
use state::AppState;
use utils::errors::AppError;

/// Construir el router completo de la aplicación
pub fn create_app(state: AppState) -> Router {
    let cors = if state.config.is_production() {
        cors_middleware_with_origins(&state.config.cors_origins)
    } else {
        cors_middleware()
    };

    Router::new()
        .route("/test", get(test_endpoint))
        .nest(
            "/api/valuation",
            routes::valuation_routes::create_valuation_router(),
        )
        .fallback(not_found)
        .layer(cors)
        .with_state(state)
}

/// Fallback: rutas desconocidas responden el mismo body de error JSON
async fn not_found() -> AppError {
    AppError::NotFound("Ruta no encontrada".to_string())
}

/// Endpoint de prueba simple
async fn test_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "message": "¡Car Valuation API funcionando correctamente!",
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
