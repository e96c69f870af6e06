#![cfg(feature = "server")]
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use dioxus::logger::tracing::error;
use serde::Deserialize;
use serde_json::json;

use crate::backend::atmo::AtmoClient;
use crate::shared::types::DEFAULT_COMMUNE_INSEE;

pub const PROXY_ERROR_MESSAGE: &str = "Erreur lors de la récupération des données";

#[derive(Debug, Deserialize)]
pub struct AirQualityQuery {
    pub code_insee: Option<String>,
}

pub fn router(atmo: Arc<AtmoClient>) -> Router {
    Router::new()
        .route("/api/air-quality", get(air_quality))
        .with_state(atmo)
}

/// `GET /api/air-quality?code_insee=..` relays the upstream JSON untouched.
pub async fn air_quality(
    State(atmo): State<Arc<AtmoClient>>,
    Query(query): Query<AirQualityQuery>,
) -> Response {
    let code_insee = query
        .code_insee
        .filter(|c| !c.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_COMMUNE_INSEE.to_string());

    match atmo.fetch_indices(&code_insee).await {
        Ok(body) => Json(body).into_response(),
        Err(e) => {
            error!("Erreur API Atmo (code_insee={}): {:#}", code_insee, e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": PROXY_ERROR_MESSAGE })),
            )
                .into_response()
        }
    }
}
