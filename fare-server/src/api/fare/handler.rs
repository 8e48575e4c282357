//! Fare API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::utils::{ApiJson, AppResult};
use shared::{FareQuote, FareRequest, SaveBillRequest, SavedBill};

/// POST /calculate - 计算车费
pub async fn calculate(
    State(state): State<ServerState>,
    ApiJson(request): ApiJson<FareRequest>,
) -> AppResult<Json<FareQuote>> {
    let quote = state.billing().compute_fare(&request)?;
    tracing::debug!(
        distance = quote.distance,
        total_fare = quote.total_fare,
        "Fare calculated"
    );
    Ok(Json(quote))
}

/// POST /save - 保存账单
pub async fn save(
    State(state): State<ServerState>,
    ApiJson(request): ApiJson<SaveBillRequest>,
) -> AppResult<Json<SavedBill>> {
    let saved = state.billing().save_bill(request).await?;
    Ok(Json(saved))
}
