use super::error::{ApiError, ApiResult};
use crate::application::processor::ReceiptProcessor;
use crate::domain::points::Points;
use crate::domain::receipt::{Receipt, ReceiptId};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct ProcessResponse {
    pub id: ReceiptId,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct PointsResponse {
    pub points: Points,
}

/// POST /receipts/process
pub async fn process_receipt(
    State(processor): State<Arc<ReceiptProcessor>>,
    payload: Result<Json<Receipt>, JsonRejection>,
) -> ApiResult<Json<ProcessResponse>> {
    let Json(receipt) = payload.map_err(|rejection| {
        warn!("rejected receipt: {}", rejection.body_text());
        ApiError::InvalidReceipt
    })?;

    let id = processor.process_receipt(&receipt).await?;
    Ok(Json(ProcessResponse { id }))
}

/// GET /receipts/{id}/points
pub async fn get_points(
    State(processor): State<Arc<ReceiptProcessor>>,
    Path(id): Path<String>,
) -> ApiResult<Json<PointsResponse>> {
    let Ok(receipt_id) = id.parse::<ReceiptId>() else {
        warn!(%id, "lookup for malformed receipt id");
        return Err(ApiError::NotFound);
    };

    match processor.points_for(&receipt_id).await? {
        Some(points) => Ok(Json(PointsResponse { points })),
        None => {
            warn!(%id, "receipt not found");
            Err(ApiError::NotFound)
        }
    }
}
