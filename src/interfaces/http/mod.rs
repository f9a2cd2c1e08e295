//! HTTP interface: JSON over axum.

pub mod error;
pub mod handlers;

use crate::application::processor::ReceiptProcessor;
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Build the HTTP router serving `processor`.
pub fn build_router(processor: Arc<ReceiptProcessor>) -> Router {
    Router::new()
        .route("/receipts/process", post(handlers::process_receipt))
        .route("/receipts/{id}/points", get(handlers::get_points))
        .layer(TraceLayer::new_for_http())
        .with_state(processor)
}
