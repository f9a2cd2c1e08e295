#![allow(dead_code)]

use receipt_points::application::processor::ReceiptProcessor;
use receipt_points::domain::receipt::{Item, Receipt};
use receipt_points::infrastructure::in_memory::InMemoryReceiptStore;
use receipt_points::interfaces::http::build_router;
use std::path::Path;
use std::sync::Arc;

pub fn fixture_json(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name);
    std::fs::read_to_string(&path).expect("Failed to read fixture")
}

pub fn fixture_receipt(name: &str) -> Receipt {
    serde_json::from_str(&fixture_json(name)).expect("Failed to parse fixture")
}

pub fn new_processor() -> Arc<ReceiptProcessor> {
    Arc::new(ReceiptProcessor::new(Box::new(InMemoryReceiptStore::new())))
}

/// Spin up the HTTP server on an OS-assigned port, returning the base URL.
pub async fn spawn_test_server() -> String {
    let app = build_router(new_processor());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://127.0.0.1:{}", port)
}

/// A receipt scoring exactly `retailer_len` points from its retailer name and
/// nothing from the other rules.
pub fn receipt_worth(retailer_len: usize) -> Receipt {
    Receipt {
        retailer: "a".repeat(retailer_len),
        purchase_date: "2022-01-02".to_string(),
        purchase_time: "09:15".to_string(),
        items: vec![Item::new("Pepsi", "1.01")],
        total: "1.01".to_string(),
    }
}
