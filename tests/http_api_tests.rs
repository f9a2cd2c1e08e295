use receipt_points::domain::points::Points;
use receipt_points::interfaces::http::error::ErrorResponse;
use receipt_points::interfaces::http::handlers::{PointsResponse, ProcessResponse};

mod common;

async fn submit(client: &reqwest::Client, base: &str, body: String) -> reqwest::Response {
    client
        .post(format!("{}/receipts/process", base))
        .header("content-type", "application/json")
        .body(body)
        .send()
        .await
        .unwrap()
}

async fn points(client: &reqwest::Client, base: &str, id: &str) -> reqwest::Response {
    client
        .get(format!("{}/receipts/{}/points", base, id))
        .send()
        .await
        .unwrap()
}

#[tokio::test]
async fn target_receipt_scores_28() {
    let base = common::spawn_test_server().await;
    let client = reqwest::Client::new();

    let resp = submit(&client, &base, common::fixture_json("target.json")).await;
    assert_eq!(resp.status(), 200);
    let ProcessResponse { id } = resp.json::<ProcessResponse>().await.unwrap();

    let resp = points(&client, &base, &id.to_string()).await;
    assert_eq!(resp.status(), 200);
    let body: PointsResponse = resp.json().await.unwrap();
    assert_eq!(body.points, Points::new(28));
}

#[tokio::test]
async fn mm_corner_market_scores_109() {
    let base = common::spawn_test_server().await;
    let client = reqwest::Client::new();

    let resp = submit(&client, &base, common::fixture_json("mm_corner_market.json")).await;
    let ProcessResponse { id } = resp.json::<ProcessResponse>().await.unwrap();

    let body: serde_json::Value = points(&client, &base, &id.to_string())
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(body, serde_json::json!({ "points": 109 }));
}

#[tokio::test]
async fn process_response_is_id_object() {
    let base = common::spawn_test_server().await;
    let client = reqwest::Client::new();

    let resp = submit(&client, &base, common::fixture_json("target.json")).await;
    let content_type = resp.headers().get("content-type").unwrap().to_str().unwrap();
    assert!(content_type.contains("application/json"));

    let body: serde_json::Value = resp.json().await.unwrap();
    let id = body["id"].as_str().expect("id should be a string");
    assert_eq!(id.len(), 36);
    assert!(id.chars().all(|c| c.is_ascii_hexdigit() || c == '-'));
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let base = common::spawn_test_server().await;
    let client = reqwest::Client::new();

    let resp = submit(&client, &base, "{not json".to_string()).await;
    assert_eq!(resp.status(), 400);
    let body: ErrorResponse = resp.json().await.unwrap();
    assert_eq!(body.error, "Invalid JSON");
}

#[tokio::test]
async fn missing_field_is_bad_request() {
    let base = common::spawn_test_server().await;
    let client = reqwest::Client::new();

    let body = r#"{"retailer": "Target", "purchaseDate": "2022-01-01", "items": [], "total": "1.00"}"#;
    let resp = submit(&client, &base, body.to_string()).await;
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn wrong_field_type_is_bad_request() {
    let base = common::spawn_test_server().await;
    let client = reqwest::Client::new();

    let body = r#"{
        "retailer": "Target",
        "purchaseDate": "2022-01-01",
        "purchaseTime": "13:01",
        "items": [{"shortDescription": "Pepsi", "price": 1.25}],
        "total": "1.25"
    }"#;
    let resp = submit(&client, &base, body.to_string()).await;
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn missing_content_type_is_bad_request() {
    let base = common::spawn_test_server().await;
    let resp = reqwest::Client::new()
        .post(format!("{}/receipts/process", base))
        .body(common::fixture_json("target.json"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
}

#[tokio::test]
async fn malformed_fields_still_score() {
    let base = common::spawn_test_server().await;
    let client = reqwest::Client::new();

    // only the retailer rule can award anything here
    let body = r#"{
        "retailer": "Shop",
        "purchaseDate": "yesterday",
        "purchaseTime": "noon",
        "items": [{"shortDescription": "abc", "price": "free"}],
        "total": "n/a"
    }"#;
    let resp = submit(&client, &base, body.to_string()).await;
    assert_eq!(resp.status(), 200);
    let ProcessResponse { id } = resp.json::<ProcessResponse>().await.unwrap();

    let body: PointsResponse = points(&client, &base, &id.to_string())
        .await
        .json()
        .await
        .unwrap();
    assert_eq!(body.points, Points::new(4));
}

#[tokio::test]
async fn unknown_id_is_not_found() {
    let base = common::spawn_test_server().await;
    let client = reqwest::Client::new();

    let resp = points(&client, &base, "7fb1377b-b223-49d9-a31a-5a02701dd310").await;
    assert_eq!(resp.status(), 404);
    let body: ErrorResponse = resp.json().await.unwrap();
    assert_eq!(body.error, "Receipt not found");
}

#[tokio::test]
async fn malformed_id_is_not_found() {
    let base = common::spawn_test_server().await;
    let client = reqwest::Client::new();

    let resp = points(&client, &base, "not-a-receipt").await;
    assert_eq!(resp.status(), 404);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "error": "Receipt not found" }));
}

#[tokio::test]
async fn zero_score_is_distinct_from_not_found() {
    let base = common::spawn_test_server().await;
    let client = reqwest::Client::new();

    let body = serde_json::to_string(&common::receipt_worth(0)).unwrap();
    let ProcessResponse { id } = submit(&client, &base, body)
        .await
        .json::<ProcessResponse>()
        .await
        .unwrap();

    let resp = points(&client, &base, &id.to_string()).await;
    assert_eq!(resp.status(), 200);
    let body: PointsResponse = resp.json().await.unwrap();
    assert_eq!(body.points, Points::ZERO);
}

#[tokio::test]
async fn identical_submissions_get_distinct_ids() {
    let base = common::spawn_test_server().await;
    let client = reqwest::Client::new();

    let ProcessResponse { id: first } = submit(&client, &base, common::fixture_json("target.json"))
        .await
        .json::<ProcessResponse>()
        .await
        .unwrap();
    let ProcessResponse { id: second } = submit(&client, &base, common::fixture_json("target.json"))
        .await
        .json::<ProcessResponse>()
        .await
        .unwrap();
    assert_ne!(first, second);

    for id in [first, second] {
        let body: PointsResponse = points(&client, &base, &id.to_string())
            .await
            .json()
            .await
            .unwrap();
        assert_eq!(body.points, Points::new(28));
    }
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let base = common::spawn_test_server().await;
    let resp = reqwest::get(format!("{}/receipts", base)).await.unwrap();
    assert_eq!(resp.status(), 404);
}
