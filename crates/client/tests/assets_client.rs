//! `AssetsClient` against a local stub of the asset API.
//!
//! Each test binds a small axum router on an ephemeral port and points the
//! client at it.

use std::sync::{Arc, Mutex};

use assert_matches::assert_matches;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use luxury_client::{AssetsClient, ClientError, SubmissionForm};
use luxury_core::asset::{AssetStatus, AssetType};
use rust_decimal::Decimal;
use serde_json::{json, Value};
use uuid::Uuid;

const ASSET_ID: &str = "6f1c2a9e-3b4d-4e5f-8a7b-9c0d1e2f3a4b";

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn asset_json() -> Value {
    json!({
        "id": ASSET_ID,
        "assetType": "watch",
        "brand": "Rolex",
        "model": "Daytona",
        "year": 2021,
        "pricePerShare": "32.5",
        "totalSupply": "1000",
        "remainingSupply": "1000",
        "status": "fundraising"
    })
}

/// Serve `router` on 127.0.0.1 and return a client pointed at it.
async fn serve(router: Router) -> AssetsClient {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    AssetsClient::new(format!("http://{addr}"))
}

// ---------------------------------------------------------------------------
// Listing and detail
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_decodes_bare_array() {
    let router = Router::new().route(
        "/api/assets",
        get(|| async { Json(json!([asset_json(), asset_json()])) }),
    );
    let client = serve(router).await;

    let assets = client.list_assets().await.unwrap();
    assert_eq!(assets.len(), 2);
    assert_eq!(assets[0].id, ASSET_ID.parse::<Uuid>().unwrap());
    assert_eq!(assets[0].asset_type, AssetType::Watch);
    assert_eq!(assets[0].status, AssetStatus::Fundraising);
    assert_eq!(assets[0].price_per_share, Decimal::new(325, 1));
}

#[tokio::test]
async fn list_failure_reports_only_the_status() {
    let router = Router::new().route(
        "/api/assets",
        get(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": "An internal error occurred", "code": "INTERNAL_ERROR"})),
            )
        }),
    );
    let client = serve(router).await;

    let err = client.list_assets().await.unwrap_err();
    assert_matches!(err, ClientError::Api { status: 500, .. });
    assert_eq!(err.to_string(), "Request failed with status 500");
}

#[tokio::test]
async fn get_error_carries_the_response_body() {
    let router = Router::new().route(
        "/api/assets/{id}",
        get(|| async {
            (
                StatusCode::NOT_FOUND,
                Json(json!({"error": "Asset not found", "code": "NOT_FOUND"})),
            )
        }),
    );
    let client = serve(router).await;

    let err = client.get_asset(Uuid::new_v4()).await.unwrap_err();
    assert_matches!(err, ClientError::Api { status: 404, ref message } if message.contains("NOT_FOUND"));
}

#[tokio::test]
async fn get_decodes_single_asset() {
    let router = Router::new().route("/api/assets/{id}", get(|| async { Json(asset_json()) }));
    let client = serve(router).await;

    let asset = client
        .get_asset(ASSET_ID.parse().unwrap())
        .await
        .unwrap();
    assert_eq!(asset.brand, "Rolex");
    assert_eq!(asset.total_supply, Decimal::from(1000));
}

// ---------------------------------------------------------------------------
// Submission
// ---------------------------------------------------------------------------

#[tokio::test]
async fn submit_posts_numbers_and_decodes_created_asset() {
    let received: Arc<Mutex<Option<Value>>> = Arc::default();
    let router = Router::new()
        .route(
            "/api/assets/submit",
            post(
                |State(received): State<Arc<Mutex<Option<Value>>>>, Json(body): Json<Value>| async move {
                    *received.lock().unwrap() = Some(body);
                    (StatusCode::CREATED, Json(asset_json()))
                },
            ),
        )
        .with_state(received.clone());
    let client = serve(router).await;

    let form = SubmissionForm {
        brand: "Rolex".into(),
        model: "Daytona".into(),
        year: "2021".into(),
        total_supply: "1000".into(),
        price_per_share: "32.5".into(),
        ..SubmissionForm::default()
    };
    let asset = client
        .submit_asset(&form.to_request().unwrap())
        .await
        .unwrap();
    assert_eq!(asset.model, "Daytona");

    let body = received.lock().unwrap().take().unwrap();
    assert_eq!(body["assetType"], "watch");
    assert!(body["year"].is_number());
    assert!(body["totalSupply"].is_number());
    assert_eq!(body["pricePerShare"], 32.5);
    assert!(body["purchasePrice"].is_null());
    assert_eq!(body["submittedBy"], "anonymous");
}

#[tokio::test]
async fn submit_failure_carries_the_error_body() {
    let router = Router::new().route(
        "/api/assets/submit",
        post(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "Asset submission failed: brand is required",
                    "code": "SUBMISSION_FAILED"
                })),
            )
        }),
    );
    let client = serve(router).await;

    let request = SubmissionForm {
        model: "Daytona".into(),
        total_supply: "10".into(),
        price_per_share: "1".into(),
        ..SubmissionForm::default()
    }
    .to_request()
    .unwrap();
    let err = client.submit_asset(&request).await.unwrap_err();
    assert_matches!(err, ClientError::Api { status: 400, .. });
    assert!(err.to_string().contains("brand is required"));
}
