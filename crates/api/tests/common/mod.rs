#![allow(dead_code)]

use std::sync::Arc;

use alloy::primitives::Address;
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use luxury_api::config::ServerConfig;
use luxury_api::router::build_app_router;
use luxury_api::state::AppState;
use luxury_chain::mock::MOCK_DEPLOYER_ADDRESS;
use luxury_chain::{
    ChainConfig, ChainError, DeployParams, DeployedToken, MockTokenDeployer, TokenDeployer,
};

/// Build a test `ServerConfig` with safe defaults and chain access disabled.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        chain: ChainConfig::from_vars(|_| None).unwrap(),
    }
}

/// Build the full application router backed by the simulated deployer.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with_deployer(pool, Arc::new(MockTokenDeployer::new()))
}

/// Build the full application router with a specific deployer.
pub fn build_test_app_with_deployer(pool: PgPool, deployer: Arc<dyn TokenDeployer>) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        deployer,
    };
    build_app_router(state, &config)
}

/// Deployer whose every deployment is rejected, e.g. a drained account.
pub struct FailingDeployer;

#[async_trait]
impl TokenDeployer for FailingDeployer {
    async fn deploy(&self, _params: &DeployParams) -> Result<DeployedToken, ChainError> {
        Err(ChainError::TransactionFailed {
            reason: "execution reverted".into(),
        })
    }

    fn deployer_address(&self) -> Address {
        MOCK_DEPLOYER_ADDRESS
    }
}

/// Deployer that records the parameters it was called with.
#[derive(Default)]
pub struct RecordingDeployer {
    pub calls: std::sync::Mutex<Vec<DeployParams>>,
}

#[async_trait]
impl TokenDeployer for RecordingDeployer {
    async fn deploy(&self, params: &DeployParams) -> Result<DeployedToken, ChainError> {
        self.calls.lock().unwrap().push(params.clone());
        MockTokenDeployer::new().deploy(params).await
    }

    fn deployer_address(&self) -> Address {
        MOCK_DEPLOYER_ADDRESS
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    post_raw(app, uri, body.to_string()).await
}

pub async fn post_raw(app: Router, uri: &str, body: String) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
