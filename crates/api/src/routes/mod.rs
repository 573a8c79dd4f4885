pub mod assets;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /health                 service and database health
///
/// /assets                 list (optional status, assetType, submittedBy filters)
/// /assets/submit          submit an asset and deploy its token (POST)
/// /assets/{id}            get one asset
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .nest("/assets", assets::router())
}
