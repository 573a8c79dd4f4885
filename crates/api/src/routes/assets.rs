//! Route definitions for tokenized assets.
//!
//! All routes are mounted under `/assets`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::assets;
use crate::state::AppState;

/// Asset routes mounted at `/assets`.
///
/// ```text
/// GET    /          -> list_assets
/// POST   /submit    -> submit_asset
/// GET    /{id}      -> get_asset
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(assets::list_assets))
        .route("/submit", post(assets::submit_asset))
        .route("/{id}", get(assets::get_asset))
}
