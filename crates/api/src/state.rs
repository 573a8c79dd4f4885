use std::sync::Arc;

use luxury_chain::TokenDeployer;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: luxury_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Deploys one token per accepted submission (RPC-backed or simulated).
    pub deployer: Arc<dyn TokenDeployer>,
}
