//! `LuxuryToken` deployment.
//!
//! Every tokenized asset gets its own ERC20-style `LuxuryToken` contract
//! carrying the asset's `bytes32` id and metadata hash. This crate owns the
//! contract binding, the Hardhat artifact loader, and the [`TokenDeployer`]
//! seam used by the API (real RPC deployer or a no-chain mock).

pub mod artifact;
pub mod bindings;
pub mod config;
pub mod deployer;
pub mod mock;
pub mod service;

pub use config::ChainConfig;
pub use deployer::{
    build_deployer, initial_supply_units, ChainError, DeployParams, DeployedToken,
    TokenDeployer,
};
pub use mock::MockTokenDeployer;
pub use service::{RpcTokenDeployer, TokenSnapshot};
