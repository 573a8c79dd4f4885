use std::sync::Arc;

use alloy::network::EthereumWallet;
use alloy::primitives::{Address, B256, U256};
use alloy::providers::ProviderBuilder;
use alloy::signers::local::PrivateKeySigner;
use async_trait::async_trait;
use luxury_core::bytes32::Bytes32Hex;
use luxury_core::token::TOKEN_DECIMALS;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::artifact::TokenArtifact;
use crate::config::ChainConfig;
use crate::mock::MockTokenDeployer;
use crate::service::RpcTokenDeployer;

/// Deploys one `LuxuryToken` per asset.
#[async_trait]
pub trait TokenDeployer: Send + Sync {
    async fn deploy(&self, params: &DeployParams) -> Result<DeployedToken, ChainError>;

    /// Account that signs deployments and becomes the default token owner.
    fn deployer_address(&self) -> Address;
}

/// Constructor arguments for a `LuxuryToken`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployParams {
    pub name: String,
    pub symbol: String,
    pub asset_id: Bytes32Hex,
    pub metadata_hash: Bytes32Hex,
    /// Initial mint in base units (18 decimals).
    pub initial_supply: U256,
    /// Token owner; the deployer account when `None`.
    pub owner: Option<Address>,
}

/// Outcome of a confirmed deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeployedToken {
    pub address: Address,
    pub owner: Address,
    /// `None` for simulated deployments.
    pub tx_hash: Option<B256>,
    pub block_number: Option<u64>,
    pub gas_used: Option<u64>,
}

#[derive(Debug, thiserror::Error)]
pub enum ChainError {
    #[error("Chain configuration error: {message}")]
    Config { message: String },

    #[error("Contract artifact error: {message}")]
    Artifact { message: String },

    #[error("RPC error: {message}")]
    Rpc { message: String },

    #[error("Insufficient deployer balance: have {balance} wei, need at least {required} wei")]
    InsufficientBalance { balance: U256, required: U256 },

    #[error("Transaction failed: {reason}")]
    TransactionFailed { reason: String },

    #[error("Deployment receipt {tx_hash} has no contract address")]
    MissingContractAddress { tx_hash: B256 },

    #[error("Invalid deployment parameter: {message}")]
    InvalidParams { message: String },
}

/// Convert a whole number of shares into token base units.
pub fn initial_supply_units(total_shares: Decimal) -> Result<U256, ChainError> {
    if total_shares <= Decimal::ZERO || !total_shares.fract().is_zero() {
        return Err(ChainError::InvalidParams {
            message: format!("initial supply must be a positive whole number, got {total_shares}"),
        });
    }
    let shares = total_shares
        .to_u128()
        .ok_or_else(|| ChainError::InvalidParams {
            message: format!("initial supply {total_shares} is out of range"),
        })?;

    U256::from(shares)
        .checked_mul(U256::from(10u64).pow(U256::from(TOKEN_DECIMALS)))
        .ok_or_else(|| ChainError::InvalidParams {
            message: format!("initial supply {total_shares} overflows uint256"),
        })
}

/// Parse a hex private key into a local signer.
pub fn parse_signer(private_key: &str) -> Result<PrivateKeySigner, ChainError> {
    private_key.parse().map_err(|e| ChainError::Config {
        message: format!("BLOCKCHAIN_PRIVATE_KEY is not a valid private key: {e}"),
    })
}

/// Build the deployer selected by `config`.
///
/// Disabled mode returns a [`MockTokenDeployer`] and never touches the
/// network. Enabled mode loads the contract artifact, connects to the RPC
/// and checks that it answers before returning.
pub async fn build_deployer(config: &ChainConfig) -> Result<Arc<dyn TokenDeployer>, ChainError> {
    if !config.enabled {
        tracing::warn!("Blockchain deployment is disabled; token addresses will be simulated");
        return Ok(Arc::new(MockTokenDeployer::new()));
    }

    let private_key = config
        .private_key
        .as_deref()
        .ok_or_else(|| ChainError::Config {
            message: "BLOCKCHAIN_PRIVATE_KEY is required when BLOCKCHAIN_ENABLED=true".into(),
        })?;
    let signer = parse_signer(private_key)?;
    let deployer_address = signer.address();

    let artifact = TokenArtifact::load(&config.artifact_path)?;
    tracing::info!(
        path = %config.artifact_path.display(),
        contract = %artifact.contract_name,
        bytecode_len = artifact.bytecode.len(),
        "Loaded token artifact",
    );

    let provider = ProviderBuilder::new()
        .wallet(EthereumWallet::from(signer))
        .connect(&config.rpc_url)
        .await
        .map_err(|e| ChainError::Rpc {
            message: format!("Failed to connect to {}: {e}", config.rpc_url),
        })?;

    let deployer =
        RpcTokenDeployer::new(provider, deployer_address, artifact, config.min_balance);
    let chain_id = deployer.chain_id().await?;
    tracing::info!(
        rpc_url = %config.rpc_url,
        chain_id,
        deployer = %deployer_address,
        "Connected to chain RPC",
    );

    Ok(Arc::new(deployer))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn whole_shares_scale_by_eighteen_decimals() {
        let units = initial_supply_units(Decimal::from(1000)).unwrap();
        assert_eq!(units, U256::from(1000u64) * U256::from(10u64).pow(U256::from(18)));
    }

    #[test]
    fn trailing_zero_scale_is_still_whole() {
        let units = initial_supply_units(Decimal::new(10_000, 1)).unwrap();
        assert_eq!(units, initial_supply_units(Decimal::from(1000)).unwrap());
    }

    #[test]
    fn fractional_zero_and_negative_supplies_are_rejected() {
        for bad in [Decimal::new(15, 1), Decimal::ZERO, Decimal::from(-5)] {
            assert_matches!(
                initial_supply_units(bad),
                Err(ChainError::InvalidParams { .. })
            );
        }
    }

    #[test]
    fn invalid_private_key_is_a_config_error() {
        assert_matches!(parse_signer("0xnot-a-key"), Err(ChainError::Config { .. }));
    }

    #[tokio::test]
    async fn disabled_config_builds_mock_deployer() {
        let config = ChainConfig::from_vars(|_| None).unwrap();
        let deployer = build_deployer(&config).await.unwrap();

        let params = DeployParams {
            name: "Rolex Daytona Token".into(),
            symbol: "RD".into(),
            asset_id: Bytes32Hex::parse_lenient("0x01").unwrap(),
            metadata_hash: Bytes32Hex::zero(),
            initial_supply: U256::from(1u64),
            owner: None,
        };
        let deployed = deployer.deploy(&params).await.unwrap();
        assert!(deployed.tx_hash.is_none());
        assert_ne!(deployed.address, Address::ZERO);
    }
}
