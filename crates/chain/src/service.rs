use alloy::network::{ReceiptResponse, TransactionBuilder};
use alloy::primitives::utils::format_ether;
use alloy::primitives::{Address, Bytes, B256, U256};
use alloy::providers::Provider;
use alloy::rpc::types::TransactionRequest;
use alloy::sol_types::SolConstructor;
use async_trait::async_trait;
use luxury_core::bytes32::Bytes32Hex;

use crate::artifact::TokenArtifact;
use crate::bindings::LuxuryToken;
use crate::deployer::{ChainError, DeployParams, DeployedToken, TokenDeployer};

/// On-chain state of a deployed `LuxuryToken`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSnapshot {
    pub name: String,
    pub symbol: String,
    pub asset_id: Bytes32Hex,
    pub metadata_hash: Bytes32Hex,
    pub total_supply: U256,
    pub owner: Address,
}

/// Alloy-based deployer that sends the `LuxuryToken` creation transaction.
///
/// Generic over the provider type so tests can drive it with a mocked
/// transport.
pub struct RpcTokenDeployer<P> {
    provider: P,
    deployer: Address,
    artifact: TokenArtifact,
    min_balance: U256,
}

impl<P: Provider> RpcTokenDeployer<P> {
    /// * `provider` - wallet-enabled provider that signs as `deployer`
    /// * `min_balance` - deployments abort below this native balance (wei)
    pub fn new(provider: P, deployer: Address, artifact: TokenArtifact, min_balance: U256) -> Self {
        Self {
            provider,
            deployer,
            artifact,
            min_balance,
        }
    }

    pub async fn chain_id(&self) -> Result<u64, ChainError> {
        self.provider
            .get_chain_id()
            .await
            .map_err(|e| ChainError::Rpc {
                message: format!("Failed to query chain id: {e}"),
            })
    }

    pub async fn deployer_balance(&self) -> Result<U256, ChainError> {
        self.provider
            .get_balance(self.deployer)
            .await
            .map_err(|e| ChainError::Rpc {
                message: format!("Failed to query balance of {}: {e}", self.deployer),
            })
    }

    /// Read back the immutable fields of a deployed token.
    pub async fn read_token(&self, address: Address) -> Result<TokenSnapshot, ChainError> {
        let token = LuxuryToken::new(address, &self.provider);
        let rpc = |field: &str, e: alloy::contract::Error| ChainError::Rpc {
            message: format!("Failed to read {field}() from {address}: {e}"),
        };

        let name = token.name().call().await.map_err(|e| rpc("name", e))?;
        let symbol = token.symbol().call().await.map_err(|e| rpc("symbol", e))?;
        let asset_id = token.assetId().call().await.map_err(|e| rpc("assetId", e))?;
        let metadata_hash = token
            .metadataHash()
            .call()
            .await
            .map_err(|e| rpc("metadataHash", e))?;
        let total_supply = token
            .totalSupply()
            .call()
            .await
            .map_err(|e| rpc("totalSupply", e))?;
        let owner = token.owner().call().await.map_err(|e| rpc("owner", e))?;

        Ok(TokenSnapshot {
            name,
            symbol,
            asset_id: Bytes32Hex::from_bytes(asset_id.0),
            metadata_hash: Bytes32Hex::from_bytes(metadata_hash.0),
            total_supply,
            owner,
        })
    }
}

/// Creation bytecode followed by the ABI-encoded constructor arguments.
pub fn creation_code(bytecode: &Bytes, params: &DeployParams, owner: Address) -> Bytes {
    let args = LuxuryToken::constructorCall {
        name: params.name.clone(),
        symbol: params.symbol.clone(),
        assetId: B256::from(params.asset_id.to_bytes()),
        metadataHash: B256::from(params.metadata_hash.to_bytes()),
        initialSupply: params.initial_supply,
        owner,
    }
    .abi_encode();

    let mut code = Vec::with_capacity(bytecode.len() + args.len());
    code.extend_from_slice(bytecode);
    code.extend_from_slice(&args);
    code.into()
}

#[async_trait]
impl<P: Provider + Send + Sync + 'static> TokenDeployer for RpcTokenDeployer<P> {
    async fn deploy(&self, params: &DeployParams) -> Result<DeployedToken, ChainError> {
        let chain_id = self.chain_id().await?;
        let balance = self.deployer_balance().await?;
        tracing::info!(
            chain_id,
            deployer = %self.deployer,
            balance = %format_ether(balance),
            "Deployer account state",
        );

        if balance < self.min_balance {
            return Err(ChainError::InsufficientBalance {
                balance,
                required: self.min_balance,
            });
        }

        let owner = params.owner.unwrap_or(self.deployer);
        tracing::info!(
            asset_id = %params.asset_id,
            name = %params.name,
            symbol = %params.symbol,
            initial_supply = %params.initial_supply,
            %owner,
            "Deploying LuxuryToken",
        );

        let tx = TransactionRequest::default()
            .with_from(self.deployer)
            .with_deploy_code(creation_code(&self.artifact.bytecode, params, owner));

        let pending = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(|e| ChainError::TransactionFailed {
                reason: format!("Failed to send deployment transaction: {e}"),
            })?;
        let tx_hash = *pending.tx_hash();
        tracing::info!(%tx_hash, "Deployment transaction sent, waiting for receipt");

        let receipt = pending.get_receipt().await.map_err(|e| ChainError::Rpc {
            message: format!("Failed to get receipt for {tx_hash}: {e}"),
        })?;

        if !receipt.status() {
            return Err(ChainError::TransactionFailed {
                reason: format!("Deployment transaction {tx_hash} reverted"),
            });
        }

        let address = receipt
            .contract_address
            .ok_or(ChainError::MissingContractAddress { tx_hash })?;

        tracing::info!(
            %address,
            block_number = ?receipt.block_number,
            gas_used = receipt.gas_used,
            "LuxuryToken deployed",
        );

        Ok(DeployedToken {
            address,
            owner,
            tx_hash: Some(receipt.transaction_hash),
            block_number: receipt.block_number,
            gas_used: Some(receipt.gas_used),
        })
    }

    fn deployer_address(&self) -> Address {
        self.deployer
    }
}
