use alloy::primitives::{address, Address};
use async_trait::async_trait;
use luxury_core::hashing::sha256_bytes;

use crate::deployer::{ChainError, DeployParams, DeployedToken, TokenDeployer};

/// Address of the well-known development key `0x…01`, used as the simulated
/// deployer account.
pub const MOCK_DEPLOYER_ADDRESS: Address = address!("7e5f4552091a69125d5dfcb7b8c2659029395bdf");

/// Deployer used when chain access is disabled.
///
/// Returns a pseudo contract address derived from the asset id (last 20
/// bytes of its SHA-256), so repeated runs are stable and distinct assets
/// get distinct addresses.
#[derive(Debug, Default)]
pub struct MockTokenDeployer;

impl MockTokenDeployer {
    pub fn new() -> Self {
        Self
    }

    pub fn simulated_address(params: &DeployParams) -> Address {
        let digest = sha256_bytes(params.asset_id.as_str().as_bytes());
        Address::from_slice(&digest[12..])
    }
}

#[async_trait]
impl TokenDeployer for MockTokenDeployer {
    async fn deploy(&self, params: &DeployParams) -> Result<DeployedToken, ChainError> {
        let address = Self::simulated_address(params);
        tracing::warn!(
            asset_id = %params.asset_id,
            symbol = %params.symbol,
            %address,
            "Blockchain deployment is disabled; returning simulated token address",
        );

        Ok(DeployedToken {
            address,
            owner: params.owner.unwrap_or(MOCK_DEPLOYER_ADDRESS),
            tx_hash: None,
            block_number: None,
            gas_used: None,
        })
    }

    fn deployer_address(&self) -> Address {
        MOCK_DEPLOYER_ADDRESS
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::U256;
    use luxury_core::bytes32::Bytes32Hex;

    use super::*;

    fn params(asset_id: &str) -> DeployParams {
        DeployParams {
            name: "Cartier Love Token".into(),
            symbol: "CL".into(),
            asset_id: Bytes32Hex::parse_lenient(asset_id).unwrap(),
            metadata_hash: Bytes32Hex::zero(),
            initial_supply: U256::from(10u64),
            owner: None,
        }
    }

    #[tokio::test]
    async fn simulated_addresses_are_stable_per_asset() {
        let deployer = MockTokenDeployer::new();
        let a1 = deployer.deploy(&params("0x0a")).await.unwrap();
        let a2 = deployer.deploy(&params("0x0a")).await.unwrap();
        let b = deployer.deploy(&params("0x0b")).await.unwrap();

        assert_eq!(a1.address, a2.address);
        assert_ne!(a1.address, b.address);
        assert_eq!(a1.owner, MOCK_DEPLOYER_ADDRESS);
    }

    #[tokio::test]
    async fn explicit_owner_is_kept() {
        let owner = address!("00000000000000000000000000000000000000aa");
        let mut p = params("0x0c");
        p.owner = Some(owner);
        let deployed = MockTokenDeployer::new().deploy(&p).await.unwrap();
        assert_eq!(deployed.owner, owner);
    }
}
