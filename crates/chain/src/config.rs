use std::path::PathBuf;

use alloy::primitives::utils::parse_ether;
use alloy::primitives::U256;

use crate::deployer::ChainError;

pub const DEFAULT_RPC_URL: &str = "http://localhost:8545";
pub const DEFAULT_ARTIFACT_PATH: &str = "contracts/artifacts/src/LuxuryToken.sol/LuxuryToken.json";
pub const DEFAULT_MIN_BALANCE: &str = "0.001";

/// Chain access configuration loaded from environment variables.
///
/// | Env Var                    | Default                                                    |
/// |----------------------------|------------------------------------------------------------|
/// | `BLOCKCHAIN_ENABLED`       | `false`                                                    |
/// | `BLOCKCHAIN_RPC_URL`       | `http://localhost:8545`                                    |
/// | `BLOCKCHAIN_PRIVATE_KEY`   | required when enabled                                      |
/// | `LUXURY_TOKEN_ARTIFACT`    | `contracts/artifacts/src/LuxuryToken.sol/LuxuryToken.json` |
/// | `MIN_DEPLOYER_BALANCE_ETH` | `0.001`                                                    |
#[derive(Clone)]
pub struct ChainConfig {
    /// When false, deployments are simulated and never touch an RPC.
    pub enabled: bool,
    pub rpc_url: String,
    /// Hex private key of the deployer account.
    pub private_key: Option<String>,
    pub artifact_path: PathBuf,
    /// Minimum native balance (in wei) the deployer must hold.
    pub min_balance: U256,
}

impl std::fmt::Debug for ChainConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainConfig")
            .field("enabled", &self.enabled)
            .field("rpc_url", &self.rpc_url)
            .field("private_key", &self.private_key.as_ref().map(|_| "<redacted>"))
            .field("artifact_path", &self.artifact_path)
            .field("min_balance", &self.min_balance)
            .finish()
    }
}

impl ChainConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ChainError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ChainError> {
        let enabled = match lookup("BLOCKCHAIN_ENABLED") {
            None => false,
            Some(raw) => parse_bool(&raw).ok_or_else(|| ChainError::Config {
                message: format!("BLOCKCHAIN_ENABLED must be true or false, got '{raw}'"),
            })?,
        };

        let rpc_url = lookup("BLOCKCHAIN_RPC_URL").unwrap_or_else(|| DEFAULT_RPC_URL.into());

        let private_key = lookup("BLOCKCHAIN_PRIVATE_KEY")
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        if enabled && private_key.is_none() {
            return Err(ChainError::Config {
                message: "BLOCKCHAIN_PRIVATE_KEY is required when BLOCKCHAIN_ENABLED=true"
                    .into(),
            });
        }

        let artifact_path = lookup("LUXURY_TOKEN_ARTIFACT")
            .unwrap_or_else(|| DEFAULT_ARTIFACT_PATH.into())
            .into();

        let min_balance_raw =
            lookup("MIN_DEPLOYER_BALANCE_ETH").unwrap_or_else(|| DEFAULT_MIN_BALANCE.into());
        let min_balance = parse_ether(&min_balance_raw).map_err(|e| ChainError::Config {
            message: format!("MIN_DEPLOYER_BALANCE_ETH '{min_balance_raw}' is invalid: {e}"),
        })?;

        Ok(Self {
            enabled,
            rpc_url,
            private_key,
            artifact_path,
            min_balance,
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_are_disabled_local_node() {
        let config = ChainConfig::from_vars(lookup(&[])).unwrap();
        assert!(!config.enabled);
        assert_eq!(config.rpc_url, "http://localhost:8545");
        assert_eq!(config.min_balance, U256::from(1_000_000_000_000_000u64));
        assert!(config.private_key.is_none());
    }

    #[test]
    fn enabled_without_key_is_rejected() {
        assert_matches!(
            ChainConfig::from_vars(lookup(&[("BLOCKCHAIN_ENABLED", "true")])),
            Err(ChainError::Config { .. })
        );
    }

    #[test]
    fn enabled_with_key_loads() {
        let config = ChainConfig::from_vars(lookup(&[
            ("BLOCKCHAIN_ENABLED", "1"),
            ("BLOCKCHAIN_PRIVATE_KEY", " 0xabc "),
            ("BLOCKCHAIN_RPC_URL", "https://rpc.sepolia.mantle.xyz"),
            ("MIN_DEPLOYER_BALANCE_ETH", "0.5"),
        ]))
        .unwrap();
        assert!(config.enabled);
        assert_eq!(config.private_key.as_deref(), Some("0xabc"));
        assert_eq!(config.rpc_url, "https://rpc.sepolia.mantle.xyz");
        assert_eq!(config.min_balance, U256::from(500_000_000_000_000_000u64));
    }

    #[test]
    fn garbage_flag_is_rejected() {
        assert_matches!(
            ChainConfig::from_vars(lookup(&[("BLOCKCHAIN_ENABLED", "maybe")])),
            Err(ChainError::Config { .. })
        );
    }

    #[test]
    fn debug_output_redacts_private_key() {
        let config = ChainConfig::from_vars(lookup(&[
            ("BLOCKCHAIN_ENABLED", "true"),
            ("BLOCKCHAIN_PRIVATE_KEY", "0xsecret"),
        ]))
        .unwrap();
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("secret"));
    }
}
