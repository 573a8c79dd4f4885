//! Hardhat build artifact loading.
//!
//! The contract is compiled by the Hardhat project under `contracts/`; its
//! artifact JSON carries the creation bytecode we send in the deployment
//! transaction.

use std::path::Path;

use alloy::primitives::Bytes;
use serde::Deserialize;

use crate::deployer::ChainError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HardhatArtifact {
    contract_name: Option<String>,
    bytecode: Option<Bytes>,
}

/// Creation bytecode for `LuxuryToken`.
#[derive(Debug, Clone)]
pub struct TokenArtifact {
    pub contract_name: String,
    pub bytecode: Bytes,
}

impl TokenArtifact {
    /// Read and parse an artifact file.
    pub fn load(path: &Path) -> Result<Self, ChainError> {
        let raw = std::fs::read_to_string(path).map_err(|e| ChainError::Artifact {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        Self::from_json(&raw)
    }

    /// Parse artifact JSON. Abstract contracts and interfaces have an empty
    /// bytecode (`"0x"`) and are rejected.
    pub fn from_json(raw: &str) -> Result<Self, ChainError> {
        let artifact: HardhatArtifact =
            serde_json::from_str(raw).map_err(|e| ChainError::Artifact {
                message: format!("Invalid artifact JSON: {e}"),
            })?;

        let bytecode = artifact
            .bytecode
            .filter(|code| !code.is_empty())
            .ok_or_else(|| ChainError::Artifact {
                message: "Artifact has no creation bytecode".into(),
            })?;

        Ok(Self {
            contract_name: artifact
                .contract_name
                .unwrap_or_else(|| "LuxuryToken".to_string()),
            bytecode,
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn parses_hardhat_artifact() {
        let raw = r#"{
            "_format": "hh-sol-artifact-1",
            "contractName": "LuxuryToken",
            "abi": [],
            "bytecode": "0x6080604052",
            "deployedBytecode": "0x6080"
        }"#;

        let artifact = TokenArtifact::from_json(raw).unwrap();
        assert_eq!(artifact.contract_name, "LuxuryToken");
        assert_eq!(&artifact.bytecode[..], &[0x60, 0x80, 0x60, 0x40, 0x52]);
    }

    #[test]
    fn empty_bytecode_is_rejected() {
        let raw = r#"{ "contractName": "ILuxuryToken", "bytecode": "0x" }"#;
        assert_matches!(
            TokenArtifact::from_json(raw),
            Err(ChainError::Artifact { .. })
        );
    }

    #[test]
    fn missing_bytecode_is_rejected() {
        assert_matches!(
            TokenArtifact::from_json(r#"{ "abi": [] }"#),
            Err(ChainError::Artifact { .. })
        );
    }

    #[test]
    fn missing_file_is_reported() {
        let err = TokenArtifact::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
