//! `luxury-deploy` -- deploy a single `LuxuryToken` contract.
//!
//! Every parameter can be given as a flag or through the environment.
//!
//! | Variable                 | Default                  |
//! |--------------------------|--------------------------|
//! | `BLOCKCHAIN_RPC_URL`     | `http://localhost:8545`  |
//! | `BLOCKCHAIN_PRIVATE_KEY` | required                 |
//! | `TOKEN_NAME`             | `Luxury Token`           |
//! | `TOKEN_SYMBOL`           | `LUX`                    |
//! | `ASSET_ID`               | zero hash                |
//! | `METADATA_HASH`          | zero hash                |
//! | `INITIAL_SUPPLY`         | `1000` (whole tokens)    |
//! | `OWNER_ADDRESS`          | deployer account         |
//!
//! The last line of output is a single JSON object describing the
//! deployment, for consumption by other scripts.

use std::path::PathBuf;

use alloy::network::EthereumWallet;
use alloy::primitives::utils::{format_ether, parse_ether};
use alloy::primitives::Address;
use alloy::providers::ProviderBuilder;
use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use luxury_chain::artifact::TokenArtifact;
use luxury_chain::config::{DEFAULT_ARTIFACT_PATH, DEFAULT_MIN_BALANCE, DEFAULT_RPC_URL};
use luxury_chain::deployer::parse_signer;
use luxury_chain::{DeployParams, RpcTokenDeployer, TokenDeployer};
use luxury_core::bytes32::Bytes32Hex;

#[derive(Debug, Parser)]
#[command(name = "luxury-deploy", version, about = "Deploy a LuxuryToken contract")]
struct DeployArgs {
    #[arg(long, env = "BLOCKCHAIN_RPC_URL", default_value = DEFAULT_RPC_URL)]
    rpc_url: String,

    #[arg(long, env = "BLOCKCHAIN_PRIVATE_KEY", hide_env_values = true)]
    private_key: String,

    /// Hardhat artifact holding the creation bytecode.
    #[arg(long, env = "LUXURY_TOKEN_ARTIFACT", default_value = DEFAULT_ARTIFACT_PATH)]
    artifact: PathBuf,

    /// Minimum deployer balance in ETH.
    #[arg(long, env = "MIN_DEPLOYER_BALANCE_ETH", default_value = DEFAULT_MIN_BALANCE)]
    min_balance: String,

    #[arg(long, env = "TOKEN_NAME", default_value = "Luxury Token")]
    name: String,

    #[arg(long, env = "TOKEN_SYMBOL", default_value = "LUX")]
    symbol: String,

    /// bytes32 asset identifier (hex, left-padded when short).
    #[arg(long, env = "ASSET_ID")]
    asset_id: Option<String>,

    /// bytes32 metadata hash (hex, left-padded when short).
    #[arg(long, env = "METADATA_HASH")]
    metadata_hash: Option<String>,

    /// Initial supply in whole tokens (18 decimals).
    #[arg(long, env = "INITIAL_SUPPLY", default_value = "1000")]
    initial_supply: String,

    #[arg(long, env = "OWNER_ADDRESS")]
    owner: Option<Address>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DeploymentSummary {
    contract_address: Address,
    asset_id: Bytes32Hex,
    metadata_hash: Bytes32Hex,
    total_supply: String,
    owner: Address,
}

fn parse_bytes32(raw: Option<&str>, flag: &str) -> anyhow::Result<Bytes32Hex> {
    match raw {
        None => Ok(Bytes32Hex::zero()),
        Some(value) => Bytes32Hex::parse_lenient(value)
            .with_context(|| format!("{flag} '{value}' is not a valid bytes32 hex value")),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "luxury_deploy=info,luxury_chain=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = DeployArgs::parse();

    let signer = parse_signer(&args.private_key)?;
    let deployer_address = signer.address();

    let artifact = TokenArtifact::load(&args.artifact)?;
    let min_balance = parse_ether(&args.min_balance)
        .with_context(|| format!("Invalid minimum balance '{}'", args.min_balance))?;

    let provider = ProviderBuilder::new()
        .wallet(EthereumWallet::from(signer))
        .connect(&args.rpc_url)
        .await
        .with_context(|| format!("Failed to connect to {}", args.rpc_url))?;

    let deployer = RpcTokenDeployer::new(provider, deployer_address, artifact, min_balance);

    let balance = deployer.deployer_balance().await?;
    println!("Deploying contracts with account: {deployer_address}");
    println!("Account balance: {} ETH", format_ether(balance));

    let params = DeployParams {
        name: args.name,
        symbol: args.symbol,
        asset_id: parse_bytes32(args.asset_id.as_deref(), "ASSET_ID")?,
        metadata_hash: parse_bytes32(args.metadata_hash.as_deref(), "METADATA_HASH")?,
        initial_supply: parse_ether(&args.initial_supply)
            .with_context(|| format!("Invalid initial supply '{}'", args.initial_supply))?,
        owner: Some(args.owner.unwrap_or(deployer_address)),
    };

    println!("Deployment parameters:");
    println!("  Name: {}", params.name);
    println!("  Symbol: {}", params.symbol);
    println!("  Asset ID: {}", params.asset_id);
    println!("  Metadata hash: {}", params.metadata_hash);
    println!("  Initial supply: {} tokens", format_ether(params.initial_supply));
    println!("  Owner: {}", params.owner.unwrap_or(deployer_address));

    let deployed = deployer.deploy(&params).await?;
    println!("LuxuryToken deployed to: {}", deployed.address);
    if let Some(tx_hash) = deployed.tx_hash {
        println!("  Transaction: {tx_hash}");
    }

    let token = deployer.read_token(deployed.address).await?;
    println!("Contract details:");
    println!("  Name: {}", token.name);
    println!("  Symbol: {}", token.symbol);
    println!("  Asset ID: {}", token.asset_id);
    println!("  Metadata hash: {}", token.metadata_hash);
    println!("  Total supply: {} tokens", format_ether(token.total_supply));
    println!("  Owner: {}", token.owner);

    let summary = DeploymentSummary {
        contract_address: deployed.address,
        asset_id: token.asset_id,
        metadata_hash: token.metadata_hash,
        total_supply: token.total_supply.to_string(),
        owner: token.owner,
    };
    println!("{}", serde_json::to_string(&summary)?);

    Ok(())
}
