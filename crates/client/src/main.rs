//! `luxury` -- command-line frontend for the luxury asset API.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use luxury_client::client::DEFAULT_API_BASE_URL;
use luxury_client::{render_asset_card, render_asset_list, AssetsClient, SubmissionForm};

#[derive(Parser)]
#[command(name = "luxury")]
#[command(about = "Browse and submit tokenized luxury assets", long_about = None)]
#[command(version)]
struct Cli {
    /// API base URL
    #[arg(long, global = true, env = "LUXURY_API_BASE_URL", default_value = DEFAULT_API_BASE_URL)]
    api_base: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Asset operations
    #[command(subcommand)]
    Assets(AssetCommands),
}

#[derive(Subcommand)]
enum AssetCommands {
    /// List every asset open for investment
    List,

    /// Show a single asset
    Show {
        /// Asset id (UUID)
        id: Uuid,
    },

    /// Submit an asset for tokenization
    Submit(SubmitArgs),
}

/// Form fields, taken as typed. Empty values are treated as not provided.
#[derive(Args)]
struct SubmitArgs {
    /// watch, jewelry, or any other category
    #[arg(long, default_value = "watch")]
    asset_type: String,
    #[arg(long)]
    brand: String,
    #[arg(long)]
    model: String,
    #[arg(long, default_value = "")]
    year: String,
    #[arg(long, default_value = "")]
    description: String,
    #[arg(long, default_value = "")]
    purchase_price: String,
    /// YYYY-MM-DD
    #[arg(long, default_value = "")]
    purchase_date: String,
    #[arg(long, default_value = "")]
    serial_number: String,
    /// Number of fractional shares
    #[arg(long, default_value = "")]
    total_supply: String,
    #[arg(long, default_value = "")]
    price_per_share: String,
    #[arg(long, default_value = "")]
    submitted_by: String,
}

impl From<SubmitArgs> for SubmissionForm {
    fn from(args: SubmitArgs) -> Self {
        SubmissionForm {
            asset_type: args.asset_type,
            brand: args.brand,
            model: args.model,
            year: args.year,
            description: args.description,
            purchase_price: args.purchase_price,
            purchase_date: args.purchase_date,
            serial_number: args.serial_number,
            total_supply: args.total_supply,
            price_per_share: args.price_per_share,
            submitted_by: args.submitted_by,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "luxury_client=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let client = AssetsClient::new(cli.api_base);
    tracing::debug!(base_url = %client.base_url(), "Using API");

    match cli.command {
        Commands::Assets(AssetCommands::List) => {
            let assets = client.list_assets().await?;
            print!("{}", render_asset_list(&assets));
        }
        Commands::Assets(AssetCommands::Show { id }) => {
            let asset = client.get_asset(id).await?;
            print!("{}", render_asset_card(&asset));
        }
        Commands::Assets(AssetCommands::Submit(args)) => {
            let request = SubmissionForm::from(args).to_request()?;
            let asset = client.submit_asset(&request).await?;
            println!("Asset submitted successfully.");
            print!("{}", render_asset_card(&asset));
        }
    }

    Ok(())
}
