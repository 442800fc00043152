mod adapters;
mod core;
mod global_constants;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::adapters::{ReqwestPhotoGateway, TempFileDisplaySink};
use crate::core::models::SearchConfig;
use crate::core::orchestrators::PhotoSearchClient;

#[derive(Parser)]
#[command(
    name = "photo-roulette",
    about = "Search a public photo API and display one randomly chosen result"
)]
struct Cli {
    /// API key for the photo search service
    #[arg(long, env = "FLICKR_API_KEY")]
    api_key: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search by a free-text phrase
    Phrase { text: String },
    /// Search around a geographic point
    Near {
        latitude: String,
        longitude: String,
    },
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let cli = Cli::parse();

    log::info!("[MAIN] starting photo-roulette");

    let config = SearchConfig::with_api_key(cli.api_key.clone());
    let gateway = Arc::new(ReqwestPhotoGateway::new(config.api_endpoint.clone()));
    let display = Arc::new(TempFileDisplaySink::new());
    log::debug!(
        "[MAIN] results are saved to {}",
        display.output_path().display()
    );
    let client = PhotoSearchClient::new(gateway, display, config);

    let result = match &cli.command {
        Command::Phrase { text } => client.search_by_phrase(text).await,
        Command::Near {
            latitude,
            longitude,
        } => client.search_by_location(latitude, longitude).await,
    };

    if let Err(error) = result {
        log::error!("[MAIN] search failed: {}", error);
        std::process::exit(1);
    }
}
