use std::sync::Arc;

use chrono::Utc;
use clap::Parser;
use tracing::info;

use cb_core::Result;
use cb_fetch::{ArticleFetcher, HttpArticleFetcher};
use cb_web::{create_app, AppState};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Run the card generation HTTP server
    Serve {
        /// Address to bind, e.g. 0.0.0.0:3000
        #[arg(long, default_value = "0.0.0.0:3000")]
        addr: String,
    },
    /// Generate a single card and print it
    Card {
        /// Article URL to cut a card from
        url: String,
        /// The idea (claim/tag) to match sentences against
        idea: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    cb_core::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Serve { addr } => {
            let state = AppState {
                fetcher: Arc::new(HttpArticleFetcher::new()),
            };
            let app = create_app(state).await;
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            info!("🃏 Card server listening on {}", addr);
            axum::serve(listener, app).await?;
        }
        Commands::Card { url, idea } => {
            let fetcher = HttpArticleFetcher::new();
            let snapshot = fetcher.fetch(&url).await?;
            let card = cb_core::generate_card(&snapshot, &url, &idea, Utc::now());
            println!("tag:      {}", card.tag);
            println!("citation: {}", card.citation);
            println!("excerpt:  {}", card.excerpt);
        }
    }

    Ok(())
}
