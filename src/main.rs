use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use spindel::app::AppContext;
use spindel::cli::{commands, Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let ctx = Arc::new(AppContext::new()?);

    match cli.command {
        Commands::Serve { bind } => {
            commands::serve(ctx, bind).await?;
        }
        Commands::Scrape {
            url,
            format,
            output,
        } => {
            commands::scrape_once(&ctx, &url, &format, output.as_deref()).await?;
        }
    }

    Ok(())
}
