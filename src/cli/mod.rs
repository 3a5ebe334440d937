pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "spindel")]
#[command(about = "Blutsgeschwister product page scraper and exporter", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the web server
    Serve {
        /// Address to bind (overrides config)
        #[arg(short, long)]
        bind: Option<String>,
    },
    /// Scrape a single product page and print or save an export
    Scrape {
        /// Product page URL
        url: String,

        /// Export format: xml or csv
        #[arg(short, long, default_value = "xml")]
        format: String,

        /// Write the export to a file instead of stdout
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
    },
}
