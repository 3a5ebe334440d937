use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::app::{AppContext, Result};
use crate::export::{self, ExportFormat};
use crate::scraper;
use crate::server;

pub async fn serve(ctx: Arc<AppContext>, bind: Option<String>) -> Result<()> {
    let bind = bind.unwrap_or_else(|| ctx.config.server.bind.clone());
    server::run(ctx, &bind).await
}

/// One-shot scrape: extract a record and write the export to stdout or a file.
pub async fn scrape_once(
    ctx: &AppContext,
    url: &str,
    format: &str,
    output: Option<&Path>,
) -> Result<()> {
    let format: ExportFormat = format.parse()?;
    let config = &ctx.config.scraper;

    scraper::validate_product_url(url, &config.allowed_url_prefix)?;

    let record = scraper::scrape_product(config, url).await?;
    info!(
        "scraped {} ({}), {} sizes, {} images",
        record.name,
        record.article_number,
        record.sizes.len(),
        record.images.len()
    );

    let body = export::export(&record, format)?;
    match output {
        Some(path) => {
            std::fs::write(path, &body)?;
            println!("Saved {}", path.display());
        }
        None => println!("{}", body),
    }

    Ok(())
}
