//! # Spindel
//!
//! A single-product page scraper and marketplace exporter for the
//! Blutsgeschwister storefront.
//!
//! ## Architecture
//!
//! Spindel follows a modular pipeline architecture:
//!
//! ```text
//! URL → Scraper (headless Chrome) → ProductRecord → Store → Export
//! ```
//!
//! - [`scraper`]: browser-backed extraction with selector-fallback chains
//! - [`marketplace`]: Google taxonomy mapping and metafield derivation
//! - [`store`]: transient single-slot record store
//! - [`export`]: CSV and XML download serialization
//! - [`server`]: axum serving layer (form, scrape, download)
//!
//! ## Quick Start
//!
//! ```bash
//! # Run the web form
//! spindel serve
//!
//! # One-shot scrape to stdout
//! spindel scrape https://www.blutsgeschwister.de/de/kleider/wildwuchs --format csv
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together configuration
/// and the record store.
pub mod app;

/// Command-line interface using clap.
///
/// - `serve [--bind <addr>]` - Run the web server
/// - `scrape <url> [--format xml|csv] [--output <path>]` - One-shot scrape
pub mod cli;

/// Configuration management.
///
/// Loads from `~/.config/spindel/config.toml`, creating a commented default
/// file on first run.
pub mod config;

/// Core domain models.
///
/// - [`ProductRecord`](domain::ProductRecord): one scraped product
/// - [`Metafields`](domain::Metafields): the fixed marketplace key set
pub mod domain;

/// CSV and XML export.
///
/// Both formats serialize exactly one record: a `;`-delimited import row and
/// a `g:`-namespaced feed document.
pub mod export;

/// Marketplace metadata derivation (Google taxonomy, metafields).
pub mod marketplace;

/// Browser-backed product extraction.
///
/// - [`ChromeSession`](scraper::ChromeSession): per-scrape headless Chrome
/// - [`DomProvider`](scraper::DomProvider): narrow page-query capability
/// - [`FieldExtractor`](scraper::FieldExtractor): selector-fallback extraction
/// - [`Sanitizer`](scraper::Sanitizer): rich-text cleanup
pub mod scraper;

/// HTTP serving layer built with axum.
///
/// `GET /` form page, `POST /scrape`, `GET /download/:format`, `GET /health`.
pub mod server;

/// Transient single-slot record store, last write wins.
pub mod store;
