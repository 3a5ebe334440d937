use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::{Form, Json};
use serde::{Deserialize, Serialize};
use tracing::error;

use super::AppState;
use crate::app::SpindelError;
use crate::export::{self, ExportFormat};
use crate::scraper;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="de">
<head>
  <meta charset="utf-8">
  <title>Spindel – Produkt-Scraper</title>
</head>
<body>
  <h1>Blutsgeschwister Produkt-Scraper</h1>
  <form action="/scrape" method="post">
    <label for="product_url">Produkt-URL:</label>
    <input type="url" id="product_url" name="product_url" size="80"
           placeholder="https://www.blutsgeschwister.de/de/..." required>
    <button type="submit">Auslesen</button>
  </form>
  <p>
    Download des letzten Ergebnisses:
    <a href="/download/xml">XML</a> |
    <a href="/download/csv">CSV</a>
  </p>
</body>
</html>
"#;

pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

#[derive(Debug, Deserialize)]
pub struct ScrapeForm {
    pub product_url: String,
}

#[derive(Debug, Serialize)]
struct ScrapeSummary {
    name: String,
    artikelnummer: String,
    groessen: Vec<String>,
    bilder_count: usize,
}

#[derive(Debug, Serialize)]
struct ScrapeResponse {
    status: &'static str,
    message: &'static str,
    data: ScrapeSummary,
}

/// Run one scrape and store the record on success.
pub async fn scrape(State(state): State<AppState>, Form(form): Form<ScrapeForm>) -> Response {
    let config = &state.ctx.config.scraper;

    if let Err(e) = scraper::validate_product_url(&form.product_url, &config.allowed_url_prefix) {
        return error_response(&e);
    }

    match scraper::scrape_product(config, &form.product_url).await {
        Ok(record) => {
            let summary = ScrapeSummary {
                name: record.name.clone(),
                artikelnummer: record.article_number.clone(),
                groessen: record.sizes.clone(),
                bilder_count: record.images.len(),
            };
            state.ctx.store.replace(record, &form.product_url).await;
            Json(ScrapeResponse {
                status: "success",
                message: "Daten erfolgreich extrahiert",
                data: summary,
            })
            .into_response()
        }
        Err(e) => {
            error!("scrape failed: {}", e);
            error_response(&e)
        }
    }
}

/// Serve the current record as a CSV or XML attachment.
pub async fn download(State(state): State<AppState>, Path(format): Path<String>) -> Response {
    let format = match format.parse::<ExportFormat>() {
        Ok(format) => format,
        Err(e) => return error_response(&e),
    };

    let Some(stored) = state.ctx.store.current().await else {
        return error_response(&SpindelError::NoRecord);
    };

    match export::export(&stored.record, format) {
        Ok(body) => {
            let filename = export::download_filename(&stored.record, format);
            (
                [
                    (
                        header::CONTENT_TYPE,
                        format!("{}; charset=utf-8", format.content_type()),
                    ),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{}\"", filename),
                    ),
                ],
                body,
            )
                .into_response()
        }
        Err(e) => {
            error!("export failed: {}", e);
            error_response(&e)
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: String,
}

/// Map a domain error onto a status code and the operator-facing message.
fn error_response(err: &SpindelError) -> Response {
    let (status, detail) = match err {
        SpindelError::InvalidUrl(_) => (
            StatusCode::BAD_REQUEST,
            "Invalid Blutsgeschwister product URL. URL must start with \
             'https://www.blutsgeschwister.de/de'"
                .to_string(),
        ),
        SpindelError::UnknownFormat(_) => (
            StatusCode::BAD_REQUEST,
            "Invalid format specified. Use 'xml' or 'csv'.".to_string(),
        ),
        SpindelError::NoRecord => (
            StatusCode::NOT_FOUND,
            "No scraped data available. Please scrape a product first.".to_string(),
        ),
        SpindelError::Timeout => (
            StatusCode::GATEWAY_TIMEOUT,
            "Die Seite konnte nicht geladen werden. Bitte versuchen Sie es später erneut."
                .to_string(),
        ),
        SpindelError::NotProductPage => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Die URL scheint keine gültige Produktseite zu sein.".to_string(),
        ),
        SpindelError::NoArticleNumber => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Keine Artikelnummer gefunden.".to_string(),
        ),
        SpindelError::NoProductName => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Kein Produktname gefunden.".to_string(),
        ),
        other => (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Error during scraping: {}", other),
        ),
    };

    (status, Json(ErrorBody { detail })).into_response()
}
