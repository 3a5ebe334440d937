use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpindelError {
    #[error("Invalid product URL: {0}")]
    InvalidUrl(String),

    #[error("Browser error: {0}")]
    Browser(String),

    #[error("Page load timed out")]
    Timeout,

    #[error("Page is not a recognized product page")]
    NotProductPage,

    #[error("No article number found on the page")]
    NoArticleNumber,

    #[error("No product name found on the page")]
    NoProductName,

    #[error("No scraped record available")]
    NoRecord,

    #[error("Unknown export format: {0}")]
    UnknownFormat(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SpindelError>;
