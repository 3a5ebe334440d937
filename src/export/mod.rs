//! Download serialization for scraped records.
//!
//! Two formats, both single-record by design: a `;`-delimited one-row CSV
//! for the merchandise import and a namespaced XML document for the
//! marketplace feed.

mod csv;
mod xml;

pub use csv::to_csv;
pub use xml::to_xml;

use std::fmt;
use std::str::FromStr;

use crate::app::{Result, SpindelError};
use crate::domain::ProductRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Xml,
    Csv,
}

impl FromStr for ExportFormat {
    type Err = SpindelError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "xml" => Ok(Self::Xml),
            "csv" => Ok(Self::Csv),
            other => Err(SpindelError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Xml => "xml",
            Self::Csv => "csv",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Xml => "application/xml",
            Self::Csv => "text/csv",
        }
    }
}

/// Serialize a record in the requested format.
pub fn export(record: &ProductRecord, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Xml => Ok(to_xml(record)),
        ExportFormat::Csv => to_csv(record),
    }
}

/// Attachment filename for a download, keyed by article number.
pub fn download_filename(record: &ProductRecord, format: ExportFormat) -> String {
    let stem = if record.article_number.is_empty() {
        "export"
    } else {
        record.article_number.as_str()
    };
    format!("product_{}.{}", stem, format.extension())
}
