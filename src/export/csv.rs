use csv::WriterBuilder;

use crate::app::{Result, SpindelError};
use crate::domain::ProductRecord;
use crate::marketplace::BRAND;

/// Column set of the merchandise import, in wire order.
const HEADER: [&str; 16] = [
    "VaterartikelNr",
    "cHAN",
    "fLagerbestandeigen",
    "cbarcode",
    "cArtNr",
    "cName",
    "cBeschreibung",
    "cFirma",
    "cHerstellerName",
    "Attributgruppe",
    "Attributname",
    "Attributwert",
    "Shopaktiv",
    "Shop",
    "IstVaterArtikel",
    "kVaterartikel",
];

/// Render a record as one header row plus one `;`-delimited data row.
///
/// Minimal quoting with `"` as the quote character. One row only: variant
/// fan-out is not part of this export.
pub fn to_csv(record: &ProductRecord) -> Result<String> {
    let mut writer = WriterBuilder::new().delimiter(b';').from_writer(vec![]);

    writer.write_record(HEADER)?;

    let sizes = record.sizes.join(", ");
    writer.write_record([
        record.article_number.as_str(), // VaterartikelNr
        "",                             // cHAN
        "1",                            // fLagerbestandeigen
        "",                             // cbarcode
        record.article_number.as_str(), // cArtNr
        record.name.as_str(),           // cName
        record.details_html.as_str(),   // cBeschreibung
        BRAND,                          // cFirma
        BRAND,                          // cHerstellerName
        "Größe",                        // Attributgruppe
        "Größe",                        // Attributname
        sizes.as_str(),                 // Attributwert
        "1",                            // Shopaktiv
        BRAND,                          // Shop
        "1",                            // IstVaterArtikel
        "",                             // kVaterartikel
    ])?;

    let bytes = writer
        .into_inner()
        .map_err(|e| SpindelError::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| SpindelError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ProductRecord {
        ProductRecord {
            article_number: "12345".to_string(),
            name: "Test Kleid".to_string(),
            sizes: vec!["S".to_string(), "M".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_header_row_verbatim() {
        let out = to_csv(&record()).unwrap();
        assert_eq!(
            out.lines().next().unwrap(),
            "VaterartikelNr;cHAN;fLagerbestandeigen;cbarcode;cArtNr;cName;cBeschreibung;\
             cFirma;cHerstellerName;Attributgruppe;Attributname;Attributwert;Shopaktiv;\
             Shop;IstVaterArtikel;kVaterartikel"
        );
    }

    #[test]
    fn test_single_data_row_mapping() {
        let out = to_csv(&record()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);

        let fields: Vec<&str> = lines[1].split(';').collect();
        assert_eq!(fields[0], "12345"); // VaterartikelNr
        assert_eq!(fields[1], ""); // cHAN
        assert_eq!(fields[2], "1"); // fLagerbestandeigen
        assert_eq!(fields[4], "12345"); // cArtNr
        assert_eq!(fields[5], "Test Kleid"); // cName
        assert_eq!(fields[7], "Blutsgeschwister"); // cFirma
        assert_eq!(fields[9], "Größe"); // Attributgruppe
        assert_eq!(fields[11], "S, M"); // Attributwert
        assert_eq!(fields[14], "1"); // IstVaterArtikel
        assert_eq!(fields[15], ""); // kVaterartikel
    }

    #[test]
    fn test_field_containing_delimiter_is_quoted() {
        let mut rec = record();
        rec.name = "Kleid; limitiert".to_string();
        let out = to_csv(&rec).unwrap();
        assert!(out.contains("\"Kleid; limitiert\""));
    }

    #[test]
    fn test_empty_record_still_produces_both_rows() {
        let out = to_csv(&ProductRecord::default()).unwrap();
        assert_eq!(out.lines().count(), 2);
    }
}
