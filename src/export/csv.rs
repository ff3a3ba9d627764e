//! CSV export of metadata results.
//!
//! One row per result: `Filename, Title, Description, Keywords`, keywords
//! joined with `"; "`. Every field is quoted, with embedded quotes
//! doubled, so titles and descriptions containing commas or quotes
//! survive a round trip.

use csv::WriterBuilder;

use crate::error::AppError;
use crate::models::metadata::MetadataResult;

/// MIME type of the exported document.
pub const CSV_MIME_TYPE: &str = "text/csv";

/// Separator between keywords inside the `Keywords` column.
pub const KEYWORD_SEPARATOR: &str = "; ";

/// A rendered export ready to hand to the download surface.
#[derive(Debug, Clone)]
pub struct CsvExport {
    /// Suggested file name, `metadata-<unix-millis>.csv`.
    pub file_name: String,
    pub mime_type: &'static str,
    pub content: String,
}

/// Suggested export file name for the given timestamp.
pub fn export_file_name(unix_millis: i64) -> String {
    format!("metadata-{}.csv", unix_millis)
}

/// Render results to CSV text, in result order.
pub fn render(results: &[MetadataResult]) -> crate::error::Result<String> {
    let mut writer = WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .from_writer(Vec::new());

    writer.write_record(["Filename", "Title", "Description", "Keywords"])?;
    for result in results {
        writer.write_record([
            result.file_name.as_str(),
            result.title.as_str(),
            result.description.as_str(),
            &result.keywords.join(KEYWORD_SEPARATOR),
        ])?;
    }

    writer.flush()?;
    let data = writer
        .into_inner()
        .map_err(|e| AppError::Internal(format!("Failed to get CSV data: {}", e)))?;
    String::from_utf8(data).map_err(|e| AppError::Internal(format!("Invalid UTF-8 in CSV: {}", e)))
}

/// Render results into a named export document.
pub fn export(results: &[MetadataResult]) -> crate::error::Result<CsvExport> {
    let content = render(results)?;
    Ok(CsvExport {
        file_name: export_file_name(chrono::Utc::now().timestamp_millis()),
        mime_type: CSV_MIME_TYPE,
        content,
    })
}
