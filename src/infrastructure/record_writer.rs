// Writes the generated grocery record as a JSON document
use crate::application::error::DataError;
use crate::domain::record::GroceryRecord;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Serialize)]
struct ChartDocument<'a> {
    chart_title: &'a str,
    data_points: Vec<DocumentPoint<'a>>,
}

#[derive(Debug, Serialize)]
struct DocumentPoint<'a> {
    item: &'a str,
    value: u32,
}

/// Serialize with four-space indentation
pub fn encode_record(record: &GroceryRecord) -> Result<Vec<u8>, serde_json::Error> {
    let document = ChartDocument {
        chart_title: &record.title,
        data_points: record
            .entries
            .iter()
            .map(|(item, value)| DocumentPoint { item, value: *value })
            .collect(),
    };

    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    document.serialize(&mut serializer)?;
    Ok(buffer)
}

/// Write the record to `path`, replacing any existing file
pub async fn write_record(path: &Path, record: &GroceryRecord) -> Result<(), DataError> {
    let bytes = encode_record(record).map_err(|e| DataError::invalid(path, e))?;

    tokio::fs::write(path, &bytes)
        .await
        .map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::info!(
        "Wrote {} data points ({} bytes) to {}",
        record.entries.len(),
        bytes.len(),
        path.display()
    );
    Ok(())
}
