// File-backed data source for the CSV and JSON inputs
use crate::application::data_source::DataSource;
use crate::application::error::{DataError, Loaded};
use crate::domain::chart::{ChartDataset, DataPoint, DEFAULT_CHART_TITLE};
use crate::domain::grocery::{GroceryRow, GroceryTable};
use crate::infrastructure::config::SourceSettings;
use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct FileDataSource {
    csv_path: PathBuf,
    json_path: PathBuf,
    item_column: String,
    count_column: String,
}

#[derive(Debug, Deserialize)]
struct ChartDocument {
    #[serde(default)]
    chart_title: Option<String>,
    #[serde(default)]
    data_points: Vec<DocumentPoint>,
}

#[derive(Debug, Deserialize)]
struct DocumentPoint {
    item: String,
    #[serde(default)]
    value: serde_json::Value,
}

impl FileDataSource {
    pub fn new(settings: &SourceSettings) -> Self {
        Self {
            csv_path: settings.csv_path.clone(),
            json_path: settings.json_path.clone(),
            item_column: settings.item_column.clone(),
            count_column: settings.count_column.clone(),
        }
    }

    fn parse_groceries(&self, bytes: &[u8]) -> Result<GroceryTable, DataError> {
        // Short rows are kept; their absent fields read as missing
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(bytes);

        let headers = reader
            .headers()
            .map_err(|e| DataError::invalid(&self.csv_path, e))?
            .clone();
        let item_idx = self.column_index(&headers, &self.item_column)?;
        let count_idx = self.column_index(&headers, &self.count_column)?;

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| DataError::invalid(&self.csv_path, e))?;
            let name = record.get(item_idx).unwrap_or_default().to_string();
            let count = record.get(count_idx).and_then(coerce_str);
            rows.push(GroceryRow::new(name, count));
        }

        tracing::debug!("Parsed {} rows from {}", rows.len(), self.csv_path.display());
        Ok(GroceryTable::new(rows))
    }

    fn column_index(&self, headers: &csv::StringRecord, column: &str) -> Result<usize, DataError> {
        headers
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| {
                DataError::invalid(&self.csv_path, format!("missing column '{}'", column))
            })
    }

    fn parse_chart_dataset(&self, bytes: &[u8]) -> Result<ChartDataset, DataError> {
        let document: ChartDocument =
            serde_json::from_slice(bytes).map_err(|e| DataError::invalid(&self.json_path, e))?;

        let points = document
            .data_points
            .into_iter()
            .map(|p| DataPoint::new(p.item, coerce_value(&p.value)))
            .collect();

        Ok(ChartDataset::new(
            document
                .chart_title
                .unwrap_or_else(|| DEFAULT_CHART_TITLE.to_string()),
            points,
        ))
    }
}

#[async_trait]
impl DataSource for FileDataSource {
    async fn load_groceries(&self) -> Result<Loaded<GroceryTable>, DataError> {
        match read_optional(&self.csv_path).await? {
            Some(bytes) => self.parse_groceries(&bytes).map(Loaded::Available),
            None => Ok(Loaded::Unavailable {
                path: self.csv_path.clone(),
            }),
        }
    }

    async fn load_chart_dataset(&self) -> Result<Loaded<ChartDataset>, DataError> {
        match read_optional(&self.json_path).await? {
            Some(bytes) => self.parse_chart_dataset(&bytes).map(Loaded::Available),
            None => Ok(Loaded::Unavailable {
                path: self.json_path.clone(),
            }),
        }
    }

    fn grocery_columns(&self) -> (String, String) {
        (self.item_column.clone(), self.count_column.clone())
    }
}

/// Read a whole file; a missing file is `None`, not an error
async fn read_optional(path: &Path) -> Result<Option<Vec<u8>>, DataError> {
    match tokio::fs::read(path).await {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("Source file {} not found", path.display());
            Ok(None)
        }
        Err(source) => Err(DataError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Numeric coercion: anything that is not a finite number becomes missing
fn coerce_str(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn coerce_value(value: &serde_json::Value) -> Option<f64> {
    match value {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => coerce_str(s),
        _ => None,
    }
}
