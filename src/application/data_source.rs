// Data source trait for dashboard inputs
use crate::application::error::{DataError, Loaded};
use crate::domain::chart::ChartDataset;
use crate::domain::grocery::GroceryTable;
use async_trait::async_trait;

#[async_trait]
pub trait DataSource: Send + Sync {
    /// Load the grocery rows (CSV source)
    async fn load_groceries(&self) -> Result<Loaded<GroceryTable>, DataError>;

    /// Load the chart dataset (JSON source)
    async fn load_chart_dataset(&self) -> Result<Loaded<ChartDataset>, DataError>;

    /// Header names used for the grocery table, as (item, count)
    fn grocery_columns(&self) -> (String, String);
}
