// View transforms - Pure filters from loaded datasets to chart requests
use crate::application::error::ViewError;
use crate::domain::chart::{ChartData, ChartDataset, ChartKind, ChartPoint, DataPoint};
use crate::domain::grocery::{GroceryRow, GroceryTable};

/// Index points by item name. The first occurrence of a name wins; the names
/// of dropped duplicates are returned alongside.
pub fn index_by_item(dataset: &ChartDataset) -> (Vec<&DataPoint>, Vec<String>) {
    let mut indexed: Vec<&DataPoint> = Vec::with_capacity(dataset.points.len());
    let mut duplicates = Vec::new();

    for point in &dataset.points {
        if indexed.iter().any(|p| p.item == point.item) {
            duplicates.push(point.item.clone());
        } else {
            indexed.push(point);
        }
    }

    (indexed, duplicates)
}

pub fn bar_chart(dataset: &ChartDataset) -> Result<ChartData, ViewError> {
    if dataset.is_empty() {
        return Err(ViewError::EmptyDataset);
    }

    let (indexed, duplicates) = index_by_item(dataset);
    if !duplicates.is_empty() {
        tracing::warn!("Ignoring duplicate items in chart dataset: {:?}", duplicates);
    }

    let points = indexed
        .into_iter()
        .map(|p| ChartPoint::new(p.item.clone(), p.value))
        .collect();

    Ok(ChartData::new(
        "static-bar".to_string(),
        dataset.title.clone(),
        ChartKind::Bar,
        "item".to_string(),
        "value".to_string(),
        points,
    ))
}

/// Upper bound of the threshold slider: the largest count, floored, never below zero.
pub fn threshold_bound(table: &GroceryTable, count_column: &str) -> Result<f64, ViewError> {
    if table.is_empty() {
        return Err(ViewError::EmptyDataset);
    }

    table
        .max_count()
        .map(|max| max.floor().max(0.0))
        .ok_or_else(|| ViewError::NoNumericValues(count_column.to_string()))
}

/// Rows whose count is at least `threshold`. Missing counts never pass.
pub fn filter_by_threshold(table: &GroceryTable, threshold: f64) -> Vec<&GroceryRow> {
    table
        .rows
        .iter()
        .filter(|r| r.count.is_some_and(|c| c >= threshold))
        .collect()
}

pub fn line_chart(rows: &[&GroceryRow], item_column: &str, count_column: &str) -> ChartData {
    let points = rows
        .iter()
        .map(|r| ChartPoint::new(r.name.clone(), r.count))
        .collect();

    ChartData::new(
        "threshold-line".to_string(),
        format!("{} by {}", count_column, item_column),
        ChartKind::Line,
        item_column.to_string(),
        count_column.to_string(),
        points,
    )
}

/// Keep only the selections that are still offered, in option order.
pub fn restrict_selection(selected: &[String], options: &[String]) -> Vec<String> {
    options
        .iter()
        .filter(|o| selected.contains(o))
        .cloned()
        .collect()
}

pub fn filter_by_selection<'a>(
    dataset: &'a ChartDataset,
    selected: &[String],
) -> Vec<&'a DataPoint> {
    dataset
        .points
        .iter()
        .filter(|p| selected.contains(&p.item))
        .collect()
}

pub fn scatter_chart(title: &str, points: &[&DataPoint]) -> ChartData {
    let points = points
        .iter()
        .map(|p| ChartPoint::new(p.item.clone(), p.value))
        .collect();

    ChartData::new(
        "selection-scatter".to_string(),
        title.to_string(),
        ChartKind::Scatter,
        "item".to_string(),
        "value".to_string(),
        points,
    )
}
