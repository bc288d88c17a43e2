// Chart domain models: the JSON dataset and the render requests built from it

pub const DEFAULT_CHART_TITLE: &str = "JSON Data Bar Chart";

#[derive(Debug, Clone, PartialEq)]
pub struct DataPoint {
    pub item: String,
    pub value: Option<f64>,
}

impl DataPoint {
    pub fn new(item: String, value: Option<f64>) -> Self {
        Self { item, value }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartDataset {
    pub title: String,
    pub points: Vec<DataPoint>,
}

impl ChartDataset {
    pub fn new(title: String, points: Vec<DataPoint>) -> Self {
        Self { title, points }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Distinct item names in first-seen order
    pub fn item_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::with_capacity(self.points.len());
        for point in &self.points {
            if !names.contains(&point.item) {
                names.push(point.item.clone());
            }
        }
        names
    }
}

impl Default for ChartDataset {
    fn default() -> Self {
        Self::new(DEFAULT_CHART_TITLE.to_string(), Vec::new())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChartKind {
    Bar,
    Line,
    Scatter,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub value: Option<f64>,
}

impl ChartPoint {
    pub fn new(label: String, value: Option<f64>) -> Self {
        Self { label, value }
    }
}

/// A request for the client to draw one chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    pub id: String,
    pub title: String,
    pub kind: ChartKind,
    pub x_label: String,
    pub y_label: String,
    pub points: Vec<ChartPoint>,
}

impl ChartData {
    pub fn new(
        id: String,
        title: String,
        kind: ChartKind,
        x_label: String,
        y_label: String,
        points: Vec<ChartPoint>,
    ) -> Self {
        Self {
            id,
            title,
            kind,
            x_label,
            y_label,
            points,
        }
    }
}
