// Grocery domain model (rows loaded from the CSV source)

#[derive(Debug, Clone, PartialEq)]
pub struct GroceryRow {
    pub name: String,
    /// `None` when the source value could not be read as a number
    pub count: Option<f64>,
}

impl GroceryRow {
    pub fn new(name: String, count: Option<f64>) -> Self {
        Self { name, count }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroceryTable {
    pub rows: Vec<GroceryRow>,
}

impl GroceryTable {
    pub fn new(rows: Vec<GroceryRow>) -> Self {
        Self { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Largest numeric count, ignoring missing values
    pub fn max_count(&self) -> Option<f64> {
        self.rows
            .iter()
            .filter_map(|r| r.count)
            .fold(None, |acc, c| match acc {
                Some(m) if m >= c => Some(m),
                _ => Some(c),
            })
    }
}
