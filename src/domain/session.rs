// Retained widget state for one dashboard session

#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub min_count: f64,
    /// `None` until the selection widget has been shown once
    pub selected_items: Option<Vec<String>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            min_count: 0.0,
            selected_items: None,
        }
    }

    /// Returns the retained selection, initializing it to every option on first access.
    pub fn selection_or_init(&mut self, options: &[String]) -> &[String] {
        self.selected_items.get_or_insert_with(|| options.to_vec())
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
