// The fixed grocery record written by the `generate` command

#[derive(Debug, Clone, PartialEq)]
pub struct GroceryRecord {
    pub title: String,
    pub entries: Vec<(String, u32)>,
}

impl GroceryRecord {
    pub fn fixed() -> Self {
        let entries = [
            ("Apples", 5),
            ("Bacon", 2),
            ("Milk", 9),
            ("Pringles", 1),
            ("Bread", 4),
            ("Rice", 8),
            ("Steaks", 10),
            ("Tide Pods", 7),
        ]
        .into_iter()
        .map(|(item, value)| (item.to_string(), value))
        .collect();

        Self {
            title: "Groceries Data".to_string(),
            entries,
        }
    }
}
