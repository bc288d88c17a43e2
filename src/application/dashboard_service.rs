// Dashboard service - Use case for building the visualizations page
use crate::application::data_source::DataSource;
use crate::application::error::{DataError, Loaded, ViewError};
use crate::application::views::{
    bar_chart, filter_by_selection, filter_by_threshold, line_chart, restrict_selection,
    scatter_chart, threshold_bound,
};
use crate::domain::chart::ChartDataset;
use crate::domain::dashboard::{ChartSection, Dashboard, Notice, Table, TableCell, Widget};
use crate::domain::grocery::GroceryTable;
use crate::domain::session::SessionState;
use std::sync::Arc;

const PAGE_TITLE: &str = "Data Visualizations 📈";
const PAGE_INTRO: &str = "This page displays graphs based on the collected data.";

pub const STATIC_SECTION: &str = "grocery-statistics";
pub const THRESHOLD_SECTION: &str = "interactive-line";
pub const SELECTION_SECTION: &str = "dynamic-scatter";

pub const THRESHOLD_WIDGET: &str = "fewest_items";
pub const SELECTION_WIDGET: &str = "chosen_items";

const SLIDER_LABEL: &str =
    "Use this slider to select the minimum number of items to display in the graph:";

const CSV_UNUSABLE: &str = "Sorry. Your CSV file either doesn't exist or is empty.";
const JSON_UNUSABLE: &str = "Sorry. Your JSON file either doesn't exist or is empty.";

/// Widget values sent with a request. `None` keeps the retained value.
#[derive(Debug, Clone, Default)]
pub struct WidgetInput {
    pub min_count: Option<f64>,
    pub items: Option<Vec<String>>,
}

#[derive(Clone)]
pub struct DashboardService {
    source: Arc<dyn DataSource>,
}

impl DashboardService {
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        Self { source }
    }

    /// Load both sources and render every section, updating the session's widget state.
    pub async fn get_dashboard(
        &self,
        session: &mut SessionState,
        input: &WidgetInput,
    ) -> Dashboard {
        let (item_column, count_column) = self.source.grocery_columns();
        let mut notices = Vec::new();

        let groceries = match self.source.load_groceries().await {
            Ok(Loaded::Available(table)) => {
                notices.push(Notice::success("CSV data loaded successfully."));
                table
            }
            Ok(unavailable) => {
                tracing::info!("CSV source unavailable: {:?}", unavailable);
                notices.push(Notice::info("Your CSV file was not found."));
                unavailable.unwrap_or_empty()
            }
            Err(e) => {
                log_data_error(&e);
                notices.push(Notice::warning(format!("Your CSV file could not be read: {}", e)));
                GroceryTable::default()
            }
        };

        let dataset = match self.source.load_chart_dataset().await {
            Ok(Loaded::Available(dataset)) => {
                notices.push(Notice::success("JSON data loaded successfully."));
                dataset
            }
            Ok(unavailable) => {
                tracing::info!("JSON source unavailable: {:?}", unavailable);
                notices.push(Notice::info("Your JSON file was not found."));
                unavailable.unwrap_or_empty()
            }
            Err(e) => {
                log_data_error(&e);
                notices.push(Notice::warning(format!("Your JSON file could not be read: {}", e)));
                ChartDataset::default()
            }
        };

        let tables = vec![
            grocery_table(&groceries, &item_column, &count_column),
            dataset_table(&dataset),
        ];

        let sections = vec![
            self.static_section(&dataset),
            self.threshold_section(&groceries, session, input, &item_column, &count_column),
            self.selection_section(&dataset, session, input),
        ];

        Dashboard::new(
            PAGE_TITLE.to_string(),
            PAGE_INTRO.to_string(),
            notices,
            tables,
            sections,
        )
    }

    fn static_section(&self, dataset: &ChartDataset) -> ChartSection {
        let section = ChartSection::new(
            STATIC_SECTION,
            "🛒Grocery Statistics",
            "The bar graph shown above graphs the type of item on the x-axis to the number of \
             that item in the y-axis. The data shown here is from the JSON file.",
        );

        match bar_chart(dataset) {
            Ok(chart) => section.with_chart(chart),
            Err(e) => section.with_notice(section_warning(JSON_UNUSABLE, &e)),
        }
    }

    fn threshold_section(
        &self,
        groceries: &GroceryTable,
        session: &mut SessionState,
        input: &WidgetInput,
        item_column: &str,
        count_column: &str,
    ) -> ChartSection {
        let section = ChartSection::new(
            THRESHOLD_SECTION,
            "Interactive Line Graph👨‍💻",
            "This interactive chart graphs a line that connects the name of each grocery item \
             to their quantity. By using the slider to select a number, you can filter out \
             items that have a quantity fewer than the minimum threshold number. The data \
             shown here is from the CSV file.",
        );

        let max = match threshold_bound(groceries, count_column) {
            Ok(max) => max,
            Err(e) => return section.with_notice(section_warning(CSV_UNUSABLE, &e)),
        };

        if let Some(requested) = input.min_count.filter(|v| v.is_finite()) {
            session.min_count = requested;
        }
        session.min_count = session.min_count.clamp(0.0, max);

        let rows = filter_by_threshold(groceries, session.min_count);
        tracing::debug!(
            "Threshold {} keeps {} of {} rows",
            session.min_count,
            rows.len(),
            groceries.rows.len()
        );

        section
            .with_widget(Widget::Slider {
                id: THRESHOLD_WIDGET.to_string(),
                label: SLIDER_LABEL.to_string(),
                min: 0.0,
                max,
                value: session.min_count,
            })
            .with_chart(line_chart(&rows, item_column, count_column))
    }

    fn selection_section(
        &self,
        dataset: &ChartDataset,
        session: &mut SessionState,
        input: &WidgetInput,
    ) -> ChartSection {
        let section = ChartSection::new(
            SELECTION_SECTION,
            "Dynamic Scatterplot🎯",
            "This is a scatterplot graph connecting the name of each grocery item to their \
             respective quantities. The multi-select box allows you to choose which items you \
             want displayed in the scatterplot. All grocery items in the JSON file are selected \
             by default, so just remove the ones that you don't want displayed. The data shown \
             here is from the JSON file.",
        );

        if dataset.is_empty() {
            return section.with_notice(section_warning(JSON_UNUSABLE, &ViewError::EmptyDataset));
        }

        let options = dataset.item_names();
        if let Some(items) = &input.items {
            session.selected_items = Some(items.clone());
        }
        let selected = restrict_selection(session.selection_or_init(&options), &options);
        session.selected_items = Some(selected.clone());

        let points = filter_by_selection(dataset, &selected);

        section
            .with_widget(Widget::MultiSelect {
                id: SELECTION_WIDGET.to_string(),
                label: "Select which grocery items you want the graph to display:".to_string(),
                options,
                selected,
            })
            .with_chart(scatter_chart(&dataset.title, &points))
    }
}

fn log_data_error(e: &DataError) {
    match e {
        DataError::Invalid { .. } => tracing::warn!("{}", e),
        DataError::Io { source, .. } => tracing::error!("{}: {}", e, source),
    }
}

fn section_warning(base: &str, e: &ViewError) -> Notice {
    tracing::warn!("Chart omitted: {}", e);
    Notice::warning(format!("{} ({})", base, e))
}

fn grocery_table(groceries: &GroceryTable, item_column: &str, count_column: &str) -> Table {
    let rows = groceries
        .rows
        .iter()
        .map(|r| vec![TableCell::Text(r.name.clone()), TableCell::Number(r.count)])
        .collect();

    Table::new(
        "data.csv".to_string(),
        vec![item_column.to_string(), count_column.to_string()],
        rows,
    )
}

fn dataset_table(dataset: &ChartDataset) -> Table {
    let rows = dataset
        .points
        .iter()
        .map(|p| vec![TableCell::Text(p.item.clone()), TableCell::Number(p.value)])
        .collect();

    Table::new(
        dataset.title.clone(),
        vec!["item".to_string(), "value".to_string()],
        rows,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::{ChartKind, DataPoint};
    use crate::domain::dashboard::NoticeLevel;
    use crate::domain::grocery::GroceryRow;
    use async_trait::async_trait;
    use std::path::PathBuf;

    #[derive(Default)]
    struct FakeSource {
        groceries: Option<GroceryTable>,
        dataset: Option<ChartDataset>,
        invalid_json: bool,
    }

    #[async_trait]
    impl DataSource for FakeSource {
        async fn load_groceries(&self) -> Result<Loaded<GroceryTable>, DataError> {
            Ok(match &self.groceries {
                Some(table) => Loaded::Available(table.clone()),
                None => Loaded::Unavailable {
                    path: PathBuf::from("data.csv"),
                },
            })
        }

        async fn load_chart_dataset(&self) -> Result<Loaded<ChartDataset>, DataError> {
            if self.invalid_json {
                return Err(DataError::invalid("data.json", "expected value at line 1"));
            }
            Ok(match &self.dataset {
                Some(dataset) => Loaded::Available(dataset.clone()),
                None => Loaded::Unavailable {
                    path: PathBuf::from("data.json"),
                },
            })
        }

        fn grocery_columns(&self) -> (String, String) {
            ("Grocery Item".to_string(), "Number of Items".to_string())
        }
    }

    fn groceries() -> GroceryTable {
        GroceryTable::new(vec![
            GroceryRow::new("Apples".to_string(), Some(5.0)),
            GroceryRow::new("Milk".to_string(), Some(9.0)),
            GroceryRow::new("Rice".to_string(), None),
        ])
    }

    fn dataset() -> ChartDataset {
        ChartDataset::new(
            "Groceries Data".to_string(),
            vec![
                DataPoint::new("Apples".to_string(), Some(5.0)),
                DataPoint::new("Bacon".to_string(), Some(2.0)),
                DataPoint::new("Milk".to_string(), Some(9.0)),
            ],
        )
    }

    fn service(source: FakeSource) -> DashboardService {
        DashboardService::new(Arc::new(source))
    }

    fn chart_labels(dashboard: &Dashboard, section: &str) -> Vec<String> {
        dashboard
            .section(section)
            .and_then(|s| s.chart.as_ref())
            .map(|c| c.points.iter().map(|p| p.label.clone()).collect())
            .unwrap_or_default()
    }

    #[tokio::test]
    async fn test_full_dashboard_with_defaults() {
        let service = service(FakeSource {
            groceries: Some(groceries()),
            dataset: Some(dataset()),
            ..Default::default()
        });
        let mut session = SessionState::new();

        let dashboard = service.get_dashboard(&mut session, &WidgetInput::default()).await;

        assert_eq!(dashboard.sections.len(), 3);
        assert!(dashboard.notices.iter().all(|n| n.level == NoticeLevel::Success));
        assert_eq!(dashboard.tables[0].rows.len(), 3);

        let bar = dashboard.section(STATIC_SECTION).unwrap().chart.as_ref().unwrap();
        assert_eq!(bar.kind, ChartKind::Bar);
        assert_eq!(bar.title, "Groceries Data");

        assert_eq!(chart_labels(&dashboard, THRESHOLD_SECTION), vec!["Apples", "Milk"]);
        assert_eq!(
            chart_labels(&dashboard, SELECTION_SECTION),
            vec!["Apples", "Bacon", "Milk"]
        );
        assert_eq!(
            session.selected_items,
            Some(vec!["Apples".to_string(), "Bacon".to_string(), "Milk".to_string()])
        );
    }

    #[tokio::test]
    async fn test_threshold_is_clamped_and_retained() {
        let service = service(FakeSource {
            groceries: Some(groceries()),
            dataset: Some(dataset()),
            ..Default::default()
        });
        let mut session = SessionState::new();

        let input = WidgetInput {
            min_count: Some(50.0),
            ..Default::default()
        };
        let dashboard = service.get_dashboard(&mut session, &input).await;
        assert_eq!(session.min_count, 9.0);
        assert_eq!(chart_labels(&dashboard, THRESHOLD_SECTION), vec!["Milk"]);

        match &dashboard.section(THRESHOLD_SECTION).unwrap().widget {
            Some(Widget::Slider { min, max, value, .. }) => {
                assert_eq!((*min, *max, *value), (0.0, 9.0, 9.0));
            }
            other => panic!("unexpected widget: {:?}", other),
        }

        // The retained value applies when the next request carries none
        let dashboard = service.get_dashboard(&mut session, &WidgetInput::default()).await;
        assert_eq!(chart_labels(&dashboard, THRESHOLD_SECTION), vec!["Milk"]);
    }

    #[tokio::test]
    async fn test_deselecting_one_item() {
        let service = service(FakeSource {
            groceries: Some(groceries()),
            dataset: Some(dataset()),
            ..Default::default()
        });
        let mut session = SessionState::new();
        service.get_dashboard(&mut session, &WidgetInput::default()).await;

        let input = WidgetInput {
            items: Some(vec!["Apples".to_string(), "Milk".to_string()]),
            ..Default::default()
        };
        let dashboard = service.get_dashboard(&mut session, &input).await;

        assert_eq!(chart_labels(&dashboard, SELECTION_SECTION), vec!["Apples", "Milk"]);
        // The static chart is unaffected by the selection
        assert_eq!(
            chart_labels(&dashboard, STATIC_SECTION),
            vec!["Apples", "Bacon", "Milk"]
        );
    }

    #[tokio::test]
    async fn test_missing_sources_are_informational() {
        let service = service(FakeSource::default());
        let mut session = SessionState::new();

        let dashboard = service.get_dashboard(&mut session, &WidgetInput::default()).await;

        assert_eq!(dashboard.notices.len(), 2);
        assert!(dashboard.notices.iter().all(|n| n.level == NoticeLevel::Info));
        for section in &dashboard.sections {
            assert!(section.chart.is_none());
            assert_eq!(section.notice.as_ref().unwrap().level, NoticeLevel::Warning);
        }
        assert_eq!(session.selected_items, None);
    }

    #[tokio::test]
    async fn test_section_failures_are_isolated() {
        let service = service(FakeSource {
            groceries: Some(groceries()),
            invalid_json: true,
            ..Default::default()
        });
        let mut session = SessionState::new();

        let dashboard = service.get_dashboard(&mut session, &WidgetInput::default()).await;

        assert_eq!(dashboard.notices[1].level, NoticeLevel::Warning);
        assert!(dashboard.section(STATIC_SECTION).unwrap().chart.is_none());
        assert!(dashboard.section(SELECTION_SECTION).unwrap().chart.is_none());
        assert!(dashboard.section(THRESHOLD_SECTION).unwrap().chart.is_some());
    }
}
