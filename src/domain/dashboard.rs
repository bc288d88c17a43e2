// Dashboard domain model
use super::chart::ChartData;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TableCell {
    Text(String),
    Number(Option<f64>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<TableCell>>,
}

impl Table {
    pub fn new(name: String, columns: Vec<String>, rows: Vec<Vec<TableCell>>) -> Self {
        Self {
            name,
            columns,
            rows,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Widget {
    Slider {
        id: String,
        label: String,
        min: f64,
        max: f64,
        value: f64,
    },
    MultiSelect {
        id: String,
        label: String,
        options: Vec<String>,
        selected: Vec<String>,
    },
}

/// One heading on the page. Holds a chart, or a notice explaining why there is none.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSection {
    pub id: String,
    pub heading: String,
    pub description: String,
    pub widget: Option<Widget>,
    pub chart: Option<ChartData>,
    pub notice: Option<Notice>,
}

impl ChartSection {
    pub fn new(id: &str, heading: &str, description: &str) -> Self {
        Self {
            id: id.to_string(),
            heading: heading.to_string(),
            description: description.to_string(),
            widget: None,
            chart: None,
            notice: None,
        }
    }

    pub fn with_widget(mut self, widget: Widget) -> Self {
        self.widget = Some(widget);
        self
    }

    pub fn with_chart(mut self, chart: ChartData) -> Self {
        self.chart = Some(chart);
        self
    }

    pub fn with_notice(mut self, notice: Notice) -> Self {
        self.notice = Some(notice);
        self
    }
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    pub title: String,
    pub intro: String,
    pub notices: Vec<Notice>,
    pub tables: Vec<Table>,
    pub sections: Vec<ChartSection>,
}

impl Dashboard {
    pub fn new(
        title: String,
        intro: String,
        notices: Vec<Notice>,
        tables: Vec<Table>,
        sections: Vec<ChartSection>,
    ) -> Self {
        Self {
            title,
            intro,
            notices,
            tables,
            sections,
        }
    }

    #[cfg(test)]
    pub fn section(&self, id: &str) -> Option<&ChartSection> {
        self.sections.iter().find(|s| s.id == id)
    }
}
