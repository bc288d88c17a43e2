// Mapper to convert domain models to serializable JSON views
use crate::domain::chart::{ChartData, ChartKind};
use crate::domain::dashboard::{
    ChartSection, Dashboard, Notice, NoticeLevel, Table, TableCell, Widget,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DashboardView {
    pub title: String,
    pub intro: String,
    pub notices: Vec<NoticeView>,
    pub tables: Vec<TableView>,
    pub sections: Vec<SectionView>,
}

#[derive(Debug, Serialize)]
pub struct NoticeView {
    pub level: &'static str,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct TableView {
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<serde_json::Value>>,
}

#[derive(Debug, Serialize)]
pub struct SectionView {
    pub id: String,
    pub heading: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub widget: Option<WidgetView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart: Option<ChartView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<NoticeView>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WidgetView {
    Slider {
        id: String,
        label: String,
        min: f64,
        max: f64,
        value: f64,
    },
    Multiselect {
        id: String,
        label: String,
        options: Vec<String>,
        selected: Vec<String>,
    },
}

#[derive(Debug, Serialize)]
pub struct ChartView {
    pub id: String,
    pub title: String,
    pub kind: &'static str,
    pub x: String,
    pub y: String,
    pub points: Vec<PointView>,
}

#[derive(Debug, Serialize)]
pub struct PointView {
    pub label: String,
    pub value: Option<f64>,
}

pub fn dashboard_to_view(dashboard: Dashboard) -> DashboardView {
    DashboardView {
        title: dashboard.title,
        intro: dashboard.intro,
        notices: dashboard.notices.into_iter().map(notice_to_view).collect(),
        tables: dashboard.tables.into_iter().map(table_to_view).collect(),
        sections: dashboard.sections.into_iter().map(section_to_view).collect(),
    }
}

fn notice_to_view(notice: Notice) -> NoticeView {
    let level = match notice.level {
        NoticeLevel::Success => "success",
        NoticeLevel::Info => "info",
        NoticeLevel::Warning => "warning",
    };

    NoticeView {
        level,
        message: notice.message,
    }
}

fn table_to_view(table: Table) -> TableView {
    let rows = table
        .rows
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|cell| match cell {
                    TableCell::Text(text) => serde_json::Value::String(text),
                    // Missing numbers serialize as null
                    TableCell::Number(n) => serde_json::json!(n),
                })
                .collect()
        })
        .collect();

    TableView {
        name: table.name,
        columns: table.columns,
        rows,
    }
}

fn section_to_view(section: ChartSection) -> SectionView {
    SectionView {
        id: section.id,
        heading: section.heading,
        description: section.description,
        widget: section.widget.map(widget_to_view),
        chart: section.chart.map(chart_to_view),
        notice: section.notice.map(notice_to_view),
    }
}

fn widget_to_view(widget: Widget) -> WidgetView {
    match widget {
        Widget::Slider {
            id,
            label,
            min,
            max,
            value,
        } => WidgetView::Slider {
            id,
            label,
            min,
            max,
            value,
        },
        Widget::MultiSelect {
            id,
            label,
            options,
            selected,
        } => WidgetView::Multiselect {
            id,
            label,
            options,
            selected,
        },
    }
}

fn chart_to_view(chart: ChartData) -> ChartView {
    let kind = match chart.kind {
        ChartKind::Bar => "bar",
        ChartKind::Line => "line",
        ChartKind::Scatter => "scatter",
    };

    ChartView {
        id: chart.id,
        title: chart.title,
        kind,
        x: chart.x_label,
        y: chart.y_label,
        points: chart
            .points
            .into_iter()
            .map(|p| PointView {
                label: p.label,
                value: p.value,
            })
            .collect(),
    }
}
