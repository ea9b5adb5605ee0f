use crate::model::{
    ChartConfig, ChartKind, ChartPoint, MetricConfig, MetricFormat, MetricValue, Position, Size,
    TableConfig, TextAlign, TextConfig, Widget, WidgetConfig, WidgetType,
};
use std::sync::atomic::{AtomicI64, Ordering};

/// Footprint used when a type name cannot be resolved.
pub const FALLBACK_SIZE: Size = Size {
    width: 4,
    height: 3,
};

/// Starter configuration for a freshly added widget of the given kind.
pub fn default_config(kind: WidgetType) -> WidgetConfig {
    match kind {
        WidgetType::Chart => WidgetConfig::Chart(ChartConfig {
            chart_type: ChartKind::Line,
            data: vec![
                ChartPoint::new("A", 100.0),
                ChartPoint::new("B", 200.0),
                ChartPoint::new("C", 150.0),
            ],
        }),
        WidgetType::Table => WidgetConfig::Table(TableConfig {
            columns: vec!["Column 1".into(), "Column 2".into(), "Column 3".into()],
            data: vec![
                vec!["Row 1".into(), "Data 1".into(), "Value 1".into()],
                vec!["Row 2".into(), "Data 2".into(), "Value 2".into()],
            ],
            sortable: true,
            filterable: true,
        }),
        WidgetType::Text => WidgetConfig::Text(TextConfig {
            content: "Enter your text content here...".into(),
            font_size: "14px".into(),
            text_align: TextAlign::Left,
            color: None,
        }),
        WidgetType::Metric => WidgetConfig::Metric(MetricConfig {
            value: MetricValue::Number(0.0),
            label: "Metric Label".into(),
            format: MetricFormat::Number,
            trend: None,
        }),
    }
}

/// Default grid footprint for the given kind.
pub fn default_size(kind: WidgetType) -> Size {
    match kind {
        WidgetType::Chart => Size::new(6, 4),
        WidgetType::Table => Size::new(8, 4),
        WidgetType::Text => Size::new(6, 2),
        WidgetType::Metric => Size::new(3, 2),
    }
}

/// Name-keyed size lookup for callers holding a raw type string. Unknown
/// names get [`FALLBACK_SIZE`] so creation never aborts on a bad name.
pub fn default_size_named(name: &str) -> Size {
    WidgetType::from_name(name)
        .map(default_size)
        .unwrap_or(FALLBACK_SIZE)
}

/// Name-keyed config lookup. Unknown names resolve to `None`; there is no
/// neutral payload once configs are tagged by kind.
pub fn default_config_named(name: &str) -> Option<WidgetConfig> {
    WidgetType::from_name(name).map(default_config)
}

static LAST_ID_MILLIS: AtomicI64 = AtomicI64::new(0);

/// Time-derived widget id, strictly monotonic within the process so widgets
/// added in the same millisecond still get distinct ids.
pub fn generate_widget_id() -> String {
    let now = chrono::Utc::now().timestamp_millis();
    let prev = LAST_ID_MILLIS
        .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
            Some(last.max(now - 1) + 1)
        })
        .unwrap_or(now);
    let unique = prev.max(now - 1) + 1;
    format!("widget-{unique}")
}

/// Build a complete widget for the add flow: fresh id, catalog defaults,
/// origin position. The non-empty-title rule lives here, not in the store.
pub fn new_widget(kind: WidgetType, title: &str) -> anyhow::Result<Widget> {
    let title = title.trim();
    anyhow::ensure!(!title.is_empty(), "widget title must not be empty");
    Ok(Widget {
        id: generate_widget_id(),
        kind,
        title: title.to_string(),
        config: default_config(kind),
        position: Position::ORIGIN,
        size: default_size(kind),
    })
}
