use serde::{Deserialize, Serialize};

fn default_columns() -> u32 {
    12
}

fn default_row_height() -> u32 {
    60
}

fn default_margin() -> (u32, u32) {
    (10, 10)
}

fn default_font_size() -> String {
    "14px".to_string()
}

/// The closed set of widget kinds the dashboard knows how to host.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum WidgetType {
    Chart,
    Table,
    Text,
    Metric,
}

impl WidgetType {
    pub const ALL: [WidgetType; 4] = [
        WidgetType::Chart,
        WidgetType::Table,
        WidgetType::Text,
        WidgetType::Metric,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WidgetType::Chart => "chart",
            WidgetType::Table => "table",
            WidgetType::Text => "text",
            WidgetType::Metric => "metric",
        }
    }

    /// Parse a lowercase type name. Unknown names are reported as `None`
    /// rather than an error so lookups at the string boundary stay total.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "chart" => Some(WidgetType::Chart),
            "table" => Some(WidgetType::Table),
            "text" => Some(WidgetType::Text),
            "metric" => Some(WidgetType::Metric),
            _ => None,
        }
    }
}

impl std::fmt::Display for WidgetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Advisory placement hint in grid units. Not used for collision avoidance.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Declared footprint in grid column/row units.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Bar,
    Pie,
    Area,
}

impl Default for ChartKind {
    fn default() -> Self {
        ChartKind::Line
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChartPoint {
    pub name: String,
    pub value: f64,
}

impl ChartPoint {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ChartConfig {
    #[serde(default)]
    pub chart_type: ChartKind,
    #[serde(default)]
    pub data: Vec<ChartPoint>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TableConfig {
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub data: Vec<Vec<String>>,
    #[serde(default)]
    pub sortable: bool,
    #[serde(default)]
    pub filterable: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl Default for TextAlign {
    fn default() -> Self {
        TextAlign::Left
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TextConfig {
    #[serde(default)]
    pub content: String,
    /// CSS-style size such as "14px".
    #[serde(default = "default_font_size")]
    pub font_size: String,
    #[serde(default)]
    pub text_align: TextAlign,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            content: String::new(),
            font_size: default_font_size(),
            text_align: TextAlign::default(),
            color: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MetricFormat {
    Number,
    Currency,
    Percentage,
}

impl Default for MetricFormat {
    fn default() -> Self {
        MetricFormat::Number
    }
}

/// A metric value is either numeric or free text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum MetricValue {
    Number(f64),
    Text(String),
}

impl Default for MetricValue {
    fn default() -> Self {
        MetricValue::Number(0.0)
    }
}

impl From<f64> for MetricValue {
    fn from(value: f64) -> Self {
        MetricValue::Number(value)
    }
}

impl From<&str> for MetricValue {
    fn from(value: &str) -> Self {
        MetricValue::Text(value.to_string())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MetricConfig {
    #[serde(default)]
    pub value: MetricValue,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub format: MetricFormat,
    /// Signed percentage change, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trend: Option<f64>,
}

/// Type-dependent configuration payload. The variant is the widget's kind;
/// a widget whose config variant disagrees with its declared kind is
/// malformed and is rejected at the patch boundary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum WidgetConfig {
    Chart(ChartConfig),
    Table(TableConfig),
    Text(TextConfig),
    Metric(MetricConfig),
}

impl WidgetConfig {
    pub fn kind(&self) -> WidgetType {
        match self {
            WidgetConfig::Chart(_) => WidgetType::Chart,
            WidgetConfig::Table(_) => WidgetType::Table,
            WidgetConfig::Text(_) => WidgetType::Text,
            WidgetConfig::Metric(_) => WidgetType::Metric,
        }
    }
}

/// A single placeable, configurable unit on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Widget {
    /// Stable for the widget's lifetime; never reused after removal.
    pub id: String,
    /// Immutable after creation. Patches carry no kind field.
    #[serde(rename = "type")]
    pub kind: WidgetType,
    pub title: String,
    pub config: WidgetConfig,
    #[serde(default)]
    pub position: Position,
    pub size: Size,
}

impl Widget {
    pub fn config_matches_kind(&self) -> bool {
        self.config.kind() == self.kind
    }

    /// Shallow-merge a patch: present fields replace the corresponding field
    /// wholesale, absent fields are untouched. A config payload whose variant
    /// does not match the widget's kind is dropped so config and kind cannot
    /// desynchronise.
    pub fn apply(&mut self, patch: WidgetPatch) {
        let WidgetPatch {
            title,
            config,
            position,
            size,
        } = patch;
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(config) = config {
            if config.kind() == self.kind {
                self.config = config;
            } else {
                tracing::warn!(
                    id = %self.id,
                    expected = %self.kind,
                    got = %config.kind(),
                    "dropping config patch with mismatched kind"
                );
            }
        }
        if let Some(position) = position {
            self.position = position;
        }
        if let Some(size) = size {
            self.size = size;
        }
    }
}

/// Partial update for a widget. Nested structures are replaced wholesale,
/// never merged field-by-field; callers that want to keep untouched config
/// keys pass an already-merged config value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WidgetPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<WidgetConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
}

impl WidgetPatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn config(config: WidgetConfig) -> Self {
        Self {
            config: Some(config),
            ..Self::default()
        }
    }

    pub fn size(size: Size) -> Self {
        Self {
            size: Some(size),
            ..Self::default()
        }
    }
}

/// Global grid parameters, independent of the viewport-responsive column
/// count computed in [`crate::responsive`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardLayout {
    #[serde(default = "default_columns")]
    pub columns: u32,
    #[serde(default = "default_row_height")]
    pub row_height: u32,
    #[serde(default = "default_margin")]
    pub margin: (u32, u32),
}

impl Default for DashboardLayout {
    fn default() -> Self {
        Self {
            columns: default_columns(),
            row_height: default_row_height(),
            margin: default_margin(),
        }
    }
}

impl DashboardLayout {
    pub fn apply(&mut self, patch: LayoutPatch) {
        let LayoutPatch {
            columns,
            row_height,
            margin,
        } = patch;
        if let Some(columns) = columns {
            self.columns = columns;
        }
        if let Some(row_height) = row_height {
            self.row_height = row_height;
        }
        if let Some(margin) = margin {
            self.margin = margin;
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LayoutPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub columns: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin: Option<(u32, u32)>,
}

/// The aggregate dashboard state. Owned exclusively by
/// [`crate::store::DashboardStore`]; everything else sees snapshots.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardState {
    /// Order is meaningful: it is both the tab order and the reorder domain.
    #[serde(default)]
    pub widgets: Vec<Widget>,
    #[serde(default)]
    pub layout: DashboardLayout,
    /// Id of at most one widget present in `widgets`, or `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_widget: Option<String>,
    /// Gates reorder/delete/configure affordances.
    #[serde(default)]
    pub is_editing: bool,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            widgets: vec![
                Widget {
                    id: "widget-1".into(),
                    kind: WidgetType::Chart,
                    title: "Sales Overview".into(),
                    config: WidgetConfig::Chart(ChartConfig {
                        chart_type: ChartKind::Line,
                        data: vec![
                            ChartPoint::new("Jan", 400.0),
                            ChartPoint::new("Feb", 300.0),
                            ChartPoint::new("Mar", 600.0),
                            ChartPoint::new("Apr", 800.0),
                            ChartPoint::new("May", 500.0),
                        ],
                    }),
                    position: Position::new(0, 0),
                    size: Size::new(6, 4),
                },
                Widget {
                    id: "widget-2".into(),
                    kind: WidgetType::Table,
                    title: "Recent Orders".into(),
                    config: WidgetConfig::Table(TableConfig {
                        columns: vec![
                            "Order ID".into(),
                            "Customer".into(),
                            "Amount".into(),
                            "Status".into(),
                        ],
                        data: vec![
                            vec![
                                "#001".into(),
                                "John Doe".into(),
                                "$299".into(),
                                "Completed".into(),
                            ],
                            vec![
                                "#002".into(),
                                "Jane Smith".into(),
                                "$199".into(),
                                "Pending".into(),
                            ],
                            vec![
                                "#003".into(),
                                "Bob Johnson".into(),
                                "$399".into(),
                                "Shipped".into(),
                            ],
                        ],
                        sortable: false,
                        filterable: false,
                    }),
                    position: Position::new(6, 0),
                    size: Size::new(6, 4),
                },
                Widget {
                    id: "widget-3".into(),
                    kind: WidgetType::Text,
                    title: "Welcome Message".into(),
                    config: WidgetConfig::Text(TextConfig {
                        content: "Welcome to your dashboard! This is a customizable text widget."
                            .into(),
                        font_size: "16px".into(),
                        text_align: TextAlign::Left,
                        color: None,
                    }),
                    position: Position::new(0, 4),
                    size: Size::new(12, 2),
                },
            ],
            layout: DashboardLayout::default(),
            selected_widget: None,
            is_editing: false,
        }
    }
}

impl DashboardState {
    /// An empty board with default layout, for callers that hydrate their
    /// own content via `load_dashboard`.
    pub fn empty() -> Self {
        Self {
            widgets: Vec::new(),
            layout: DashboardLayout::default(),
            selected_widget: None,
            is_editing: false,
        }
    }

    pub fn widget(&self, id: &str) -> Option<&Widget> {
        self.widgets.iter().find(|w| w.id == id)
    }
}

/// Partial dashboard state for bulk replacement. `selected_widget` is doubly
/// optional so hydration can distinguish "clear the selection"
/// (`Some(None)`) from "leave it alone" (`None`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub widgets: Option<Vec<Widget>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<DashboardLayout>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_widget: Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_editing: Option<bool>,
}

impl From<DashboardState> for DashboardPatch {
    fn from(state: DashboardState) -> Self {
        Self {
            widgets: Some(state.widgets),
            layout: Some(state.layout),
            selected_widget: Some(state.selected_widget),
            is_editing: Some(state.is_editing),
        }
    }
}
