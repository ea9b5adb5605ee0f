pub mod catalog;
pub mod logging;
pub mod model;
pub mod reorder;
pub mod responsive;
pub mod store;
pub mod surface;
pub mod widgets;

pub use model::{
    DashboardLayout, DashboardPatch, DashboardState, LayoutPatch, Position, Size, Widget,
    WidgetConfig, WidgetPatch, WidgetType,
};
pub use reorder::{apply_drag, DragEnd};
pub use store::DashboardStore;
pub use surface::DashboardSurface;
