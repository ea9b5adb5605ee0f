use crate::model::WidgetPatch;
use crate::responsive::{self, Viewport};
use crate::store::DashboardStore;
use crate::widgets::RendererRegistry;
use eframe::egui;

/// Deferred store mutation collected while the grid is being painted, so a
/// single frame never observes a half-applied state.
enum SurfaceIntent {
    Select(Option<String>),
    Remove(String),
    Patch(String, WidgetPatch),
}

/// Composes a dashboard snapshot into an egui grid: responsive spans,
/// card chrome per widget, and the edit-mode affordances (select on click,
/// remove button). Renderer patches are routed back into the store.
pub struct DashboardSurface {
    renderers: RendererRegistry,
    viewport: Viewport,
}

impl Default for DashboardSurface {
    fn default() -> Self {
        Self::new(RendererRegistry::with_defaults())
    }
}

impl DashboardSurface {
    pub fn new(renderers: RendererRegistry) -> Self {
        Self {
            renderers,
            viewport: Viewport::default(),
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, store: &mut DashboardStore) {
        let avail = ui.available_size();
        self.viewport.resize(avail.x, avail.y);

        let cells = self.layout_cells(store, avail.x);
        let total_height = cells
            .iter()
            .map(|cell| cell.rect.bottom())
            .fold(0.0, f32::max);
        let (outer, _) = ui.allocate_exact_size(
            egui::vec2(avail.x, total_height.max(0.0)),
            egui::Sense::hover(),
        );

        let mut intents = Vec::new();
        let state = store.state();
        let is_editing = state.is_editing;
        let selected = state.selected_widget.clone();
        for cell in &cells {
            let widget = &state.widgets[cell.index];
            let rect = cell.rect.translate(outer.min.to_vec2());
            let is_selected = selected.as_deref() == Some(widget.id.as_str());
            let renderers = &mut self.renderers;
            ui.allocate_ui_at_rect(rect, |cell_ui| {
                cell_ui.set_min_size(rect.size());
                let mut frame = egui::Frame::group(cell_ui.style());
                if is_selected {
                    frame = frame.stroke(egui::Stroke::new(
                        2.0,
                        cell_ui.visuals().selection.stroke.color,
                    ));
                }
                frame.show(cell_ui, |cell_ui| {
                    cell_ui.vertical(|cell_ui| {
                        header_row(cell_ui, widget, is_editing, is_selected, &mut intents);
                        if let Some(patch) = renderers.render(cell_ui, widget) {
                            intents.push(SurfaceIntent::Patch(widget.id.clone(), patch));
                        }
                    });
                });
            });
        }

        for intent in intents {
            match intent {
                SurfaceIntent::Select(id) => store.select_widget(id),
                SurfaceIntent::Remove(id) => store.remove_widget(&id),
                SurfaceIntent::Patch(id, patch) => store.update_widget(&id, patch),
            }
        }
    }

    /// Pure flow pass: widgets go left to right, wrapping at the responsive
    /// column count; each cell is span columns wide and row-span rows tall.
    fn layout_cells(&self, store: &DashboardStore, width: f32) -> Vec<Cell> {
        let state = store.state();
        let cols = self.viewport.grid_columns().max(1);
        let (margin_x, margin_y) = state.layout.margin;
        let (margin_x, margin_y) = (margin_x as f32, margin_y as f32);
        let col_width = width / cols as f32;
        let row_height = state.layout.row_height as f32;

        let mut cells = Vec::with_capacity(state.widgets.len());
        let mut col = 0u32;
        let mut y = 0.0f32;
        let mut row_depth = 0u32;
        for (index, widget) in state.widgets.iter().enumerate() {
            let span = self.viewport.widget_span(widget.size.width).min(cols);
            let rows = responsive::row_span(widget.size.height);
            if col + span > cols {
                y += row_depth as f32 * row_height + margin_y;
                col = 0;
                row_depth = 0;
            }
            let rect = egui::Rect::from_min_size(
                egui::pos2(col as f32 * col_width, y),
                egui::vec2(
                    (col_width * span as f32 - margin_x).max(1.0),
                    rows as f32 * row_height,
                ),
            );
            cells.push(Cell { index, rect });
            col += span;
            row_depth = row_depth.max(rows);
        }
        cells
    }
}

fn header_row(
    ui: &mut egui::Ui,
    widget: &crate::model::Widget,
    is_editing: bool,
    is_selected: bool,
    intents: &mut Vec<SurfaceIntent>,
) {
    ui.horizontal(|ui| {
        let title = ui.add(
            egui::Label::new(egui::RichText::new(widget.title.as_str()).strong())
                .truncate(true)
                .sense(egui::Sense::click()),
        );
        if is_editing && title.clicked() {
            let next = if is_selected {
                None
            } else {
                Some(widget.id.clone())
            };
            intents.push(SurfaceIntent::Select(next));
        }
        if is_editing {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.small_button("x").clicked() {
                    intents.push(SurfaceIntent::Remove(widget.id.clone()));
                }
            });
        }
    });
}

struct Cell {
    index: usize,
    rect: egui::Rect,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Widget, WidgetType};
    use crate::widgets::WidgetRenderer;
    use once_cell::sync::Lazy;
    use std::sync::Mutex;

    static BODIES: Lazy<Mutex<Vec<String>>> = Lazy::new(|| Mutex::new(Vec::new()));

    struct RecordingRenderer {
        patch: Option<WidgetPatch>,
    }

    impl WidgetRenderer for RecordingRenderer {
        fn render(&mut self, _ui: &mut egui::Ui, widget: &Widget) -> Option<WidgetPatch> {
            BODIES.lock().unwrap().push(widget.id.clone());
            self.patch.clone()
        }
    }

    fn run_surface(surface: &mut DashboardSurface, store: &mut DashboardStore) {
        egui::__run_test_ui(|ui| {
            let rect = egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(1024.0, 768.0));
            ui.allocate_ui_at_rect(rect, |ui| {
                surface.ui(ui, store);
            });
        });
    }

    #[test]
    fn default_board_renders_without_mutating_state() {
        let mut surface = DashboardSurface::default();
        let mut store = DashboardStore::new();
        let before = store.snapshot();
        run_surface(&mut surface, &mut store);
        assert_eq!(store.snapshot(), before);
    }

    #[test]
    fn renderer_patches_are_routed_into_the_store() {
        BODIES.lock().unwrap().clear();
        let mut registry = RendererRegistry::default();
        registry.register(
            WidgetType::Chart,
            Box::new(RecordingRenderer {
                patch: Some(WidgetPatch::title("Patched")),
            }),
        );
        registry.register(
            WidgetType::Table,
            Box::new(RecordingRenderer { patch: None }),
        );
        registry.register(WidgetType::Text, Box::new(RecordingRenderer { patch: None }));

        let mut surface = DashboardSurface::new(registry);
        let mut store = DashboardStore::new();
        run_surface(&mut surface, &mut store);

        assert_eq!(
            *BODIES.lock().unwrap(),
            vec!["widget-1", "widget-2", "widget-3"]
        );
        assert_eq!(store.state().widget("widget-1").unwrap().title, "Patched");
    }

    #[test]
    fn cells_wrap_at_the_responsive_column_count() {
        let mut surface = DashboardSurface::default();
        // Twelve columns at 1400: the two 6-wide widgets share the first
        // row and the 12-wide text wraps below them.
        surface.viewport.resize(1400.0, 800.0);
        let store = DashboardStore::new();
        let cells = surface.layout_cells(&store, 1400.0);
        assert_eq!(cells.len(), 3);
        assert_eq!(cells[0].rect.top(), cells[1].rect.top());
        assert!(cells[2].rect.top() > cells[1].rect.top());
    }

    #[test]
    fn narrow_viewport_stacks_everything_in_one_column() {
        let mut surface = DashboardSurface::default();
        surface.viewport.resize(500.0, 700.0);
        let store = DashboardStore::new();
        let cells = surface.layout_cells(&store, 500.0);
        let mut last_top = -1.0;
        for cell in &cells {
            assert!(cell.rect.top() > last_top);
            last_top = cell.rect.top();
        }
    }
}
