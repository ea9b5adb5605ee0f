use crate::model::{Widget, WidgetPatch, WidgetType};
use eframe::egui;
use std::collections::HashMap;

mod chart;
mod metric;
mod table;
mod text;

pub use chart::ChartRenderer;
pub use metric::MetricRenderer;
pub use table::TableRenderer;
pub use text::TextRenderer;

/// One render strategy per widget kind. Renderers read the widget's config
/// and paint it; an edit made inside the widget body comes back as a
/// [`WidgetPatch`] for the host to route into the store. Renderers never
/// touch the store themselves.
pub trait WidgetRenderer: Send {
    fn render(&mut self, ui: &mut egui::Ui, widget: &Widget) -> Option<WidgetPatch>;
}

/// Kind-keyed renderer lookup. A kind with no registered renderer paints a
/// placeholder instead of failing, so one unrenderable widget never takes
/// down the board.
#[derive(Default)]
pub struct RendererRegistry {
    map: HashMap<WidgetType, Box<dyn WidgetRenderer>>,
}

impl RendererRegistry {
    pub fn with_defaults() -> Self {
        let mut registry = Self::default();
        registry.register(WidgetType::Chart, Box::new(ChartRenderer::default()));
        registry.register(WidgetType::Table, Box::new(TableRenderer::default()));
        registry.register(WidgetType::Text, Box::new(TextRenderer::default()));
        registry.register(WidgetType::Metric, Box::new(MetricRenderer::default()));
        registry
    }

    pub fn register(&mut self, kind: WidgetType, renderer: Box<dyn WidgetRenderer>) {
        self.map.insert(kind, renderer);
    }

    pub fn contains(&self, kind: WidgetType) -> bool {
        self.map.contains_key(&kind)
    }

    /// Render one widget body, recovering locally from anything malformed:
    /// a config whose variant contradicts the declared kind, or a kind
    /// nobody registered a renderer for.
    pub fn render(&mut self, ui: &mut egui::Ui, widget: &Widget) -> Option<WidgetPatch> {
        if !widget.config_matches_kind() {
            tracing::warn!(
                id = %widget.id,
                kind = %widget.kind,
                config = %widget.config.kind(),
                "widget config does not match its kind"
            );
            ui.colored_label(ui.visuals().error_fg_color, "Error loading widget");
            return None;
        }
        match self.map.get_mut(&widget.kind) {
            Some(renderer) => renderer.render(ui, widget),
            None => {
                ui.weak(format!("Unknown widget type: {}", widget.kind));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::model::{MetricConfig, WidgetConfig};
    use once_cell::sync::Lazy;
    use std::sync::Mutex;

    static RENDERED: Lazy<Mutex<Vec<String>>> = Lazy::new(|| Mutex::new(Vec::new()));

    struct RecordingRenderer;

    impl WidgetRenderer for RecordingRenderer {
        fn render(&mut self, _ui: &mut egui::Ui, widget: &Widget) -> Option<WidgetPatch> {
            RENDERED.lock().unwrap().push(widget.id.clone());
            Some(WidgetPatch::title("edited"))
        }
    }

    #[test]
    fn default_registry_covers_every_kind() {
        let registry = RendererRegistry::with_defaults();
        for kind in WidgetType::ALL {
            assert!(registry.contains(kind));
        }
    }

    #[test]
    fn registered_renderer_is_invoked_and_patch_bubbles_up() {
        RENDERED.lock().unwrap().clear();
        let mut registry = RendererRegistry::default();
        registry.register(WidgetType::Text, Box::new(RecordingRenderer));
        let widget = catalog::new_widget(WidgetType::Text, "Note").unwrap();

        let mut patch = None;
        egui::__run_test_ui(|ui| {
            patch = registry.render(ui, &widget);
        });

        assert_eq!(*RENDERED.lock().unwrap(), vec![widget.id.clone()]);
        assert_eq!(patch, Some(WidgetPatch::title("edited")));
    }

    #[test]
    fn unregistered_kind_falls_back_without_rendering() {
        RENDERED.lock().unwrap().clear();
        let mut registry = RendererRegistry::default();
        let widget = catalog::new_widget(WidgetType::Chart, "Orphan").unwrap();

        let mut patch = Some(WidgetPatch::default());
        egui::__run_test_ui(|ui| {
            patch = registry.render(ui, &widget);
        });

        assert!(patch.is_none());
        assert!(RENDERED.lock().unwrap().is_empty());
    }

    #[test]
    fn mismatched_config_never_reaches_the_renderer() {
        RENDERED.lock().unwrap().clear();
        let mut registry = RendererRegistry::default();
        registry.register(WidgetType::Text, Box::new(RecordingRenderer));

        let mut widget = catalog::new_widget(WidgetType::Text, "Broken").unwrap();
        widget.config = WidgetConfig::Metric(MetricConfig::default());

        let mut patch = Some(WidgetPatch::default());
        egui::__run_test_ui(|ui| {
            patch = registry.render(ui, &widget);
        });

        assert!(patch.is_none());
        assert!(RENDERED.lock().unwrap().is_empty());
    }
}
