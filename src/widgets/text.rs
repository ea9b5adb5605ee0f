use crate::model::{TextAlign, Widget, WidgetConfig, WidgetPatch};
use crate::widgets::WidgetRenderer;
use eframe::egui;

#[derive(Default)]
pub struct TextRenderer;

impl WidgetRenderer for TextRenderer {
    fn render(&mut self, ui: &mut egui::Ui, widget: &Widget) -> Option<WidgetPatch> {
        let WidgetConfig::Text(cfg) = &widget.config else {
            return None;
        };

        let mut rich = egui::RichText::new(cfg.content.as_str()).size(parse_px(&cfg.font_size));
        if let Some(color) = cfg.color.as_deref().and_then(parse_color) {
            rich = rich.color(color);
        }
        let align = match cfg.text_align {
            TextAlign::Left => egui::Align::Min,
            TextAlign::Center => egui::Align::Center,
            TextAlign::Right => egui::Align::Max,
        };
        ui.with_layout(egui::Layout::top_down(align), |ui| {
            ui.label(rich);
        });
        None
    }
}

/// "16px" style sizes; anything unparseable falls back to 14.
fn parse_px(value: &str) -> f32 {
    value
        .trim()
        .trim_end_matches("px")
        .trim()
        .parse()
        .unwrap_or(14.0)
}

/// Best-effort CSS color subset: `#rrggbb` hex only. Anything else inherits
/// the theme color.
fn parse_color(value: &str) -> Option<egui::Color32> {
    let hex = value.trim().strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(egui::Color32::from_rgb(r, g, b))
}
