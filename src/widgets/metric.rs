use crate::model::{MetricConfig, MetricFormat, MetricValue, Widget, WidgetConfig, WidgetPatch};
use crate::widgets::WidgetRenderer;
use eframe::egui;

#[derive(Default)]
pub struct MetricRenderer;

impl WidgetRenderer for MetricRenderer {
    fn render(&mut self, ui: &mut egui::Ui, widget: &Widget) -> Option<WidgetPatch> {
        let WidgetConfig::Metric(cfg) = &widget.config else {
            return None;
        };

        ui.vertical_centered(|ui| {
            ui.add_space(8.0);
            ui.label(
                egui::RichText::new(format_value(&cfg.value, cfg.format))
                    .size(28.0)
                    .strong(),
            );
            ui.weak(&cfg.label);
            if let Some(trend) = cfg.trend {
                let (marker, color) = trend_marker(trend, ui.visuals().weak_text_color());
                ui.label(
                    egui::RichText::new(format!("{marker} {}%", trend.abs()))
                        .small()
                        .color(color),
                );
            }
        });
        None
    }
}

fn trend_marker(trend: f64, neutral: egui::Color32) -> (&'static str, egui::Color32) {
    if trend > 0.0 {
        ("^", egui::Color32::from_rgb(0x22, 0xc5, 0x5e))
    } else if trend < 0.0 {
        ("v", egui::Color32::from_rgb(0xef, 0x44, 0x44))
    } else {
        ("-", neutral)
    }
}

/// Free-text values pass through untouched; numeric values honour the
/// configured format.
fn format_value(value: &MetricValue, format: MetricFormat) -> String {
    match value {
        MetricValue::Text(text) => text.clone(),
        MetricValue::Number(number) => match format {
            MetricFormat::Number => group_thousands(*number, 0),
            MetricFormat::Currency => format!("${}", group_thousands(*number, 2)),
            MetricFormat::Percentage => format!("{number}%"),
        },
    }
}

fn group_thousands(value: f64, decimals: usize) -> String {
    let negative = value < 0.0;
    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer, fraction) = match formatted.split_once('.') {
        Some((i, f)) => (i.to_string(), Some(f.to_string())),
        None => (formatted, None),
    };

    let mut grouped = String::new();
    for (count, ch) in integer.chars().rev().enumerate() {
        if count > 0 && count % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let mut out: String = grouped.chars().rev().collect();
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(&fraction);
    }
    if negative {
        format!("-{out}")
    } else {
        out
    }
}
