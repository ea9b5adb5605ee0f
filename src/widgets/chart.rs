use crate::model::{ChartKind, ChartPoint, Widget, WidgetConfig, WidgetPatch};
use crate::widgets::WidgetRenderer;
use eframe::egui;

const PALETTE: [egui::Color32; 6] = [
    egui::Color32::from_rgb(0x4e, 0x79, 0xa7),
    egui::Color32::from_rgb(0xf2, 0x8e, 0x2b),
    egui::Color32::from_rgb(0x76, 0xb7, 0xb2),
    egui::Color32::from_rgb(0x59, 0xa1, 0x4f),
    egui::Color32::from_rgb(0xe1, 0x57, 0x59),
    egui::Color32::from_rgb(0xed, 0xc9, 0x49),
];

/// Paints the chart payload with plain painter primitives; the mark shape
/// follows `chart_type`.
#[derive(Default)]
pub struct ChartRenderer;

impl WidgetRenderer for ChartRenderer {
    fn render(&mut self, ui: &mut egui::Ui, widget: &Widget) -> Option<WidgetPatch> {
        let WidgetConfig::Chart(cfg) = &widget.config else {
            return None;
        };
        if cfg.data.is_empty() {
            ui.weak("No data");
            return None;
        }

        let desired = egui::vec2(
            ui.available_width().max(40.0),
            ui.available_height().max(60.0),
        );
        let (response, painter) = ui.allocate_painter(desired, egui::Sense::hover());
        let rect = response.rect.shrink(6.0);

        match cfg.chart_type {
            ChartKind::Bar => draw_bars(&painter, rect, &cfg.data),
            ChartKind::Line => draw_series(&painter, rect, &cfg.data, false),
            ChartKind::Area => draw_series(&painter, rect, &cfg.data, true),
            ChartKind::Pie => draw_pie(&painter, rect, &cfg.data),
        }
        None
    }
}

fn scale_max(data: &[ChartPoint]) -> f64 {
    let max = data.iter().map(|p| p.value).fold(0.0, f64::max);
    if max > 0.0 {
        max
    } else {
        1.0
    }
}

fn draw_bars(painter: &egui::Painter, rect: egui::Rect, data: &[ChartPoint]) {
    let max = scale_max(data);
    let slot = rect.width() / data.len() as f32;
    let bar_width = (slot * 0.8).max(1.0);
    for (i, point) in data.iter().enumerate() {
        let height = ((point.value.max(0.0) / max) as f32) * rect.height();
        let x = rect.left() + slot * i as f32 + (slot - bar_width) / 2.0;
        let bar = egui::Rect::from_min_max(
            egui::pos2(x, rect.bottom() - height),
            egui::pos2(x + bar_width, rect.bottom()),
        );
        painter.rect_filled(bar, 2.0, PALETTE[i % PALETTE.len()]);
    }
}

fn draw_series(painter: &egui::Painter, rect: egui::Rect, data: &[ChartPoint], filled: bool) {
    let max = scale_max(data);
    let color = PALETTE[0];
    let step = if data.len() > 1 {
        rect.width() / (data.len() - 1) as f32
    } else {
        0.0
    };
    let point_at = |i: usize| {
        let value = data[i].value.max(0.0);
        egui::pos2(
            rect.left() + step * i as f32,
            rect.bottom() - ((value / max) as f32) * rect.height(),
        )
    };

    if filled {
        let fill = egui::Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), 60);
        for i in 1..data.len() {
            let a = point_at(i - 1);
            let b = point_at(i);
            painter.add(egui::Shape::convex_polygon(
                vec![
                    a,
                    b,
                    egui::pos2(b.x, rect.bottom()),
                    egui::pos2(a.x, rect.bottom()),
                ],
                fill,
                egui::Stroke::NONE,
            ));
        }
    }
    for i in 1..data.len() {
        painter.line_segment([point_at(i - 1), point_at(i)], egui::Stroke::new(2.0, color));
    }
    for i in 0..data.len() {
        painter.circle_filled(point_at(i), 3.0, color);
    }
}

fn draw_pie(painter: &egui::Painter, rect: egui::Rect, data: &[ChartPoint]) {
    let total: f64 = data.iter().map(|p| p.value.max(0.0)).sum();
    if total <= 0.0 {
        return;
    }
    let center = rect.center();
    let radius = rect.width().min(rect.height()) / 2.0;
    let mut angle = -std::f32::consts::FRAC_PI_2;
    for (i, point) in data.iter().enumerate() {
        let sweep = ((point.value.max(0.0) / total) as f32) * std::f32::consts::TAU;
        if sweep <= 0.0 {
            continue;
        }
        let mut points = vec![center];
        let steps = ((sweep / 0.15).ceil() as usize).max(2);
        for step in 0..=steps {
            let a = angle + sweep * step as f32 / steps as f32;
            points.push(egui::pos2(
                center.x + radius * a.cos(),
                center.y + radius * a.sin(),
            ));
        }
        painter.add(egui::Shape::convex_polygon(
            points,
            PALETTE[i % PALETTE.len()],
            egui::Stroke::NONE,
        ));
        angle += sweep;
    }
}
