use crate::model::{TableConfig, Widget, WidgetConfig, WidgetPatch};
use crate::widgets::WidgetRenderer;
use eframe::egui;
use std::collections::HashMap;

/// Sort/filter view state is presentation-local: it lives here keyed by
/// widget id, never in the dashboard state.
#[derive(Default)]
struct TableView {
    sort_column: Option<usize>,
    sort_desc: bool,
    filter: String,
}

#[derive(Default)]
pub struct TableRenderer {
    views: HashMap<String, TableView>,
}

impl WidgetRenderer for TableRenderer {
    fn render(&mut self, ui: &mut egui::Ui, widget: &Widget) -> Option<WidgetPatch> {
        let WidgetConfig::Table(cfg) = &widget.config else {
            return None;
        };
        let view = self.views.entry(widget.id.clone()).or_default();

        if cfg.filterable {
            ui.add(
                egui::TextEdit::singleline(&mut view.filter)
                    .hint_text("Filter table...")
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(4.0);
        }

        let rows = visible_rows(cfg, view);
        egui::Grid::new(("table", &widget.id))
            .striped(true)
            .min_col_width(48.0)
            .show(ui, |ui| {
                for (index, column) in cfg.columns.iter().enumerate() {
                    if cfg.sortable {
                        let marker = match view.sort_column {
                            Some(current) if current == index && view.sort_desc => "v",
                            Some(current) if current == index => "^",
                            _ => "-",
                        };
                        let clicked = ui
                            .add(
                                egui::Button::new(
                                    egui::RichText::new(format!("{column} {marker}")).strong(),
                                )
                                .frame(false),
                            )
                            .clicked();
                        if clicked {
                            if view.sort_column == Some(index) {
                                view.sort_desc = !view.sort_desc;
                            } else {
                                view.sort_column = Some(index);
                                view.sort_desc = false;
                            }
                        }
                    } else {
                        ui.add(
                            egui::Label::new(egui::RichText::new(column.as_str()).strong())
                                .wrap(false),
                        );
                    }
                }
                ui.end_row();

                for row in rows {
                    for index in 0..cfg.columns.len() {
                        let cell = row.get(index).map(String::as_str).unwrap_or("");
                        ui.add(egui::Label::new(cell).truncate(true));
                    }
                    ui.end_row();
                }
            });
        None
    }
}

fn visible_rows<'a>(cfg: &'a TableConfig, view: &TableView) -> Vec<&'a Vec<String>> {
    let needle = view.filter.to_lowercase();
    let mut rows: Vec<&Vec<String>> = cfg
        .data
        .iter()
        .filter(|row| {
            needle.is_empty() || row.iter().any(|cell| cell.to_lowercase().contains(&needle))
        })
        .collect();
    if let Some(column) = view.sort_column {
        rows.sort_by(|a, b| {
            let left = a.get(column).map(String::as_str).unwrap_or("");
            let right = b.get(column).map(String::as_str).unwrap_or("");
            left.cmp(right)
        });
        if view.sort_desc {
            rows.reverse();
        }
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> TableConfig {
        TableConfig {
            columns: vec!["Name".into(), "Status".into()],
            data: vec![
                vec!["bravo".into(), "Pending".into()],
                vec!["alpha".into(), "Done".into()],
                vec!["charlie".into(), "Done".into()],
            ],
            sortable: true,
            filterable: true,
        }
    }

    #[test]
    fn filter_matches_any_cell_case_insensitively() {
        let cfg = config();
        let view = TableView {
            filter: "DONE".into(),
            ..TableView::default()
        };
        let rows = visible_rows(&cfg, &view);
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn sort_orders_by_column_and_direction() {
        let cfg = config();
        let mut view = TableView {
            sort_column: Some(0),
            ..TableView::default()
        };
        let rows = visible_rows(&cfg, &view);
        assert_eq!(rows[0][0], "alpha");
        assert_eq!(rows[2][0], "charlie");

        view.sort_desc = true;
        let rows = visible_rows(&cfg, &view);
        assert_eq!(rows[0][0], "charlie");
    }

    #[test]
    fn ragged_rows_render_as_blank_cells() {
        let mut cfg = config();
        cfg.data.push(vec!["short".into()]);
        let view = TableView {
            sort_column: Some(1),
            ..TableView::default()
        };
        // Missing cells sort as empty strings and must not panic.
        let rows = visible_rows(&cfg, &view);
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0][0], "short");
    }

    #[test]
    fn renders_inside_test_ui() {
        let mut renderer = TableRenderer::default();
        let widget = Widget {
            id: "t".into(),
            kind: crate::model::WidgetType::Table,
            title: "Orders".into(),
            config: WidgetConfig::Table(config()),
            position: crate::model::Position::ORIGIN,
            size: crate::model::Size::new(8, 4),
        };
        egui::__run_test_ui(|ui| {
            assert!(renderer.render(ui, &widget).is_none());
        });
    }
}
