use grid_dashboard::responsive::{grid_columns, row_span, widget_span, Breakpoint, Viewport};

#[test]
fn documented_column_ladder() {
    for (width, expected) in [
        (320.0, 1),
        (640.0, 2),
        (768.0, 4),
        (1024.0, 6),
        (1280.0, 12),
        (1920.0, 12),
    ] {
        assert_eq!(grid_columns(width), expected, "at width {width}");
    }
}

#[test]
fn span_is_clamped_below_the_smallest_breakpoint() {
    assert_eq!(widget_span(8, 500.0), 1);
    assert_eq!(widget_span(12, 200.0), 1);
}

#[test]
fn span_honours_declared_width_on_wide_viewports() {
    assert_eq!(widget_span(8, 1300.0), 8);
    assert_eq!(widget_span(3, 1300.0), 3);
    assert_eq!(widget_span(20, 1300.0), 12);
}

#[test]
fn columns_never_decrease_as_the_viewport_grows() {
    let mut previous = 0;
    for width in 0..2000 {
        let columns = grid_columns(width as f32);
        assert!(columns >= previous);
        previous = columns;
    }
}

#[test]
fn viewport_tracks_resizes() {
    let mut viewport = Viewport::default();
    assert_eq!(viewport.grid_columns(), 6);

    viewport.resize(1300.0, 900.0);
    assert_eq!(viewport.grid_columns(), 12);
    assert!(viewport.at_least(Breakpoint::Xl));
    assert!(viewport.is_desktop());

    viewport.resize(600.0, 400.0);
    assert_eq!(viewport.grid_columns(), 1);
    assert!(viewport.is_mobile());
    assert_eq!(viewport.widget_span(12), 1);
}

#[test]
fn row_span_is_one_grid_row_per_two_height_units() {
    assert_eq!(row_span(2), 1);
    assert_eq!(row_span(4), 2);
    assert_eq!(row_span(5), 3);
    assert_eq!(row_span(0), 1);
}
