use criterion::{criterion_group, criterion_main, Criterion};
use grid_dashboard::catalog;
use grid_dashboard::{DashboardState, DashboardStore, WidgetPatch, WidgetType};

fn big_board(n: usize) -> DashboardStore {
    let mut store = DashboardStore::with_state(DashboardState::empty());
    for i in 0..n {
        let mut widget = catalog::new_widget(WidgetType::Metric, "Metric").unwrap();
        widget.id = format!("widget-{i}");
        store.add_widget(widget, None);
    }
    store
}

fn bench_store(c: &mut Criterion) {
    let mut store = big_board(10_000);
    c.bench_function("update_widget_10k", |b| {
        b.iter(|| store.update_widget("widget-9999", WidgetPatch::title("tick")))
    });
    c.bench_function("reorder_10k", |b| {
        b.iter(|| {
            store.reorder_widgets(0, 9_999).unwrap();
            store.reorder_widgets(9_999, 0).unwrap();
        })
    });
    c.bench_function("snapshot_10k", |b| b.iter(|| store.snapshot()));
}

criterion_group!(benches, bench_store);
criterion_main!(benches);
