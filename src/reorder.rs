use crate::store::DashboardStore;

/// End state of a drag gesture over the widget grid. Gesture tracking lives
/// upstream; the core only sees where the drag started and where it ended.
/// `destination` is `None` when the drag was cancelled (dropped outside any
/// valid target).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragEnd {
    pub source: usize,
    pub destination: Option<usize>,
}

impl DragEnd {
    pub fn new(source: usize, destination: usize) -> Self {
        Self {
            source,
            destination: Some(destination),
        }
    }

    pub fn cancelled(source: usize) -> Self {
        Self {
            source,
            destination: None,
        }
    }
}

/// Translate a finished drag into a reorder against the store. Cancelled
/// drags are a no-op, and so are drags arriving outside edit mode: the UI
/// gate is upstream, but callers that bypass it are guarded here too.
/// Returns whether the widget order changed.
pub fn apply_drag(store: &mut DashboardStore, end: DragEnd) -> anyhow::Result<bool> {
    let Some(destination) = end.destination else {
        tracing::debug!(source = end.source, "drag cancelled, nothing to reorder");
        return Ok(false);
    };
    if !store.state().is_editing {
        tracing::debug!(
            source = end.source,
            destination,
            "ignoring drag outside edit mode"
        );
        return Ok(false);
    }
    store.reorder_widgets(end.source, destination)?;
    Ok(end.source != destination)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(store: &DashboardStore) -> Vec<String> {
        store.state().widgets.iter().map(|w| w.id.clone()).collect()
    }

    #[test]
    fn cancelled_drag_is_a_no_op() {
        let mut store = DashboardStore::new();
        store.set_editing(true);
        let before = ids(&store);
        assert!(!apply_drag(&mut store, DragEnd::cancelled(0)).unwrap());
        assert_eq!(ids(&store), before);
    }

    #[test]
    fn drag_outside_edit_mode_is_ignored() {
        let mut store = DashboardStore::new();
        let before = ids(&store);
        assert!(!apply_drag(&mut store, DragEnd::new(0, 2)).unwrap());
        assert_eq!(ids(&store), before);
    }

    #[test]
    fn drag_reorders_in_edit_mode() {
        let mut store = DashboardStore::new();
        store.set_editing(true);
        assert!(apply_drag(&mut store, DragEnd::new(0, 2)).unwrap());
        assert_eq!(ids(&store), ["widget-2", "widget-3", "widget-1"]);
    }

    #[test]
    fn drag_onto_itself_reports_no_change() {
        let mut store = DashboardStore::new();
        store.set_editing(true);
        let before = ids(&store);
        assert!(!apply_drag(&mut store, DragEnd::new(1, 1)).unwrap());
        assert_eq!(ids(&store), before);
    }

    #[test]
    fn out_of_range_drag_surfaces_the_error() {
        let mut store = DashboardStore::new();
        store.set_editing(true);
        assert!(apply_drag(&mut store, DragEnd::new(0, 9)).is_err());
    }
}
