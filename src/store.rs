use crate::model::{DashboardPatch, DashboardState, LayoutPatch, Position, Widget, WidgetPatch};
use std::sync::Arc;

/// Callback invoked with the new snapshot after every mutation.
pub type Observer = Arc<dyn Fn(&DashboardState) + Send + Sync>;

/// The state container for one dashboard session. Owns the
/// [`DashboardState`] exclusively; every other component either reads a
/// snapshot or goes through the operations below. All operations are
/// synchronous and leave the state consistent; a host sharing one store
/// across threads serializes access with its own lock.
pub struct DashboardStore {
    state: DashboardState,
    observers: Vec<Observer>,
}

impl Default for DashboardStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardStore {
    /// Store seeded with the documented starter board.
    pub fn new() -> Self {
        Self::with_state(DashboardState::default())
    }

    pub fn with_state(state: DashboardState) -> Self {
        Self {
            state,
            observers: Vec::new(),
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn snapshot(&self) -> DashboardState {
        self.state.clone()
    }

    pub fn subscribe(&mut self, observer: Observer) {
        self.observers.push(observer);
    }

    fn notify(&self) {
        for observer in &self.observers {
            observer(&self.state);
        }
    }

    /// Append a widget. An explicitly supplied position overrides the
    /// widget's own; otherwise the widget keeps what it carries. The store
    /// does not validate the widget: fresh unique ids and non-empty titles
    /// are the caller's contract (see [`crate::catalog::new_widget`]).
    pub fn add_widget(&mut self, mut widget: Widget, position: Option<Position>) {
        if let Some(position) = position {
            widget.position = position;
        }
        if self.state.widgets.iter().any(|w| w.id == widget.id) {
            tracing::warn!(id = %widget.id, "adding widget with a duplicate id");
        }
        self.state.widgets.push(widget);
        self.notify();
    }

    /// Remove the widget with the given id, clearing the selection in the
    /// same update when it pointed at that widget. Absent ids are a no-op.
    pub fn remove_widget(&mut self, id: &str) {
        let before = self.state.widgets.len();
        self.state.widgets.retain(|w| w.id != id);
        if self.state.widgets.len() == before {
            tracing::debug!(%id, "remove requested for an absent widget");
        }
        if self.state.selected_widget.as_deref() == Some(id) {
            self.state.selected_widget = None;
        }
        self.notify();
    }

    /// Shallow-merge a patch onto the matching widget. Absent ids are a
    /// no-op. This is the single mutation path for title, config, position
    /// and size edits alike.
    pub fn update_widget(&mut self, id: &str, patch: WidgetPatch) {
        match self.state.widgets.iter_mut().find(|w| w.id == id) {
            Some(widget) => widget.apply(patch),
            None => tracing::debug!(%id, "update requested for an absent widget"),
        }
        self.notify();
    }

    /// Move the widget at `source` so it ends up at `destination`, with
    /// remove-then-insert splice semantics: the destination indexes the
    /// shortened sequence. Out-of-range indices are a precondition violation
    /// and fail before anything is touched.
    pub fn reorder_widgets(&mut self, source: usize, destination: usize) -> anyhow::Result<()> {
        let len = self.state.widgets.len();
        anyhow::ensure!(
            source < len && destination < len,
            "reorder out of range: source {source}, destination {destination}, {len} widgets"
        );
        let moved = self.state.widgets.remove(source);
        self.state.widgets.insert(destination, moved);
        self.notify();
        Ok(())
    }

    pub fn update_layout(&mut self, patch: LayoutPatch) {
        self.state.layout.apply(patch);
        self.notify();
    }

    /// Unconditional set; the id is not checked against `widgets`. A
    /// dangling selection is tolerated transiently; `remove_widget` clears
    /// it before it can persist.
    pub fn select_widget(&mut self, id: Option<String>) {
        self.state.selected_widget = id;
        self.notify();
    }

    /// Does not cascade into the selection.
    pub fn set_editing(&mut self, editing: bool) {
        self.state.is_editing = editing;
        self.notify();
    }

    /// Bulk replacement: every present patch field replaces the
    /// corresponding state field wholesale. Internal consistency of the
    /// result (e.g. a selection pointing into the new widget list) is the
    /// caller's responsibility.
    pub fn load_dashboard(&mut self, patch: DashboardPatch) {
        let DashboardPatch {
            widgets,
            layout,
            selected_widget,
            is_editing,
        } = patch;
        if let Some(widgets) = widgets {
            self.state.widgets = widgets;
        }
        if let Some(layout) = layout {
            self.state.layout = layout;
        }
        if let Some(selected_widget) = selected_widget {
            self.state.selected_widget = selected_widget;
        }
        if let Some(is_editing) = is_editing {
            self.state.is_editing = is_editing;
        }
        self.notify();
    }

    /// "Save Layout" stub: no backing store exists, so this serialises the
    /// snapshot and hands it back to the caller.
    pub fn save_layout(&self) -> anyhow::Result<String> {
        let json = serde_json::to_string_pretty(&self.state)?;
        tracing::info!(
            widgets = self.state.widgets.len(),
            "save layout requested; no backing store configured"
        );
        Ok(json)
    }
}
