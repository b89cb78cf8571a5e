//! Widget store: the ordered widget list and the current selection.
//!
//! The store is owned by the UI thread and mutated through `&mut`
//! access only. Components never touch the list directly; they request
//! changes through [`WidgetActions`].

use crate::error::{WidgetError, WidgetResult};
use crate::widget::{WidgetId, WidgetKind, WidgetNode};
use std::collections::HashSet;
use std::fmt;

/// Mutations a list item may request from the store.
///
/// Both operations are fire-and-forget and tolerate ids that are not
/// (or no longer) in the list.
pub trait WidgetActions {
    /// Make `id` the single selected widget.
    fn set_selected_id(&mut self, id: &WidgetId);

    /// Remove the widget with `id` from the list.
    fn remove_widget(&mut self, id: &WidgetId);
}

/// Change notifications emitted after each effective mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    SelectionChanged { selected: Option<WidgetId> },
    WidgetAdded { id: WidgetId, index: usize },
    WidgetRemoved { id: WidgetId, index: usize },
    WidgetMoved { id: WidgetId, from: usize, to: usize },
    WidgetsReplaced { count: usize },
}

/// Handle returned by [`WidgetStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&StoreEvent)>;

/// Holds the ordered widget list and the selected widget id.
#[derive(Default)]
pub struct WidgetStore {
    /// Widgets in document order.
    widgets: Vec<WidgetNode>,
    /// Currently selected widget, if any.
    selected_id: Option<WidgetId>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl fmt::Debug for WidgetStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WidgetStore")
            .field("widgets", &self.widgets)
            .field("selected_id", &self.selected_id)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl WidgetStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store from a list, rejecting duplicate ids.
    pub fn with_widgets(widgets: Vec<WidgetNode>) -> WidgetResult<Self> {
        let mut store = Self::new();
        store.replace_widgets(widgets)?;
        Ok(store)
    }

    /// Widgets in document order.
    pub fn widgets(&self) -> &[WidgetNode] {
        &self.widgets
    }

    pub fn get(&self, id: &WidgetId) -> Option<&WidgetNode> {
        self.widgets.iter().find(|w| &w.id == id)
    }

    /// Position of a widget in the list.
    pub fn index_of(&self, id: &WidgetId) -> Option<usize> {
        self.widgets.iter().position(|w| &w.id == id)
    }

    pub fn selected_id(&self) -> Option<&WidgetId> {
        self.selected_id.as_ref()
    }

    /// The selected widget, if the selected id is in the list.
    pub fn selected(&self) -> Option<&WidgetNode> {
        self.selected_id.as_ref().and_then(|id| self.get(id))
    }

    pub fn is_selected(&self, id: &WidgetId) -> bool {
        self.selected_id.as_ref() == Some(id)
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    /// Clear the selection.
    pub fn clear_selection(&mut self) {
        if self.selected_id.take().is_some() {
            log::debug!("Selection cleared");
            self.emit(StoreEvent::SelectionChanged { selected: None });
        }
    }

    /// Append a widget to the end of the list.
    pub fn add_widget(&mut self, widget: WidgetNode) -> WidgetResult<()> {
        if self.index_of(&widget.id).is_some() {
            log::warn!("Rejected widget with duplicate id {}", widget.id);
            return Err(WidgetError::DuplicateId(widget.id.to_string()));
        }
        let id = widget.id.clone();
        let index = self.widgets.len();
        log::debug!("Adding {} widget {} at {}", widget.kind(), id, index);
        self.widgets.push(widget);
        self.emit(StoreEvent::WidgetAdded { id, index });
        Ok(())
    }

    /// Append a new widget of `kind` with placeholder props and return its id.
    pub fn add_widget_of_kind(&mut self, kind: WidgetKind) -> WidgetId {
        let widget = WidgetNode::new(kind);
        let id = widget.id.clone();
        let index = self.widgets.len();
        log::debug!("Adding {} widget {} at {}", kind, id, index);
        self.widgets.push(widget);
        self.emit(StoreEvent::WidgetAdded {
            id: id.clone(),
            index,
        });
        id
    }

    /// Move the widget at `from` so that it ends up at `to`.
    ///
    /// Returns false if nothing moved.
    pub fn move_widget(&mut self, from: usize, to: usize) -> bool {
        let len = self.widgets.len();
        if from == to || from >= len || to >= len {
            return false;
        }
        let widget = self.widgets.remove(from);
        let id = widget.id.clone();
        self.widgets.insert(to, widget);
        log::debug!("Moved widget {} from {} to {}", id, from, to);
        self.emit(StoreEvent::WidgetMoved { id, from, to });
        true
    }

    /// Move a widget to the position currently held by `over`.
    pub fn move_widget_by_id(&mut self, active: &WidgetId, over: &WidgetId) -> bool {
        match (self.index_of(active), self.index_of(over)) {
            (Some(from), Some(to)) => self.move_widget(from, to),
            _ => false,
        }
    }

    /// Replace the whole list. Ids must be unique.
    ///
    /// The selection is kept only if the selected id survives.
    pub fn replace_widgets(&mut self, widgets: Vec<WidgetNode>) -> WidgetResult<()> {
        let mut seen = HashSet::with_capacity(widgets.len());
        for widget in &widgets {
            if !seen.insert(&widget.id) {
                return Err(WidgetError::DuplicateId(widget.id.to_string()));
            }
        }

        let count = widgets.len();
        self.widgets = widgets;
        log::debug!("Replaced widget list ({} widgets)", count);
        self.emit(StoreEvent::WidgetsReplaced { count });

        let selection_gone = self
            .selected_id
            .as_ref()
            .is_some_and(|id| self.index_of(id).is_none());
        if selection_gone {
            self.clear_selection();
        }
        Ok(())
    }

    /// Load a widget list from its JSON array form.
    pub fn load_json(&mut self, json: &str) -> WidgetResult<()> {
        let values: Vec<serde_json::Value> = serde_json::from_str(json)?;
        let widgets = values
            .into_iter()
            .map(WidgetNode::from_value)
            .collect::<WidgetResult<Vec<_>>>()?;
        self.replace_widgets(widgets)
    }

    /// Build a store from a JSON array of widgets.
    pub fn from_json(json: &str) -> WidgetResult<Self> {
        let mut store = Self::new();
        store.load_json(json)?;
        Ok(store)
    }

    /// Serialize the widget list to JSON.
    pub fn to_json(&self) -> WidgetResult<String> {
        Ok(serde_json::to_string_pretty(&self.widgets)?)
    }

    /// Register a listener called after every effective mutation.
    pub fn subscribe(&mut self, listener: impl FnMut(&StoreEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() != before
    }

    fn emit(&mut self, event: StoreEvent) {
        for (_, listener) in &mut self.listeners {
            listener(&event);
        }
    }
}

impl WidgetActions for WidgetStore {
    fn set_selected_id(&mut self, id: &WidgetId) {
        if self.selected_id.as_ref() == Some(id) {
            return;
        }
        log::debug!("Selected widget {}", id);
        self.selected_id = Some(id.clone());
        self.emit(StoreEvent::SelectionChanged {
            selected: Some(id.clone()),
        });
    }

    fn remove_widget(&mut self, id: &WidgetId) {
        let Some(index) = self.index_of(id) else {
            log::debug!("Ignoring removal of unknown widget {}", id);
            return;
        };
        self.widgets.remove(index);
        log::debug!("Removed widget {} at {}", id, index);
        self.emit(StoreEvent::WidgetRemoved {
            id: id.clone(),
            index,
        });

        if self.selected_id.as_ref() == Some(id) {
            self.clear_selection();
        }
    }
}
