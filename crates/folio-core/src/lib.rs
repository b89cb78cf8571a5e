//! Folio Core Library
//!
//! Platform-agnostic data structures and logic for the Folio resume builder:
//! the widget model, the widget store, the sortable list binding and the
//! behaviour of a draggable widget item.

pub mod error;
pub mod item;
pub mod sortable;
pub mod store;
pub mod style;
pub mod widget;

pub use error::{WidgetError, WidgetResult};
pub use item::{DraggableWidgetItem, Emphasis, PressOutcome, PressTarget, ShadowSpec, WidgetView};
pub use sortable::{Reorder, SortableContext, SortableItem, Transition};
pub use store::{StoreEvent, SubscriptionId, WidgetActions, WidgetStore};
pub use style::{Sides, StyleData, StyleValue};
pub use widget::{WidgetId, WidgetKind, WidgetNode, WidgetProps};
