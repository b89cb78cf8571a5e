//! Folio Application
//!
//! The editor shell: windowing, the vello backdrop, and the egui
//! palette and sheet that show the sortable widget list.

mod app;
mod backdrop;
mod config;
mod shortcuts;
mod style;
mod ui;
mod views;
mod widget_item;
mod widget_list;

pub use app::{App, AppError};
pub use config::{AppConfig, DOCUMENT_ENV, DocumentError};
pub use shortcuts::{Shortcut, ShortcutAction, ShortcutRegistry};
pub use ui::{UiAction, UiState, apply_action, render_ui};
pub use widget_item::{DraggableWidgetNode, ItemResponse};
pub use widget_list::{ListResponse, WidgetList};
