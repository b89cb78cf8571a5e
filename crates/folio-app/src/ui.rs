//! UI components using egui.

use egui::{Align2, Color32, Context, Pos2, Vec2};
use folio_core::{PressOutcome, WidgetActions, WidgetKind, WidgetStore};
use folio_widgets::{PaletteButton, menu_item, panel_frame, section_label, separator, sheet_frame};

use crate::shortcuts::{ShortcutAction, ShortcutRegistry};
use crate::widget_list::WidgetList;

/// Width of the resume sheet.
const SHEET_WIDTH: f32 = 640.0;

/// Persistent UI state.
#[derive(Debug, Default)]
pub struct UiState {
    pub widget_list: WidgetList,
    pub shortcuts_modal_open: bool,
}

/// Actions triggered by UI interactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    /// Append a placeholder widget of this kind.
    AddWidget(WidgetKind),
    RemoveSelected,
    /// Clear the selection, or cancel a drag in progress.
    ClearSelection,
    /// Move the selected widget by this many slots.
    MoveSelected(isize),
    ShowShortcuts,
}

impl From<ShortcutAction> for UiAction {
    fn from(action: ShortcutAction) -> Self {
        match action {
            ShortcutAction::RemoveSelected => UiAction::RemoveSelected,
            ShortcutAction::ClearSelection => UiAction::ClearSelection,
            ShortcutAction::MoveSelectedUp => UiAction::MoveSelected(-1),
            ShortcutAction::MoveSelectedDown => UiAction::MoveSelected(1),
            ShortcutAction::ToggleShortcuts => UiAction::ShowShortcuts,
        }
    }
}

/// Render all UI and return any triggered action.
///
/// Presses on list items are applied to the store directly.
pub fn render_ui(ctx: &Context, ui_state: &mut UiState, store: &mut WidgetStore) -> Option<UiAction> {
    let palette_action = render_palette(ctx, ui_state, store);
    render_sheet(ctx, ui_state, store);
    if ui_state.shortcuts_modal_open {
        render_shortcuts_modal(ctx, ui_state);
    }
    let shortcut_action = ShortcutRegistry::detect(ctx).map(UiAction::from);

    palette_action.or(shortcut_action)
}

/// Apply an action to the store and UI state.
pub fn apply_action(ctx: &Context, ui_state: &mut UiState, store: &mut WidgetStore, action: UiAction) {
    match action {
        UiAction::AddWidget(kind) => {
            let id = store.add_widget_of_kind(kind);
            store.set_selected_id(&id);
        }
        UiAction::RemoveSelected => {
            if let Some(id) = store.selected_id().cloned() {
                store.remove_widget(&id);
            }
        }
        UiAction::ClearSelection => {
            if ui_state.widget_list.is_dragging() {
                ui_state.widget_list.cancel_drag();
            } else {
                store.clear_selection();
            }
        }
        UiAction::MoveSelected(step) => {
            ui_state.widget_list.move_selected(ctx, store, step);
        }
        UiAction::ShowShortcuts => {
            ui_state.shortcuts_modal_open = !ui_state.shortcuts_modal_open;
        }
    }
}

/// Left palette: add widgets and edit the selection.
fn render_palette(ctx: &Context, ui_state: &UiState, store: &WidgetStore) -> Option<UiAction> {
    let mut action = None;

    egui::Area::new(egui::Id::new("palette"))
        .anchor(Align2::LEFT_TOP, Vec2::new(12.0, 12.0))
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            panel_frame().show(ui, |ui| {
                ui.set_width(180.0);
                ui.spacing_mut().item_spacing = Vec2::new(0.0, 2.0);

                section_label(ui, "Add widget");
                ui.add_space(4.0);
                for kind in WidgetKind::ALL {
                    if PaletteButton::new(kind.label()).hint(kind.as_str()).show(ui) {
                        action = Some(UiAction::AddWidget(kind));
                    }
                }

                ui.add_space(4.0);
                separator(ui);
                section_label(ui, "Selection");
                ui.add_space(4.0);

                let has_selection = store.selected_id().is_some();
                let dragging = ui_state.widget_list.is_dragging();
                if menu_item(ui, "Move up", "Alt+Up", has_selection && !dragging) {
                    action = Some(UiAction::MoveSelected(-1));
                }
                if menu_item(ui, "Move down", "Alt+Down", has_selection && !dragging) {
                    action = Some(UiAction::MoveSelected(1));
                }
                if menu_item(ui, "Delete", "Del", has_selection) {
                    action = Some(UiAction::RemoveSelected);
                }
                if menu_item(ui, "Deselect", "Esc", has_selection) {
                    action = Some(UiAction::ClearSelection);
                }

                ui.add_space(4.0);
                separator(ui);
                if menu_item(ui, "Keyboard shortcuts", "?", true) {
                    action = Some(UiAction::ShowShortcuts);
                }

                ui.add_space(6.0);
                let count = store.len();
                ui.label(
                    egui::RichText::new(format!(
                        "{} widget{}",
                        count,
                        if count == 1 { "" } else { "s" }
                    ))
                    .size(11.0)
                    .color(folio_widgets::theme::TEXT_MUTED),
                );
            });
        });

    action
}

/// The resume sheet with the sortable widget list.
fn render_sheet(ctx: &Context, ui_state: &mut UiState, store: &mut WidgetStore) {
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.add_space(32.0);
                    ui.vertical_centered(|ui| {
                        sheet_frame().show(ui, |ui| {
                            ui.set_width(SHEET_WIDTH);
                            if store.is_empty() {
                                ui.label(
                                    egui::RichText::new("Add a widget from the palette")
                                        .color(folio_widgets::theme::TEXT_MUTED),
                                );
                                return;
                            }
                            let response = ui_state.widget_list.show(ui, store);
                            for outcome in &response.outcomes {
                                match outcome {
                                    PressOutcome::Selected(id) => log::debug!("Selected {}", id),
                                    PressOutcome::Removed(id) => log::info!("Deleted {}", id),
                                }
                            }
                        });
                    });
                    ui.add_space(32.0);
                });
        });
}

fn render_shortcuts_modal(ctx: &Context, ui_state: &mut UiState) {
    // Backdrop
    egui::Area::new(egui::Id::new("shortcuts_backdrop"))
        .fixed_pos(Pos2::ZERO)
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            let screen_rect = ctx.input(|i| i.content_rect());
            let response = ui.allocate_rect(screen_rect, egui::Sense::click());
            ui.painter()
                .rect_filled(screen_rect, 0.0, Color32::from_black_alpha(80));
            if response.clicked() {
                ui_state.shortcuts_modal_open = false;
            }
        });

    egui::Area::new(egui::Id::new("shortcuts_modal"))
        .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
        .order(egui::Order::Tooltip)
        .show(ctx, |ui| {
            panel_frame().show(ui, |ui| {
                ui.set_width(360.0);
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("Keyboard Shortcuts").size(16.0).strong());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("✕").clicked() {
                            ui_state.shortcuts_modal_open = false;
                        }
                    });
                });
                ui.add_space(12.0);
                for shortcut in ShortcutRegistry::all() {
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(shortcut.format())
                                .size(12.0)
                                .family(egui::FontFamily::Monospace)
                                .color(Color32::from_rgb(100, 116, 139)),
                        );
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(egui::RichText::new(shortcut.description).size(12.0));
                        });
                    });
                    ui.add_space(4.0);
                }
            });
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::WidgetId;

    fn store() -> WidgetStore {
        WidgetStore::from_json(
            r#"[
                { "id": "a", "type": "TitleSection" },
                { "id": "b", "type": "TextContent" }
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_add_widget_selects_it() {
        let ctx = Context::default();
        let mut state = UiState::default();
        let mut store = store();

        apply_action(&ctx, &mut state, &mut store, UiAction::AddWidget(WidgetKind::ImageSection));

        assert_eq!(store.len(), 3);
        let last = &store.widgets()[2];
        assert_eq!(last.kind(), WidgetKind::ImageSection);
        assert_eq!(store.selected_id(), Some(&last.id));
    }

    #[test]
    fn test_remove_and_clear_selection() {
        let ctx = Context::default();
        let mut state = UiState::default();
        let mut store = store();

        store.set_selected_id(&WidgetId::from("a"));
        apply_action(&ctx, &mut state, &mut store, UiAction::ClearSelection);
        assert!(store.selected_id().is_none());

        store.set_selected_id(&WidgetId::from("b"));
        apply_action(&ctx, &mut state, &mut store, UiAction::RemoveSelected);
        assert_eq!(store.len(), 1);
        assert!(store.selected_id().is_none());

        // Nothing selected: nothing removed.
        apply_action(&ctx, &mut state, &mut store, UiAction::RemoveSelected);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_toggle_shortcuts() {
        let ctx = Context::default();
        let mut state = UiState::default();
        let mut store = store();
        apply_action(&ctx, &mut state, &mut store, UiAction::ShowShortcuts);
        assert!(state.shortcuts_modal_open);
    }

    #[test]
    fn test_render_ui_headless() {
        let ctx = Context::default();
        let mut state = UiState::default();
        let mut store = store();
        let mut action = None;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            action = action.or(render_ui(ctx, &mut state, &mut store));
        });
        assert_eq!(action, None);
        assert_eq!(state.widget_list.sortable().layout().len(), 2);
    }

    #[test]
    fn test_shortcut_mapping() {
        assert_eq!(UiAction::from(ShortcutAction::MoveSelectedUp), UiAction::MoveSelected(-1));
        assert_eq!(UiAction::from(ShortcutAction::RemoveSelected), UiAction::RemoveSelected);
    }
}
