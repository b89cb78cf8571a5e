//! egui renderer for one draggable widget entry.

use egui::emath::TSTransform;
use egui::{CursorIcon, Id, LayerId, Order, Pos2, Rect, Sense, Ui, UiBuilder, Vec2};
use folio_core::{DraggableWidgetItem, Emphasis, PressTarget, WidgetKind};
use folio_widgets::{DeleteButton, theme, with_opacity};

use crate::style::{emphasis_shadow, text_color, wrapper_frame};
use crate::views::show_widget_view;

/// Distance of the delete control from the item's top-right corner.
pub(crate) const DELETE_INSET: f32 = 4.0;
/// Fade time of the delete control.
const DELETE_FADE_SECS: f32 = 0.15;

/// What happened to an item this frame.
#[derive(Debug, Clone)]
pub struct ItemResponse {
    /// Slot occupied in the list, before any drag offset.
    pub rect: Rect,
    /// Element that received a primary press this frame.
    pub press: Option<PressTarget>,
    /// Pointer position of that press.
    pub press_pos: Option<Pos2>,
    /// Whether the delete control is shown.
    pub delete_visible: bool,
    /// Kind of the inner view that was drawn.
    pub view: WidgetKind,
    pub emphasis: Emphasis,
}

/// Renders a [`DraggableWidgetItem`] into a `Ui`.
pub struct DraggableWidgetNode<'a> {
    item: DraggableWidgetItem<'a>,
}

impl<'a> DraggableWidgetNode<'a> {
    pub fn new(item: DraggableWidgetItem<'a>) -> Self {
        Self { item }
    }

    fn egui_id(&self) -> Id {
        Id::new(("widget-item", self.item.id().as_str()))
    }

    /// Current visual offset, eased when the sortable asks for a transition.
    fn visual_offset(&self, ui: &Ui) -> Vec2 {
        let target = self
            .item
            .transform()
            .map(|v| Vec2::new(v.x as f32, v.y as f32))
            .unwrap_or(Vec2::ZERO);
        match self.item.transition() {
            Some(transition) if !self.item.is_dragging() => {
                let id = self.egui_id();
                let secs = transition.duration_secs();
                Vec2::new(
                    ui.ctx().animate_value_with_time(id.with("dx"), target.x, secs),
                    ui.ctx().animate_value_with_time(id.with("dy"), target.y, secs),
                )
            }
            _ => target,
        }
    }

    /// Draw the item and report presses. Store requests are left to the caller.
    pub fn show(self, ui: &mut Ui) -> ItemResponse {
        let id = self.egui_id();
        let emphasis = self.item.emphasis();
        let offset = self.visual_offset(ui);

        // Dragged items float above everything; shifted ones above the list.
        let layer = if self.item.is_dragging() {
            Some(LayerId::new(Order::Tooltip, id))
        } else if offset != Vec2::ZERO {
            Some(LayerId::new(Order::Middle, id))
        } else {
            None
        };
        let builder = match layer {
            Some(layer_id) => UiBuilder::new().layer_id(layer_id),
            None => UiBuilder::new(),
        };

        let view = self.item.view();
        let style = self.item.wrapper_style();
        let body = ui.scope_builder(builder, |ui| {
            let shadow = emphasis_shadow(emphasis);
            egui::Frame::new()
                .fill(theme::SHEET_BG)
                .shadow(shadow)
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    if let Some(color) = text_color(style) {
                        ui.visuals_mut().override_text_color = Some(color);
                    }
                    wrapper_frame(style).show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        show_widget_view(ui, view);
                    });
                });
        });
        let rect = body.response.rect;

        if let Some(layer_id) = layer {
            ui.ctx()
                .transform_layer_shapes(layer_id, TSTransform::from_translation(offset));
        }

        // Root first so the delete control, registered after it, wins hit tests.
        let root = ui
            .interact(rect, id, Sense::click_and_drag())
            .on_hover_cursor(CursorIcon::Move);

        let shown_rect = rect.translate(offset);
        let hovered = ui.rect_contains_pointer(shown_rect) || self.item.is_dragging();
        let opacity = ui
            .ctx()
            .animate_bool_with_time(id.with("delete-fade"), hovered, DELETE_FADE_SECS);

        let overlay_layer = layer.unwrap_or_else(|| ui.layer_id());
        let mut overlay =
            ui.new_child(UiBuilder::new().max_rect(shown_rect).layer_id(overlay_layer));
        let button = DeleteButton::new(id.with("delete"))
            .opacity(opacity)
            .tooltip("Delete widget");
        let delete_rect = button.corner_rect(shown_rect, DELETE_INSET);
        let delete = button.show_at(&mut overlay, delete_rect);

        let (pressed, press_pos) =
            ui.input(|i| (i.pointer.primary_pressed(), i.pointer.press_origin()));
        let press = if !pressed {
            None
        } else if delete.hovered() {
            Some(PressTarget::DeleteControl)
        } else if root.hovered() {
            Some(PressTarget::Root)
        } else {
            None
        };

        if emphasis == Emphasis::Selected {
            ui.painter().rect_stroke(
                shown_rect,
                egui::CornerRadius::ZERO,
                egui::Stroke::new(1.0, with_opacity(theme::ACCENT, 0.35)),
                egui::StrokeKind::Outside,
            );
        }

        ItemResponse {
            rect,
            press,
            press_pos: press.and(press_pos),
            delete_visible: opacity > 0.0,
            view: view.kind(),
            emphasis,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{SortableItem, WidgetNode};
    use serde_json::json;

    fn render(node: &WidgetNode, selected: bool) -> ItemResponse {
        let ctx = egui::Context::default();
        let mut response = None;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let item =
                    DraggableWidgetItem::new(node, selected, SortableItem::idle(node.id.clone()));
                response = Some(DraggableWidgetNode::new(item).show(ui));
            });
        });
        response.expect("item rendered")
    }

    #[test]
    fn test_title_item_renders_without_emphasis() {
        let node = WidgetNode::from_value(json!({
            "id": "w1",
            "type": "TitleSection",
            "data": { "propsData": { "text": "Resume" }, "styleData": { "padding": "4px" } }
        }))
        .unwrap();

        let response = render(&node, false);
        assert_eq!(response.view, WidgetKind::TitleSection);
        assert_eq!(response.emphasis, Emphasis::None);
        assert!(response.press.is_none());
        assert!(!response.delete_visible);
        assert!(response.rect.height() > 0.0);
    }

    #[test]
    fn test_every_kind_renders() {
        for kind in WidgetKind::ALL {
            let node = WidgetNode::new(kind);
            assert_eq!(render(&node, true).view, kind);
        }
    }

    #[test]
    fn test_selected_emphasis() {
        let node = WidgetNode::new(WidgetKind::TextContent);
        assert_eq!(render(&node, true).emphasis, Emphasis::Selected);
    }
}
