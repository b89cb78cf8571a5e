//! The ordered, drag-sortable list of widgets on the sheet.

use egui::{Pos2, Rect, Ui};
use folio_core::sortable::Sensor;
use folio_core::{
    DraggableWidgetItem, PressOutcome, PressTarget, Reorder, SortableContext, WidgetId,
    WidgetStore,
};

use crate::widget_item::DraggableWidgetNode;

/// Vertical gap between items.
const ITEM_GAP: f32 = 10.0;

fn to_point(pos: Pos2) -> kurbo::Point {
    kurbo::Point::new(pos.x as f64, pos.y as f64)
}

fn to_rect(rect: Rect) -> kurbo::Rect {
    kurbo::Rect::new(
        rect.min.x as f64,
        rect.min.y as f64,
        rect.max.x as f64,
        rect.max.y as f64,
    )
}

/// A press recorded while drawing, applied once the list is drawn.
#[derive(Debug, Clone)]
struct PendingPress {
    id: WidgetId,
    target: PressTarget,
    pos: Option<Pos2>,
}

/// Store changes made by the list during one frame.
#[derive(Debug, Clone, Default)]
pub struct ListResponse {
    pub outcomes: Vec<PressOutcome>,
    pub reorder: Option<Reorder>,
}

/// Sortable list of [`DraggableWidgetNode`]s bound to a [`WidgetStore`].
#[derive(Debug, Default)]
pub struct WidgetList {
    sortable: SortableContext,
}

impl WidgetList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sortable(&self) -> &SortableContext {
        &self.sortable
    }

    pub fn is_dragging(&self) -> bool {
        self.sortable.is_dragging()
    }

    /// Draw every widget in store order and apply presses and drops.
    pub fn show(&mut self, ui: &mut Ui, store: &mut WidgetStore) -> ListResponse {
        let mut response = ListResponse {
            reorder: self.track_pointer(ui, store),
            ..Default::default()
        };

        let mut layout = Vec::with_capacity(store.len());
        let mut presses = Vec::new();
        ui.spacing_mut().item_spacing.y = ITEM_GAP;
        for node in store.widgets() {
            let item =
                DraggableWidgetItem::register(node, store.is_selected(&node.id), &self.sortable);
            let shown = DraggableWidgetNode::new(item).show(ui);
            layout.push((node.id.clone(), to_rect(shown.rect)));
            if let Some(target) = shown.press {
                presses.push(PendingPress {
                    id: node.id.clone(),
                    target,
                    pos: shown.press_pos,
                });
            }
        }
        self.sortable.set_layout(layout);

        for press in presses {
            if let Some(outcome) = self.apply_press(store, &press) {
                response.outcomes.push(outcome);
            }
        }
        response
    }

    /// Follow the pointer while a pointer drag is pending or active.
    fn track_pointer(&mut self, ui: &Ui, store: &mut WidgetStore) -> Option<Reorder> {
        if self.sortable.sensor() != Some(Sensor::Pointer) {
            return None;
        }
        let (down, pos) = ui.input(|i| (i.pointer.primary_down(), i.pointer.latest_pos()));
        if down {
            if let Some(pos) = pos {
                self.sortable.pointer_moved(to_point(pos));
            }
            if self.sortable.is_dragging() {
                ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
            }
            return None;
        }
        let reorder = self.sortable.release()?;
        self.apply_reorder(ui.ctx(), store, &reorder).then_some(reorder)
    }

    /// Move the dropped widget by id. The layout the drop was computed
    /// from may predate store changes made since the last frame.
    fn apply_reorder(
        &self,
        ctx: &egui::Context,
        store: &mut WidgetStore,
        reorder: &Reorder,
    ) -> bool {
        let Some(from) = store.index_of(&reorder.id) else {
            log::debug!("Dropped widget {} is gone, ignoring reorder", reorder.id);
            return false;
        };
        let to = reorder.to.min(store.len().saturating_sub(1));
        let moved = store.move_widget(from, to);
        if moved {
            // Items have new slots; drop the eased offsets of the old ones.
            ctx.clear_animations();
        }
        moved
    }

    fn apply_press(
        &mut self,
        store: &mut WidgetStore,
        press: &PendingPress,
    ) -> Option<PressOutcome> {
        let node = store.get(&press.id)?.clone();
        let item =
            DraggableWidgetItem::register(&node, store.is_selected(&node.id), &self.sortable);
        if press.target == PressTarget::Root {
            if let Some(pos) = press.pos {
                item.listeners().on_pointer_down(&mut self.sortable, to_point(pos));
            }
        }
        item.handle_press(press.target, store)
    }

    /// Move the selected widget by `step` slots using the keyboard sensor.
    pub fn move_selected(
        &mut self,
        ctx: &egui::Context,
        store: &mut WidgetStore,
        step: isize,
    ) -> bool {
        let Some(node) = store.selected() else {
            return false;
        };
        let item = DraggableWidgetItem::register(node, true, &self.sortable);
        item.listeners().on_key_activate(&mut self.sortable);
        self.sortable.keyboard_move(step);
        match self.sortable.keyboard_drop() {
            Some(reorder) => self.apply_reorder(ctx, store, &reorder),
            None => false,
        }
    }

    /// Abandon any drag in progress.
    pub fn cancel_drag(&mut self) {
        self.sortable.cancel();
    }
}
