//! Drag-to-reorder binding for vertical widget lists.
//!
//! The list renderer reports each item's laid-out rectangle every frame
//! and forwards pointer or keyboard input. Items then [`register`] by id
//! and receive their drag state: whether they are the dragged item, the
//! visual offset to apply, and the transition to animate with. A finished
//! drag yields a [`Reorder`] that the caller applies to the store.
//!
//! [`register`]: SortableContext::register

use crate::widget::WidgetId;
use kurbo::{Point, Rect, Vec2};
use std::fmt;

/// Pointer travel (in logical pixels) before a press becomes a drag.
/// Shorter presses stay clicks.
pub const ACTIVATION_DISTANCE: f64 = 4.0;

/// Default duration of the settle animation.
pub const DEFAULT_TRANSITION_MS: u32 = 250;

/// Animation applied while an item settles into its new position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub property: &'static str,
    pub duration_ms: u32,
    /// CSS timing function name.
    pub easing: &'static str,
}

impl Default for Transition {
    fn default() -> Self {
        Self {
            property: "transform",
            duration_ms: DEFAULT_TRANSITION_MS,
            easing: "ease",
        }
    }
}

impl Transition {
    pub fn duration_secs(&self) -> f32 {
        self.duration_ms as f32 / 1000.0
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}ms {}",
            self.property,
            self.duration_ms,
            self.easing
        )
    }
}

/// Accessibility attributes forwarded verbatim onto the item root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortableAttributes {
    pub role: &'static str,
    pub tab_index: i32,
    pub aria_pressed: bool,
    pub aria_roledescription: &'static str,
    pub aria_describedby: &'static str,
}

/// Input hooks forwarded onto the item root; they start drags for `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortableListeners {
    id: WidgetId,
}

impl SortableListeners {
    /// Primary pointer pressed on the item.
    pub fn on_pointer_down(&self, context: &mut SortableContext, point: Point) {
        context.press(&self.id, point);
    }

    /// Keyboard activation (space/enter) on the focused item.
    pub fn on_key_activate(&self, context: &mut SortableContext) {
        context.keyboard_pick(&self.id);
    }
}

/// Drag state for one registered item.
#[derive(Debug, Clone, PartialEq)]
pub struct SortableItem {
    pub id: WidgetId,
    /// Index in the current layout, if the item is laid out.
    pub index: Option<usize>,
    pub is_dragging: bool,
    pub attributes: SortableAttributes,
    pub listeners: SortableListeners,
    pub transform: Option<Vec2>,
    pub transition: Option<Transition>,
}

impl SortableItem {
    /// An item that is not part of any sortable context.
    pub fn idle(id: WidgetId) -> Self {
        Self {
            attributes: attributes(false),
            listeners: SortableListeners { id: id.clone() },
            id,
            index: None,
            is_dragging: false,
            transform: None,
            transition: None,
        }
    }
}

/// A finished drag that changed the item's position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reorder {
    pub id: WidgetId,
    pub from: usize,
    pub to: usize,
}

/// How the current drag was started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sensor {
    Pointer,
    Keyboard,
}

#[derive(Debug, Clone)]
struct ActiveDrag {
    id: WidgetId,
    from: usize,
    over: usize,
    sensor: Sensor,
    origin: Point,
    delta: Vec2,
    /// False while a pointer press has not yet travelled far enough.
    activated: bool,
}

fn attributes(pressed: bool) -> SortableAttributes {
    SortableAttributes {
        role: "button",
        tab_index: 0,
        aria_pressed: pressed,
        aria_roledescription: "sortable",
        aria_describedby: "sortable-instructions",
    }
}

/// Sorting state for one vertical list.
#[derive(Debug, Clone, Default)]
pub struct SortableContext {
    /// Item rectangles in list order.
    layout: Vec<(WidgetId, Rect)>,
    active: Option<ActiveDrag>,
}

impl SortableContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report the laid-out rectangles of the list, in order.
    ///
    /// If the dragged item is no longer in the list, the drag ends
    /// without a reorder.
    pub fn set_layout(&mut self, layout: Vec<(WidgetId, Rect)>) {
        self.layout = layout;
        let Some(active) = self.active.as_mut() else {
            return;
        };
        match self.layout.iter().position(|(id, _)| *id == active.id) {
            Some(index) => {
                active.from = index;
                active.over = active.over.min(self.layout.len() - 1);
            }
            None => {
                log::debug!("Drag target {} disappeared, ending drag", active.id);
                self.active = None;
            }
        }
    }

    pub fn layout(&self) -> &[(WidgetId, Rect)] {
        &self.layout
    }

    fn index_of(&self, id: &WidgetId) -> Option<usize> {
        self.layout.iter().position(|(item, _)| item == id)
    }

    /// The id being dragged, once the drag is activated.
    pub fn active_id(&self) -> Option<&WidgetId> {
        self.active.as_ref().filter(|a| a.activated).map(|a| &a.id)
    }

    /// True while an activated drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.active_id().is_some()
    }

    /// The sensor of the current drag, if any.
    pub fn sensor(&self) -> Option<Sensor> {
        self.active.as_ref().map(|a| a.sensor)
    }

    /// Index the dragged item would drop at.
    pub fn over_index(&self) -> Option<usize> {
        self.active.as_ref().filter(|a| a.activated).map(|a| a.over)
    }

    /// Pointer pressed on an item. The drag activates after
    /// [`ACTIVATION_DISTANCE`] of travel.
    pub fn press(&mut self, id: &WidgetId, point: Point) {
        let Some(from) = self.index_of(id) else {
            return;
        };
        self.active = Some(ActiveDrag {
            id: id.clone(),
            from,
            over: from,
            sensor: Sensor::Pointer,
            origin: point,
            delta: Vec2::ZERO,
            activated: false,
        });
    }

    /// Pointer moved while pressed.
    pub fn pointer_moved(&mut self, point: Point) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        if active.sensor != Sensor::Pointer {
            return;
        }
        let delta = point - active.origin;
        if !active.activated {
            if delta.hypot() < ACTIVATION_DISTANCE {
                return;
            }
            active.activated = true;
            log::debug!("Drag started for {}", active.id);
        }
        active.delta = delta;
        let Some(&(_, rect)) = self.layout.get(active.from) else {
            return;
        };
        active.over = closest_center(&self.layout, rect.center() + delta).unwrap_or(active.from);
    }

    /// Pointer released. Returns the reorder if the item moved.
    pub fn release(&mut self) -> Option<Reorder> {
        let active = self.active.take()?;
        if !active.activated || active.from == active.over {
            return None;
        }
        log::debug!(
            "Drag of {} finished: {} -> {}",
            active.id,
            active.from,
            active.over
        );
        Some(Reorder {
            id: active.id,
            from: active.from,
            to: active.over,
        })
    }

    /// Abort the current drag, if any.
    pub fn cancel(&mut self) {
        if let Some(active) = self.active.take() {
            log::debug!("Drag of {} cancelled", active.id);
        }
    }

    /// Pick up an item with the keyboard.
    pub fn keyboard_pick(&mut self, id: &WidgetId) -> bool {
        let Some(from) = self.index_of(id) else {
            return false;
        };
        self.active = Some(ActiveDrag {
            id: id.clone(),
            from,
            over: from,
            sensor: Sensor::Keyboard,
            origin: Point::ZERO,
            delta: Vec2::ZERO,
            activated: true,
        });
        true
    }

    /// Move the keyboard-held item by `step` slots.
    pub fn keyboard_move(&mut self, step: isize) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        if active.sensor != Sensor::Keyboard || self.layout.is_empty() {
            return;
        }
        let last = self.layout.len() as isize - 1;
        let over = (active.over as isize + step).clamp(0, last) as usize;
        active.over = over;

        let from_rect = self.layout[active.from].1;
        let over_rect = self.layout[over].1;
        let dy = if over > active.from {
            over_rect.y1 - from_rect.y1
        } else {
            over_rect.y0 - from_rect.y0
        };
        active.delta = Vec2::new(0.0, dy);
    }

    /// Drop the keyboard-held item.
    pub fn keyboard_drop(&mut self) -> Option<Reorder> {
        match self.sensor() {
            Some(Sensor::Keyboard) => self.release(),
            _ => None,
        }
    }

    /// Drag state for the item with `id`.
    pub fn register(&self, id: &WidgetId) -> SortableItem {
        let mut item = SortableItem::idle(id.clone());
        item.index = self.index_of(id);

        let Some(active) = self.active.as_ref().filter(|a| a.activated) else {
            return item;
        };

        if active.id == *id {
            item.is_dragging = true;
            item.attributes = attributes(true);
            item.transform = Some(active.delta);
            return item;
        }

        item.transition = Some(Transition::default());
        if let Some(index) = item.index {
            item.transform = self.shift_for(active, index);
        }
        item
    }

    /// Offset of a non-dragged item so the list opens a slot at `over`.
    fn shift_for(&self, active: &ActiveDrag, index: usize) -> Option<Vec2> {
        let (from, over) = (active.from, active.over);
        let distance = self.slot_height(from);
        if from < over && index > from && index <= over {
            Some(Vec2::new(0.0, -distance))
        } else if from > over && index >= over && index < from {
            Some(Vec2::new(0.0, distance))
        } else {
            None
        }
    }

    /// Height of the dragged item plus the gap to its neighbour.
    fn slot_height(&self, index: usize) -> f64 {
        let rect = self.layout[index].1;
        let gap = if let Some((_, next)) = self.layout.get(index + 1) {
            next.y0 - rect.y1
        } else if index > 0 {
            rect.y0 - self.layout[index - 1].1.y1
        } else {
            0.0
        };
        rect.height() + gap.max(0.0)
    }
}

/// Index of the layout rect whose centre is nearest to `point`.
fn closest_center(layout: &[(WidgetId, Rect)], point: Point) -> Option<usize> {
    layout
        .iter()
        .enumerate()
        .map(|(i, (_, rect))| (i, rect.center().distance(point)))
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Three 40px rows with 10px gaps.
    fn context() -> SortableContext {
        let mut ctx = SortableContext::new();
        ctx.set_layout(
            ["a", "b", "c"]
                .iter()
                .enumerate()
                .map(|(i, id)| {
                    let top = i as f64 * 50.0;
                    (WidgetId::from(*id), Rect::new(0.0, top, 200.0, top + 40.0))
                })
                .collect(),
        );
        ctx
    }

    #[test]
    fn test_idle_registration() {
        let ctx = context();
        let item = ctx.register(&"b".into());
        assert_eq!(item.index, Some(1));
        assert!(!item.is_dragging);
        assert!(item.transform.is_none());
        assert!(item.transition.is_none());
        assert_eq!(item.attributes.aria_roledescription, "sortable");
    }

    #[test]
    fn test_short_press_is_not_a_drag() {
        let mut ctx = context();
        ctx.press(&"a".into(), Point::new(10.0, 10.0));
        ctx.pointer_moved(Point::new(12.0, 11.0));
        assert!(!ctx.is_dragging());
        assert!(!ctx.register(&"a".into()).is_dragging);
        assert_eq!(ctx.release(), None);
    }

    #[test]
    fn test_drag_down_reorders() {
        let mut ctx = context();
        ctx.press(&"a".into(), Point::new(10.0, 20.0));
        ctx.pointer_moved(Point::new(10.0, 120.0));

        assert_eq!(ctx.active_id(), Some(&WidgetId::from("a")));
        assert_eq!(ctx.over_index(), Some(2));

        let active = ctx.register(&"a".into());
        assert!(active.is_dragging);
        assert!(active.attributes.aria_pressed);
        assert_eq!(active.transform, Some(Vec2::new(0.0, 100.0)));
        assert!(active.transition.is_none());

        // b and c shift up by one slot (40 + 10)
        let b = ctx.register(&"b".into());
        assert_eq!(b.transform, Some(Vec2::new(0.0, -50.0)));
        assert_eq!(b.transition, Some(Transition::default()));

        assert_eq!(
            ctx.release(),
            Some(Reorder {
                id: "a".into(),
                from: 0,
                to: 2
            })
        );
        assert!(!ctx.is_dragging());
    }

    #[test]
    fn test_drag_up_shifts_down() {
        let mut ctx = context();
        ctx.press(&"c".into(), Point::new(10.0, 120.0));
        ctx.pointer_moved(Point::new(10.0, 70.0));
        assert_eq!(ctx.over_index(), Some(1));
        assert_eq!(ctx.register(&"b".into()).transform, Some(Vec2::new(0.0, 50.0)));
        assert_eq!(ctx.register(&"a".into()).transform, None);
    }

    #[test]
    fn test_drop_in_place_is_no_reorder() {
        let mut ctx = context();
        ctx.press(&"b".into(), Point::new(10.0, 70.0));
        ctx.pointer_moved(Point::new(30.0, 72.0));
        assert!(ctx.is_dragging());
        assert_eq!(ctx.release(), None);
    }

    #[test]
    fn test_removed_drag_target_ends_drag() {
        let mut ctx = context();
        ctx.press(&"b".into(), Point::new(10.0, 70.0));
        ctx.pointer_moved(Point::new(10.0, 130.0));
        assert!(ctx.is_dragging());

        let remaining = ctx
            .layout()
            .iter()
            .filter(|(id, _)| id.as_str() != "b")
            .cloned()
            .collect();
        ctx.set_layout(remaining);
        assert!(!ctx.is_dragging());
        assert_eq!(ctx.release(), None);
    }

    #[test]
    fn test_keyboard_reorder() {
        let mut ctx = context();
        assert!(ctx.keyboard_pick(&"a".into()));
        ctx.keyboard_move(1);
        assert_eq!(ctx.register(&"a".into()).transform, Some(Vec2::new(0.0, 50.0)));
        ctx.keyboard_move(5);
        assert_eq!(ctx.over_index(), Some(2));
        assert_eq!(
            ctx.keyboard_drop(),
            Some(Reorder {
                id: "a".into(),
                from: 0,
                to: 2
            })
        );
    }

    #[test]
    fn test_listeners_start_drag() {
        let mut ctx = context();
        let item = ctx.register(&"c".into());
        item.listeners.on_pointer_down(&mut ctx, Point::new(5.0, 105.0));
        ctx.pointer_moved(Point::new(5.0, 5.0));
        assert_eq!(ctx.active_id(), Some(&WidgetId::from("c")));
        assert_eq!(ctx.over_index(), Some(0));
    }

    #[test]
    fn test_transition_css() {
        assert_eq!(Transition::default().to_string(), "transform 250ms ease");
    }
}
