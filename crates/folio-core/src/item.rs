//! Behaviour of one draggable widget entry in the ordered list.
//!
//! [`DraggableWidgetItem`] is a pure function of the widget, its
//! selection flag and its sortable drag state. It decides the visual
//! emphasis, picks the inner view for the widget kind, and turns pointer
//! presses into store requests. Renderers only draw what it decides.

use crate::sortable::{SortableAttributes, SortableContext, SortableItem, SortableListeners, Transition};
use crate::store::WidgetActions;
use crate::style::StyleData;
use crate::widget::{
    BasicInfoProps, ExperienceTimeProps, ImageSectionProps, TextContentProps, TitleSectionProps,
    WidgetId, WidgetKind, WidgetNode, WidgetProps,
};
use kurbo::Vec2;

/// Accent used for emphasis shadows (orange-600ish).
const EMPHASIS_RGB: [u8; 3] = [219, 99, 39];

/// Visual emphasis of an item. Dragging always wins over selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Emphasis {
    #[default]
    None,
    Selected,
    Dragging,
}

/// Drop shadow drawn around an emphasized item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShadowSpec {
    pub offset_y: i8,
    pub blur: u8,
    pub spread: u8,
    pub rgba: [u8; 4],
}

impl Emphasis {
    pub fn resolve(is_dragging: bool, is_selected: bool) -> Self {
        if is_dragging {
            Emphasis::Dragging
        } else if is_selected {
            Emphasis::Selected
        } else {
            Emphasis::None
        }
    }

    /// Stacking order relative to sibling items.
    pub fn z_index(&self) -> i32 {
        match self {
            Emphasis::None => 0,
            Emphasis::Selected => 10,
            Emphasis::Dragging => 20,
        }
    }

    pub fn shadow(&self) -> Option<ShadowSpec> {
        let [r, g, b] = EMPHASIS_RGB;
        match self {
            Emphasis::None => None,
            Emphasis::Selected => Some(ShadowSpec {
                offset_y: 4,
                blur: 12,
                spread: 2,
                rgba: [r, g, b, 153],
            }),
            Emphasis::Dragging => Some(ShadowSpec {
                offset_y: 4,
                blur: 18,
                spread: 2,
                rgba: [r, g, b, 204],
            }),
        }
    }
}

/// The inner view chosen for a widget, borrowing its props unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WidgetView<'a> {
    BasicInfo(&'a BasicInfoProps),
    TitleSection(&'a TitleSectionProps),
    ExperienceTime(&'a ExperienceTimeProps),
    TextContent(&'a TextContentProps),
    ImageSection(&'a ImageSectionProps),
}

impl<'a> WidgetView<'a> {
    pub fn for_props(props: &'a WidgetProps) -> Self {
        match props {
            WidgetProps::BasicInfo(p) => WidgetView::BasicInfo(p),
            WidgetProps::TitleSection(p) => WidgetView::TitleSection(p),
            WidgetProps::ExperienceTime(p) => WidgetView::ExperienceTime(p),
            WidgetProps::TextContent(p) => WidgetView::TextContent(p),
            WidgetProps::ImageSection(p) => WidgetView::ImageSection(p),
        }
    }

    pub fn kind(&self) -> WidgetKind {
        match self {
            WidgetView::BasicInfo(_) => WidgetKind::BasicInfo,
            WidgetView::TitleSection(_) => WidgetKind::TitleSection,
            WidgetView::ExperienceTime(_) => WidgetKind::ExperienceTime,
            WidgetView::TextContent(_) => WidgetKind::TextContent,
            WidgetView::ImageSection(_) => WidgetKind::ImageSection,
        }
    }
}

/// Which element of the item received the press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressTarget {
    /// Anywhere on the item outside the delete control.
    Root,
    /// The corner delete control.
    DeleteControl,
}

impl PressTarget {
    /// Handlers a press visits, innermost first.
    fn bubble_path(self) -> &'static [PressTarget] {
        match self {
            PressTarget::Root => &[PressTarget::Root],
            PressTarget::DeleteControl => &[PressTarget::DeleteControl, PressTarget::Root],
        }
    }
}

/// A primary pointer press travelling up through the item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerPress {
    target: PressTarget,
    propagation_stopped: bool,
}

impl PointerPress {
    pub fn new(target: PressTarget) -> Self {
        Self {
            target,
            propagation_stopped: false,
        }
    }

    pub fn target(&self) -> PressTarget {
        self.target
    }

    /// Mark the press handled so outer handlers skip it.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

/// Store request issued by a press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PressOutcome {
    Selected(WidgetId),
    Removed(WidgetId),
}

/// One entry of the ordered widget list.
#[derive(Debug, Clone)]
pub struct DraggableWidgetItem<'a> {
    item: &'a WidgetNode,
    is_selected: bool,
    sortable: SortableItem,
}

impl<'a> DraggableWidgetItem<'a> {
    pub fn new(item: &'a WidgetNode, is_selected: bool, sortable: SortableItem) -> Self {
        Self {
            item,
            is_selected,
            sortable,
        }
    }

    /// Register `item` with the sortable context and build the entry.
    pub fn register(item: &'a WidgetNode, is_selected: bool, context: &SortableContext) -> Self {
        Self::new(item, is_selected, context.register(&item.id))
    }

    pub fn id(&self) -> &'a WidgetId {
        &self.item.id
    }

    pub fn node(&self) -> &'a WidgetNode {
        self.item
    }

    pub fn is_selected(&self) -> bool {
        self.is_selected
    }

    pub fn is_dragging(&self) -> bool {
        self.sortable.is_dragging
    }

    pub fn emphasis(&self) -> Emphasis {
        Emphasis::resolve(self.sortable.is_dragging, self.is_selected)
    }

    /// The inner view for the widget kind.
    pub fn view(&self) -> WidgetView<'a> {
        WidgetView::for_props(&self.item.props)
    }

    /// Style applied verbatim to the content wrapper.
    pub fn wrapper_style(&self) -> &'a StyleData {
        &self.item.style
    }

    pub fn transform(&self) -> Option<Vec2> {
        self.sortable.transform
    }

    pub fn transition(&self) -> Option<Transition> {
        self.sortable.transition
    }

    pub fn attributes(&self) -> &SortableAttributes {
        &self.sortable.attributes
    }

    pub fn listeners(&self) -> &SortableListeners {
        &self.sortable.listeners
    }

    /// Dispatch a primary press on `target` through the item's handlers.
    ///
    /// The delete control stops propagation, so deleting never selects
    /// the widget being removed.
    pub fn handle_press(
        &self,
        target: PressTarget,
        actions: &mut dyn WidgetActions,
    ) -> Option<PressOutcome> {
        let mut press = PointerPress::new(target);
        let mut outcome = None;
        for handler in press.target().bubble_path() {
            if press.is_propagation_stopped() {
                break;
            }
            match handler {
                PressTarget::DeleteControl => {
                    press.stop_propagation();
                    actions.remove_widget(&self.item.id);
                    outcome = Some(PressOutcome::Removed(self.item.id.clone()));
                }
                PressTarget::Root => {
                    actions.set_selected_id(&self.item.id);
                    outcome = Some(PressOutcome::Selected(self.item.id.clone()));
                }
            }
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::WidgetStore;
    use kurbo::{Point, Rect};
    use serde_json::json;

    #[derive(Debug, PartialEq)]
    enum Call {
        Select(String),
        Remove(String),
    }

    #[derive(Default)]
    struct Recorder(Vec<Call>);

    impl WidgetActions for Recorder {
        fn set_selected_id(&mut self, id: &WidgetId) {
            self.0.push(Call::Select(id.to_string()));
        }

        fn remove_widget(&mut self, id: &WidgetId) {
            self.0.push(Call::Remove(id.to_string()));
        }
    }

    fn title_node() -> WidgetNode {
        WidgetNode::from_value(json!({
            "id": "w1",
            "type": "TitleSection",
            "data": { "propsData": { "text": "Resume" }, "styleData": { "padding": "4px" } }
        }))
        .unwrap()
    }

    fn dragging(id: &WidgetId) -> SortableItem {
        let mut sortable = SortableItem::idle(id.clone());
        sortable.is_dragging = true;
        sortable
    }

    #[test]
    fn test_emphasis_precedence() {
        assert_eq!(Emphasis::resolve(true, true), Emphasis::Dragging);
        assert_eq!(Emphasis::resolve(true, false), Emphasis::Dragging);
        assert_eq!(Emphasis::resolve(false, true), Emphasis::Selected);
        assert_eq!(Emphasis::resolve(false, false), Emphasis::None);
        assert!(Emphasis::Dragging.z_index() > Emphasis::Selected.z_index());
        assert!(Emphasis::None.shadow().is_none());
    }

    #[test]
    fn test_dragging_beats_selection_on_item() {
        let node = title_node();
        let item = DraggableWidgetItem::new(&node, true, dragging(&node.id));
        assert_eq!(item.emphasis(), Emphasis::Dragging);
        assert_eq!(item.emphasis().shadow().unwrap().blur, 18);
    }

    #[test]
    fn test_title_scenario() {
        let node = title_node();
        let item = DraggableWidgetItem::new(&node, false, SortableItem::idle(node.id.clone()));

        let WidgetView::TitleSection(props) = item.view() else {
            panic!("expected a title view");
        };
        assert_eq!(props.text, "Resume");
        assert_eq!(item.wrapper_style().text("padding"), Some("4px"));
        assert_eq!(item.wrapper_style().padding().top, 4.0);
        assert_eq!(item.emphasis(), Emphasis::None);
        assert!(item.transform().is_none());
    }

    #[test]
    fn test_every_kind_has_matching_view() {
        for kind in WidgetKind::ALL {
            let node = WidgetNode::new(kind);
            let item = DraggableWidgetItem::new(&node, false, SortableItem::idle(node.id.clone()));
            assert_eq!(item.view().kind(), kind);
            assert_eq!(WidgetView::for_props(&node.props), item.view());
        }
    }

    #[test]
    fn test_view_borrows_props_unchanged() {
        let node = WidgetNode::new(WidgetKind::ExperienceTime);
        let item = DraggableWidgetItem::new(&node, false, SortableItem::idle(node.id.clone()));
        let (WidgetView::ExperienceTime(view), WidgetProps::ExperienceTime(props)) =
            (item.view(), &node.props)
        else {
            panic!("expected experience view");
        };
        assert!(std::ptr::eq(view, props));
    }

    #[test]
    fn test_root_press_selects() {
        let node = title_node();
        let mut recorder = Recorder::default();
        for selected in [false, true] {
            let item =
                DraggableWidgetItem::new(&node, selected, SortableItem::idle(node.id.clone()));
            let outcome = item.handle_press(PressTarget::Root, &mut recorder);
            assert_eq!(outcome, Some(PressOutcome::Selected(node.id.clone())));
        }
        assert_eq!(
            recorder.0,
            vec![Call::Select("w1".into()), Call::Select("w1".into())]
        );
    }

    #[test]
    fn test_delete_press_never_selects() {
        let node = title_node();
        let item = DraggableWidgetItem::new(&node, false, SortableItem::idle(node.id.clone()));
        let mut recorder = Recorder::default();

        let outcome = item.handle_press(PressTarget::DeleteControl, &mut recorder);
        assert_eq!(outcome, Some(PressOutcome::Removed(node.id.clone())));
        assert_eq!(recorder.0, vec![Call::Remove("w1".into())]);
    }

    #[test]
    fn test_press_against_store() {
        let mut store = WidgetStore::with_widgets(vec![title_node()]).unwrap();
        let node = store.widgets()[0].clone();
        let item = DraggableWidgetItem::new(&node, false, SortableItem::idle(node.id.clone()));

        item.handle_press(PressTarget::Root, &mut store);
        assert!(store.is_selected(&node.id));

        item.handle_press(PressTarget::DeleteControl, &mut store);
        assert!(store.is_empty());
        assert!(store.selected_id().is_none());
    }

    #[test]
    fn test_register_with_context() {
        let node = title_node();
        let mut context = SortableContext::new();
        context.set_layout(vec![(node.id.clone(), Rect::new(0.0, 0.0, 100.0, 40.0))]);
        context.press(&node.id, Point::new(10.0, 10.0));
        context.pointer_moved(Point::new(10.0, 30.0));

        let item = DraggableWidgetItem::register(&node, true, &context);
        assert!(item.is_dragging());
        assert_eq!(item.emphasis(), Emphasis::Dragging);
        assert_eq!(item.transform(), Some(Vec2::new(0.0, 20.0)));
        assert!(item.attributes().aria_pressed);
    }
}
