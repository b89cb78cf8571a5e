//! Keyboard shortcut registry and detection.

use egui::{Context, Key, Modifiers};

/// A keyboard shortcut definition.
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub key: &'static str,
    pub ctrl: bool,
    pub shift: bool,
    pub alt: bool,
    pub description: &'static str,
}

impl Shortcut {
    pub const fn new(key: &'static str, description: &'static str) -> Self {
        Self {
            key,
            ctrl: false,
            shift: false,
            alt: false,
            description,
        }
    }

    pub const fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }

    pub const fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    /// Format the shortcut for display (e.g., "Alt+Up").
    pub fn format(&self) -> String {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl");
        }
        if self.alt {
            parts.push("Alt");
        }
        if self.shift {
            parts.push("Shift");
        }
        parts.push(self.key);
        parts.join("+")
    }
}

/// Editor command bound to a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    RemoveSelected,
    ClearSelection,
    MoveSelectedUp,
    MoveSelectedDown,
    ToggleShortcuts,
}

/// Registry of all keyboard shortcuts.
pub struct ShortcutRegistry;

impl ShortcutRegistry {
    /// Get all registered shortcuts.
    pub fn all() -> Vec<Shortcut> {
        vec![
            Shortcut::new("Delete", "Delete selected widget"),
            Shortcut::new("Backspace", "Delete selected widget"),
            Shortcut::new("Escape", "Clear selection or cancel drag"),
            Shortcut::new("Up", "Move selected widget up").with_alt(),
            Shortcut::new("Down", "Move selected widget down").with_alt(),
            Shortcut::new("?", "Show keyboard shortcuts").with_shift(),
            Shortcut::new("Drag", "Reorder widgets"),
        ]
    }

    /// Consume the first shortcut pressed this frame.
    ///
    /// Nothing is consumed while a text field has keyboard focus.
    pub fn detect(ctx: &Context) -> Option<ShortcutAction> {
        if ctx.wants_keyboard_input() {
            return None;
        }
        ctx.input_mut(|i| {
            if i.consume_key(Modifiers::ALT, Key::ArrowUp) {
                Some(ShortcutAction::MoveSelectedUp)
            } else if i.consume_key(Modifiers::ALT, Key::ArrowDown) {
                Some(ShortcutAction::MoveSelectedDown)
            } else if i.consume_key(Modifiers::NONE, Key::Delete)
                || i.consume_key(Modifiers::NONE, Key::Backspace)
            {
                Some(ShortcutAction::RemoveSelected)
            } else if i.consume_key(Modifiers::NONE, Key::Escape) {
                Some(ShortcutAction::ClearSelection)
            } else if i.consume_key(Modifiers::SHIFT, Key::Questionmark) {
                Some(ShortcutAction::ToggleShortcuts)
            } else {
                None
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Event, RawInput};

    fn key_event(key: Key, modifiers: Modifiers) -> Event {
        Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers,
        }
    }

    fn detect_with(events: Vec<Event>, modifiers: Modifiers) -> Option<ShortcutAction> {
        let ctx = Context::default();
        let mut detected = None;
        let _ = ctx.run(
            RawInput {
                events,
                modifiers,
                ..Default::default()
            },
            |ctx| {
                detected = detected.or(ShortcutRegistry::detect(ctx));
            },
        );
        detected
    }

    #[test]
    fn test_format() {
        assert_eq!(Shortcut::new("Delete", "").format(), "Delete");
        assert_eq!(Shortcut::new("Up", "").with_alt().format(), "Alt+Up");
    }

    #[test]
    fn test_detect_delete() {
        let events = vec![key_event(Key::Delete, Modifiers::NONE)];
        assert_eq!(
            detect_with(events, Modifiers::NONE),
            Some(ShortcutAction::RemoveSelected)
        );
    }

    #[test]
    fn test_detect_alt_arrows() {
        let events = vec![key_event(Key::ArrowDown, Modifiers::ALT)];
        assert_eq!(
            detect_with(events, Modifiers::ALT),
            Some(ShortcutAction::MoveSelectedDown)
        );
    }

    #[test]
    fn test_plain_arrow_is_not_a_shortcut() {
        let events = vec![key_event(Key::ArrowUp, Modifiers::NONE)];
        assert_eq!(detect_with(events, Modifiers::NONE), None);
    }

    #[test]
    fn test_no_input() {
        assert_eq!(detect_with(Vec::new(), Modifiers::NONE), None);
    }
}
