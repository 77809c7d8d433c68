//! Keyboard Shortcuts
//!
//! Global bindings that stay inactive while the user is typing.

/// What currently holds keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusKind {
    TextInput,
    Other,
}

impl FocusKind {
    /// Classify an element by its tag name and contenteditable flag
    pub fn from_element(tag_name: &str, content_editable: bool) -> Self {
        if content_editable {
            return FocusKind::TextInput;
        }
        match tag_name.to_ascii_uppercase().as_str() {
            "INPUT" | "TEXTAREA" | "SELECT" => FocusKind::TextInput,
            _ => FocusKind::Other,
        }
    }
}

/// Modifier keys held during the key press
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub meta: bool,
    pub alt: bool,
}

impl Modifiers {
    fn any(self) -> bool {
        self.ctrl || self.meta || self.alt
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    FocusSearch,
    ToggleFavoritesOnly,
    OpenHelp,
}

impl Shortcut {
    pub const ALL: [Shortcut; 3] = [
        Shortcut::FocusSearch,
        Shortcut::ToggleFavoritesOnly,
        Shortcut::OpenHelp,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Shortcut::FocusSearch => "/",
            Shortcut::ToggleFavoritesOnly => "f",
            Shortcut::OpenHelp => "?",
        }
    }

    /// Label shown in the help overlay
    pub fn label(self) -> &'static str {
        match self {
            Shortcut::FocusSearch => "للبحث",
            Shortcut::ToggleFavoritesOnly => "تبديل المفضلة",
            Shortcut::OpenHelp => "عرض هذه النافذة",
        }
    }
}

/// Map a `KeyboardEvent.key` to a shortcut, if one applies
pub fn shortcut_for(key: &str, focus: FocusKind, modifiers: Modifiers) -> Option<Shortcut> {
    if focus == FocusKind::TextInput || modifiers.any() {
        return None;
    }
    Shortcut::ALL.into_iter().find(|s| s.key() == key)
}
