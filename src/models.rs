//! Frontend Models
//!
//! Catalog entities, prompt keys and persisted preference enums.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A top-level step of the writing journey
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub color_index: usize,
    #[serde(default)]
    pub items: Vec<Item>,
}

/// An exercise inside a section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Stable identifier, independent of the display title
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub chips: Vec<String>,
    #[serde(default)]
    pub prompts: Vec<String>,
}

impl Item {
    /// True when every tag in `tags` is one of this item's chips
    pub fn has_all_tags(&self, tags: &[String]) -> bool {
        tags.iter().all(|t| self.chips.contains(t))
    }
}

/// Composite key of a prompt: `section::item::index`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PromptKey {
    pub section: String,
    pub item: String,
    pub index: usize,
}

impl PromptKey {
    pub fn new(section: &str, item: &str, index: usize) -> Self {
        Self {
            section: section.to_string(),
            item: item.to_string(),
            index,
        }
    }

    /// Parse a stored key; anything not shaped like `a::b::N` is rejected
    pub fn parse(raw: &str) -> Option<Self> {
        let mut parts = raw.split("::");
        let section = parts.next()?;
        let item = parts.next()?;
        let index = parts.next()?.parse().ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self::new(section, item, index))
    }
}

impl fmt::Display for PromptKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}::{}", self.section, self.item, self.index)
    }
}

/// Color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// Accent palette used for section cards and selected tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccentColor {
    #[default]
    Emerald,
    Sky,
    Fuchsia,
    Amber,
}

impl AccentColor {
    pub const ALL: [AccentColor; 4] = [
        AccentColor::Emerald,
        AccentColor::Sky,
        AccentColor::Fuchsia,
        AccentColor::Amber,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AccentColor::Emerald => "emerald",
            AccentColor::Sky => "sky",
            AccentColor::Fuchsia => "fuchsia",
            AccentColor::Amber => "amber",
        }
    }

    /// The palette rotated so that `self` comes first
    pub fn rotation(self) -> [AccentColor; 4] {
        let start = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        let mut out = Self::ALL;
        out.rotate_left(start);
        out
    }

    /// Color of the `position`-th visible section card
    pub fn for_card(self, position: usize) -> AccentColor {
        let order = self.rotation();
        order[position % order.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_key_format_and_parse() {
        let key = PromptKey::new("lvl1", "idea-sprint", 1);
        assert_eq!(key.to_string(), "lvl1::idea-sprint::1");
        assert_eq!(PromptKey::parse("lvl1::idea-sprint::1"), Some(key));
    }

    #[test]
    fn test_prompt_key_rejects_malformed() {
        assert_eq!(PromptKey::parse(""), None);
        assert_eq!(PromptKey::parse("lvl1::idea-sprint"), None);
        assert_eq!(PromptKey::parse("lvl1::idea-sprint::x"), None);
        assert_eq!(PromptKey::parse("a::b::1::2"), None);
    }

    #[test]
    fn test_accent_rotation() {
        assert_eq!(
            AccentColor::Fuchsia.rotation(),
            [AccentColor::Fuchsia, AccentColor::Amber, AccentColor::Emerald, AccentColor::Sky]
        );
        assert_eq!(AccentColor::Sky.for_card(0), AccentColor::Sky);
        assert_eq!(AccentColor::Sky.for_card(3), AccentColor::Emerald);
        assert_eq!(AccentColor::Sky.for_card(4), AccentColor::Sky);
    }

    #[test]
    fn test_theme_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        let parsed: AccentColor = serde_json::from_str("\"amber\"").unwrap();
        assert_eq!(parsed, AccentColor::Amber);
    }
}
