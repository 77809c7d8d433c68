//! Content Catalog
//!
//! The static Sections → Items → Prompts tree, embedded from
//! `assets/catalog.json` at build time and never mutated afterwards.

use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, DashboardResult};
use crate::models::{Item, PromptKey, Section};

const BUILTIN_CATALOG: &str = include_str!("../assets/catalog.json");

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub sections: Vec<Section>,
}

/// A favorites key resolved against the live catalog
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPrompt<'a> {
    pub key: PromptKey,
    pub section: &'a Section,
    pub item: &'a Item,
    pub text: &'a str,
}

impl Catalog {
    pub fn from_json(json: &str) -> DashboardResult<Self> {
        serde_json::from_str(json).map_err(|e| DashboardError::Catalog(e.to_string()))
    }

    /// The embedded catalog, or an empty one if the asset is malformed
    pub fn builtin() -> Self {
        match Self::from_json(BUILTIN_CATALOG) {
            Ok(catalog) => {
                tracing::debug!(sections = catalog.sections.len(), "[CATALOG] loaded");
                catalog
            }
            Err(e) => {
                tracing::error!("[CATALOG] {}", e);
                Self::default()
            }
        }
    }

    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Every distinct chip, in first-seen order
    pub fn all_tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = Vec::new();
        for chip in self.sections.iter().flat_map(|s| &s.items).flat_map(|i| &i.chips) {
            if !tags.contains(chip) {
                tags.push(chip.clone());
            }
        }
        tags
    }

    /// Look up a favorites key; stale or malformed keys yield `None`
    pub fn resolve(&self, raw_key: &str) -> Option<ResolvedPrompt<'_>> {
        let key = PromptKey::parse(raw_key)?;
        let section = self.section(&key.section)?;
        let item = section.items.iter().find(|i| i.id == key.item)?;
        let text = item.prompts.get(key.index)?;
        Some(ResolvedPrompt {
            key,
            section,
            item,
            text,
        })
    }

    #[cfg(test)]
    pub fn prompt_count(&self) -> usize {
        self.sections
            .iter()
            .flat_map(|s| &s.items)
            .map(|i| i.prompts.len())
            .sum()
    }
}
