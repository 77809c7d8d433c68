//! Filter Engine
//!
//! Derives the visible subset of the catalog from the search query, the
//! selected tags and the favorites-only toggle. Filtering only removes
//! entries; relative order is always preserved.

use crate::catalog::Catalog;
use crate::models::{Item, PromptKey, Section};
use crate::prefs::Favorites;

/// Inputs to [`filter_catalog`]
#[derive(Debug, Clone, Copy)]
pub struct FilterCriteria<'a> {
    pub query: &'a str,
    pub tags: &'a [String],
    pub favorites_only: bool,
    pub favorites: &'a Favorites,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VisiblePrompt {
    pub key: String,
    pub index: usize,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VisibleItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub chips: Vec<String>,
    pub prompts: Vec<VisiblePrompt>,
}

impl VisibleItem {
    /// Visible prompts joined by a blank line, for "copy all"
    pub fn joined_prompts(&self) -> String {
        self.prompts
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VisibleSection {
    pub id: String,
    pub title: String,
    pub color_index: usize,
    pub items: Vec<VisibleItem>,
}

/// Apply `criteria` to `catalog`
///
/// Sections without a qualifying item and items without a qualifying prompt
/// are dropped.
pub fn filter_catalog(catalog: &Catalog, criteria: &FilterCriteria<'_>) -> Vec<VisibleSection> {
    if criteria.favorites_only && criteria.favorites.is_empty() {
        return Vec::new();
    }
    let query = criteria.query.trim();
    catalog
        .sections
        .iter()
        .filter_map(|section| {
            let items: Vec<VisibleItem> = section
                .items
                .iter()
                .filter_map(|item| filter_item(section, item, query, criteria))
                .collect();
            if items.is_empty() {
                None
            } else {
                Some(VisibleSection {
                    id: section.id.clone(),
                    title: section.title.clone(),
                    color_index: section.color_index,
                    items,
                })
            }
        })
        .collect()
}

fn filter_item(
    section: &Section,
    item: &Item,
    query: &str,
    criteria: &FilterCriteria<'_>,
) -> Option<VisibleItem> {
    if !item.has_all_tags(criteria.tags) {
        return None;
    }

    let prompts: Vec<VisiblePrompt> = item
        .prompts
        .iter()
        .enumerate()
        .filter_map(|(index, text)| {
            let key = PromptKey::new(&section.id, &item.id, index).to_string();
            if criteria.favorites_only && !criteria.favorites.contains(&key) {
                return None;
            }
            if !query.is_empty() && !matches_query(item, text, query) {
                return None;
            }
            Some(VisiblePrompt {
                key,
                index,
                text: text.clone(),
            })
        })
        .collect();

    if prompts.is_empty() {
        return None;
    }
    Some(VisibleItem {
        id: item.id.clone(),
        title: item.title.clone(),
        description: item.description.clone(),
        chips: item.chips.clone(),
        prompts,
    })
}

/// Literal, case-sensitive substring test over title, description and prompt
fn matches_query(item: &Item, prompt: &str, query: &str) -> bool {
    let haystack = [item.title.as_str(), item.description.as_str(), prompt].join("\n");
    haystack.contains(query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::sample_catalog;

    fn run(catalog: &Catalog, query: &str, tags: &[&str], favorites_only: bool, favorites: &Favorites) -> Vec<VisibleSection> {
        let tags: Vec<String> = tags.iter().map(|t| t.to_string()).collect();
        let criteria = FilterCriteria {
            query,
            tags: &tags,
            favorites_only,
            favorites,
        };
        filter_catalog(catalog, &criteria)
    }

    fn item_titles(sections: &[VisibleSection]) -> Vec<String> {
        sections
            .iter()
            .flat_map(|s| &s.items)
            .map(|i| i.title.clone())
            .collect()
    }

    #[test]
    fn test_identity_when_no_filters() {
        let catalog = Catalog::builtin();
        let favorites = Favorites::default();
        let result = run(&catalog, "", &[], false, &favorites);

        assert_eq!(result.len(), catalog.sections.len());
        let prompts: usize = result.iter().flat_map(|s| &s.items).map(|i| i.prompts.len()).sum();
        assert_eq!(prompts, catalog.prompt_count());
        assert_eq!(result[0].items[0].prompts[0].key, "intro::conscious-use::0");
    }

    #[test]
    fn test_whitespace_query_keeps_everything() {
        let catalog = sample_catalog();
        let favorites = Favorites::default();
        assert_eq!(run(&catalog, "   ", &[], false, &favorites).len(), 2);
    }

    #[test]
    fn test_query_matches_title_description_or_prompt() {
        let catalog = sample_catalog();
        let favorites = Favorites::default();

        // title match keeps every prompt of the item
        let result = run(&catalog, "Headline", &[], false, &favorites);
        assert_eq!(item_titles(&result), vec!["Headline lab"]);
        assert_eq!(result[0].items[0].prompts.len(), 2);

        // prompt-only match keeps just that prompt
        let result = run(&catalog, "[N]", &[], false, &favorites);
        assert_eq!(result[0].items[0].prompts.len(), 1);
        assert_eq!(result[0].items[0].prompts[0].index, 1);
    }

    #[test]
    fn test_query_is_case_sensitive() {
        let catalog = sample_catalog();
        let favorites = Favorites::default();
        assert!(run(&catalog, "headline lab", &[], false, &favorites).is_empty());
    }

    #[test]
    fn test_every_result_contains_query() {
        let catalog = Catalog::builtin();
        let favorites = Favorites::default();
        for query in ["فكرة", "نبرة", "Task", "[الفئة]"] {
            for section in run(&catalog, query, &[], false, &favorites) {
                for item in &section.items {
                    for prompt in &item.prompts {
                        assert!(
                            prompt.text.contains(query)
                                || item.title.contains(query)
                                || item.description.contains(query),
                            "{} leaked into results for {}",
                            prompt.key,
                            query
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_tags_use_and_semantics() {
        let catalog = sample_catalog();
        let favorites = Favorites::default();

        let result = run(&catalog, "", &["clarity"], false, &favorites);
        assert_eq!(item_titles(&result), vec!["Headline lab", "Polish"]);

        let result = run(&catalog, "", &["clarity", "rhythm"], false, &favorites);
        assert_eq!(item_titles(&result), vec!["Polish"]);

        assert!(run(&catalog, "", &["clarity", "structure"], false, &favorites).is_empty());
    }

    #[test]
    fn test_every_result_has_selected_tags() {
        let catalog = Catalog::builtin();
        let favorites = Favorites::default();
        for tag in catalog.all_tags() {
            let tags = vec![tag.clone()];
            let result = run(&catalog, "", &[tag.as_str()], false, &favorites);
            assert!(!result.is_empty());
            for item in result.iter().flat_map(|s| &s.items) {
                assert!(tags.iter().all(|t| item.chips.contains(t)));
            }
        }
    }

    #[test]
    fn test_favorites_only_with_empty_set_is_empty() {
        let catalog = Catalog::builtin();
        let favorites = Favorites::default();
        assert!(run(&catalog, "", &[], true, &favorites).is_empty());
    }

    #[test]
    fn test_favorites_only_keeps_members() {
        let catalog = sample_catalog();
        let mut favorites = Favorites::default();
        favorites.toggle("a::one::1");
        favorites.toggle("b::three::0");

        let result = run(&catalog, "", &[], true, &favorites);
        let keys: Vec<&str> = result
            .iter()
            .flat_map(|s| &s.items)
            .flat_map(|i| &i.prompts)
            .map(|p| p.key.as_str())
            .collect();
        assert_eq!(keys, vec!["a::one::1", "b::three::0"]);

        // favorites are ignored while the toggle is off
        assert_eq!(run(&catalog, "", &[], false, &favorites).len(), 2);
    }

    #[test]
    fn test_order_preserved() {
        let catalog = sample_catalog();
        let favorites = Favorites::default();
        let result = run(&catalog, "e", &[], false, &favorites);
        let ids: Vec<&str> = result.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(item_titles(&result), vec!["Headline lab", "Outline", "Polish"]);
    }

    #[test]
    fn test_arabic_query_finds_headline_lab() {
        let catalog = Catalog::builtin();
        let favorites = Favorites::default();
        let result = run(&catalog, "عناوين", &[], false, &favorites);
        let titles = item_titles(&result);

        assert!(titles.iter().any(|t| t == "مختبر العناوين"));
        assert!(!titles.iter().any(|t| t.starts_with("اندفاعة الأفكار")));
        assert_eq!(titles.len(), 3);
    }

    #[test]
    fn test_arabic_tag_pair_selects_single_item() {
        let catalog = Catalog::builtin();
        let favorites = Favorites::default();
        let result = run(&catalog, "", &["وضوح", "إيقاع"], false, &favorites);

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "lvl2");
        let titles = item_titles(&result);
        assert_eq!(titles.len(), 1);
        assert!(titles[0].starts_with("التحرير الأسلوبي والإيقاعي"));
    }

    #[test]
    fn test_joined_prompts() {
        let catalog = sample_catalog();
        let favorites = Favorites::default();
        let result = run(&catalog, "", &[], false, &favorites);
        assert_eq!(
            result[0].items[0].joined_prompts(),
            "Suggest ten headlines\n\nPick the best [N]"
        );
    }
}
