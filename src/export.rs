//! Export
//!
//! Builds the downloadable JSON document: raw favorites, active filters and
//! the favorites that still resolve against the catalog.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::config::EXPORT_PREFIX;
use crate::error::DashboardResult;
use crate::prefs::Favorites;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedPrompt {
    pub id: String,
    pub section: String,
    pub item: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDocument {
    /// Stored keys, verbatim, stale ones included
    pub favorites: Vec<String>,
    pub query: String,
    pub tags: Vec<String>,
    pub prompts: Vec<ExportedPrompt>,
}

impl ExportDocument {
    pub fn build(catalog: &Catalog, favorites: &Favorites, query: &str, tags: &[String]) -> Self {
        let prompts = favorites
            .iter()
            .filter_map(|key| {
                let resolved = catalog.resolve(key);
                if resolved.is_none() {
                    tracing::debug!(key, "[EXPORT] dropping stale favorite");
                }
                resolved
            })
            .map(|r| ExportedPrompt {
                id: r.key.to_string(),
                section: r.section.id.clone(),
                item: r.item.title.clone(),
                text: r.text.to_string(),
            })
            .collect();

        Self {
            favorites: favorites.keys().to_vec(),
            query: query.to_string(),
            tags: tags.to_vec(),
            prompts,
        }
    }

    pub fn to_json(&self) -> DashboardResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// `aiw-export-YYYYMMDD.json`
pub fn export_filename(date: NaiveDate) -> String {
    format!("{}-{}.json", EXPORT_PREFIX, date.format("%Y%m%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::sample_catalog;

    #[test]
    fn test_stale_keys_kept_raw_but_not_resolved() {
        let catalog = sample_catalog();
        let favorites = Favorites::from_keys(["a::one::0", "a::deleted::0", "b::three::9"]);
        let doc = ExportDocument::build(&catalog, &favorites, "head", &["clarity".to_string()]);

        assert_eq!(doc.favorites, vec!["a::one::0", "a::deleted::0", "b::three::9"]);
        assert_eq!(doc.prompts.len(), 1);
        assert_eq!(
            doc.prompts[0],
            ExportedPrompt {
                id: "a::one::0".to_string(),
                section: "a".to_string(),
                item: "Headline lab".to_string(),
                text: "Suggest ten headlines".to_string(),
            }
        );
        assert_eq!(doc.query, "head");
        assert_eq!(doc.tags, vec!["clarity"]);
    }

    #[test]
    fn test_json_shape() {
        let catalog = sample_catalog();
        let favorites = Favorites::from_keys(["b::three::0"]);
        let json = ExportDocument::build(&catalog, &favorites, "", &[]).to_json().unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["favorites"][0], "b::three::0");
        assert_eq!(value["query"], "");
        assert!(value["tags"].as_array().unwrap().is_empty());
        assert_eq!(value["prompts"][0]["item"], "Polish");
        assert!(json.contains('\n'), "export should be pretty-printed");
    }

    #[test]
    fn test_filename_is_date_stamped() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(export_filename(date), "aiw-export-20250307.json");
    }
}
