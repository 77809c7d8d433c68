//! URL State
//!
//! Maps the transient UI state to and from the address bar query string:
//! `section`, `q`, `tags` (comma-separated) and `fav=1`. Hydration runs once
//! at startup; mirroring runs after every change and only ever replaces the
//! current history entry.

use std::borrow::Cow;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::store::UiState;

/// Everything except unreserved characters is escaped
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'*');

const SECTION_PARAM: &str = "section";
const QUERY_PARAM: &str = "q";
const TAGS_PARAM: &str = "tags";
const FAV_PARAM: &str = "fav";

/// Parameters found in (or destined for) the address bar
///
/// `None` means the parameter is absent and the current value is kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UrlState {
    /// `Some(None)` is an explicit "no section expanded"
    pub section: Option<Option<String>>,
    pub query: Option<String>,
    pub tags: Option<Vec<String>>,
    pub favorites_only: Option<bool>,
}

impl UrlState {
    /// Parse a `location.search` string; a leading `?` is optional
    ///
    /// Unknown or malformed parameters are skipped one by one.
    pub fn parse(search: &str) -> Self {
        let search = search.strip_prefix('?').unwrap_or(search);
        let mut state = Self::default();

        for pair in search.split('&').filter(|p| !p.is_empty()) {
            let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = decode_component(raw_key);
            let value = decode_component(raw_value);

            match &*key {
                SECTION_PARAM if state.section.is_none() => {
                    state.section = Some(if value.is_empty() {
                        None
                    } else {
                        Some(value.into_owned())
                    });
                }
                QUERY_PARAM if state.query.is_none() => {
                    state.query = Some(value.into_owned());
                }
                TAGS_PARAM if state.tags.is_none() => {
                    let tags: Vec<String> = value
                        .split(',')
                        .filter(|t| !t.is_empty())
                        .map(str::to_string)
                        .collect();
                    state.tags = Some(tags);
                }
                FAV_PARAM if state.favorites_only.is_none() => {
                    state.favorites_only = Some(value == "1");
                }
                _ => {}
            }
        }
        state
    }

    /// Snapshot of the mirrored fields of `ui`
    pub fn from_ui(ui: &UiState) -> Self {
        Self {
            section: Some(ui.expanded_section.clone()),
            query: Some(ui.query.clone()).filter(|q| !q.is_empty()),
            tags: Some(ui.tags.clone()).filter(|t| !t.is_empty()),
            favorites_only: Some(true).filter(|_| ui.favorites_only),
        }
    }

    /// Overwrite only the fields that were present
    pub fn apply_to(self, ui: &mut UiState) {
        if let Some(section) = self.section {
            ui.expanded_section = section;
        }
        if let Some(query) = self.query {
            ui.query = query;
        }
        if let Some(tags) = self.tags {
            ui.tags = tags;
        }
        if let Some(fav) = self.favorites_only {
            ui.favorites_only = fav;
        }
    }

    /// Serialize without the leading `?`
    pub fn to_query_string(&self) -> String {
        let mut pairs: Vec<(&str, String)> = Vec::new();
        if let Some(section) = &self.section {
            pairs.push((SECTION_PARAM, section.clone().unwrap_or_default()));
        }
        if let Some(query) = self.query.as_ref().filter(|q| !q.is_empty()) {
            pairs.push((QUERY_PARAM, query.clone()));
        }
        if let Some(tags) = self.tags.as_ref().filter(|t| !t.is_empty()) {
            pairs.push((TAGS_PARAM, tags.join(",")));
        }
        if self.favorites_only == Some(true) {
            pairs.push((FAV_PARAM, "1".to_string()));
        }

        pairs
            .iter()
            .map(|(k, v)| format!("{}={}", k, utf8_percent_encode(v, QUERY_ENCODE_SET)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Hydrate a fresh state from `search`
pub fn hydrate(search: &str) -> UiState {
    let mut ui = UiState::default();
    UrlState::parse(search).apply_to(&mut ui);
    ui
}

/// Address bar target for `ui`: `{pathname}?{query}`, or the bare path
pub fn mirror_url(pathname: &str, ui: &UiState) -> String {
    let query = UrlState::from_ui(ui).to_query_string();
    if query.is_empty() {
        pathname.to_string()
    } else {
        format!("{}?{}", pathname, query)
    }
}

/// `application/x-www-form-urlencoded` decoding: `+` is a space
fn decode_component(raw: &str) -> Cow<'_, str> {
    if raw.contains('+') {
        let spaced = raw.replace('+', " ");
        Cow::Owned(percent_decode_str(&spaced).decode_utf8_lossy().into_owned())
    } else {
        percent_decode_str(raw).decode_utf8_lossy()
    }
}
