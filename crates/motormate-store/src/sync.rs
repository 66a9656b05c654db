//! Keeps a page URL and a slice's query params consistent
//!
//! The URL is the source of truth. Controls only write the URL; the next
//! [`PageSync::reconcile`] derives the slice params from it, and
//! [`PageSync::should_fetch`] decides whether the list needs fetching.

use std::fmt::{Display, Formatter};

use motormate_client::ResourceApi;
use tracing::debug;
use url::form_urlencoded;

use crate::error::Result;
use crate::query::{DEFAULT_PAGE_NUMBER, QueryPatch, keys};
use crate::slice::{FetchOutcome, ResourceSlice};

/// Delimiter between values of a list parameter such as `Roles`
pub const LIST_DELIMITER: &str = "%2C";

/// The search part of a page URL as decoded, ordered key/value pairs
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageUrl {
    pairs: Vec<(String, String)>,
}

impl PageUrl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `?a=1&b=2` (the leading `?` is optional)
    pub fn parse(search: &str) -> Self {
        let search = search.strip_prefix('?').unwrap_or(search);
        Self {
            pairs: form_urlencoded::parse(search.as_bytes())
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Replace every value of `key`, keeping the position of the first one
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.pairs.iter().position(|(k, _)| k == key) {
            Some(index) => {
                self.pairs[index].1 = value;
                let mut seen = false;
                self.pairs.retain(|(k, _)| {
                    if k != key {
                        return true;
                    }
                    let keep = !seen;
                    seen = true;
                    keep
                });
            }
            None => self.pairs.push((key.to_string(), value)),
        }
    }

    pub fn remove(&mut self, key: &str) {
        self.pairs.retain(|(k, _)| k != key);
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Form-urlencoded rendering without the leading `?`
    pub fn render(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }
}

impl Display for PageUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.pairs.is_empty() {
            return Ok(());
        }
        write!(f, "?{}", self.render())
    }
}

/// A URL parameter a list view recognizes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamSpec {
    PageNumber,
    PageSize,
    /// Free text, trimmed, under a wire key such as `Query`
    Text(&'static str),
    /// Values joined with [`LIST_DELIMITER`] under a wire key such as `Roles`
    List(&'static str),
    /// Plain filter value
    Filter(&'static str),
}

impl ParamSpec {
    pub fn key(&self) -> &'static str {
        match self {
            ParamSpec::PageNumber => keys::PAGE_NUMBER,
            ParamSpec::PageSize => keys::PAGE_SIZE,
            ParamSpec::Text(key) | ParamSpec::List(key) | ParamSpec::Filter(key) => key,
        }
    }
}

fn parse_positive(raw: Option<&str>) -> Option<u32> {
    raw.and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|n| *n >= 1)
}

/// Synchronizer for one list view
#[derive(Clone, Debug)]
pub struct PageSync {
    specs: Vec<ParamSpec>,
    started: bool,
}

impl PageSync {
    pub fn new(specs: impl IntoIterator<Item = ParamSpec>) -> Self {
        Self {
            specs: specs.into_iter().collect(),
            started: false,
        }
    }

    /// Page number, page size and `Query`: the common admin list view
    pub fn with_query() -> Self {
        Self::new([
            ParamSpec::PageNumber,
            ParamSpec::PageSize,
            ParamSpec::Text(keys::QUERY),
        ])
    }

    pub fn specs(&self) -> &[ParamSpec] {
        &self.specs
    }

    /// Whether filtering has started: a recognized parameter was seen in the
    /// URL or a control fired
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Derive slice params from the URL.
    ///
    /// Absent or default values are stripped from the URL and reset in the
    /// slice; everything else is parsed and committed. Returns whether the
    /// slice params changed.
    pub fn reconcile<A: ResourceApi>(&mut self, url: &mut PageUrl, slice: &ResourceSlice<A>) -> bool {
        let defaults = slice.default_params();
        let mut patch = QueryPatch::new();

        for spec in &self.specs {
            let key = spec.key();
            if url.contains(key) {
                self.started = true;
            }
            match spec {
                ParamSpec::PageNumber => match parse_positive(url.get(key)) {
                    Some(n) if n != DEFAULT_PAGE_NUMBER => patch.page_number = Some(n),
                    _ => {
                        url.remove(key);
                        patch.page_number = Some(DEFAULT_PAGE_NUMBER);
                    }
                },
                ParamSpec::PageSize => match parse_positive(url.get(key)) {
                    Some(n) if n != defaults.page_size => patch.page_size = Some(n),
                    _ => {
                        url.remove(key);
                        patch.page_size = Some(defaults.page_size);
                    }
                },
                ParamSpec::Text(_) => {
                    let value = url.get(key).map(str::trim).filter(|v| !v.is_empty());
                    match value {
                        Some(value) => patch = patch.text(key, Some(value.to_string())),
                        None => {
                            url.remove(key);
                            patch = patch.clear(key);
                        }
                    }
                }
                ParamSpec::Filter(_) => match url.get(key).filter(|v| !v.is_empty()) {
                    Some(value) => patch = patch.text(key, Some(value.to_string())),
                    None => {
                        url.remove(key);
                        patch = patch.clear(key);
                    }
                },
                ParamSpec::List(_) => {
                    let values: Vec<String> = url
                        .get(key)
                        .map(|raw| {
                            raw.split(LIST_DELIMITER)
                                .map(str::trim)
                                .filter(|v| !v.is_empty())
                                .map(str::to_string)
                                .collect()
                        })
                        .unwrap_or_default();
                    if values.is_empty() {
                        url.remove(key);
                    }
                    patch = list_patch(patch, key, values);
                }
            }
        }

        let changed = slice.set_params(&patch);
        debug!(slice = slice.name(), url = %url, changed, "reconciled");
        changed
    }

    /// Whether the slice should fetch now
    pub fn should_fetch<A: ResourceApi>(&self, url: &PageUrl, slice: &ResourceSlice<A>) -> bool {
        !slice.is_loading()
            && slice.is_stale()
            && (self.started || (slice.is_empty() && url.is_empty()))
    }

    /// Reconcile, then fetch if needed
    pub async fn drive<A: ResourceApi>(
        &mut self,
        url: &mut PageUrl,
        slice: &ResourceSlice<A>,
    ) -> Result<FetchOutcome> {
        self.reconcile(url, slice);
        if self.should_fetch(url, slice) {
            slice.fetch_list().await
        } else {
            Ok(FetchOutcome::Skipped)
        }
    }

    // ========================================================================
    // Controls: write the URL only
    // ========================================================================

    pub fn change_page(&mut self, url: &mut PageUrl, page_number: u32) {
        self.started = true;
        if page_number <= DEFAULT_PAGE_NUMBER {
            url.remove(keys::PAGE_NUMBER);
        } else {
            url.set(keys::PAGE_NUMBER, page_number.to_string());
        }
    }

    /// Commit a text search and go back to the first page
    pub fn submit_search(&mut self, url: &mut PageUrl, key: &str, text: &str) {
        self.started = true;
        match text.trim() {
            "" => url.remove(key),
            text => url.set(key, text),
        }
        url.remove(keys::PAGE_NUMBER);
    }

    /// Replace a list parameter and go back to the first page
    pub fn change_list<S: AsRef<str>>(&mut self, url: &mut PageUrl, key: &str, values: &[S]) {
        self.started = true;
        let joined = values
            .iter()
            .map(AsRef::as_ref)
            .filter(|v| !v.is_empty())
            .collect::<Vec<_>>()
            .join(LIST_DELIMITER);
        if joined.is_empty() {
            url.remove(key);
        } else {
            url.set(key, joined);
        }
        url.remove(keys::PAGE_NUMBER);
    }

    /// Sizes below 1 are ignored
    pub fn change_page_size(&mut self, url: &mut PageUrl, page_size: u32) {
        if page_size < 1 {
            return;
        }
        self.started = true;
        url.set(keys::PAGE_SIZE, page_size.to_string());
    }

    pub fn change_filter(&mut self, url: &mut PageUrl, key: &str, value: Option<&str>) {
        self.started = true;
        match value.filter(|v| !v.is_empty()) {
            Some(value) => url.set(key, value),
            None => url.remove(key),
        }
    }
}

fn list_patch(patch: QueryPatch, key: &str, values: Vec<String>) -> QueryPatch {
    if key == keys::ROLES {
        return patch.roles(values);
    }
    let joined = values.join(",");
    if joined.is_empty() {
        patch.clear(key)
    } else {
        patch.filter(key, joined)
    }
}

/// Draft text of a search input; only Enter or an explicit submit commits it
#[derive(Clone, Debug)]
pub struct SearchBox {
    key: &'static str,
    draft: String,
}

impl SearchBox {
    pub fn new(key: &'static str) -> Self {
        Self {
            key,
            draft: String::new(),
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn input(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Fill the draft from the committed URL value
    pub fn restore(&mut self, url: &PageUrl) {
        self.draft = url.get(self.key).unwrap_or_default().trim().to_string();
    }

    /// Handle a key press; returns whether the search was submitted
    pub fn key_down(&self, key: &str, sync: &mut PageSync, url: &mut PageUrl) -> bool {
        if key != "Enter" {
            return false;
        }
        self.submit(sync, url);
        true
    }

    pub fn submit(&self, sync: &mut PageSync, url: &mut PageUrl) {
        sync.submit_search(url, self.key, &self.draft);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_url_parse_and_render() {
        let url = PageUrl::parse("?pageNumber=2&Query=honda+wave");
        assert_eq!(url.get("pageNumber"), Some("2"));
        assert_eq!(url.get("Query"), Some("honda wave"));
        assert_eq!(url.render(), "pageNumber=2&Query=honda+wave");
        assert_eq!(url.to_string(), "?pageNumber=2&Query=honda+wave");
        assert_eq!(PageUrl::new().to_string(), "");
    }

    #[test]
    fn test_page_url_set_keeps_position() {
        let mut url = PageUrl::parse("a=1&b=2&a=3");
        url.set("a", "9");
        assert_eq!(url.render(), "a=9&b=2");
        url.set("c", "4");
        assert_eq!(url.render(), "a=9&b=2&c=4");
    }

    #[test]
    fn test_list_values_keep_literal_delimiter() {
        let mut url = PageUrl::new();
        let mut sync = PageSync::new([ParamSpec::List(keys::ROLES)]);
        sync.change_list(&mut url, keys::ROLES, &["Admin", "Lessor"]);
        assert_eq!(url.get(keys::ROLES), Some("Admin%2CLessor"));
        assert_eq!(url.render(), "Roles=Admin%252CLessor");
        assert_eq!(PageUrl::parse(&url.render()), url);
    }

    #[test]
    fn test_controls_write_url() {
        let mut url = PageUrl::new();
        let mut sync = PageSync::with_query();
        assert!(!sync.is_started());

        sync.change_page(&mut url, 3);
        assert_eq!(url.get("pageNumber"), Some("3"));
        assert!(sync.is_started());

        sync.submit_search(&mut url, keys::QUERY, "  scooter ");
        assert_eq!(url.get(keys::QUERY), Some("scooter"));
        assert!(!url.contains("pageNumber"));

        sync.change_page(&mut url, 1);
        assert!(!url.contains("pageNumber"));

        sync.change_page_size(&mut url, 0);
        assert!(!url.contains("pageSize"));
        sync.change_page_size(&mut url, 20);
        assert_eq!(url.get("pageSize"), Some("20"));

        sync.submit_search(&mut url, keys::QUERY, "   ");
        assert!(!url.contains(keys::QUERY));

        sync.change_filter(&mut url, "Status", Some("Active"));
        assert_eq!(url.get("Status"), Some("Active"));
        sync.change_filter(&mut url, "Status", None);
        assert!(!url.contains("Status"));
    }

    #[test]
    fn test_search_box_submits_only_on_enter() {
        let mut url = PageUrl::parse("pageNumber=4");
        let mut sync = PageSync::with_query();
        let mut search = SearchBox::new(keys::QUERY);

        search.input("sedan");
        assert!(!search.key_down("s", &mut sync, &mut url));
        assert!(!url.contains(keys::QUERY));
        assert_eq!(url.get("pageNumber"), Some("4"));

        assert!(search.key_down("Enter", &mut sync, &mut url));
        assert_eq!(url.get(keys::QUERY), Some("sedan"));
        assert!(!url.contains("pageNumber"));

        let mut restored = SearchBox::new(keys::QUERY);
        restored.restore(&url);
        assert_eq!(restored.draft(), "sedan");
    }
}
