//! List query parameters and partial updates to them

use std::collections::BTreeMap;

use motormate_client::SearchParams;

pub const DEFAULT_PAGE_NUMBER: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 5;

/// Wire names of the query parameters
pub mod keys {
    pub const PAGE_NUMBER: &str = "pageNumber";
    pub const PAGE_SIZE: &str = "pageSize";
    pub const QUERY: &str = "Query";
    pub const SEARCH: &str = "Search";
    pub const SEARCH_QUERY: &str = "SearchQuery";
    pub const ROLES: &str = "Roles";
}

/// Query parameters of one list view
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryParams {
    pub page_number: u32,
    pub page_size: u32,
    pub query: Option<String>,
    pub search: Option<String>,
    pub search_query: Option<String>,
    pub roles: Vec<String>,
    /// Resource-specific filters keyed by wire name
    pub filters: BTreeMap<String, String>,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }
}

impl QueryParams {
    pub fn with_page_size(page_size: u32) -> Self {
        Self {
            page_number: DEFAULT_PAGE_NUMBER,
            page_size: page_size.max(1),
            query: None,
            search: None,
            search_query: None,
            roles: Vec::new(),
            filters: BTreeMap::new(),
        }
    }

    /// Value of a free-text parameter by wire name
    pub fn text(&self, key: &str) -> Option<&str> {
        match key {
            keys::QUERY => self.query.as_deref(),
            keys::SEARCH => self.search.as_deref(),
            keys::SEARCH_QUERY => self.search_query.as_deref(),
            _ => self.filters.get(key).map(String::as_str),
        }
    }

    /// Shallow merge of `patch` over these params.
    ///
    /// Cleared fields fall back to `defaults`; page numbers and sizes below 1
    /// are clamped to 1.
    pub fn merged(&self, patch: &QueryPatch, defaults: &QueryParams) -> QueryParams {
        let mut next = self.clone();
        if let Some(page_number) = patch.page_number {
            next.page_number = page_number.max(1);
        }
        if let Some(page_size) = patch.page_size {
            next.page_size = page_size.max(1);
        }
        if let Some(query) = &patch.query {
            next.query = query.clone().or_else(|| defaults.query.clone());
        }
        if let Some(search) = &patch.search {
            next.search = search.clone().or_else(|| defaults.search.clone());
        }
        if let Some(search_query) = &patch.search_query {
            next.search_query = search_query
                .clone()
                .or_else(|| defaults.search_query.clone());
        }
        if let Some(roles) = &patch.roles {
            next.roles = if roles.is_empty() {
                defaults.roles.clone()
            } else {
                roles.clone()
            };
        }
        for (key, value) in &patch.filters {
            match value.clone().or_else(|| defaults.filters.get(key).cloned()) {
                Some(value) => next.filters.insert(key.clone(), value),
                None => next.filters.remove(key),
            };
        }
        next
    }

    /// Request parameters for a list call.
    ///
    /// Page 1 is never written; `Roles` is comma-joined.
    pub fn to_search_params(&self) -> SearchParams {
        let mut params = SearchParams::new();
        if self.page_number != DEFAULT_PAGE_NUMBER {
            params.append(keys::PAGE_NUMBER, self.page_number.to_string());
        }
        params.append(keys::PAGE_SIZE, self.page_size.to_string());

        let texts = [
            (keys::QUERY, &self.query),
            (keys::SEARCH, &self.search),
            (keys::SEARCH_QUERY, &self.search_query),
        ];
        for (key, value) in texts {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                params.append(key, value);
            }
        }
        if !self.roles.is_empty() {
            params.append(keys::ROLES, self.roles.join(","));
        }
        for (key, value) in &self.filters {
            params.append(key.as_str(), value.as_str());
        }
        params
    }
}

/// Partial update of [`QueryParams`].
///
/// `None` leaves a field untouched. For text fields `Some(None)` clears the
/// field back to its default; an empty role list does the same for roles.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryPatch {
    pub page_number: Option<u32>,
    pub page_size: Option<u32>,
    pub query: Option<Option<String>>,
    pub search: Option<Option<String>>,
    pub search_query: Option<Option<String>>,
    pub roles: Option<Vec<String>>,
    pub filters: BTreeMap<String, Option<String>>,
}

impl QueryPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn page_number(mut self, page_number: u32) -> Self {
        self.page_number = Some(page_number);
        self
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn query(self, value: impl Into<String>) -> Self {
        self.text(keys::QUERY, Some(value.into()))
    }

    pub fn search(self, value: impl Into<String>) -> Self {
        self.text(keys::SEARCH, Some(value.into()))
    }

    pub fn search_query(self, value: impl Into<String>) -> Self {
        self.text(keys::SEARCH_QUERY, Some(value.into()))
    }

    pub fn roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roles = Some(roles.into_iter().map(Into::into).collect());
        self
    }

    pub fn filter(self, key: &str, value: impl Into<String>) -> Self {
        self.text(key, Some(value.into()))
    }

    /// Clear the free-text parameter or filter named `key`
    pub fn clear(self, key: &str) -> Self {
        self.text(key, None)
    }

    /// Set or clear a free-text parameter or filter by wire name
    pub fn text(mut self, key: &str, value: Option<String>) -> Self {
        match key {
            keys::QUERY => self.query = Some(value),
            keys::SEARCH => self.search = Some(value),
            keys::SEARCH_QUERY => self.search_query = Some(value),
            _ => {
                self.filters.insert(key.to_string(), value);
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params_omit_page_number() {
        let params = QueryParams::default();
        let search = params.to_search_params();
        assert!(!search.contains(keys::PAGE_NUMBER));
        assert_eq!(search.get(keys::PAGE_SIZE), Some("5"));
        assert_eq!(search.len(), 1);
    }

    #[test]
    fn test_page_one_is_never_written() {
        let defaults = QueryParams::default();
        let params = defaults.merged(&QueryPatch::new().page_number(1), &defaults);
        assert!(!params.to_search_params().contains(keys::PAGE_NUMBER));

        let params = defaults.merged(&QueryPatch::new().page_number(3), &defaults);
        assert_eq!(params.to_search_params().get(keys::PAGE_NUMBER), Some("3"));
    }

    #[test]
    fn test_merge_clamps_to_one() {
        let defaults = QueryParams::default();
        let params = defaults.merged(&QueryPatch::new().page_number(0).page_size(0), &defaults);
        assert_eq!(params.page_number, 1);
        assert_eq!(params.page_size, 1);
    }

    #[test]
    fn test_set_then_clear_restores_default() {
        let defaults = QueryParams::default();
        let filtered = defaults.merged(
            &QueryPatch::new()
                .query("Sedan")
                .roles(["Admin", "Lessor"])
                .filter("Status", "Active"),
            &defaults,
        );
        assert_eq!(filtered.query.as_deref(), Some("Sedan"));
        assert_eq!(filtered.roles, vec!["Admin", "Lessor"]);
        assert_eq!(filtered.text("Status"), Some("Active"));

        let cleared = filtered.merged(
            &QueryPatch::new()
                .clear(keys::QUERY)
                .roles(Vec::<String>::new())
                .clear("Status"),
            &defaults,
        );
        assert_eq!(cleared, defaults);
    }

    #[test]
    fn test_search_params_rendering() {
        let defaults = QueryParams::default();
        let params = defaults.merged(
            &QueryPatch::new()
                .page_number(2)
                .query("SUV")
                .roles(["Admin", "Lessee"]),
            &defaults,
        );
        assert_eq!(
            params.to_search_params().to_query_string(),
            "pageNumber=2&pageSize=5&Query=SUV&Roles=Admin%2CLessee"
        );
    }

    #[test]
    fn test_empty_patch() {
        assert!(QueryPatch::new().is_empty());
        assert!(!QueryPatch::new().page_size(10).is_empty());
    }
}
