// Common model types

use std::fmt::Debug;

use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// A record stored in a normalized collection, keyed by its identifier
pub trait Entity: Serialize + DeserializeOwned + Clone + Debug + Send + Sync + 'static {
    fn id(&self) -> &str;
}

/// Pagination metadata carried in the `x-pagination` response header.
///
/// The server writes `itemsPerPage`/`totalItems`; both those and the
/// `pageSize`/`totalCount` spellings are accepted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaData {
    pub current_page: u32,
    pub total_pages: u32,
    #[serde(alias = "itemsPerPage")]
    pub page_size: u32,
    #[serde(alias = "totalItems")]
    pub total_count: u64,
}

/// List payload after the pagination header has been unwrapped
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    /// `None` when the server sent no pagination header
    pub meta_data: Option<MetaData>,
}

impl<T> PaginatedResponse<T> {
    pub fn new(items: Vec<T>, meta_data: Option<MetaData>) -> Self {
        Self { items, meta_data }
    }
}

/// Ordered request query parameters (a `URLSearchParams` equivalent)
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SearchParams(Vec<(String, String)>);

impl SearchParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.push((key.into(), value.into()));
    }

    /// Replace every value for `key` with a single one
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.remove(key);
        self.append(key, value);
    }

    pub fn remove(&mut self, key: &str) {
        self.0.retain(|(k, _)| k != key);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Form-urlencoded rendering, e.g. `pageSize=5&Query=suv`
    pub fn to_query_string(&self) -> String {
        serde_urlencoded::to_string(&self.0).unwrap_or_default()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for SearchParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Uploaded image reference
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Image {
    pub image_url: String,
    pub public_id: String,
}
