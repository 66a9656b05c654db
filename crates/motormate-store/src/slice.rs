//! Generic list-state slice
//!
//! A [`ResourceSlice`] owns the normalized collection of one resource plus the
//! list bookkeeping a view needs: the in-flight flag, the query parameters,
//! the pagination metadata of the last page, and whether the current
//! parameters have been fetched yet.

use std::collections::HashMap;
use std::sync::Arc;

use motormate_client::{Entity, ListRequest, MetaData, Notifier, ResourceApi, TracingNotifier};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::Result;
use crate::query::{QueryParams, QueryPatch};

/// Lifecycle of the list fetch
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Errored,
}

/// How overlapping list fetches are resolved
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchOrdering {
    /// Whichever response resolves last overwrites the state
    #[default]
    LastResolvedWins,
    /// Responses to requests issued before the latest one are dropped
    LatestIssuedWins,
}

/// Result of a `fetch_list` call that did not fail
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The response was committed
    Fetched,
    /// A fetch was already in flight; nothing was sent
    Skipped,
    /// The response arrived for superseded parameters and was dropped
    Discarded,
}

/// State held by a slice
#[derive(Clone, Debug)]
pub struct SliceState<T> {
    pub entities: HashMap<String, T>,
    /// Ids of the most recently fetched page, in server order
    pub page_ids: Vec<String>,
    /// True while a list fetch is in flight
    pub loaded: bool,
    pub params: QueryParams,
    pub meta_data: Option<MetaData>,
    /// The current params have not been attempted yet
    pub stale: bool,
    pub status: FetchStatus,
    /// Owning user id for per-user lists
    pub scope: Option<String>,
    generation: u64,
}

impl<T> SliceState<T> {
    fn new(params: QueryParams) -> Self {
        Self {
            entities: HashMap::new(),
            page_ids: Vec::new(),
            loaded: false,
            params,
            meta_data: None,
            stale: true,
            status: FetchStatus::Idle,
            scope: None,
            generation: 0,
        }
    }

    /// Mark the params as changed: the list must be fetched again
    fn invalidate(&mut self) {
        self.stale = true;
        self.meta_data = None;
        self.loaded = false;
        self.status = FetchStatus::Idle;
        self.generation += 1;
    }
}

/// Normalized collection of one resource with its list state
pub struct ResourceSlice<A: ResourceApi> {
    name: &'static str,
    api: A,
    defaults: QueryParams,
    ordering: FetchOrdering,
    notifier: Arc<dyn Notifier>,
    state: RwLock<SliceState<A::Item>>,
}

impl<A: ResourceApi> ResourceSlice<A> {
    pub fn new(name: &'static str, api: A) -> Self {
        let defaults = QueryParams::default();
        Self {
            name,
            api,
            state: RwLock::new(SliceState::new(defaults.clone())),
            defaults,
            ordering: FetchOrdering::default(),
            notifier: Arc::new(TracingNotifier),
        }
    }

    /// Change the default page size (also resets the current params)
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.defaults = QueryParams::with_page_size(page_size);
        self.state.get_mut().params = self.defaults.clone();
        self
    }

    pub fn with_ordering(mut self, ordering: FetchOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    /// Sink for the success messages of create, update and delete
    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn ordering(&self) -> FetchOrdering {
        self.ordering
    }

    pub(crate) fn notifier(&self) -> &Arc<dyn Notifier> {
        &self.notifier
    }

    // ========================================================================
    // Selectors
    // ========================================================================

    /// Clone of the whole state
    pub fn snapshot(&self) -> SliceState<A::Item> {
        self.state.read().clone()
    }

    pub fn get(&self, id: &str) -> Option<A::Item> {
        self.state.read().entities.get(id).cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.state.read().entities.contains_key(id)
    }

    /// Every entity, in no particular order
    pub fn all(&self) -> Vec<A::Item> {
        self.state.read().entities.values().cloned().collect()
    }

    /// Entities of the current page in server order
    pub fn page(&self) -> Vec<A::Item> {
        let state = self.state.read();
        state
            .page_ids
            .iter()
            .filter_map(|id| state.entities.get(id).cloned())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.state.read().entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().entities.is_empty()
    }

    pub fn is_loading(&self) -> bool {
        self.state.read().loaded
    }

    pub fn is_stale(&self) -> bool {
        self.state.read().stale
    }

    pub fn status(&self) -> FetchStatus {
        self.state.read().status
    }

    pub fn params(&self) -> QueryParams {
        self.state.read().params.clone()
    }

    pub fn default_params(&self) -> &QueryParams {
        &self.defaults
    }

    pub fn meta_data(&self) -> Option<MetaData> {
        self.state.read().meta_data
    }

    pub fn scope(&self) -> Option<String> {
        self.state.read().scope.clone()
    }

    // ========================================================================
    // Parameters
    // ========================================================================

    /// Merge `patch` into the params; returns whether they changed
    pub fn set_params(&self, patch: &QueryPatch) -> bool {
        let mut state = self.state.write();
        let next = state.params.merged(patch, &self.defaults);
        if next == state.params {
            return false;
        }
        debug!(slice = self.name, ?next, "params changed");
        state.params = next;
        state.invalidate();
        true
    }

    /// Back to default params; returns whether they changed
    pub fn reset_params(&self) -> bool {
        let mut state = self.state.write();
        if state.params == self.defaults {
            return false;
        }
        debug!(slice = self.name, "params reset");
        state.params = self.defaults.clone();
        state.invalidate();
        true
    }

    /// Point a per-user list at another owner, dropping what was loaded
    pub fn set_scope(&self, scope: Option<String>) -> bool {
        let mut state = self.state.write();
        if state.scope == scope {
            return false;
        }
        debug!(slice = self.name, ?scope, "scope changed");
        state.scope = scope;
        state.entities.clear();
        state.page_ids.clear();
        state.invalidate();
        true
    }

    // ========================================================================
    // Async operations
    // ========================================================================

    /// Fetch the page described by the current params.
    ///
    /// Skipped while another fetch is in flight.
    pub async fn fetch_list(&self) -> Result<FetchOutcome> {
        let (request, generation) = {
            let mut state = self.state.write();
            if state.loaded {
                debug!(slice = self.name, "fetch already in flight, skipping");
                return Ok(FetchOutcome::Skipped);
            }
            state.loaded = true;
            state.status = FetchStatus::Loading;
            let request = ListRequest {
                scope: state.scope.clone(),
                params: state.params.to_search_params(),
            };
            (request, state.generation)
        };

        debug!(slice = self.name, params = %request.params.to_query_string(), "fetching list");
        let result = self.api.list(&request).await;

        let mut state = self.state.write();
        if self.ordering == FetchOrdering::LatestIssuedWins && generation != state.generation {
            debug!(slice = self.name, generation, "dropping superseded response");
            return Ok(FetchOutcome::Discarded);
        }

        match result {
            Ok(page) => {
                state.page_ids = page.items.iter().map(|item| item.id().to_string()).collect();
                for item in page.items {
                    state.entities.insert(item.id().to_string(), item);
                }
                state.meta_data = page.meta_data;
                state.stale = false;
                state.loaded = false;
                state.status = FetchStatus::Loaded;
                debug!(
                    slice = self.name,
                    count = state.page_ids.len(),
                    "list committed"
                );
                Ok(FetchOutcome::Fetched)
            }
            Err(e) => {
                warn!(slice = self.name, "list fetch failed: {}", e);
                // Attempted: only a param or scope change fetches again
                state.stale = false;
                state.loaded = false;
                state.status = FetchStatus::Errored;
                Err(e.into())
            }
        }
    }

    /// Fetch one entity and upsert it
    pub async fn fetch_details(&self, key: &str) -> Result<A::Item> {
        let item = self.api.details(key).await?;
        self.upsert(item.clone());
        Ok(item)
    }

    /// Create an entity; the server record is inserted on success
    pub async fn create(&self, values: &Value) -> Result<A::Item> {
        let item = self.api.create(values).await?;
        {
            let mut state = self.state.write();
            let id = item.id().to_string();
            if !state.page_ids.contains(&id) {
                state.page_ids.push(id.clone());
            }
            state.entities.insert(id, item.clone());
        }
        self.notifier
            .success(&format!("{} created successfully", self.name));
        Ok(item)
    }

    /// Update an entity; the server record replaces the local one on success
    pub async fn update(&self, key: &str, values: &Value) -> Result<A::Item> {
        let item = self.api.update(key, values).await?;
        self.upsert(item.clone());
        self.notifier
            .success(&format!("{} updated successfully", self.name));
        Ok(item)
    }

    /// Delete an entity by its route key; removed locally on success
    pub async fn delete(&self, key: &str) -> Result<()> {
        self.api.delete(key).await?;
        self.remove_local(key);
        self.notifier
            .success(&format!("{} deleted successfully", self.name));
        Ok(())
    }

    // ========================================================================
    // Local mutations
    // ========================================================================

    /// Insert or replace an entity without touching the page order
    pub fn upsert(&self, item: A::Item) {
        self.state
            .write()
            .entities
            .insert(item.id().to_string(), item);
    }

    /// Drop the entity whose id or route key is `key`
    pub fn remove_local(&self, key: &str) -> Option<A::Item> {
        let mut state = self.state.write();
        let id = if state.entities.contains_key(key) {
            key.to_string()
        } else {
            state
                .entities
                .iter()
                .find(|(_, item)| self.api.route_key(item) == key)
                .map(|(id, _)| id.clone())?
        };
        state.page_ids.retain(|page_id| *page_id != id);
        state.entities.remove(&id)
    }

    /// Apply `change` to one entity in place; returns false if absent
    pub fn modify<F>(&self, id: &str, change: F) -> bool
    where
        F: FnOnce(&mut A::Item),
    {
        match self.state.write().entities.get_mut(id) {
            Some(item) => {
                change(item);
                true
            }
            None => false,
        }
    }

    /// Find the first entity matching `predicate`
    pub fn find<P>(&self, predicate: P) -> Option<A::Item>
    where
        P: Fn(&A::Item) -> bool,
    {
        self.state
            .read()
            .entities
            .values()
            .find(|item| predicate(item))
            .cloned()
    }
}
