//! MotorMate Store - client-side state for the MotorMate front ends
//!
//! This crate provides:
//! - Generic list slices with query params, pagination metadata and fetch ordering
//! - Account session: sign-in, token restore, sign-out and profile
//! - URL query-string sync for list pages
//! - Settings loading and logging setup shared by the binaries

pub mod account;
pub mod error;
pub mod logging;
pub mod query;
pub mod settings;
pub mod slice;
pub mod slices;
pub mod storage;
pub mod store;
pub mod sync;

pub use account::{AccountSlice, AuthSession, AuthUser};
pub use error::{Result, StoreError, TokenError};
pub use logging::init_logging;
pub use query::{QueryParams, QueryPatch};
pub use settings::{App, Settings};
pub use slice::{FetchOrdering, FetchOutcome, FetchStatus, ResourceSlice, SliceState};
pub use storage::{FileStorage, MemoryStorage, Storage};
pub use store::{AdminStore, Dashboard, StoreDeps, StoreOptions, StorefrontStore};
pub use sync::{PageSync, PageUrl, ParamSpec, SearchBox};
