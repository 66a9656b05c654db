//! MotorMate Client - HTTP layer for the rental marketplace front ends
//!
//! This crate provides:
//! - HTTP client wrapper with bearer token injection and `x-pagination` unwrapping
//! - Central error interceptor mapping HTTP statuses to user notifications
//! - Resource API modules with typed methods for every backend endpoint
//! - Model types for API payloads

pub mod api;
pub mod config;
pub mod constants;
pub mod error;
pub mod http;
pub mod interceptor;
pub mod model;
pub mod notify;

pub use api::{ListRequest, MotormateApi, ResourceApi};
pub use config::{ErrorPolicy, HttpClientConfig};
pub use error::{ApiError, ErrorKind, ErrorResponse};
pub use http::{MotormateHttpClient, NoToken, ResponseBody, StaticToken, TokenProvider};
pub use model::*;
pub use notify::{
    Level, Navigator, NoopNavigator, Notification, NotificationQueue, Notifier, RouteRecorder,
    TracingNotifier,
};
