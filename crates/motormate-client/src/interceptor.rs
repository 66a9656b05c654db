//! Central error interceptor
//!
//! Runs once for every failed response, before the failure is handed back to
//! the caller. The side effects are a notification and, for server faults, a
//! route change.

use tracing::debug;

use crate::config::ErrorPolicy;
use crate::constants::SERVER_ERROR_ROUTE;
use crate::error::ErrorResponse;
use crate::notify::{Navigator, Notifier};

/// Apply the interceptor table of `policy` to a failed response
pub fn intercept(
    policy: ErrorPolicy,
    response: &ErrorResponse,
    notifier: &dyn Notifier,
    navigator: &dyn Navigator,
) {
    debug!(status = response.status, ?policy, "intercepting failed response");
    match policy {
        ErrorPolicy::Admin => admin(response, notifier, navigator),
        ErrorPolicy::Storefront => storefront(response, notifier, navigator),
    }
}

fn admin(response: &ErrorResponse, notifier: &dyn Notifier, navigator: &dyn Navigator) {
    match response.status {
        400 => {
            let messages = response.validation_messages();
            if !messages.is_empty() {
                notifier.error(&messages.join(","));
            }
            if let Some(message) = response.message() {
                notifier.error(message);
            }
        }
        401 => {
            if let Some(title) = response.title() {
                notifier.error(title);
            }
        }
        403 | 404 | 409 => {
            if let Some(message) = response.message() {
                notifier.error(message);
            }
        }
        500 => {
            if let Some(message) = response.message() {
                notifier.error(message);
            }
            navigator.navigate(SERVER_ERROR_ROUTE);
        }
        _ => {}
    }
}

fn storefront(response: &ErrorResponse, notifier: &dyn Notifier, navigator: &dyn Navigator) {
    match response.status {
        400 => {
            if let Some(first) = response.validation_messages().first() {
                notifier.error(first);
            }
        }
        401 | 403 | 404 => {
            if let Some(title) = response.title() {
                notifier.error(title);
            }
        }
        500 => navigator.navigate(SERVER_ERROR_ROUTE),
        _ => {}
    }
}
