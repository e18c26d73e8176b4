//! Fire-and-forget logout requests over HTTP.
//!
//! A logout request is a `GET` to `/<endpoint>` under some origin. A
//! response in the 2xx range whose body is valid JSON counts as success;
//! anything else (an error status, a transport failure, a body that fails to
//! parse) is a failure. Failures are not returned to the caller. Each one is
//! written as a single diagnostic line to a [`DiagnosticSink`]:
//!
//! ```text
//! There was a problem with the fetch operation: Network response was not ok
//! ```
//!
//! # Usage
//!
//! The free functions in this module use a shared client that sends requests
//! to `http://localhost` and reports through [`TracingSink`]:
//!
//! ```no_run
//! logout::logout("auth/logout");
//! ```
//!
//! A [`LogoutClient`] can be configured with a different origin, redirect
//! policy, or sink:
//!
//! ```no_run
//! use logout::LogoutClient;
//!
//! let client = LogoutClient::builder()
//!     .origin("https://example.org")
//!     .build()?;
//!
//! client.logout("auth/logout");
//! # Ok::<(), logout::Error>(())
//! ```
//!
//! Three flavors of the operation are available, from least to most
//! visibility into the outcome:
//!
//! - [`LogoutClient::logout`] returns immediately and runs the request on a
//!   background thread.
//! - [`LogoutClient::logout_async`] is the same request as a future that
//!   resolves once the outcome has been reported.
//! - [`LogoutClient::send`] returns the outcome and reports nothing.
//!
//! # Logging
//!
//! Diagnostics from the default sink and request lifecycle events are
//! emitted through [tracing]. With the `log` crate's facade the same events
//! can be captured by any [log] implementation.
//!
//! [log]: https://docs.rs/log
//! [tracing]: https://docs.rs/tracing

#![deny(unsafe_code)]
#![warn(
    future_incompatible,
    missing_debug_implementations,
    missing_docs,
    rust_2018_idioms,
    unreachable_pub,
    unused
)]

mod client;
mod endpoint;
mod error;
mod sink;
mod task;

pub use crate::{
    client::{LogoutClient, LogoutClientBuilder, MAX_REDIRECTS},
    endpoint::Origin,
    error::Error,
    sink::{Diagnostic, DiagnosticSink, TracingSink, FETCH_PROBLEM_PREFIX},
};

/// Re-export of the redirect policy type used by [`LogoutClientBuilder`].
pub use isahc::config::RedirectPolicy;

/// Send a logout request in the background using the shared client.
///
/// Returns immediately. Failures are reported through [`TracingSink`].
///
/// See [`LogoutClient::logout`].
pub fn logout(endpoint: impl AsRef<str>) {
    match LogoutClient::shared() {
        Ok(client) => client.logout(endpoint),
        Err(e) => TracingSink.report(Diagnostic::new(&Error::Transport(e.clone()))),
    }
}

/// Send a logout request using the shared client, resolving once the outcome
/// has been reported.
///
/// See [`LogoutClient::logout_async`].
pub async fn logout_async(endpoint: &str) {
    match LogoutClient::shared() {
        Ok(client) => client.logout_async(endpoint).await,
        Err(e) => TracingSink.report(Diagnostic::new(&Error::Transport(e.clone()))),
    }
}

/// Send a logout request using the shared client and return its outcome.
///
/// See [`LogoutClient::send`].
pub async fn send(endpoint: &str) -> Result<(), Error> {
    LogoutClient::shared()
        .map_err(|e| Error::Transport(e.clone()))?
        .send(endpoint)
        .await
}
