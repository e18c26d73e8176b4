//! The logout client implementation.

use crate::{
    endpoint::Origin,
    sink::{Diagnostic, DiagnosticSink, TracingSink},
    task, Error,
};
use http::Request;
use isahc::{
    config::{Configurable, RedirectPolicy},
    AsyncReadResponseExt, HttpClient,
};
use once_cell::sync::Lazy;
use serde::de::IgnoredAny;
use std::{fmt, sync::Arc};

/// Number of redirects followed by default before a request fails, the same
/// limit browsers apply.
pub const MAX_REDIRECTS: u32 = 20;

/// A builder for [`LogoutClient`] instances with custom behavior.
///
/// # Examples
///
/// ```no_run
/// use logout::LogoutClient;
///
/// let client = LogoutClient::builder()
///     .origin("https://accounts.example.org")
///     .sink(|diagnostic: logout::Diagnostic<'_>| eprintln!("{}", diagnostic))
///     .build()?;
///
/// client.logout("auth/logout");
/// # Ok::<(), logout::Error>(())
/// ```
pub struct LogoutClientBuilder {
    origin: Origin,
    redirect_policy: RedirectPolicy,
    sink: Arc<dyn DiagnosticSink>,
    error: Option<Error>,
}

impl Default for LogoutClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LogoutClientBuilder {
    /// Create a new builder. Requests go to `http://localhost`, follow up to
    /// [`MAX_REDIRECTS`] redirects, and report failures through
    /// [`TracingSink`] unless configured otherwise.
    pub fn new() -> Self {
        Self {
            origin: Origin::default(),
            redirect_policy: RedirectPolicy::Limit(MAX_REDIRECTS),
            sink: Arc::new(TracingSink),
            error: None,
        }
    }

    /// Set the origin that endpoints are resolved against, for example
    /// `https://example.org`. Only the scheme and authority are kept.
    ///
    /// An invalid origin is reported when [`build`](Self::build) is called.
    pub fn origin(mut self, origin: impl AsRef<str>) -> Self {
        match Origin::parse(origin.as_ref()) {
            Ok(origin) => self.origin = origin,
            Err(e) => {
                self.error.get_or_insert(e);
            }
        }
        self
    }

    /// Set how redirect responses are handled. The status of the final
    /// response decides whether a request succeeded.
    ///
    /// The default is [`RedirectPolicy::Limit`] with [`MAX_REDIRECTS`]. Going
    /// over the limit fails the request.
    pub fn redirect_policy(mut self, policy: RedirectPolicy) -> Self {
        self.redirect_policy = policy;
        self
    }

    /// Set where diagnostics for failed requests are sent.
    pub fn sink(mut self, sink: impl DiagnosticSink) -> Self {
        self.sink = Arc::new(sink);
        self
    }

    /// Build a client from this configuration.
    ///
    /// Fails if a configured value was invalid or the underlying HTTP client
    /// could not be initialized.
    pub fn build(self) -> Result<LogoutClient, Error> {
        if let Some(e) = self.error {
            return Err(e);
        }

        Ok(self.into_client()?)
    }

    fn into_client(self) -> Result<LogoutClient, isahc::Error> {
        let http = HttpClient::builder()
            .redirect_policy(self.redirect_policy)
            .build()?;

        Ok(LogoutClient {
            inner: Arc::new(Inner {
                origin: self.origin,
                http,
                sink: self.sink,
            }),
        })
    }
}

impl fmt::Debug for LogoutClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogoutClientBuilder")
            .field("origin", &self.origin)
            .field("error", &self.error)
            .finish()
    }
}

/// Sends logout requests to endpoints under a single origin.
///
/// Cloning a client is cheap and clones share the same underlying HTTP
/// client and diagnostic sink.
#[derive(Clone)]
pub struct LogoutClient {
    inner: Arc<Inner>,
}

struct Inner {
    origin: Origin,
    http: HttpClient,
    sink: Arc<dyn DiagnosticSink>,
}

impl LogoutClient {
    /// Create a client with the default configuration.
    pub fn new() -> Result<Self, Error> {
        LogoutClientBuilder::default().build()
    }

    /// Create a new [`LogoutClientBuilder`] for building a custom client.
    pub fn builder() -> LogoutClientBuilder {
        LogoutClientBuilder::default()
    }

    /// Get a reference to the global client used by the free functions.
    pub(crate) fn shared() -> Result<&'static Self, &'static isahc::Error> {
        static SHARED: Lazy<Result<LogoutClient, isahc::Error>> =
            Lazy::new(|| LogoutClientBuilder::default().into_client());

        SHARED.as_ref()
    }

    /// Get the origin this client sends requests to.
    pub fn origin(&self) -> &Origin {
        &self.inner.origin
    }

    /// Send a logout request and return its outcome.
    ///
    /// Issues `GET /<endpoint>` against the client's origin with no body and
    /// no extra headers. A response outside of the 2xx range fails with
    /// [`Error::UnsuccessfulResponse`] without its body being read. A
    /// successful response body must be valid JSON; the parsed value is
    /// discarded.
    ///
    /// Nothing is reported to the diagnostic sink.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn send(&self, endpoint: &str) -> Result<(), Error> {
        let uri = self.inner.origin.target(endpoint)?;

        tracing::debug!(%uri, "sending logout request");

        let request = Request::get(uri).body(())?;
        let mut response = self.inner.http.send_async(request).await?;
        let status = response.status();

        if !status.is_success() {
            return Err(Error::UnsuccessfulResponse(status));
        }

        response.json::<IgnoredAny>().await?;

        tracing::debug!(%status, "logout request succeeded");

        Ok(())
    }

    /// Send a logout request, reporting any failure to the diagnostic sink.
    ///
    /// The returned future resolves once the outcome has been handled, but
    /// the outcome itself is not exposed.
    pub async fn logout_async(&self, endpoint: &str) {
        if let Err(e) = self.send(endpoint).await {
            self.report(&e);
        }
    }

    /// Send a logout request in the background and return immediately.
    ///
    /// Failures are reported to the diagnostic sink; the caller never sees
    /// them.
    pub fn logout(&self, endpoint: impl AsRef<str>) {
        let client = self.clone();
        let endpoint = endpoint.as_ref().to_owned();

        if let Err(e) = task::detach(async move { client.logout_async(&endpoint).await }) {
            self.report(&Error::Spawn(e));
        }
    }

    fn report(&self, error: &Error) {
        self.inner.sink.report(Diagnostic::new(error));
    }
}

impl fmt::Debug for LogoutClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogoutClient")
            .field("origin", &self.inner.origin)
            .finish()
    }
}
