//! Where failures of fire-and-forget requests are reported.

use crate::Error;
use std::fmt;

/// Prefix of every diagnostic line.
pub const FETCH_PROBLEM_PREFIX: &str = "There was a problem with the fetch operation:";

/// A single failure report, ready to be written out.
///
/// The [`Display`](fmt::Display) implementation produces the full
/// diagnostic line: [`FETCH_PROBLEM_PREFIX`] followed by a description of
/// the underlying error.
#[derive(Clone, Copy, Debug)]
pub struct Diagnostic<'a> {
    error: &'a Error,
}

impl<'a> Diagnostic<'a> {
    pub(crate) fn new(error: &'a Error) -> Self {
        Self { error }
    }

    /// Get the error being reported.
    pub fn error(&self) -> &'a Error {
        self.error
    }
}

impl fmt::Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", FETCH_PROBLEM_PREFIX, self.error)
    }
}

/// Destination for diagnostics produced by failed logout requests.
///
/// Each failed request results in exactly one call to [`report`]; successful
/// requests never call it. Implementations are shared between threads, since
/// detached requests report from the background thread they run on.
///
/// Any `Fn(Diagnostic<'_>)` closure that is `Send + Sync` is a sink.
///
/// [`report`]: DiagnosticSink::report
pub trait DiagnosticSink: Send + Sync + 'static {
    /// Report a failed request.
    fn report(&self, diagnostic: Diagnostic<'_>);
}

impl<F> DiagnosticSink for F
where
    F: Fn(Diagnostic<'_>) + Send + Sync + 'static,
{
    fn report(&self, diagnostic: Diagnostic<'_>) {
        (self)(diagnostic)
    }
}

/// The default sink. Emits each diagnostic as an `ERROR` level `tracing`
/// event, which is also forwarded to the `log` crate when no `tracing`
/// subscriber is installed.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: Diagnostic<'_>) {
        tracing::error!("{}", diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::StatusCode;
    use std::sync::{Arc, Mutex};

    #[test]
    fn diagnostic_line_has_prefix_and_error() {
        let error = Error::UnsuccessfulResponse(StatusCode::BAD_GATEWAY);

        assert_eq!(
            Diagnostic::new(&error).to_string(),
            "There was a problem with the fetch operation: Network response was not ok"
        );
    }

    #[test]
    fn closures_are_sinks() {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let sink: Box<dyn DiagnosticSink> = Box::new({
            let lines = lines.clone();
            move |diagnostic: Diagnostic<'_>| lines.lock().unwrap().push(diagnostic.to_string())
        });

        let error = Error::InvalidOrigin("nowhere".into());
        sink.report(Diagnostic::new(&error));

        assert_eq!(
            *lines.lock().unwrap(),
            ["There was a problem with the fetch operation: invalid origin: nowhere"]
        );
    }
}
