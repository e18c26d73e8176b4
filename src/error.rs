//! Types for error handling.

use http::StatusCode;
use std::{error::Error as StdError, fmt, io};

/// All the ways a logout request can fail.
///
/// The fire-and-forget operations never hand these to the caller; they are
/// formatted into a diagnostic and passed to a [`DiagnosticSink`] instead.
/// Only [`LogoutClient::send`] returns them.
///
/// [`DiagnosticSink`]: crate::DiagnosticSink
/// [`LogoutClient::send`]: crate::LogoutClient::send
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// A response arrived, but its status was outside of the 2xx range. The
    /// response body was not read.
    UnsuccessfulResponse(StatusCode),
    /// The request could not be completed by the HTTP client.
    Transport(isahc::Error),
    /// A successful response body was not valid JSON.
    InvalidJson(serde_json::Error),
    /// The endpoint did not form a valid request target.
    InvalidEndpoint(http::Error),
    /// The configured origin could not be used as a base for requests.
    InvalidOrigin(String),
    /// A background thread for a detached request could not be started.
    Spawn(io::Error),
}

impl Error {
    /// Returns true if a response was received but had a non-success status.
    pub fn is_unsuccessful_response(&self) -> bool {
        matches!(self, Error::UnsuccessfulResponse(_))
    }

    /// Returns true if the request never produced a response.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    /// Returns true if the response body failed to parse.
    pub fn is_invalid_json(&self) -> bool {
        matches!(self, Error::InvalidJson(_))
    }

    /// Get the response status, if a response was received.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::UnsuccessfulResponse(status) => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnsuccessfulResponse(_) => f.write_str("Network response was not ok"),
            Error::Transport(e) => fmt::Display::fmt(e, f),
            Error::InvalidJson(e) => fmt::Display::fmt(e, f),
            Error::InvalidEndpoint(e) => write!(f, "invalid endpoint: {}", e),
            Error::InvalidOrigin(origin) => write!(f, "invalid origin: {}", origin),
            Error::Spawn(e) => write!(f, "failed to spawn request thread: {}", e),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Transport(e) => Some(e),
            Error::InvalidJson(e) => Some(e),
            Error::InvalidEndpoint(e) => Some(e),
            Error::Spawn(e) => Some(e),
            _ => None,
        }
    }
}

#[doc(hidden)]
impl From<isahc::Error> for Error {
    fn from(error: isahc::Error) -> Error {
        Error::Transport(error)
    }
}

#[doc(hidden)]
impl From<http::Error> for Error {
    fn from(error: http::Error) -> Error {
        Error::InvalidEndpoint(error)
    }
}

#[doc(hidden)]
impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Error {
        Error::InvalidJson(error)
    }
}
