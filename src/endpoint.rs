//! Building request targets out of an origin and a caller-supplied endpoint.

use crate::Error;
use http::uri::{Authority, Scheme, Uri};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use std::{fmt, str::FromStr};

/// Bytes escaped in the path of a target, in addition to non-ASCII.
const PATH: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Bytes escaped in the query of a target, in addition to non-ASCII.
const QUERY: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'\'');

/// The scheme and authority that root-relative endpoints are resolved
/// against.
///
/// Any path, query, or fragment on the string an origin is parsed from is
/// dropped, the same way a root-relative reference ignores the path of its
/// base.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Origin {
    scheme: Scheme,
    authority: Authority,
}

impl Origin {
    /// Parse an origin from an absolute URI such as `https://example.org`.
    pub fn parse(s: &str) -> Result<Self, Error> {
        let uri = s
            .parse::<Uri>()
            .map_err(|e| Error::InvalidOrigin(format!("{}: {}", s, e)))?;

        let parts = uri.into_parts();

        match (parts.scheme, parts.authority) {
            (Some(scheme), Some(authority)) => Ok(Self { scheme, authority }),
            _ => Err(Error::InvalidOrigin(format!(
                "{}: scheme and host are required",
                s
            ))),
        }
    }

    /// Resolve `/<endpoint>` against this origin.
    ///
    /// The endpoint is not validated or normalized. Characters that cannot
    /// appear in a URI are percent-encoded (a space becomes `%20`, `é`
    /// becomes `%C3%A9`), existing escapes are left alone, and anything after
    /// a `#` is dropped since fragments are never sent.
    pub fn target(&self, endpoint: &str) -> Result<Uri, Error> {
        Ok(Uri::builder()
            .scheme(self.scheme.clone())
            .authority(self.authority.clone())
            .path_and_query(encode_path_and_query(endpoint))
            .build()?)
    }
}

fn encode_path_and_query(endpoint: &str) -> String {
    let endpoint = endpoint.split('#').next().unwrap_or_default();

    let mut encoded = String::with_capacity(endpoint.len() + 1);
    encoded.push('/');

    match endpoint.split_once('?') {
        Some((path, query)) => {
            encoded.extend(utf8_percent_encode(path, PATH));
            encoded.push('?');
            encoded.extend(utf8_percent_encode(query, QUERY));
        }
        None => encoded.extend(utf8_percent_encode(endpoint, PATH)),
    }

    encoded
}

impl Default for Origin {
    fn default() -> Self {
        Self {
            scheme: Scheme::HTTP,
            authority: Authority::from_static("localhost"),
        }
    }
}

impl FromStr for Origin {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", self.scheme, self.authority)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_prefixes_endpoint_with_single_slash() {
        let origin = Origin::parse("http://example.org").unwrap();

        assert_eq!(
            origin.target("auth/logout").unwrap(),
            "http://example.org/auth/logout"
        );
    }

    #[test]
    fn base_path_is_discarded() {
        let origin = Origin::parse("https://example.org:8443/app/page?x=1").unwrap();

        assert_eq!(origin.to_string(), "https://example.org:8443");
        assert_eq!(
            origin.target("logout").unwrap(),
            "https://example.org:8443/logout"
        );
    }

    #[test]
    fn endpoint_is_concatenated_verbatim() {
        let origin = Origin::default();

        assert_eq!(origin.target("").unwrap(), "http://localhost/");
        assert_eq!(
            origin.target("session/end?all=1").unwrap(),
            "http://localhost/session/end?all=1"
        );
        assert_eq!(origin.target("/double").unwrap().path(), "//double");
    }

    #[test]
    fn characters_outside_uri_grammar_are_percent_encoded() {
        let origin = Origin::default();

        assert_eq!(origin.target("auth/log out").unwrap().path(), "/auth/log%20out");
        assert_eq!(origin.target("auth/café").unwrap().path(), "/auth/caf%C3%A9");
        assert_eq!(origin.target("a{b}`<c>").unwrap().path(), "/a%7Bb%7D%60%3Cc%3E");
        assert_eq!(
            origin.target("end?who=jo smith&x='1'").unwrap().query(),
            Some("who=jo%20smith&x=%271%27")
        );
    }

    #[test]
    fn existing_escapes_and_fragments() {
        let origin = Origin::default();

        assert_eq!(origin.target("a%20b").unwrap().path(), "/a%20b");
        assert_eq!(
            origin.target("logout?next=home#top").unwrap(),
            "http://localhost/logout?next=home"
        );
    }

    #[test]
    fn origin_requires_scheme_and_host() {
        assert!(matches!(
            Origin::parse("/relative/only"),
            Err(Error::InvalidOrigin(_))
        ));
        assert!(matches!(
            Origin::parse("not a uri"),
            Err(Error::InvalidOrigin(_))
        ));
    }
}
