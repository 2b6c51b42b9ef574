//! Per-request context.
//!
//! Built once at the HTTP boundary from the raw request URI and the few request
//! facts routing depends on, then passed explicitly to the resolver.

use serde::Serialize;
use std::borrow::Cow;

use crate::path::{normalize_path, split_segments};

/// Immutable request facts used by route resolution
///
/// # Examples
///
/// ```
/// use fsroute::RequestContext;
///
/// let request = RequestContext::new("/dashboard/users/?tab=active#top");
/// assert_eq!(request.pathname(), "dashboard/users");
/// assert_eq!(request.segments(), vec!["dashboard", "users"]);
///
/// let request = RequestContext::new("/my-app/about").with_base_path("my-app");
/// assert_eq!(request.pathname(), "about");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestContext {
    uri: String,
    pathname: String,
    segments: Vec<String>,
    same_origin: bool,
}

impl RequestContext {
    /// Creates a context from the raw request URI
    ///
    /// Query string and fragment are dropped and the raw path is split on `/`
    /// (no empty segments). Each segment is then percent-decoded on its own, so an
    /// encoded `%2F` stays inside its segment; invalid UTF-8 keeps the raw text.
    pub fn new(uri: impl Into<String>) -> Self {
        let uri = uri.into();
        let segments = segments_of(path_part(&uri));

        Self {
            pathname: segments.join("/"),
            segments,
            uri,
            same_origin: false,
        }
    }

    /// Strips the base path the application is mounted under
    ///
    /// Everything up to and including the last whole-segment occurrence of `base`
    /// is removed. A URI that does not contain it resolves as the root route.
    pub fn with_base_path(mut self, base: &str) -> Self {
        let base = base.trim_matches('/');
        if base.is_empty() {
            return self;
        }

        let path = path_part(&self.uri);
        self.segments = strip_base(path, base).map(segments_of).unwrap_or_default();
        self.pathname = self.segments.join("/");
        self
    }

    /// Marks whether the request is a same-origin fetch (`Sec-Fetch-Site: same-origin`)
    pub fn with_same_origin(mut self, same_origin: bool) -> Self {
        self.same_origin = same_origin;
        self
    }

    /// Raw request URI as received
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Decoded segments joined with `/`; `""` is the root route
    pub fn pathname(&self) -> &str {
        &self.pathname
    }

    /// Decoded request segments, the unit every matcher compares
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn same_origin(&self) -> bool {
        self.same_origin
    }

    /// Paths containing `_` are private: only same-origin fetches may reach them
    pub fn is_private(&self) -> bool {
        self.pathname.contains('_')
    }

    /// Whether the private-route rule hides any content from this request
    pub fn is_blocked(&self) -> bool {
        self.is_private() && !self.same_origin
    }
}

fn path_part(uri: &str) -> &str {
    uri.split(['?', '#']).next().unwrap_or_default()
}

fn segments_of(path: &str) -> Vec<String> {
    split_segments(&normalize_path(path))
        .into_iter()
        .map(|segment| {
            urlencoding::decode(segment)
                .unwrap_or(Cow::Borrowed(segment))
                .into_owned()
        })
        .collect()
}

fn strip_base<'a>(path: &'a str, base: &str) -> Option<&'a str> {
    path.rmatch_indices(base)
        .map(|(start, _)| &path[start + base.len()..])
        .find(|rest| rest.is_empty() || rest.starts_with('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_forms() {
        for uri in ["", "/", "//", "/?x=1", "#top"] {
            let request = RequestContext::new(uri);
            assert!(request.is_root(), "{:?} should be root", uri);
            assert!(request.segments().is_empty());
        }
    }

    #[test]
    fn test_percent_decoding() {
        let request = RequestContext::new("/blog/hello%20world");
        assert_eq!(request.pathname(), "blog/hello world");
        assert_eq!(request.uri(), "/blog/hello%20world");
    }

    #[test]
    fn test_invalid_utf8_keeps_raw_text() {
        let request = RequestContext::new("/files/%FF");
        assert_eq!(request.pathname(), "files/%FF");
    }

    #[test]
    fn test_encoded_slash_decodes_inside_its_segment() {
        let request = RequestContext::new("/users/a%2Fb/%FF");
        assert_eq!(request.segments(), vec!["users", "a/b", "%FF"]);
        assert!(!request.is_root());
    }

    #[test]
    fn test_base_path_segments() {
        let request = RequestContext::new("/app/docs/x%2Fy").with_base_path("app");
        assert_eq!(request.segments(), vec!["docs", "x/y"]);
    }

    #[test]
    fn test_base_path_last_occurrence() {
        let request = RequestContext::new("/srv/app/app/users?x=1").with_base_path("/app/");
        assert_eq!(request.pathname(), "users");
    }

    #[test]
    fn test_base_path_missing_is_root() {
        let request = RequestContext::new("/other/users").with_base_path("app");
        assert!(request.is_root());
    }

    #[test]
    fn test_base_path_needs_segment_boundary() {
        let request = RequestContext::new("/app/application").with_base_path("app");
        assert_eq!(request.pathname(), "application");
    }

    #[test]
    fn test_private_routes() {
        let request = RequestContext::new("/_partials/menu");
        assert!(request.is_private());
        assert!(request.is_blocked());
        assert!(!request.clone().with_same_origin(true).is_blocked());

        assert!(!RequestContext::new("/about").is_blocked());
    }
}
