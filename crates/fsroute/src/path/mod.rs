//! Path utilities for normalization and splitting
//!
//! The table builder, the request context and the matcher all go through these
//! helpers, so a listed file path and an incoming request path normalize the same way.
//! All functions are **pure**: same input, same output, no side effects.

use std::borrow::Cow;

pub mod hierarchy;
pub use hierarchy::DirPrefixes;

/// Checks if a path is already in normalized form
///
/// # Rules
///
/// - Must not contain `\`
/// - Must not start or end with `/`
/// - Must not contain empty segments (`//`) or `.` segments
/// - The empty string is the normalized root
///
/// # Examples
///
/// ```
/// use fsroute::path::is_normalized;
///
/// assert!(is_normalized(""));
/// assert!(is_normalized("src/app/about/route.php"));
///
/// assert!(!is_normalized("./src/app"));
/// assert!(!is_normalized("/about"));
/// assert!(!is_normalized("about/"));
/// assert!(!is_normalized("src\\app"));
/// assert!(!is_normalized("a//b"));
/// ```
pub fn is_normalized(path: &str) -> bool {
    if path.is_empty() {
        return true;
    }

    if path.contains('\\') {
        return false;
    }

    path.split('/').all(|segment| !segment.is_empty() && segment != ".")
}

/// Normalize a path to slash-separated, relative form
///
/// Returns `Cow::Borrowed` when the input is already normalized.
///
/// # Handles
///
/// - Backslashes: `src\app\index.php` → `src/app/index.php`
/// - Leading `./` and `/`: `./src/app` → `src/app`
/// - Trailing slashes: `about/` → `about`
/// - Repeated separators: `a//b` → `a/b`
///
/// # Examples
///
/// ```
/// use fsroute::path::normalize_path;
/// use std::borrow::Cow;
///
/// let path = normalize_path("src/app/index.php");
/// assert!(matches!(path, Cow::Borrowed("src/app/index.php")));
///
/// assert_eq!(normalize_path(".\\src\\app\\(auth)\\signin\\index.php"), "src/app/(auth)/signin/index.php");
/// assert_eq!(normalize_path("/dashboard//users/"), "dashboard/users");
/// assert_eq!(normalize_path("/"), "");
/// ```
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    if is_normalized(path) {
        return Cow::Borrowed(path);
    }

    let normalized = path
        .replace('\\', "/")
        .split('/')
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .collect::<Vec<_>>()
        .join("/");

    Cow::Owned(normalized)
}

/// Split a path into its non-empty segments
///
/// # Examples
///
/// ```
/// use fsroute::path::split_segments;
///
/// assert_eq!(split_segments("docs/a/b"), vec!["docs", "a", "b"]);
/// assert_eq!(split_segments("/docs//a/"), vec!["docs", "a"]);
/// assert!(split_segments("").is_empty());
/// ```
pub fn split_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}
