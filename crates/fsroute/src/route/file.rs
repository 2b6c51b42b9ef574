//! Route files discovered under the routes root
//!
//! A [`RouteFile`] is created once per listed path when the table is built and
//! never changes afterwards.

use serde::Serialize;

use super::segment::is_group_segment;
use crate::path::normalize_path;

/// Role of a file, derived purely from its basename
///
/// Only the special basenames with the table's content extension carry a role;
/// `route.js` next to a `php` table is [`FileKind::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FileKind {
    /// `route.<ext>` - endpoint content, served without the layout shell by most hosts
    Route,
    /// `index.<ext>` - page content
    Index,
    /// `layout.<ext>` - shell wrapping everything below its directory
    Layout,
    /// `loading.<ext>` - placeholder shown while a page below it loads
    Loading,
    /// `not-found.<ext>` - view rendered when nothing matches
    NotFound,
    /// Any other file; only ever served as a plain file
    Other,
}

impl FileKind {
    /// Derives the kind from a basename and the content extension (without dot)
    ///
    /// # Examples
    ///
    /// ```
    /// use fsroute::FileKind;
    ///
    /// assert_eq!(FileKind::from_basename("route.php", "php"), FileKind::Route);
    /// assert_eq!(FileKind::from_basename("not-found.php", "php"), FileKind::NotFound);
    /// assert_eq!(FileKind::from_basename("route.js", "php"), FileKind::Other);
    /// ```
    pub fn from_basename(basename: &str, extension: &str) -> Self {
        let stem = basename
            .strip_suffix(extension)
            .and_then(|rest| rest.strip_suffix('.'));

        match stem {
            Some("route") => FileKind::Route,
            Some("index") => FileKind::Index,
            Some("layout") => FileKind::Layout,
            Some("loading") => FileKind::Loading,
            Some("not-found") => FileKind::NotFound,
            _ => FileKind::Other,
        }
    }

    /// Basename stem of the special file for this kind
    pub fn stem(self) -> Option<&'static str> {
        match self {
            FileKind::Route => Some("route"),
            FileKind::Index => Some("index"),
            FileKind::Layout => Some("layout"),
            FileKind::Loading => Some("loading"),
            FileKind::NotFound => Some("not-found"),
            FileKind::Other => None,
        }
    }

    /// Route and Index files are the only ones that can be a request's content
    pub fn is_content(self) -> bool {
        matches!(self, FileKind::Route | FileKind::Index)
    }
}

/// One candidate file discovered under the routes root
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteFile {
    /// Path exactly as listed
    pub raw_path: String,
    /// Listed path with separators unified and leading `./` removed
    pub path: String,
    /// Path below the routes root, e.g. `(marketing)/about/route.php`
    pub route_path: String,
    /// `route_path` split on `/`, basename last
    pub segments: Vec<String>,
    pub kind: FileKind,
    /// Whether the file carries the table's content extension
    #[serde(skip)]
    pub has_content_extension: bool,
}

impl RouteFile {
    /// Creates a route file from a listed path
    ///
    /// `root` is the normalized routes root; when the listed path starts with it the
    /// root segments are stripped, otherwise the path is taken as root-relative.
    /// Returns `None` for blank entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use fsroute::{FileKind, RouteFile};
    ///
    /// let file = RouteFile::new("./src/app/(auth)/signin/index.php", "src/app", "php").unwrap();
    /// assert_eq!(file.path, "src/app/(auth)/signin/index.php");
    /// assert_eq!(file.route_path, "(auth)/signin/index.php");
    /// assert_eq!(file.kind, FileKind::Index);
    /// ```
    pub fn new(raw_path: &str, root: &str, extension: &str) -> Option<Self> {
        let path = normalize_path(raw_path).into_owned();
        if path.is_empty() {
            return None;
        }

        let route_path = strip_root(&path, root).to_string();
        if route_path.is_empty() {
            return None;
        }

        let segments: Vec<String> = route_path.split('/').map(String::from).collect();
        let basename = segments.last().map(String::as_str).unwrap_or_default();
        let kind = FileKind::from_basename(basename, extension);
        let has_content_extension = basename
            .rsplit_once('.')
            .is_some_and(|(_, ext)| ext == extension);

        Some(Self {
            raw_path: raw_path.to_string(),
            path,
            route_path,
            segments,
            kind,
            has_content_extension,
        })
    }

    pub fn basename(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or_default()
    }

    /// Directory segments below the routes root (everything but the basename)
    pub fn dir_segments(&self) -> &[String] {
        &self.segments[..self.segments.len().saturating_sub(1)]
    }

    /// Directory below the routes root, `""` for top-level files
    pub fn dir(&self) -> String {
        self.dir_segments().join("/")
    }

    /// Directory segments with group folders removed
    pub fn logical_dir_segments(&self) -> Vec<&str> {
        self.dir_segments()
            .iter()
            .map(String::as_str)
            .filter(|segment| !is_group_segment(segment))
            .collect()
    }

    /// Normalized path with every group folder removed: the collision key for duplicates
    ///
    /// Built from the whole listed path, so a file outside the routes root never
    /// collides with its namesake below the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use fsroute::RouteFile;
    ///
    /// let file = RouteFile::new("src/app/(x)/a/route.php", "src/app", "php").unwrap();
    /// assert_eq!(file.logical_path(), "src/app/a/route.php");
    /// ```
    pub fn logical_path(&self) -> String {
        self.path
            .split('/')
            .filter(|segment| !is_group_segment(segment))
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Whether any directory on the way to this file is a group folder
    pub fn in_group(&self) -> bool {
        self.dir_segments().iter().any(|segment| is_group_segment(segment))
    }
}

fn strip_root<'a>(path: &'a str, root: &str) -> &'a str {
    if root.is_empty() {
        return path;
    }

    match path.strip_prefix(root) {
        Some(rest) if rest.is_empty() => rest,
        Some(rest) => rest.strip_prefix('/').unwrap_or(path),
        None => path,
    }
}
