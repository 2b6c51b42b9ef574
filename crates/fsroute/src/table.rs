//! Route table: the immutable, order-preserving list of candidate route files.
//!
//! The table is built once (from a listing, a `files-list.json` document, or a
//! directory scan) and then shared read-only by every resolution. Any change on
//! disk means building a new table; there is no incremental mutation.

use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::error::{Result, TableError};
use crate::path::normalize_path;
use crate::route::{FileKind, RouteFile};

/// Default routes root, relative to the project directory
pub const DEFAULT_ROOT: &str = "src/app";

/// Default content-file extension (without the dot)
pub const DEFAULT_EXTENSION: &str = "php";

/// Builder for [`RouteTable`]
///
/// # Examples
///
/// ```
/// use fsroute::RouteTable;
///
/// let table = RouteTable::builder()
///     .root("app")
///     .extension("rhtml")
///     .build(["app/index.rhtml", "app/blog/[slug]/index.rhtml"]);
///
/// assert_eq!(table.len(), 2);
/// assert!(table.get("blog/[slug]/index.rhtml").is_some());
/// ```
#[derive(Debug, Clone)]
pub struct TableBuilder {
    root: String,
    extension: String,
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self {
            root: DEFAULT_ROOT.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

impl TableBuilder {
    /// Sets the routes root prefix stripped from listed paths
    pub fn root(mut self, root: impl AsRef<str>) -> Self {
        self.root = normalize_path(root.as_ref()).into_owned();
        self
    }

    /// Sets the content-file extension; a leading dot is ignored
    pub fn extension(mut self, extension: impl AsRef<str>) -> Self {
        self.extension = extension.as_ref().trim_start_matches('.').to_string();
        self
    }

    /// Builds a table from listed paths, keeping their order
    pub fn build<I, S>(self, paths: I) -> RouteTable
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = RouteTable {
            root: self.root,
            extension: self.extension,
            files: Vec::new(),
            by_route_path: HashMap::new(),
            layouts: HashMap::new(),
        };

        for raw in paths {
            let raw = raw.as_ref();
            match RouteFile::new(raw, &table.root, &table.extension) {
                Some(file) => table.push(file),
                None => warn!("Skipping blank route table entry: {:?}", raw),
            }
        }

        debug!(
            "Built route table with {} files ({} layouts) under {:?}",
            table.files.len(),
            table.layouts.len(),
            table.root
        );

        table
    }

    /// Builds a table from a `files-list.json` document (a JSON array of paths)
    pub fn from_files_list(self, path: impl AsRef<Path>) -> Result<RouteTable> {
        let path = path.as_ref();

        let content = fs::read_to_string(path).map_err(|source| TableError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let paths: Vec<String> =
            serde_json::from_str(&content).map_err(|source| TableError::FilesList {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(self.build(paths))
    }

    /// Builds a table by walking `<project_dir>/<root>`
    ///
    /// Dot-files and dot-directories are skipped; entries are visited in file-name
    /// order so the table order is stable across platforms. Listed paths are
    /// relative to `project_dir`.
    pub fn scan(self, project_dir: impl AsRef<Path>) -> Result<RouteTable> {
        let project_dir = project_dir.as_ref();
        let root_dir = project_dir.join(&self.root);

        if !root_dir.is_dir() {
            return Err(TableError::MissingRoot(root_dir));
        }

        let mut paths = Vec::new();
        let walker = WalkDir::new(&root_dir)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry));

        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }

            let relative = entry
                .path()
                .strip_prefix(project_dir)
                .unwrap_or(entry.path());
            paths.push(relative.to_string_lossy().into_owned());
        }

        Ok(self.build(paths))
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// A loading view together with the URL it covers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadingFile<'t> {
    /// `/` for the top-level loading view, otherwise `/` + its directory
    pub url: String,
    pub file: &'t RouteFile,
}

/// The full, immutable sequence of route files for one build
///
/// Shared read-only across concurrent resolutions; the type is `Send + Sync`.
#[derive(Debug, Clone)]
pub struct RouteTable {
    root: String,
    extension: String,
    files: Vec<RouteFile>,
    by_route_path: HashMap<String, usize>,
    layouts: HashMap<String, usize>,
}

impl Default for RouteTable {
    fn default() -> Self {
        TableBuilder::default().build(std::iter::empty::<&str>())
    }
}

impl RouteTable {
    pub fn builder() -> TableBuilder {
        TableBuilder::default()
    }

    /// Builds a table with the default root and extension
    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::builder().build(paths)
    }

    fn push(&mut self, file: RouteFile) {
        let index = self.files.len();

        self.by_route_path
            .entry(file.route_path.clone())
            .or_insert(index);

        if file.kind == FileKind::Layout {
            self.layouts.entry(file.dir()).or_insert(index);
        }

        self.files.push(file);
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// All files in listing order
    pub fn files(&self) -> &[RouteFile] {
        &self.files
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RouteFile> {
        self.files.iter()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Looks up a file by its exact path below the routes root
    pub fn get(&self, route_path: &str) -> Option<&RouteFile> {
        self.by_route_path
            .get(route_path)
            .map(|&index| &self.files[index])
    }

    /// Special file of the given kind directly inside `dir` (`""` is the routes root)
    pub fn special_file_in(&self, dir: &str, kind: FileKind) -> Option<&RouteFile> {
        let stem = kind.stem()?;
        let basename = format!("{}.{}", stem, self.extension);

        if dir.is_empty() {
            self.get(&basename)
        } else {
            self.get(&format!("{}/{}", dir, basename))
        }
    }

    /// Layout file directly inside `dir` (`""` is the routes root)
    pub fn layout_in(&self, dir: &str) -> Option<&RouteFile> {
        self.layouts.get(dir).map(|&index| &self.files[index])
    }

    /// Top-level layout, the outermost shell of every page
    pub fn root_layout(&self) -> Option<&RouteFile> {
        self.layout_in("")
    }

    /// Top-level not-found view
    pub fn root_not_found(&self) -> Option<&RouteFile> {
        self.special_file_in("", FileKind::NotFound)
    }

    /// Every loading view with the URL it covers, in table order
    ///
    /// # Examples
    ///
    /// ```
    /// use fsroute::RouteTable;
    ///
    /// let table = RouteTable::from_paths([
    ///     "src/app/loading.php",
    ///     "src/app/dashboard/loading.php",
    /// ]);
    ///
    /// let urls: Vec<String> = table.loading_files().into_iter().map(|l| l.url).collect();
    /// assert_eq!(urls, vec!["/", "/dashboard"]);
    /// ```
    pub fn loading_files(&self) -> Vec<LoadingFile<'_>> {
        self.files
            .iter()
            .filter(|file| file.kind == FileKind::Loading)
            .map(|file| LoadingFile {
                url: format!("/{}", file.dir()),
                file,
            })
            .collect()
    }
}

impl<'t> IntoIterator for &'t RouteTable {
    type Item = &'t RouteFile;
    type IntoIter = std::slice::Iter<'t, RouteFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}
