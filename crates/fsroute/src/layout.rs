//! Layout chain assembly.
//!
//! Layouts are collected root-to-leaf and rendered leaf-to-root: the content is
//! wrapped by its innermost layout first, then by each enclosing one.

use serde::{Serialize, Serializer};

use crate::path::DirPrefixes;
use crate::route::RouteFile;
use crate::table::RouteTable;

/// Ordered, deduplicated layout files for one resolution
///
/// Built fresh per request. Serializes as the list of normalized layout paths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutChain<'t>(Vec<&'t RouteFile>);

impl<'t> LayoutChain<'t> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a layout unless a file with the same path is already present
    ///
    /// Returns `true` when the layout was added.
    pub fn push(&mut self, layout: &'t RouteFile) -> bool {
        if self.contains(layout) {
            return false;
        }
        self.0.push(layout);
        true
    }

    pub fn contains(&self, layout: &RouteFile) -> bool {
        self.0.iter().any(|existing| existing.path == layout.path)
    }

    /// Layouts in discovery order, outermost first
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &'t RouteFile> + '_ {
        self.0.iter().copied()
    }

    /// Layouts in rendering order, innermost first
    pub fn render_order(&self) -> impl Iterator<Item = &'t RouteFile> + '_ {
        self.iter().rev()
    }

    pub fn paths(&self) -> Vec<&'t str> {
        self.0.iter().map(|layout| layout.path.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Adds the layout of every directory prefix of `dir`, outermost first
    fn collect_along(&mut self, dir: &str, table: &'t RouteTable) {
        for prefix in DirPrefixes::new(dir) {
            if let Some(layout) = table.layout_in(prefix) {
                self.push(layout);
            }
        }
    }
}

impl Serialize for LayoutChain<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter().map(|layout| &layout.path))
    }
}

/// Assembles the layout chain for a resolved request
///
/// 1. Walk `base_dir` (the request path, or the located group file's directory)
///    and collect the layout of every prefix.
/// 2. Walk the directory of the dynamically matched file, if any, appending
///    layouts not already present.
/// 3. Nothing found: the top-level layout is the sole entry.
///
/// # Examples
///
/// ```
/// use fsroute::{assemble_layouts, RouteTable};
///
/// let table = RouteTable::from_paths([
///     "src/app/layout.php",
///     "src/app/dashboard/layout.php",
///     "src/app/dashboard/users/layout.php",
/// ]);
///
/// let chain = assemble_layouts("dashboard/users", None, &table);
/// assert_eq!(chain.paths(), vec!["src/app/dashboard/layout.php", "src/app/dashboard/users/layout.php"]);
///
/// let chain = assemble_layouts("missing", None, &table);
/// assert_eq!(chain.paths(), vec!["src/app/layout.php"]);
/// ```
pub fn assemble_layouts<'t>(
    base_dir: &str,
    matched: Option<&'t RouteFile>,
    table: &'t RouteTable,
) -> LayoutChain<'t> {
    let mut chain = LayoutChain::new();

    chain.collect_along(base_dir, table);

    if let Some(file) = matched {
        chain.collect_along(&file.dir(), table);
    }

    if chain.is_empty() {
        if let Some(root) = table.root_layout() {
            chain.push(root);
        }
    }

    chain
}
