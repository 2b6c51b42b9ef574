//! Resolution facade: request → content file, layout chain and bound parameters.
//!
//! A single pass over the shared, read-only [`RouteTable`]. Resolution never fails;
//! a request nothing matches is a not-found [`Resolution`] that still carries the
//! layout shell so a not-found view can be rendered inside it.

use serde::{Serialize, Serializer};
use tracing::debug;

use crate::context::RequestContext;
use crate::group::locate_group_folder;
use crate::layout::{assemble_layouts, LayoutChain};
use crate::matcher::match_route;
use crate::params::BoundParams;
use crate::route::{FileKind, RouteFile};
use crate::table::RouteTable;

/// Everything the rendering collaborator needs for one request
///
/// Borrows route files from the table it was resolved against; `params` and
/// `layouts` are owned by this resolution alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution<'t> {
    pub uri: String,
    pub pathname: String,
    #[serde(serialize_with = "serialize_file")]
    pub content: Option<&'t RouteFile>,
    pub layouts: LayoutChain<'t>,
    pub params: BoundParams,
    /// Outermost shell wrapping every page, independent of the chain
    #[serde(serialize_with = "serialize_file")]
    pub root_layout: Option<&'t RouteFile>,
    /// Top-level not-found view; set only when there is no content
    #[serde(serialize_with = "serialize_file")]
    pub not_found: Option<&'t RouteFile>,
}

impl<'t> Resolution<'t> {
    pub fn is_not_found(&self) -> bool {
        self.content.is_none()
    }

    /// Content is a Route file, which hosts serve without the layout shell
    pub fn is_route_file(&self) -> bool {
        self.content
            .is_some_and(|file| file.kind == FileKind::Route)
    }

    /// Layouts innermost first: the order content gets wrapped in
    pub fn render_order(&self) -> impl Iterator<Item = &'t RouteFile> + '_ {
        self.layouts.render_order()
    }
}

fn serialize_file<S: Serializer>(file: &Option<&RouteFile>, serializer: S) -> Result<S::Ok, S::Error> {
    match file {
        Some(file) => serializer.serialize_some(&file.path),
        None => serializer.serialize_none(),
    }
}

/// Resolves requests against one route table
///
/// Cheap to copy; any number of resolvers may share a table across threads.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'t> {
    table: &'t RouteTable,
}

impl<'t> Resolver<'t> {
    pub fn new(table: &'t RouteTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'t RouteTable {
        self.table
    }

    /// Resolves one request (pure function of the table and the request)
    ///
    /// 1. Root request: top-level Route file, else top-level Index file.
    /// 2. Private request from another origin: no content.
    /// 3. Group folder locator; a file at the located place is the content.
    /// 4. Otherwise the dynamic route matcher.
    /// 5. Layout chain from the group's directory (or the request path) plus the
    ///    dynamically matched file's own directory.
    pub fn resolve(&self, request: &RequestContext) -> Resolution<'t> {
        let table = self.table;
        let segments = request.segments();

        let mut content = None;
        let mut params = BoundParams::new();
        let mut matched = None;
        let mut layout_base = None;

        if request.is_root() {
            content = table
                .special_file_in("", FileKind::Route)
                .or_else(|| table.special_file_in("", FileKind::Index));
        } else if request.is_blocked() {
            debug!("Private route {} blocked for cross-origin request", request.pathname());
        } else {
            if let Some(group) = locate_group_folder(segments, table) {
                content = group.file();
                layout_base = group.layout_base();
            }

            if content.is_none() {
                if let Some(found) = match_route(segments, table) {
                    content = Some(found.file);
                    matched = Some(found.file);
                    params = found.params;
                }
            }
        }

        let base_dir = layout_base.as_deref().unwrap_or(request.pathname());
        let layouts = assemble_layouts(base_dir, matched, table);
        let not_found = if content.is_none() {
            table.root_not_found()
        } else {
            None
        };

        debug!(
            "Resolved {:?} -> {} ({} layouts, {} params)",
            request.pathname(),
            content.map(|file| file.path.as_str()).unwrap_or("<not found>"),
            layouts.len(),
            params.len()
        );

        Resolution {
            uri: request.uri().to_string(),
            pathname: request.pathname().to_string(),
            content,
            layouts,
            params,
            root_layout: table.root_layout(),
            not_found,
        }
    }
}

impl RouteTable {
    /// Resolves a request against this table
    ///
    /// # Examples
    ///
    /// ```
    /// use fsroute::{RequestContext, RouteTable};
    ///
    /// let table = RouteTable::from_paths([
    ///     "src/app/layout.php",
    ///     "src/app/users/[id]/index.php",
    /// ]);
    ///
    /// let resolution = table.resolve(&RequestContext::new("/users/42"));
    /// assert_eq!(resolution.content.map(|f| f.path.as_str()), Some("src/app/users/[id]/index.php"));
    /// assert_eq!(resolution.params.get_one("id"), Some("42"));
    /// assert_eq!(resolution.layouts.paths(), vec!["src/app/layout.php"]);
    /// ```
    pub fn resolve(&self, request: &RequestContext) -> Resolution<'_> {
        Resolver::new(self).resolve(request)
    }

    /// Resolves a bare URI with default request facts
    pub fn resolve_uri(&self, uri: &str) -> Resolution<'_> {
        self.resolve(&RequestContext::new(uri))
    }
}
