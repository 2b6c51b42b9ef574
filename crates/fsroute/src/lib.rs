//! # fsroute
//!
//! File-system route resolution where the file is the route:
//! - Static routes (`about/route.php` serves `/about`)
//! - Group folders (`(marketing)/about/route.php` also serves `/about`)
//! - Dynamic segments (`users/[id]/index.php` binds `id`)
//! - Catch-all segments (`docs/[...slug]/route.php` binds `slug` to the tail)
//! - Nested layout chains, collected root-to-leaf and deduplicated
//! - Duplicate route detection at startup
//!
//! ## Model
//!
//! A [`RouteTable`] is built once from a flat listing of files and shared
//! read-only by every request. Resolving a [`RequestContext`] against it is a pure
//! function: no I/O, no locks, no state kept between requests. A request that
//! matches nothing is a normal not-found [`Resolution`], never an error.
//!
//! ## Example
//!
//! ```
//! use fsroute::{RequestContext, RouteTable};
//!
//! let table = RouteTable::from_paths([
//!     "src/app/layout.php",
//!     "src/app/docs/layout.php",
//!     "src/app/docs/[...slug]/route.php",
//! ]);
//!
//! let resolution = table.resolve(&RequestContext::new("/docs/guide/install"));
//! assert_eq!(resolution.content.map(|f| f.route_path.as_str()), Some("docs/[...slug]/route.php"));
//! assert_eq!(resolution.params.get_many("slug").map(|s| s.len()), Some(2));
//! assert_eq!(resolution.layouts.paths(), vec!["src/app/docs/layout.php"]);
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod context;
mod duplicates;
mod error;
mod group;
mod layout;
mod matcher;
mod params;
pub mod path;
mod resolve;
pub mod route;
mod table;

pub use context::RequestContext;
pub use duplicates::{check_duplicates, find_duplicates, DuplicateCheck, DuplicateRoute, Environment};
pub use error::{Result, TableError};
pub use group::{locate_group_folder, match_group_folder, GroupFolder};
pub use layout::{assemble_layouts, LayoutChain};
pub use matcher::{match_route, RouteMatch};
pub use params::{BoundParams, ParamValue};
pub use resolve::{Resolution, Resolver};
pub use route::{classify_segment, FileKind, MatchMode, RouteFile, Segment};
pub use table::{LoadingFile, RouteTable, TableBuilder, DEFAULT_EXTENSION, DEFAULT_ROOT};
