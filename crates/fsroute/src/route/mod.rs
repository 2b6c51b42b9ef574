/// Route module for file-based routing
///
/// Contains the pure building blocks the resolver is made of:
/// - `segment` - classify one path segment (literal, group, dynamic, catch-all)
/// - `file` - the [`RouteFile`] model and its basename-derived [`FileKind`]

pub mod file;
pub mod segment;

pub use file::{FileKind, RouteFile};
pub use segment::{classify_segment, count_bracket_groups, is_group_segment, MatchMode, Segment};
