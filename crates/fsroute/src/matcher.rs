//! Dynamic route matcher.
//!
//! Matches a non-root request against every content file that carries a dynamic
//! segment, in table order. The matching mode is selected once per file from its
//! path (see [`MatchMode`]); the two modes never mix.

use tracing::trace;

use crate::params::{BoundParams, ParamValue};
use crate::route::{classify_segment, FileKind, MatchMode, RouteFile, Segment};
use crate::table::RouteTable;

/// A content file matched by dynamic segments, with the parameters it bound
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch<'t> {
    pub file: &'t RouteFile,
    pub params: BoundParams,
}

/// Matches a request against the table's dynamic routes
///
/// The first file satisfying every check wins; table order is the tie-break and
/// nothing backtracks once a file has matched. `None` is the normal not-found
/// outcome.
///
/// # Examples
///
/// ```
/// use fsroute::{match_route, RouteTable};
///
/// let table = RouteTable::from_paths([
///     "src/app/users/[id]/route.php",
///     "src/app/docs/[...slug]/route.php",
/// ]);
///
/// let found = match_route(&["users", "42"], &table).unwrap();
/// assert_eq!(found.params.get_one("id"), Some("42"));
///
/// let found = match_route(&["docs", "a", "b"], &table).unwrap();
/// assert_eq!(found.params.get_many("slug").map(|s| s.len()), Some(2));
/// ```
pub fn match_route<'t, S: AsRef<str>>(
    segments: &[S],
    table: &'t RouteTable,
) -> Option<RouteMatch<'t>> {
    let request: Vec<&str> = segments.iter().map(AsRef::as_ref).collect();
    if request.is_empty() {
        return None;
    }

    table
        .iter()
        .filter(|file| file.has_content_extension && file.kind.is_content())
        .find_map(|file| {
            let params = match MatchMode::detect(&file.route_path)? {
                MatchMode::Single => match_single(file, &request),
                MatchMode::CatchAll => match_catch_all(file, &request),
            };

            trace!(
                "Dynamic candidate {} -> {}",
                file.route_path,
                if params.is_some() { "match" } else { "no match" }
            );

            params.map(|params| RouteMatch { file, params })
        })
}

/// Single-dynamic mode: one `[name]` segment binds exactly one request segment
///
/// Literal segments before the dynamic one must match; afterwards the directory
/// with the bound value substituted back must equal the request exactly, which
/// rejects routes that only share a prefix with the request.
fn match_single(file: &RouteFile, request: &[&str]) -> Option<BoundParams> {
    let dirs = file.logical_dir_segments();

    let (position, name) = dirs
        .iter()
        .enumerate()
        .find_map(|(index, segment)| {
            classify_segment(segment)
                .param_name()
                .map(|name| (index, name))
        })?;

    let prefix_matches = dirs[..position]
        .iter()
        .zip(request)
        .all(|(route, requested)| route == requested);
    if !prefix_matches {
        return None;
    }

    let value = *request.get(position)?;

    let substituted = dirs
        .iter()
        .enumerate()
        .map(|(index, segment)| if index == position { value } else { *segment });
    if !substituted.eq(request.iter().copied()) {
        return None;
    }

    Some(BoundParams::single(name, value))
}

/// Catch-all mode: `[...name]` binds the ordered tail of the request
///
/// Everything in the route path before the marker must be a literal prefix of
/// the request. A Route file matches on that alone; an Index file also needs its
/// reconstructed directory to equal the request. Request segments are compared
/// whole, so a decoded `/` inside one never acts as a separator.
fn match_catch_all(file: &RouteFile, request: &[&str]) -> Option<BoundParams> {
    let dirs = file.logical_dir_segments();

    let (position, prefix, name, suffix) =
        dirs.iter()
            .enumerate()
            .find_map(|(index, segment)| match classify_segment(segment) {
                Segment::CatchAll {
                    prefix,
                    name,
                    suffix,
                } => Some((index, prefix, name, suffix)),
                _ => None,
            })?;

    if request.len() <= position || dirs[..position] != request[..position] {
        return None;
    }

    let head = request[position].strip_prefix(prefix)?;
    let captured: Vec<&str> = std::iter::once(head)
        .chain(request[position + 1..].iter().copied())
        .filter(|segment| !segment.is_empty())
        .collect();
    if captured.is_empty() {
        return None;
    }

    if file.kind == FileKind::Index {
        let marker = format!("{}{}{}", prefix, captured.join("/"), suffix);
        let reconstructed = dirs
            .iter()
            .enumerate()
            .map(|(index, segment)| if index == position { marker.as_str() } else { *segment })
            .collect::<Vec<_>>()
            .join("/");

        if reconstructed != request.join("/") {
            return None;
        }
    }

    let mut params = BoundParams::new();
    params.insert(
        name,
        ParamValue::Many(captured.into_iter().map(String::from).collect()),
    );
    Some(params)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matched<'t>(table: &'t RouteTable, request: &[&str]) -> Option<RouteMatch<'t>> {
        match_route(request, table)
    }

    #[test]
    fn test_single_binds_segment() {
        let table = RouteTable::from_paths(["src/app/users/[id]/route.php"]);
        let found = matched(&table, &["users", "42"]).unwrap();

        assert_eq!(found.file.route_path, "users/[id]/route.php");
        assert_eq!(found.params, BoundParams::single("id", "42"));
    }

    #[test]
    fn test_single_rejects_prefix_only_match() {
        let table = RouteTable::from_paths(["src/app/users/[id]/route.php"]);

        assert!(matched(&table, &["users", "42", "edit"]).is_none());
        assert!(matched(&table, &["users"]).is_none());
        assert!(matched(&table, &["members", "42"]).is_none());
    }

    #[test]
    fn test_single_with_trailing_literal() {
        let table = RouteTable::from_paths(["src/app/users/[id]/edit/index.php"]);

        let found = matched(&table, &["users", "7", "edit"]).unwrap();
        assert_eq!(found.params.get_one("id"), Some("7"));
        assert!(matched(&table, &["users", "7", "show"]).is_none());
    }

    #[test]
    fn test_single_ignores_group_segments() {
        let table = RouteTable::from_paths(["src/app/(shop)/products/[sku]/index.php"]);
        let found = matched(&table, &["products", "abc"]).unwrap();
        assert_eq!(found.params.get_one("sku"), Some("abc"));
    }

    #[test]
    fn test_two_dynamic_groups_take_no_part() {
        let table = RouteTable::from_paths(["src/app/[category]/[item]/route.php"]);
        assert!(matched(&table, &["books", "dune"]).is_none());
    }

    #[test]
    fn test_catch_all_binds_tail_in_order() {
        let table = RouteTable::from_paths(["src/app/docs/[...slug]/route.php"]);
        let found = matched(&table, &["docs", "a", "b", "c"]).unwrap();

        assert_eq!(found.params, BoundParams::many("slug", ["a", "b", "c"]));
    }

    #[test]
    fn test_catch_all_needs_one_segment() {
        let table = RouteTable::from_paths(["src/app/docs/[...slug]/route.php"]);

        assert!(matched(&table, &["docs"]).is_none());
        assert!(matched(&table, &["docsx", "a"]).is_none());
    }

    #[test]
    fn test_catch_all_route_is_greedy() {
        let table = RouteTable::from_paths(["src/app/files/[...path]/raw/route.php"]);
        let found = matched(&table, &["files", "a", "b"]).unwrap();
        assert_eq!(found.params.get_many("path").map(|p| p.len()), Some(2));
    }

    #[test]
    fn test_catch_all_index_matches_exact_directory() {
        let table = RouteTable::from_paths(["src/app/files/[...path]/index.php"]);
        let found = matched(&table, &["files", "a", "b"]).unwrap();
        assert_eq!(found.params.get_many("path").map(|p| p.len()), Some(2));
    }

    #[test]
    fn test_catch_all_index_rejects_reconstruction_mismatch() {
        // The prefix matches, but the captured tail swallows `raw`, so the
        // reconstructed directory never equals the request.
        let table = RouteTable::from_paths(["src/app/files/[...path]/raw/index.php"]);

        assert!(matched(&table, &["files", "a", "b"]).is_none());
        assert!(matched(&table, &["files", "a", "raw"]).is_none());
    }

    #[test]
    fn test_catch_all_with_segment_prefix() {
        let table = RouteTable::from_paths(["src/app/blog-[...slug]/index.php"]);
        let found = matched(&table, &["blog-2024", "post"]).unwrap();

        assert_eq!(found.params, BoundParams::many("slug", ["2024", "post"]));
    }

    #[test]
    fn test_catch_all_keeps_decoded_slash_in_one_value() {
        let table = RouteTable::from_paths(["src/app/docs/[...slug]/route.php"]);
        let found = matched(&table, &["docs", "a/b", "c"]).unwrap();

        assert_eq!(found.params, BoundParams::many("slug", ["a/b", "c"]));
    }

    #[test]
    fn test_table_order_breaks_ties() {
        let table = RouteTable::from_paths([
            "src/app/posts/[slug]/route.php",
            "src/app/posts/[id]/route.php",
        ]);

        let found = matched(&table, &["posts", "hello"]).unwrap();
        assert_eq!(found.params.get_one("slug"), Some("hello"));
    }

    #[test]
    fn test_layouts_and_other_files_never_match() {
        let table = RouteTable::from_paths([
            "src/app/users/[id]/layout.php",
            "src/app/users/[id]/loading.php",
            "src/app/users/[id]/route.js",
        ]);

        assert!(matched(&table, &["users", "1"]).is_none());
    }

    #[test]
    fn test_literal_comparison_is_case_sensitive() {
        let table = RouteTable::from_paths(["src/app/Users/[id]/route.php"]);
        assert!(matched(&table, &["users", "1"]).is_none());
    }
}
