//! Group folder locator.
//!
//! Group folders (`(marketing)`) never appear in request URLs, so `/about` may live
//! at `(marketing)/about/route.php`. The locator finds that physical file so the
//! layout walk can be re-rooted inside the group.

use tracing::trace;

use crate::route::{classify_segment, FileKind, RouteFile, Segment};
use crate::table::RouteTable;

/// Group folder a request resolved through
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupFolder<'t> {
    /// The request names a group segment itself, e.g. `/(admin)/users`
    ///
    /// `file` is the content file at exactly that physical location, if any.
    Explicit {
        group: String,
        file: Option<&'t RouteFile>,
    },
    /// The request matched a content file once group segments were stripped
    Located(&'t RouteFile),
}

impl<'t> GroupFolder<'t> {
    /// Content file found at the group location
    pub fn file(&self) -> Option<&'t RouteFile> {
        match self {
            GroupFolder::Explicit { file, .. } => *file,
            GroupFolder::Located(file) => Some(*file),
        }
    }

    /// Directory the layout walk starts from instead of the request path
    ///
    /// Only a located file that actually sits inside a group re-roots the walk;
    /// an explicit group is already part of the request path.
    pub fn layout_base(&self) -> Option<String> {
        match self {
            GroupFolder::Located(file) if file.in_group() => Some(file.dir()),
            _ => None,
        }
    }
}

/// Locates the group folder for a non-root request (pure function)
///
/// 1. A request segment that is itself a group wins immediately.
/// 2. Otherwise the table is searched for a content file whose directory, with
///    group segments stripped, equals the whole request path.
///
/// # Examples
///
/// ```
/// use fsroute::{locate_group_folder, GroupFolder, RouteTable};
///
/// let table = RouteTable::from_paths(["src/app/(marketing)/about/route.php"]);
/// let folder = locate_group_folder(&["about"], &table).unwrap();
///
/// assert!(matches!(folder, GroupFolder::Located(_)));
/// assert_eq!(folder.layout_base().as_deref(), Some("(marketing)/about"));
/// ```
pub fn locate_group_folder<'t, S: AsRef<str>>(
    segments: &[S],
    table: &'t RouteTable,
) -> Option<GroupFolder<'t>> {
    let explicit = segments
        .iter()
        .map(AsRef::as_ref)
        .find(|segment| matches!(classify_segment(segment), Segment::Group(_)));

    if let Some(group) = explicit {
        let dir = join(segments);
        let file = table
            .special_file_in(&dir, FileKind::Route)
            .or_else(|| table.special_file_in(&dir, FileKind::Index));

        trace!("Explicit group {} in request, file: {:?}", group, file.map(|f| &f.path));
        return Some(GroupFolder::Explicit {
            group: group.to_string(),
            file,
        });
    }

    match_group_folder(segments, table).map(GroupFolder::Located)
}

/// Finds the content file whose group-stripped directory equals the request path
///
/// A Route file short-circuits the scan. The first Index file is remembered but
/// a later Route file still wins.
pub fn match_group_folder<'t, S: AsRef<str>>(
    segments: &[S],
    table: &'t RouteTable,
) -> Option<&'t RouteFile> {
    let request: Vec<&str> = segments.iter().map(AsRef::as_ref).collect();
    let mut index_match = None;

    let candidates = table
        .iter()
        .filter(|file| file.has_content_extension && file.kind.is_content());

    for file in candidates {
        if file.logical_dir_segments() != request {
            continue;
        }

        match file.kind {
            FileKind::Route => return Some(file),
            _ if index_match.is_none() => index_match = Some(file),
            _ => {}
        }
    }

    index_match
}

fn join<S: AsRef<str>>(segments: &[S]) -> String {
    segments
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("/")
}
