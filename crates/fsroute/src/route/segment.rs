//! Segment classification for route file paths
//!
//! Pure tokenizer turning one path segment into a typed [`Segment`].
//! All functions are **pure**: same input → same output, no side effects.

/// Represents the different kinds of route path segments
///
/// Sum type for pattern matching route segments. Borrowed from the input
/// segment, so classifying never allocates.
///
/// # Examples
///
/// ```
/// use fsroute::route::segment::{classify_segment, Segment};
///
/// assert_eq!(classify_segment("about"), Segment::Literal("about"));
/// assert_eq!(classify_segment("(marketing)"), Segment::Group("marketing"));
/// assert_eq!(classify_segment("[id]"), Segment::Dynamic("id"));
/// assert!(matches!(classify_segment("[...slug]"), Segment::CatchAll { name: "slug", .. }));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Static text, matched byte-for-byte
    Literal(&'a str),
    /// Group folder: `(name)`; organizational only, never consumes a request segment
    Group(&'a str),
    /// Single dynamic segment: `[name]`
    Dynamic(&'a str),
    /// Catch-all: `[...name]`, optionally with static text around it in the same segment
    CatchAll {
        prefix: &'a str,
        name: &'a str,
        suffix: &'a str,
    },
}

impl<'a> Segment<'a> {
    /// Name of the bound parameter, if this segment binds one
    pub fn param_name(&self) -> Option<&'a str> {
        match *self {
            Segment::Dynamic(name) | Segment::CatchAll { name, .. } => Some(name),
            Segment::Literal(_) | Segment::Group(_) => None,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, Segment::Group(_))
    }
}

/// Classifies a segment (pure function)
///
/// # Rules (evaluated in order)
///
/// 1. **Group**: the whole segment is wrapped in parentheses around a non-empty name
/// 2. **Catch-all**: the segment contains `[...name]` with a non-empty name
/// 3. **Dynamic**: the whole segment is `[name]`, name non-empty and without `]`
/// 4. **Literal**: anything else, including `()` and malformed brackets like `[id` or `[]`
pub fn classify_segment(segment: &str) -> Segment<'_> {
    if let Some(name) = segment.strip_prefix('(').and_then(|s| s.strip_suffix(')')) {
        if !name.is_empty() {
            return Segment::Group(name);
        }
    }

    if let Some(catch_all) = find_catch_all(segment) {
        return catch_all;
    }

    match segment.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
        Some(name) if !name.is_empty() && !name.contains(']') && !name.starts_with("...") => {
            Segment::Dynamic(name)
        }
        _ => Segment::Literal(segment),
    }
}

/// Shorthand predicate used wherever group segments are stripped
pub fn is_group_segment(segment: &str) -> bool {
    classify_segment(segment).is_group()
}

fn find_catch_all(segment: &str) -> Option<Segment<'_>> {
    let start = segment.find("[...")?;
    let rest = &segment[start + 4..];
    let end = rest.find(']')?;
    let name = &rest[..end];

    if name.is_empty() {
        return None;
    }

    Some(Segment::CatchAll {
        prefix: &segment[..start],
        name,
        suffix: &rest[end + 1..],
    })
}

/// Counts non-overlapping bracket groups (`[` + one or more non-`]` + `]`) in a path
///
/// # Examples
///
/// ```
/// use fsroute::route::segment::count_bracket_groups;
///
/// assert_eq!(count_bracket_groups("users/[id]/route.php"), 1);
/// assert_eq!(count_bracket_groups("shop/[category]/[item]/route.php"), 2);
/// assert_eq!(count_bracket_groups("about/route.php"), 0);
/// assert_eq!(count_bracket_groups("odd/[]/route.php"), 0);
/// ```
pub fn count_bracket_groups(path: &str) -> usize {
    let bytes = path.as_bytes();
    let mut count = 0;
    let mut index = 0;

    while index < bytes.len() {
        if bytes[index] == b'[' {
            match bytes[index + 1..].iter().position(|&b| b == b']') {
                Some(0) => {}
                Some(offset) => {
                    count += 1;
                    index += offset + 2;
                    continue;
                }
                None => break,
            }
        }
        index += 1;
    }

    count
}

/// How a route file takes part in dynamic matching
///
/// Selected once per file from its whole path: the two modes never mix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Exactly one `[name]` group and no catch-all
    Single,
    /// The path contains a `[...` marker
    CatchAll,
}

impl MatchMode {
    /// Detects the matching mode of a route path
    ///
    /// Returns `None` for fully static paths and for paths with more than one
    /// single-dynamic group; neither takes part in dynamic matching.
    ///
    /// # Examples
    ///
    /// ```
    /// use fsroute::route::segment::MatchMode;
    ///
    /// assert_eq!(MatchMode::detect("users/[id]/route.php"), Some(MatchMode::Single));
    /// assert_eq!(MatchMode::detect("docs/[...slug]/route.php"), Some(MatchMode::CatchAll));
    /// assert_eq!(MatchMode::detect("about/route.php"), None);
    /// ```
    pub fn detect(path: &str) -> Option<Self> {
        if path.contains("[...") {
            Some(MatchMode::CatchAll)
        } else if count_bracket_groups(path) == 1 {
            Some(MatchMode::Single)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_literal() {
        assert_eq!(classify_segment("about"), Segment::Literal("about"));
        assert_eq!(classify_segment("route.php"), Segment::Literal("route.php"));
    }

    #[test]
    fn test_classify_group() {
        assert_eq!(classify_segment("(auth)"), Segment::Group("auth"));
        assert_eq!(classify_segment("(auth"), Segment::Literal("(auth"));
    }

    #[test]
    fn test_empty_parentheses_are_literal() {
        assert_eq!(classify_segment("()"), Segment::Literal("()"));
        assert!(!is_group_segment("()"));
    }

    #[test]
    fn test_classify_dynamic() {
        assert_eq!(classify_segment("[id]"), Segment::Dynamic("id"));
        assert_eq!(classify_segment("[user_id]"), Segment::Dynamic("user_id"));
    }

    #[test]
    fn test_classify_catch_all() {
        assert_eq!(
            classify_segment("[...slug]"),
            Segment::CatchAll {
                prefix: "",
                name: "slug",
                suffix: ""
            }
        );
    }

    #[test]
    fn test_classify_catch_all_with_static_text() {
        let seg = classify_segment("v-[...path].html");
        assert_eq!(
            seg,
            Segment::CatchAll {
                prefix: "v-",
                name: "path",
                suffix: ".html"
            }
        );
        assert_eq!(seg.param_name(), Some("path"));
    }

    #[test]
    fn test_malformed_brackets_are_literal() {
        assert_eq!(classify_segment("[id"), Segment::Literal("[id"));
        assert_eq!(classify_segment("id]"), Segment::Literal("id]"));
        assert_eq!(classify_segment("[]"), Segment::Literal("[]"));
        assert_eq!(classify_segment("[...]"), Segment::Literal("[...]"));
        assert_eq!(classify_segment("[[id]]"), Segment::Literal("[[id]]"));
        assert_eq!(classify_segment("prefix-[id]"), Segment::Literal("prefix-[id]"));
    }

    #[test]
    fn test_param_name() {
        assert_eq!(classify_segment("[id]").param_name(), Some("id"));
        assert_eq!(classify_segment("about").param_name(), None);
        assert_eq!(classify_segment("(group)").param_name(), None);
    }

    #[test]
    fn test_count_bracket_groups() {
        assert_eq!(count_bracket_groups(""), 0);
        assert_eq!(count_bracket_groups("[id]"), 1);
        assert_eq!(count_bracket_groups("a/[x]/b/[y]"), 2);
        assert_eq!(count_bracket_groups("docs/[...slug]/route.php"), 1);
        assert_eq!(count_bracket_groups("[unclosed/route.php"), 0);
        assert_eq!(count_bracket_groups("[[id]]"), 1);
    }

    #[test]
    fn test_match_mode() {
        assert_eq!(MatchMode::detect("[id]/route.php"), Some(MatchMode::Single));
        assert_eq!(
            MatchMode::detect("(g)/blog/[...rest]/index.php"),
            Some(MatchMode::CatchAll)
        );
        assert_eq!(MatchMode::detect("a/[x]/[y]/route.php"), None);
        assert_eq!(MatchMode::detect("layout.php"), None);
    }
}
