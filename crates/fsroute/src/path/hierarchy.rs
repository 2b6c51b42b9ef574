/// Lazy iterator over the directory prefixes of a normalized path, root first
///
/// For path `a/b/c`, yields: `a` → `a/b` → `a/b/c`
///
/// This is the walk order of a layout chain: every prefix is a directory that may
/// hold a layout file, and the outermost directory comes first.
///
/// # Performance
///
/// - **Allocations**: Zero (only borrows from input string)
/// - **Complexity**: O(n) over the whole walk where n is path length
///
/// # Examples
///
/// ```
/// use fsroute::path::DirPrefixes;
///
/// let dirs: Vec<&str> = DirPrefixes::new("dashboard/users/settings").collect();
/// assert_eq!(dirs, vec!["dashboard", "dashboard/users", "dashboard/users/settings"]);
/// ```
///
/// The input must already be normalized (see [`normalize_path`](super::normalize_path));
/// the empty path yields nothing.
#[derive(Debug, Clone)]
pub struct DirPrefixes<'a> {
    path: &'a str,
    next_start: Option<usize>,
}

impl<'a> DirPrefixes<'a> {
    /// Creates a new prefix iterator over the given normalized path
    pub fn new(path: &'a str) -> Self {
        Self {
            path,
            next_start: if path.is_empty() { None } else { Some(0) },
        }
    }
}

impl<'a> Iterator for DirPrefixes<'a> {
    type Item = &'a str;

    /// Returns the next, one segment longer, prefix
    ///
    /// 1. Search for the next `/` after the current position
    /// 2. Found: yield everything before it and continue after it
    /// 3. Not found: yield the whole path and stop
    fn next(&mut self) -> Option<Self::Item> {
        let start = self.next_start?;

        match self.path[start..].find('/') {
            Some(offset) => {
                let end = start + offset;
                self.next_start = Some(end + 1);
                Some(&self.path[..end])
            }
            None => {
                self.next_start = None;
                Some(self.path)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_segment() {
        let dirs: Vec<&str> = DirPrefixes::new("blog").collect();
        assert_eq!(dirs, vec!["blog"]);
    }

    #[test]
    fn test_empty_path_yields_nothing() {
        assert_eq!(DirPrefixes::new("").count(), 0);
    }

    #[test]
    fn test_group_and_dynamic_segments_kept() {
        let dirs: Vec<&str> = DirPrefixes::new("(shop)/items/[id]").collect();
        assert_eq!(dirs, vec!["(shop)", "(shop)/items", "(shop)/items/[id]"]);
    }
}
