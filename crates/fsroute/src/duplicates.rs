//! Duplicate route detection.
//!
//! Two physical files that normalize to the same logical route (group segments
//! stripped) make resolution depend on table order. That is a configuration
//! defect, reported once per build rather than per request.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tracing::warn;

use crate::route::RouteFile;
use crate::table::RouteTable;

/// Two or more physical files sharing one logical route
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateRoute {
    /// Normalized path with every group segment removed, e.g. `src/app/about/route.php`
    pub logical: String,
    /// Contributing paths as originally listed, in table order
    pub paths: Vec<String>,
}

impl fmt::Display for DuplicateRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Duplicate route found after normalization: {}", self.logical)?;
        for path in &self.paths {
            write!(f, "\n- Grouped original route: {}", path)?;
        }
        Ok(())
    }
}

/// Finds every logical route claimed by more than one physical Route or Index file
///
/// Layouts are exempt: overriding a layout per group is legitimate. Results are in
/// order of first appearance.
///
/// # Examples
///
/// ```
/// use fsroute::{find_duplicates, RouteTable};
///
/// let table = RouteTable::from_paths([
///     "src/app/a/route.php",
///     "src/app/(x)/a/route.php",
///     "src/app/a/layout.php",
///     "src/app/(x)/a/layout.php",
/// ]);
///
/// let duplicates = find_duplicates(&table);
/// assert_eq!(duplicates.len(), 1);
/// assert_eq!(duplicates[0].logical, "src/app/a/route.php");
/// ```
pub fn find_duplicates(table: &RouteTable) -> Vec<DuplicateRoute> {
    let mut groups: Vec<(String, Vec<&RouteFile>)> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    let candidates = table
        .iter()
        .filter(|file| file.has_content_extension && file.kind.is_content());

    for file in candidates {
        let logical = file.logical_path();
        match positions.get(&logical) {
            Some(&position) => groups[position].1.push(file),
            None => {
                positions.insert(logical.clone(), groups.len());
                groups.push((logical, vec![file]));
            }
        }
    }

    groups
        .into_iter()
        .filter(|(_, files)| files.len() > 1)
        .map(|(logical, files)| DuplicateRoute {
            logical,
            paths: files.iter().map(|file| file.raw_path.clone()).collect(),
        })
        .collect()
}

/// Deployment environment; decides whether the duplicate check runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    /// Parses an environment name such as the value of `APP_ENV`
    ///
    /// `production` and `prod` (any case) are production; everything else is
    /// development.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Environment::Production,
            _ => Environment::Development,
        }
    }

    pub fn is_production(self) -> bool {
        self == Environment::Production
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Outcome of the startup duplicate check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DuplicateCheck {
    /// Production: the scan did not run, so stale duplicates may ship
    Skipped,
    Clean,
    Conflicts(Vec<DuplicateRoute>),
}

impl DuplicateCheck {
    pub fn conflicts(&self) -> &[DuplicateRoute] {
        match self {
            DuplicateCheck::Conflicts(conflicts) => conflicts,
            DuplicateCheck::Skipped | DuplicateCheck::Clean => &[],
        }
    }

    pub fn is_blocking(&self) -> bool {
        matches!(self, DuplicateCheck::Conflicts(_))
    }
}

/// Runs the duplicate check unless the environment is production
pub fn check_duplicates(table: &RouteTable, environment: Environment) -> DuplicateCheck {
    if environment.is_production() {
        warn!("Duplicate route check skipped in production; ambiguous routes resolve by table order");
        return DuplicateCheck::Skipped;
    }

    let conflicts = find_duplicates(table);
    if conflicts.is_empty() {
        return DuplicateCheck::Clean;
    }

    for conflict in &conflicts {
        warn!("{}", conflict);
    }
    DuplicateCheck::Conflicts(conflicts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_duplicates_reported() {
        let table = RouteTable::from_paths([
            "src/app/(a)/settings/index.php",
            "src/app/(b)/settings/index.php",
            "src/app/settings/index.php",
        ]);

        let duplicates = find_duplicates(&table);
        assert_eq!(duplicates.len(), 1);
        assert_eq!(duplicates[0].paths.len(), 3);
        assert_eq!(duplicates[0].paths[0], "src/app/(a)/settings/index.php");
    }

    #[test]
    fn test_route_and_index_are_distinct_routes() {
        let table = RouteTable::from_paths(["src/app/a/route.php", "src/app/(x)/a/index.php"]);
        assert!(find_duplicates(&table).is_empty());
    }

    #[test]
    fn test_file_outside_root_is_not_a_duplicate() {
        let table = RouteTable::from_paths(["about/route.php", "src/app/about/route.php"]);
        assert!(find_duplicates(&table).is_empty());
    }

    #[test]
    fn test_other_files_exempt() {
        let table = RouteTable::from_paths([
            "src/app/a/loading.php",
            "src/app/(x)/a/loading.php",
            "src/app/a/helper.php",
            "src/app/(x)/a/helper.php",
            "src/app/a/route.js",
            "src/app/(x)/a/route.js",
        ]);
        assert!(find_duplicates(&table).is_empty());
    }

    #[test]
    fn test_display_lists_every_path() {
        let duplicate = DuplicateRoute {
            logical: "src/app/a/route.php".to_string(),
            paths: vec!["src/app/a/route.php".into(), "src/app/(x)/a/route.php".into()],
        };

        assert_eq!(
            duplicate.to_string(),
            "Duplicate route found after normalization: src/app/a/route.php\n\
             - Grouped original route: src/app/a/route.php\n\
             - Grouped original route: src/app/(x)/a/route.php"
        );
    }

    #[test]
    fn test_check_skipped_in_production() {
        let table = RouteTable::from_paths(["src/app/a/route.php", "src/app/(x)/a/route.php"]);

        assert_eq!(check_duplicates(&table, Environment::Production), DuplicateCheck::Skipped);

        let check = check_duplicates(&table, Environment::Development);
        assert!(check.is_blocking());
        assert_eq!(check.conflicts().len(), 1);
    }

    #[test]
    fn test_check_clean() {
        let table = RouteTable::from_paths(["src/app/a/route.php"]);
        let check = check_duplicates(&table, Environment::default());
        assert_eq!(check, DuplicateCheck::Clean);
        assert!(check.conflicts().is_empty());
    }

    #[test]
    fn test_environment_from_name() {
        assert_eq!(Environment::from_name("production"), Environment::Production);
        assert_eq!(Environment::from_name(" PROD "), Environment::Production);
        assert_eq!(Environment::from_name("development"), Environment::Development);
        assert_eq!(Environment::from_name("staging"), Environment::Development);
    }
}
