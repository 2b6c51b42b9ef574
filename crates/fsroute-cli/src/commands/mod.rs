pub mod check;
pub mod loading;
pub mod resolve;
pub mod routes;

use colored::{ColoredString, Colorize};
use fsroute::FileKind;

/// Fixed-width, colored label for a file kind
pub fn kind_label(kind: FileKind) -> ColoredString {
    match kind {
        FileKind::Route => "route    ".green(),
        FileKind::Index => "index    ".green(),
        FileKind::Layout => "layout   ".cyan(),
        FileKind::Loading => "loading  ".blue(),
        FileKind::NotFound => "not-found".yellow(),
        FileKind::Other => "other    ".dimmed(),
    }
}
