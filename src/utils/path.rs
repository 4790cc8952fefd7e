//! Expansion of `~` in paths given on the command line.

use std::path::PathBuf;

/// `~` or `~/rest` relative to the home directory; anything else unchanged.
/// Without a known home directory the path is returned as given.
pub fn expand_tilde(path: &str) -> PathBuf {
    let rest = match path.strip_prefix('~') {
        Some("") => Some(""),
        Some(r) => r.strip_prefix('/'),
        None => None,
    };

    match (rest, dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
