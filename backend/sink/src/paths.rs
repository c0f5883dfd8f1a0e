//! Log directory resolution for the legacy multi-candidate deployment mode.

use std::path::PathBuf;

/// Fixed-priority roots tried when the platform reports no storage root.
const FALLBACK_DIRS: [&str; 3] = ["/var/tmp/duolog/logs", "/tmp/duolog/logs", "/var/log/duolog"];

/// Platform-reported storage root, if one exists for the current user.
///
/// `DUOLOG_STORAGE_ROOT` overrides the platform probe so deployments can
/// pin the primary candidate without rebuilding.
pub fn external_storage_root() -> Option<PathBuf> {
    if let Ok(root) = std::env::var("DUOLOG_STORAGE_ROOT") {
        if !root.is_empty() {
            return Some(PathBuf::from(root));
        }
    }
    dirs::data_local_dir()
}

/// Build the ordered legacy candidate list.
///
/// With a storage root the primary candidate lives under it and two fixed
/// roots back it up; without one, all three fixed roots are used in priority
/// order.
pub fn legacy_candidates(external_root: Option<&std::path::Path>) -> Vec<PathBuf> {
    match external_root {
        Some(root) => vec![
            root.join("duolog").join("logs"),
            PathBuf::from(FALLBACK_DIRS[0]),
            PathBuf::from(FALLBACK_DIRS[1]),
        ],
        None => FALLBACK_DIRS.iter().map(PathBuf::from).collect(),
    }
}
