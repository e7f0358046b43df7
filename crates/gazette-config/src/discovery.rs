//! Locating the `.gazette.toml` files that apply to an archive directory.
//!
//! Publications are usually archived as nested year and section directories, each of which
//! may carry its own `.gazette.toml`. The home directory file applies everywhere unless an
//! archive file declares `root = true`.

use std::path::{Path, PathBuf};

use directories::BaseDirs;
use tracing::debug;

use crate::parse::is_root_config;

/// The configuration filename.
pub const CONFIG_FILENAME: &str = ".gazette.toml";

/// Configuration files for `cwd`, highest precedence first.
///
/// Archive files run from `cwd` upward and end at the first one marked `root = true`.
/// The home file comes last and is skipped after a root file.
pub fn discover_config_files(cwd: &Path) -> Vec<PathBuf> {
    discover_with_home(cwd, global_config_path())
}

/// [`discover_config_files`] with an explicit home file location.
fn discover_with_home(cwd: &Path, home_file: Option<PathBuf>) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for candidate in cwd.ancestors().map(|dir| dir.join(CONFIG_FILENAME)) {
        if !candidate.is_file() {
            continue;
        }
        if is_root_config(&candidate) {
            debug!(path = %candidate.display(), "root config ends discovery");
            files.push(candidate);
            return files;
        }
        files.push(candidate);
    }

    if let Some(home_file) = home_file.filter(|f| f.is_file() && !files.contains(f)) {
        files.push(home_file);
    }
    files
}

/// Location of the home directory file, if a home directory is known.
pub fn global_config_path() -> Option<PathBuf> {
    let dirs = BaseDirs::new()?;
    Some(dirs.home_dir().join(CONFIG_FILENAME))
}

/// Whether `path` is the home directory file.
pub fn is_global_config(path: &Path) -> bool {
    global_config_path().as_deref() == Some(path)
}
