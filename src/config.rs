//! Locating the student marks file.

use std::path::{Path, PathBuf};

/// Environment variable that overrides the file search.
pub const FILE_ENV_VAR: &str = "STUDENT_MARKS_FILE";
pub const FILE_NAME: &str = "studentMarks.txt";
pub const RESOURCES_DIR: &str = "resources";

/// Picks the student marks file to load.
///
/// An explicit path wins, then `STUDENT_MARKS_FILE`. Otherwise
/// `resources/studentMarks.txt` under `base_dir` is used when it exists, and
/// `studentMarks.txt` in `base_dir` when it does not. The returned path may
/// not exist; the loader reports that.
pub fn resolve_source(
    explicit: Option<PathBuf>,
    env_override: Option<String>,
    base_dir: &Path,
) -> PathBuf {
    if let Some(path) = explicit {
        return path;
    }

    if let Some(path) = env_override.filter(|p| !p.trim().is_empty()) {
        return PathBuf::from(path);
    }

    let in_resources = base_dir.join(RESOURCES_DIR).join(FILE_NAME);
    if in_resources.exists() {
        in_resources
    } else {
        base_dir.join(FILE_NAME)
    }
}

/// [`resolve_source`] against the process environment and working directory.
pub fn source_from_env(explicit: Option<PathBuf>) -> PathBuf {
    resolve_source(explicit, std::env::var(FILE_ENV_VAR).ok(), Path::new("."))
}
