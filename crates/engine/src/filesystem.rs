use crate::error::{EngineError, Result};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Regular files directly inside `dir`, sorted by file name.
///
/// Hidden files and subdirectories are skipped. Ignore files (`.gitignore`
/// and friends) are not consulted. Entries that cannot be inspected, such as
/// dangling symlinks, are logged and left out.
///
/// # Errors
/// Returns [`EngineError::DirectoryAccess`] if `dir` is missing, not a
/// directory or cannot be read.
pub fn list_inputs(dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::read_dir(dir).map_err(|source| EngineError::DirectoryAccess {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut builder = WalkBuilder::new(dir);
    // `standard_filters(false)` also turns hidden filtering off; re-enable it.
    builder
        .standard_filters(false)
        .hidden(true)
        .follow_links(true)
        .max_depth(Some(1))
        .sort_by_file_name(|a, b| a.cmp(b));

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("skipping input entry: {e}");
                continue;
            }
        };
        if entry.depth() == 0 {
            continue;
        }
        if entry.file_type().is_some_and(|ft| ft.is_file()) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// `<output_dir>/<input file name><suffix>`.
#[must_use]
pub fn output_path_for(input: &Path, output_dir: &Path, suffix: &str) -> PathBuf {
    let mut name = input
        .file_name()
        .map(std::ffi::OsStr::to_os_string)
        .unwrap_or_default();
    name.push(suffix);
    output_dir.join(name)
}

/// Create `dir` (and parents) if missing. Returns `true` if it was created.
///
/// # Errors
/// Returns [`EngineError::DirectoryAccess`] if creation fails or `dir`
/// exists but is not a directory.
pub fn ensure_dir(dir: &Path) -> Result<bool> {
    if dir.is_dir() {
        return Ok(false);
    }
    std::fs::create_dir_all(dir).map_err(|source| EngineError::DirectoryAccess {
        path: dir.to_path_buf(),
        source,
    })?;
    log::info!("created directory {}", dir.display());
    Ok(true)
}
