//! Shared plumbing used by the library and the CLI: the error type,
//! viewer options, and the file-system helpers.

use std::path::{Path, PathBuf};

use crate::viewer::{Launcher, SystemBrowser, DEFAULT_FRONTEND_URL};

#[derive(Debug, thiserror::Error)]
pub enum ElabsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Could not open {url} in a browser: {source}")]
    Browser {
        url: String,
        #[source]
        source: std::io::Error,
    },
}

/// Environment variable that overrides the frontend URL
pub const FRONTEND_URL_ENV: &str = "ELABS_FRONTEND_URL";

/// Options for opening the visualizer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewerOptions {
    pub frontend_url: String,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            frontend_url: DEFAULT_FRONTEND_URL.to_string(),
        }
    }
}

impl ViewerOptions {
    /// Defaults, with `ELABS_FRONTEND_URL` taking precedence when set and non-empty
    pub fn from_env() -> Self {
        match std::env::var(FRONTEND_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self { frontend_url: url },
            _ => Self::default(),
        }
    }
}

/// Open `url` in the default browser. Launch failures are returned as-is.
pub fn view_on_website(url: &str) -> Result<(), ElabsError> {
    view_on_website_with(url, &SystemBrowser)
}

pub fn view_on_website_with(url: &str, launcher: &dyn Launcher) -> Result<(), ElabsError> {
    tracing::info!("Opening {} in browser", url);
    launcher.open(url)
}

/// Find the first file under `dir` whose name ends with `extension`.
///
/// Walks top-down: the files of a directory come before its
/// subdirectories, and entries are taken in name order. Directories that
/// cannot be read are skipped; symlinked directories are not followed.
pub fn find_first_by_extension(dir: &Path, extension: &str) -> Option<PathBuf> {
    walk_dir(dir, extension)
}

fn walk_dir(dir: &Path, extension: &str) -> Option<PathBuf> {
    tracing::debug!("Scanning {:?}", dir);
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!("Skipping {:?}: {}", dir, e);
            return None;
        }
    };

    let mut files = Vec::new();
    let mut subdirs = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        let Ok(file_type) = entry.file_type() else {
            files.push(path);
            continue;
        };
        if file_type.is_dir() {
            subdirs.push(path);
        } else if file_type.is_symlink() && path.is_dir() {
            // Linked directories are neither entered nor matched by name
            tracing::debug!("Not following directory link {:?}", path);
        } else {
            files.push(path);
        }
    }
    files.sort();
    subdirs.sort();

    let hit = files.into_iter().find(|path| {
        path.file_name()
            .map(|name| name.to_string_lossy().ends_with(extension))
            .unwrap_or(false)
    });
    if hit.is_some() {
        return hit;
    }

    subdirs.iter().find_map(|sub| walk_dir(sub, extension))
}

/// Copy the first file under `dir` ending with `extension` to `output`.
///
/// Returns the source path that was copied, or `None` when nothing
/// matched (in which case `output` is not touched). Only the first match
/// is ever tried.
pub fn copy_first_by_extension(
    dir: &Path,
    extension: &str,
    output: &Path,
) -> Result<Option<PathBuf>, ElabsError> {
    let Some(source) = find_first_by_extension(dir, extension) else {
        return Ok(None);
    };

    let bytes = std::fs::read(&source)?;
    std::fs::write(output, &bytes)?;
    tracing::info!(
        "Copied {:?} to {:?} ({} bytes)",
        source,
        output,
        bytes.len()
    );
    Ok(Some(source))
}

/// Copy the first matching file to `output_path`, reporting success as a bool.
///
/// I/O errors are logged and turned into `false`.
pub fn download_file_by_extension(
    directory: impl AsRef<Path>,
    extension: &str,
    output_path: impl AsRef<Path>,
) -> bool {
    match copy_first_by_extension(directory.as_ref(), extension, output_path.as_ref()) {
        Ok(found) => found.is_some(),
        Err(e) => {
            tracing::warn!("Failed to copy *{} file: {}", extension, e);
            false
        }
    }
}
