//! Static asset copying

use std::fs;
use std::path::Path;

use walkdir::WalkDir;

use crate::page::walk_error;
use crate::{Result, SiteError};

/// Replace `dest` with a copy of the `src` tree. Returns the number of
/// files copied.
pub fn copy_static(src: &Path, dest: &Path) -> Result<usize> {
    if !src.is_dir() {
        return Err(SiteError::MissingDirectory(src.to_path_buf()));
    }

    if dest.exists() {
        if contains(dest, src)? {
            return Err(SiteError::OutputContainsStatic {
                output: dest.to_path_buf(),
                static_dir: src.to_path_buf(),
            });
        }
        log::warn!("Removing existing output directory {}", dest.display());
        fs::remove_dir_all(dest).map_err(|source| SiteError::io(dest, source))?;
    }
    fs::create_dir_all(dest).map_err(|source| SiteError::io(dest, source))?;

    let mut copied = 0;

    for entry in WalkDir::new(src).min_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|e| walk_error(src, e))?;
        let path = entry.path();
        let relative = path.strip_prefix(src).unwrap_or(path);
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|source| SiteError::io(&target, source))?;
        } else if entry.file_type().is_file() {
            log::debug!("Copying {} to {}", path.display(), target.display());
            fs::copy(path, &target).map_err(|source| SiteError::io(path, source))?;
            copied += 1;
        }
    }

    Ok(copied)
}

/// Whether `inner` is `outer` or lies somewhere below it
fn contains(outer: &Path, inner: &Path) -> Result<bool> {
    let outer = outer
        .canonicalize()
        .map_err(|source| SiteError::io(outer, source))?;
    let inner = inner
        .canonicalize()
        .map_err(|source| SiteError::io(inner, source))?;
    Ok(inner.starts_with(outer))
}
