//! Page generation: Markdown + template to HTML files

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::{Result, SiteError};

/// Placeholder replaced by the page title
pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";

/// Placeholder replaced by the rendered body
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Render a Markdown page into a template
pub fn render_page(markdown: &str, template: &str) -> mdsite_core::Result<String> {
    let title = mdsite_core::extract_title(markdown)?;
    let content = mdsite_core::render(markdown)?;

    Ok(template
        .replace(TITLE_PLACEHOLDER, &title)
        .replace(CONTENT_PLACEHOLDER, &content))
}

/// Generate one HTML page from a Markdown file
pub fn generate_page(from: &Path, template_path: &Path, dest: &Path) -> Result<()> {
    log::info!(
        "Generating page from {} to {} using {}",
        from.display(),
        dest.display(),
        template_path.display()
    );

    let markdown = read(from)?;
    let template = read(template_path)?;

    let html = render_page(&markdown, &template).map_err(|source| SiteError::Render {
        path: from.to_path_buf(),
        source,
    })?;

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(|source| SiteError::io(parent, source))?;
    }
    fs::write(dest, html).map_err(|source| SiteError::io(dest, source))
}

/// Generate a page for every `.md` file under `content_dir`, mirroring the
/// directory layout under `dest_dir`. Returns the written paths.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
) -> Result<Vec<PathBuf>> {
    if !content_dir.is_dir() {
        return Err(SiteError::MissingDirectory(content_dir.to_path_buf()));
    }

    let mut written = Vec::new();

    for entry in WalkDir::new(content_dir).sort_by_file_name() {
        let entry = entry.map_err(|e| walk_error(content_dir, e))?;
        let path = entry.path();
        if !(entry.file_type().is_file() && path.extension().is_some_and(|ext| ext == "md")) {
            continue;
        }

        let relative = path.strip_prefix(content_dir).unwrap_or(path);
        let dest = dest_dir.join(relative).with_extension("html");
        generate_page(path, template_path, &dest)?;
        written.push(dest);
    }

    Ok(written)
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| SiteError::io(path, source))
}

pub(crate) fn walk_error(root: &Path, err: walkdir::Error) -> SiteError {
    let path = err.path().unwrap_or(root).to_path_buf();
    SiteError::Io {
        path,
        source: err.into(),
    }
}
