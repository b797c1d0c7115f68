//! # mdsite
//!
//! Generate a static site from Markdown pages and one HTML template.
//!
//! Markdown conversion lives in [`mdsite_core`]; this crate adds the file
//! handling around it: copying static assets, rendering every page under a
//! content directory into the template, and mirroring the directory layout
//! into the output directory.
//!
//! ## Example
//!
//! ```rust
//! let html = mdsite::render_page(
//!     "# Hello\n\nWorld",
//!     "<title>{{ Title }}</title>{{ Content }}",
//! )
//! .unwrap();
//! assert_eq!(html, "<title>Hello</title><div><h1>Hello</h1><p>World</p></div>");
//! ```

mod assets;
mod config;
mod page;

use std::path::{Path, PathBuf};

pub use assets::copy_static;
pub use config::{SiteConfig, DEFAULT_CONFIG_FILE};
pub use page::{
    generate_page, generate_pages_recursive, render_page, CONTENT_PLACEHOLDER, TITLE_PLACEHOLDER,
};

/// Error type for site generation
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to render {path}: {source}")]
    Render {
        path: PathBuf,
        source: mdsite_core::CoreError,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Config {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Directory does not exist: {0}")]
    MissingDirectory(PathBuf),

    #[error("Output directory {output} would overwrite static directory {static_dir}")]
    OutputContainsStatic { output: PathBuf, static_dir: PathBuf },
}

impl SiteError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        SiteError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;

/// What a build produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    pub static_files: usize,
    pub pages: Vec<PathBuf>,
}

/// Copy static assets and generate every page
pub fn build(config: &SiteConfig) -> Result<BuildReport> {
    let static_files = copy_static(&config.static_dir, &config.output_dir)?;
    let pages =
        generate_pages_recursive(&config.content_dir, &config.template, &config.output_dir)?;

    log::info!(
        "Built {} page(s) and copied {} static file(s) into {}",
        pages.len(),
        static_files,
        config.output_dir.display()
    );

    Ok(BuildReport {
        static_files,
        pages,
    })
}
