//! Swagger UI static assets

use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{BundleError, Result};

/// Entry point shipped with the distribution, replaced by [`INDEX_HTML`]
pub const INDEX_FILE: &str = "index.html";

/// Loader page that reads `config.yaml` from the bundle
pub const INDEX_HTML: &str = include_str!("../../assets/index.html");

/// Copy the Swagger UI distribution into `target`, skipping its own entry point.
///
/// Returns the number of files copied.
pub fn copy_viewer_assets(dist: &Path, target: &Path) -> Result<usize> {
    if !dist.is_dir() {
        return Err(BundleError::MissingDist(dist.display().to_string()).into());
    }

    let copied = copy_tree(dist, target, true)?;
    debug!("Copied {} asset files from {}", copied, dist.display());
    Ok(copied)
}

fn copy_tree(source: &Path, target: &Path, top_level: bool) -> Result<usize> {
    fs::create_dir_all(target)?;

    let mut copied = 0;
    for entry in fs::read_dir(source)? {
        let entry = entry?;
        let path = entry.path();
        let name = entry.file_name();
        let destination = target.join(&name);

        // Follows symlinks; a dangling link is an error
        let metadata = fs::metadata(&path)?;
        if metadata.is_dir() {
            copied += copy_tree(&path, &destination, false)?;
        } else if metadata.is_file() {
            if top_level && name == INDEX_FILE {
                continue;
            }
            fs::copy(&path, &destination)?;
            copied += 1;
        }
    }

    Ok(copied)
}

/// Write the custom loader page into `target`
pub fn write_index_file(target: &Path) -> Result<()> {
    fs::write(target.join(INDEX_FILE), INDEX_HTML)?;
    Ok(())
}
