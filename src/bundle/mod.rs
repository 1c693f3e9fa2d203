//! Static bundle assembly
//!
//! The bundle is built in a staging directory next to the output directory
//! and swapped into place on [`StagedBundle::commit`]. A run that fails
//! before committing leaves the previous bundle untouched.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::Serialize;
use tempfile::TempDir;

use crate::config::{Accepts, SwaggerUiSettings};
use crate::error::{BundleError, Result};

pub mod assets;
pub mod viewer_config;

/// File name of the exported documentation for a media type
pub fn documentation_file_name(accepts: Accepts) -> String {
    format!("swagger.{}", accepts.file_extension())
}

/// A bundle under construction
#[derive(Debug)]
pub struct StagedBundle {
    staging: TempDir,
    output_dir: PathBuf,
}

impl StagedBundle {
    /// Create an empty staging directory beside `output_dir`
    pub fn create(output_dir: &Path) -> Result<Self> {
        let parent = output_dir
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| BundleError::InvalidOutputDir(output_dir.display().to_string()))?;
        fs::create_dir_all(parent)?;

        let staging = tempfile::Builder::new()
            .prefix(".swagger-ui-staging-")
            .tempdir_in(parent)?;
        debug!("Staging bundle in {}", staging.path().display());

        Ok(Self {
            staging,
            output_dir: output_dir.to_path_buf(),
        })
    }

    /// Directory files are written into before commit
    pub fn path(&self) -> &Path {
        self.staging.path()
    }

    /// Replace the output directory with the staged bundle.
    pub fn commit(self) -> Result<PathBuf> {
        let Self {
            staging,
            output_dir,
        } = self;
        let parent = staging.path().parent().map(Path::to_path_buf);

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(staging.path(), fs::Permissions::from_mode(0o755))?;
        }

        // Move the previous bundle aside so a failed rename can restore it
        let retired = match parent {
            Some(parent) if output_dir.exists() => {
                let holder = tempfile::Builder::new()
                    .prefix(".swagger-ui-retired-")
                    .tempdir_in(parent)?;
                let previous = holder.path().join("previous");
                fs::rename(&output_dir, &previous).map_err(|source| BundleError::Commit {
                    path: output_dir.display().to_string(),
                    source,
                })?;
                Some((holder, previous))
            }
            _ => None,
        };

        let staged = staging.keep();
        if let Err(source) = fs::rename(&staged, &output_dir) {
            let _ = fs::remove_dir_all(&staged);
            return Err(restore_previous(&output_dir, retired, source).into());
        }

        debug!("Committed bundle to {}", output_dir.display());
        Ok(output_dir)
    }
}

/// Put a retired bundle back after a failed swap.
///
/// If the bundle cannot be moved back, its holder directory is kept on disk
/// and named in the returned error.
fn restore_previous(
    output_dir: &Path,
    retired: Option<(TempDir, PathBuf)>,
    source: io::Error,
) -> BundleError {
    let path = output_dir.display().to_string();
    let Some((holder, previous)) = retired else {
        return BundleError::Commit { path, source };
    };

    match fs::rename(&previous, output_dir) {
        Ok(()) => BundleError::Commit { path, source },
        Err(restore_err) => {
            let retained = holder.keep().join("previous");
            warn!(
                "Could not restore previous bundle to {}: {}",
                output_dir.display(),
                restore_err
            );
            BundleError::CommitUnrestored {
                path,
                retained: retained.display().to_string(),
                source,
            }
        }
    }
}

/// Stage the viewer: assets, loader page and `config.yaml`.
///
/// Returns the staged bundle and the documentation file name it points at.
pub fn stage_viewer(
    settings: &SwaggerUiSettings,
    dist: &Path,
    output_dir: &Path,
) -> Result<(StagedBundle, String)> {
    let staged = StagedBundle::create(output_dir)?;
    let documentation_file = documentation_file_name(settings.accepts);

    assets::copy_viewer_assets(dist, staged.path())?;
    assets::write_index_file(staged.path())?;
    viewer_config::write_config_file(
        staged.path(),
        settings.viewer_config.as_ref(),
        &documentation_file,
    )?;

    Ok((staged, documentation_file))
}

/// Write the exported documentation body verbatim
pub fn write_documentation_file(target: &Path, file_name: &str, body: &[u8]) -> Result<PathBuf> {
    let path = target.join(file_name);
    fs::write(&path, body)?;
    Ok(path)
}

/// A regular file at the top level of a bundle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BundleFile {
    pub name: String,
    #[serde(skip)]
    pub path: PathBuf,
    pub size: u64,
}

/// List the regular files directly inside `dir`, sorted by name.
pub fn list_files(dir: &Path) -> Result<Vec<BundleFile>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let metadata = entry.metadata()?;
        if !metadata.is_file() {
            continue;
        }
        files.push(BundleFile {
            name: entry.file_name().to_string_lossy().into_owned(),
            path: entry.path(),
            size: metadata.len(),
        });
    }
    files.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(files)
}
