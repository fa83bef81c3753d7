//! The selection manifest: a JSON array of path strings in selection order.

use crate::error::SetupError;
use crate::utils::disk::verify_destination;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const MANIFEST_FILE_NAME: &str = "selection.json";

/// Writes `paths` to `<dir>/selection.json`, replacing any previous manifest.
pub fn save_manifest(dir: &Path, paths: &[PathBuf]) -> Result<PathBuf, SetupError> {
    verify_destination(dir)?;

    let target = dir.join(MANIFEST_FILE_NAME);
    let json = serde_json::to_vec(paths).map_err(|e| SetupError::ManifestWrite {
        path: target.clone(),
        source: e.into(),
    })?;
    std::fs::write(&target, json).map_err(|e| SetupError::ManifestWrite {
        path: target.clone(),
        source: e,
    })?;

    info!("Saved selection of {} files to {:?}", paths.len(), target);
    Ok(target)
}

pub fn load_manifest(path: &Path) -> Result<Vec<PathBuf>, SetupError> {
    let contents = std::fs::read(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            SetupError::ManifestMissing(path.to_path_buf())
        } else {
            SetupError::ManifestRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let paths: Vec<PathBuf> =
        serde_json::from_slice(&contents).map_err(|e| SetupError::ManifestParse {
            path: path.to_path_buf(),
            source: e,
        })?;

    debug!("Loaded {} paths from {:?}", paths.len(), path);
    Ok(paths)
}

/// Resolves the source list for a copy job.
///
/// The destination is checked first. When a manifest is given it replaces the
/// live selection entirely.
pub fn sources_for_copy(
    selection: Vec<PathBuf>,
    manifest: Option<&Path>,
    destination: &Path,
) -> Result<Vec<PathBuf>, SetupError> {
    verify_destination(destination)?;

    match manifest {
        Some(path) => load_manifest(path),
        None => Ok(selection),
    }
}
