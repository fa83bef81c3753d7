use crate::error::ViewerError;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Image extensions the viewer loads, compared case-insensitively.
pub const SUPPORTED_IMAGE_EXTENSIONS: [&str; 11] = [
    "jpg", "jpeg", "png", "gif", "bmp", "ppm", "pgm", "pbm", "tif", "tiff", "ico",
];

pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SUPPORTED_IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Lists the supported images directly inside `dir`, sorted by path.
pub fn scan_folder(dir: &Path) -> Result<Vec<PathBuf>, ViewerError> {
    if !dir.is_dir() {
        return Err(ViewerError::FolderMissing(dir.to_path_buf()));
    }

    info!("Scanning images in {:?}", dir);
    let mut images = Vec::new();

    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| ViewerError::FolderScan {
            path: dir.to_path_buf(),
            source: e,
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.into_path();
        if is_supported_image(&path) {
            images.push(path);
        } else {
            debug!("Skipping non-image file: {:?}", path);
        }
    }

    images.sort();
    Ok(images)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_extension_filter_is_case_insensitive() {
        assert!(is_supported_image(Path::new("a.JPG")));
        assert!(is_supported_image(Path::new("b.TiFf")));
        assert!(is_supported_image(Path::new("c.ico")));
        assert!(!is_supported_image(Path::new("d.webp")));
        assert!(!is_supported_image(Path::new("jpg")));
    }

    #[test]
    fn test_scan_folder_keeps_only_top_level_images() {
        let dir = tempdir().unwrap();
        for name in ["b.png", "a.JPEG", "notes.txt", "c.pbm"] {
            std::fs::write(dir.path().join(name), b"x").unwrap();
        }
        std::fs::create_dir(dir.path().join("nested.jpg")).unwrap();
        std::fs::write(dir.path().join("nested.jpg").join("inner.png"), b"x").unwrap();

        let images = scan_folder(dir.path()).unwrap();
        let names: Vec<_> = images
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.JPEG", "b.png", "c.pbm"]);
    }

    #[test]
    fn test_scan_missing_folder() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            scan_folder(&dir.path().join("gone")),
            Err(ViewerError::FolderMissing(_))
        ));
    }
}
