use std::path::PathBuf;
use thiserror::Error;

/// Failures that prevent a copy job (or a manifest save) from starting at all.
///
/// These are the only errors that cross the export boundary. They are raised
/// synchronously, before any background work is spawned.
#[derive(Error, Debug)]
pub enum SetupError {
    #[error("destination directory does not exist: {}", .0.display())]
    DestinationMissing(PathBuf),

    #[error("destination is not a directory: {}", .0.display())]
    DestinationNotDirectory(PathBuf),

    #[error("destination directory is not writable: {}", .0.display())]
    DestinationReadOnly(PathBuf),

    #[error("cannot inspect destination {}: {source}", path.display())]
    DestinationUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("manifest file does not exist: {}", .0.display())]
    ManifestMissing(PathBuf),

    #[error("failed to read manifest {}: {source}", path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("manifest {} is not a JSON list of paths: {source}", path.display())]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write manifest {}: {source}", path.display())]
    ManifestWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("copy job {0} has already been started")]
    AlreadyStarted(String),

    #[error("no async runtime available to run the copy worker")]
    NoRuntime,
}

/// A failure isolated to one source file. Swallowed by the worker and counted.
#[derive(Error, Debug)]
pub enum PerFileError {
    #[error("source has no file name: {}", .0.display())]
    NoFileName(PathBuf),

    #[error("failed to copy {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("folder does not exist: {}", .0.display())]
    FolderMissing(PathBuf),

    #[error("failed to scan folder {}: {source}", path.display())]
    FolderScan {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}
