use async_trait::async_trait;
use std::io;
use std::path::Path;
use tracing::debug;

/// Trait for copying a single file into the export destination.
/// The worker depends only on this seam, never on a concrete file system.
#[async_trait]
pub trait FileCopier: Send + Sync {
    /// Copies `source` to `target`, overwriting `target` if it exists.
    /// Returns the number of bytes written.
    async fn copy(&self, source: &Path, target: &Path) -> io::Result<u64>;
}

/// Default copier backed by `tokio::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsCopier;

#[async_trait]
impl FileCopier for FsCopier {
    async fn copy(&self, source: &Path, target: &Path) -> io::Result<u64> {
        debug!("Copying {:?} -> {:?}", source, target);
        tokio::fs::copy(source, target).await
    }
}
