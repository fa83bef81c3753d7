use super::copier::FileCopier;
use super::progress::{ProgressSink, ProgressUpdate};
use super::{CancelToken, JobStatus, JobSummary, SharedJobState};
use crate::error::PerFileError;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Background worker for one copy job.
///
/// Walks the sources in order, checking the cancel token at each file
/// boundary. Per-file failures are logged and counted, never propagated.
pub(crate) struct CopyWorker {
    state: SharedJobState,
    sources: Vec<PathBuf>,
    destination: PathBuf,
    cancel: CancelToken,
    copier: Arc<dyn FileCopier>,
    sink: Box<dyn ProgressSink>,
}

impl CopyWorker {
    pub(crate) fn new(
        state: SharedJobState,
        sources: Vec<PathBuf>,
        destination: PathBuf,
        cancel: CancelToken,
        copier: Arc<dyn FileCopier>,
        sink: Box<dyn ProgressSink>,
    ) -> Self {
        Self {
            state,
            sources,
            destination,
            cancel,
            copier,
            sink,
        }
    }

    pub(crate) async fn run(self) -> JobSummary {
        let total = self.sources.len();
        info!("Job {}: copying {} files to {:?}", self.state.id(), total, self.destination);

        for source in &self.sources {
            if self.cancel.is_cancelled() {
                self.state.finish(JobStatus::Cancelled);
                info!(
                    "Job {}: cancelled after {}/{} files",
                    self.state.id(),
                    self.state.completed(),
                    total
                );
                return self.state.summary();
            }

            let succeeded = match self.copy_one(source).await {
                Ok(bytes) => {
                    debug!("Job {}: copied {:?} ({} bytes)", self.state.id(), source, bytes);
                    true
                }
                Err(e) => {
                    warn!("Job {}: {}", self.state.id(), e);
                    false
                }
            };

            let completed = self.state.record_attempt(succeeded);
            self.sink.on_progress(ProgressUpdate::new(completed, total));
        }

        self.state.finish(JobStatus::Completed);
        let summary = self.state.summary();
        info!(
            "Job {}: completed {} files ({} failed)",
            summary.id, summary.completed, summary.failed
        );
        self.sink.on_complete(&summary);
        summary
    }

    async fn copy_one(&self, source: &Path) -> Result<u64, PerFileError> {
        // Same base name means the later file overwrites the earlier one.
        let name = source
            .file_name()
            .ok_or_else(|| PerFileError::NoFileName(source.to_path_buf()))?;
        let target = self.destination.join(name);

        self.copier
            .copy(source, &target)
            .await
            .map_err(|e| PerFileError::Io {
                path: source.to_path_buf(),
                source: e,
            })
    }
}
