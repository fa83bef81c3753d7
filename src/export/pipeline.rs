use super::copier::{FileCopier, FsCopier};
use super::progress::ProgressSink;
use super::worker::CopyWorker;
use super::{CancelToken, JobState, JobStatus, JobSummary, SharedJobState};
use crate::error::SetupError;
use crate::utils::disk::verify_destination;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// One export-by-copy request: a fixed source list and a destination.
///
/// Sources may contain duplicates; each entry is copied independently.
pub struct CopyJob {
    sources: Vec<PathBuf>,
    destination: PathBuf,
    state: SharedJobState,
}

impl CopyJob {
    pub fn new(sources: Vec<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        let id = uuid::Uuid::new_v4().to_string();
        let state = JobState::new(id, sources.len());
        Self {
            sources,
            destination: destination.into(),
            state,
        }
    }

    pub fn id(&self) -> &str {
        self.state.id()
    }

    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    pub fn status(&self) -> JobStatus {
        self.state.status()
    }

    pub fn completed(&self) -> usize {
        self.state.completed()
    }

    pub fn summary(&self) -> JobSummary {
        self.state.summary()
    }
}

/// Spawns copy workers on a tokio runtime.
///
/// Holding a runtime [`Handle`] lets a caller that is not itself inside the
/// runtime (a UI thread, for instance) start jobs without blocking.
#[derive(Clone)]
pub struct CopyPipeline {
    runtime: Handle,
    copier: Arc<dyn FileCopier>,
}

impl CopyPipeline {
    pub fn new(runtime: Handle) -> Self {
        Self {
            runtime,
            copier: Arc::new(FsCopier),
        }
    }

    /// Uses the runtime the caller is currently running on.
    pub fn current() -> Result<Self, SetupError> {
        Handle::try_current()
            .map(Self::new)
            .map_err(|_| SetupError::NoRuntime)
    }

    pub fn with_copier(mut self, copier: Arc<dyn FileCopier>) -> Self {
        self.copier = copier;
        self
    }

    /// Validates the destination and spawns the worker.
    ///
    /// Returns as soon as the worker is spawned. On a setup failure the job is
    /// marked Failed, nothing is spawned and `sink` is never called.
    pub fn start(
        &self,
        job: &CopyJob,
        sink: impl ProgressSink,
        cancel: CancelToken,
    ) -> Result<JobHandle, SetupError> {
        if job.status() != JobStatus::Pending {
            return Err(SetupError::AlreadyStarted(job.id().to_string()));
        }

        if let Err(e) = verify_destination(&job.destination) {
            error!("Job {}: cannot start: {}", job.id(), e);
            job.state.finish(JobStatus::Failed);
            return Err(e);
        }

        if !job.state.begin() {
            return Err(SetupError::AlreadyStarted(job.id().to_string()));
        }

        info!(
            "Job {}: starting copy of {} files to {:?}",
            job.id(),
            job.sources.len(),
            job.destination
        );

        // The worker gets its own snapshot of the source list.
        let worker = CopyWorker::new(
            job.state.clone(),
            job.sources.clone(),
            job.destination.clone(),
            cancel.clone(),
            self.copier.clone(),
            Box::new(sink),
        );
        let task = self.runtime.spawn(worker.run());

        Ok(JobHandle {
            state: job.state.clone(),
            cancel,
            task,
        })
    }
}

/// Caller-side view of a running job.
///
/// Dropping the handle detaches the worker; call [`JobHandle::wait`] before
/// tearing down anything the progress sink refers to.
pub struct JobHandle {
    state: SharedJobState,
    cancel: CancelToken,
    task: JoinHandle<JobSummary>,
}

impl JobHandle {
    pub fn id(&self) -> &str {
        self.state.id()
    }

    pub fn status(&self) -> JobStatus {
        self.state.status()
    }

    pub fn total(&self) -> usize {
        self.state.total()
    }

    pub fn completed(&self) -> usize {
        self.state.completed()
    }

    /// Aggregate count of swallowed per-file failures.
    pub fn failed(&self) -> usize {
        self.state.failed()
    }

    /// Requests cancellation at the next file boundary. Never blocks.
    pub fn cancel(&self) {
        info!("Job {}: cancellation requested", self.state.id());
        self.cancel.cancel();
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Waits for the worker to terminate.
    pub async fn wait(self) -> JobSummary {
        match self.task.await {
            Ok(summary) => summary,
            Err(e) => {
                error!("Job {}: worker terminated abnormally: {}", self.state.id(), e);
                self.state.finish(JobStatus::Failed);
                self.state.summary()
            }
        }
    }
}
