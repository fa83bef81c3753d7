pub mod copier;
pub mod manifest;
pub mod pipeline;
pub mod progress;
mod worker;

pub use copier::{FileCopier, FsCopier};
pub use manifest::{load_manifest, save_manifest, sources_for_copy, MANIFEST_FILE_NAME};
pub use pipeline::{CopyJob, CopyPipeline, JobHandle};
pub use progress::{ChannelSink, CopyEvent, ProgressSink, ProgressUpdate};

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Pending,
    Running,
    Cancelled,
    Completed,
    /// Setup failed before any worker ran, or the worker died.
    Failed,
}

impl JobStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, JobStatus::Cancelled | JobStatus::Completed | JobStatus::Failed)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobSummary {
    pub id: String,
    pub status: JobStatus,
    pub total: usize,
    /// Files attempted, successful or not.
    pub completed: usize,
    /// Attempts that failed and were swallowed.
    pub failed: usize,
    pub started_at: Option<i64>,
    pub finished_at: Option<i64>,
}

/// Cooperative cancellation flag shared between the caller and the worker.
///
/// Checked by the worker once per file boundary. Cancelling is idempotent.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

#[derive(Debug)]
struct JobRecord {
    status: JobStatus,
    started_at: Option<i64>,
    finished_at: Option<i64>,
}

// Shared between the job, its handle and the worker
#[derive(Debug)]
pub(crate) struct JobState {
    id: String,
    total: usize,
    record: RwLock<JobRecord>,
    completed: AtomicUsize,
    failed: AtomicUsize,
}

pub(crate) type SharedJobState = Arc<JobState>;

impl JobState {
    pub(crate) fn new(id: String, total: usize) -> SharedJobState {
        Arc::new(Self {
            id,
            total,
            record: RwLock::new(JobRecord {
                status: JobStatus::Pending,
                started_at: None,
                finished_at: None,
            }),
            completed: AtomicUsize::new(0),
            failed: AtomicUsize::new(0),
        })
    }

    pub(crate) fn id(&self) -> &str {
        &self.id
    }

    pub(crate) fn total(&self) -> usize {
        self.total
    }

    pub(crate) fn status(&self) -> JobStatus {
        self.record.read().status
    }

    pub(crate) fn completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }

    pub(crate) fn failed(&self) -> usize {
        self.failed.load(Ordering::SeqCst)
    }

    /// Moves Pending to Running. Returns false if the job already left Pending.
    pub(crate) fn begin(&self) -> bool {
        let mut record = self.record.write();
        if record.status != JobStatus::Pending {
            return false;
        }
        record.status = JobStatus::Running;
        record.started_at = Some(chrono::Utc::now().timestamp());
        true
    }

    /// Records one attempted file and returns the new attempt count.
    pub(crate) fn record_attempt(&self, succeeded: bool) -> usize {
        if !succeeded {
            self.failed.fetch_add(1, Ordering::SeqCst);
        }
        self.completed.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Terminal states are sticky; the first one recorded wins.
    pub(crate) fn finish(&self, status: JobStatus) {
        let mut record = self.record.write();
        if record.status.is_terminal() {
            return;
        }
        record.status = status;
        record.finished_at = Some(chrono::Utc::now().timestamp());
    }

    pub(crate) fn summary(&self) -> JobSummary {
        let record = self.record.read();
        JobSummary {
            id: self.id.clone(),
            status: record.status,
            total: self.total,
            completed: self.completed(),
            failed: self.failed(),
            started_at: record.started_at,
            finished_at: record.finished_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_token_is_idempotent_and_shared() {
        let token = CancelToken::new();
        let clone = token.clone();
        assert!(!clone.is_cancelled());

        token.cancel();
        token.cancel();
        assert!(clone.is_cancelled());
    }

    #[test]
    fn test_job_state_begins_once() {
        let state = JobState::new("job".to_string(), 2);
        assert_eq!(state.status(), JobStatus::Pending);
        assert!(state.begin());
        assert!(!state.begin());
        assert_eq!(state.status(), JobStatus::Running);
        assert!(state.summary().started_at.is_some());
    }

    #[test]
    fn test_terminal_status_is_sticky() {
        let state = JobState::new("job".to_string(), 1);
        state.begin();
        state.finish(JobStatus::Cancelled);
        state.finish(JobStatus::Completed);
        assert_eq!(state.status(), JobStatus::Cancelled);
    }

    #[test]
    fn test_attempts_count_failures_separately() {
        let state = JobState::new("job".to_string(), 3);
        assert_eq!(state.record_attempt(true), 1);
        assert_eq!(state.record_attempt(false), 2);
        assert_eq!(state.record_attempt(true), 3);

        let summary = state.summary();
        assert_eq!(summary.completed, 3);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.total, 3);
    }
}
