use super::JobSummary;
use crossbeam_channel::Sender;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProgressUpdate {
    /// Files attempted so far, including swallowed failures.
    pub completed: usize,
    pub total: usize,
    /// `100 * completed / total`
    pub percent: f64,
}

impl ProgressUpdate {
    pub fn new(completed: usize, total: usize) -> Self {
        let percent = if total == 0 {
            100.0
        } else {
            100.0 * completed as f64 / total as f64
        };
        Self {
            completed,
            total,
            percent,
        }
    }
}

/// Receiver of copy progress.
///
/// Called from the worker's execution context. Implementations that feed a
/// non thread-safe UI must marshal back to their own thread themselves;
/// [`ChannelSink`] does this by queueing events for the UI to poll.
pub trait ProgressSink: Send + Sync + 'static {
    /// One call per attempted file, in source order.
    fn on_progress(&self, update: ProgressUpdate);

    /// Called once after the last file of a job that was not cancelled.
    fn on_complete(&self, _summary: &JobSummary) {}
}

impl<F> ProgressSink for F
where
    F: Fn(ProgressUpdate) + Send + Sync + 'static,
{
    fn on_progress(&self, update: ProgressUpdate) {
        self(update)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum CopyEvent {
    Progress(ProgressUpdate),
    Completed(JobSummary),
}

/// Forwards progress as [`CopyEvent`]s over a crossbeam channel.
///
/// The channel disconnects when the worker drops the sink, so a receiver
/// loop ends on its own once the job terminates.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: Sender<CopyEvent>,
}

impl ChannelSink {
    pub fn new(tx: Sender<CopyEvent>) -> Self {
        Self { tx }
    }
}

impl ProgressSink for ChannelSink {
    fn on_progress(&self, update: ProgressUpdate) {
        // A closed receiver means nobody is listening any more.
        let _ = self.tx.send(CopyEvent::Progress(update));
    }

    fn on_complete(&self, summary: &JobSummary) {
        let _ = self.tx.send(CopyEvent::Completed(summary.clone()));
    }
}
