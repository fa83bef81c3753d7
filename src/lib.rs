//! Core of an image-selection tool: discrete zoom stepping, an ordered
//! selection, the `selection.json` manifest and a cancellable background
//! copy of the selected files.

pub mod error;
pub mod export;
pub mod utils;
pub mod viewer;

pub use error::{PerFileError, SetupError, ViewerError};
pub use export::{
    CancelToken, ChannelSink, CopyEvent, CopyJob, CopyPipeline, JobHandle, JobStatus, JobSummary,
    ProgressSink, ProgressUpdate,
};
pub use viewer::{Selection, ViewerSession, ZoomController};
