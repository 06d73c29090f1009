//! Error-tolerant sequential batch execution
//!
//! This module drives the splitter over an ordered list of captured
//! images, one at a time. Per-image failures are recorded and skipped
//! so a single bad input never halts the batch; progress is reported
//! after every attempted image.

mod source;
mod result;
mod progress;
mod runner;


// Public exports
pub use source::SourceImage;
pub use result::{BatchFailure, ProcessedResult, RunState};
pub use progress::{ProgressEvent, ProgressSink};
pub use runner::BatchRunner;
