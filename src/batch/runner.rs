//! Sequential batch execution
//!
//! The runner folds the splitter over the input list, accumulating
//! successes and failures in two ordered lists. It is the only writer
//! of both lists and of the run state; callers read them back once the
//! state reaches `Completed`. There is no cancellation — a started run
//! attempts every input. The end of each loop iteration is where a
//! cancellation checkpoint would go if one were added.

use log::{info, warn};

use crate::errors::{SplitError, SplitResult};
use crate::splitter::QuadrantSplitter;

use super::progress::{ProgressEvent, ProgressSink};
use super::result::{BatchFailure, ProcessedResult, RunState};
use super::source::SourceImage;

/// Drives the splitter over an ordered list of captured images
pub struct BatchRunner {
    splitter: QuadrantSplitter,
    state: RunState,
    progress: u8,
    results: Vec<ProcessedResult>,
    failures: Vec<BatchFailure>,
}

impl BatchRunner {
    /// Create an idle runner with no accumulated output
    pub fn new() -> Self {
        BatchRunner {
            splitter: QuadrantSplitter::new(),
            state: RunState::Idle,
            progress: 0,
            results: Vec::new(),
            failures: Vec::new(),
        }
    }

    /// Current run state
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Progress of the current or last run, 0-100
    pub fn progress(&self) -> u8 {
        self.progress
    }

    /// Results of the last run, in input order
    pub fn results(&self) -> &[ProcessedResult] {
        &self.results
    }

    /// Failures of the last run, in input order
    pub fn failures(&self) -> &[BatchFailure] {
        &self.failures
    }

    /// Discard accumulated output and return to the idle state
    pub fn clear(&mut self) {
        self.results.clear();
        self.failures.clear();
        self.state = RunState::Idle;
        self.progress = 0;
    }

    /// Process every captured image strictly in order
    ///
    /// A failing image is recorded and skipped so the batch always
    /// runs to the end; progress is updated after every attempted
    /// image and reaches 100 regardless of per-image outcomes. An
    /// empty input list is a no-op that leaves the runner untouched.
    ///
    /// # Arguments
    /// * `images` - The ordered batch inputs
    /// * `sink` - Optional observer for progress events
    ///
    /// # Returns
    /// Ok once every input has been attempted, or
    /// [`SplitError::BatchAlreadyRunning`] on a re-entrant start
    pub fn run(
        &mut self,
        images: &[SourceImage],
        sink: Option<&dyn ProgressSink>,
    ) -> SplitResult<()> {
        if self.state == RunState::Processing {
            return Err(SplitError::BatchAlreadyRunning);
        }

        let total = images.len();
        if total == 0 {
            return Ok(());
        }

        self.state = RunState::Processing;
        self.progress = 0;
        self.results.clear();
        self.failures.clear();

        info!("Starting batch run over {} images", total);

        for (index, source) in images.iter().enumerate() {
            let name = source.display_name().to_string();
            emit(sink, ProgressEvent::Started {
                name: name.clone(),
                index,
                total,
            });

            match self.splitter.split(source.bytes()) {
                Ok(quadrants) => {
                    let id = format!("result-{}", self.results.len() + 1);
                    self.results.push(ProcessedResult {
                        id,
                        display_name: name.clone(),
                        quadrants,
                    });
                    emit(sink, ProgressEvent::Completed { name, index });
                }
                Err(error) => {
                    warn!("Skipping '{}': {}", name, error);
                    emit(sink, ProgressEvent::Skipped {
                        name: name.clone(),
                        reason: error.to_string(),
                    });
                    self.failures.push(BatchFailure {
                        display_name: name,
                        error,
                    });
                }
            }

            self.progress = percent(index + 1, total);
        }

        self.state = RunState::Completed;
        info!("Batch run finished: {} split, {} skipped",
              self.results.len(), self.failures.len());
        emit(sink, ProgressEvent::Finished {
            processed: self.results.len(),
            skipped: self.failures.len(),
        });

        Ok(())
    }
}

impl Default for BatchRunner {
    fn default() -> Self {
        Self::new()
    }
}

/// Integer percentage of attempted inputs, rounded to nearest
pub(crate) fn percent(attempted: usize, total: usize) -> u8 {
    ((attempted as f64 * 100.0) / total as f64).round() as u8
}

fn emit(sink: Option<&dyn ProgressSink>, event: ProgressEvent) {
    if let Some(sink) = sink {
        sink.on_event(event);
    }
}
