//! Progress reporting port for UI integration.

/// Events emitted while a batch run advances.
#[derive(Debug, Clone)]
pub enum ProgressEvent {
    /// Splitting started for an image.
    Started {
        /// Display name of the image.
        name: String,
        /// Index in the batch (0-based).
        index: usize,
        /// Total images in the batch.
        total: usize,
    },
    /// An image was split successfully.
    Completed {
        /// Display name of the image.
        name: String,
        /// Index in the batch (0-based).
        index: usize,
    },
    /// An image was skipped due to an error.
    Skipped {
        /// Display name of the image.
        name: String,
        /// Reason for skipping.
        reason: String,
    },
    /// Every image in the batch has been attempted.
    Finished {
        /// Images split successfully.
        processed: usize,
        /// Images skipped.
        skipped: usize,
    },
}

/// Port for receiving progress events.
pub trait ProgressSink: Send + Sync {
    /// Called when a progress event occurs.
    fn on_event(&self, event: ProgressEvent);
}
