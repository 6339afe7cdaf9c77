//! Generate Event Port
//!
//! Provides an observable interface for the generate pipeline.
//! Enables progress reporting, JSON event streams, and debugging.

use std::path::PathBuf;

use crate::domain::value_objects::IconStyle;

use super::archive_source::TransferProgress;

/// Event emitted while generating a package
#[derive(Debug, Clone)]
pub enum GenerateEvent {
    /// Run started
    Started { output_dir: PathBuf },

    /// Latest release resolved
    ReleaseResolved { version: String, archive_url: String },

    /// Archive transfer started
    DownloadStarted { url: String, dest: PathBuf },

    /// One chunk written
    DownloadProgress(TransferProgress),

    /// Archive transfer finished
    DownloadFinished { bytes: u64 },

    /// Archive extracted, single root directory found
    Extracted { root: PathBuf },

    /// One font copied into the output `fonts/` directory
    FontCopied {
        original: String,
        renamed: String,
        role: Option<IconStyle>,
    },

    /// Icon manifest loaded
    ManifestLoaded { icon_count: usize },

    /// Generated file written
    FileWritten { path: PathBuf },

    /// Run finished
    Completed {
        version: String,
        package_name: String,
        font_count: usize,
        icon_count: usize,
    },
}

/// Trait for receiving generate events
///
/// Implementations:
/// - ConsoleEventSink (binary): terminal progress
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: silent operation
pub trait GenerateEventSink {
    /// Handle a generate event
    fn on_event(&self, event: GenerateEvent);

    /// Whether this sink wants per-file events (`FontCopied`)
    fn wants_detailed_events(&self) -> bool {
        true
    }

    /// Whether this sink wants per-chunk `DownloadProgress` events
    fn wants_progress_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl GenerateEventSink for NoopEventSink {
    fn on_event(&self, _event: GenerateEvent) {}
}

/// Event sink that records events (for tests)
#[derive(Default)]
pub struct RecordingEventSink {
    events: std::cell::RefCell<Vec<GenerateEvent>>,
}

impl RecordingEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<GenerateEvent> {
        self.events.borrow().clone()
    }
}

impl GenerateEventSink for RecordingEventSink {
    fn on_event(&self, event: GenerateEvent) {
        self.events.borrow_mut().push(event);
    }
}
