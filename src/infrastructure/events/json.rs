//! JSON Event Sink
//!
//! Outputs generate events as NDJSON for CI/automation consumption.

use crate::domain::ports::{GenerateEvent, GenerateEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
    progress: bool,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
            progress: true,
        }
    }

    /// Drop per-chunk download events from the stream
    pub fn without_progress(mut self) -> Self {
        self.progress = false;
        self
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl GenerateEventSink for JsonEventSink {
    fn on_event(&self, event: GenerateEvent) {
        let json = match event {
            GenerateEvent::Started { output_dir } => serde_json::json!({
                "event": "start",
                "command": "generate",
                "output_dir": output_dir.display().to_string(),
            }),

            GenerateEvent::ReleaseResolved {
                version,
                archive_url,
            } => serde_json::json!({
                "event": "release_resolved",
                "version": version,
                "archive_url": archive_url,
            }),

            GenerateEvent::DownloadStarted { url, dest } => serde_json::json!({
                "event": "download_start",
                "url": url,
                "dest": dest.display().to_string(),
            }),

            GenerateEvent::DownloadProgress(progress) => serde_json::json!({
                "event": "download_progress",
                "downloaded": progress.downloaded,
                "total": progress.total,
            }),

            GenerateEvent::DownloadFinished { bytes } => serde_json::json!({
                "event": "download_complete",
                "bytes": bytes,
            }),

            GenerateEvent::Extracted { root } => serde_json::json!({
                "event": "extracted",
                "root": root.display().to_string(),
            }),

            GenerateEvent::FontCopied {
                original,
                renamed,
                role,
            } => serde_json::json!({
                "event": "font_copied",
                "original": original,
                "renamed": renamed,
                "role": role,
            }),

            GenerateEvent::ManifestLoaded { icon_count } => serde_json::json!({
                "event": "manifest_loaded",
                "icons": icon_count,
            }),

            GenerateEvent::FileWritten { path } => serde_json::json!({
                "event": "item_written",
                "path": path.display().to_string(),
            }),

            GenerateEvent::Completed {
                version,
                package_name,
                font_count,
                icon_count,
            } => serde_json::json!({
                "event": "complete",
                "command": "generate",
                "status": "success",
                "version": version,
                "package": package_name,
                "fonts": font_count,
                "icons": icon_count,
            }),
        };

        self.write_event(json);
    }

    fn wants_progress_events(&self) -> bool {
        self.progress
    }
}
