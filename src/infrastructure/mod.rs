//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `http/` - GitHub release lookup and archive download (ureq)
//! - `fs/` - Workspace, extraction, fonts, manifest and file output
//! - `events/` - Event sinks

pub mod events;
pub mod fs;
pub mod http;

pub use events::JsonEventSink;
pub use fs::ActiveWorkspace;
pub use http::{GithubReleaseSource, HttpArchiveSource};
