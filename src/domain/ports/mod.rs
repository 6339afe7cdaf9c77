//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod archive_source;
pub mod generate_events;
pub mod release_source;

pub use archive_source::{ArchiveSource, TransferProgress};
pub use generate_events::{GenerateEvent, GenerateEventSink, NoopEventSink, RecordingEventSink};
pub use release_source::ReleaseSource;
