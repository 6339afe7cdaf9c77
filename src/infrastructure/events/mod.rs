//! Event Sink Implementations
//!
//! - JsonEventSink: NDJSON output for CI/automation
//!
//! The terminal progress sink lives with the binary's UI code.

mod json;

pub use json::JsonEventSink;
