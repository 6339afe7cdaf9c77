//! Common test utilities for faltex integration tests.
//!
//! This module provides:
//! - `ReleaseServer`: a loopback HTTP server serving a release payload and archive
//! - Fixtures: archive builders for release-shaped zips

pub mod fixtures;
pub mod server;

pub use fixtures::*;
pub use server::*;
