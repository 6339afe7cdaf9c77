//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use crate::application::GenerateUseCase;
use crate::config::SourceConfig;
use crate::infrastructure::{GithubReleaseSource, HttpArchiveSource};

/// Type alias for the concrete GenerateUseCase with all dependencies
pub type ConcreteGenerateUseCase = GenerateUseCase<GithubReleaseSource, HttpArchiveSource>;

/// Create a generate use case talking to the configured release API.
///
/// `running` is the flag cleared by the Ctrl+C handler.
pub fn create_generate_use_case(
    source: &SourceConfig,
    running: Arc<AtomicBool>,
) -> ConcreteGenerateUseCase {
    let releases = GithubReleaseSource::new(source.clone());
    let archives = HttpArchiveSource::new(&source.user_agent);

    GenerateUseCase::new(releases, archives).with_running_flag(running)
}
