//! Generate Result

use std::path::PathBuf;

use crate::domain::entities::{FontFileRecord, Release};

/// Outcome of a successful generate run
#[derive(Debug, Clone)]
pub struct GenerateResult {
    pub release: Release,
    /// e.g. `fontawesome6`
    pub package_name: String,
    pub output_dir: PathBuf,
    pub fonts: Vec<FontFileRecord>,
    /// Icons in the manifest
    pub manifest_size: usize,
    /// `(style, icon)` macros emitted into the package
    pub icon_count: usize,
    /// Generated text files, in write order
    pub written: Vec<PathBuf>,
    pub archive_bytes: u64,
}

impl GenerateResult {
    pub fn font_count(&self) -> usize {
        self.fonts.len()
    }

    pub fn renamed_count(&self) -> usize {
        self.fonts.iter().filter(|f| f.was_renamed()).count()
    }
}
