//! Archive Source Port
//!
//! Downloads a release archive to a local file.

use std::path::Path;

use crate::error::FaltexResult;

/// Cumulative transfer state reported after every chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferProgress {
    pub downloaded: u64,
    /// Total size if the server announced one
    pub total: Option<u64>,
}

impl TransferProgress {
    /// Percentage in `0.0..=100.0`, or `None` when the total is unknown
    pub fn percent(&self) -> Option<f64> {
        match self.total {
            Some(total) if total > 0 => Some((self.downloaded as f64 / total as f64) * 100.0),
            _ => None,
        }
    }
}

pub trait ArchiveSource {
    /// Stream `url` into `dest`, calling `on_progress` after every chunk.
    ///
    /// An error returned by `on_progress` aborts the transfer and is
    /// propagated unchanged. Returns the number of bytes written.
    fn download(
        &self,
        url: &str,
        dest: &Path,
        on_progress: &mut dyn FnMut(TransferProgress) -> FaltexResult<()>,
    ) -> FaltexResult<u64>;
}
