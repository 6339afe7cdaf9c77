//! Release Source Port
//!
//! Resolves the latest upstream release to a version and archive URL.

use crate::domain::entities::Release;
use crate::error::FaltexResult;

pub trait ReleaseSource {
    /// Resolve the latest published release and its desktop archive
    fn latest_release(&self) -> FaltexResult<Release>;
}
