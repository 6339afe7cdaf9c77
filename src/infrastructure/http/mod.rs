//! HTTP adapters (ureq, blocking)

mod download;
mod github;

pub use download::{copy_chunked, HttpArchiveSource, CHUNK_SIZE};
pub use github::{
    resolve_release, select_archive_asset, GithubReleaseSource, ReleaseAsset, ReleasePayload,
};
