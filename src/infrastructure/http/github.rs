//! GitHub "latest release" resolver

use serde::Deserialize;

use crate::config::SourceConfig;
use crate::domain::entities::Release;
use crate::domain::ports::ReleaseSource;
use crate::error::{FaltexError, FaltexResult};

/// Subset of the GitHub release payload that we read
#[derive(Debug, Clone, Deserialize)]
pub struct ReleasePayload {
    pub tag_name: String,
    #[serde(default)]
    pub assets: Vec<ReleaseAsset>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseAsset {
    pub name: String,
    pub browser_download_url: String,
}

/// First asset whose name contains `keyword` (case-insensitive) and ends with
/// `extension`. Assets are scanned in payload order.
pub fn select_archive_asset<'a>(
    assets: &'a [ReleaseAsset],
    keyword: &str,
    extension: &str,
) -> Option<&'a ReleaseAsset> {
    let keyword = keyword.to_lowercase();
    assets
        .iter()
        .find(|a| a.name.to_lowercase().contains(&keyword) && a.name.ends_with(extension))
}

/// Turn a parsed payload into a [`Release`] or a resolution error
pub fn resolve_release(payload: &ReleasePayload, source: &SourceConfig) -> FaltexResult<Release> {
    let asset = select_archive_asset(
        &payload.assets,
        &source.asset_keyword,
        &source.archive_extension,
    )
    .ok_or_else(|| FaltexError::Resolution {
        version: payload.tag_name.clone(),
        keyword: source.asset_keyword.clone(),
        extension: source.archive_extension.clone(),
    })?;

    Ok(Release::new(
        payload.tag_name.clone(),
        asset.browser_download_url.clone(),
    ))
}

/// Release source backed by the GitHub REST API
pub struct GithubReleaseSource {
    agent: ureq::Agent,
    source: SourceConfig,
}

impl GithubReleaseSource {
    pub fn new(source: SourceConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .user_agent(&source.user_agent)
            .build();
        Self { agent, source }
    }

    fn fetch_payload(&self) -> FaltexResult<ReleasePayload> {
        let url = &self.source.api_url;
        let response = self
            .agent
            .get(url)
            .set("Accept", "application/vnd.github+json")
            .call()
            .map_err(|e| FaltexError::network(url, describe_ureq_error(e)))?;

        let body = response
            .into_string()
            .map_err(|e| FaltexError::network(url, e))?;

        serde_json::from_str(&body)
            .map_err(|e| FaltexError::network(url, format!("unexpected release payload: {}", e)))
    }
}

impl ReleaseSource for GithubReleaseSource {
    fn latest_release(&self) -> FaltexResult<Release> {
        let payload = self.fetch_payload()?;
        resolve_release(&payload, &self.source)
    }
}

/// Readable message for a ureq failure (status errors keep the status line)
pub(crate) fn describe_ureq_error(err: ureq::Error) -> String {
    match err {
        ureq::Error::Status(code, response) => {
            format!("HTTP {} {}", code, response.status_text())
        }
        ureq::Error::Transport(transport) => transport.to_string(),
    }
}
