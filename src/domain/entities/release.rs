//! Release entity - the resolved upstream release for this run

/// Latest published release and the desktop archive chosen from it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    version: String,
    archive_url: String,
}

impl Release {
    pub fn new(version: impl Into<String>, archive_url: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            archive_url: archive_url.into(),
        }
    }

    /// Release tag as published (e.g. `6.5.0`)
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn archive_url(&self) -> &str {
        &self.archive_url
    }
}
