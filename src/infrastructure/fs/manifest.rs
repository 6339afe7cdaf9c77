//! Icon manifest loading (`metadata/icons.json`)

use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::domain::entities::{IconEntry, IconManifest};
use crate::error::{FaltexError, FaltexResult};

/// Fields of one manifest record that rendering needs; the rest is ignored.
#[derive(Debug, Deserialize)]
struct RawIcon {
    styles: Vec<String>,
    #[serde(default)]
    unicode: Option<String>,
}

/// Read and parse the manifest at `path`
pub fn load_manifest(path: &Path) -> FaltexResult<IconManifest> {
    if !path.is_file() {
        return Err(FaltexError::layout("icon manifest", path));
    }
    let content = std::fs::read_to_string(path)?;
    parse_manifest(&content, path)
}

/// Parse manifest JSON. `origin` is only used in error messages.
///
/// Icons keep manifest order (serde_json is built with `preserve_order`).
pub fn parse_manifest(content: &str, origin: &Path) -> FaltexResult<IconManifest> {
    let root: Map<String, Value> =
        serde_json::from_str(content).map_err(|e| FaltexError::parse(origin, e))?;

    root.into_iter()
        .map(|(name, value)| {
            let raw: RawIcon = serde_json::from_value(value)
                .map_err(|e| FaltexError::parse(origin, format!("icon '{}': {}", name, e)))?;
            Ok(IconEntry::new(name, raw.styles, raw.unicode))
        })
        .collect()
}
