use std::io::Write;

use zip::write::SimpleFileOptions;

pub const RELEASE_ROOT: &str = "fontawesome-free-6.5.0-desktop";

pub const GITHUB_MANIFEST: &str = r#"{"github": {"styles": ["brands"], "unicode": "f09b"}}"#;

/// Build an in-memory zip from `(path, contents)` pairs
pub fn build_zip(files: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
    for (name, data) in files {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(data).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

/// Desktop archive with one brands font and a one-icon manifest
pub fn github_release_zip() -> Vec<u8> {
    let font = format!("{}/otfs/Font Awesome 6 Brands-Regular.otf", RELEASE_ROOT);
    let manifest = format!("{}/metadata/icons.json", RELEASE_ROOT);
    build_zip(&[
        (font.as_str(), b"brands-font"),
        (manifest.as_str(), GITHUB_MANIFEST.as_bytes()),
    ])
}

/// GitHub release payload whose asset list points at `archive_url`
pub fn release_payload(tag: &str, assets: &[(&str, &str)]) -> String {
    let assets: Vec<serde_json::Value> = assets
        .iter()
        .map(|(name, url)| serde_json::json!({ "name": name, "browser_download_url": url }))
        .collect();
    serde_json::json!({ "tag_name": tag, "assets": assets }).to_string()
}
