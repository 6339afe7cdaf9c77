//! FontFileRecord entity - one normalized font binary

use std::path::{Path, PathBuf};

/// Remove every space character from a font filename.
///
/// Only `' '` is stripped. Other characters, including other whitespace, are
/// left untouched.
pub fn normalize_font_name(name: &str) -> String {
    name.chars().filter(|c| *c != ' ').collect()
}

/// A font binary copied into the output directory under its normalized name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFileRecord {
    original_name: String,
    renamed_name: String,
    path: PathBuf,
}

impl FontFileRecord {
    /// Build a record for `original_name` copied into `fonts_dir`
    pub fn new(original_name: impl Into<String>, fonts_dir: &Path) -> Self {
        let original_name = original_name.into();
        let renamed_name = normalize_font_name(&original_name);
        let path = fonts_dir.join(&renamed_name);
        Self {
            original_name,
            renamed_name,
            path,
        }
    }

    pub fn original_name(&self) -> &str {
        &self.original_name
    }

    pub fn renamed_name(&self) -> &str {
        &self.renamed_name
    }

    /// Destination path in the output `fonts/` directory
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn was_renamed(&self) -> bool {
        self.original_name != self.renamed_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_spaces() {
        assert_eq!(
            normalize_font_name("Font Awesome 6 Brands-Regular.otf"),
            "FontAwesome6Brands-Regular.otf"
        );
    }

    #[test]
    fn keeps_tabs_and_other_characters() {
        assert_eq!(normalize_font_name("a\tb c_d.otf"), "a\tbc_d.otf");
    }

    #[test]
    fn record_path_uses_renamed_name() {
        let record = FontFileRecord::new("Font Awesome 6 Free-Solid-900.otf", Path::new("out/fonts"));
        assert_eq!(record.renamed_name(), "FontAwesome6Free-Solid-900.otf");
        assert_eq!(
            record.path(),
            Path::new("out/fonts/FontAwesome6Free-Solid-900.otf")
        );
        assert!(record.was_renamed());
    }
}
