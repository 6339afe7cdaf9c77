//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{FontRoleTable, DEFAULT_MAJOR};
use crate::error::FaltexResult;

use super::loader::{self, ConfigWarning};

pub const DEFAULT_API_URL: &str =
    "https://api.github.com/repos/FortAwesome/Font-Awesome/releases/latest";
pub const DEFAULT_OUTPUT_DIR: &str = "./fontawesome7-latex-latest";

/// Where and how the release is fetched
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Case-insensitive substring an asset name must contain
    #[serde(default = "default_asset_keyword")]
    pub asset_keyword: String,

    /// Suffix an asset name must end with
    #[serde(default = "default_archive_extension")]
    pub archive_extension: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            user_agent: default_user_agent(),
            asset_keyword: default_asset_keyword(),
            archive_extension: default_archive_extension(),
        }
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_user_agent() -> String {
    format!("faltex/{}", env!("CARGO_PKG_VERSION"))
}

fn default_asset_keyword() -> String {
    "desktop".to_string()
}

fn default_archive_extension() -> String {
    ".zip".to_string()
}

/// Expected layout of the extracted release
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Directory (relative to the extracted root) holding font binaries
    #[serde(default = "default_fonts_dir")]
    pub fonts_dir: PathBuf,

    /// Font file extension, without the dot
    #[serde(default = "default_font_extension")]
    pub font_extension: String,

    /// Icon manifest path relative to the extracted root
    #[serde(default = "default_manifest_path")]
    pub manifest_path: PathBuf,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            fonts_dir: default_fonts_dir(),
            font_extension: default_font_extension(),
            manifest_path: default_manifest_path(),
        }
    }
}

fn default_fonts_dir() -> PathBuf {
    PathBuf::from("otfs")
}

fn default_font_extension() -> String {
    "otf".to_string()
}

fn default_manifest_path() -> PathBuf {
    PathBuf::from("metadata").join("icons.json")
}

/// Generated package settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,

    /// Major version used when the release tag has no digits
    #[serde(default = "default_fallback_major")]
    pub fallback_major: String,

    /// Engine invoked by the generated Makefile
    #[serde(default = "default_latex_engine")]
    pub latex_engine: String,

    /// Parent of the disposable working directory (system temp dir if unset)
    #[serde(default)]
    pub work_parent: Option<PathBuf>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            fallback_major: default_fallback_major(),
            latex_engine: default_latex_engine(),
            work_parent: None,
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

fn default_fallback_major() -> String {
    DEFAULT_MAJOR.to_string()
}

fn default_latex_engine() -> String {
    "xelatex".to_string()
}

/// Font role rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FontsConfig {
    #[serde(default)]
    pub roles: FontRoleTable,
}

/// Root configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub fonts: FontsConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> FaltexResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> FaltexResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Replace the output directory (CLI `--output` wins over the file)
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output.dir = dir.into();
        self
    }
}
