//! Generate Options

use std::path::PathBuf;

use crate::config::{Config, LayoutConfig};
use crate::domain::value_objects::{FontRoleTable, GenerationStamp, DEFAULT_MAJOR};

/// Options for the generate use case
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Directory receiving the `.sty`, `fonts/` and companion files
    pub output_dir: PathBuf,
    /// Expected layout of the extracted release
    pub layout: LayoutConfig,
    /// Ordered font role rules
    pub roles: FontRoleTable,
    /// Major version used when the tag has no digits
    pub fallback_major: String,
    /// Engine named in the generated Makefile
    pub latex_engine: String,
    /// Parent of the disposable working directory (system temp dir if unset)
    pub work_parent: Option<PathBuf>,
    /// Fixed timestamp; the current local time is used when unset
    pub stamp: Option<GenerationStamp>,
}

impl GenerateOptions {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            layout: LayoutConfig::default(),
            roles: FontRoleTable::default(),
            fallback_major: DEFAULT_MAJOR.to_string(),
            latex_engine: "xelatex".to_string(),
            work_parent: None,
            stamp: None,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            output_dir: config.output.dir.clone(),
            layout: config.layout.clone(),
            roles: config.fonts.roles.clone(),
            fallback_major: config.output.fallback_major.clone(),
            latex_engine: config.output.latex_engine.clone(),
            work_parent: config.output.work_parent.clone(),
            stamp: None,
        }
    }

    pub fn with_stamp(mut self, stamp: GenerationStamp) -> Self {
        self.stamp = Some(stamp);
        self
    }

    pub fn with_work_parent(mut self, parent: impl Into<PathBuf>) -> Self {
        self.work_parent = Some(parent.into());
        self
    }

    pub fn with_roles(mut self, roles: FontRoleTable) -> Self {
        self.roles = roles;
        self
    }
}
