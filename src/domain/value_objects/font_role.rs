//! Font role detection
//!
//! A font file's role (which style it renders) is decided by the first entry
//! of an ordered table whose pattern occurs in the normalized filename.

use serde::{Deserialize, Serialize};

use super::IconStyle;

/// A single `pattern -> style` rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontRole {
    pub pattern: String,
    pub style: IconStyle,
}

impl FontRole {
    pub fn new(pattern: impl Into<String>, style: IconStyle) -> Self {
        Self {
            pattern: pattern.into(),
            style,
        }
    }
}

/// Ordered role rules. Earlier rules win, so `"... Brands-Regular.otf"` is a
/// Brands font under the default table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FontRoleTable(Vec<FontRole>);

impl FontRoleTable {
    pub fn new(roles: Vec<FontRole>) -> Self {
        Self(roles)
    }

    pub fn roles(&self) -> &[FontRole] {
        &self.0
    }

    /// Style for a font filename, or `None` if no rule matches
    pub fn detect(&self, file_name: &str) -> Option<IconStyle> {
        self.0
            .iter()
            .find(|role| file_name.contains(role.pattern.as_str()))
            .map(|role| role.style)
    }
}

impl Default for FontRoleTable {
    fn default() -> Self {
        Self(
            IconStyle::ALL
                .iter()
                .map(|style| FontRole::new(style.label(), *style))
                .collect(),
        )
    }
}
