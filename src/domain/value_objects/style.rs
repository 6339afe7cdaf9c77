//! IconStyle value object - the three Font Awesome visual variants

use serde::{Deserialize, Serialize};

/// Visual style of an icon
///
/// The order of [`IconStyle::ALL`] is the order in which per-style sections
/// appear in the generated package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconStyle {
    Brands,
    Regular,
    Solid,
}

impl IconStyle {
    pub const ALL: [IconStyle; 3] = [IconStyle::Brands, IconStyle::Regular, IconStyle::Solid];

    /// Key used in the `styles` array of `icons.json`
    pub fn manifest_key(&self) -> &'static str {
        match self {
            IconStyle::Brands => "brands",
            IconStyle::Regular => "regular",
            IconStyle::Solid => "solid",
        }
    }

    /// Capitalized name, also the default filename role pattern
    pub fn label(&self) -> &'static str {
        match self {
            IconStyle::Brands => "Brands",
            IconStyle::Regular => "Regular",
            IconStyle::Solid => "Solid",
        }
    }

    /// User-facing command name without the backslash (`fab`, `far`, `fas`)
    pub fn command(&self) -> &'static str {
        match self {
            IconStyle::Brands => "fab",
            IconStyle::Regular => "far",
            IconStyle::Solid => "fas",
        }
    }

    /// Font family switch macro name without the backslash
    pub fn family_macro(&self) -> &'static str {
        match self {
            IconStyle::Brands => "FABrands",
            IconStyle::Regular => "FARegular",
            IconStyle::Solid => "FASolid",
        }
    }

    /// Prefix of the per-icon control sequence names
    pub fn symbol_prefix(&self) -> &'static str {
        match self {
            IconStyle::Brands => "fabicon@",
            IconStyle::Regular => "faricon@",
            IconStyle::Solid => "fasicon@",
        }
    }
}

impl std::fmt::Display for IconStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
