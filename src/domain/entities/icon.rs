//! Icon entities
//!
//! - `IconEntry` - one icon from `icons.json`
//! - `IconManifest` - all icons, in manifest order
//! - `StyleClassification` - icons grouped by the styles they support

use std::collections::BTreeSet;

use crate::domain::value_objects::IconStyle;

/// One icon definition from the manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconEntry {
    name: String,
    styles: BTreeSet<String>,
    unicode: Option<String>,
}

impl IconEntry {
    pub fn new<I, S>(name: impl Into<String>, styles: I, unicode: Option<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            styles: styles.into_iter().map(Into::into).collect(),
            unicode,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn styles(&self) -> &BTreeSet<String> {
        &self.styles
    }

    /// Code-point as written in the manifest (e.g. `f09b`)
    pub fn unicode(&self) -> Option<&str> {
        self.unicode.as_deref()
    }

    pub fn supports(&self, style: IconStyle) -> bool {
        self.styles.contains(style.manifest_key())
    }

    /// Code-point uppercased for a `\symbol{"XXXX}` literal
    pub fn symbol_hex(&self) -> Option<String> {
        self.unicode.as_deref().map(str::to_uppercase)
    }
}

/// All icons from a manifest, in manifest order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconManifest {
    entries: Vec<IconEntry>,
}

impl IconManifest {
    pub fn new(entries: Vec<IconEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[IconEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn classify(&self) -> StyleClassification<'_> {
        StyleClassification::from_manifest(self)
    }
}

impl FromIterator<IconEntry> for IconManifest {
    fn from_iter<T: IntoIterator<Item = IconEntry>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Icons grouped per style. An icon appears once in every style it supports.
#[derive(Debug, Clone)]
pub struct StyleClassification<'a> {
    brands: Vec<&'a IconEntry>,
    regular: Vec<&'a IconEntry>,
    solid: Vec<&'a IconEntry>,
}

impl<'a> StyleClassification<'a> {
    pub fn from_manifest(manifest: &'a IconManifest) -> Self {
        let pick = |style: IconStyle| -> Vec<&'a IconEntry> {
            manifest
                .entries()
                .iter()
                .filter(|icon| icon.supports(style))
                .collect()
        };

        Self {
            brands: pick(IconStyle::Brands),
            regular: pick(IconStyle::Regular),
            solid: pick(IconStyle::Solid),
        }
    }

    pub fn icons(&self, style: IconStyle) -> &[&'a IconEntry] {
        match style {
            IconStyle::Brands => &self.brands,
            IconStyle::Regular => &self.regular,
            IconStyle::Solid => &self.solid,
        }
    }

    /// Icons of `style` that carry a code-point and therefore get a macro
    pub fn renderable(&self, style: IconStyle) -> impl Iterator<Item = &'a IconEntry> + '_ {
        self.icons(style)
            .iter()
            .copied()
            .filter(|icon| icon.unicode().is_some())
    }

    /// Number of (style, icon) pairs that get a macro
    pub fn renderable_count(&self) -> usize {
        IconStyle::ALL
            .iter()
            .map(|style| self.renderable(*style).count())
            .sum()
    }
}
