//! Package definition renderer
//!
//! Produces `fontawesome<major>.sty`. The macro names (`\fab`, `\far`, `\fas`)
//! and symbol prefixes (`fabicon@`, ...) are what documents using the package
//! rely on, so their spelling must not change.

use crate::domain::entities::{FontFileRecord, IconManifest};
use crate::domain::value_objects::{version_major_or, FontRoleTable, GenerationStamp, IconStyle};

/// Everything the renderers need to know about the package being generated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageMeta {
    version: String,
    major: String,
    stamp: GenerationStamp,
}

impl PackageMeta {
    /// Build metadata for `version`, deriving the major number from the tag
    /// (or `fallback_major` when the tag has no digits).
    pub fn new(version: impl Into<String>, fallback_major: &str, stamp: GenerationStamp) -> Self {
        let version = version.into();
        let major = version_major_or(&version, fallback_major).to_string();
        Self {
            version,
            major,
            stamp,
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn major(&self) -> &str {
        &self.major
    }

    pub fn stamp(&self) -> GenerationStamp {
        self.stamp
    }

    /// LaTeX package name, e.g. `fontawesome6`
    pub fn package_name(&self) -> String {
        format!("fontawesome{}", self.major)
    }

    pub fn sty_file_name(&self) -> String {
        format!("{}.sty", self.package_name())
    }
}

/// Rendered package definition plus the number of icon macros it defines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderResult {
    pub content: String,
    pub icon_count: usize,
}

/// Render the complete package definition.
///
/// `icon_count` is the number of `(style, icon)` macros emitted: an icon in
/// two styles counts twice, an icon without a code-point counts zero times.
pub fn render_package(
    meta: &PackageMeta,
    fonts: &[FontFileRecord],
    roles: &FontRoleTable,
    manifest: &IconManifest,
) -> RenderResult {
    let mut content = render_header(meta);

    for font in fonts {
        if let Some(style) = roles.detect(font.renamed_name()) {
            content.push_str(&font_family_line(style, font.renamed_name()));
            content.push('\n');
        }
    }

    content.push_str("\n\n%% Commands for displaying icons\n");
    for style in IconStyle::ALL {
        content.push_str(&command_line(style));
        content.push('\n');
    }
    content.push_str("\n\n\n%% Icon definitions\n");

    let classes = manifest.classify();
    let mut icon_count = 0;
    for style in IconStyle::ALL {
        content.push_str(&format!("\n%% {} icons definitions\n", style.label()));
        for icon in classes.renderable(style) {
            if let Some(hex) = icon.symbol_hex() {
                content.push_str(&icon_line(style, icon.name(), &hex));
                content.push('\n');
                icon_count += 1;
            }
        }
    }

    content.push_str(&format!(
        r"
%% Package info
\PackageInfo{{{package}}}{{Loaded {icon_count} FontAwesome {version} icons}}

\endinput
",
        package = meta.package_name(),
        version = meta.version(),
    ));

    RenderResult {
        content,
        icon_count,
    }
}

fn render_header(meta: &PackageMeta) -> String {
    format!(
        r"%%
%% FontAwesome {version} LaTeX Package
%% Auto-generated on {generated}
%%
%% This package provides easy access to FontAwesome {version} icons in LaTeX documents.
%%
%% Usage:
%%   \usepackage{{{package}}}
%%   \fab{{github}} % for brands icon github
%%   \far{{user}} % for regular icon user
%%   \fas{{user}} % for solid icon user
%%

\NeedsTeXFormat{{LaTeX2e}}
\ProvidesPackage{{{package}}}[{date} FontAwesome {version} icons]

%% Required packages
\RequirePackage{{fontspec}}
\RequirePackage{{xparse}}

%% Check for XeTeX or LuaTeX
\@ifundefined{{XeTeXversion}}{{%
  \@ifundefined{{directlua}}{{%
    \PackageError{{{package}}}{{%
      This package requires XeTeX or LuaTeX.\MessageBreak
      Please compile with xelatex or lualatex.%
    }}{{}}%
  }}{{}}%
}}{{}}

%% Font definitions
",
        version = meta.version(),
        package = meta.package_name(),
        generated = meta.stamp().long(),
        date = meta.stamp().package_date(),
    )
}

/// `\newfontfamily{\FABrands}{<file>}[Path=fonts/]`
fn font_family_line(style: IconStyle, file_name: &str) -> String {
    format!(
        r"\newfontfamily{{\{family}}}{{{file_name}}}[Path=fonts/]",
        family = style.family_macro(),
    )
}

/// `\newcommand*{\fab}[1]{{\FABrands\csname fabicon@#1\endcsname}}`
fn command_line(style: IconStyle) -> String {
    format!(
        r"\newcommand*{{\{command}}}[1]{{{{\{family}\csname {prefix}#1\endcsname}}}}",
        command = style.command(),
        family = style.family_macro(),
        prefix = style.symbol_prefix(),
    )
}

/// `\expandafter\def\csname fabicon@github\endcsname {\symbol{"F09B}}`
fn icon_line(style: IconStyle, name: &str, hex: &str) -> String {
    format!(
        r#"\expandafter\def\csname {prefix}{name}\endcsname {{\symbol{{"{hex}}}}}"#,
        prefix = style.symbol_prefix(),
    )
}
