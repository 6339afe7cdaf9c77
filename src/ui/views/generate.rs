use std::path::Path;

use faltex::{GenerateResult, IconStyle};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::progress::format_bytes;

pub fn render_generate_header(
    output_dir: &Path,
    config_path: Option<&Path>,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Package, "faltex");
    header.add("Output", output_dir.display().to_string());
    if let Some(path) = config_path {
        header.add("Config", path.display().to_string());
    }
    header.render(supports_color, supports_unicode)
}

pub fn render_step(icon: Icon, message: &str, supports_color: bool, supports_unicode: bool) -> String {
    format!("{} {}", icon.colored(supports_color, supports_unicode), message)
}

pub fn render_detail(message: &str, supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "  {} {}",
        Icon::File.colored(supports_color, supports_unicode),
        ColoredText::dim(message).render(supports_color)
    )
}

pub fn render_font_copied(original: &str, renamed: &str, role: Option<IconStyle>) -> String {
    let role = role.map(|r| r.label()).unwrap_or("unused");
    if original == renamed {
        format!("{} ({})", renamed, role)
    } else {
        format!("{} -> {} ({})", original, renamed, role)
    }
}

pub fn render_download_done(bytes: u64) -> String {
    format!("Downloaded {}", format_bytes(bytes))
}

pub fn render_generate_summary(
    result: &GenerateResult,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut summary = ResultSummary::success("Package Generated");
    summary.add_stat("Version", result.release.version());
    summary.add_stat("Package", &result.package_name);
    summary.add_stat(
        "Fonts",
        format!("{} ({} renamed)", result.font_count(), result.renamed_count()),
    );
    summary.add_stat(
        "Icons",
        format!("{} macros from {} manifest entries", result.icon_count, result.manifest_size),
    );
    summary.add_stat("Output", result.output_dir.display());
    summary.with_next_step(format!("cd {} && make", result.output_dir.display()));

    summary.render(supports_color, supports_unicode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use faltex::{FontFileRecord, Release};
    use std::path::PathBuf;

    fn result() -> GenerateResult {
        let out = PathBuf::from("out");
        GenerateResult {
            release: Release::new("6.5.0", "https://example.test/fa.zip"),
            package_name: "fontawesome6".to_string(),
            output_dir: out.clone(),
            fonts: vec![FontFileRecord::new(
                "Font Awesome 6 Brands-Regular-400.otf",
                &out.join("fonts"),
            )],
            manifest_size: 3,
            icon_count: 4,
            written: Vec::new(),
            archive_bytes: 1024,
        }
    }

    #[test]
    fn summary_lists_version_and_counts() {
        let rendered = render_generate_summary(&result(), false, false);
        assert!(rendered.contains("[OK] Package Generated"));
        assert!(rendered.contains("6.5.0"));
        assert!(rendered.contains("1 (1 renamed)"));
        assert!(rendered.contains("4 macros from 3 manifest entries"));
        assert!(rendered.contains("cd out && make"));
    }

    #[test]
    fn header_shows_output_and_config() {
        let rendered = render_generate_header(
            Path::new("pkg"),
            Some(Path::new("faltex.toml")),
            false,
            false,
        );
        assert!(rendered.contains("Output: pkg"));
        assert!(rendered.contains("Config: faltex.toml"));
    }

    #[test]
    fn font_line_shows_rename_and_role() {
        assert_eq!(
            render_font_copied("A B Solid.otf", "ABSolid.otf", Some(IconStyle::Solid)),
            "A B Solid.otf -> ABSolid.otf (Solid)"
        );
        assert_eq!(render_font_copied("X.otf", "X.otf", None), "X.otf (unused)");
    }
}
