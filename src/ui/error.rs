use std::path::Path;

use faltex::{ErrorKind, FaltexError};

use crate::ui::blocks::error::ErrorBlock;
use crate::ui::context::UiContext;

/// Render `err` for stderr using the run's color and unicode decisions
pub fn format_error(err: &anyhow::Error, ui: &UiContext) -> String {
    format_error_with(err, ui.error_color, ui.unicode)
}

fn format_error_with(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let Some(faltex_err) = err.downcast_ref::<FaltexError>() else {
        return format!("[ERROR] {:#}\n", err);
    };

    let mut block = ErrorBlock::new(faltex_err.kind().as_str(), format!("{:#}", err));
    if let Some(path) = error_path(faltex_err) {
        block = block.with_location(path.display().to_string());
    }
    if let Some(fix) = fix_hint(faltex_err) {
        block = block.with_fix(fix);
    }
    block.render(supports_color, supports_unicode)
}

pub fn print_error(err: &anyhow::Error, ui: &UiContext) {
    let faltex_err = err.downcast_ref::<FaltexError>();

    if ui.json {
        let _ = crate::ui::json::emit(serde_json::json!({
            "event": "error",
            "kind": faltex_err.map(|e| e.kind().as_str()),
            "message": format!("{:#}", err),
        }));
        return;
    }

    if ui.caps.is_ci && std::env::var("GITHUB_ACTIONS").is_ok() {
        println!(
            "{}",
            crate::ui::ci::github_error_annotation(
                &format!("{:#}", err),
                faltex_err.and_then(error_path),
            )
        );
    }

    eprint!("{}", format_error(err, ui));
}

fn error_path(err: &FaltexError) -> Option<&Path> {
    match err {
        FaltexError::Archive { path, .. } => Some(path.as_path()),
        FaltexError::Layout { path, .. } => Some(path.as_path()),
        FaltexError::Parse { file, .. } => Some(file.as_path()),
        _ => None,
    }
}

fn fix_hint(err: &FaltexError) -> Option<&'static str> {
    match err {
        FaltexError::FontNameCollision { .. } => {
            Some("Two fonts differ only by spaces; remove one from the release or rename it.")
        }
        _ => match err.kind() {
            ErrorKind::Network => {
                Some("Check your network connection and that the release API is reachable.")
            }
            ErrorKind::Resolution => Some(
                "The release has no desktop archive; set [source] asset_keyword in --config.",
            ),
            ErrorKind::Archive => Some("The download may be corrupt; run faltex again."),
            ErrorKind::Layout => {
                Some("The release layout changed; adjust the [layout] section in --config.")
            }
            ErrorKind::Parse => Some("Fix the file named above and try again."),
            ErrorKind::Io => Some("Check that the output directory is writable."),
            ErrorKind::Interrupted => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn layout_error_shows_kind_path_and_fix() {
        let err = anyhow::Error::from(FaltexError::Layout {
            what: "icon manifest".to_string(),
            path: PathBuf::from("/tmp/fa/metadata/icons.json"),
        });

        let rendered = format_error_with(&err, false, false);
        assert!(rendered.contains("ERROR (layout)"));
        assert!(rendered.contains("/tmp/fa/metadata/icons.json"));
        assert!(rendered.contains("FIX:"));
    }

    #[test]
    fn context_is_kept_in_message() {
        let err = anyhow::Error::from(FaltexError::Network {
            url: "https://example.test".to_string(),
            message: "status 404".to_string(),
        })
        .context("resolving latest release");

        let rendered = format_error_with(&err, false, true);
        assert!(rendered.contains("ERROR (network)"));
        assert!(rendered.contains("resolving latest release"));
        assert!(rendered.contains("status 404"));
    }

    fn ui_with(color: Option<faltex::presentation::ColorWhen>, terminal_color: bool) -> UiContext {
        let caps = crate::ui::terminal::TerminalCapabilities {
            is_tty: terminal_color,
            supports_color: terminal_color,
            stderr_supports_color: terminal_color,
            supports_unicode: false,
            is_ci: false,
            width: 80,
        };
        UiContext::from_caps(false, 0, color, caps)
    }

    #[test]
    fn color_flag_controls_error_block() {
        use faltex::presentation::ColorWhen;
        let err = anyhow::Error::from(FaltexError::Interrupted);

        let forced = format_error(&err, &ui_with(Some(ColorWhen::Always), false));
        assert!(forced.contains('\u{1b}'));

        let disabled = format_error(&err, &ui_with(Some(ColorWhen::Never), true));
        assert!(!disabled.contains('\u{1b}'));
    }

    #[test]
    fn foreign_error_is_plain() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(format_error_with(&err, false, true), "[ERROR] something else\n");
    }

    #[test]
    fn collision_gets_specific_fix() {
        let err = FaltexError::FontNameCollision {
            first: "A B.otf".to_string(),
            second: "AB.otf".to_string(),
            renamed: "AB.otf".to_string(),
        };
        assert!(fix_hint(&err).is_some_and(|f| f.contains("spaces")));
    }
}
