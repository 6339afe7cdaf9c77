use faltex::config::ConfigWarning;

use crate::ui::blocks::warning::WarningBlock;
use crate::ui::context::UiContext;

pub fn print_config_warnings(warnings: &[ConfigWarning], ui: &UiContext) {
    if ui.json {
        for w in warnings {
            let _ = crate::ui::json::emit(serde_json::json!({
                "event": "warning",
                "kind": "unknown_config_key",
                "key": w.key,
                "file": w.file.display().to_string(),
                "line": w.line,
                "suggestion": w.suggestion,
            }));
        }
        return;
    }

    if warnings.is_empty() {
        return;
    }
    eprint!(
        "{}",
        render_config_warnings(warnings, ui.error_color, ui.unicode)
    );
}

fn render_config_warnings(
    warnings: &[ConfigWarning],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut block = WarningBlock::new("Config Warnings");
    for w in warnings {
        match w.line {
            Some(line) => block.add_line(format!(
                "Unknown config key '{}' in {}:{}",
                w.key,
                w.file.display(),
                line
            )),
            None => block.add_line(format!(
                "Unknown config key '{}' in {}",
                w.key,
                w.file.display()
            )),
        }

        if let Some(suggestion) = &w.suggestion {
            block.add_line(format!("  Did you mean '{}'?", suggestion));
        }
    }
    block.render(supports_color, supports_unicode)
}
