use crossterm::style::Color;

/// Design tokens for the faltex CLI UI.
///
/// - Only 5 semantic colors (`colors::*`)
/// - All icons and borders come from this module
pub mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const ARROW: &str = "↳";
    pub const RELEASE: &str = "◆";
    pub const DOWNLOAD: &str = "⇣";
    pub const FILE: &str = "•";
    pub const PACKAGE: &str = "📦";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const ARROW: &str = "[>]";
    pub const RELEASE: &str = "[TAG]";
    pub const DOWNLOAD: &str = "[GET]";
    pub const FILE: &str = "-";
    pub const PACKAGE: &str = "[FALTEX]";
}

pub mod borders {
    pub const TOP_LEFT: &str = "╭";
    pub const TOP_RIGHT: &str = "╮";
    pub const BOTTOM_LEFT: &str = "╰";
    pub const BOTTOM_RIGHT: &str = "╯";
    pub const HORIZONTAL: &str = "─";
    pub const VERTICAL: &str = "│";
}

pub mod borders_ascii {
    pub const TOP_LEFT: &str = "+";
    pub const TOP_RIGHT: &str = "+";
    pub const BOTTOM_LEFT: &str = "+";
    pub const BOTTOM_RIGHT: &str = "+";
    pub const HORIZONTAL: &str = "-";
    pub const VERTICAL: &str = "|";
}

/// Progress bar glyphs: (filled, empty)
pub mod bar {
    pub const UNICODE: (&str, &str) = ("━", "─");
    pub const ASCII: (&str, &str) = ("=", "-");
}
