use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use faltex::presentation::ColorWhen;

/// Resolved output settings for one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbose: u8,
    pub caps: TerminalCapabilities,
    pub color: bool,
    /// Color decision for stderr, which may be a terminal when stdout is not
    pub error_color: bool,
    pub unicode: bool,
    /// Redraw the download line in place
    pub animation: bool,
}

impl UiContext {
    pub fn new(json: bool, verbose: u8, cli_color: Option<ColorWhen>) -> Self {
        Self::from_caps(json, verbose, cli_color, detect_capabilities())
    }

    pub(crate) fn from_caps(
        json: bool,
        verbose: u8,
        cli_color: Option<ColorWhen>,
        caps: TerminalCapabilities,
    ) -> Self {
        let resolve = |stream_color: bool| match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => stream_color && !caps.is_ci,
        };

        Self {
            json,
            verbose,
            caps,
            color: resolve(caps.supports_color),
            error_color: resolve(caps.stderr_supports_color),
            unicode: caps.supports_unicode,
            animation: !json && caps.is_tty && !caps.is_ci,
        }
    }
}
