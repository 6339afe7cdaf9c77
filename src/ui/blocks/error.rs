use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};

/// Boxed error with an optional location and fix hint
#[derive(Debug, Clone)]
pub struct ErrorBlock {
    kind: String,
    location: Option<String>,
    message: String,
    fix: Option<String>,
}

impl ErrorBlock {
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            location: None,
            message: message.into(),
            fix: None,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_fix(mut self, fix: impl Into<String>) -> Self {
        self.fix = Some(fix.into());
        self
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let title = format!(
            "{} {}",
            Icon::Error.colored(supports_color, supports_unicode),
            ColoredText::error(format!("ERROR ({})", self.kind))
                .bold()
                .render(supports_color)
        );
        let mut b = Box::with_title(title).style(BoxStyle::Error);

        if let Some(location) = &self.location {
            b.add_line(ColoredText::dim(location.as_str()).render(supports_color));
        }
        b.add_empty();
        b.add_line(self.message.as_str());

        if let Some(fix) = &self.fix {
            b.add_empty();
            b.add_line(format!("FIX: {}", fix));
        }

        b.render(supports_color, supports_unicode)
    }
}
