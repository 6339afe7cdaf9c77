use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};

/// Boxed list of non-fatal problems
#[derive(Debug, Clone)]
pub struct WarningBlock {
    title: String,
    lines: Vec<String>,
}

impl WarningBlock {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
        }
    }

    pub fn add_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let header = format!(
            "{} {}",
            Icon::Warning.colored(supports_color, supports_unicode),
            ColoredText::warning(self.title.as_str())
                .bold()
                .render(supports_color)
        );
        let mut b = Box::with_title(header).style(BoxStyle::Warning);
        b.add_empty();
        for line in &self.lines {
            b.add_line(line.as_str());
        }
        b.render(supports_color, supports_unicode)
    }
}
