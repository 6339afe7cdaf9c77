use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};

/// Boxed end-of-run summary
#[derive(Debug, Clone)]
pub struct ResultSummary {
    title: String,
    stats: Vec<(String, String)>,
    next_step: Option<String>,
}

impl ResultSummary {
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            stats: Vec::new(),
            next_step: None,
        }
    }

    pub fn add_stat(&mut self, label: impl Into<String>, value: impl ToString) {
        self.stats.push((label.into(), value.to_string()));
    }

    pub fn with_next_step(&mut self, hint: impl Into<String>) {
        self.next_step = Some(hint.into());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let header = format!(
            "{} {}",
            Icon::Success.colored(supports_color, supports_unicode),
            ColoredText::success(self.title.as_str())
                .bold()
                .render(supports_color)
        );

        let mut b = Box::with_title(header).style(BoxStyle::Success);
        b.add_empty();

        let label_width = self.stats.iter().map(|(l, _)| l.len()).max().unwrap_or(0);
        for (label, value) in &self.stats {
            b.add_line(format!("{:<width$}  {}", label, value, width = label_width));
        }

        if let Some(next_step) = &self.next_step {
            b.add_empty();
            b.add_line(format!(
                "{} {} {}",
                Icon::Arrow.colored(supports_color, supports_unicode),
                ColoredText::dim("Next:").render(supports_color),
                next_step
            ));
        }

        b.render(supports_color, supports_unicode)
    }
}
