use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Arrow,
    Release,
    Download,
    File,
    Package,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        if supports_unicode {
            match self {
                Icon::Success => theme::icons::SUCCESS,
                Icon::Error => theme::icons::ERROR,
                Icon::Warning => theme::icons::WARNING,
                Icon::Arrow => theme::icons::ARROW,
                Icon::Release => theme::icons::RELEASE,
                Icon::Download => theme::icons::DOWNLOAD,
                Icon::File => theme::icons::FILE,
                Icon::Package => theme::icons::PACKAGE,
            }
        } else {
            match self {
                Icon::Success => theme::icons_ascii::SUCCESS,
                Icon::Error => theme::icons_ascii::ERROR,
                Icon::Warning => theme::icons_ascii::WARNING,
                Icon::Arrow => theme::icons_ascii::ARROW,
                Icon::Release => theme::icons_ascii::RELEASE,
                Icon::Download => theme::icons_ascii::DOWNLOAD,
                Icon::File => theme::icons_ascii::FILE,
                Icon::Package => theme::icons_ascii::PACKAGE,
            }
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning => theme::colors::WARNING,
            Icon::Arrow | Icon::File => theme::colors::DIM,
            Icon::Release | Icon::Download | Icon::Package => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}
