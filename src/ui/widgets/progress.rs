use crate::ui::theme;

/// Download progress line.
///
/// With a known total it renders a bar and a percentage; without one only
/// the byte count is shown.
#[derive(Debug, Clone)]
pub struct DownloadBar {
    downloaded: u64,
    total: Option<u64>,
    width: usize,
    message: String,
}

impl DownloadBar {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            downloaded: 0,
            total: None,
            width: 24,
            message: message.into(),
        }
    }

    pub fn set(&mut self, downloaded: u64, total: Option<u64>) {
        self.downloaded = downloaded;
        self.total = total;
    }

    pub fn set_width(&mut self, width: usize) {
        self.width = width.max(1);
    }

    pub fn percent(&self) -> Option<u64> {
        match self.total {
            Some(total) if total > 0 => Some(self.downloaded.min(total) * 100 / total),
            _ => None,
        }
    }

    pub fn render(&self, supports_unicode: bool) -> String {
        let mut out = String::new();
        if !self.message.is_empty() {
            out.push_str(&self.message);
            out.push(' ');
        }

        match (self.total, self.percent()) {
            (Some(total), Some(pct)) => {
                let (fill, empty) = if supports_unicode {
                    theme::bar::UNICODE
                } else {
                    theme::bar::ASCII
                };
                let filled = (pct as usize * self.width) / 100;
                out.push_str(&fill.repeat(filled));
                out.push_str(&empty.repeat(self.width - filled));
                out.push_str(&format!(
                    "  {} / {} ({}%)",
                    format_bytes(self.downloaded),
                    format_bytes(total),
                    pct
                ));
            }
            _ => out.push_str(&format_bytes(self.downloaded)),
        }
        out
    }
}

pub fn format_bytes(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    const GB: f64 = MB * 1024.0;

    let b = bytes as f64;
    if b < KB {
        format!("{} B", bytes)
    } else if b < MB {
        format!("{:.1} KB", b / KB)
    } else if b < GB {
        format!("{:.1} MB", b / MB)
    } else {
        format!("{:.1} GB", b / GB)
    }
}
