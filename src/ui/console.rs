//! Console Event Sink
//!
//! Human-readable progress for the generate pipeline. The download line is
//! redrawn in place on a TTY; elsewhere only start and finish are printed.

use std::cell::{Cell, RefCell};
use std::io::{self, Write};
use std::path::Path;
use std::time::{Duration, Instant};

use crossterm::{cursor, terminal, QueueableCommand};
use faltex::{GenerateEvent, GenerateEventSink};

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::views::generate::{
    render_detail, render_download_done, render_font_copied, render_step,
};
use crate::ui::widgets::progress::DownloadBar;

const REDRAW_INTERVAL: Duration = Duration::from_millis(80);

pub struct ConsoleEventSink {
    ui: UiContext,
    bar: RefCell<Option<DownloadBar>>,
    last_draw: Cell<Option<Instant>>,
}

impl ConsoleEventSink {
    pub fn new(ui: UiContext) -> Self {
        Self {
            ui,
            bar: RefCell::new(None),
            last_draw: Cell::new(None),
        }
    }

    fn step(&self, icon: Icon, message: &str) {
        println!("{}", render_step(icon, message, self.ui.color, self.ui.unicode));
    }

    fn detail(&self, message: &str) {
        if self.ui.verbose > 0 {
            println!("{}", render_detail(message, self.ui.color, self.ui.unicode));
        }
    }

    fn redraw(&self, line: &str) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.queue(cursor::MoveToColumn(0))?;
        out.queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
        out.write_all(line.as_bytes())?;
        out.flush()
    }

    fn clear_line(&self) -> io::Result<()> {
        let mut out = io::stdout().lock();
        out.queue(cursor::MoveToColumn(0))?;
        out.queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
        out.flush()
    }

    fn due_for_redraw(&self, finished: bool) -> bool {
        let now = Instant::now();
        let due = finished
            || self
                .last_draw
                .get()
                .map_or(true, |last| now.duration_since(last) >= REDRAW_INTERVAL);
        if due {
            self.last_draw.set(Some(now));
        }
        due
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

impl GenerateEventSink for ConsoleEventSink {
    fn on_event(&self, event: GenerateEvent) {
        match event {
            GenerateEvent::Started { .. } | GenerateEvent::Completed { .. } => {}

            GenerateEvent::ReleaseResolved {
                version,
                archive_url,
            } => {
                self.step(Icon::Release, &format!("Latest release {}", version));
                self.detail(&archive_url);
            }

            GenerateEvent::DownloadStarted { dest, .. } => {
                let message = format!("Downloading {}", file_name(&dest));
                if !self.ui.animation {
                    self.step(Icon::Download, &message);
                }
                let mut bar = DownloadBar::new(format!(
                    "{} {}",
                    Icon::Download.colored(self.ui.color, self.ui.unicode),
                    message
                ));
                bar.set_width(usize::from(self.ui.caps.width / 4).clamp(10, 30));
                *self.bar.borrow_mut() = Some(bar);
                self.last_draw.set(None);
            }

            GenerateEvent::DownloadProgress(progress) => {
                if !self.ui.animation {
                    return;
                }
                let finished = progress.total == Some(progress.downloaded);
                if !self.due_for_redraw(finished) {
                    return;
                }
                let line = match self.bar.borrow_mut().as_mut() {
                    Some(bar) => {
                        bar.set(progress.downloaded, progress.total);
                        bar.render(self.ui.unicode)
                    }
                    None => return,
                };
                let _ = self.redraw(&line);
            }

            GenerateEvent::DownloadFinished { bytes } => {
                if self.ui.animation {
                    let _ = self.clear_line();
                }
                self.bar.borrow_mut().take();
                self.step(Icon::Success, &render_download_done(bytes));
            }

            GenerateEvent::Extracted { root } => {
                self.step(Icon::Success, &format!("Extracted {}", file_name(&root)));
            }

            GenerateEvent::FontCopied {
                original,
                renamed,
                role,
            } => {
                self.detail(&render_font_copied(&original, &renamed, role));
            }

            GenerateEvent::ManifestLoaded { icon_count } => {
                self.step(
                    Icon::Success,
                    &format!("Loaded {} icons from manifest", icon_count),
                );
            }

            GenerateEvent::FileWritten { path } => {
                self.detail(&format!("Wrote {}", path.display()));
            }
        }
    }
}
