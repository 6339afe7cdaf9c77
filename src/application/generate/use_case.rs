//! Generate Use Case
//!
//! Orchestrates the generation flow:
//! 1. Resolve the latest release
//! 2. Download the archive into a disposable workspace
//! 3. Extract it and locate the single root directory
//! 4. Copy fonts into `<output>/fonts` under space-free names
//! 5. Load the icon manifest
//! 6. Render and write the package and companion files
//!
//! The workspace is dropped on every exit path. A cleared running flag
//! (Ctrl+C) is observed between stages and between download chunks and
//! turns into [`FaltexError::Interrupted`]. While it exists the workspace is
//! also published through [`ActiveWorkspace`] so an interrupt handler can
//! remove it without waiting for a blocked read.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::domain::entities::Release;
use crate::domain::ports::{
    ArchiveSource, GenerateEvent, GenerateEventSink, NoopEventSink, ReleaseSource,
};
use crate::domain::services::{
    render_example, render_makefile, render_package, render_readme, PackageMeta, EXAMPLE_FILE,
    MAKEFILE_FILE, README_FILE,
};
use crate::domain::value_objects::GenerationStamp;
use crate::error::{FaltexError, FaltexResult};
use crate::infrastructure::fs::{
    extract_release, load_manifest, normalize_fonts, write_text, ActiveWorkspace, Workspace,
    OUTPUT_FONTS_DIR,
};

use super::options::GenerateOptions;
use super::result::GenerateResult;

/// Generate use case, parameterized by its network ports
pub struct GenerateUseCase<R, A>
where
    R: ReleaseSource,
    A: ArchiveSource,
{
    releases: R,
    archives: A,
    running: Arc<AtomicBool>,
    active: ActiveWorkspace,
}

impl<R, A> GenerateUseCase<R, A>
where
    R: ReleaseSource,
    A: ArchiveSource,
{
    pub fn new(releases: R, archives: A) -> Self {
        Self {
            releases,
            archives,
            running: Arc::new(AtomicBool::new(true)),
            active: ActiveWorkspace::new(),
        }
    }

    /// Share the flag cleared by the Ctrl+C handler
    pub fn with_running_flag(mut self, running: Arc<AtomicBool>) -> Self {
        self.running = running;
        self
    }

    /// Publish the working directory to `active` while it exists
    pub fn with_active_workspace(mut self, active: ActiveWorkspace) -> Self {
        self.active = active;
        self
    }

    /// Execute without event reporting
    pub fn execute(&self, options: &GenerateOptions) -> FaltexResult<GenerateResult> {
        self.execute_with_events(options, Arc::new(NoopEventSink))
    }

    /// Execute, reporting progress to `event_sink`
    pub fn execute_with_events(
        &self,
        options: &GenerateOptions,
        event_sink: Arc<dyn GenerateEventSink>,
    ) -> FaltexResult<GenerateResult> {
        let stamp = options.stamp.unwrap_or_else(GenerationStamp::now);
        let detailed = event_sink.wants_detailed_events();
        let progress = event_sink.wants_progress_events();

        event_sink.on_event(GenerateEvent::Started {
            output_dir: options.output_dir.clone(),
        });

        self.check_running()?;
        let release = self.releases.latest_release()?;
        event_sink.on_event(GenerateEvent::ReleaseResolved {
            version: release.version().to_string(),
            archive_url: release.archive_url().to_string(),
        });

        self.check_running()?;
        let workspace = Workspace::create(options.work_parent.as_deref())?;
        let registration = self.active.register(&workspace);
        let archive_bytes = self.download(&release, &workspace, event_sink.as_ref(), progress)?;

        self.check_running()?;
        let root = extract_release(
            &workspace.archive_path(release.version()),
            &workspace.extract_dir(),
        )?;
        event_sink.on_event(GenerateEvent::Extracted { root: root.clone() });

        self.check_running()?;
        let fonts = normalize_fonts(
            &root.join(&options.layout.fonts_dir),
            &options.layout.font_extension,
            &options.output_dir.join(OUTPUT_FONTS_DIR),
        )?;
        if detailed {
            for font in &fonts {
                event_sink.on_event(GenerateEvent::FontCopied {
                    original: font.original_name().to_string(),
                    renamed: font.renamed_name().to_string(),
                    role: options.roles.detect(font.renamed_name()),
                });
            }
        }

        self.check_running()?;
        let manifest = load_manifest(&root.join(&options.layout.manifest_path))?;
        event_sink.on_event(GenerateEvent::ManifestLoaded {
            icon_count: manifest.len(),
        });

        self.check_running()?;
        let meta = PackageMeta::new(release.version(), &options.fallback_major, stamp);
        let rendered = render_package(&meta, &fonts, &options.roles, &manifest);
        let example_stem = EXAMPLE_FILE.trim_end_matches(".tex");

        let files = [
            (meta.sty_file_name(), rendered.content),
            (EXAMPLE_FILE.to_string(), render_example(&meta)),
            (README_FILE.to_string(), render_readme(&meta, rendered.icon_count)),
            (
                MAKEFILE_FILE.to_string(),
                render_makefile(&meta, &options.latex_engine, example_stem),
            ),
        ];

        let mut written: Vec<PathBuf> = Vec::with_capacity(files.len());
        for (name, content) in &files {
            let path = write_text(&options.output_dir, name, content)?;
            event_sink.on_event(GenerateEvent::FileWritten { path: path.clone() });
            written.push(path);
        }

        drop(registration);
        workspace.close()?;

        event_sink.on_event(GenerateEvent::Completed {
            version: release.version().to_string(),
            package_name: meta.package_name(),
            font_count: fonts.len(),
            icon_count: rendered.icon_count,
        });

        Ok(GenerateResult {
            package_name: meta.package_name(),
            output_dir: options.output_dir.clone(),
            manifest_size: manifest.len(),
            icon_count: rendered.icon_count,
            release,
            fonts,
            written,
            archive_bytes,
        })
    }

    fn download(
        &self,
        release: &Release,
        workspace: &Workspace,
        event_sink: &dyn GenerateEventSink,
        progress: bool,
    ) -> FaltexResult<u64> {
        let dest = workspace.archive_path(release.version());
        event_sink.on_event(GenerateEvent::DownloadStarted {
            url: release.archive_url().to_string(),
            dest: dest.clone(),
        });

        let bytes = self
            .archives
            .download(release.archive_url(), &dest, &mut |transfer| {
                self.check_running()?;
                if progress {
                    event_sink.on_event(GenerateEvent::DownloadProgress(transfer));
                }
                Ok(())
            })?;

        event_sink.on_event(GenerateEvent::DownloadFinished { bytes });
        Ok(bytes)
    }

    fn check_running(&self) -> FaltexResult<()> {
        if self.running.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(FaltexError::Interrupted)
        }
    }
}
