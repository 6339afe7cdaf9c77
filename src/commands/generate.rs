//! Generate command handler
//!
//! Loads configuration, wires the use case and picks the event sink.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use anyhow::{Context, Result};

use faltex::application::GenerateOptions;
use faltex::config::Config;
use faltex::infrastructure::{ActiveWorkspace, JsonEventSink};
use faltex::presentation::{create_generate_use_case, Cli};
use faltex::GenerateEventSink;

use crate::ui::console::ConsoleEventSink;
use crate::ui::context::UiContext;
use crate::ui::output::print_config_warnings;
use crate::ui::views::generate::{render_generate_header, render_generate_summary};

/// Execute the generate command
///
/// `running` and `active` are shared with the Ctrl+C handler.
pub fn cmd_generate(
    cli: &Cli,
    ui: UiContext,
    running: Arc<AtomicBool>,
    active: ActiveWorkspace,
) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(path)
                .with_context(|| format!("loading config {}", path.display()))?;
            print_config_warnings(&warnings, &ui);
            config
        }
        None => Config::default(),
    };
    if let Some(dir) = &cli.output {
        config = config.with_output_dir(dir);
    }

    let options = GenerateOptions::from_config(&config);
    let use_case =
        create_generate_use_case(&config.source, running).with_active_workspace(active);

    if !ui.json {
        print!(
            "{}",
            render_generate_header(
                &options.output_dir,
                cli.config.as_deref(),
                ui.color,
                ui.unicode
            )
        );
        println!();
    }

    let sink: Arc<dyn GenerateEventSink> = if ui.json && ui.verbose > 0 {
        Arc::new(JsonEventSink::stdout())
    } else if ui.json {
        Arc::new(JsonEventSink::stdout().without_progress())
    } else {
        Arc::new(ConsoleEventSink::new(ui))
    };

    let result = use_case.execute_with_events(&options, sink)?;

    if !ui.json {
        println!();
        print!(
            "{}",
            render_generate_summary(&result, ui.color, ui.unicode)
        );
    }

    Ok(())
}
