//! faltex CLI - Font Awesome to LaTeX package generator
//!
//! Usage: faltex [OPTIONS]
//!
//! Resolves the latest Font Awesome release, downloads the desktop archive
//! and writes a ready-to-build LaTeX package into the output directory.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use faltex::infrastructure::ActiveWorkspace;
use faltex::presentation::Cli;
use faltex::FaltexError;

use crate::ui::context::UiContext;

mod commands;
mod ui;

fn main() {
    let cli = Cli::parse();
    let ui_ctx = UiContext::new(cli.json, cli.verbose, cli.color);

    if let Err(err) = run(&cli, ui_ctx) {
        if matches!(
            err.downcast_ref::<FaltexError>(),
            Some(FaltexError::Interrupted)
        ) {
            report_interrupt(ui_ctx.json);
            return;
        }
        ui::error::print_error(&err, &ui_ctx);
        std::process::exit(1);
    }
}

fn run(cli: &Cli, ui_ctx: UiContext) -> Result<()> {
    let running = Arc::new(AtomicBool::new(true));
    let active = ActiveWorkspace::new();

    // A blocked network read never returns to the pipeline's interrupt checks,
    // so the handler removes the working directory and ends the process itself.
    let handler_running = running.clone();
    let handler_active = active.clone();
    ctrlc::set_handler(move || {
        handler_running.store(false, Ordering::SeqCst);
        handler_active.remove_now();
        report_interrupt(ui_ctx.json);
        std::process::exit(0);
    })
    .context("installing Ctrl+C handler")?;

    commands::generate::cmd_generate(cli, ui_ctx, running, active)
}

fn report_interrupt(json: bool) {
    if json {
        let _ = ui::json::emit(serde_json::json!({ "event": "interrupted" }));
    } else {
        eprintln!("\nInterrupted, temporary files removed.");
    }
}
