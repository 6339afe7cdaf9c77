//! Configuration module for faltex
//!
//! Priority, highest first:
//! 1. CLI flags (`--output`)
//! 2. Config file passed with `--config`
//! 3. Built-in defaults

mod loader;
mod types;

pub use loader::ConfigWarning;
pub use types::{
    Config, FontsConfig, LayoutConfig, OutputConfig, SourceConfig, DEFAULT_API_URL,
    DEFAULT_OUTPUT_DIR,
};
