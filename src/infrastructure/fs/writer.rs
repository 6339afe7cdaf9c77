//! Generated text file output

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::FaltexResult;

/// Write `content` to `dir/name` as UTF-8, replacing any existing file
pub fn write_text(dir: &Path, name: &str, content: &str) -> FaltexResult<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(name);
    fs::write(&path, content)?;
    Ok(path)
}
