//! Font normalization: copy `.otf` files into `<output>/fonts` without spaces

use std::collections::HashMap;
use std::fs::{self, File};
use std::path::Path;

use crate::domain::entities::FontFileRecord;
use crate::error::{FaltexError, FaltexResult};

/// Subdirectory of the output directory receiving the fonts
pub const OUTPUT_FONTS_DIR: &str = "fonts";

/// Copy every `*.<extension>` file in `source_dir` into `fonts_dir` under its
/// space-stripped name.
///
/// Files are processed in filename order. A collision between two renamed
/// names is reported before anything is copied. Content, permissions and
/// modification time are preserved; the source tree is not touched.
pub fn normalize_fonts(
    source_dir: &Path,
    extension: &str,
    fonts_dir: &Path,
) -> FaltexResult<Vec<FontFileRecord>> {
    if !source_dir.is_dir() {
        return Err(FaltexError::layout(
            format!("font directory '{}'", display_name(source_dir)),
            source_dir,
        ));
    }

    let mut names = Vec::new();
    for entry in fs::read_dir(source_dir)? {
        let entry = entry?;
        let path = entry.path();
        let matches_ext = path
            .extension()
            .is_some_and(|ext| ext.to_string_lossy() == extension);
        if entry.file_type()?.is_file() && matches_ext {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();

    let records: Vec<FontFileRecord> = names
        .iter()
        .map(|name| FontFileRecord::new(name.as_str(), fonts_dir))
        .collect();
    check_collisions(&records)?;

    fs::create_dir_all(fonts_dir)?;
    for record in &records {
        copy_preserving(&source_dir.join(record.original_name()), record.path())?;
    }

    Ok(records)
}

fn check_collisions(records: &[FontFileRecord]) -> FaltexResult<()> {
    let mut seen: HashMap<&str, &str> = HashMap::new();
    for record in records {
        if let Some(first) = seen.insert(record.renamed_name(), record.original_name()) {
            return Err(FaltexError::FontNameCollision {
                first: first.to_string(),
                second: record.original_name().to_string(),
                renamed: record.renamed_name().to_string(),
            });
        }
    }
    Ok(())
}

/// `fs::copy` keeps permissions; the modification time is restored after.
///
/// An existing `dest` is removed first. The mtime is set through a read-only
/// handle, which works for read-only copies.
fn copy_preserving(src: &Path, dest: &Path) -> FaltexResult<()> {
    if fs::symlink_metadata(dest).is_ok() {
        fs::remove_file(dest)?;
    }
    fs::copy(src, dest)?;
    let modified = fs::metadata(src)?.modified()?;
    File::open(dest)?.set_modified(modified)?;
    Ok(())
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
