//! Archive extraction and root discovery

use std::fs::File;
use std::path::{Path, PathBuf};

use crate::error::{FaltexError, FaltexResult};

/// Extract the zip at `archive` into `dest`.
///
/// Entry names are sanitized by the `zip` crate; an entry that would land
/// outside `dest` fails the extraction.
pub fn extract_archive(archive: &Path, dest: &Path) -> FaltexResult<()> {
    let file = File::open(archive)?;
    let mut zip = zip::ZipArchive::new(file).map_err(|e| FaltexError::archive(archive, e))?;
    std::fs::create_dir_all(dest)?;
    zip.extract(dest)
        .map_err(|e| FaltexError::archive(archive, e))?;
    Ok(())
}

/// The single directory directly under `extracted`.
///
/// Zero directories or more than one are both archive errors; we never pick
/// one of several candidates.
pub fn find_single_root(extracted: &Path) -> FaltexResult<PathBuf> {
    let mut dirs = Vec::new();
    for entry in std::fs::read_dir(extracted)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            dirs.push(entry.path());
        }
    }
    dirs.sort();

    match dirs.len() {
        0 => Err(FaltexError::archive(
            extracted,
            "archive root contains no directory",
        )),
        1 => Ok(dirs.remove(0)),
        _ => {
            let names: Vec<String> = dirs
                .iter()
                .filter_map(|d| d.file_name())
                .map(|n| n.to_string_lossy().into_owned())
                .collect();
            Err(FaltexError::archive(
                extracted,
                format!(
                    "expected one top-level directory, found {}: {}",
                    names.len(),
                    names.join(", ")
                ),
            ))
        }
    }
}

/// Extract `archive` into `dest` and return its single top-level directory
pub fn extract_release(archive: &Path, dest: &Path) -> FaltexResult<PathBuf> {
    extract_archive(archive, dest)?;
    find_single_root(dest)
}
