//! Local file system adapters
//!
//! - `workspace` - disposable working directory
//! - `extract` - zip extraction and root discovery
//! - `fonts` - font copy/rename into the output directory
//! - `manifest` - `icons.json` loading
//! - `writer` - generated text file output

mod extract;
mod fonts;
mod manifest;
mod workspace;
mod writer;

pub use extract::{extract_archive, extract_release, find_single_root};
pub use fonts::{normalize_fonts, OUTPUT_FONTS_DIR};
pub use manifest::{load_manifest, parse_manifest};
pub use workspace::{ActiveWorkspace, ActiveWorkspaceGuard, Workspace};
pub use writer::write_text;
